//! Edit distance engine.
//!
//! [`EditDistance`] fills the full `(n+1) x (m+1)` DP matrix for two sequences
//! under the cost model match=0, insert=1, delete=1, substitute=2. Besides the
//! distances it records, for every cell, the set of all operations that reach
//! the optimum, and it can trace back one optimal path.
//!
//! ```
//! let a: Vec<char> = "intention".chars().collect();
//! let b: Vec<char> = "execution".chars().collect();
//! let (cost, path) = ed_engine::align(&a, &b).unwrap();
//! assert_eq!(cost, 8);
//! assert_eq!(path.cost(), 8);
//! ```

mod error;
mod nw;


pub use error::EngineError;
pub use nw::EditDistance;

use ed_types::{Cost, Path};

/// Compute the distance between `a` and `b` and trace back one optimal path.
pub fn align<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Result<(Cost, Path<T>), EngineError> {
    let mut ed = EditDistance::new(a, b)?;
    let cost = ed.compute_distance();
    Ok((cost, ed.backtrack_path()?))
}

/// Only compute the distance between `a` and `b`.
pub fn distance<T: PartialEq>(a: &[T], b: &[T]) -> Result<Cost, EngineError> {
    Ok(EditDistance::new(a, b)?.compute_distance())
}
