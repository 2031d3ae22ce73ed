//! Types shared between the edit distance engine and its consumers.
//!
//! The cost model is fixed: matches are free, insertions and deletions cost 1
//! and substitutions cost 2.

pub mod grid;
pub mod op;
pub mod path;

// Re-export types for convenience of `use ed_types::*;`.
pub use grid::*;
pub use op::*;
pub use path::*;

/// The cost of an alignment, or of a prefix of one.
pub type Cost = i32;

/// A borrowed sequence of comparable units.
pub type Seq<'a, T> = &'a [T];

/// Split a string into its `char`s, the atomic units used by the CLI.
pub fn to_units(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Convert a sequence of units back into a string.
pub fn units_to_string(s: &[char]) -> String {
    s.iter().collect()
}
