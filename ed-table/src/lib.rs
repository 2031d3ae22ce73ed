//! Presentation of DP matrices.
//!
//! The engine only hands out [`Grid`]s; this crate attaches the source units
//! to the rows and the target units to the columns, with the empty-prefix row
//! and column labelled by the empty string.

mod export;

pub use export::*;

use ed_types::Grid;
use itertools::Itertools;
use std::fmt::{self, Display};

/// A matrix of rendered cells with one label per row and per column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    /// Used as the sheet name on export.
    pub name: String,
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    /// `cells[i][j]`, one inner `Vec` per row.
    pub cells: Vec<Vec<String>>,
}

/// Render `matrix` with the given units as labels.
///
/// `matrix` must have `row_units.len() + 1` rows and `col_units.len() + 1`
/// columns; row and column 0 get an empty label.
pub fn render<C: Display, L: Display>(
    name: &str,
    matrix: &Grid<C>,
    row_units: &[L],
    col_units: &[L],
) -> Table {
    assert_eq!(matrix.rows(), row_units.len() + 1, "One row label per unit");
    assert_eq!(matrix.cols(), col_units.len() + 1, "One column label per unit");

    let labels = |units: &[L]| {
        std::iter::once(String::new())
            .chain(units.iter().map(|u| u.to_string()))
            .collect_vec()
    };
    Table {
        name: name.to_string(),
        row_labels: labels(row_units),
        col_labels: labels(col_units),
        cells: matrix
            .iter_rows()
            .map(|row| row.iter().map(|c| c.to_string()).collect_vec())
            .collect_vec(),
    }
}

impl Table {
    pub fn rows(&self) -> usize {
        self.row_labels.len()
    }

    pub fn cols(&self) -> usize {
        self.col_labels.len()
    }
}

/// Right-aligned text grid, with the column labels on top and the row labels
/// in front.
impl Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self.row_labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let widths = (0..self.cols())
            .map(|j| {
                self.cells
                    .iter()
                    .map(|row| row[j].chars().count())
                    .chain([self.col_labels[j].chars().count()])
                    .max()
                    .unwrap_or(0)
            })
            .collect_vec();

        write!(f, "{:label_width$}", "")?;
        for (label, &w) in self.col_labels.iter().zip(&widths) {
            write!(f, "  {label:>w$}")?;
        }
        writeln!(f)?;
        for (label, row) in self.row_labels.iter().zip(&self.cells) {
            write!(f, "{label:<label_width$}")?;
            for (cell, &w) in row.iter().zip(&widths) {
                write!(f, "  {cell:>w$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ed_engine::EditDistance;
    use ed_types::to_units;

    fn ops_table(a: &str, b: &str) -> Table {
        let (a, b) = (to_units(a), to_units(b));
        let mut ed = EditDistance::new(&a, &b).unwrap();
        ed.compute_distance();
        render("Operations", ed.operations().unwrap(), &a, &b)
    }

    #[test]
    fn labels_and_cells() {
        let t = ops_table("ab", "ba");
        assert_eq!(t.row_labels, ["", "a", "b"]);
        assert_eq!(t.col_labels, ["", "b", "a"]);
        assert_eq!(t.cells[0], ["", "I", "I"]);
        assert_eq!(t.cells[1], ["D", "D,I,S", "M"]);
        assert_eq!(t.cells[2], ["D", "M", "D,I"]);
    }

    #[test]
    fn unequal_lengths() {
        let t = ops_table("abc", "x");
        assert_eq!((t.rows(), t.cols()), (4, 2));
    }

    #[test]
    fn text_rendering() {
        let t = ops_table("ab", "ba");
        assert_eq!(
            t.to_string(),
            "          b    a\n\
             \x20         I    I\n\
             a  D  D,I,S    M\n\
             b  D      M  D,I\n"
        );
    }

    #[test]
    #[should_panic]
    fn label_count_mismatch() {
        let g = Grid::<u8>::try_new(2, 2).unwrap();
        render("x", &g, &['a', 'b'], &['c']);
    }
}
