//! A dense 2D matrix stored as a single row-major allocation.

use std::ops::{Index, IndexMut};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    /// Allocate a `rows x cols` grid filled with `T::default()`.
    ///
    /// Returns `None` when the number of cells overflows or the allocation fails.
    pub fn try_new(rows: usize, cols: usize) -> Option<Self> {
        let len = rows.checked_mul(cols)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).ok()?;
        cells.resize(len, T::default());
        Some(Grid { rows, cols, cells })
    }

    /// Reset all cells to `T::default()`.
    pub fn clear(&mut self) {
        self.cells.fill(T::default());
    }
}

impl<T> Grid<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        (i < self.rows && j < self.cols).then(|| &self.cells[i * self.cols + j])
    }

    pub fn row(&self, i: usize) -> &[T] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.rows).map(move |i| self.row(i))
    }

    #[inline]
    fn idx(&self, (i, j): (usize, usize)) -> usize {
        assert!(
            i < self.rows && j < self.cols,
            "Index ({i}, {j}) out of bounds for {}x{} grid",
            self.rows,
            self.cols
        );
        i * self.cols + j
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, pos: (usize, usize)) -> &T {
        &self.cells[self.idx(pos)]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, pos: (usize, usize)) -> &mut T {
        let idx = self.idx(pos);
        &mut self.cells[idx]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn row_major_layout() {
        let mut g = Grid::<i32>::try_new(2, 3).unwrap();
        g[(1, 2)] = 5;
        g[(0, 1)] = 7;
        assert_eq!(g.row(0), &[0, 7, 0]);
        assert_eq!(g.row(1), &[0, 0, 5]);
        assert_eq!(g.get(2, 0), None);
        assert_eq!(g.iter_rows().count(), 2);
        g.clear();
        assert_eq!(g[(1, 2)], 0);
    }

    #[test]
    fn overflowing_size_is_rejected() {
        assert!(Grid::<u8>::try_new(usize::MAX, 2).is_none());
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_panics() {
        let g = Grid::<u8>::try_new(1, 1).unwrap();
        let _ = g[(0, 1)];
    }
}
