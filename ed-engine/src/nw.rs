//! Needleman-Wunsch style DP over the full edit graph, keeping all tied
//! parents of each cell.

use crate::EngineError;
use ed_types::*;
use log::{debug, trace};

/// Full-matrix edit distance between a source `a` and target `b`.
///
/// Starts out unfilled; `compute_distance` fills both matrices, after which
/// they are read-only and the path can be traced back.
#[derive(Debug)]
pub struct EditDistance<'a, T> {
    a: Seq<'a, T>,
    b: Seq<'a, T>,
    /// `dist[(i, j)]`: cost of transforming `a[..i]` into `b[..j]`.
    dist: Grid<Cost>,
    /// `ops[(i, j)]`: all ops reaching `dist[(i, j)]`.
    ops: Grid<OpSet>,
    filled: bool,
}

impl<'a, T: PartialEq> EditDistance<'a, T> {
    pub fn new(a: Seq<'a, T>, b: Seq<'a, T>) -> Result<Self, EngineError> {
        let (rows, cols) = (
            a.len().checked_add(1).unwrap_or(usize::MAX),
            b.len().checked_add(1).unwrap_or(usize::MAX),
        );
        let err = EngineError::Allocation { rows, cols };
        // All distances are at most n + m and must fit in a `Cost`.
        let max_cost = a.len().checked_add(b.len()).map(Cost::try_from);
        if !matches!(max_cost, Some(Ok(_))) {
            return Err(err);
        }
        Ok(EditDistance {
            a,
            b,
            dist: Grid::try_new(rows, cols).ok_or(err.clone())?,
            ops: Grid::try_new(rows, cols).ok_or(err)?,
            filled: false,
        })
    }

    pub fn source(&self) -> Seq<'a, T> {
        self.a
    }

    pub fn target(&self) -> Seq<'a, T> {
        self.b
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    /// Fill the distance and op-set matrices and return `D[n][m]`.
    ///
    /// Calling this again recomputes the exact same matrices.
    pub fn compute_distance(&mut self) -> Cost {
        self.init_borders();
        self.fill();
        self.filled = true;

        let (n, m) = (self.a.len(), self.b.len());
        let d = self.dist[(n, m)];
        debug!("Filled {}x{} matrix: distance {d}", n + 1, m + 1);
        d
    }

    fn init_borders(&mut self) {
        self.dist[(0, 0)] = 0;
        self.ops[(0, 0)] = OpSet::EMPTY;
        for i in 1..=self.a.len() {
            self.dist[(i, 0)] = i as Cost;
            self.ops[(i, 0)] = OpSet::single(Op::Delete);
        }
        for j in 1..=self.b.len() {
            self.dist[(0, j)] = j as Cost;
            self.ops[(0, j)] = OpSet::single(Op::Insert);
        }
    }

    /// Row-major: each cell only reads its top, left and diagonal neighbours.
    fn fill(&mut self) {
        for i in 1..=self.a.len() {
            for j in 1..=self.b.len() {
                let diagonal = Op::diagonal(&self.a[i - 1], &self.b[j - 1]);
                let candidates = [
                    (Op::Delete, self.dist[(i - 1, j)] + Op::Delete.cost()),
                    (Op::Insert, self.dist[(i, j - 1)] + Op::Insert.cost()),
                    (diagonal, self.dist[(i - 1, j - 1)] + diagonal.cost()),
                ];
                let best = candidates.iter().map(|&(_, c)| c).min().unwrap_or_default();

                let mut set = OpSet::EMPTY;
                for (op, c) in candidates {
                    if c == best {
                        set.insert(op);
                    }
                }
                self.dist[(i, j)] = best;
                self.ops[(i, j)] = set;
            }
        }
    }

    /// The distance matrix, once filled.
    pub fn distances(&self) -> Result<&Grid<Cost>, EngineError> {
        self.check_filled()?;
        Ok(&self.dist)
    }

    /// The op-set matrix, once filled. Rows follow the source, columns the target.
    pub fn operations(&self) -> Result<&Grid<OpSet>, EngineError> {
        self.check_filled()?;
        Ok(&self.ops)
    }

    fn check_filled(&self) -> Result<(), EngineError> {
        if self.filled {
            Ok(())
        } else {
            Err(EngineError::InvalidState)
        }
    }
}

impl<'a, T: PartialEq + Clone> EditDistance<'a, T> {
    /// Trace back one optimal path from `(n, m)` to `(0, 0)`.
    ///
    /// Ties are broken in a fixed order: match, then deletion, then insertion,
    /// then substitution.
    pub fn backtrack_path(&self) -> Result<Path<T>, EngineError> {
        self.check_filled()?;
        let (a, b, d) = (self.a, self.b, &self.dist);

        let (mut i, mut j) = (a.len(), b.len());
        let mut steps = Vec::with_capacity(i + j);
        while i > 0 || j > 0 {
            let step = if i > 0 && j > 0 && a[i - 1] == b[j - 1] {
                Step::Match(a[i - 1].clone())
            } else if i > 0 && d[(i, j)] == d[(i - 1, j)] + Op::Delete.cost() {
                Step::Delete(a[i - 1].clone())
            } else if j > 0 && d[(i, j)] == d[(i, j - 1)] + Op::Insert.cost() {
                Step::Insert(b[j - 1].clone())
            } else {
                Step::Substitute(a[i - 1].clone(), b[j - 1].clone())
            };
            trace!("({i}, {j}): {:?}", step.op());
            let (di, dj) = step.op().delta();
            i -= di;
            j -= dj;
            steps.push(step);
        }
        steps.reverse();
        Ok(steps.into())
    }
}
