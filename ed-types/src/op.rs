//! The four edit operations and small sets of them.

use crate::Cost;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A single edit operation.
///
/// Listed in the order in which ties are recorded in a cell:
/// deletion, insertion, then match or substitution.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Op {
    Delete,
    Insert,
    Match,
    Substitute,
}

impl Op {
    pub const ALL: [Op; 4] = [Op::Delete, Op::Insert, Op::Match, Op::Substitute];

    pub const fn cost(self) -> Cost {
        match self {
            Op::Match => 0,
            Op::Insert => 1,
            Op::Delete => 1,
            Op::Substitute => 2,
        }
    }

    /// The substitution-or-match op for a pair of units.
    pub fn diagonal<T: PartialEq>(x: &T, y: &T) -> Op {
        if x == y {
            Op::Match
        } else {
            Op::Substitute
        }
    }

    /// How many units of the source and target this op consumes.
    pub const fn delta(self) -> (usize, usize) {
        match self {
            Op::Match | Op::Substitute => (1, 1),
            Op::Insert => (0, 1),
            Op::Delete => (1, 0),
        }
    }

    /// One-letter tag used in the operation matrix.
    pub const fn tag(self) -> char {
        match self {
            Op::Delete => 'D',
            Op::Insert => 'I',
            Op::Match => 'M',
            Op::Substitute => 'S',
        }
    }

    /// Letter used in cigar strings.
    pub const fn cigar_char(self) -> char {
        match self {
            Op::Delete => 'D',
            Op::Insert => 'I',
            Op::Match => 'M',
            Op::Substitute => 'X',
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Op::Delete => "Delete",
            Op::Insert => "Insert",
            Op::Match => "Match",
            Op::Substitute => "Substitute",
        };
        f.write_str(name)
    }
}

/// The set of operations that reach the optimal cost of a DP cell.
///
/// Stored as a bitmask, so an op can never be present twice.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct OpSet(u8);

impl OpSet {
    pub const EMPTY: OpSet = OpSet(0);

    pub const fn single(op: Op) -> Self {
        OpSet(op.bit())
    }

    pub fn insert(&mut self, op: Op) {
        self.0 |= op.bit();
    }

    pub const fn contains(self, op: Op) -> bool {
        self.0 & op.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate the ops in recording order: `Delete`, `Insert`, `Match`, `Substitute`.
    pub fn iter(self) -> impl Iterator<Item = Op> {
        Op::ALL.into_iter().filter(move |&op| self.contains(op))
    }
}

impl FromIterator<Op> for OpSet {
    fn from_iter<I: IntoIterator<Item = Op>>(iter: I) -> Self {
        let mut set = OpSet::EMPTY;
        for op in iter {
            set.insert(op);
        }
        set
    }
}

/// Formats as the comma separated tags, e.g. `D,I,S`. The empty set is the empty string.
impl Display for OpSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().map(Op::tag).join(","))
    }
}
