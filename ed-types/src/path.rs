//! Alignment paths, their cigar encoding, and per-op statistics.

use crate::{Cost, Op};
use derive_more::AddAssign;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display},
    slice,
};

/// One step of an alignment, together with the unit(s) it involves.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Step<T> {
    Match(T),
    /// Remove a unit of the source.
    Delete(T),
    /// Insert a unit of the target.
    Insert(T),
    /// Replace a source unit by a different target unit.
    Substitute(T, T),
}

impl<T> Step<T> {
    pub fn op(&self) -> Op {
        match self {
            Step::Match(_) => Op::Match,
            Step::Delete(_) => Op::Delete,
            Step::Insert(_) => Op::Insert,
            Step::Substitute(_, _) => Op::Substitute,
        }
    }

    pub fn cost(&self) -> Cost {
        self.op().cost()
    }
}

impl<T: Display> Display for Step<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Match(x) => write!(f, "Match: {x}"),
            Step::Delete(x) => write!(f, "Delete: {x}"),
            Step::Insert(x) => write!(f, "Insert: {x}"),
            Step::Substitute(x, y) => write!(f, "Substitute: {x} -> {y}"),
        }
    }
}

/// An ordered list of steps transforming the source into the target.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path<T> {
    steps: Vec<Step<T>>,
}

impl<T> From<Vec<Step<T>>> for Path<T> {
    fn from(steps: Vec<Step<T>>) -> Self {
        Path { steps }
    }
}

impl<T> Path<T> {
    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Step<T>> {
        self.steps.iter()
    }

    pub fn ops(&self) -> impl Iterator<Item = Op> + '_ {
        self.steps.iter().map(Step::op)
    }

    /// Total cost of the steps: M=0, I=1, D=1, S=2.
    pub fn cost(&self) -> Cost {
        self.steps.iter().map(Step::cost).sum()
    }

    pub fn counts(&self) -> OpCounts {
        let mut counts = OpCounts::default();
        for op in self.ops() {
            counts.push(op);
        }
        counts
    }

    pub fn to_cigar(&self) -> Cigar {
        let mut cigar = Cigar::default();
        for op in self.ops() {
            cigar.push(op);
        }
        cigar
    }
}

impl<T: PartialEq> Path<T> {
    /// Replay the path over `a` and `b`, asserting that every step is
    /// consistent with the sequences. Returns the cost of the path.
    pub fn verify(&self, a: &[T], b: &[T]) -> Cost {
        let (mut i, mut j) = (0, 0);
        for step in &self.steps {
            match step {
                Step::Match(x) => {
                    assert!(a.get(i) == Some(x) && b.get(j) == Some(x), "Bad match at ({i}, {j})");
                }
                Step::Substitute(x, y) => {
                    assert!(a.get(i) == Some(x) && b.get(j) == Some(y), "Bad substitution at ({i}, {j})");
                    assert!(x != y, "Substitution of equal units at ({i}, {j})");
                }
                Step::Delete(x) => {
                    assert!(a.get(i) == Some(x), "Bad deletion at ({i}, {j})");
                }
                Step::Insert(y) => {
                    assert!(b.get(j) == Some(y), "Bad insertion at ({i}, {j})");
                }
            }
            let (di, dj) = step.op().delta();
            i += di;
            j += dj;
        }
        assert_eq!((i, j), (a.len(), b.len()), "Path does not end in the corner");
        self.cost()
    }
}

impl<'a, T> IntoIterator for &'a Path<T> {
    type Item = &'a Step<T>;
    type IntoIter = slice::Iter<'a, Step<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CigarElem {
    pub op: Op,
    pub cnt: usize,
}

/// Run-length encoding of the ops of a path.
#[derive(Clone, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Cigar {
    pub ops: Vec<CigarElem>,
}

impl Cigar {
    pub fn push(&mut self, op: Op) {
        if let Some(s) = self.ops.last_mut() {
            if s.op == op {
                s.cnt += 1;
                return;
            }
        }
        self.ops.push(CigarElem { op, cnt: 1 });
    }
}

impl Display for Cigar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for elem in &self.ops {
            write!(f, "{}{}", elem.cnt, elem.op.cigar_char())?;
        }
        Ok(())
    }
}

/// Number of steps of each kind.
#[derive(Default, Clone, Copy, PartialEq, Eq, AddAssign, Debug, Serialize, Deserialize)]
pub struct OpCounts {
    pub matches: usize,
    pub substitutions: usize,
    pub insertions: usize,
    pub deletions: usize,
}

impl OpCounts {
    pub fn push(&mut self, op: Op) {
        match op {
            Op::Match => self.matches += 1,
            Op::Substitute => self.substitutions += 1,
            Op::Insert => self.insertions += 1,
            Op::Delete => self.deletions += 1,
        }
    }

    pub fn get(&self, op: Op) -> usize {
        match op {
            Op::Match => self.matches,
            Op::Substitute => self.substitutions,
            Op::Insert => self.insertions,
            Op::Delete => self.deletions,
        }
    }

    pub fn cost(&self) -> Cost {
        Op::ALL
            .into_iter()
            .map(|op| self.get(op) as Cost * op.cost())
            .sum()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn example() -> Path<char> {
        vec![
            Step::Delete('x'),
            Step::Match('a'),
            Step::Match('b'),
            Step::Substitute('c', 'd'),
            Step::Insert('e'),
        ]
        .into()
    }

    #[test]
    fn cigar_string() {
        assert_eq!(example().to_cigar().to_string(), "1D2M1X1I");
        assert_eq!(Path::<char>::default().to_cigar().to_string(), "");
    }

    #[test]
    fn counts_and_cost() {
        let p = example();
        let counts = p.counts();
        assert_eq!(counts.matches, 2);
        assert_eq!(counts.deletions, 1);
        assert_eq!(counts.cost(), 4);
        assert_eq!(p.cost(), 4);

        let mut total = counts;
        total += counts;
        assert_eq!(total.matches, 4);
        assert_eq!(total.cost(), 8);
    }

    #[test]
    fn verify_replays_path() {
        let a: Vec<char> = "xabc".chars().collect();
        let b: Vec<char> = "abde".chars().collect();
        assert_eq!(example().verify(&a, &b), 4);
    }

    #[test]
    #[should_panic]
    fn verify_rejects_wrong_unit() {
        let a: Vec<char> = "yabc".chars().collect();
        let b: Vec<char> = "abde".chars().collect();
        example().verify(&a, &b);
    }

    #[test]
    fn step_display() {
        assert_eq!(Step::Substitute('i', 'e').to_string(), "Substitute: i -> e");
        assert_eq!(Step::Match('c').to_string(), "Match: c");
    }
}
