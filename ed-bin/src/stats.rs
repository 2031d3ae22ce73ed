use derive_more::AddAssign;
use ed_types::{Cost, OpCounts};
use serde::Serialize;
use std::{
    fmt::Display,
    io::{self, Write},
};

/// Statistics of one pair, or the sum over many pairs.
#[derive(Default, Clone, Copy, AddAssign, Debug, Serialize)]
pub struct AlignStats {
    pub sample_size: usize,
    pub len_a: usize,
    pub len_b: usize,
    /// The computed distance.
    pub distance: Cost,
    /// Steps of the traced path, per kind.
    pub counts: OpCounts,
    /// Cells holding more than one optimal op.
    pub tied_cells: usize,
}

impl AlignStats {
    fn format<T: Display>(width: usize, title: &str, val: T) -> (String, String) {
        (format!("{title:>width$}"), format!("{val:>width$}"))
    }

    fn format_avg<T: Into<f64>>(&self, width: usize, title: &str, val: T) -> (String, String) {
        let avg = val.into() / self.sample_size.max(1) as f64;
        Self::format(width, title, format!("{avg:.1}"))
    }

    pub fn values(&self) -> (Vec<String>, Vec<String>) {
        let c = &self.counts;
        [
            Self::format(6, "nr", self.sample_size),
            self.format_avg(8, "|a|", self.len_a as f64),
            self.format_avg(8, "|b|", self.len_b as f64),
            self.format_avg(7, "ed", self.distance),
            self.format_avg(7, "M", c.matches as f64),
            self.format_avg(7, "S", c.substitutions as f64),
            self.format_avg(7, "I", c.insertions as f64),
            self.format_avg(7, "D", c.deletions as f64),
            self.format_avg(7, "ties", self.tied_cells as f64),
        ]
        .into_iter()
        .unzip()
    }

    pub fn write_to(&self, out: &mut impl Write, header: bool) -> io::Result<()> {
        let (h, v) = self.values();
        if header {
            writeln!(out, "{}", h.join(" "))?;
        }
        writeln!(out, "{}", v.join(" "))
    }
}
