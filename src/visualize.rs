//! Presentation of the most frequent words: a terminal bar chart or a JSON report.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::RenderError;

const BAR_WIDTH: u64 = 50;

pub trait Visualizer {
    /// Render `top`, the (non-empty) ranked selection of at most `top_n` words.
    fn render(&mut self, top: &[(String, u64)], top_n: usize) -> Result<(), RenderError>;
}

/// Horizontal bar chart written to any `Write` target.
pub struct BarChart<W> {
    out: W,
}

impl BarChart<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> BarChart<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Visualizer for BarChart<W> {
    fn render(&mut self, top: &[(String, u64)], top_n: usize) -> Result<(), RenderError> {
        let label_width = top.iter().map(|(w, _)| w.chars().count()).max().unwrap_or(0);
        let max = top.iter().map(|&(_, c)| c).max().unwrap_or(0).max(1);

        writeln!(self.out, "Top {top_n} Words by Frequency")?;
        for (word, count) in top {
            // Nonzero counts always get at least one cell.
            let cells = match *count {
                0 => 0,
                c => (c * BAR_WIDTH / max).max(1) as usize,
            };
            writeln!(
                self.out,
                "{word:>label_width$} | {} {count}",
                "█".repeat(cells)
            )?;
        }
        self.out.flush()?;
        Ok(())
    }
}

#[derive(serde::Serialize)]
struct ReportEntry<'a> {
    word: &'a str,
    count: u64,
}

#[derive(serde::Serialize)]
struct Report<'a> {
    top_n: usize,
    words: Vec<ReportEntry<'a>>,
}

/// Writes the selection as pretty JSON to a file.
pub struct JsonReport {
    path: PathBuf,
}

impl JsonReport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Visualizer for JsonReport {
    fn render(&mut self, top: &[(String, u64)], top_n: usize) -> Result<(), RenderError> {
        let report = Report {
            top_n,
            words: top
                .iter()
                .map(|(word, count)| ReportEntry { word, count: *count })
                .collect(),
        };
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
