//! Visual line counting.
//!
//! The engine never measures text itself. Whoever renders the text knows the
//! font, the container width and the wrapping rules, and answers through
//! [`LineOracle`]. Two host-side implementations are provided for hosts that
//! render with fixed-width cells or that do not soft-wrap at all.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::buffer::Graphemes;
use super::classify::is_newline;

/// Answers how many visual lines a text occupies when rendered.
pub trait LineOracle {
    /// Number of wrapped display lines for `text` (at least 1, even when empty)
    fn visual_line_count(&self, text: &str) -> usize;
}

impl<F> LineOracle for F
where
    F: Fn(&str) -> usize,
{
    fn visual_line_count(&self, text: &str) -> usize {
        self(text)
    }
}

/// One visual line per hard line; no soft wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HardLineBreaks;

impl LineOracle for HardLineBreaks {
    fn visual_line_count(&self, text: &str) -> usize {
        1 + Graphemes::new(text).iter().filter(|g| is_newline(g)).count()
    }
}

/// Greedy soft wrapping at a fixed number of terminal cells per row.
///
/// Cluster widths come from `unicode-width`, so CJK and emoji take two cells.
/// A cluster that does not fit on the current row moves to the next one; a
/// cluster wider than the whole row gets a row of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonospaceWrap {
    columns: usize,
}

impl MonospaceWrap {
    /// Wrap at `columns` cells per row (at least 1)
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }
}

impl LineOracle for MonospaceWrap {
    fn visual_line_count(&self, text: &str) -> usize {
        let mut rows = 1;
        let mut col = 0;
        for cluster in text.graphemes(true) {
            if is_newline(cluster) {
                rows += 1;
                col = 0;
                continue;
            }
            let width = cluster.width();
            if col > 0 && col + width > self.columns {
                rows += 1;
                col = 0;
            }
            col += width;
        }
        rows
    }
}
