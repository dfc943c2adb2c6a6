//! # Column Layout
//!
//! Packs matched words into as many equal-width columns as fit the available
//! terminal width. Words are assigned to columns row-major (`index % columns`),
//! so each column's width is the maximum display width among the words that
//! land in it, and every candidate column count reshuffles that assignment.

use crate::highlight::WordMatch;
use unicode_width::UnicodeWidthStr;

/// Separator written between columns, also counted as layout overhead.
pub const COLUMN_GAP: &str = "  ";

/// A computed grid: how many columns, and how wide each one is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    pub columns: usize,
    pub widths: Vec<usize>,
}

impl ColumnLayout {
    /// Finds the largest column count that fits `available_width`.
    ///
    /// Starts at one column and keeps accepting `columns + 1` while the
    /// recomputed row width (per-column maxima plus one gap per boundary)
    /// stays within `available_width` and the count does not exceed the
    /// number of words. A lone word wider than the terminal still gets its
    /// single column and simply overflows.
    pub fn fit(matches: &[WordMatch], available_width: usize) -> Self {
        let mut layout = ColumnLayout {
            columns: 1,
            widths: column_widths(matches, 1),
        };

        loop {
            let next = layout.columns + 1;
            if next > matches.len() {
                break;
            }
            let widths = column_widths(matches, next);
            let total = widths.iter().sum::<usize>() + COLUMN_GAP.len() * (next - 1);
            if total > available_width {
                break;
            }
            layout = ColumnLayout {
                columns: next,
                widths,
            };
        }

        layout
    }

    pub fn width_of(&self, col: usize) -> usize {
        self.widths.get(col).copied().unwrap_or(0)
    }
}

fn column_widths(matches: &[WordMatch], columns: usize) -> Vec<usize> {
    let mut widths = vec![0; columns];
    for (idx, m) in matches.iter().enumerate() {
        let col = idx % columns;
        widths[col] = widths[col].max(m.word.width());
    }
    widths
}
