//! Display numbering.
//!
//! Lines carry no number of their own. A line's display index is its position
//! in the store plus one, computed whenever lines are shown. Filtering (as
//! `search` does) keeps each line's original index rather than renumbering.

use std::fmt;

/// A line paired with its 1-based display index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    pub index: usize,
    pub text: String,
}

impl fmt::Display for DisplayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.index, self.text)
    }
}

/// Assigns display indexes to `lines` in store order.
pub fn index_lines(lines: &[String]) -> Vec<DisplayLine> {
    lines
        .iter()
        .enumerate()
        .map(|(pos, text)| DisplayLine {
            index: pos + 1,
            text: text.clone(),
        })
        .collect()
}

/// Converts a user-typed display index into a 0-based position.
///
/// Returns `None` when `input` is not an integer, or is below 1. Upper bounds
/// are the store's business.
pub fn parse_display_index(input: &str) -> Option<usize> {
    input.parse::<usize>().ok()?.checked_sub(1)
}

/// Joins display lines one per row, without a trailing newline.
pub fn render_lines(lines: &[DisplayLine]) -> String {
    lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
