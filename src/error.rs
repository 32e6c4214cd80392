//! Errors raised while building grids and rules.
//!
//! Stepping and counting never fail; only construction from untrusted input
//! does.

/// Errors that can occur when constructing a [`Grid`](crate::grid::Grid) or a
/// [`Rule`](crate::rule::Rule).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  /// A row's length differs from the length of the first row.
  #[error("row {row} has {found} cells, expected {expected}")]
  RaggedRow {
    row: usize,
    expected: usize,
    found: usize,
  },

  /// A character that is neither `*` nor `.` appeared in a plaintext grid.
  #[error("invalid cell {ch:?} at row {row}, column {col}")]
  InvalidCell {
    ch: char,
    row: usize,
    col: usize,
  },

  /// The rule string is not in `B.../S...` notation.
  #[error("invalid rule {0:?}")]
  InvalidRule(String),
}

pub type Result<T> = std::result::Result<T, Error>;
