use itertools::Itertools;
use std::convert::{TryFrom, TryInto};
use std::fmt::{self, Display};
use std::str::FromStr;
use crate::cell::*;
use crate::error::{Error, Result};

/// Side length of the classic 9x9 board. Nothing in the crate depends on it;
/// callers that want that board use `Grid::dead(DEFAULT_SIZE, DEFAULT_SIZE)`.
pub const DEFAULT_SIZE: usize = 9;

/// A rectangular grid of cells addressed by `(row, column)`.
///
/// Every `Grid` is rectangular. [`Grid::new`] and parsing reject ragged
/// rows, so stepping and counting never have to.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Grid {
  rows: Vec<Vec<Cell>>,
  width: usize,
}

impl Grid {
  pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self> {
    let width = rows.first().map_or(0, Vec::len);
    if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
      return Err(Error::RaggedRow {
        row,
        expected: width,
        found: r.len(),
      });
    }

    Ok(Self { rows, width })
  }

  /// All-dead grid of `height` rows by `width` columns.
  pub fn dead(height: usize, width: usize) -> Self {
    Self {
      rows: vec![vec![Cell::Dead; width]; height],
      width: if height == 0 { 0 } else { width },
    }
  }

  /// Caller guarantees every row has `width` cells.
  pub(crate) fn from_rows_unchecked(rows: Vec<Vec<Cell>>, width: usize) -> Self {
    debug_assert!(rows.iter().all(|r| r.len() == width));
    Self {
      width: if rows.is_empty() { 0 } else { width },
      rows,
    }
  }

  pub fn height(&self) -> usize {
    self.rows.len()
  }

  pub fn width(&self) -> usize {
    self.width
  }

  pub fn rows(&self) -> &[Vec<Cell>] {
    &self.rows
  }

  pub fn into_rows(self) -> Vec<Vec<Cell>> {
    self.rows
  }

  /// State at `(row, col)`. Anything outside the grid is dead.
  pub fn get(&self, row: i64, col: i64) -> Cell {
    let row: usize = match row.try_into() {
      Ok(row) => row,
      Err(_) => return Cell::Dead,
    };
    let col: usize = match col.try_into() {
      Ok(col) => col,
      Err(_) => return Cell::Dead,
    };

    self.rows
      .get(row)
      .and_then(|r| r.get(col))
      .copied()
      .unwrap_or(Cell::Dead)
  }

  /// Returns `false` and leaves the grid untouched when `(row, col)` is out
  /// of bounds.
  pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
    match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
      Some(c) => {
        *c = cell;
        true
      }
      None => false,
    }
  }

  /// Row-major `(row, col, cell)` triples.
  pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
    self.rows.iter().enumerate().flat_map(|(i, r)| {
      r.iter().enumerate().map(move |(j, &c)| (i, j, c))
    })
  }

  pub fn population(&self) -> usize {
    crate::count::count_alive(self.rows.iter().flatten())
  }
}

impl TryFrom<Vec<Vec<Cell>>> for Grid {
  type Error = Error;

  fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self> {
    Self::new(rows)
  }
}

/// Plaintext form: one line per row, `*` alive, `.` dead. Blank lines and
/// whitespace around each line are ignored.
impl FromStr for Grid {
  type Err = Error;

  fn from_str(src: &str) -> Result<Self> {
    let rows = src
      .lines()
      .map(str::trim)
      .filter(|line| !line.is_empty())
      .enumerate()
      .map(|(row, line)| {
        line
          .chars()
          .enumerate()
          .map(|(col, ch)| {
            Cell::try_from(ch).map_err(|ch| Error::InvalidCell { ch, row, col })
          })
          .collect::<Result<Vec<_>>>()
      })
      .collect::<Result<Vec<_>>>()?;

    Self::new(rows)
  }
}

impl Display for Grid {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    for row in &self.rows {
      writeln!(f, "{}", row.iter().map(|&c| char::from(c)).join(""))?;
    }
    Ok(())
  }
}
