use std::convert::TryFrom;
use std::fmt::{self, Display};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cell {
  Alive,
  Dead,
}

pub const ALIVE_CHAR: char = '*';
pub const DEAD_CHAR: char = '.';

impl Cell {
  pub fn is_alive(self) -> bool {
    self == Cell::Alive
  }
}

impl Default for Cell {
  fn default() -> Self {
    Cell::Dead
  }
}

impl From<bool> for Cell {
  fn from(alive: bool) -> Self {
    if alive {
      Cell::Alive
    } else {
      Cell::Dead
    }
  }
}

impl From<Cell> for char {
  fn from(cell: Cell) -> char {
    match cell {
      Cell::Alive => ALIVE_CHAR,
      Cell::Dead => DEAD_CHAR,
    }
  }
}

/// Fails with the offending character.
impl TryFrom<char> for Cell {
  type Error = char;

  fn try_from(c: char) -> Result<Self, char> {
    match c {
      ALIVE_CHAR => Ok(Cell::Alive),
      DEAD_CHAR => Ok(Cell::Dead),
      _ => Err(c),
    }
  }
}

impl Display for Cell {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", char::from(*self))
  }
}
