use regex::Regex;
use std::fmt::{self, Display};
use std::str::FromStr;
use crate::cell::Cell;
use crate::error::{Error, Result};

/// Birth and survival conditions. Bit `n` of a mask is set when a cell with
/// `n` live neighbours is born (dead cell) or survives (live cell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule {
  birth: NeighborMask,
  survival: NeighborMask,
}

pub(crate) type NeighborMask = u16;

const MASK_BITS: NeighborMask = 0b1_1111_1111;

impl Rule {
  /// Conway's Game of Life, `B3/S23`.
  pub const GAME_OF_LIFE: Rule = Rule {
    birth: 0b000001000,
    survival: 0b000001100,
  };

  /// `B/S23`: live cells follow Conway's survival rule, dead cells stay dead.
  pub const SURVIVAL_ONLY: Rule = Rule {
    birth: 0,
    survival: 0b000001100,
  };

  /// Rule with the given neighbour counts. Counts above 8 are ignored.
  pub fn new(birth: &[u8], survival: &[u8]) -> Self {
    Self {
      birth: to_mask(birth),
      survival: to_mask(survival),
    }
  }

  pub fn has_birth(&self) -> bool {
    self.birth != 0
  }

  pub fn next_state(&self, cell: Cell, alive_neighbours: usize) -> Cell {
    let mask = match cell {
      Cell::Alive => self.survival,
      Cell::Dead => self.birth,
    };
    Cell::from(alive_neighbours < 9 && mask >> alive_neighbours & 1 != 0)
  }
}

impl Default for Rule {
  fn default() -> Self {
    Self::SURVIVAL_ONLY
  }
}

fn to_mask(counts: &[u8]) -> NeighborMask {
  counts
    .iter()
    .filter(|&&n| n < 9)
    .fold(0, |mask, &n| mask | 1 << n)
    & MASK_BITS
}

fn write_mask(f: &mut fmt::Formatter, mut mask: NeighborMask) -> fmt::Result {
  while mask != 0 {
    write!(f, "{}", mask.trailing_zeros())?;
    mask &= mask - 1;
  }
  Ok(())
}

impl Display for Rule {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "B")?;
    write_mask(f, self.birth)?;
    write!(f, "/S")?;
    write_mask(f, self.survival)
  }
}

/// Parses `B.../S...` notation, e.g. `B3/S23`.
impl FromStr for Rule {
  type Err = Error;

  fn from_str(src: &str) -> Result<Self> {
    let re = Regex::new(r"^[Bb]([0-8]*)/[Ss]([0-8]*)$")
      .map_err(|e| Error::InvalidRule(e.to_string()))?;
    let caps = re
      .captures(src.trim())
      .ok_or_else(|| Error::InvalidRule(src.to_owned()))?;

    let digits = |i: usize| -> Vec<u8> {
      caps
        .get(i)
        .map_or("", |m| m.as_str())
        .bytes()
        .map(|b| b - b'0')
        .collect()
    };

    Ok(Self::new(&digits(1), &digits(2)))
  }
}
