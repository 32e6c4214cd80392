//! One generation of Conway's Game of Life over a finite grid.
//!
//! Cells outside the grid are dead. Coordinates are `(row, column)`.

pub mod cell;
pub mod count;
pub mod error;
pub mod grid;
pub mod rule;
pub mod step;

pub use cell::Cell;
pub use count::{count_alive, count_alive_neighbours};
pub use error::{Error, Result};
pub use grid::Grid;
pub use rule::Rule;
pub use step::{next_generation, next_generation_with, simulate};
