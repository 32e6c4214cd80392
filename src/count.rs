use std::borrow::Borrow;
use crate::cell::Cell;
use crate::grid::Grid;

/// Number of live cells in `cells`.
pub fn count_alive<I>(cells: I) -> usize
where
  I: IntoIterator,
  I::Item: Borrow<Cell>,
{
  cells.into_iter().fold(0, |n, c| if c.borrow().is_alive() { n + 1 } else { n })
}

/// The eight cells around `(row, col)`, clockwise from the top left. Cells
/// outside the grid read as dead.
pub fn moore_neighbourhood(grid: &Grid, row: i64, col: i64) -> [Cell; 8] {
  let g = |dr: i64, dc: i64| {
    grid.get(row.saturating_add(dr), col.saturating_add(dc))
  };
  [
    g(-1, -1), g(-1, 0), g(-1, 1),
    g(0, 1),
    g(1, 1), g(1, 0), g(1, -1),
    g(0, -1),
  ]
}

/// Number of live cells in the Moore neighbourhood of `(row, col)`. Always in
/// `0..=8`.
pub fn count_alive_neighbours(grid: &Grid, row: i64, col: i64) -> usize {
  count_alive(&moore_neighbourhood(grid, row, col))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn grid(src: &str) -> Grid {
    src.parse().unwrap()
  }

  #[test]
  fn count_alive_cells() {
    let cells = [Cell::Dead, Cell::Alive, Cell::Dead, Cell::Alive, Cell::Alive];
    assert_eq!(count_alive(&cells), 3);

    let cells = [Cell::Dead, Cell::Dead, Cell::Dead, Cell::Dead, Cell::Alive];
    assert_eq!(count_alive(&cells), 1);

    let cells = [Cell::Dead; 5];
    assert_eq!(count_alive(&cells), 0);
  }

  #[test]
  fn count_alive_empty() {
    assert_eq!(count_alive(Vec::<Cell>::new()), 0);
  }

  #[test]
  fn count_alive_owned_and_borrowed() {
    let cells = vec![Cell::Alive, Cell::Alive];
    assert_eq!(count_alive(cells.iter()), 2);
    assert_eq!(count_alive(cells), 2);
  }

  #[test]
  fn full_grid_center() {
    let g = grid("***\n***\n***\n");
    assert_eq!(count_alive_neighbours(&g, 1, 1), 8);
  }

  #[test]
  fn full_grid_corners_and_edges() {
    let g = grid("***\n***\n***\n");
    assert_eq!(count_alive_neighbours(&g, 0, 0), 3);
    assert_eq!(count_alive_neighbours(&g, 2, 2), 3);
    assert_eq!(count_alive_neighbours(&g, 0, 1), 5);
    assert_eq!(count_alive_neighbours(&g, 1, 2), 5);
  }

  #[test]
  fn cross_corner() {
    let g = grid("
      ..*.
      ..*.
      ****
      ..*.
    ");
    assert_eq!(count_alive_neighbours(&g, 0, 0), 0);
    assert_eq!(count_alive_neighbours(&g, 2, 2), 4);
    assert_eq!(count_alive_neighbours(&g, 3, 3), 3);
  }

  #[test]
  fn centre_is_not_counted() {
    let g = grid("...\n.*.\n...\n");
    assert_eq!(count_alive_neighbours(&g, 1, 1), 0);
    assert_eq!(count_alive_neighbours(&g, 0, 0), 1);
  }

  #[test]
  fn outside_coordinates() {
    let g = grid("**\n**\n");
    assert_eq!(count_alive_neighbours(&g, -1, -1), 1);
    assert_eq!(count_alive_neighbours(&g, -1, 0), 2);
    assert_eq!(count_alive_neighbours(&g, 5, 5), 0);
    assert_eq!(count_alive_neighbours(&g, i64::MAX, i64::MIN), 0);
  }

  #[test]
  fn non_square_row_column_order() {
    let g = grid("
      .....*
      ......
    ");
    assert_eq!(count_alive_neighbours(&g, 1, 4), 1);
    assert_eq!(count_alive_neighbours(&g, 4, 1), 0);
  }
}
