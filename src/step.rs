use tracing::{debug, trace};
use crate::count::count_alive_neighbours;
use crate::grid::Grid;
use crate::rule::Rule;

/// Next generation under [`Rule::SURVIVAL_ONLY`]: live cells with fewer than
/// two or more than three live neighbours die, dead cells stay dead.
pub fn next_generation(grid: &Grid) -> Grid {
  next_generation_with(grid, Rule::SURVIVAL_ONLY)
}

/// Next generation under `rule`. Every cell is computed from `grid`, which is
/// left untouched; the result is built from fresh rows.
pub fn next_generation_with(grid: &Grid, rule: Rule) -> Grid {
  let rows = grid
    .rows()
    .iter()
    .enumerate()
    .map(|(i, row)| {
      row
        .iter()
        .enumerate()
        .map(|(j, &cell)| {
          let n = count_alive_neighbours(grid, i as i64, j as i64);
          rule.next_state(cell, n)
        })
        .collect()
    })
    .collect();

  let next = Grid::from_rows_unchecked(rows, grid.width());
  debug!(
    height = next.height(),
    width = next.width(),
    population = next.population(),
    %rule,
    "computed next generation"
  );
  next
}

/// `num_gen` is number of generations. Returns early once a generation is
/// unchanged by a step.
pub fn simulate(grid: &Grid, rule: Rule, num_gen: usize) -> Grid {
  let mut current = grid.clone();
  for generation in 0..num_gen {
    let next = next_generation_with(&current, rule);
    trace!(generation, population = next.population(), "stepped");
    if next == current {
      debug!(generation, "reached a still life");
      return next;
    }
    current = next;
  }
  current
}
