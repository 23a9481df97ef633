//! Random sea generation.
//!
//! [`SeaGen`] scatters islands over an open sea, then drops the boat and
//! the treasure on two distinct sea cells. Layouts where the treasure
//! cannot be reached are thrown away and drawn again.

use rand::{Rng, RngExt};
use sonar_paths::{BOAT, Grid, ISLAND, SEA, TREASURE};

use crate::error::HuntError;

/// Attempts made by [`SeaGen::generate`] before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Largest sea, in cells, that [`SeaGen::generate`] accepts.
pub const MAX_CELLS: usize = 1 << 16;

/// Sea map generator driven by `R`.
pub struct SeaGen<R: Rng> {
    pub rng: R,
    max_attempts: usize,
}

impl<R: Rng> SeaGen<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Generate the rows of a `width`x`height` map in which each cell is
    /// an island with probability `island_pct` (in `[0, 1)`), and the
    /// boat can sail to the treasure.
    pub fn generate(
        &mut self,
        width: usize,
        height: usize,
        island_pct: f64,
    ) -> Result<Vec<String>, HuntError> {
        let cells = match width.checked_mul(height) {
            Some(n) if n > MAX_CELLS => {
                return Err(HuntError::Generation(format!(
                    "a {width}x{height} sea exceeds {MAX_CELLS} cells"
                )));
            }
            Some(n) if n >= 2 => n,
            Some(_) => {
                return Err(HuntError::Generation(format!(
                    "a {width}x{height} sea cannot hold a boat and a treasure"
                )));
            }
            None => {
                return Err(HuntError::Generation(format!(
                    "a {width}x{height} sea is too large"
                )));
            }
        };
        if !(0.0..1.0).contains(&island_pct) {
            return Err(HuntError::Generation(format!(
                "island ratio {island_pct} outside [0, 1)"
            )));
        }
        for attempt in 1..=self.max_attempts {
            let Some(layout) = self.draw(cells, island_pct) else {
                continue;
            };
            let rows: Vec<String> = layout
                .chunks(width)
                .map(|row| row.iter().collect())
                .collect();
            let mut grid = Grid::from_rows(&rows)?;
            let (boat, treasure) = (grid.boat(), grid.treasure());
            if grid.find_path(boat, treasure).reached {
                log::debug!("generated a {width}x{height} sea after {attempt} attempt(s)");
                return Ok(rows);
            }
        }
        Err(HuntError::Generation(format!(
            "no navigable {width}x{height} sea after {} attempts",
            self.max_attempts
        )))
    }

    /// One random layout in row-major order, or `None` when fewer than two
    /// sea cells were drawn.
    fn draw(&mut self, len: usize, island_pct: f64) -> Option<Vec<char>> {
        let mut layout: Vec<char> = (0..len)
            .map(|_| {
                if self.rng.random_bool(island_pct) {
                    ISLAND
                } else {
                    SEA
                }
            })
            .collect();
        let sea: Vec<usize> = (0..len).filter(|&i| layout[i] == SEA).collect();
        if sea.len() < 2 {
            return None;
        }
        let b = self.rng.random_range(0..sea.len());
        let mut t = self.rng.random_range(0..sea.len() - 1);
        if t >= b {
            t += 1;
        }
        layout[sea[b]] = BOAT;
        layout[sea[t]] = TREASURE;
        Some(layout)
    }
}
