//! Random wall generation.

use rand::{Rng, RngExt};

use crate::board::Board;

/// Share of cells turned into walls by default.
pub const DEFAULT_WALL_DENSITY: f64 = 0.25;

impl Board {
    /// Clear replay marks, then independently make every non-marker cell a
    /// wall with probability `density` (clamped to `0.0..=1.0`) and empty
    /// otherwise.
    ///
    /// Returns the number of walls placed. The maze is not guaranteed to be
    /// solvable.
    pub fn randomize_walls<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) -> usize {
        let density = density.clamp(0.0, 1.0);
        self.clear_path();
        let (start, end) = (self.start(), self.end());
        let mut walls = 0;
        for c in self.dims().iter() {
            if c == start || c == end {
                continue;
            }
            let wall = rng.random::<f64>() < density;
            if wall {
                walls += 1;
            }
            self.set_wall(c, wall);
        }
        log::debug!(
            "random maze on {}: {walls} walls at density {density}",
            self.dims()
        );
        walls
    }
}
