use crate::grid::{Grid, Position};
use rustc_hash::FxHashSet;
use std::thread;
use std::time::Duration;

/// Replays a found path on the text grid, one cell per frame.
pub struct Playback<'a> {
    grid: &'a Grid,
    path: &'a [Position],
    delay: Duration,
}

impl<'a> Playback<'a> {
    pub fn new(grid: &'a Grid, path: &'a [Position], delay_ms: u64) -> Self {
        Playback {
            grid,
            path,
            delay: Duration::from_millis(delay_ms),
        }
    }

    /// Animate the walk. Each frame clears the screen, reports progress and
    /// redraws the maze with the walker and the trail behind it.
    pub fn run(&self) {
        let mut trail: FxHashSet<Position> = FxHashSet::default();

        for (step, &pos) in self.path.iter().enumerate() {
            self.clear_screen();
            println!("=== MAZE WALK ===");
            println!(
                "Step: {}/{} | Walker: ({}, {}) | Goal: ({}, {})",
                step + 1,
                self.path.len(),
                pos.x,
                pos.y,
                self.grid.goal().x,
                self.grid.goal().y
            );
            self.grid.print_grid(&trail, Some(pos));
            trail.insert(pos);
            thread::sleep(self.delay);
        }

        self.clear_screen();
        println!("=== WALK COMPLETE ===");
        println!("Reached the goal in {} steps", self.path.len());
        self.grid.print_grid(&trail, None);
    }

    /// The non-animated rendition: the whole path as coordinates.
    pub fn print_path(&self) {
        println!("Path ({} cells):", self.path.len());
        for pos in self.path {
            println!("  ({}, {})", pos.x, pos.y);
        }
    }

    /// Clear the terminal screen between frames.
    fn clear_screen(&self) {
        print!("\x1B[2J\x1B[1;1H");
    }
}
