use std::fmt;
use std::time::Duration;

/// Summary of one maze walk, printed after playback.
#[derive(Debug, Clone)]
pub struct Statistics {
    pub width: usize,
    pub height: usize,
    pub num_walls: usize,
    /// Cells on the walked route, `None` when no route exists.
    pub path_length: Option<usize>,
    /// Cells on the shortest possible route, `None` when unreachable.
    pub optimal_length: Option<usize>,
    pub route_efficiency: f64,
    pub search_time: Duration,
}

impl Statistics {
    pub fn new(width: usize, height: usize, num_walls: usize) -> Self {
        Statistics {
            width,
            height,
            num_walls,
            path_length: None,
            optimal_length: None,
            route_efficiency: 0.0,
            search_time: Duration::ZERO,
        }
    }

    /// Walked cells over shortest-route cells; 1.0 means the walk happened
    /// to be optimal, 0.0 means there was nothing to compare.
    pub fn calculate_efficiency(&mut self) {
        self.route_efficiency = match (self.path_length, self.optimal_length) {
            (Some(walked), Some(best)) if best > 0 => walked as f64 / best as f64,
            _ => 0.0,
        };
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Maze Size: {}x{}", self.width, self.height)?;
        writeln!(f, "Number of Walls: {}", self.num_walls)?;
        match self.path_length {
            Some(cells) => writeln!(f, "Path Length: {} cells", cells)?,
            None => writeln!(f, "Path Length: no path")?,
        }
        match self.optimal_length {
            Some(cells) => writeln!(f, "Optimal Path Length: {} cells", cells)?,
            None => writeln!(f, "Optimal Path Length: unreachable")?,
        }
        if self.route_efficiency > 0.0 {
            writeln!(f, "Route Efficiency: {:.3}", self.route_efficiency)?;

            if self.route_efficiency > 1.0 {
                let overhead = (self.route_efficiency - 1.0) * 100.0;
                writeln!(f, "Walk Overhead: {:.1}% beyond the shortest route", overhead)?;
            }
        }
        writeln!(f, "Search Time: {:?}", self.search_time)?;

        Ok(())
    }
}
