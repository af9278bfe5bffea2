use crate::algorithms::common::{check_endpoints, PathfindingAlgorithm};
use crate::grid::{Grid, Position};
use anyhow::Result;
use pathfinding::prelude::astar;

/// Shortest-path searcher built on the `pathfinding` crate.
///
/// The maze walk itself is `DepthFirst`; this one exists to report the
/// optimal route length the walk is measured against, and can be selected
/// directly for playback.
#[derive(Default)]
pub struct AStar;

impl AStar {
    /// Creates a new instance of the A* algorithm provider.
    pub fn new() -> Self {
        AStar
    }
}

impl PathfindingAlgorithm for AStar {
    /// Finds a shortest path from start to goal using the A* algorithm.
    ///
    /// # Returns
    ///
    /// `Ok(Some(path))` with a minimum-length route, `Ok(None)` when the
    /// goal is unreachable, or an error for unusable endpoints.
    fn find_path(
        &mut self,
        grid: &Grid,
        start: Position,
        goal: Position,
    ) -> Result<Option<Vec<Position>>> {
        check_endpoints(grid, start, goal)?;

        let result = astar(
            &start,
            |p| {
                // Neighbors are already filtered down to open cells.
                grid.neighbors(*p)
                    .into_iter()
                    .map(|successor| (successor, 1)) // Cost of moving to a neighbor is 1.
                    .collect::<Vec<_>>()
            },
            |p| {
                // Heuristic: Manhattan distance to the goal.
                ((p.x as i32 - goal.x as i32).abs() + (p.y as i32 - goal.y as i32).abs()) as u32
            },
            |p| *p == goal, // Success condition: we've reached the goal.
        );

        // The result from `astar` is a tuple `(path, cost)`. We only need the path.
        Ok(result.map(|(path, _)| path))
    }
}
