use crate::grid::{Grid, Position};
use anyhow::{bail, Result};

/// Interface every maze searcher implements.
///
/// `Err` means the arguments were unusable (an endpoint outside the grid or
/// on a wall). A maze with no route between valid endpoints is not an error;
/// that outcome is `Ok(None)`.
pub trait PathfindingAlgorithm {
    fn find_path(
        &mut self,
        grid: &Grid,
        start: Position,
        goal: Position,
    ) -> Result<Option<Vec<Position>>>;
}

/// Shared argument validation: both endpoints must be open cells inside the
/// grid before any search is worth running.
pub fn check_endpoints(grid: &Grid, start: Position, goal: Position) -> Result<()> {
    for (name, pos) in [("start", start), ("goal", goal)] {
        if !grid.in_bounds(pos) {
            bail!(
                "{} ({}, {}) is outside the {}x{} grid",
                name,
                pos.x,
                pos.y,
                grid.width(),
                grid.height()
            );
        }
        if grid.is_wall(pos) {
            bail!("{} ({}, {}) is a wall cell", name, pos.x, pos.y);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid() -> Grid {
        Grid::new(5, 5, Position { x: 1, y: 1 }, Position { x: 3, y: 3 }).unwrap()
    }

    #[test]
    fn accepts_open_interior_endpoints() {
        let grid = open_grid();
        assert!(check_endpoints(&grid, grid.start(), grid.goal()).is_ok());
    }

    #[test]
    fn rejects_an_endpoint_outside_the_grid() {
        let grid = open_grid();
        let err = check_endpoints(&grid, Position { x: 9, y: 9 }, grid.goal()).unwrap_err();
        assert_eq!(format!("{}", err), "start (9, 9) is outside the 5x5 grid");
    }

    #[test]
    fn rejects_an_endpoint_on_a_wall() {
        let grid = open_grid();
        let err = check_endpoints(&grid, grid.start(), Position { x: 0, y: 2 }).unwrap_err();
        assert_eq!(format!("{}", err), "goal (0, 2) is a wall cell");
    }
}
