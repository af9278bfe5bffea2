use crate::algorithms::common::{check_endpoints, PathfindingAlgorithm};
use crate::grid::{Grid, Position, DIRECTIONS};
use anyhow::Result;

/// Backtracking depth-first walk with a fixed trial order: down, right,
/// up, left. The first route that reaches the goal wins, so the result is
/// deterministic for a given wall layout but not necessarily shortest.
///
/// The walk keeps an explicit frame stack instead of recursing, so deep
/// mazes cannot overflow the call stack.
#[derive(Default)]
pub struct DepthFirst;

impl DepthFirst {
    pub fn new() -> Self {
        DepthFirst
    }
}

/// Outcome of trying to extend the walk into one cell.
enum Visit {
    /// The cell is the goal; the path is complete.
    Goal,
    /// The cell was entered and the walk continues from it.
    Extended,
    /// Wall, out of bounds, or already seen this walk.
    Rejected,
}

fn enter(
    grid: &Grid,
    goal: Position,
    pos: Position,
    seen: &mut [Vec<bool>],
    path: &mut Vec<Position>,
) -> Visit {
    if !grid.in_bounds(pos) || grid.is_wall(pos) || seen[pos.x][pos.y] {
        return Visit::Rejected;
    }
    if pos == goal {
        path.push(pos);
        return Visit::Goal;
    }
    // Marked before descending so loops terminate. The goal is never
    // marked, which does not matter: reaching it ends the walk.
    seen[pos.x][pos.y] = true;
    path.push(pos);
    Visit::Extended
}

impl PathfindingAlgorithm for DepthFirst {
    fn find_path(
        &mut self,
        grid: &Grid,
        start: Position,
        goal: Position,
    ) -> Result<Option<Vec<Position>>> {
        check_endpoints(grid, start, goal)?;

        if start == goal {
            return Ok(Some(vec![start]));
        }

        // Fresh bookkeeping per call keeps repeated searches identical.
        let mut seen = vec![vec![false; grid.height()]; grid.width()];
        let mut path: Vec<Position> = Vec::new();
        // One frame per cell on the speculative path: the cell plus the
        // index of the next direction to try from it.
        let mut frames: Vec<(Position, usize)> = Vec::new();

        seen[start.x][start.y] = true;
        path.push(start);
        frames.push((start, 0));

        while let Some(frame) = frames.last_mut() {
            let (pos, dir) = *frame;
            if dir == DIRECTIONS.len() {
                // Dead end: every direction failed, undo the speculative step.
                path.pop();
                frames.pop();
                continue;
            }
            frame.1 += 1;

            if let Some(next) = grid.step(pos, DIRECTIONS[dir]) {
                match enter(grid, goal, next, &mut seen, &mut path) {
                    Visit::Goal => return Ok(Some(path)),
                    Visit::Extended => frames.push((next, 0)),
                    Visit::Rejected => {}
                }
            }
        }

        // Every cell reachable from the start was explored without touching
        // the goal.
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn p(x: usize, y: usize) -> Position {
        Position { x, y }
    }

    fn open_room() -> Grid {
        Grid::new(5, 5, p(1, 1), p(3, 3)).unwrap()
    }

    fn walk(grid: &Grid) -> Option<Vec<Position>> {
        DepthFirst::new()
            .find_path(grid, grid.start(), grid.goal())
            .unwrap()
    }

    fn assert_walkable(path: &[Position]) {
        let mut unique: FxHashSet<Position> = FxHashSet::default();
        for pos in path {
            assert!(unique.insert(*pos), "cell {:?} repeats", pos);
        }
        for pair in path.windows(2) {
            let dx = pair[0].x.abs_diff(pair[1].x);
            let dy = pair[0].y.abs_diff(pair[1].y);
            assert_eq!(dx + dy, 1, "step {:?} -> {:?} is not one cell", pair[0], pair[1]);
        }
    }

    #[test]
    fn crosses_an_open_room_in_trial_order() {
        let path = walk(&open_room()).unwrap();
        // Down twice, then right along the bottom of the room.
        assert_eq!(path, vec![p(1, 1), p(1, 2), p(1, 3), p(2, 3), p(3, 3)]);
    }

    #[test]
    fn detours_around_painted_walls() {
        let mut grid = open_room();
        grid.set_wall(p(1, 3));
        grid.set_wall(p(2, 3));
        let path = walk(&grid).unwrap();
        assert_eq!(path, vec![p(1, 1), p(1, 2), p(2, 2), p(3, 2), p(3, 3)]);
    }

    #[test]
    fn reports_no_path_when_the_goal_is_sealed() {
        let mut grid = open_room();
        // The goal's only open approaches in a 5x5 room.
        grid.set_wall(p(2, 3));
        grid.set_wall(p(3, 2));
        assert_eq!(walk(&grid), None);
    }

    #[test]
    fn reports_no_path_when_the_start_is_sealed() {
        let mut grid = open_room();
        grid.set_wall(p(1, 2));
        grid.set_wall(p(2, 1));
        assert_eq!(walk(&grid), None);
    }

    #[test]
    fn follows_a_straight_corridor() {
        let grid = Grid::new(7, 3, p(1, 1), p(5, 1)).unwrap();
        let path = walk(&grid).unwrap();
        assert_eq!(path, vec![p(1, 1), p(2, 1), p(3, 1), p(4, 1), p(5, 1)]);
    }

    #[test]
    fn goal_directly_below_is_a_two_cell_path() {
        let grid = Grid::new(3, 4, p(1, 1), p(1, 2)).unwrap();
        assert_eq!(walk(&grid), Some(vec![p(1, 1), p(1, 2)]));
    }

    #[test]
    fn matching_endpoints_yield_a_single_cell_path() {
        let grid = open_room();
        let path = DepthFirst::new().find_path(&grid, p(1, 1), p(1, 1)).unwrap();
        assert_eq!(path, Some(vec![p(1, 1)]));
    }

    #[test]
    fn rejects_a_start_outside_the_grid() {
        let grid = open_room();
        let err = DepthFirst::new()
            .find_path(&grid, p(9, 9), grid.goal())
            .unwrap_err();
        assert_eq!(format!("{}", err), "start (9, 9) is outside the 5x5 grid");
    }

    #[test]
    fn rejects_a_goal_on_a_wall() {
        let mut grid = open_room();
        grid.set_wall(p(2, 2));
        let err = DepthFirst::new()
            .find_path(&grid, grid.start(), p(2, 2))
            .unwrap_err();
        assert_eq!(format!("{}", err), "goal (2, 2) is a wall cell");
    }

    #[test]
    fn repeated_searches_return_the_same_path() {
        let mut grid = open_room();
        grid.set_wall(p(2, 2));
        let mut searcher = DepthFirst::new();
        let first = searcher.find_path(&grid, grid.start(), grid.goal()).unwrap();
        let second = searcher.find_path(&grid, grid.start(), grid.goal()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn walks_a_winding_maze_without_repeats_or_jumps() {
        let grid = Grid::from_ascii(crate::standard_mazes::MAZE_RINGS).unwrap();
        let path = walk(&grid).unwrap();
        assert_eq!(path.first(), Some(&grid.start()));
        assert_eq!(path.last(), Some(&grid.goal()));
        assert_walkable(&path);
    }
}
