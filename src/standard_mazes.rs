//! Named maze layouts, ready to load by name or embed in tests.

use crate::grid::Grid;
use anyhow::{bail, Result};

/// The classic demo board: a 25x15 open room with start (2, 2) and
/// goal (22, 12), waiting for walls to be painted.
pub const MAZE_DEMO: &str = "\
#########################
#.......................#
#.S.....................#
#.......................#
#.......................#
#.......................#
#.......................#
#.......................#
#.......................#
#.......................#
#.......................#
#.......................#
#.....................G.#
#.......................#
#########################
";

/// Two nested rings joined by short gaps, so every route has to wind.
pub const MAZE_RINGS: &str = "\
#############
#.S...#...G.#
#.###.#.###.#
#.#...#...#.#
#.#.#####.#.#
#.#.......#.#
#.#########.#
#...........#
#############
";

/// Look a built-in layout up by its CLI name.
pub fn by_name(name: &str) -> Result<Grid> {
    match name {
        "demo" => Grid::from_ascii(MAZE_DEMO),
        "rings" => Grid::from_ascii(MAZE_RINGS),
        other => bail!("unknown preset maze {:?}, available: demo, rings", other),
    }
}
