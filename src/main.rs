use clap::Parser;

use anyhow::{Context, Result};
use maze_walker::algorithms::a_star::AStar;
use maze_walker::algorithms::common::PathfindingAlgorithm;
use maze_walker::algorithms::dfs::DepthFirst;
use maze_walker::config::Config;
use maze_walker::grid::{Grid, Position};
use maze_walker::playback::Playback;
use maze_walker::standard_mazes;
use maze_walker::statistics::Statistics;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::time::Instant;

fn main() {
    let config = Config::parse();

    let grid = match build_grid(&config) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Failed to set up the maze: {:#}", e);
            std::process::exit(1);
        }
    };

    if !config.quiet {
        println!("Starting maze walk...");
        println!("Maze size: {}x{}", grid.width(), grid.height());
        println!("Walls: {}", grid.wall_count());
        println!(
            "Start: ({}, {}), Goal: ({}, {})",
            grid.start().x,
            grid.start().y,
            grid.goal().x,
            grid.goal().y
        );
        println!("Algorithm: {}", config.algorithm);

        if config.no_visualization {
            println!("Visualization disabled - printing the path as coordinates");
        } else {
            println!("Visualization enabled with {}ms delay", config.delay_ms);
        }

        println!();
    }

    let mut algorithm: Box<dyn PathfindingAlgorithm> = match config.algorithm.as_str() {
        "dfs" => Box::new(DepthFirst::new()),
        "a_star" => Box::new(AStar::new()),
        other => {
            eprintln!("Unknown algorithm {:?}: select 'dfs' or 'a_star'", other);
            std::process::exit(1);
        }
    };

    let mut stats = Statistics::new(grid.width(), grid.height(), grid.wall_count());

    let search_start = Instant::now();
    let path = match algorithm.find_path(&grid, grid.start(), grid.goal()) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Invalid search input: {:#}", e);
            std::process::exit(1);
        }
    };
    stats.search_time = search_start.elapsed();
    stats.path_length = path.as_ref().map(|p| p.len());
    stats.optimal_length = optimal_length(&grid);
    stats.calculate_efficiency();

    match path {
        Some(path) => {
            let playback = Playback::new(&grid, &path, config.delay_ms);
            if config.no_visualization {
                playback.print_path();
            } else {
                // Small delay before the first frame replaces the banner
                std::thread::sleep(std::time::Duration::from_millis(1000));
                playback.run();
            }
        }
        None => {
            println!("No path exists between start and goal under the current walls.");
            println!("Try reducing --num-walls or loading a different maze.");
        }
    }

    if !config.quiet {
        println!("\n=== FINAL RESULTS ===");
        println!("{}", stats);
    }
}

/// Build the maze the walk will run on: an explicit file wins, then a named
/// preset, otherwise a freshly generated board with scattered walls.
fn build_grid(config: &Config) -> Result<Grid> {
    if let Some(path) = &config.maze_file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("could not read maze file {}", path.display()))?;
        return Grid::from_ascii(&text);
    }

    if let Some(name) = &config.preset {
        return standard_mazes::by_name(name);
    }

    let mut grid = Grid::new(
        config.width,
        config.height,
        Position {
            x: config.start_x,
            y: config.start_y,
        },
        Position {
            x: config.goal_x,
            y: config.goal_y,
        },
    )?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    grid.scatter_walls(config.num_walls, &mut rng);

    Ok(grid)
}

/// Length of the shortest route on the current board, used to judge the walk.
fn optimal_length(grid: &Grid) -> Option<usize> {
    AStar::new()
        .find_path(grid, grid.start(), grid.goal())
        .ok()
        .flatten()
        .map(|path| path.len())
}
