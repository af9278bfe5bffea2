use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(long)]
    pub maze_file: Option<PathBuf>,

    #[arg(long)]
    pub preset: Option<String>,

    #[arg(long, default_value_t = 25)]
    pub width: usize,

    #[arg(long, default_value_t = 15)]
    pub height: usize,

    #[arg(long, default_value_t = 2)]
    pub start_x: usize,

    #[arg(long, default_value_t = 2)]
    pub start_y: usize,

    #[arg(long, default_value_t = 22)]
    pub goal_x: usize,

    #[arg(long, default_value_t = 12)]
    pub goal_y: usize,

    #[arg(long, default_value_t = 50)]
    pub num_walls: usize,

    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value = "dfs")]
    pub algorithm: String,

    #[arg(long, default_value_t = 100)]
    pub delay_ms: u64,

    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_the_classic_demo_board() {
        let config = Config::parse_from(["maze_walker"]);
        assert_eq!(config.width, 25);
        assert_eq!(config.height, 15);
        assert_eq!((config.start_x, config.start_y), (2, 2));
        assert_eq!((config.goal_x, config.goal_y), (22, 12));
        assert_eq!(config.algorithm, "dfs");
        assert_eq!(config.delay_ms, 100);
        assert!(!config.no_visualization);
    }
}
