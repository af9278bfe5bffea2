use anyhow::{anyhow, bail, Result};
use rand::Rng;
use rustc_hash::FxHashSet;

/// A cell coordinate. `x` runs left to right, `y` runs top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Open,
    Wall,
}

/// Neighbor offsets in the fixed trial order: down, right, up, left.
pub const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// A rectangular maze. The outermost ring of cells is always walls, the
/// start and goal always stay open; both invariants hold from construction
/// through any amount of wall painting.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
    start: Position,
    goal: Position,
}

impl Grid {
    /// Build an all-open maze with a walled border. Start and goal must be
    /// distinct interior cells.
    pub fn new(width: usize, height: usize, start: Position, goal: Position) -> Result<Self> {
        Self::check_dims(width, height)?;

        let mut cells = vec![vec![Cell::Open; height]; width];
        for x in 0..width {
            cells[x][0] = Cell::Wall;
            cells[x][height - 1] = Cell::Wall;
        }
        for y in 0..height {
            cells[0][y] = Cell::Wall;
            cells[width - 1][y] = Cell::Wall;
        }

        let grid = Grid {
            width,
            height,
            cells,
            start,
            goal,
        };
        grid.validate()?;
        Ok(grid)
    }

    /// Parse a maze from its text form: `#` wall, `.` open, `S` start,
    /// `G` goal, one row per line. Blank lines may surround the maze but
    /// not interrupt it.
    pub fn from_ascii(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.lines().collect();
        let body_start = lines.iter().position(|line| !line.trim().is_empty());
        let body_end = lines.iter().rposition(|line| !line.trim().is_empty());
        let rows = match (body_start, body_end) {
            (Some(first), Some(last)) => &lines[first..=last],
            _ => bail!("maze text is empty"),
        };
        let height = rows.len();
        let width = rows[0].chars().count();

        let mut cells = vec![vec![Cell::Open; height]; width];
        let mut start = None;
        let mut goal = None;

        for (y, row) in rows.iter().enumerate() {
            let row_width = row.chars().count();
            if row_width != width {
                bail!("maze row {} is {} cells wide, expected {}", y, row_width, width);
            }
            for (x, ch) in row.chars().enumerate() {
                match ch {
                    '#' => cells[x][y] = Cell::Wall,
                    '.' => {}
                    'S' => {
                        if start.replace(Position { x, y }).is_some() {
                            bail!("maze has more than one start cell");
                        }
                    }
                    'G' => {
                        if goal.replace(Position { x, y }).is_some() {
                            bail!("maze has more than one goal cell");
                        }
                    }
                    _ => bail!("unrecognized maze character {:?} at ({}, {})", ch, x, y),
                }
            }
        }

        let start = start.ok_or_else(|| anyhow!("maze has no start cell (S)"))?;
        let goal = goal.ok_or_else(|| anyhow!("maze has no goal cell (G)"))?;

        let grid = Grid {
            width,
            height,
            cells,
            start,
            goal,
        };
        grid.validate()?;
        Ok(grid)
    }

    fn check_dims(width: usize, height: usize) -> Result<()> {
        if width < 3 || height < 3 {
            bail!(
                "maze must be at least 3x3 to have an interior, got {}x{}",
                width,
                height
            );
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        Self::check_dims(self.width, self.height)?;
        self.check_endpoint(self.start, "start")?;
        self.check_endpoint(self.goal, "goal")?;
        if self.start == self.goal {
            bail!("start and goal must be distinct cells");
        }
        if (0..self.height).any(|y| self.cells[0][y] != Cell::Wall) {
            bail!("left edge of the maze is not all walls");
        }
        if (0..self.height).any(|y| self.cells[self.width - 1][y] != Cell::Wall) {
            bail!("right edge of the maze is not all walls");
        }
        if (0..self.width).any(|x| self.cells[x][0] != Cell::Wall) {
            bail!("top edge of the maze is not all walls");
        }
        if (0..self.width).any(|x| self.cells[x][self.height - 1] != Cell::Wall) {
            bail!("bottom edge of the maze is not all walls");
        }
        Ok(())
    }

    fn check_endpoint(&self, pos: Position, name: &str) -> Result<()> {
        if !self.in_bounds(pos) {
            bail!(
                "{} ({}, {}) is outside the {}x{} grid",
                name,
                pos.x,
                pos.y,
                self.width,
                self.height
            );
        }
        if pos.x == 0 || pos.y == 0 || pos.x == self.width - 1 || pos.y == self.height - 1 {
            bail!("{} ({}, {}) sits on the boundary wall ring", name, pos.x, pos.y);
        }
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// The cell at `pos`, or `None` outside the grid.
    pub fn at(&self, pos: Position) -> Option<Cell> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(self.cells[pos.x][pos.y])
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        self.at(pos) == Some(Cell::Wall)
    }

    /// Paint a wall. Out-of-bounds targets, the start, the goal and cells
    /// that are already walls are left untouched; returns whether a wall
    /// was placed.
    pub fn set_wall(&mut self, pos: Position) -> bool {
        if !self.in_bounds(pos) || pos == self.start || pos == self.goal {
            return false;
        }
        if self.cells[pos.x][pos.y] == Cell::Wall {
            return false;
        }
        self.cells[pos.x][pos.y] = Cell::Wall;
        true
    }

    /// Paint up to `count` randomly chosen interior walls, obeying the same
    /// rules as `set_wall`. Attempts are capped, so a crowded interior may
    /// receive fewer walls than requested; returns how many were placed.
    pub fn scatter_walls(&mut self, count: usize, rng: &mut impl Rng) -> usize {
        let mut placed = 0;
        let mut attempts = 0;
        while placed < count && attempts < count * 10 {
            let pos = Position {
                x: rng.gen_range(1..self.width - 1),
                y: rng.gen_range(1..self.height - 1),
            };
            if self.set_wall(pos) {
                placed += 1;
            }
            attempts += 1;
        }
        placed
    }

    /// The neighbor one step along `delta`, or `None` if it leaves the grid.
    pub fn step(&self, pos: Position, delta: (i32, i32)) -> Option<Position> {
        let nx = pos.x as i32 + delta.0;
        let ny = pos.y as i32 + delta.1;
        if nx >= 0 && nx < self.width as i32 && ny >= 0 && ny < self.height as i32 {
            Some(Position {
                x: nx as usize,
                y: ny as usize,
            })
        } else {
            None
        }
    }

    /// Open cells adjacent to `pos`, in the fixed trial order.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        let mut neighbors = Vec::new();
        for delta in DIRECTIONS {
            if let Some(next) = self.step(pos, delta) {
                if self.cells[next.x][next.y] != Cell::Wall {
                    neighbors.push(next);
                }
            }
        }
        neighbors
    }

    /// Number of wall cells, border included.
    pub fn wall_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Wall)
            .count()
    }

    /// Print a visual representation of the maze with enhanced formatting
    pub fn print_grid(&self, trail: &FxHashSet<Position>, walker: Option<Position>) {
        println!("Legend: S=Start, G=Goal, A=Walker, *=Trail, #=Wall, .=Open");

        // Print column numbers header
        print!("   ");
        for x in 0..self.width {
            print!("{:2}", x % 10);
        }
        println!();

        for y in 0..self.height {
            // Print row number
            print!("{:2} ", y);

            for x in 0..self.width {
                let pos = Position { x, y };
                let char = if Some(pos) == walker {
                    'A'
                } else if pos == self.start {
                    'S'
                } else if pos == self.goal {
                    'G'
                } else if trail.contains(&pos) {
                    '*'
                } else {
                    match self.cells[x][y] {
                        Cell::Wall => '#',
                        Cell::Open => '.',
                    }
                };
                print!("{} ", char);
            }
            println!();
        }
        println!();
    }
}
