use super::{Cell, Grid};

/// A small named configuration of live cells
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    /// Live cells as (row, col) relative to the top-left corner
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let height = cells.iter().map(|(r, _)| *r).max().map_or(0, |r| r + 1);
        let width = cells.iter().map(|(_, c)| *c).max().map_or(0, |c| c + 1);
        Self { name, description, width, height, cells }
    }

    /// Stamp the pattern with its top-left corner at (row, col). Cells that
    /// fall outside the grid are dropped.
    pub fn place_on(&self, grid: &mut Grid, row: usize, col: usize) {
        for (dr, dc) in &self.cells {
            grid.set(row + dr, col + dc, Cell::Alive);
        }
    }

    /// Dead grid of the given size with the pattern centred in it.
    pub fn centered(&self, width: usize, height: usize) -> Grid {
        let mut grid = Grid::new(width, height);
        let row = height.saturating_sub(self.height) / 2;
        let col = width.saturating_sub(self.width) / 2;
        self.place_on(&mut grid, row, col);
        grid
    }
}

/// Classic patterns with known behaviour
#[rustfmt::skip]
pub mod presets {
    use super::*;

    /// Block - still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }

    /// Beehive - still life
    pub fn beehive() -> Pattern {
        Pattern::new(
            "Beehive",
            "Still life",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 3),
                (2, 1), (2, 2),
            ],
        )
    }

    /// Blinker - period 2, horizontal phase
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", vec![(0, 0), (0, 1), (0, 2)])
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Glider - moves one cell diagonally every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Spaceship (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![block(), beehive(), blinker(), toad(), beacon(), glider()]
    }
}
