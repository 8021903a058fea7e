/// State of a single grid position.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// State this cell takes in the next generation, given how many of its
    /// in-bounds neighbors are alive now. `Grid::next_state` feeds it the
    /// count from the frozen previous generation.
    pub const fn evolve(self, neighbors: u8) -> Self {
        match self {
            Cell::Alive if neighbors == 2 || neighbors == 3 => Cell::Alive,
            Cell::Dead if neighbors == 3 => Cell::Alive,
            _ => Cell::Dead,
        }
    }

    /// Character used by the text renderer.
    pub const fn symbol(self) -> char {
        match self {
            Cell::Alive => '#',
            Cell::Dead => ' ',
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}
