//! Plain-text rendering of a grid, one character per cell.

use std::fmt;

use crate::domain::Grid;

/// `#` for live cells, a space for dead ones, every row ending in `\n`.
pub fn render(grid: &Grid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for row in grid.rows() {
        out.extend(row.iter().map(|cell| cell.symbol()));
        out.push('\n');
    }
    out
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
