use super::Cell;
use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::prelude::*;

/// Relative positions of the 8 cells surrounding a cell, as (row, col) offsets.
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// One generation of the automaton: a fixed-size rectangle of cells with
/// non-wrapping edges, stored row-major in a single buffer.
///
/// Evolution never mutates `self`; each step returns a fresh grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Fill every cell with an independent fair coin flip drawn from `rng`.
    pub fn random<R: Rng>(width: usize, height: usize, rng: &mut R) -> Self {
        let cells = (0..width * height)
            .map(|_| Cell::from(rng.random::<bool>()))
            .collect();
        Self { width, height, cells }
    }

    /// Random grid reproducible from `seed`.
    pub fn seeded(width: usize, height: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::random(width, height, &mut rng)
    }

    /// Build a grid from text rows where `#` marks a live cell. Short rows are
    /// padded with dead cells up to the longest row.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Self {
        let width = rows
            .iter()
            .map(|row| row.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        let mut grid = Self::new(width, rows.len());
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.as_ref().chars().enumerate() {
                grid.set(row, col, Cell::from(ch == '#'));
            }
        }
        grid
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Cell at (row, col), or `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.height && col < self.width).then(|| self.cells[self.index(row, col)])
    }

    /// Overwrite a cell; out-of-bounds writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.height && col < self.width {
            let idx = self.index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Count live cells among the 8 surrounding (row, col). Positions past an
    /// edge do not exist and contribute nothing.
    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                self.get(r, c)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// State of (row, col) in the next generation. Reads only from `self`.
    pub fn next_state(&self, row: usize, col: usize) -> Cell {
        let current = self.cells[self.index(row, col)];
        current.evolve(self.neighbor_count(row, col))
    }

    /// Next generation, computed on one thread.
    pub fn step_serial(&self) -> Self {
        let cells = (0..self.cells.len())
            .map(|i| self.next_state(i / self.width, i % self.width))
            .collect();
        self.with_cells(cells)
    }

    /// Next generation, with the flattened row x column space split across
    /// the current rayon pool. Produces exactly what `step_serial` does.
    pub fn step(&self) -> Self {
        let cells = (0..self.cells.len())
            .into_par_iter()
            .map(|i| self.next_state(i / self.width, i % self.width))
            .collect();
        self.with_cells(cells)
    }

    fn with_cells(&self, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), self.cells.len());
        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Rows of the grid, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.height).map(move |row| {
            let start = row * self.width;
            &self.cells[start..start + self.width]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;

    fn live_cells(grid: &Grid) -> Vec<(usize, usize)> {
        (0..grid.height())
            .flat_map(|r| (0..grid.width()).map(move |c| (r, c)))
            .filter(|&(r, c)| grid.get(r, c) == Some(Cell::Alive))
            .collect()
    }

    #[test]
    fn test_step_preserves_dimensions() {
        for (w, h) in [(1, 1), (7, 3), (3, 7), (16, 16)] {
            let grid = Grid::seeded(w, h, 7);
            let next = grid.step();
            assert_eq!(next.dimensions(), (w, h));
            assert_eq!(next.rows().count(), h);
        }
    }

    #[test]
    fn test_empty_grids() {
        for (w, h) in [(0, 0), (0, 5), (5, 0)] {
            let grid = Grid::new(w, h);
            let next = grid.step();
            assert!(next.is_empty());
            assert_eq!(next.dimensions(), (w, h));
            assert_eq!(grid.step_serial(), next);
        }
    }

    #[test]
    fn test_lone_cell_dies() {
        let grid = Grid::from_rows(&["   ", " # ", "   "]);
        assert_eq!(grid.neighbor_count(1, 1), 0);
        assert_eq!(grid.step().population(), 0);
    }

    #[test]
    fn test_survival_with_two_neighbors() {
        let grid = Grid::from_rows(&["#    ", " #   ", "  #  "]);
        assert_eq!(grid.neighbor_count(1, 1), 2);
        assert_eq!(grid.step().get(1, 1), Some(Cell::Alive));
    }

    #[test]
    fn test_overpopulation() {
        let grid = Grid::from_rows(&["# #", " # ", "# #"]);
        assert_eq!(grid.neighbor_count(1, 1), 4);
        assert_eq!(grid.step().get(1, 1), Some(Cell::Dead));
    }

    #[test]
    fn test_reproduction() {
        let grid = Grid::from_rows(&["# #", "   ", " # "]);
        assert_eq!(grid.neighbor_count(1, 1), 3);
        assert_eq!(grid.step().get(1, 1), Some(Cell::Alive));

        let grid = Grid::from_rows(&["# #", "   ", "   "]);
        assert_eq!(grid.step().get(1, 1), Some(Cell::Dead));
    }

    #[test]
    fn test_neighbor_count_full_neighborhood() {
        let grid = Grid::from_rows(&["###", "###", "###"]);
        assert_eq!(grid.neighbor_count(1, 1), 8);
        assert_eq!(grid.neighbor_count(0, 0), 3);
        assert_eq!(grid.neighbor_count(0, 1), 5);
    }

    #[test]
    fn test_no_wraparound_at_corners() {
        let mut grid = Grid::new(4, 3);
        grid.set(2, 3, Cell::Alive);
        assert_eq!(grid.neighbor_count(0, 0), 0);

        let mut grid = Grid::new(4, 3);
        grid.set(0, 0, Cell::Alive);
        assert_eq!(grid.neighbor_count(2, 3), 0);

        // Would be born on a torus: three live cells around the opposite corner
        let grid = Grid::from_rows(&["   #", "    ", "#  #"]);
        assert_eq!(grid.neighbor_count(0, 0), 0);
        assert_eq!(grid.step().get(0, 0), Some(Cell::Dead));
    }

    #[test]
    fn test_edge_cells_count_only_inside() {
        let grid = Grid::from_rows(&["##", "##"]);
        for (r, c) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            assert_eq!(grid.neighbor_count(r, c), 3);
        }
        assert_eq!(grid.step(), grid);
    }

    #[test]
    fn test_order_independence() {
        let grid = Grid::seeded(23, 17, 99);
        let expected = grid.step();

        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..4 {
            let mut order: Vec<usize> = (0..grid.width() * grid.height()).collect();
            order.shuffle(&mut rng);

            let mut next = Grid::new(grid.width(), grid.height());
            for i in order {
                let (r, c) = (i / grid.width(), i % grid.width());
                next.set(r, c, grid.next_state(r, c));
            }
            assert_eq!(next, expected);
        }
        assert_eq!(grid.step_serial(), expected);
    }

    #[test]
    fn test_step_does_not_touch_input() {
        let grid = Grid::seeded(12, 12, 3);
        let before = grid.clone();
        let _ = grid.step();
        assert_eq!(grid, before);
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = Grid::from_rows(&["     ", "     ", " ### ", "     ", "     "]);
        let vertical = horizontal.step();
        assert_eq!(live_cells(&vertical), vec![(1, 2), (2, 2), (3, 2)]);
        assert_eq!(vertical.step(), horizontal);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        assert_eq!(Grid::seeded(20, 20, 1749994962), Grid::seeded(20, 20, 1749994962));
        assert_ne!(Grid::seeded(20, 20, 1), Grid::seeded(20, 20, 2));
    }

    #[test]
    fn test_random_fill_is_roughly_half() {
        let grid = Grid::seeded(100, 100, 42);
        let ratio = grid.population() as f64 / 10_000.0;
        assert!((0.4..0.6).contains(&ratio), "ratio = {ratio}");
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = Grid::new(3, 2);
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
        grid.set(5, 5, Cell::Alive);
        assert_eq!(grid.population(), 0);
    }
}
