//! Fixed-size cell grid with bounds and occupancy queries.
//! Entity positions live in `SimState`; this type only stores what each cell holds.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use crate::types::{CellKind, Pos};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellKind>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![CellKind::Empty; width * height] }
    }

    /// Builds a grid whose wall set is fixed from here on. Out-of-range walls are
    /// skipped; `SimConfig::validate` reports them before this point.
    pub fn with_walls(width: usize, height: usize, walls: &[Pos]) -> Self {
        let mut grid = Self::new(width, height);
        for &wall in walls {
            if grid.in_bounds(wall) {
                let idx = grid.index(wall);
                grid.cells[idx] = CellKind::Wall;
            }
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn is_empty(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.cells[self.index(pos)] == CellKind::Empty
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        self.cell_at(pos) == CellKind::Wall
    }

    pub fn cell_at(&self, pos: Pos) -> CellKind {
        if !self.in_bounds(pos) {
            return CellKind::Wall;
        }
        self.cells[self.index(pos)]
    }

    /// Overwrites the tag of a non-wall cell with a non-wall kind.
    /// Out-of-range positions and wall edits are ignored.
    pub fn set_cell(&mut self, pos: Pos, kind: CellKind) {
        if !self.in_bounds(pos) || kind == CellKind::Wall {
            return;
        }
        let idx = self.index(pos);
        if self.cells[idx] == CellKind::Wall {
            return;
        }
        self.cells[idx] = kind;
    }

    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|cell| **cell == kind).count()
    }

    /// Samples coordinates uniformly until an empty cell turns up.
    pub fn random_empty_position(&self, rng: &mut ChaCha8Rng) -> Option<Pos> {
        if self.count(CellKind::Empty) == 0 {
            return None;
        }
        loop {
            let x = (rng.next_u64() % self.width as u64) as i32;
            let y = (rng.next_u64() % self.height as u64) as i32;
            let pos = Pos { x, y };
            if self.is_empty(pos) {
                return Some(pos);
            }
        }
    }

    /// Row-major view of the cells, one slice per row.
    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> {
        self.cells.chunks(self.width.max(1))
    }

    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}
