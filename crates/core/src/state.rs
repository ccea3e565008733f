use crate::error::SimError;
use crate::grid::Grid;
use crate::types::*;

/// Authoritative entity positions, kept in lockstep with the grid tags.
#[derive(Clone, Debug)]
pub struct SimState {
    pub(crate) grid: Grid,
    pub(crate) player: Pos,
    pub(crate) bots: Vec<Pos>,
}

/// Read-only export for renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<CellKind>,
    pub player: Pos,
    pub bots: Vec<Pos>,
}

impl Snapshot {
    pub fn cell_at(&self, pos: Pos) -> CellKind {
        if pos.x < 0 || pos.y < 0 || pos.x as usize >= self.width || pos.y as usize >= self.height {
            return CellKind::Wall;
        }
        self.cells[pos.y as usize * self.width + pos.x as usize]
    }
}

impl SimState {
    /// Places the player and bots on an already-walled grid.
    pub(crate) fn place(mut grid: Grid, player: Pos, bots: Vec<Pos>) -> Result<Self, SimError> {
        if !grid.is_empty(player) {
            return Err(SimError::InvalidPlacement(player));
        }
        grid.set_cell(player, CellKind::Player);
        for &bot in &bots {
            if !grid.is_empty(bot) {
                return Err(SimError::InvalidPlacement(bot));
            }
            grid.set_cell(bot, CellKind::Bot);
        }
        Ok(Self { grid, player, bots })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> Pos {
        self.player
    }

    pub fn bots(&self) -> &[Pos] {
        &self.bots
    }

    /// Moves the player one cell if the destination is empty. Returns whether it moved.
    pub(crate) fn move_player(&mut self, direction: Direction) -> bool {
        let candidate = self.player.offset(direction);
        if !self.grid.is_empty(candidate) {
            return false;
        }
        self.grid.set_cell(self.player, CellKind::Empty);
        self.grid.set_cell(candidate, CellKind::Player);
        self.player = candidate;
        true
    }

    pub(crate) fn move_bot(&mut self, bot: usize, direction: Direction) -> bool {
        let Some(current) = self.bots.get(bot).copied() else {
            return false;
        };
        let candidate = current.offset(direction);
        if !self.grid.is_empty(candidate) {
            return false;
        }
        self.grid.set_cell(current, CellKind::Empty);
        self.grid.set_cell(candidate, CellKind::Bot);
        self.bots[bot] = candidate;
        true
    }

    /// True when the grid tags agree with the tracked positions and no stray
    /// Player/Bot tags exist.
    pub fn occupancy_consistent(&self) -> bool {
        self.grid.cell_at(self.player) == CellKind::Player
            && self.bots.iter().all(|bot| self.grid.cell_at(*bot) == CellKind::Bot)
            && self.grid.count(CellKind::Player) == 1
            && self.grid.count(CellKind::Bot) == self.bots.len()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.grid.width(),
            height: self.grid.height(),
            cells: self.grid.cells().to_vec(),
            player: self.player,
            bots: self.bots.clone(),
        }
    }
}
