//! Shared board fixtures for the `sim` submodule test suites.

use crate::config::SimConfig;
use crate::grid::Grid;
use crate::state::SimState;
use crate::types::Pos;

use super::Simulation;

pub(crate) fn state_with(grid: Grid, player: Pos, bots: &[Pos]) -> SimState {
    SimState::place(grid, player, bots.to_vec()).expect("fixture placement should be valid")
}

/// Bot in the middle of a 7x7 board with a wall on each of its four sides.
pub(crate) fn boxed_in_fixture() -> (Grid, Pos) {
    let bot = Pos { x: 3, y: 3 };
    let walls = [Pos { x: 3, y: 2 }, Pos { x: 3, y: 4 }, Pos { x: 2, y: 3 }, Pos { x: 4, y: 3 }];
    (Grid::with_walls(7, 7, &walls), bot)
}

/// Two-row board whose top row is walled between the ends, forcing a detour
/// through the bottom row. Returns `(grid, start, goal)`.
pub(crate) fn corridor_detour_fixture() -> (Grid, Pos, Pos) {
    let walls = [Pos { x: 1, y: 0 }, Pos { x: 2, y: 0 }, Pos { x: 3, y: 0 }];
    (Grid::with_walls(5, 2, &walls), Pos { x: 0, y: 0 }, Pos { x: 4, y: 0 })
}

/// Open board whose bots move on every tick that passes `config.bot_move_interval_ms`.
pub(crate) fn open_simulation(size: usize, player: Pos, bots: &[Pos]) -> Simulation {
    let config = SimConfig::open(size, size, bots.len());
    Simulation::from_layout(&config, player, bots.to_vec()).expect("fixture layout should be valid")
}
