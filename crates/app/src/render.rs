//! Rendering for the board and the status line.

use macroquad::prelude::*;
use pursuit_app::app_loop::AppMode;
use pursuit_app::{CELL_SIZE, status_text};
use pursuit_core::{CellKind, Pos, Snapshot};

const WALL_COLOR: Color = Color { r: 100.0 / 255.0, g: 100.0 / 255.0, b: 100.0 / 255.0, a: 1.0 };
const STATUS_FONT_SIZE: f32 = 20.0;

pub fn cell_color(kind: CellKind) -> Color {
    match kind {
        CellKind::Empty => WHITE,
        CellKind::Wall => WALL_COLOR,
        CellKind::Player => GREEN,
        CellKind::Bot => RED,
    }
}

/// Tick counter in grey while running, black once the run has ended.
pub fn status_color(mode: &AppMode) -> Color {
    match mode {
        AppMode::Running => DARKGRAY,
        AppMode::Caught { .. } | AppMode::Quit => BLACK,
    }
}

pub fn draw_frame(snapshot: &Snapshot, mode: &AppMode, tick: u64) {
    clear_background(WHITE);
    for y in 0..snapshot.height {
        for x in 0..snapshot.width {
            let kind = snapshot.cell_at(Pos::new(x as i32, y as i32));
            draw_rectangle(
                x as f32 * CELL_SIZE,
                y as f32 * CELL_SIZE,
                CELL_SIZE,
                CELL_SIZE,
                cell_color(kind),
            );
        }
    }

    let status = status_text(mode, tick);
    draw_text(&status, 8.0, STATUS_FONT_SIZE, STATUS_FONT_SIZE, status_color(mode));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_is_dimmed_while_running() {
        assert_eq!(status_color(&AppMode::Running), DARKGRAY);
        assert_eq!(status_color(&AppMode::Caught { bot: 0 }), BLACK);
    }

    #[test]
    fn every_cell_kind_has_a_distinct_color() {
        let colors =
            [CellKind::Empty, CellKind::Wall, CellKind::Player, CellKind::Bot].map(cell_color);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
