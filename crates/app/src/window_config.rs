//! Window configuration for the desktop app.

use macroquad::window::Conf;
use pursuit_app::{APP_NAME, CELL_SIZE};
use pursuit_core::SimConfig;

/// One cell per `CELL_SIZE` pixels, no margins.
pub fn build_window_conf(config: &SimConfig) -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: (config.width as f32 * CELL_SIZE) as i32,
        window_height: (config.height as f32 * CELL_SIZE) as i32,
        window_resizable: false,
        ..Default::default()
    }
}
