// config.rs - Window, layout and logging configuration

use eframe::egui;

use crate::grid::{COLS, ROWS};

pub const WINDOW_TITLE: &str = "Animated Grid";
pub const BANNER_TEXT: &str = "Click cells to paint them, then press Start";
pub const NOTICE_TITLE: &str = "Invalid speed";

pub const DEFAULT_INTERVAL_TEXT: &str = "1000";   // Milliseconds between shifts
pub const INTERVAL_FIELD_CHARS: usize = 5;

pub const CELL_SIZE: f32 = 30.0;
pub const CELL_SPACING: f32 = 1.0;

/// Shift events buffered ahead of the UI before the task waits on it.
pub const EVENT_QUEUE_DEPTH: usize = 64;

pub const LOG_FILTER: &str = "pixel_grid=info";

/// Grid area in points, including the gaps between cells.
pub fn grid_extent() -> egui::Vec2 {
    egui::vec2(
        (CELL_SIZE + CELL_SPACING) * COLS as f32 - CELL_SPACING,
        (CELL_SIZE + CELL_SPACING) * ROWS as f32 - CELL_SPACING,
    )
}

pub fn native_options() -> eframe::NativeOptions {
    let extent = grid_extent();
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([extent.x + 40.0, extent.y + 130.0])
            .with_min_inner_size([extent.x + 20.0, extent.y + 110.0]),
        centered: true,
        ..Default::default()
    }
}

/// Install env_logger. `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or(LOG_FILTER);
    if let Err(err) = env_logger::Builder::from_env(env).try_init() {
        eprintln!("logging already initialised: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_extent_fits_every_cell() {
        let extent = grid_extent();
        assert_eq!(extent.x, COLS as f32 * CELL_SIZE + (COLS - 1) as f32 * CELL_SPACING);
        assert_eq!(extent.y, ROWS as f32 * CELL_SIZE + (ROWS - 1) as f32 * CELL_SPACING);
    }

    #[test]
    fn default_interval_is_valid() {
        assert!(crate::animation::parse_interval(DEFAULT_INTERVAL_TEXT).is_ok());
    }
}
