// lib.rs - Animated pixel grid: clickable colored cells that rotate on a timer

pub mod animation;
pub mod app;
pub mod config;
pub mod error;
pub mod grid;
pub mod palette;
pub mod ui;

pub use animation::{AnimationLoop, LoopEvent, Posted, RepaintSignal, parse_interval};
pub use app::{PixelGridApp, PixelGridInterface};
pub use error::{AnimationError, AppError};
pub use grid::{COLS, Cell, Grid, ROWS};
pub use palette::CellColor;
