// main.rs - Animated pixel grid window

use std::sync::Arc;

use log::info;
use pixel_grid::config::{self, WINDOW_TITLE};
use pixel_grid::{AppError, PixelGridApp};

fn main() -> Result<(), AppError> {
    config::init_logging();

    // Owned by the app; hosts the shift task off the UI thread.
    let runtime = tokio::runtime::Runtime::new()?;
    info!("opening {WINDOW_TITLE:?}");

    eframe::run_native(
        WINDOW_TITLE,
        config::native_options(),
        Box::new(move |cc| {
            let repaint = Arc::new(cc.egui_ctx.clone());
            Box::new(PixelGridApp::new(runtime, repaint))
        }),
    )?;

    Ok(())
}
