// app.rs - Window state: the grid, the speed field and the animation loop

use std::sync::Arc;

use log::{debug, info, trace};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::animation::{AnimationLoop, LoopEvent, Posted, RepaintSignal};
use crate::config::DEFAULT_INTERVAL_TEXT;
use crate::grid::Grid;

/// Top-level window state. Owns the grid and the only animation loop.
pub struct PixelGridApp {
    pub grid: Grid,
    pub interval_text: String,
    pub notice: Option<String>,

    animation: AnimationLoop,
    events: mpsc::Receiver<Posted>,

    // Dropped last so the loop is stopped before its runtime goes away.
    _runtime: Runtime,
}

/// Actions the control panel and the grid view drive.
pub trait PixelGridInterface {
    fn start_animation(&mut self) -> bool;
    fn stop_animation(&mut self);
    fn clear_grid(&mut self);
    fn click_cell(&mut self, row: usize, col: usize);
    fn set_interval_text(&mut self, text: &str);
    fn apply_pending_events(&mut self) -> usize;
    fn dismiss_notice(&mut self);
    fn is_running(&self) -> bool;
}

impl PixelGridApp {
    pub fn new(runtime: Runtime, repaint: Arc<dyn RepaintSignal>) -> Self {
        let (animation, events) =
            AnimationLoop::new(runtime.handle().clone(), DEFAULT_INTERVAL_TEXT, repaint);

        Self {
            grid: Grid::new(),
            interval_text: DEFAULT_INTERVAL_TEXT.to_owned(),
            notice: None,
            animation,
            events,
            _runtime: runtime,
        }
    }
}

impl PixelGridInterface for PixelGridApp {
    fn start_animation(&mut self) -> bool {
        self.animation.start()
    }

    fn stop_animation(&mut self) {
        self.animation.stop();
    }

    /// Resets colors only; a running loop keeps shifting.
    fn clear_grid(&mut self) {
        self.grid.clear();
        info!("grid cleared");
    }

    fn click_cell(&mut self, row: usize, col: usize) {
        if self.grid.toggle_cell(row, col) {
            debug!("cell ({row}, {col}) toggled");
        }
    }

    fn set_interval_text(&mut self, text: &str) {
        self.interval_text = text.to_owned();
        self.animation.set_interval_text(text);
    }

    /// Apply everything the loop posted since the last frame. Shifts from a
    /// stopped or replaced run are discarded; notices are always kept.
    fn apply_pending_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(Posted { run, event }) = self.events.try_recv() {
            match event {
                LoopEvent::Shift if self.animation.accepts(run) => self.grid.shift_right(),
                LoopEvent::Shift => {
                    trace!("dropped shift from stale run {run}");
                    continue;
                }
                LoopEvent::Halted(err) => self.notice = Some(err.to_string()),
            }
            applied += 1;
        }
        applied
    }

    fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn is_running(&self) -> bool {
        self.animation.is_running()
    }
}
