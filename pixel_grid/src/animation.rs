// animation.rs - Background shift loop running as a tokio task
//
// The task never touches the grid. It posts LoopEvents to the UI thread, which
// applies each shift whole between frames.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::{debug, info, warn};
use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::EVENT_QUEUE_DEPTH;
use crate::error::AnimationError;

/// Wakes whoever draws the grid so posted events get applied.
pub trait RepaintSignal: Send + Sync + 'static {
    fn request_repaint(&self);
}

impl RepaintSignal for egui::Context {
    fn request_repaint(&self) {
        egui::Context::request_repaint(self);
    }
}

/// Headless runs have nothing to repaint.
impl RepaintSignal for () {
    fn request_repaint(&self) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopEvent {
    /// Rotate every row one column to the right.
    Shift,
    /// The loop stopped on its own; show the error to the user.
    Halted(AnimationError),
}

/// An event tagged with the run that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posted {
    pub run: u64,
    pub event: LoopEvent,
}

/// Parse the speed field as a non-negative number of milliseconds.
pub fn parse_interval(text: &str) -> Result<Duration, AnimationError> {
    text.parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| AnimationError::InvalidInterval { text: text.to_owned() })
}

/// Idle/Running state machine owning at most one shift task.
pub struct AnimationLoop {
    runtime: Handle,
    running: Arc<AtomicBool>,
    interval: watch::Sender<String>,
    events: mpsc::Sender<Posted>,
    repaint: Arc<dyn RepaintSignal>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
    next_run: u64,
    // Run whose shifts the UI still applies; None once stopped.
    live_run: Option<u64>,
}

impl AnimationLoop {
    /// Returns the loop and the receiving end the UI drains each frame.
    pub fn new(
        runtime: Handle,
        interval_text: &str,
        repaint: Arc<dyn RepaintSignal>,
    ) -> (Self, mpsc::Receiver<Posted>) {
        let (events, events_rx) = mpsc::channel(EVENT_QUEUE_DEPTH);
        let (interval, _) = watch::channel(interval_text.to_owned());

        let animation = Self {
            runtime,
            running: Arc::new(AtomicBool::new(false)),
            interval,
            events,
            repaint,
            cancel: CancellationToken::new(),
            task: None,
            next_run: 0,
            live_run: None,
        };
        (animation, events_rx)
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// True while a task exists that has not yet exited, even after `stop`.
    pub fn is_alive(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Whether events from `run` should still reach the grid.
    pub fn accepts(&self, run: u64) -> bool {
        self.live_run == Some(run)
    }

    pub fn interval_text(&self) -> String {
        self.interval.borrow().clone()
    }

    /// Read by the task at the start of its next wait.
    pub fn set_interval_text(&self, text: &str) {
        self.interval.send_replace(text.to_owned());
    }

    /// Idle -> Running. A no-op returning false while a previous task is alive.
    pub fn start(&mut self) -> bool {
        if self.is_alive() {
            debug!("start ignored: shift task still alive");
            return false;
        }

        self.running.store(true, Ordering::SeqCst);
        self.cancel = CancellationToken::new();
        let run = self.next_run;
        self.next_run += 1;
        self.live_run = Some(run);

        let task = shift_loop(
            run,
            self.running.clone(),
            self.interval.subscribe(),
            self.events.clone(),
            self.repaint.clone(),
            self.cancel.clone(),
        );
        self.task = Some(self.runtime.spawn(task));

        info!("animation run {run} started (interval {:?} ms)", self.interval_text());
        true
    }

    /// Running -> Idle. Interrupts a pending wait immediately.
    pub fn stop(&mut self) {
        let was_running = self.running.swap(false, Ordering::SeqCst);
        self.cancel.cancel();
        self.live_run = None;
        if was_running {
            info!("animation stopped");
        }
    }

    /// Wait for the current task, if any, to exit.
    pub async fn wait_idle(&mut self) {
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                warn!("shift task ended abnormally: {err}");
            }
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Post one shift, giving up if the loop is cancelled first.
async fn emit_shift(run: u64, events: &mpsc::Sender<Posted>, cancel: &CancellationToken) -> bool {
    let posted = Posted { run, event: LoopEvent::Shift };
    tokio::select! {
        _ = cancel.cancelled() => false,
        sent = events.send(posted) => sent.is_ok(),
    }
}

async fn shift_loop(
    run: u64,
    running: Arc<AtomicBool>,
    interval: watch::Receiver<String>,
    events: mpsc::Sender<Posted>,
    repaint: Arc<dyn RepaintSignal>,
    cancel: CancellationToken,
) {
    let mut shifts: u64 = 0;

    while running.load(Ordering::SeqCst) {
        if !emit_shift(run, &events, &cancel).await {
            break;
        }
        repaint.request_repaint();
        shifts += 1;

        // Re-read every cycle so edits apply without a restart.
        let text = interval.borrow().clone();
        match parse_interval(&text) {
            Ok(delay) if delay.is_zero() => {
                tokio::task::yield_now().await;
            }
            Ok(delay) => {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = tokio::time::sleep(delay) => {}
                }
            }
            Err(err) => {
                warn!("animation halted: {err}");
                running.store(false, Ordering::SeqCst);
                // Not raced against Stop: the notice is always delivered.
                let posted = Posted { run, event: LoopEvent::Halted(err) };
                if events.send(posted).await.is_ok() {
                    repaint.request_repaint();
                }
                break;
            }
        }
    }

    debug!("run {run} exiting after {shifts} shifts");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_interval_accepts_non_negative_integers() {
        assert_eq!(parse_interval("1000"), Ok(Duration::from_millis(1000)));
        assert_eq!(parse_interval("0"), Ok(Duration::ZERO));
        assert_eq!(parse_interval("+25"), Ok(Duration::from_millis(25)));
        assert_eq!(parse_interval("007"), Ok(Duration::from_millis(7)));
    }

    #[test]
    fn parse_interval_rejects_everything_else() {
        for text in ["", "abc", "-5", "-0x", " 10", "10 ", "1.5", "12ms"] {
            assert_eq!(
                parse_interval(text),
                Err(AnimationError::InvalidInterval { text: text.to_owned() }),
                "{text:?} should be rejected",
            );
        }
    }
}
