//! Terminal event plumbing.
//!
//! A blocking task forwards crossterm events over a channel; the handler
//! merges them with the repaint tick so the run loop awaits a single source.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};
use tokio::sync::mpsc;
use tokio::time::{interval, Interval, MissedTickBehavior};
use tracing::warn;

/// How long the reader blocks before checking whether the app went away
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Mouse button, wheel or drag
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Terminal window gained focus
    FocusGained,
    /// Terminal window lost focus
    FocusLost,
    /// Repaint tick
    Frame,
}

/// Event handler for terminal events and repaint ticks
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    frames: Interval,
}

impl EventHandler {
    /// Start the reader task and a repaint tick at `frame_rate` per second
    pub fn new(frame_rate: u32) -> Self {
        let rate = frame_rate.clamp(1, 240);
        let mut frames = interval(Duration::from_secs_f64(1.0 / rate as f64));
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Self {
            rx: spawn_event_reader(),
            frames,
        }
    }

    /// Wait for the next event; `None` once the reader has stopped
    pub async fn next(&mut self) -> Option<AppEvent> {
        tokio::select! {
            event = self.rx.recv() => event,
            _ = self.frames.tick() => Some(AppEvent::Frame),
        }
    }
}

fn spawn_event_reader() -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match event::poll(POLL_INTERVAL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    warn!("terminal event poll failed: {}", e);
                    break;
                }
            }

            let app_event = match event::read() {
                // Only key presses; some terminals also report releases
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(Event::Resize(w, h)) => AppEvent::Resize(w, h),
                Ok(Event::FocusGained) => AppEvent::FocusGained,
                Ok(Event::FocusLost) => AppEvent::FocusLost,
                Ok(_) => continue,
                Err(e) => {
                    warn!("terminal event read failed: {}", e);
                    break;
                }
            };

            if tx.send(app_event).is_err() {
                break;
            }
        }
    });

    rx
}
