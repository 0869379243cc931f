use std::time::Instant;

use autoscroll_core::{AppConfig, AutoScroller, ScrollTarget, TargetKind, Visibility};
use crossterm::event::{KeyEvent, MouseEvent};
use tracing::debug;

use crate::document::Document;
use crate::input::{
    handle_key_event, handle_mouse_event, interaction_for_key, interaction_for_mouse, Action,
};
use crate::platform::TerminalPlatform;
use crate::theme::Theme;
use crate::viewport::DocumentViewport;

/// Speed change per `+`/`-` press, in units per second
const SPEED_STEP: f64 = 20.0;

pub type DocumentScroller = AutoScroller<DocumentViewport, TerminalPlatform>;

/// What the status bar reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollStatus {
    Scrolling,
    /// Suspended by interaction or focus loss, will resume on its own
    Paused,
    /// Running but idle because of the reduced-motion preference
    ReducedMotion,
    Stopped,
}

/// Terminal host state
pub struct App {
    pub config: AppConfig,
    pub theme: Theme,
    pub document: Document,
    pub scroller: DocumentScroller,
    pub show_help: bool,
    pub should_quit: bool,
    /// Transient message shown instead of the status summary
    pub status_message: Option<String>,
    /// Width the document is currently wrapped to
    text_width: u16,
}

impl App {
    pub fn new(config: AppConfig, document: Document, theme: Theme) -> Self {
        let viewport = DocumentViewport::new(config.ui.row_height);
        let platform = TerminalPlatform::new(config.ui.reduced_motion);
        let scroller = AutoScroller::new(config.autoscroll.clone(), viewport, platform);

        Self {
            config,
            theme,
            document,
            scroller,
            show_help: false,
            should_quit: false,
            status_message: None,
            text_width: 0,
        }
    }

    pub fn target_kind(&self) -> TargetKind {
        self.config.ui.target
    }

    pub fn status(&self) -> ScrollStatus {
        if self.scroller.is_active() {
            let idle = self.scroller.config().respect_reduced_motion
                && self.scroller.platform().reduced_motion();
            if idle {
                ScrollStatus::ReducedMotion
            } else {
                ScrollStatus::Scrolling
            }
        } else if self.scroller.is_auto_suspended() {
            ScrollStatus::Paused
        } else {
            ScrollStatus::Stopped
        }
    }

    /// Re-wrap for the text area and update the viewport extents
    pub fn sync_layout(&mut self, width: u16, height: u16) {
        self.text_width = width;
        let rows = self.document.wrapped(width).len();
        self.scroller.target_mut().set_layout(rows, height);
    }

    /// Rows currently in view
    pub fn visible_rows(&mut self) -> Vec<String> {
        let first = self.scroller.target().first_row();
        let count = self.scroller.target().visible_rows() as usize;
        self.document
            .wrapped(self.text_width)
            .iter()
            .skip(first)
            .take(count)
            .cloned()
            .collect()
    }

    pub fn handle_key(&mut self, key: &KeyEvent) {
        if self.show_help {
            // Any key closes help
            self.show_help = false;
            return;
        }
        self.status_message = None;

        self.scroller.handle_input(&interaction_for_key(key));
        let action = handle_key_event(key);
        self.apply(action);
    }

    pub fn handle_mouse(&mut self, mouse: &MouseEvent) {
        if let Some(event) = interaction_for_mouse(mouse) {
            self.scroller.handle_input(&event);
        }
        self.apply(handle_mouse_event(mouse));
    }

    /// Terminal focus stands in for page visibility
    pub fn set_focused(&mut self, focused: bool) {
        let visibility = if focused {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        self.scroller.set_visibility(visibility);
    }

    /// Repaint tick: fire due timers, then deliver the pending frame
    pub fn on_frame(&mut self, now: Instant) {
        let due = self.scroller.platform_mut().take_due_timers(now);
        for timer in due {
            self.scroller.on_resume_timer(timer);
        }
        let frame = self.scroller.platform_mut().take_frame();
        if let Some(frame) = frame {
            let timestamp = self.scroller.platform().timestamp(now);
            self.scroller.on_frame(frame, timestamp);
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleAutoScroll => {
                if self.scroller.is_active() || self.scroller.is_auto_suspended() {
                    self.scroller.stop();
                    self.status_message = Some("Auto-scroll stopped".to_string());
                } else {
                    self.scroller.start();
                    self.status_message = Some("Auto-scroll started".to_string());
                }
            }
            Action::SpeedUp => self.change_speed(SPEED_STEP),
            Action::SpeedDown => self.change_speed(-SPEED_STEP),
            Action::ToggleReducedMotion => {
                let platform = self.scroller.platform_mut();
                let reduced = !platform.reduced_motion();
                platform.set_reduced_motion(reduced);
                self.status_message = Some(format!(
                    "Reduced motion {}",
                    if reduced { "on" } else { "off" }
                ));
            }
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::ScrollRows(rows) => self.scroller.target_mut().scroll_rows(rows),
            Action::ScrollPages(pages) => self.scroller.target_mut().scroll_pages(pages),
            Action::JumpToTop => self.scroller.target_mut().scroll_to(0.0),
            Action::JumpToBottom => {
                let viewport = self.scroller.target_mut();
                let max = viewport.max_offset();
                viewport.scroll_to(max);
            }
            Action::None => {}
        }
    }

    fn change_speed(&mut self, delta: f64) {
        let speed = self.scroller.speed() + delta;
        self.scroller.set_speed(speed);
        debug!(speed = self.scroller.speed(), "speed changed");
        self.status_message = Some(format!("Speed {:.0}/s", self.scroller.speed()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn app() -> App {
        let text = (0..200)
            .map(|i| format!("line {}", i))
            .collect::<Vec<_>>()
            .join("\n");
        let mut app = App::new(
            AppConfig::default(),
            Document::from_text("invite.txt", &text),
            Theme::default(),
        );
        app.sync_layout(40, 10);
        app
    }

    #[test]
    fn test_frames_advance_the_viewport() {
        let mut app = app();
        app.scroller.start();
        let t0 = Instant::now();
        app.on_frame(t0);
        for i in 1..=30 {
            app.on_frame(t0 + Duration::from_millis(20 * i));
        }
        // 120 px/s for 0.6s at 20 px per row
        assert!(app.scroller.target().offset() >= 70.0);
        assert_eq!(app.visible_rows()[0], format!("line {}", app.scroller.target().first_row()));
        assert_eq!(app.status(), ScrollStatus::Scrolling);
    }

    #[test]
    fn test_arrow_key_pauses_and_scrolls_manually() {
        let mut app = app();
        app.scroller.start();
        app.handle_key(&key(KeyCode::Down));
        assert_eq!(app.status(), ScrollStatus::Paused);
        assert_eq!(app.scroller.target().first_row(), 1);

        app.on_frame(Instant::now() + Duration::from_secs(3));
        assert_eq!(app.status(), ScrollStatus::Scrolling);
    }

    #[test]
    fn test_toggle_is_explicit_stop() {
        let mut app = app();
        app.scroller.start();
        app.handle_key(&key(KeyCode::Down));
        app.handle_key(&key(KeyCode::Char('s')));
        assert_eq!(app.status(), ScrollStatus::Stopped);

        app.on_frame(Instant::now() + Duration::from_secs(3));
        assert_eq!(app.status(), ScrollStatus::Stopped);

        app.handle_key(&key(KeyCode::Char('s')));
        assert_eq!(app.status(), ScrollStatus::Scrolling);
    }

    #[test]
    fn test_reduced_motion_toggle() {
        let mut app = app();
        app.scroller.start();
        app.handle_key(&key(KeyCode::Char('m')));
        assert_eq!(app.status(), ScrollStatus::ReducedMotion);
        assert_eq!(app.status_message.as_deref(), Some("Reduced motion on"));
    }

    #[test]
    fn test_speed_keys() {
        let mut app = app();
        app.handle_key(&key(KeyCode::Char('+')));
        assert_eq!(app.scroller.speed(), 140.0);
        for _ in 0..10 {
            app.handle_key(&key(KeyCode::Char('-')));
        }
        assert_eq!(app.scroller.speed(), 0.0);
    }

    #[test]
    fn test_focus_loss_pauses() {
        let mut app = app();
        app.scroller.start();
        app.set_focused(false);
        assert_eq!(app.status(), ScrollStatus::Paused);
        app.set_focused(true);
        assert_eq!(app.status(), ScrollStatus::Scrolling);
    }

    #[test]
    fn test_help_swallows_next_key() {
        let mut app = app();
        app.handle_key(&key(KeyCode::Char('?')));
        assert!(app.show_help);
        app.handle_key(&key(KeyCode::Char('q')));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }
}
