//! Autonomous scroll controller
//!
//! Passively scrolls a [`ScrollTarget`] forward at a configured rate, driven
//! entirely by the platform's per-repaint frame callback, while yielding to
//! user input, tab visibility and the reduced-motion preference.
//!
//! # Layers
//!
//! ## Atomic
//! - `config` - `Duration` views over [`AutoScrollConfig`](crate::AutoScrollConfig)
//! - `timing` - Pure frame-timing and accumulator helpers
//! - `input` - Interaction and visibility events
//! - `target` / `platform` - The collaborators the controller is bound to
//!
//! ## Molecular
//! - `controller` - [`AutoScroller`], the scheduling state machine
//!
//! # Usage
//!
//! ```ignore
//! use autoscroll_core::{AutoScroller, AutoScrollConfig};
//!
//! let mut scroller = AutoScroller::new(AutoScrollConfig::default(), target, platform);
//! scroller.start();
//!
//! // When the platform fires the frame the controller asked for:
//! scroller.on_frame(handle, timestamp);
//!
//! // Direct user input suspends it, a resume timer brings it back:
//! scroller.handle_input(&InputEvent::Wheel);
//! scroller.on_resume_timer(timer);
//! ```

// Atomic layer
pub mod config;
pub mod input;
pub mod platform;
pub mod target;
pub mod timing;

// Molecular layer
pub mod controller;

pub use config::AutoScrollConfigExt;
pub use controller::{AutoScroller, Direction};
pub use input::{InputEvent, Key, Visibility};
pub use platform::{FrameHandle, FramePlatform, TimerHandle};
pub use target::ScrollTarget;
