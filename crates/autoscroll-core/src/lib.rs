pub mod config;
pub mod error;
pub mod scroll;
pub mod sim;

pub use config::{AppConfig, AutoScrollConfig, BoundaryStrategy, TargetKind};
pub use error::{Error, Result};
pub use scroll::{
    AutoScroller, Direction, FrameHandle, FramePlatform, InputEvent, Key, ScrollTarget,
    TimerHandle, Visibility,
};
