pub mod app;
pub mod document;
pub mod event;
pub mod input;
pub mod platform;
pub mod theme;
pub mod viewport;
pub mod widgets;

pub use app::App;
pub use theme::Theme;
