mod document_view;
mod help;
mod status_bar;

pub use document_view::DocumentViewWidget;
pub use help::HelpWidget;
pub use status_bar::StatusBarWidget;
