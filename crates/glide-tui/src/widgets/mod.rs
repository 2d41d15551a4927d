pub mod document;
pub mod scroll_buttons;
pub mod status_bar;

pub use document::DocumentWidget;
pub use scroll_buttons::ScrollButtonsWidget;
pub use status_bar::StatusBarWidget;
