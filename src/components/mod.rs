//! UI components grouped by feature domain.
pub mod common;
pub mod assets;
pub mod attributes;

mod title_bar;
mod side_panel;
mod status_bar;
mod preview_panel;

pub use title_bar::TitleBar;
pub use side_panel::SidePanel;
pub use status_bar::StatusBar;
pub use preview_panel::PreviewPanel;
