//! UI layer for the desktop client: app shell, tab panels, widgets and theme.

pub mod app;
pub mod labels;
pub mod panels;
pub mod theme;
pub mod widgets;

pub use app::{NeedhiApp, StartupConfig};
