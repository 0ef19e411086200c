//! UI layer for the roster GUI: app shell, screens, and theming.

pub mod app;
pub mod theme;

pub use app::{RosterGuiApp, StartupConfig};
