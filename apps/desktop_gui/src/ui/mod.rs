//! UI layer for desktop GUI: app shell, filter panel and doctor cards.

pub mod app;
pub mod cards;
pub mod filters;

pub use app::{DirectoryApp, StartupConfig};
