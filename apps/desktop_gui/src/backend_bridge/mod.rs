//! Backend worker: owns the tokio runtime and all network I/O for the UI.

pub mod commands;
pub mod runtime;
