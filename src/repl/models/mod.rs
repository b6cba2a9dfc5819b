//! # Models Module
//!
//! Re-exports all model implementations: the calculator session (input
//! state machine), the status line, and display formatting.

pub mod display;
pub mod session;
pub mod status_line;

// Re-export all models for easy access
pub use display::format_for_display;
pub use session::{CalculatorSession, OperatorSelection, DEFAULT_ENTRY};
pub use status_line::{StatusLine, READY_MESSAGE};
