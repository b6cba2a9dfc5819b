//! Step definitions for Cucumber tests
//!
//! - `service` - choosing what the stub calculator answers
//! - `keypad` - key presses
//! - `display` - assertions on the display, status bar and requests

pub mod display;
pub mod keypad;
pub mod service;
