//! # MVVM Architecture Implementation
//!
//! Keys flow from the controller through commands into the view model,
//! which drives the calculator session and the evaluation service. The view
//! redraws whatever the view model reports as changed.

pub mod commands;
pub mod controllers;
pub mod events;
pub mod io;
pub mod models;
pub mod services;
pub mod view_models;
pub mod views;

#[cfg(test)]
pub mod testing;

// Re-export core types
pub use controllers::AppController;
pub use events::*;
pub use view_models::*;
pub use views::*;

// Re-export specific items from commands to avoid conflicts
pub use commands::{Command, CommandContext, CommandEvent, CommandRegistry, ViewModelSnapshot};

pub use models::{CalculatorSession, StatusLine};
