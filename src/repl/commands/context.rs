//! # Command Context
//!
//! Read-only view of calculator state handed to commands.

use crate::repl::view_models::ViewModel;

/// Read-only snapshot of ViewModel state for commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModelSnapshot {
    pub is_evaluating: bool,
    pub entry_buffer: String,
    pub pending_operation: Option<char>,
}

impl ViewModelSnapshot {
    /// Create snapshot from current ViewModel state
    pub fn from_view_model(view_model: &ViewModel) -> Self {
        Self {
            is_evaluating: view_model.is_evaluating(),
            entry_buffer: view_model.session().entry_buffer().to_string(),
            pending_operation: view_model.session().pending_operation(),
        }
    }
}

/// Context available to all commands
pub struct CommandContext {
    pub state: ViewModelSnapshot,
}

impl CommandContext {
    pub fn new(state: ViewModelSnapshot) -> Self {
        Self { state }
    }

    /// Context for a fresh session with nothing outstanding
    pub fn idle() -> Self {
        Self::new(ViewModelSnapshot {
            is_evaluating: false,
            entry_buffer: "0".to_string(),
            pending_operation: None,
        })
    }
}
