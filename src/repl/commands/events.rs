//! # Command Events
//!
//! Events produced by commands that describe what should happen.
//! Commands produce these events, and the controller applies them to the ViewModel.

use crate::repl::events::CalcAction;

/// Events that commands can produce to request changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEvent {
    /// Apply a calculator action to the session
    ActionRequested(CalcAction),

    /// Show a message in the status bar without touching the session
    StatusMessageRequested { message: String },

    /// Request to quit application
    QuitRequested,

    /// No action needed
    NoAction,
}

impl CommandEvent {
    pub fn action(action: CalcAction) -> Self {
        Self::ActionRequested(action)
    }

    pub fn status(message: impl Into<String>) -> Self {
        Self::StatusMessageRequested {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_should_build_matching_variants() {
        assert_eq!(
            CommandEvent::action(CalcAction::Clear),
            CommandEvent::ActionRequested(CalcAction::Clear)
        );
        assert_eq!(
            CommandEvent::status("busy"),
            CommandEvent::StatusMessageRequested {
                message: "busy".to_string()
            }
        );
    }
}
