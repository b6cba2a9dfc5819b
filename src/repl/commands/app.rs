//! # Application Control Commands
//!
//! Commands for controlling the application lifecycle.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};

/// Quit the calculator (q or Ctrl+C)
pub struct QuitCommand;

impl Command for QuitCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        match event.code {
            KeyCode::Char('c') | KeyCode::Char('C') => {
                event.modifiers.contains(KeyModifiers::CONTROL)
            }
            KeyCode::Char('q') => !event.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        }
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::QuitRequested])
    }

    fn name(&self) -> &'static str {
        "Quit"
    }
}
