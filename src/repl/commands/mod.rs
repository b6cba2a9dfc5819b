//! # Command System
//!
//! Commands translate key events into [`CommandEvent`]s. They only read a
//! snapshot of the view model; the controller decides how to apply the
//! events they produce.

use anyhow::Result;
use crossterm::event::{KeyEvent, KeyEventKind};

pub mod app;
pub mod context;
pub mod events;
pub mod keypad;

pub use app::QuitCommand;
pub use context::{CommandContext, ViewModelSnapshot};
pub use events::CommandEvent;
pub use keypad::{ClearCommand, DigitCommand, EvaluateCommand, OperatorCommand};

/// A key binding
pub trait Command: Send + Sync {
    /// Check if this command should handle the given key event
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool;

    /// Produce the events describing what should happen
    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>>;

    /// Command name for debugging and logging
    fn name(&self) -> &'static str;
}

/// Registry that routes key events to the first relevant command
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create a registry with the calculator key bindings
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };
        registry.register_default_commands();
        registry
    }

    fn register_default_commands(&mut self) {
        // Quit first so Ctrl+C is never read as the clear key
        self.add_command(Box::new(QuitCommand));
        self.add_command(Box::new(DigitCommand));
        self.add_command(Box::new(OperatorCommand));
        self.add_command(Box::new(EvaluateCommand));
        self.add_command(Box::new(ClearCommand));
    }

    pub fn add_command(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Process a key event and return the events of the first matching command
    ///
    /// Key releases and repeats are ignored so each physical press is
    /// handled once.
    pub fn process_event(
        &self,
        event: KeyEvent,
        context: &CommandContext,
    ) -> Result<Vec<CommandEvent>> {
        if event.kind != KeyEventKind::Press {
            return Ok(vec![]);
        }

        for command in &self.commands {
            if command.is_relevant(context, &event) {
                tracing::debug!("Command {} handles key {:?}", command.name(), event.code);
                return command.execute(event, context);
            }
        }

        tracing::debug!("No command for key {:?}", event.code);
        Ok(vec![])
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
