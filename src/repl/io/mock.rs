//! # Mock I/O Implementations for Testing
//!
//! Scripted input and recorded output for driving the controller without a
//! terminal. Clones of a [`MockRenderStream`] share one recording, so a test
//! can keep a handle after giving the stream to the renderer.

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::Color;
use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Event stream fed from a queue
#[derive(Default)]
pub struct MockEventStream {
    events: VecDeque<Event>,
}

impl MockEventStream {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Stream of plain key presses, one per character
    pub fn from_keys(keys: &str) -> Self {
        Self::new(
            keys.chars()
                .map(|ch| Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)))
                .collect(),
        )
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No events available"))
    }
}

/// Recorded render command for verification
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    ClearScreen,
    ClearLine,
    MoveCursor(u16, u16),
    HideCursor,
    ShowCursor,
    SetForeground(Color),
    ResetStyle,
    EnterAlternateScreen,
    LeaveAlternateScreen,
    EnableRawMode,
    DisableRawMode,
    Write(String),
    Flush,
}

type CommandHistory = Arc<Mutex<Vec<RenderCommand>>>;

/// Render stream that records every command
#[derive(Clone)]
pub struct MockRenderStream {
    commands: CommandHistory,
    terminal_size: TerminalSize,
}

impl MockRenderStream {
    pub fn new() -> Self {
        Self::with_size((80, 24))
    }

    pub fn with_size(size: TerminalSize) -> Self {
        Self {
            commands: Arc::new(Mutex::new(Vec::new())),
            terminal_size: size,
        }
    }

    pub fn get_commands(&self) -> Vec<RenderCommand> {
        self.commands.lock().unwrap().clone()
    }

    pub fn clear_commands(&self) {
        self.commands.lock().unwrap().clear();
    }

    pub fn has_command(&self, command: &RenderCommand) -> bool {
        self.commands.lock().unwrap().contains(command)
    }

    /// All text written since the last clear screen
    pub fn written_text(&self) -> String {
        let commands = self.commands.lock().unwrap();
        let start = commands
            .iter()
            .rposition(|c| *c == RenderCommand::ClearScreen)
            .map_or(0, |i| i + 1);
        commands[start..]
            .iter()
            .filter_map(|c| match c {
                RenderCommand::Write(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Text written right after the cursor moved to `row`, most recent last
    pub fn writes_on_row(&self, row: u16) -> Vec<String> {
        let commands = self.commands.lock().unwrap();
        let mut current_row = None;
        let mut writes = Vec::new();
        for command in commands.iter() {
            match command {
                RenderCommand::MoveCursor(_, y) => current_row = Some(*y),
                RenderCommand::Write(text) if current_row == Some(row) => {
                    writes.push(text.clone())
                }
                _ => {}
            }
        }
        writes
    }

    fn record(&self, command: RenderCommand) {
        self.commands.lock().unwrap().push(command);
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.record(RenderCommand::Write(
            String::from_utf8_lossy(buf).to_string(),
        ));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.record(RenderCommand::Flush);
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        self.record(RenderCommand::ClearScreen);
        Ok(())
    }

    fn clear_line(&mut self) -> Result<()> {
        self.record(RenderCommand::ClearLine);
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.record(RenderCommand::MoveCursor(x, y));
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.record(RenderCommand::HideCursor);
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.record(RenderCommand::ShowCursor);
        Ok(())
    }

    fn set_foreground(&mut self, color: Color) -> Result<()> {
        self.record(RenderCommand::SetForeground(color));
        Ok(())
    }

    fn reset_style(&mut self) -> Result<()> {
        self.record(RenderCommand::ResetStyle);
        Ok(())
    }

    fn get_size(&self) -> Result<TerminalSize> {
        Ok(self.terminal_size)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        self.record(RenderCommand::EnterAlternateScreen);
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        self.record(RenderCommand::LeaveAlternateScreen);
        Ok(())
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        self.record(RenderCommand::EnableRawMode);
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        self.record(RenderCommand::DisableRawMode);
        Ok(())
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}
