//! # View Layer
//!
//! Draws the calculator: the pending operation, the display, a key help
//! line and the status bar. Rendering goes through a [`RenderStream`] so the
//! same code drives the real terminal and the mock used in tests.

use crate::repl::events::ViewEvent;
use crate::repl::io::RenderStream;
use crate::repl::view_models::ViewModel;
use anyhow::Result;
use crossterm::style::Color;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE: &str = "SOAP Calculator";
const KEY_HELP: &str = "0-9 . digits  + - * / ops  = evaluate  c clear  q quit";

const TITLE_ROW: u16 = 0;
const OPERATION_ROW: u16 = 2;
const DISPLAY_ROW: u16 = 3;
const SEPARATOR_ROW: u16 = 4;
const HELP_ROW: u16 = 5;

/// Trait for rendering views
pub trait ViewRenderer {
    /// Prepare the terminal for drawing
    fn initialize(&mut self) -> Result<()>;

    /// Redraw everything
    fn render_full(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Redraw the operation line and the display
    fn render_display(&mut self, view_model: &ViewModel) -> Result<()>;

    fn render_status_bar(&mut self, view_model: &ViewModel) -> Result<()>;

    fn handle_view_event(&mut self, event: &ViewEvent, view_model: &ViewModel) -> Result<()>;

    /// Restore the terminal on exit
    fn cleanup(&mut self) -> Result<()>;
}

/// Renderer on top of any [`RenderStream`]
pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
    terminal_size: (u16, u16),
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    pub fn with_render_stream(render_stream: RS) -> Result<Self> {
        let terminal_size = render_stream.get_size()?;
        Ok(Self {
            render_stream,
            terminal_size,
        })
    }

    pub fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn render_stream(&self) -> &RS {
        &self.render_stream
    }

    fn width(&self) -> usize {
        self.terminal_size.0 as usize
    }

    /// Bottom row, kept below the help line on tiny terminals
    fn status_row(&self) -> u16 {
        self.terminal_size.1.saturating_sub(1).max(HELP_ROW + 1)
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        self.render_stream.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Write `text` on `row`, right-aligned to the terminal width
    fn write_right_aligned(&mut self, row: u16, text: &str, color: Color) -> Result<()> {
        let text = fit_to_width(text, self.width());
        let padding = self.width().saturating_sub(text.width());

        self.render_stream.move_cursor(0, row)?;
        self.render_stream.clear_line()?;
        self.render_stream.set_foreground(color)?;
        self.write_text(&format!("{}{}", " ".repeat(padding), text))?;
        self.render_stream.reset_style()
    }

    fn render_frame(&mut self) -> Result<()> {
        let separator = "─".repeat(self.width());

        self.render_stream.move_cursor(0, TITLE_ROW)?;
        self.render_stream.set_foreground(Color::Cyan)?;
        self.write_text(&fit_to_width(TITLE, self.width()))?;
        self.render_stream.reset_style()?;

        self.render_stream.set_foreground(Color::DarkGrey)?;
        for row in [TITLE_ROW + 1, SEPARATOR_ROW] {
            self.render_stream.move_cursor(0, row)?;
            self.write_text(&separator)?;
        }
        self.render_stream.move_cursor(0, HELP_ROW)?;
        self.write_text(&fit_to_width(KEY_HELP, self.width()))?;
        self.render_stream.reset_style()
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.render_stream.enable_raw_mode()?;
        self.render_stream.enter_alternate_screen()?;
        self.render_stream.hide_cursor()?;
        self.render_stream.clear_screen()?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn render_full(&mut self, view_model: &ViewModel) -> Result<()> {
        self.render_stream.clear_screen()?;
        self.render_frame()?;
        self.render_display(view_model)?;
        self.render_status_bar(view_model)?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn render_display(&mut self, view_model: &ViewModel) -> Result<()> {
        self.write_right_aligned(OPERATION_ROW, &view_model.operation_text(), Color::DarkGrey)?;
        self.write_right_aligned(DISPLAY_ROW, view_model.display_text(), Color::White)
    }

    fn render_status_bar(&mut self, view_model: &ViewModel) -> Result<()> {
        let status_row = self.status_row();
        let width = self.width();
        let message = fit_to_width(view_model.status_message(), width);

        self.render_stream.move_cursor(0, status_row)?;
        self.render_stream.clear_line()?;
        self.render_stream.set_foreground(status_color(&message))?;
        self.write_text(&message)?;
        self.render_stream.reset_style()?;

        // Endpoint goes on the right when there is room for it
        let endpoint = view_model.status_line().endpoint();
        let used = message.width() + 2;
        if !endpoint.is_empty() && used + endpoint.width() <= width {
            let column = (width - endpoint.width()) as u16;
            self.render_stream.move_cursor(column, status_row)?;
            self.render_stream.set_foreground(Color::DarkGrey)?;
            self.write_text(endpoint)?;
            self.render_stream.reset_style()?;
        }
        Ok(())
    }

    fn handle_view_event(&mut self, event: &ViewEvent, view_model: &ViewModel) -> Result<()> {
        match event {
            ViewEvent::FullRedrawRequired => self.render_full(view_model)?,
            ViewEvent::DisplayUpdateRequired => {
                self.render_display(view_model)?;
                self.render_stream.flush()?;
            }
            ViewEvent::StatusBarUpdateRequired => {
                self.render_status_bar(view_model)?;
                self.render_stream.flush()?;
            }
        }
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        self.render_stream.reset_style()?;
        self.render_stream.show_cursor()?;
        self.render_stream.leave_alternate_screen()?;
        self.render_stream.disable_raw_mode()?;
        self.render_stream.flush()?;
        Ok(())
    }
}

/// Color for a status message, picked from its leading marker
fn status_color(message: &str) -> Color {
    match message.chars().next() {
        Some('✔') => Color::Green,
        Some('❌') => Color::Red,
        Some('⚠') | Some('⏳') => Color::Yellow,
        _ => Color::Reset,
    }
}

/// Truncate `text` so its display width fits in `width` columns
fn fit_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }

    let mut fitted = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        used += ch_width;
        fitted.push(ch);
    }
    fitted
}
