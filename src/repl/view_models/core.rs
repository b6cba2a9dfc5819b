//! # ViewModel - Business Logic Coordinator
//!
//! The ViewModel owns the calculator session, the status line and the
//! evaluation service. Commands are applied to it by the controller, and it
//! records which parts of the view need redrawing.

use crate::repl::events::ViewEvent;
use crate::repl::models::{CalculatorSession, StatusLine};
use crate::repl::services::CalculatorService;

/// The central ViewModel that coordinates all business logic
pub struct ViewModel {
    pub(super) session: CalculatorSession,
    pub(super) status_line: StatusLine,
    pub(super) service: CalculatorService,

    /// Id of the outstanding evaluation, if any
    pub(super) in_flight: Option<u64>,
    pub(super) next_request_id: u64,

    terminal_size: (u16, u16),
    pending_view_events: Vec<ViewEvent>,
}

impl ViewModel {
    /// Create a view model that evaluates through `service`
    pub fn new(service: CalculatorService) -> Self {
        let mut status_line = StatusLine::new();
        status_line.set_endpoint(service.describe());

        Self {
            session: CalculatorSession::new(),
            status_line,
            service,
            in_flight: None,
            next_request_id: 1,
            terminal_size: (80, 24),
            pending_view_events: Vec::new(),
        }
    }

    pub fn session(&self) -> &CalculatorSession {
        &self.session
    }

    pub fn status_line(&self) -> &StatusLine {
        &self.status_line
    }

    pub fn status_message(&self) -> &str {
        self.status_line.status_message()
    }

    pub fn display_text(&self) -> &str {
        self.session.display_text()
    }

    /// Text describing the pending operation, e.g. `7 +`
    pub fn operation_text(&self) -> String {
        match (self.session.stored_operand(), self.session.pending_operation()) {
            (Some(operand), Some(symbol)) => format!("{operand} {symbol}"),
            _ => String::new(),
        }
    }

    /// Replace the status message without touching the session
    pub fn show_status_message(&mut self, message: impl Into<String>) {
        self.status_line.set_status_message(message);
        self.emit_view_event([ViewEvent::StatusBarUpdateRequired]);
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.status_line.set_verbose(verbose);
        tracing::debug!("Verbose mode set to: {}", verbose);
    }

    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
        self.emit_view_event([ViewEvent::FullRedrawRequired]);
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Queue view events for the renderer
    pub(super) fn emit_view_event<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = ViewEvent>,
    {
        for event in events {
            if !self.pending_view_events.contains(&event) {
                self.pending_view_events.push(event);
            }
        }
    }

    /// Take all queued view events
    pub fn collect_pending_view_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.pending_view_events)
    }
}
