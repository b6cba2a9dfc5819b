//! # Input Handling
//!
//! Applies calculator actions to the session and updates the status line.

use crate::repl::events::{CalcAction, ViewEvent};
use crate::repl::view_models::core::ViewModel;

impl ViewModel {
    /// Apply one calculator action
    pub fn handle_action(&mut self, action: CalcAction) {
        tracing::debug!("Handling {} action: {:?}", action.category(), action);

        match action {
            CalcAction::Digit(digit) => self.input_digit(digit),
            CalcAction::Operator(symbol) => self.select_operator(symbol),
            CalcAction::Evaluate => self.evaluate(),
            CalcAction::Clear => self.clear(),
        }
    }

    fn input_digit(&mut self, digit: char) {
        if self.session.push_digit(digit) {
            self.emit_view_event([ViewEvent::DisplayUpdateRequired]);
        }
    }

    fn select_operator(&mut self, symbol: char) {
        let selection = self.session.select_operator(symbol);
        tracing::debug!("Operator {} selected: {:?}", symbol, selection);

        self.status_line
            .set_status_message(format!("Op set to {symbol}"));
        self.emit_view_event([
            ViewEvent::DisplayUpdateRequired,
            ViewEvent::StatusBarUpdateRequired,
        ]);
    }

    /// Reset the session and abandon any outstanding evaluation
    fn clear(&mut self) {
        if let Some(request_id) = self.in_flight.take() {
            tracing::info!("Abandoning request #{} on clear", request_id);
            self.status_line.set_executing(false);
        }

        self.session.clear();
        self.status_line.clear_status_message();
        self.emit_view_event([
            ViewEvent::DisplayUpdateRequired,
            ViewEvent::StatusBarUpdateRequired,
        ]);
    }
}
