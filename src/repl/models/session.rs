//! # Calculator Session
//!
//! The input state machine. Digits extend the entry buffer, operators
//! capture it as the stored operand, and evaluation hands both operands to
//! the remote adapter. All transitions are synchronous.

use super::display::format_for_display;
use crate::error::{CalcError, CalcResult};
use crate::repl::services::{EvaluationRequest, RemoteOperation};

/// Entry buffer content at start and after clear
pub const DEFAULT_ENTRY: &str = "0";

/// What an operator key press did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorSelection {
    /// Entry buffer captured as the stored operand
    OperandStored,
    /// Only the pending operator changed (pressed twice in a row)
    OperatorReplaced,
}

/// Session state for one calculator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorSession {
    entry_buffer: String,
    stored_operand: Option<String>,
    pending_operation: Option<char>,
    entry_mode: bool,
    display_text: String,
}

impl CalculatorSession {
    pub fn new() -> Self {
        Self {
            entry_buffer: DEFAULT_ENTRY.to_string(),
            stored_operand: None,
            pending_operation: None,
            entry_mode: true,
            display_text: DEFAULT_ENTRY.to_string(),
        }
    }

    pub fn entry_buffer(&self) -> &str {
        &self.entry_buffer
    }

    pub fn stored_operand(&self) -> Option<&str> {
        self.stored_operand.as_deref()
    }

    pub fn pending_operation(&self) -> Option<char> {
        self.pending_operation
    }

    /// True while digits extend the current number
    pub fn is_entering(&self) -> bool {
        self.entry_mode
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// Feed a digit or decimal point
    ///
    /// Returns false when the key was ignored (not a digit, or a second
    /// decimal point).
    pub fn push_digit(&mut self, digit: char) -> bool {
        if !(digit.is_ascii_digit() || digit == '.') {
            tracing::debug!("Ignoring non-digit input {:?}", digit);
            return false;
        }

        if !self.entry_mode {
            self.entry_buffer = if digit == '.' {
                "0.".to_string()
            } else {
                digit.to_string()
            };
            self.entry_mode = true;
        } else if digit == '.' && self.entry_buffer.contains('.') {
            return false;
        } else if self.entry_buffer == DEFAULT_ENTRY && digit != '.' {
            self.entry_buffer = digit.to_string();
        } else {
            self.entry_buffer.push(digit);
        }

        self.display_text = format_for_display(&self.entry_buffer);
        true
    }

    /// Select an operator
    ///
    /// Replacing a pending operator also redraws the display with the new
    /// symbol, so the display always shows the operator last pressed.
    pub fn select_operator(&mut self, symbol: char) -> OperatorSelection {
        let selection = if self.pending_operation.is_some() && !self.entry_mode {
            self.pending_operation = Some(symbol);
            OperatorSelection::OperatorReplaced
        } else {
            self.stored_operand = Some(self.entry_buffer.clone());
            self.pending_operation = Some(symbol);
            self.entry_mode = false;
            OperatorSelection::OperandStored
        };

        self.display_text = symbol.to_string();
        selection
    }

    /// Build the request for the pending operation without changing state
    pub fn prepare_evaluation(&self) -> CalcResult<EvaluationRequest> {
        let (Some(symbol), Some(operand_a)) = (self.pending_operation, &self.stored_operand) else {
            return Err(CalcError::NoOperationSelected);
        };

        let operation = RemoteOperation::from_symbol(symbol)?;
        Ok(EvaluationRequest {
            operation,
            operand_a: operand_a.clone(),
            operand_b: self.entry_buffer.clone(),
        })
    }

    /// Store a successful remote result
    pub fn apply_result(&mut self, result: &str) {
        let result = result.trim();
        self.entry_buffer = if result.is_empty() {
            DEFAULT_ENTRY.to_string()
        } else {
            result.to_string()
        };
        self.display_text = format_for_display(&self.entry_buffer);
        self.stored_operand = None;
        self.pending_operation = None;
        self.entry_mode = false;
    }

    /// Reset everything to defaults
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new()
    }
}
