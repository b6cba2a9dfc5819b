//! # Keypad Commands
//!
//! Bindings for the calculator keys: digits, operators, equals and clear.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};
use crate::repl::events::CalcAction;
use crate::repl::view_models::IN_FLIGHT_MESSAGE;

/// Character typed without Ctrl or Alt held
fn plain_char(event: &KeyEvent) -> Option<char> {
    if event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match event.code {
        KeyCode::Char(ch) => Some(ch),
        _ => None,
    }
}

/// Digits and the decimal point (`,` is accepted for locales that use it)
pub struct DigitCommand;

impl Command for DigitCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(plain_char(event), Some('0'..='9' | '.' | ','))
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        let digit = match plain_char(&event) {
            Some(',') => '.',
            Some(ch) => ch,
            None => return Ok(vec![CommandEvent::NoAction]),
        };
        Ok(vec![CommandEvent::action(CalcAction::Digit(digit))])
    }

    fn name(&self) -> &'static str {
        "Digit"
    }
}

/// The four operator keys; `x` doubles as multiply
pub struct OperatorCommand;

impl OperatorCommand {
    fn symbol_for(ch: char) -> Option<char> {
        match ch {
            '+' | '-' | '*' | '/' => Some(ch),
            'x' | 'X' => Some('*'),
            _ => None,
        }
    }
}

impl Command for OperatorCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        plain_char(event).and_then(Self::symbol_for).is_some()
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(match plain_char(&event).and_then(Self::symbol_for) {
            Some(symbol) => vec![CommandEvent::action(CalcAction::Operator(symbol))],
            None => vec![CommandEvent::NoAction],
        })
    }

    fn name(&self) -> &'static str {
        "Operator"
    }
}

/// `=` or Enter
pub struct EvaluateCommand;

impl Command for EvaluateCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        event.code == KeyCode::Enter || plain_char(event) == Some('=')
    }

    fn execute(&self, _event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        if context.state.is_evaluating {
            return Ok(vec![CommandEvent::status(IN_FLIGHT_MESSAGE)]);
        }
        Ok(vec![CommandEvent::action(CalcAction::Evaluate)])
    }

    fn name(&self) -> &'static str {
        "Evaluate"
    }
}

/// `c`, Esc or Delete
pub struct ClearCommand;

impl Command for ClearCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Esc | KeyCode::Delete)
            || matches!(plain_char(event), Some('c' | 'C'))
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::action(CalcAction::Clear)])
    }

    fn name(&self) -> &'static str {
        "Clear"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::commands::ViewModelSnapshot;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn evaluating_context() -> CommandContext {
        CommandContext::new(ViewModelSnapshot {
            is_evaluating: true,
            entry_buffer: "5".to_string(),
            pending_operation: Some('+'),
        })
    }

    #[test]
    fn digit_should_accept_digits_and_point() {
        let context = CommandContext::idle();
        for ch in ['0', '5', '9', '.', ','] {
            assert!(DigitCommand.is_relevant(&context, &key(KeyCode::Char(ch))));
        }
        assert!(!DigitCommand.is_relevant(&context, &key(KeyCode::Char('a'))));
    }

    #[test]
    fn digit_should_map_comma_to_point() {
        let context = CommandContext::idle();
        let events = DigitCommand
            .execute(key(KeyCode::Char(',')), &context)
            .unwrap();
        assert_eq!(events, vec![CommandEvent::action(CalcAction::Digit('.'))]);
    }

    #[test]
    fn digit_should_ignore_ctrl_modified_keys() {
        let context = CommandContext::idle();
        let event = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::CONTROL);
        assert!(!DigitCommand.is_relevant(&context, &event));
    }

    #[test]
    fn operator_should_map_x_to_multiply() {
        let context = CommandContext::idle();
        for ch in ['x', 'X', '*'] {
            let events = OperatorCommand
                .execute(key(KeyCode::Char(ch)), &context)
                .unwrap();
            assert_eq!(events, vec![CommandEvent::action(CalcAction::Operator('*'))]);
        }
    }

    #[test]
    fn operator_should_accept_shifted_symbols() {
        let context = CommandContext::idle();
        let event = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT);
        assert!(OperatorCommand.is_relevant(&context, &event));
    }

    #[test]
    fn operator_should_not_claim_other_keys() {
        let context = CommandContext::idle();
        assert!(!OperatorCommand.is_relevant(&context, &key(KeyCode::Char('%'))));
        assert!(!OperatorCommand.is_relevant(&context, &key(KeyCode::Char('='))));
    }

    #[test]
    fn evaluate_should_accept_equals_and_enter() {
        let context = CommandContext::idle();
        assert!(EvaluateCommand.is_relevant(&context, &key(KeyCode::Enter)));
        assert!(EvaluateCommand.is_relevant(&context, &key(KeyCode::Char('='))));

        let events = EvaluateCommand.execute(key(KeyCode::Enter), &context).unwrap();
        assert_eq!(events, vec![CommandEvent::action(CalcAction::Evaluate)]);
    }

    #[test]
    fn evaluate_while_in_flight_should_only_report_status() {
        let context = evaluating_context();
        let events = EvaluateCommand
            .execute(key(KeyCode::Char('=')), &context)
            .unwrap();
        assert_eq!(events, vec![CommandEvent::status(IN_FLIGHT_MESSAGE)]);
    }

    #[test]
    fn clear_should_accept_c_escape_and_delete() {
        let context = CommandContext::idle();
        for code in [
            KeyCode::Char('c'),
            KeyCode::Char('C'),
            KeyCode::Esc,
            KeyCode::Delete,
        ] {
            assert!(ClearCommand.is_relevant(&context, &key(code)));
        }
        assert!(!ClearCommand.is_relevant(
            &context,
            &KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }

    #[test]
    fn clear_should_work_while_in_flight() {
        let context = evaluating_context();
        let events = ClearCommand.execute(key(KeyCode::Esc), &context).unwrap();
        assert_eq!(events, vec![CommandEvent::action(CalcAction::Clear)]);
    }
}
