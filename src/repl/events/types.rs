//! # Core Event Types
//!
//! Calculator actions produced by key bindings and consumed by the view
//! model. Each action carries its category and, where relevant, a value.

/// Semantic calculator input, independent of how it was bound to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcAction {
    /// A digit `0`-`9` or the decimal point
    Digit(char),
    /// An operator symbol such as `+`
    Operator(char),
    /// Send the pending operation to the remote service
    Evaluate,
    /// Reset the session
    Clear,
}

impl CalcAction {
    /// Action category name used in logs
    pub fn category(&self) -> &'static str {
        match self {
            CalcAction::Digit('.') => "dot",
            CalcAction::Digit(_) => "digit",
            CalcAction::Operator(_) => "op",
            CalcAction::Evaluate => "equals",
            CalcAction::Clear => "clear",
        }
    }
}
