//! # Calculator Errors
//!
//! Error kinds raised by the input state machine and the remote operation
//! adapter. None of them is fatal to the session.

use thiserror::Error;

/// Errors produced while evaluating an operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Evaluate was pressed before an operator was chosen
    #[error("No operation selected")]
    NoOperationSelected,

    /// The pending operator has no remote counterpart
    #[error("Unsupported operation '{0}'")]
    UnsupportedOperation(char),

    /// The service answered with a non-success status
    #[error("HTTP {status}{}", fault_suffix(.fault))]
    Transport { status: u16, fault: Option<String> },

    /// The response did not contain the expected result element
    #[error("Invalid SOAP response: missing <{expected}>")]
    MalformedResponse { expected: String },

    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The response body could not be decompressed or decoded
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The request document could not be built
    #[error("Failed to build request: {0}")]
    Request(String),
}

impl CalcError {
    /// Errors detected before anything is sent to the service
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            CalcError::NoOperationSelected | CalcError::UnsupportedOperation(_)
        )
    }

    /// Status line text for this error
    pub fn status_message(&self) -> String {
        if self.is_local() {
            format!("⚠ {self}")
        } else {
            format!("❌ {self}")
        }
    }
}

fn fault_suffix(fault: &Option<String>) -> String {
    fault
        .as_ref()
        .map(|fault| format!(": {fault}"))
        .unwrap_or_default()
}

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;
