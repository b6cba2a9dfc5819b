//! # Status Line Model
//!
//! Encapsulates all state related to the status line display,
//! providing a clean interface for status bar rendering.

/// Status shown when the calculator starts
pub const READY_MESSAGE: &str = "Ready";

/// Status line model containing all status bar display state
#[derive(Debug, Clone)]
pub struct StatusLine {
    /// Current status message (may be empty)
    status_message: String,

    /// Whether a remote evaluation is outstanding
    is_executing: bool,

    /// Round trip time of the last completed evaluation
    last_duration_ms: Option<u64>,

    /// Where requests are sent
    endpoint: String,

    /// Whether durations are appended to result messages
    verbose: bool,
}

impl StatusLine {
    /// Create a new StatusLine with default values
    pub fn new() -> Self {
        Self {
            status_message: READY_MESSAGE.to_string(),
            is_executing: false,
            last_duration_ms: None,
            endpoint: String::new(),
            verbose: false,
        }
    }

    // === Status Message Methods ===

    /// Set the status message
    pub fn set_status_message<S: Into<String>>(&mut self, message: S) {
        self.status_message = message.into();
    }

    /// Clear the status message
    pub fn clear_status_message(&mut self) {
        self.status_message.clear();
    }

    /// Get the current status message
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    // === Execution State Methods ===

    pub fn set_executing(&mut self, executing: bool) {
        self.is_executing = executing;
    }

    pub fn is_executing(&self) -> bool {
        self.is_executing
    }

    /// Record the round trip time of the last evaluation
    pub fn set_last_duration(&mut self, duration_ms: u64) {
        self.last_duration_ms = Some(duration_ms);
    }

    pub fn last_duration_ms(&self) -> Option<u64> {
        self.last_duration_ms
    }

    // === Settings ===

    pub fn set_endpoint<S: Into<String>>(&mut self, endpoint: S) {
        self.endpoint = endpoint.into();
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Message for a successful evaluation
    pub fn success_message(&self) -> String {
        match (self.verbose, self.last_duration_ms) {
            (true, Some(ms)) => format!("✔ Done ({ms} ms)"),
            _ => "✔ Done".to_string(),
        }
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new()
    }
}
