//! # Evaluation Management
//!
//! Starts remote evaluations and applies their outcomes. Only one
//! evaluation may be outstanding; completions for abandoned requests are
//! dropped.

use crate::error::CalcResult;
use crate::repl::events::ViewEvent;
use crate::repl::services::ServiceMessage;
use crate::repl::view_models::core::ViewModel;

/// Status shown when evaluate is pressed during an outstanding request
pub const IN_FLIGHT_MESSAGE: &str = "⏳ Request already in flight";

impl ViewModel {
    /// Whether a remote evaluation is outstanding
    pub fn is_evaluating(&self) -> bool {
        self.in_flight.is_some()
    }

    pub(super) fn evaluate(&mut self) {
        if let Some(request_id) = self.in_flight {
            tracing::debug!("Evaluate ignored, request #{} outstanding", request_id);
            self.status_line.set_status_message(IN_FLIGHT_MESSAGE);
            self.emit_view_event([ViewEvent::StatusBarUpdateRequired]);
            return;
        }

        let request = match self.session.prepare_evaluation() {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!("Evaluation rejected: {}", e);
                self.status_line.set_status_message(e.status_message());
                self.emit_view_event([ViewEvent::StatusBarUpdateRequired]);
                return;
            }
        };

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight = Some(request_id);

        tracing::info!(
            "Sending request #{}: {} {} {}",
            request_id,
            request.operand_a,
            request.operation,
            request.operand_b
        );
        self.status_line.set_executing(true);
        self.status_line.set_status_message("⏳ Sending to SOAP...");
        self.emit_view_event([ViewEvent::StatusBarUpdateRequired]);

        self.service.execute_async(request_id, request);
    }

    /// Apply any messages the service has published; returns true if any
    /// were applied
    pub fn poll_service(&mut self) -> bool {
        let mut applied = false;
        while let Some(message) = self.service.poll_message() {
            applied |= self.apply_service_message(message);
        }
        applied
    }

    /// Wait until the outstanding evaluation, if any, has completed
    pub async fn wait_for_evaluation(&mut self) {
        while self.in_flight.is_some() {
            match self.service.next_message().await {
                Some(message) => {
                    self.apply_service_message(message);
                }
                None => break,
            }
        }
    }

    pub(super) fn apply_service_message(&mut self, message: ServiceMessage) -> bool {
        if self.in_flight != Some(message.request_id()) {
            tracing::debug!(
                "Dropping message for abandoned request #{}",
                message.request_id()
            );
            return false;
        }

        match message {
            ServiceMessage::Fetching { .. } => {
                self.status_line.set_status_message("⏳ Fetching...");
                self.emit_view_event([ViewEvent::StatusBarUpdateRequired]);
            }
            ServiceMessage::Completed {
                outcome,
                duration_ms,
                ..
            } => {
                self.status_line.set_last_duration(duration_ms);
                self.complete_evaluation(outcome);
            }
        }
        true
    }

    /// Store the outcome of the outstanding evaluation
    fn complete_evaluation(&mut self, outcome: CalcResult<String>) {
        self.in_flight = None;
        self.status_line.set_executing(false);

        match outcome {
            Ok(result) => {
                self.session.apply_result(&result);
                let message = self.status_line.success_message();
                self.status_line.set_status_message(message);
                self.emit_view_event([
                    ViewEvent::DisplayUpdateRequired,
                    ViewEvent::StatusBarUpdateRequired,
                ]);
            }
            Err(e) => {
                // Operands and operation stay so the user can retry
                self.status_line.set_status_message(e.status_message());
                self.emit_view_event([ViewEvent::StatusBarUpdateRequired]);
            }
        }
    }
}
