//! # Test Helpers
//!
//! Stub remote calculator for unit tests that must not touch the network.

use crate::error::CalcResult;
use crate::repl::services::{
    CalculatorService, EvaluationFuture, EvaluationRequest, RemoteCalculator,
};
use crate::repl::view_models::ViewModel;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

/// Remote calculator answering every request with a fixed outcome
pub struct StubCalculator {
    outcome: Mutex<CalcResult<String>>,
    requests: Mutex<Vec<EvaluationRequest>>,
    gate: Option<Arc<Semaphore>>,
}

impl StubCalculator {
    pub fn answering(outcome: CalcResult<String>) -> Arc<Self> {
        Arc::new(Self {
            outcome: Mutex::new(outcome),
            requests: Mutex::new(Vec::new()),
            gate: None,
        })
    }

    /// Like `answering`, but each answer waits for a permit on the gate
    pub fn gated(outcome: CalcResult<String>, gate: Arc<Semaphore>) -> Arc<Self> {
        Arc::new(Self {
            outcome: Mutex::new(outcome),
            requests: Mutex::new(Vec::new()),
            gate: Some(gate),
        })
    }

    pub fn set_outcome(&self, outcome: CalcResult<String>) {
        *self.outcome.lock().unwrap() = outcome;
    }

    pub fn requests(&self) -> Vec<EvaluationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl RemoteCalculator for StubCalculator {
    fn evaluate(&self, request: &EvaluationRequest) -> EvaluationFuture {
        self.requests.lock().unwrap().push(request.clone());
        let outcome = self.outcome.lock().unwrap().clone();
        let gate = self.gate.clone();
        Box::pin(async move {
            if let Some(gate) = gate {
                let _permit = gate.acquire().await;
            }
            outcome
        })
    }

    fn describe(&self) -> String {
        "stub://calculator".to_string()
    }
}

/// View model wired to `stub`
pub fn view_model_with(stub: &Arc<StubCalculator>) -> ViewModel {
    let backend: Arc<dyn RemoteCalculator> = stub.clone();
    ViewModel::new(CalculatorService::new(backend))
}
