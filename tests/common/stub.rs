use soapcalc::repl::services::{EvaluationFuture, EvaluationRequest, RemoteCalculator};
use soapcalc::CalcResult;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

/// Remote calculator whose answer is chosen by the scenario
///
/// When a gate is installed every answer waits for a permit, which lets a
/// scenario act while a request is still in flight.
pub struct StubCalculator {
    outcome: Mutex<CalcResult<String>>,
    requests: Mutex<Vec<EvaluationRequest>>,
    gate: Mutex<Option<Arc<Semaphore>>>,
    answered: Arc<AtomicUsize>,
}

impl StubCalculator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            outcome: Mutex::new(Ok("0".to_string())),
            requests: Mutex::new(Vec::new()),
            gate: Mutex::new(None),
            answered: Arc::new(AtomicUsize::new(0)),
        })
    }

    pub fn set_outcome(&self, outcome: CalcResult<String>) {
        *self.outcome.lock().unwrap() = outcome;
    }

    /// Hold every answer until `release` is called
    pub fn hold_answers(&self) -> Arc<Semaphore> {
        let gate = Arc::new(Semaphore::new(0));
        *self.gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    pub fn requests(&self) -> Vec<EvaluationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn answered(&self) -> usize {
        self.answered.load(Ordering::SeqCst)
    }
}

impl RemoteCalculator for StubCalculator {
    fn evaluate(&self, request: &EvaluationRequest) -> EvaluationFuture {
        self.requests.lock().unwrap().push(request.clone());
        let outcome = self.outcome.lock().unwrap().clone();
        let gate = self.gate.lock().unwrap().clone();
        let answered = self.answered.clone();

        Box::pin(async move {
            if let Some(gate) = gate {
                let _permit = gate.acquire().await;
            }
            answered.fetch_add(1, Ordering::SeqCst);
            outcome
        })
    }

    fn describe(&self) -> String {
        "stub://calculator".to_string()
    }
}
