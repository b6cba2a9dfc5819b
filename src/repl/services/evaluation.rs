//! # Evaluation Service
//!
//! Runs remote evaluations off the input loop. Each request is executed in
//! a spawned tokio task; progress and the outcome come back through a
//! channel that the controller polls between key events.

use super::soap::RemoteOperation;
use super::soap_client::SoapClient;
use crate::error::CalcResult;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Future returned by a remote calculator
pub type EvaluationFuture = Pin<Box<dyn Future<Output = CalcResult<String>> + Send + 'static>>;

/// Everything the adapter needs to evaluate one operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationRequest {
    pub operation: RemoteOperation,
    pub operand_a: String,
    pub operand_b: String,
}

/// Something that can evaluate operations remotely
pub trait RemoteCalculator: Send + Sync {
    fn evaluate(&self, request: &EvaluationRequest) -> EvaluationFuture;

    /// Short description of where requests go, shown in the UI
    fn describe(&self) -> String;
}

impl RemoteCalculator for SoapClient {
    fn evaluate(&self, request: &EvaluationRequest) -> EvaluationFuture {
        let client = self.clone();
        let request = request.clone();
        Box::pin(async move {
            client
                .call(request.operation, &request.operand_a, &request.operand_b)
                .await
        })
    }

    fn describe(&self) -> String {
        self.endpoint().url()
    }
}

/// Messages published by evaluation tasks
#[derive(Debug)]
pub enum ServiceMessage {
    /// The exchange is about to start
    Fetching { request_id: u64 },
    /// The exchange finished
    Completed {
        request_id: u64,
        outcome: CalcResult<String>,
        duration_ms: u64,
    },
}

impl ServiceMessage {
    pub fn request_id(&self) -> u64 {
        match self {
            ServiceMessage::Fetching { request_id } => *request_id,
            ServiceMessage::Completed { request_id, .. } => *request_id,
        }
    }
}

/// Service that executes evaluations asynchronously
pub struct CalculatorService {
    backend: Arc<dyn RemoteCalculator>,
    message_receiver: mpsc::Receiver<ServiceMessage>,
    message_sender: mpsc::Sender<ServiceMessage>,
}

impl CalculatorService {
    pub fn new(backend: Arc<dyn RemoteCalculator>) -> Self {
        let (message_sender, message_receiver) = mpsc::channel(16);
        Self {
            backend,
            message_receiver,
            message_sender,
        }
    }

    pub fn describe(&self) -> String {
        self.backend.describe()
    }

    /// Execute a request in a spawned task
    ///
    /// Must be called from within a tokio runtime.
    pub fn execute_async(&self, request_id: u64, request: EvaluationRequest) {
        let backend = Arc::clone(&self.backend);
        let sender = self.message_sender.clone();

        tokio::spawn(async move {
            // Receiver may be gone if the app is shutting down
            let _ = sender.send(ServiceMessage::Fetching { request_id }).await;

            let started = Instant::now();
            let outcome = backend.evaluate(&request).await;
            let duration_ms = started.elapsed().as_millis() as u64;

            match &outcome {
                Ok(result) => tracing::info!(
                    "Request #{} {} {} {} = {} ({} ms)",
                    request_id,
                    request.operand_a,
                    request.operation.symbol(),
                    request.operand_b,
                    result,
                    duration_ms
                ),
                Err(e) => tracing::error!("Request #{} failed: {}", request_id, e),
            }

            let _ = sender
                .send(ServiceMessage::Completed {
                    request_id,
                    outcome,
                    duration_ms,
                })
                .await;
        });
    }

    /// Check for a pending message without blocking
    pub fn poll_message(&mut self) -> Option<ServiceMessage> {
        self.message_receiver.try_recv().ok()
    }

    /// Wait for the next message
    pub async fn next_message(&mut self) -> Option<ServiceMessage> {
        self.message_receiver.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;
    use std::sync::Mutex;

    struct FixedCalculator {
        outcome: CalcResult<String>,
        seen: Mutex<Vec<EvaluationRequest>>,
    }

    impl RemoteCalculator for FixedCalculator {
        fn evaluate(&self, request: &EvaluationRequest) -> EvaluationFuture {
            self.seen.lock().unwrap().push(request.clone());
            let outcome = self.outcome.clone();
            Box::pin(async move { outcome })
        }

        fn describe(&self) -> String {
            "fixed".to_string()
        }
    }

    fn add_request() -> EvaluationRequest {
        EvaluationRequest {
            operation: RemoteOperation::Add,
            operand_a: "4".to_string(),
            operand_b: "2".to_string(),
        }
    }

    #[tokio::test]
    async fn execute_async_should_publish_fetching_then_completion() {
        let backend = Arc::new(FixedCalculator {
            outcome: Ok("6".to_string()),
            seen: Mutex::new(Vec::new()),
        });
        let mut service = CalculatorService::new(backend.clone());

        service.execute_async(7, add_request());

        let first = service.next_message().await.unwrap();
        assert!(matches!(first, ServiceMessage::Fetching { request_id: 7 }));

        match service.next_message().await.unwrap() {
            ServiceMessage::Completed {
                request_id,
                outcome,
                ..
            } => {
                assert_eq!(request_id, 7);
                assert_eq!(outcome, Ok("6".to_string()));
            }
            other => panic!("Expected completion, got {other:?}"),
        }

        assert_eq!(backend.seen.lock().unwrap().as_slice(), &[add_request()]);
    }

    #[tokio::test]
    async fn failures_should_be_delivered_as_outcomes() {
        let backend = Arc::new(FixedCalculator {
            outcome: Err(CalcError::Transport {
                status: 503,
                fault: None,
            }),
            seen: Mutex::new(Vec::new()),
        });
        let mut service = CalculatorService::new(backend);

        service.execute_async(1, add_request());

        let mut completion = None;
        while let Some(message) = service.next_message().await {
            if let ServiceMessage::Completed { outcome, .. } = message {
                completion = Some(outcome);
                break;
            }
        }
        assert_eq!(
            completion,
            Some(Err(CalcError::Transport {
                status: 503,
                fault: None
            }))
        );
    }

    #[test]
    fn poll_message_should_return_none_when_idle() {
        let backend = Arc::new(FixedCalculator {
            outcome: Ok("0".to_string()),
            seen: Mutex::new(Vec::new()),
        });
        let mut service = CalculatorService::new(backend);

        assert!(service.poll_message().is_none());
        assert_eq!(service.describe(), "fixed");
    }
}
