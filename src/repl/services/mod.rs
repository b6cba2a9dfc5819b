//! # Services Layer
//!
//! The remote operation adapter: envelope construction, transport and
//! response extraction, plus the service that runs evaluations off the
//! input loop.

pub mod body;
pub mod evaluation;
pub mod soap;
pub mod soap_client;

// Re-export service types
pub use evaluation::{
    CalculatorService, EvaluationFuture, EvaluationRequest, RemoteCalculator, ServiceMessage,
};
pub use soap::{build_envelope, extract_result, RemoteOperation};
pub use soap_client::{SoapClient, SoapEndpoint};
