use cucumber::World;

pub mod common;
pub mod steps;

pub use common::world::CalculatorWorld;

/// # soapcalc Integration Tests
///
/// Drives the real `AppController` headlessly: key presses come from a
/// `MockEventStream`, rendering is captured by a `MockRenderStream`, and the
/// remote service is replaced by a stub calculator whose answers each
/// scenario chooses.
///
/// Run with: cargo test --test integration_tests
#[tokio::main]
async fn main() {
    #[allow(clippy::disallowed_methods)]
    let log_level = std::env::var("SOAPCALC_LOG_LEVEL")
        .unwrap_or_else(|_| "error".to_string())
        .to_lowercase();

    let level = match log_level.as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        _ => tracing::Level::ERROR,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();

    CalculatorWorld::run("tests/features").await;
}
