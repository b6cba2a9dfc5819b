//! Common test utilities and infrastructure
//!
//! - Cucumber world wrapping a headless `AppController`
//! - Stub remote calculator with scripted answers

pub mod stub;
pub mod world;

#[allow(unused_imports)]
pub use stub::StubCalculator;
#[allow(unused_imports)]
pub use world::CalculatorWorld;
