// Stub calculator setup step definitions

use crate::common::world::CalculatorWorld;
use cucumber::{given, when};
use soapcalc::CalcError;

#[given(regex = r#"^the calculator service answers "([^"]*)"$"#)]
async fn service_answers(world: &mut CalculatorWorld, result: String) {
    world.calculator.set_outcome(Ok(result));
}

#[given(regex = r"^the calculator service fails with HTTP status (\d+)$")]
async fn service_fails_with_status(world: &mut CalculatorWorld, status: u16) {
    world
        .calculator
        .set_outcome(Err(CalcError::Transport { status, fault: None }));
}

#[given(regex = r#"^the calculator service fails with HTTP status (\d+) and fault "([^"]*)"$"#)]
async fn service_fails_with_fault(world: &mut CalculatorWorld, status: u16, fault: String) {
    world.calculator.set_outcome(Err(CalcError::Transport {
        status,
        fault: Some(fault),
    }));
}

#[given(regex = r"^the calculator service omits the (\w+) element$")]
async fn service_omits_element(world: &mut CalculatorWorld, element: String) {
    world
        .calculator
        .set_outcome(Err(CalcError::MalformedResponse { expected: element }));
}

#[given("the calculator service is slow")]
async fn service_is_slow(world: &mut CalculatorWorld) {
    world.hold_answers();
}

#[when("the calculator service responds")]
async fn service_responds(world: &mut CalculatorWorld) {
    world.release_answer().await;
}
