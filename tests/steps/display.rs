// Display, status bar and request assertions

use crate::common::world::CalculatorWorld;
use cucumber::then;

#[then(regex = r#"^the display should show "([^"]*)"$"#)]
async fn display_should_show(world: &mut CalculatorWorld, expected: String) {
    assert_eq!(world.view_model().display_text(), expected);
    assert_eq!(
        world.rendered_display(),
        expected,
        "Expected rendered display to match"
    );
}

#[then(regex = r#"^the entry should be "([^"]*)"$"#)]
async fn entry_should_be(world: &mut CalculatorWorld, expected: String) {
    assert_eq!(world.view_model().session().entry_buffer(), expected);
}

#[then(regex = r#"^the status bar should show "([^"]*)"$"#)]
async fn status_bar_should_show(world: &mut CalculatorWorld, expected: String) {
    assert_eq!(world.view_model().status_message(), expected);
    if !expected.is_empty() {
        assert!(
            world.render_stream().written_text().contains(&expected),
            "Expected status bar output to contain: {expected}"
        );
    }
}

#[then(regex = r#"^the operation line should show "([^"]*)"$"#)]
async fn operation_line_should_show(world: &mut CalculatorWorld, expected: String) {
    assert_eq!(world.view_model().operation_text(), expected);
}

#[then("no operation should be pending")]
async fn no_operation_pending(world: &mut CalculatorWorld) {
    let session = world.view_model().session();
    assert_eq!(session.pending_operation(), None);
    assert_eq!(session.stored_operand(), None);
}

#[then(regex = r"^the service should have received (\d+) requests?$")]
async fn service_received_requests(world: &mut CalculatorWorld, count: usize) {
    assert_eq!(world.calculator.requests().len(), count);
}

#[then(regex = r#"^the last request should be (\w+) of "([^"]*)" and "([^"]*)"$"#)]
async fn last_request_should_be(
    world: &mut CalculatorWorld,
    operation: String,
    operand_a: String,
    operand_b: String,
) {
    let requests = world.calculator.requests();
    let last = requests.last().expect("a request should have been sent");
    assert_eq!(last.operation.name(), operation);
    assert_eq!(last.operand_a, operand_a);
    assert_eq!(last.operand_b, operand_b);
}

#[then("the calculator should quit")]
async fn calculator_should_quit(world: &mut CalculatorWorld) {
    assert!(world.controller.should_quit());
}
