// Key press step definitions

use crate::common::world::CalculatorWorld;
use crossterm::event::KeyCode;
use cucumber::when;

#[when(regex = r#"^I type "([^"]*)"$"#)]
async fn i_type(world: &mut CalculatorWorld, keys: String) {
    world.type_keys(&keys).await;
}

#[when(regex = r"^I press (Enter|Escape|Delete)$")]
async fn i_press_named_key(world: &mut CalculatorWorld, key: String) {
    let code = match key.as_str() {
        "Enter" => KeyCode::Enter,
        "Escape" => KeyCode::Esc,
        _ => KeyCode::Delete,
    };
    world.press(code);
    world.settle().await;
}

#[when(regex = r"^I press Ctrl\+(\w)$")]
async fn i_press_ctrl(world: &mut CalculatorWorld, key: String) {
    if let Some(ch) = key.chars().next() {
        world.press_ctrl(ch.to_ascii_lowercase());
    }
}
