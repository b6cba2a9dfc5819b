use cucumber::World;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use soapcalc::repl::io::{MockEventStream, MockRenderStream};
use soapcalc::repl::services::{CalculatorService, RemoteCalculator};
use soapcalc::repl::{AppController, ViewModel};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

use super::stub::StubCalculator;

/// Row the renderer draws the display on
pub const DISPLAY_ROW: u16 = 3;

/// Headless calculator application for one scenario
#[derive(World)]
#[world(init = Self::new)]
pub struct CalculatorWorld {
    pub controller: AppController<MockEventStream, MockRenderStream>,
    pub calculator: Arc<StubCalculator>,
    pub gate: Option<Arc<Semaphore>>,
}

impl std::fmt::Debug for CalculatorWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalculatorWorld")
            .field("display", &self.view_model().display_text())
            .field("status", &self.view_model().status_message())
            .field("requests", &self.calculator.requests().len())
            .finish()
    }
}

impl CalculatorWorld {
    pub fn new() -> Self {
        let calculator = StubCalculator::new();
        let backend: Arc<dyn RemoteCalculator> = calculator.clone();
        let view_model = ViewModel::new(CalculatorService::new(backend));

        let controller = AppController::with_io_streams(
            view_model,
            MockEventStream::empty(),
            MockRenderStream::with_size((80, 24)),
        )
        .expect("controller should start with mock streams");

        Self {
            controller,
            calculator,
            gate: None,
        }
    }

    pub fn view_model(&self) -> &ViewModel {
        self.controller.view_model()
    }

    pub fn render_stream(&self) -> &MockRenderStream {
        self.controller.render_stream()
    }

    /// Delay every answer until `release_answers`
    pub fn hold_answers(&mut self) {
        self.gate = Some(self.calculator.hold_answers());
    }

    pub fn press(&mut self, code: KeyCode) {
        self.controller
            .process_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .expect("key event should be processed");
    }

    pub fn press_ctrl(&mut self, ch: char) {
        self.controller
            .process_key_event(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
            .expect("key event should be processed");
    }

    /// Type each character as a key press, then let answers arrive
    pub async fn type_keys(&mut self, keys: &str) {
        for ch in keys.chars() {
            self.press(KeyCode::Char(ch));
        }
        self.settle().await;
    }

    /// Wait for the outstanding evaluation unless answers are being held
    pub async fn settle(&mut self) {
        if self.gate.is_none() && self.view_model().is_evaluating() {
            self.controller
                .wait_for_evaluation()
                .await
                .expect("evaluation should render");
        }
    }

    /// Let one held answer through and apply whatever the service reports
    pub async fn release_answer(&mut self) {
        let expected = self.calculator.answered() + 1;
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }

        for _ in 0..200 {
            if self.calculator.answered() >= expected {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        if self.view_model().is_evaluating() {
            self.controller
                .wait_for_evaluation()
                .await
                .expect("evaluation should render");
        } else {
            // Give the abandoned completion time to arrive, then drain it
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.controller.poll_service().expect("poll should render");
        }
    }

    /// Most recent text drawn on the display row, without padding
    pub fn rendered_display(&self) -> String {
        self.render_stream()
            .writes_on_row(DISPLAY_ROW)
            .last()
            .map(|text| text.trim_start().to_string())
            .unwrap_or_default()
    }
}

impl Default for CalculatorWorld {
    fn default() -> Self {
        Self::new()
    }
}
