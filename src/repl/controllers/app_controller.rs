//! # Application Controller
//!
//! The controller owns the event loop. Key events go through the command
//! registry, the resulting command events are applied to the view model, and
//! the view events it queues decide what gets redrawn. Between key events the
//! controller polls the evaluation service so completions show up without
//! further input.

use crate::repl::{
    commands::{CommandContext, CommandEvent, CommandRegistry, ViewModelSnapshot},
    events::ViewEvent,
    io::{EventStream, RenderStream},
    view_models::ViewModel,
    views::{TerminalRenderer, ViewRenderer},
};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent};
use std::time::Duration;

/// How long to wait for a key before checking the service again
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The main application controller
pub struct AppController<ES: EventStream, RS: RenderStream> {
    view_model: ViewModel,
    view_renderer: TerminalRenderer<RS>,
    command_registry: CommandRegistry,
    event_stream: ES,
    should_quit: bool,
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Create a controller around a configured view model and I/O streams
    pub fn with_io_streams(
        mut view_model: ViewModel,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        let view_renderer = TerminalRenderer::with_render_stream(render_stream)?;

        let (width, height) = view_renderer.terminal_size();
        view_model.update_terminal_size(width, height);
        view_model.collect_pending_view_events();

        Ok(Self {
            view_model,
            view_renderer,
            command_registry: CommandRegistry::new(),
            event_stream,
            should_quit: false,
        })
    }

    /// Run the main application loop until quit is requested
    pub async fn run(&mut self) -> Result<()> {
        self.view_renderer.initialize()?;
        self.view_renderer.render_full(&self.view_model)?;

        let outcome = self.event_loop().await;

        // Restore the terminal even when the loop failed
        self.view_renderer.cleanup()?;
        outcome
    }

    async fn event_loop(&mut self) -> Result<()> {
        while !self.should_quit {
            if self.event_stream.poll(INPUT_POLL_INTERVAL)? {
                let event = self.event_stream.read()?;
                self.handle_event(event)?;
            }

            self.poll_service()?;
            tokio::task::yield_now().await;
        }
        Ok(())
    }

    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key_event) => self.process_key_event(key_event),
            Event::Resize(width, height) => {
                tracing::debug!("Terminal resized to {}x{}", width, height);
                self.view_renderer.update_size(width, height);
                self.view_model.update_terminal_size(width, height);
                self.render_pending()
            }
            _ => Ok(()),
        }
    }

    /// Process a single key event and redraw what changed
    pub fn process_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        tracing::debug!("Received key event: {:?}", key_event);

        let context = CommandContext::new(ViewModelSnapshot::from_view_model(&self.view_model));
        let events = match self.command_registry.process_event(key_event, &context) {
            Ok(events) => events,
            Err(e) => {
                tracing::warn!("Failed to process key event {:?}: {}", key_event, e);
                return Ok(());
            }
        };

        for event in events {
            self.apply_command_event(event);
        }

        if self.should_quit {
            return Ok(());
        }
        self.render_pending()
    }

    /// Apply a command event to the view model
    fn apply_command_event(&mut self, event: CommandEvent) {
        match event {
            CommandEvent::ActionRequested(action) => self.view_model.handle_action(action),
            CommandEvent::StatusMessageRequested { message } => {
                self.view_model.show_status_message(message)
            }
            CommandEvent::QuitRequested => {
                tracing::info!("Quit requested");
                self.should_quit = true;
            }
            CommandEvent::NoAction => {}
        }
    }

    /// Apply finished evaluations and redraw if anything changed
    pub fn poll_service(&mut self) -> Result<()> {
        if self.view_model.poll_service() {
            self.render_pending()?;
        }
        Ok(())
    }

    /// Block until the outstanding evaluation completes, then redraw
    pub async fn wait_for_evaluation(&mut self) -> Result<()> {
        self.view_model.wait_for_evaluation().await;
        self.render_pending()
    }

    /// Render whatever the view model asked for
    fn render_pending(&mut self) -> Result<()> {
        let view_events = self.view_model.collect_pending_view_events();
        if view_events.contains(&ViewEvent::FullRedrawRequired) {
            return self.view_renderer.render_full(&self.view_model);
        }
        for event in view_events {
            self.view_renderer
                .handle_view_event(&event, &self.view_model)?;
        }
        Ok(())
    }

    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    pub fn view_model_mut(&mut self) -> &mut ViewModel {
        &mut self.view_model
    }

    pub fn render_stream(&self) -> &RS {
        self.view_renderer.render_stream()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
