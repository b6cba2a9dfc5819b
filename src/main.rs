//! # soapcalc Main Entry Point
//!
//! Terminal calculator delegating arithmetic to a SOAP web service.

use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};

use anyhow::{bail, Context, Result};
use soapcalc::cmd_args::CommandLineArgs;
use soapcalc::config::{self, CalculatorProfile};
use soapcalc::repl::io::{TerminalEventStream, TerminalRenderStream};
use soapcalc::repl::services::{CalculatorService, SoapClient};
use soapcalc::repl::{AppController, ViewModel};
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();

    if let Some(log_file) = config::get_log_file(&cmd_args) {
        init_tracing_subscriber(&log_file)?;
    }

    if !atty::is(atty::Stream::Stdin) || !atty::is(atty::Stream::Stdout) {
        bail!("soapcalc needs an interactive terminal");
    }

    let profile_path = config::get_profile_path();
    let profile = CalculatorProfile::load_or_default(&profile_path, cmd_args.profile())?;
    let endpoint = config::resolve_endpoint(&cmd_args, &profile);
    tracing::info!(
        "Starting with profile '{}', endpoint {}",
        cmd_args.profile(),
        endpoint.url()
    );

    let client = SoapClient::new(endpoint)?;
    let service = CalculatorService::new(Arc::new(client));
    let mut view_model = ViewModel::new(service);
    view_model.set_verbose(cmd_args.verbose());

    let mut app = AppController::with_io_streams(
        view_model,
        TerminalEventStream::new(),
        TerminalRenderStream::new(),
    )?;
    app.run().await?;

    tracing::info!("Exiting");
    Ok(())
}

/// Send logs to `path`; the terminal itself belongs to the calculator
fn init_tracing_subscriber(path: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file '{path}'"))?;

    let filter = EnvFilter::try_from_env(config::LOG_LEVEL_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new("info"))
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?)
        .add_directive("rustls=warn".parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_timer(ChronoLocal::rfc_3339())
        .with_ansi(false)
        .init();
    Ok(())
}
