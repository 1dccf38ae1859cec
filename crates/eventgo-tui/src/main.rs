//! `eventgo-tui`: terminal storefront for the EventGo ticketing service.
//!
//! Built on [ratatui](https://ratatui.rs) over the `eventgo-core`
//! [`Storefront`](eventgo_core::Storefront). Two tab screens (Home and
//! Events, number keys 1-2) plus contextual Detail and Booking screens
//! entered from a catalog row.
//!
//! Logs are written to a file (default `/tmp/eventgo-tui.log`) to avoid
//! corrupting the terminal UI.
//!
//! Entry point: CLI argument parsing, tracing setup, panic hooks, and app launch.

mod action;
mod app;
mod component;
mod input;
mod screen;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use eventgo_api::{StorefrontClient, TransportConfig};
use eventgo_core::Storefront;

use crate::app::App;

/// Terminal storefront for browsing events and picking seats.
#[derive(Parser, Debug)]
#[command(name = "eventgo-tui", version, about)]
struct Cli {
    /// Events service base URL
    #[arg(
        short = 'u',
        long,
        default_value = "http://localhost:8001",
        env = "EVENTGO_API_URL"
    )]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30, env = "EVENTGO_TIMEOUT_SECS")]
    timeout_secs: u64,

    /// Accept invalid TLS certificates (dev gateways)
    #[arg(long)]
    insecure: bool,

    /// Log file path (defaults to /tmp/eventgo-tui.log)
    #[arg(long, default_value = "/tmp/eventgo-tui.log")]
    log_file: PathBuf,

    /// Log level used when EVENTGO_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr, which would
/// corrupt the TUI output. Returns a guard that must be held for the
/// lifetime of the application to ensure logs are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let filter = EnvFilter::try_from_env("EVENTGO_LOG").unwrap_or_else(|_| {
        let level = &cli.log_level;
        EnvFilter::new(format!(
            "eventgo_tui={level},eventgo_core={level},eventgo_api={level}"
        ))
    });

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("eventgo-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    // Tracing to file; hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli);

    info!(api_url = %cli.api_url, "starting eventgo-tui");

    let transport = TransportConfig {
        timeout: Duration::from_secs(cli.timeout_secs),
        danger_accept_invalid_certs: cli.insecure,
    };
    let client = StorefrontClient::new(&cli.api_url, &transport)?;
    let storefront = Storefront::new(client);

    let mut app = App::new(storefront);
    app.run().await?;

    Ok(())
}
