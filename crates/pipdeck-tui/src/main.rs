//! pipdeck entry point.

use std::{path::PathBuf, process::ExitCode, time::Duration};

use clap::Parser;
use pipdeck_client::{BridgeClient, DEFAULT_BRIDGE_URL, DEFAULT_INDEX_URL, IndexClient};
use pipdeck_tui::{Runtime, TerminalDriver, Theme, install_panic_hook, parse_color};
use ratatui::style::Color;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        self, MakeWriter,
        format::{Format, Json, JsonFields},
    },
    prelude::*,
};

const LOG_FILE_NAME: &str = "pipdeck.log";

/// pipdeck terminal UI
#[derive(Parser, Debug)]
#[command(name = "pipdeck")]
#[command(about = "Browse, install and uninstall Python packages through a local bridge service")]
#[command(version)]
struct Args {
    /// Access token sent to the bridge service
    #[arg(long, env = "MANAGER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Base URL of the local bridge service
    #[arg(long, env = "PIPDECK_BRIDGE_URL", default_value = DEFAULT_BRIDGE_URL)]
    bridge_url: String,

    /// Base URL of the package index
    #[arg(long, env = "PIPDECK_INDEX_URL", default_value = DEFAULT_INDEX_URL)]
    index_url: String,

    /// Per-request timeout for bridge calls, in seconds
    #[arg(long, default_value_t = 120)]
    bridge_timeout: u64,

    /// Directory the log file is written to
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,

    /// Log filter used when `RUST_LOG` is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Accent color (name, index or #rrggbb)
    #[arg(long, value_parser = parse_color)]
    accent_color: Option<Color>,

    /// Error color (name, index or #rrggbb)
    #[arg(long, value_parser = parse_color)]
    error_color: Option<Color>,

    /// Muted text color (name, index or #rrggbb)
    #[arg(long, value_parser = parse_color)]
    muted_color: Option<Color>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Checked before the terminal is touched so the message stays readable.
    let api_key = match require_api_key(args.api_key) {
        Ok(api_key) => api_key,
        Err(message) => {
            report(message);
            return ExitCode::FAILURE;
        },
    };

    let _guard = init_tracing(&args.log_dir, &args.log_level);

    let index = match IndexClient::new(&args.index_url) {
        Ok(index) => index,
        Err(e) => {
            report(&format!("invalid index URL: {e}"));
            return ExitCode::FAILURE;
        },
    };
    let bridge = match BridgeClient::new(
        &args.bridge_url,
        api_key,
        Duration::from_secs(args.bridge_timeout),
    ) {
        Ok(bridge) => bridge,
        Err(e) => {
            report(&format!("invalid bridge URL: {e}"));
            return ExitCode::FAILURE;
        },
    };

    tracing::info!(
        index = %index.base_url(),
        bridge = %bridge.base_url(),
        timeout_secs = args.bridge_timeout,
        "starting"
    );

    let theme = Theme::with_overrides(args.accent_color, args.error_color, args.muted_color);

    install_panic_hook();
    let driver = match TerminalDriver::new(theme) {
        Ok(driver) => driver,
        Err(e) => {
            tracing::error!(error = %e, "terminal setup failed");
            report(&format!("failed to start terminal UI: {e}"));
            return ExitCode::FAILURE;
        },
    };

    let mut runtime = Runtime::new(driver, index, bridge);
    let result = runtime.run().await;
    // Restores the terminal before anything is printed.
    drop(runtime);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "runtime failed");
            report(&format!("terminal UI failed: {e}"));
            ExitCode::FAILURE
        },
    }
}

/// Route logs to a file; the terminal belongs to the UI.
///
/// The returned guard flushes buffered lines when dropped.
fn init_tracing(log_dir: &std::path::Path, default_level: &str) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if let Err(e) = std::fs::create_dir_all(log_dir) {
        report(&format!("logging disabled: cannot create {}: {e}", log_dir.display()));
        return None;
    }

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer(non_blocking))
        .init();

    Some(guard)
}

/// One JSON object per event, no color codes.
fn json_layer<S, W>(writer: W) -> fmt::Layer<S, JsonFields, Format<Json>, W>
where
    W: for<'w> MakeWriter<'w> + 'static,
{
    fmt::layer().json().with_ansi(false).with_writer(writer)
}

/// The bridge access token, unless it is missing or blank.
fn require_api_key(api_key: Option<String>) -> Result<String, &'static str> {
    api_key
        .filter(|key| !key.trim().is_empty())
        .ok_or("MANAGER_API_KEY is not set; export the bridge service access token and retry")
}

#[allow(clippy::print_stderr)]
fn report(message: &str) {
    eprintln!("pipdeck: {message}");
}
