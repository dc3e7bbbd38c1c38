//! ShopUp binary entrypoint kept minimal. The storefront core lives in the library.

mod args;

use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use clap::Parser;

use shopup::app::App;

struct ShopUpTimer;

impl tracing_subscriber::fmt::time::FormatTime for ShopUpTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S");
        write!(w, "{ts}")
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing to `<config>/logs/shopup.log`, falling back to stderr.
///
/// Inputs:
/// - `config_dir`: Resolved configuration directory
/// - `level`: Default filter when `RUST_LOG` is unset
fn init_logging(config_dir: &Path, level: &str) {
    let mut log_path = shopup::paths::logs_dir(config_dir);
    log_path.push("shopup.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(ShopUpTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: init stderr logger to avoid blocking startup
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(ShopUpTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = args::Args::parse();
    let config_dir = shopup::paths::config_dir(args.config_dir.as_deref());
    init_logging(&config_dir, &args::determine_log_level(&args));

    tracing::info!(command = ?args.command, "ShopUp starting");
    let mut app = match App::init(Some(&config_dir), args.catalog.as_deref()) {
        Ok(app) => app,
        Err(err) => {
            tracing::error!(error = %err, "Failed to initialize");
            eprintln!("shopup: {err}");
            std::process::exit(1);
        }
    };
    if let Err(err) = args::process_args(&args, &mut app).await {
        tracing::error!(error = %err, "Command failed");
        eprintln!("shopup: {err}");
        std::process::exit(1);
    }
    tracing::info!("ShopUp exited");
}
