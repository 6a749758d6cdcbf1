//! Wiring & DI. Entry point: bootstrap adapters, inject into use cases, run UI.
//! No business logic here.

use anyhow::Context;
use chatbox_client::adapters::files::PathFilePicker;
use chatbox_client::adapters::http::HttpBackend;
use chatbox_client::adapters::mock::MockBackend;
use chatbox_client::adapters::ui::console::{ConsoleAlert, ConsoleResponseSink};
use chatbox_client::adapters::ui::progress::SpinnerBackend;
use chatbox_client::adapters::ui::tui::TuiInputPort;
use chatbox_client::cli::{Cli, Commands};
use chatbox_client::ports::{ChatBackend, InputPort};
use chatbox_client::shared::config::AppConfig;
use chatbox_client::usecases::{FileUploader, MessageSender};
use clap::Parser;
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse first so --help and usage errors exit before any setup.
    let cli = Cli::parse();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    // Logs go to stderr so they do not interleave with prompts and replies on stdout.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load()
        .context("invalid configuration (CHATBOX_* / CHATBOX_CONFIG)")?;

    // --- Backend: HTTP or offline mock, wrapped with a pending-request spinner ---
    let backend: Arc<dyn ChatBackend> = if cfg.is_mock() {
        warn!("CHATBOX_MOCK set, using mock backend");
        Arc::new(MockBackend::new())
    } else {
        let http = HttpBackend::new(cfg.base_url_or_default(), cfg.request_timeout())
            .map_err(|e| anyhow::anyhow!("{}", e))?;
        info!(
            url = %http.base_url(),
            timeout_secs = ?cfg.request_timeout().map(|t| t.as_secs()),
            "HTTP backend configured"
        );
        Arc::new(http)
    };
    let backend: Arc<dyn ChatBackend> = Arc::new(SpinnerBackend::new(backend));

    // --- Run: one-shot command or interactive menu ---
    match cli.command {
        None => {
            chatbox_client::adapters::ui::init_ui();
            let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(backend));
            input_port
                .run()
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;
        }
        Some(Commands::Send { text }) => {
            let sender = MessageSender::new(backend, Arc::new(ConsoleResponseSink));
            sender
                .send(&text.join(" "))
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;
        }
        Some(Commands::Upload { path }) => {
            let uploader = FileUploader::new(
                backend,
                Arc::new(PathFilePicker::new(Some(&path))),
                Arc::new(ConsoleAlert::new(false)),
            );
            uploader
                .upload()
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;
        }
    }

    Ok(())
}
