// Main entry point
use clap::Parser;
use colored::Colorize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use transcache::domain::error::TranslateError;
use transcache::domain::model::ResponseEnvelope;
use transcache::infrastructure::config::{self, CacheBackendKind, Config, Logging};
use transcache::interfaces::cli::Cli;
use transcache::{handle_event, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }

    let config = config::load_config()?;

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    let state = AppState::new(config.clone()).await?;

    if cli.status {
        print_status(&state, &config).await?;
        return Ok(());
    }

    if let Some(event) = cli.direct_event() {
        let envelope = handle_event(&state, &event).await;
        print_envelope(&envelope, cli.pretty)?;
        return Ok(());
    }

    if let Some(raw) = &cli.event {
        let envelope = handle_raw_event(&state, raw).await;
        print_envelope(&envelope, cli.pretty)?;
        return Ok(());
    }

    match cli.event_file.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            let file = tokio::fs::File::open(path).await?;
            run_lines(&state, BufReader::new(file), cli.pretty).await?;
        }
        _ => {
            run_lines(&state, BufReader::new(tokio::io::stdin()), cli.pretty).await?;
        }
    }

    Ok(())
}

/// Handle one event per non-empty line until EOF.
async fn run_lines<R>(state: &AppState, reader: R, pretty: bool) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let envelope = handle_raw_event(state, line).await;
        print_envelope(&envelope, pretty)?;
    }
    Ok(())
}

/// An event that is not JSON at all gets the same answer as a malformed body.
async fn handle_raw_event(state: &AppState, raw: &str) -> ResponseEnvelope {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(event) => handle_event(state, &event).await,
        Err(e) => {
            tracing::warn!("undecodable event: {}", e);
            ResponseEnvelope::from_error(&TranslateError::PayloadParse)
        }
    }
}

fn print_envelope(envelope: &ResponseEnvelope, pretty: bool) -> anyhow::Result<()> {
    if pretty {
        println!("{}", serde_json::to_string_pretty(envelope)?);
    } else {
        println!("{}", serde_json::to_string(envelope)?);
    }
    Ok(())
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = match logging.level.to_uppercase().as_str() {
        "TRACE" => "trace",
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "info",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = &logging.path {
        if !path.is_empty() {
            // Log to file
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .init();
            return Ok(());
        }
    }

    // Stdout carries the envelopes, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

async fn print_status(state: &AppState, config: &Config) -> anyhow::Result<()> {
    let config_path = config::get_config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "-".to_string());
    println!("{} {}", "Config:".cyan(), config_path);

    match config.cache.backend {
        CacheBackendKind::Sqlite => {
            let db_path = config::get_database_path(config);
            println!("{} sqlite ({})", "Cache:".cyan(), db_path.display());
        }
        CacheBackendKind::Memory => println!("{} memory", "Cache:".cyan()),
    }

    match state.cache.len().await {
        Ok(count) => println!("{} {}", "Cached translations:".cyan(), count),
        Err(e) => println!("{} {}", "Cached translations:".cyan(), e.to_string().red()),
    }

    println!(
        "{} {} (timeout {}s)",
        "Provider:".cyan(),
        config.provider.endpoint,
        config.provider.timeout_secs
    );
    println!(
        "{} {} ({:?})",
        "Secret:".cyan(),
        state.credentials.secret_name(),
        config.secrets.source
    );

    Ok(())
}
