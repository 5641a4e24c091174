mod cli;
mod config;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use cli::{Command, OutputFormat};
use config::{Config, Overrides};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Command line client for the Wit.ai API
#[derive(Parser, Debug)]
#[command(name = "witai", version, about, long_about = None)]
struct Args {
    /// Server access token
    #[arg(long, env = "WIT_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    /// API version, e.g. 20200513
    #[arg(long, global = true)]
    api_version: Option<String>,

    /// API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            token: self.token.clone(),
            version: self.api_version.clone(),
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let tracing_level = level.to_tracing_level()?;

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    // Logging is best effort; the command still runs without a log file
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: unable to open log file {:?}: {}", log_path, e);
            return None;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("witai started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Some(guard)
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("witai").join("witai.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".witai").join("witai.log");
    }
    PathBuf::from("witai.log")
}

/// Persist the connection flags given alongside `configure`
fn configure(overrides: &Overrides) -> Result<String> {
    let mut config = Config::load();
    config.merge(overrides);
    let path = config.save()?;
    tracing::info!("Saved configuration to {:?}", path);
    Ok(format!("Configuration saved to {}", path.display()))
}

async fn execute(args: Args) -> Result<String> {
    let overrides = args.overrides();

    if let Command::Configure = args.command {
        return configure(&overrides);
    }

    let client = Config::load().client(&overrides)?;
    cli::run(&client, args.command, args.output).await
}

/// Describe an error for the terminal, with friendlier text for API failures
fn describe(err: &anyhow::Error) -> String {
    match err.downcast_ref::<witai::Error>() {
        Some(wit_err) => witai::format_wit_error(wit_err),
        None => format!("{err:#}"),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level);

    match execute(args).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("Command failed: {:?}", err);
            eprintln!("Error: {}", describe(&err));
            ExitCode::FAILURE
        }
    }
}
