use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use keiconf::config::{to_pretty_string, DEFAULT_INDENT};
use keiconf::{ConfigStore, StoreOptions};
use serde_json::Value;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, EnvFilter};

/// Minimalist flat-file JSON configuration store
///
/// Reads and edits a JSON config file using dotted key paths such as
/// `server.port`.
#[derive(Parser, Debug)]
#[command(name = "keiconf")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON config file
    file: PathBuf,

    /// Spaces per indentation level when printing or saving
    #[arg(short, long, default_value_t = DEFAULT_INDENT)]
    indent: usize,

    /// Create the file (and parent directories) as `{}` if it does not exist
    #[arg(short, long)]
    create: bool,

    /// Print `null` for missing keys instead of failing
    #[arg(long)]
    lenient: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Log to file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the value at a dotted key path
    Get {
        /// Dotted key path, e.g. `server.port`
        path: String,
    },

    /// Set the value at a dotted key path and save the file
    ///
    /// VALUE is parsed as JSON; anything that is not valid JSON is stored
    /// as a plain string.
    Set {
        /// Dotted key path, e.g. `server.port`
        path: String,

        /// New value
        value: String,
    },

    /// Print the whole document
    Show,
}

fn setup_logging(log_level: &str, log_file: Option<PathBuf>) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let subscriber = fmt().with_env_filter(filter).with_target(true);

    if let Some(log_path) = log_file {
        let file = std::fs::File::create(&log_path)
            .with_context(|| format!("Failed to create log file {}", log_path.display()))?;
        subscriber
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init();
    } else {
        subscriber.with_writer(std::io::stderr).init();
    }

    Ok(())
}

fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(&args.log_level, args.log_file)?;

    let options = StoreOptions::new()
        .with_indent(args.indent)
        .fail_on_missing_key(!args.lenient)
        .create_if_missing(args.create);
    debug!("Opening {} with {:?}", args.file.display(), options);

    let mut store = ConfigStore::new(&args.file, options)?;

    match args.command {
        Command::Get { path } => {
            let value = store.get(&path)?;
            println!("{}", to_pretty_string(&value, store.options().indent)?);
        }
        Command::Set { path, value } => {
            store.set(&path, parse_value(&value))?;
            store.save()?;
        }
        Command::Show => {
            println!("{}", store.to_text()?);
        }
    }

    Ok(())
}
