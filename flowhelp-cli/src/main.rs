//! flowhelp CLI - Command-line front-end for the flowhelp helpers
//!
//! This binary provides command-line interfaces for:
//! - validate-key: check a key or group key against the naming rules
//! - snake: convert camel-case identifiers to snake case
//! - merge: deep-merge two JSON documents, right side winning
//! - chunks: split a JSON array into fixed-size chunks
//! - prune: drop empty entries from a JSON document

use clap::{Parser, Subcommand, ValueEnum};
use flowhelp_core::{
    chunks, convert_camel_to_snake, merge_dicts, prune_dict, validate_group_key_value,
    validate_key_value, KeyLimits, PruneMode, ValueKind,
};
use serde_json::{Map, Value};
use std::error::Error;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "flowhelp")]
#[command(about = "Helpers for workflow orchestration: key validation, deep merge, chunking")]
#[command(version)]
struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a key or group key
    ///
    /// Examples:
    ///   flowhelp validate-key root.group.simple-key
    ///   flowhelp validate-key my_group --group
    ///   flowhelp validate-key --json 3
    ValidateKey {
        /// Key to validate
        key: String,
        /// Apply the stricter group key rules (no dots)
        #[arg(long)]
        group: bool,
        /// Parse the key as a JSON value instead of a plain string
        #[arg(long)]
        json: bool,
        /// Override the maximum length
        #[arg(long)]
        max_length: Option<usize>,
        /// TOML file with `max_key_length` / `max_group_key_length`
        #[arg(long)]
        limits: Option<PathBuf>,
    },
    /// Convert camel-case identifiers to snake case
    Snake {
        /// Identifiers to convert
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Deep-merge two JSON objects (right side wins on conflict)
    Merge {
        /// Base document
        left: PathBuf,
        /// Overriding document
        right: PathBuf,
    },
    /// Split a JSON array into chunks, one per output line
    Chunks {
        /// Input file (JSON array)
        input: PathBuf,
        /// Elements per chunk
        #[arg(long, allow_hyphen_values = true)]
        size: i64,
    },
    /// Remove empty entries from a JSON document
    Prune {
        /// Input file (JSON)
        input: PathBuf,
        /// Which values count as empty
        #[arg(long, value_enum, default_value_t = PruneArg::Strict)]
        mode: PruneArg,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum PruneArg {
    Strict,
    Truthy,
}

impl From<PruneArg> for PruneMode {
    fn from(arg: PruneArg) -> Self {
        match arg {
            PruneArg::Strict => PruneMode::Strict,
            PruneArg::Truthy => PruneMode::Truthy,
        }
    }
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::ValidateKey {
            key,
            group,
            json,
            max_length,
            limits,
        } => {
            return handle_validate_key(key, group, json, max_length, limits);
        }
        Commands::Snake { words } => {
            handle_snake(&words)?;
        }
        Commands::Merge { left, right } => {
            handle_merge(&left, &right)?;
        }
        Commands::Chunks { input, size } => {
            handle_chunks(&input, size)?;
        }
        Commands::Prune { input, mode } => {
            handle_prune(&input, mode.into())?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_validate_key(
    key: String,
    group: bool,
    parse_json: bool,
    max_length: Option<usize>,
    limits_path: Option<PathBuf>,
) -> Result<ExitCode, Box<dyn Error>> {
    let limits = match limits_path {
        Some(path) => load_limits(&path)?,
        None => KeyLimits::default(),
    };
    let key = if parse_json {
        serde_json::from_str(&key)?
    } else {
        Value::String(key)
    };

    let result = if group {
        validate_group_key_value(&key, max_length.unwrap_or(limits.max_group_key_length))
    } else {
        validate_key_value(&key, max_length.unwrap_or(limits.max_key_length))
    };

    // Rejected keys go to stderr with a failing exit code.
    match result {
        Ok(()) => {
            tracing::debug!(%key, group, "key accepted");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn load_limits(path: &Path) -> Result<KeyLimits, Box<dyn Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("reading {} failed: {e}", path.display()))?;
    let limits: KeyLimits = toml::from_str(&content)?;
    tracing::debug!(?limits, path = %path.display(), "loaded key limits");
    Ok(limits)
}

fn handle_snake(words: &[String]) -> Result<(), Box<dyn Error>> {
    let mut stdout = std::io::stdout().lock();
    for word in words {
        writeln!(&mut stdout, "{}", convert_camel_to_snake(word))?;
    }
    Ok(())
}

fn handle_merge(left: &Path, right: &Path) -> Result<(), Box<dyn Error>> {
    let left = read_object(left)?;
    let right = read_object(right)?;
    let merged = Value::Object(merge_dicts(&left, &right));

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &merged)?;
    writeln!(&mut stdout)?;
    Ok(())
}

fn handle_chunks(input: &Path, size: i64) -> Result<(), Box<dyn Error>> {
    let items = match read_json(input)? {
        Value::Array(items) => items,
        other => {
            return Err(format!(
                "{}: expected a JSON array, found {}",
                input.display(),
                ValueKind::of(&other).name()
            )
            .into())
        }
    };

    let mut stdout = std::io::stdout().lock();
    for chunk in chunks(items.as_slice(), size)? {
        serde_json::to_writer(&mut stdout, chunk)?;
        writeln!(&mut stdout)?;
    }
    Ok(())
}

fn handle_prune(input: &Path, mode: PruneMode) -> Result<(), Box<dyn Error>> {
    let value = read_json(input)?;
    let pruned = prune_dict(&value, mode);

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &pruned)?;
    writeln!(&mut stdout)?;
    Ok(())
}

fn read_json(path: &Path) -> Result<Value, Box<dyn Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("reading {} failed: {e}", path.display()))?;
    Ok(serde_json::from_str(&content)?)
}

fn read_object(path: &Path) -> Result<Map<String, Value>, Box<dyn Error>> {
    match read_json(path)? {
        Value::Object(map) => Ok(map),
        other => Err(format!(
            "{}: expected a JSON object, found {}",
            path.display(),
            ValueKind::of(&other).name()
        )
        .into()),
    }
}
