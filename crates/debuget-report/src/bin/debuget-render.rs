//! Render serialized error descriptors as reports on standard error.
//!
//! Usage: `debuget-render [FILE]`. Reads JSON from `FILE`, or stdin when no
//! file (or `-`) is given. The input is a single descriptor object or an
//! array of them.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use serde::Deserialize;

use debuget_core::config::DebugetConfig;
use debuget_core::errors::ConfigError;
use debuget_core::models::ErrorDescriptor;
use debuget_report::Reporter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {source_name}: {error}")]
    Read {
        source_name: String,
        error: std::io::Error,
    },

    #[error("invalid descriptor JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to start runtime: {0}")]
    Runtime(std::io::Error),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Input {
    Many(Vec<ErrorDescriptor>),
    One(Box<ErrorDescriptor>),
}

impl Input {
    fn into_vec(self) -> Vec<ErrorDescriptor> {
        match self {
            Input::Many(all) => all,
            Input::One(one) => vec![*one],
        }
    }
}

fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(p) => std::fs::read_to_string(p).map_err(|error| CliError::Read {
            source_name: p.display().to_string(),
            error,
        }),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|error| CliError::Read {
                    source_name: "stdin".to_string(),
                    error,
                })?;
            Ok(buf)
        }
    }
}

fn run() -> Result<usize, CliError> {
    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = DebugetConfig::load(&root)?;
    let reporter = Reporter::from_config(&config);

    let path = std::env::args_os()
        .nth(1)
        .filter(|a| a != "-")
        .map(PathBuf::from);
    let raw = read_input(path.as_deref())?;
    let descriptors = serde_json::from_str::<Input>(&raw)?.into_vec();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    runtime.block_on(async {
        for descriptor in &descriptors {
            reporter.report(descriptor).await;
        }
    });
    Ok(descriptors.len())
}

fn main() -> ExitCode {
    match run() {
        Ok(count) => {
            tracing::debug!(count, "reports written");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("debuget-render: {e}");
            ExitCode::from(2)
        }
    }
}
