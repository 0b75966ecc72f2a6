//! # Deploy Reconciler CLI
//!
//! Builds the desired app or secret from CI inputs (`INPUT_*` environment
//! variables), compares it with the remote resource and prints a JSON verdict.
//!
//! ## Usage
//!
//! ```bash
//! # Fetch the app (with its binary) from the API, then:
//! INPUT_APP_NAME=my-app INPUT_ENV='{"NODE_ENV":"production"}' \
//!   deploy-reconciler app --remote app.json --wasm-file dist/app.wasm
//!
//! # Fetch the secret from the API, then:
//! INPUT_SECRET_NAME=db INPUT_SECRET_VALUE=hunter2 \
//!   deploy-reconciler secret --remote secret.json
//! ```
//!
//! Logs go to stderr; stdout carries only the verdict.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use deploy_reconciler::binary::has_wasm_binary_changed;
use deploy_reconciler::config::ReconcilerConfig;
use deploy_reconciler::constants::INPUT_WASM_FILE;
use deploy_reconciler::resource::{AppUpdate, RemoteApp, RemoteSecret, SecretUpdate};
use deploy_reconciler::{
    build_app_resource, build_secret_resource, plan_app_update, plan_secret_update, EnvInputs,
    InputSource, Warnings,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Decide whether an edge app or secret needs a remote update
#[derive(Parser)]
#[command(name = "deploy-reconciler", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Prefix of environment variables carrying inputs (defaults to INPUT_PREFIX or "INPUT_")
    #[arg(long, global = true)]
    input_prefix: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare the desired app with a remote app document
    App {
        /// JSON file holding the remote app, fetched with its binary
        #[arg(long)]
        remote: PathBuf,
        /// Binary id to deploy (defaults to the remote app's current binary)
        #[arg(long)]
        binary_id: Option<i64>,
        /// WASM artifact to compare with the remote binary (defaults to the `wasm_file` input)
        #[arg(long)]
        wasm_file: Option<PathBuf>,
    },
    /// Compare the desired secret with a remote secret document
    Secret {
        /// JSON file holding the remote secret
        #[arg(long)]
        remote: PathBuf,
    },
}

#[derive(Debug, Serialize)]
struct AppVerdict {
    update_needed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    binary_changed: Option<bool>,
    patch: Option<AppUpdate>,
    warnings: Warnings,
}

#[derive(Debug, Serialize)]
struct SecretVerdict {
    update_needed: bool,
    patch: Option<SecretUpdate>,
    warnings: Warnings,
}

fn main() -> Result<()> {
    let config = ReconcilerConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_directive().into()),
        )
        .with_ansi(config.log_ansi)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let inputs = EnvInputs::new(cli.input_prefix.unwrap_or(config.input_prefix));

    match cli.command {
        Commands::App {
            remote,
            binary_id,
            wasm_file,
        } => {
            let verdict = app_command(&inputs, &remote, binary_id, wasm_file)?;
            print_json(&verdict)
        }
        Commands::Secret { remote } => {
            let verdict = secret_command(&inputs, &remote)?;
            print_json(&verdict)
        }
    }
}

fn app_command(
    inputs: &impl InputSource,
    remote_path: &Path,
    binary_id: Option<i64>,
    wasm_file: Option<PathBuf>,
) -> Result<AppVerdict> {
    let mut warnings = Warnings::new();
    let desired = build_app_resource(inputs, &mut warnings);
    let remote: RemoteApp = read_json(remote_path)?;

    let wasm_file = wasm_file.or_else(|| {
        let input = inputs.get(INPUT_WASM_FILE);
        (!input.is_empty()).then(|| PathBuf::from(input))
    });
    let binary_changed = match wasm_file {
        Some(path) => Some(match remote.binary.checksum.as_deref() {
            Some(checksum) => has_wasm_binary_changed(&path, checksum)?,
            None => true,
        }),
        None => None,
    };
    if binary_changed == Some(true) {
        info!(
            "WASM binary differs from remote binary {}; upload it and pass --binary-id",
            remote.binary.id
        );
    }

    let binary_id = binary_id.unwrap_or(remote.binary.id);
    let patch = plan_app_update(desired, &remote, binary_id);

    Ok(AppVerdict {
        update_needed: patch.is_some(),
        binary_changed,
        patch,
        warnings,
    })
}

fn secret_command(inputs: &impl InputSource, remote_path: &Path) -> Result<SecretVerdict> {
    let mut warnings = Warnings::new();
    let desired = build_secret_resource(inputs, &mut warnings);
    let remote: RemoteSecret = read_json(remote_path)?;

    let patch = plan_secret_update(desired, &remote, &mut warnings);

    Ok(SecretVerdict {
        update_needed: patch.is_some(),
        patch,
        warnings,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!("Reading remote document: {}", path.display());
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to decode remote document: {}", path.display()))
}

fn print_json(value: &impl Serialize) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to encode verdict")?;
    println!("{json}");
    Ok(())
}
