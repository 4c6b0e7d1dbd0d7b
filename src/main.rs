//! Clearing House Ops — Entry Point
//!
//! Wiring sequence:
//! 1. Load `.env`, `config.toml` (or defaults) and `PRIVATE_KEY_HEX`
//! 2. Init tracing (`RUST_LOG` overrides `operator.log_level`)
//! 3. Run the operator script: print the operator principal if a key is set
//!
//! Exit code 0 on success (including the no-key no-op), 1 on any failure.

use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{error, info};

use clearing_house_ops::config::{self, AppConfig};
use clearing_house_ops::usecases::operator_script::{self, ScriptOutcome};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Operator script failed");
            println!("{e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // ── 1. Load configuration ───────────────────────────────
    let config = config::loader::load_from_env().context("Failed to load configuration")?;

    // ── 2. Initialize logging ───────────────────────────────
    init_tracing(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.network.host,
        canister = %config.network.canister_id,
        "Starting clearing-house operator script"
    );

    // ── 3. Run ──────────────────────────────────────────────
    match operator_script::run(&config)? {
        ScriptOutcome::Skipped => info!("No operator key configured, nothing to do"),
        ScriptOutcome::IdentityDerived(principal) => {
            info!(principal = %principal, "Done");
        }
    }

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.operator.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.operator.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}
