// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cluster Plan CLI
//!
//! Builds the infrastructure plan for a cluster model and prints it to
//! stdout. Logs go to stderr.
//!
//! Run with: CLUSTER_MODEL=cluster.yml cargo run --bin cluster-plan
//!
//! Optional environment:
//! 1. USER_INPUT - override documents (multi-document YAML)
//! 2. DEFAULTS_DIR - template tree, otherwise built-in AWS templates
//! 3. PLAN_FORMAT - `yaml` (default) or `json`

use anyhow::{Context, Result};
use cim_cluster_plan::{build_plan, render, PlanConfig, PlanSummary};
use tracing::{info, warn};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = PlanConfig::from_env().context("Invalid configuration")?;
    info!("📋 Configuration loaded:");
    info!("  - Cluster model: {}", config.cluster_model.display());
    if let Some(path) = &config.user_input {
        info!("  - User input: {}", path.display());
    }
    match &config.defaults_dir {
        Some(dir) => info!("  - Defaults: {}", dir.display()),
        None => info!("  - Defaults: built-in"),
    }
    info!("  - Format: {}", config.format);

    let cluster = config
        .load_cluster_model()
        .context("Failed to load cluster model")?;
    let input = config
        .load_user_input()
        .context("Failed to load user input")?;
    let shadowed = input.shadowed().count();
    if shadowed > 0 {
        warn!("⚠️ {} user documents are shadowed and will be ignored", shadowed);
    }
    let defaults = config
        .load_defaults()
        .context("Failed to load default templates")?;

    let plan = build_plan(&cluster, &input, &defaults)
        .with_context(|| format!("Failed to build plan for '{}'", cluster.cluster_name()))?;
    info!("✅ {}", PlanSummary::of(&plan));

    print!("{}", render(&plan, config.format)?);
    Ok(())
}
