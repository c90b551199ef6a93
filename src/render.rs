// Copyright (c) 2025 - Cowboy AI, Inc.
//! Plan rendering for the provisioning step

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{BuildError, BuildResult};
use crate::model::ResourceConfig;

/// Serialization format of a rendered plan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Multi-document YAML stream, one document per resource
    #[default]
    Yaml,
    /// Pretty-printed JSON array
    Json,
}

impl FromStr for OutputFormat {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            other => Err(BuildError::Configuration(format!(
                "unknown plan format '{}' (expected yaml or json)",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => write!(f, "yaml"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Render a plan as a `---` separated YAML stream
pub fn render_yaml(plan: &[ResourceConfig]) -> BuildResult<String> {
    let documents = plan
        .iter()
        .map(serde_yaml::to_string)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(documents.join("---\n"))
}

/// Render a plan as a JSON array
pub fn render_json(plan: &[ResourceConfig]) -> BuildResult<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}

pub fn render(plan: &[ResourceConfig], format: OutputFormat) -> BuildResult<String> {
    match format {
        OutputFormat::Yaml => render_yaml(plan),
        OutputFormat::Json => render_json(plan),
    }
}
