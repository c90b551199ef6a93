// Copyright (c) 2025 - Cowboy AI, Inc.
//! Plan configuration
//!
//! Environment variables:
//!
//! | Variable         | Required | Meaning                                         |
//! |------------------|----------|-------------------------------------------------|
//! | `CLUSTER_MODEL`  | yes      | Cluster model file (`.json`, otherwise YAML)    |
//! | `USER_INPUT`     | no       | Multi-document YAML of override documents       |
//! | `DEFAULTS_DIR`   | no       | Template tree `<dir>/<provider>/*.yml`          |
//! | `PLAN_FORMAT`    | no       | `yaml` (default) or `json`                      |

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::defaults::DefaultsStore;
use crate::errors::{BuildError, BuildResult};
use crate::input::UserInput;
use crate::model::ClusterModel;
use crate::render::OutputFormat;

/// Where plan inputs come from and how the plan is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanConfig {
    /// Cluster model file
    pub cluster_model: PathBuf,
    /// Optional user override documents
    pub user_input: Option<PathBuf>,
    /// Optional template directory; built-in templates when unset
    pub defaults_dir: Option<PathBuf>,
    /// Rendered plan format
    pub format: OutputFormat,
}

impl PlanConfig {
    /// Create a configuration for a cluster model file
    pub fn new(cluster_model: impl Into<PathBuf>) -> Self {
        Self {
            cluster_model: cluster_model.into(),
            user_input: None,
            defaults_dir: None,
            format: OutputFormat::default(),
        }
    }

    pub fn with_user_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.user_input = Some(path.into());
        self
    }

    pub fn with_defaults_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.defaults_dir = Some(path.into());
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> BuildResult<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through a variable lookup
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> BuildResult<Self> {
        let cluster_model = lookup("CLUSTER_MODEL")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| BuildError::Configuration("CLUSTER_MODEL not set".to_string()))?;

        let mut config = Self::new(cluster_model);
        if let Some(path) = lookup("USER_INPUT").filter(|v| !v.is_empty()) {
            config = config.with_user_input(path);
        }
        if let Some(path) = lookup("DEFAULTS_DIR").filter(|v| !v.is_empty()) {
            config = config.with_defaults_dir(path);
        }
        if let Some(format) = lookup("PLAN_FORMAT").filter(|v| !v.is_empty()) {
            config = config.with_format(format.parse()?);
        }

        Ok(config)
    }

    /// Read and parse the cluster model
    pub fn load_cluster_model(&self) -> BuildResult<ClusterModel> {
        let text = fs::read_to_string(&self.cluster_model)?;
        let model = if is_json(&self.cluster_model) {
            ClusterModel::from_json_str(&text)?
        } else {
            ClusterModel::from_yaml_str(&text)?
        };
        debug!("Loaded cluster model from {}", self.cluster_model.display());
        Ok(model)
    }

    /// Read the user override documents, or none
    pub fn load_user_input(&self) -> BuildResult<UserInput> {
        match &self.user_input {
            Some(path) => UserInput::from_yaml_str(&fs::read_to_string(path)?),
            None => Ok(UserInput::default()),
        }
    }

    /// Load the template directory, or the built-in templates
    pub fn load_defaults(&self) -> BuildResult<DefaultsStore> {
        match &self.defaults_dir {
            Some(dir) => DefaultsStore::load_dir(dir),
            None => DefaultsStore::builtin(),
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}
