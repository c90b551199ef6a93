// Copyright (c) 2025 - Cowboy AI, Inc.
//! Provider Default Templates
//!
//! When the user supplies no document of a given kind, the builder falls
//! back to a provider default. Defaults are looked up two ways:
//!
//! - by provider and kind: the template named `default`, or else the first
//!   template registered for that pair
//! - by provider, kind and selector: the template named after the selector,
//!   overlaid onto the `default` template of the same kind
//!
//! Both lookups fail with a typed error when nothing matches; the builder
//! never sees an empty placeholder document.
//!
//! [`DefaultsStore`] is the in-memory implementation. It can be filled from
//! YAML text, from a directory tree laid out as `<root>/<provider>/*.yml`,
//! or from the AWS templates compiled into the crate.

pub mod merge;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{CloudProvider, ResourceKind};
use crate::errors::{BuildError, BuildResult};
use crate::model::RawDocument;

pub use merge::merge_values;

/// Template name every provider/kind pair falls back to
pub const DEFAULT_SELECTOR: &str = "default";

const BUILTIN_AWS: [&str; 8] = [
    include_str!("../../defaults/aws/vpc.yml"),
    include_str!("../../defaults/aws/internet-gateway.yml"),
    include_str!("../../defaults/aws/route-table.yml"),
    include_str!("../../defaults/aws/route-table-association.yml"),
    include_str!("../../defaults/aws/subnet.yml"),
    include_str!("../../defaults/aws/security-group.yml"),
    include_str!("../../defaults/aws/launch-configuration.yml"),
    include_str!("../../defaults/aws/virtual-machine.yml"),
];

/// Source of provider default templates
pub trait DefaultsResolver: Send + Sync {
    /// Default template for a provider and kind
    fn default_config(&self, provider: CloudProvider, kind: ResourceKind)
        -> BuildResult<RawDocument>;

    /// Template for a provider, kind and named selector
    fn default_config_for_selector(
        &self,
        provider: CloudProvider,
        kind: ResourceKind,
        selector: &str,
    ) -> BuildResult<RawDocument>;
}

/// In-memory template store keyed by provider and kind
#[derive(Debug, Clone, Default)]
pub struct DefaultsStore {
    templates: HashMap<(CloudProvider, String), Vec<RawDocument>>,
}

impl DefaultsStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the built-in AWS templates
    pub fn builtin() -> BuildResult<Self> {
        let mut store = Self::new();
        for text in BUILTIN_AWS {
            store.load_yaml_str(CloudProvider::Aws, text)?;
        }
        Ok(store)
    }

    /// Register a template for a provider
    ///
    /// Templates of one provider/kind keep registration order.
    pub fn insert(&mut self, provider: CloudProvider, document: RawDocument) {
        debug!(
            "Registered {} template '{}' for {}",
            document.kind,
            document.name.as_deref().unwrap_or("<unnamed>"),
            provider
        );
        self.templates
            .entry((provider, document.kind.clone()))
            .or_default()
            .push(document);
    }

    /// Register every document of a multi-document YAML stream
    ///
    /// Returns the number of templates added. Empty documents are skipped.
    pub fn load_yaml_str(&mut self, provider: CloudProvider, text: &str) -> BuildResult<usize> {
        let mut added = 0;
        for document in serde_yaml::Deserializer::from_str(text) {
            if let Some(document) = Option::<RawDocument>::deserialize(document)? {
                self.insert(provider, document);
                added += 1;
            }
        }
        Ok(added)
    }

    /// Load templates from `<root>/<provider>/*.yml` (or `*.yaml`)
    ///
    /// Directories that do not name a known provider are skipped. Files are
    /// read in name order so the resulting store is deterministic.
    pub fn load_dir(root: impl AsRef<Path>) -> BuildResult<Self> {
        let root = root.as_ref();
        let mut store = Self::new();

        for provider_dir in sorted_entries(root)? {
            if !provider_dir.is_dir() {
                continue;
            }
            let dir_name = provider_dir
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default();
            let provider = match dir_name.parse::<CloudProvider>() {
                Ok(provider) => provider,
                Err(_) => {
                    warn!("Skipping defaults directory for unknown provider: {}", dir_name);
                    continue;
                }
            };

            for file in sorted_entries(&provider_dir)? {
                let is_yaml = file
                    .extension()
                    .and_then(|e| e.to_str())
                    .map(|e| e == "yml" || e == "yaml")
                    .unwrap_or(false);
                if !is_yaml {
                    continue;
                }
                let text = fs::read_to_string(&file)?;
                let added = store.load_yaml_str(provider, &text)?;
                debug!("Loaded {} templates from {}", added, file.display());
            }
        }

        Ok(store)
    }

    /// Number of registered templates
    pub fn len(&self) -> usize {
        self.templates.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn templates_for(&self, provider: CloudProvider, kind: ResourceKind) -> &[RawDocument] {
        self.templates
            .get(&(provider, kind.as_str().to_string()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn named<'a>(templates: &'a [RawDocument], name: &str) -> Option<&'a RawDocument> {
        templates.iter().find(|t| t.name.as_deref() == Some(name))
    }
}

impl DefaultsResolver for DefaultsStore {
    fn default_config(
        &self,
        provider: CloudProvider,
        kind: ResourceKind,
    ) -> BuildResult<RawDocument> {
        let templates = self.templates_for(provider, kind);
        Self::named(templates, DEFAULT_SELECTOR)
            .or_else(|| templates.first())
            .cloned()
            .ok_or_else(|| BuildError::DefaultNotFound {
                provider: provider.to_string(),
                kind: kind.to_string(),
            })
    }

    fn default_config_for_selector(
        &self,
        provider: CloudProvider,
        kind: ResourceKind,
        selector: &str,
    ) -> BuildResult<RawDocument> {
        let templates = self.templates_for(provider, kind);
        let selected =
            Self::named(templates, selector).ok_or_else(|| BuildError::SelectorNotFound {
                provider: provider.to_string(),
                kind: kind.to_string(),
                selector: selector.to_string(),
            })?;

        if selector == DEFAULT_SELECTOR {
            return Ok(selected.clone());
        }

        match Self::named(templates, DEFAULT_SELECTOR) {
            Some(base) => {
                let mut merged = base.clone();
                merge_values(&mut merged.specification, &selected.specification);
                merged.name = selected.name.clone();
                if selected.title.is_some() {
                    merged.title = selected.title.clone();
                }
                Ok(merged)
            }
            None => Ok(selected.clone()),
        }
    }
}

fn sorted_entries(dir: &Path) -> BuildResult<Vec<std::path::PathBuf>> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort();
    Ok(entries)
}
