// Copyright (c) 2025 - Cowboy AI, Inc.
//! User Input Store
//!
//! User-supplied documents override provider defaults. Lookups go through
//! two keyed indexes built once up front:
//!
//! - `kind → document`
//! - `(kind, name) → document`
//!
//! The first document for a key wins. A later document that is neither the
//! first of its kind nor the first with its `(kind, name)` pair can never be
//! selected; it stays in [`UserInput::documents`], is listed by
//! [`UserInput::shadowed`] and is reported with a warning when the store is
//! built. Documents of kinds the plan builder does not use are kept as they
//! are and logged at debug level.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::ResourceKind;
use crate::errors::BuildResult;
use crate::model::RawDocument;

/// Ordered user documents with first-wins lookup indexes
#[derive(Debug, Clone, Default)]
pub struct UserInput {
    documents: Vec<RawDocument>,
    by_kind: HashMap<String, usize>,
    by_kind_and_name: HashMap<(String, String), usize>,
    shadowed: Vec<usize>,
}

impl UserInput {
    /// Index the given documents
    pub fn new(documents: Vec<RawDocument>) -> Self {
        let mut by_kind: HashMap<String, usize> = HashMap::new();
        let mut by_kind_and_name: HashMap<(String, String), usize> = HashMap::new();
        let mut shadowed = Vec::new();

        for (position, document) in documents.iter().enumerate() {
            if ResourceKind::parse(&document.kind).is_none() {
                debug!(
                    "User document {} at position {} has a kind the plan builder does not use",
                    document.kind, position
                );
            }

            let first_of_kind = match by_kind.entry(document.kind.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(position);
                    true
                }
                Entry::Occupied(_) => false,
            };

            let first_named = match &document.name {
                Some(name) => match by_kind_and_name.entry((document.kind.clone(), name.clone())) {
                    Entry::Vacant(slot) => {
                        slot.insert(position);
                        true
                    }
                    Entry::Occupied(_) => false,
                },
                None => false,
            };

            if !first_of_kind && !first_named {
                warn!(
                    "User document {} '{}' at position {} is shadowed by an earlier one",
                    document.kind,
                    document.name.as_deref().unwrap_or("<unnamed>"),
                    position
                );
                shadowed.push(position);
            }
        }

        Self {
            documents,
            by_kind,
            by_kind_and_name,
            shadowed,
        }
    }

    /// Parse and index a multi-document YAML stream
    pub fn from_yaml_str(text: &str) -> BuildResult<Self> {
        let mut documents = Vec::new();
        for document in serde_yaml::Deserializer::from_str(text) {
            if let Some(document) = Option::<RawDocument>::deserialize(document)? {
                documents.push(document);
            }
        }
        Ok(Self::new(documents))
    }

    /// First document of the given kind
    pub fn first_of_kind(&self, kind: ResourceKind) -> Option<&RawDocument> {
        self.by_kind
            .get(kind.as_str())
            .map(|&position| &self.documents[position])
    }

    /// First document of the given kind carrying the given name
    pub fn first_named(&self, kind: ResourceKind, name: &str) -> Option<&RawDocument> {
        self.by_kind_and_name
            .get(&(kind.as_str().to_string(), name.to_string()))
            .map(|&position| &self.documents[position])
    }

    /// All documents, in input order
    pub fn documents(&self) -> &[RawDocument] {
        &self.documents
    }

    /// Documents no lookup can ever return, in input order
    pub fn shadowed(&self) -> impl Iterator<Item = &RawDocument> {
        self.shadowed.iter().map(|&position| &self.documents[position])
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl From<Vec<RawDocument>> for UserInput {
    fn from(documents: Vec<RawDocument>) -> Self {
        Self::new(documents)
    }
}
