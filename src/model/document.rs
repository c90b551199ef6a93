// Copyright (c) 2025 - Cowboy AI, Inc.
//! Configuration Documents
//!
//! A configuration document is a tagged record: a `kind`, optional `title`,
//! `provider` and `name`, and a nested `specification`. Templates and user
//! input arrive as [`RawDocument`]s with an untyped specification; the
//! builder decodes them into typed documents before filling in names and
//! cross-references.
//!
//! Decoding always produces a fresh owned record. A template held by a
//! defaults store is never written through, so the same template can back
//! any number of resources in one plan.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::ResourceKind;
use crate::errors::{BuildError, BuildResult};

/// Configuration document with a specification of type `S`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document<S> {
    /// Kind tag (e.g. `infrastructure/vpc`)
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// Document name, used to select virtual machine templates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Provider-specific attributes
    #[serde(default)]
    pub specification: S,
}

/// Document with an untyped specification
pub type RawDocument = Document<Value>;

impl RawDocument {
    /// Create a raw document of the given kind
    pub fn new(kind: impl Into<String>, specification: Value) -> Self {
        Self {
            kind: kind.into(),
            title: None,
            provider: None,
            name: None,
            specification,
        }
    }

    /// Set the document name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Check if this document has the given kind
    pub fn is_kind(&self, kind: ResourceKind) -> bool {
        self.kind == kind.as_str()
    }

    /// Decode into a typed document of the expected kind
    ///
    /// A missing (`null`) specification decodes as an empty one, so every
    /// typed field takes its default.
    pub fn decode<S: DeserializeOwned>(&self, expected: ResourceKind) -> BuildResult<Document<S>> {
        if !self.is_kind(expected) {
            return Err(BuildError::KindMismatch {
                expected: expected.as_str().to_string(),
                found: self.kind.clone(),
            });
        }

        let specification = match &self.specification {
            Value::Null => Value::Object(Map::new()),
            other => other.clone(),
        };

        let specification =
            serde_json::from_value(specification).map_err(|e| BuildError::InvalidTemplate {
                kind: self.kind.clone(),
                reason: e.to_string(),
            })?;

        Ok(Document {
            kind: self.kind.clone(),
            title: self.title.clone(),
            provider: self.provider.clone(),
            name: self.name.clone(),
            specification,
        })
    }
}
