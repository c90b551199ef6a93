// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cloud Provider Value Object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cloud provider a cluster is planned for
///
/// `Any` describes clusters on pre-provisioned machines; it has no
/// infrastructure plan of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudProvider {
    /// Amazon Web Services
    Aws,
    /// Microsoft Azure
    Azure,
    /// Provider-agnostic (existing machines)
    Any,
}

impl CloudProvider {
    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aws => "aws",
            Self::Azure => "azure",
            Self::Any => "any",
        }
    }
}

impl fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CloudProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "aws" => Ok(Self::Aws),
            "azure" => Ok(Self::Azure),
            "any" => Ok(Self::Any),
            other => Err(other.to_string()),
        }
    }
}
