// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cluster Model
//!
//! Read-only description of a cluster: cloud metadata plus an ordered
//! mapping from component key to component spec. Component order is the
//! order of the source document and drives the order of the built plan.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::CloudProvider;
use crate::model::specs::SecurityRule;

/// Cluster model parsing error
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to parse cluster model: {0}")]
    Parse(String),
}

/// Cluster model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterModel {
    #[serde(default)]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub provider: CloudProvider,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub specification: ClusterSpecification,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSpecification {
    pub cloud: CloudSpec,

    #[serde(default)]
    pub components: IndexMap<String, ComponentSpec>,
}

/// Cloud metadata for the cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudSpec {
    pub cluster_name: String,

    /// Address pool of the whole VPC
    pub vnet_address_pool: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One component of the cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpec {
    /// Virtual machine selector
    pub machine: String,

    /// Desired instance count; zero disables the component
    pub count: u32,

    /// Subnet CIDR; components with identical strings share a subnet
    pub subnet_address_pool: String,

    #[serde(default)]
    pub security: ComponentSecurity,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentSecurity {
    #[serde(default)]
    pub rules: Vec<SecurityRule>,
}

impl ClusterModel {
    /// Parse a cluster model from YAML
    pub fn from_yaml_str(text: &str) -> Result<Self, ModelError> {
        serde_yaml::from_str(text).map_err(|e| ModelError::Parse(e.to_string()))
    }

    /// Parse a cluster model from JSON
    pub fn from_json_str(text: &str) -> Result<Self, ModelError> {
        serde_json::from_str(text).map_err(|e| ModelError::Parse(e.to_string()))
    }

    pub fn cluster_name(&self) -> &str {
        &self.specification.cloud.cluster_name
    }

    /// Components that contribute resources (count ≥ 1), in mapping order
    pub fn active_components(&self) -> impl Iterator<Item = (&String, &ComponentSpec)> {
        self.specification
            .components
            .iter()
            .filter(|(_, component)| component.is_enabled())
    }
}

impl ComponentSpec {
    /// Check if this component contributes resources
    pub fn is_enabled(&self) -> bool {
        self.count >= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL: &str = r#"
kind: epiphany-cluster
provider: aws
name: default
specification:
  cloud:
    cluster_name: Demo
    vnet_address_pool: 10.0.0.0/16
    region: eu-west-2
  components:
    web:
      machine: small
      count: 2
      subnet_address_pool: 10.0.1.0/24
    db:
      machine: large
      count: 0
      subnet_address_pool: 10.0.2.0/24
    api:
      machine: small
      count: 1
      subnet_address_pool: 10.0.1.0/24
      security:
        rules:
          - name: https
            destination_port_range: "443"
"#;

    #[test]
    fn test_parse_preserves_component_order() {
        let model = ClusterModel::from_yaml_str(MODEL).unwrap();
        let keys: Vec<&str> = model
            .specification
            .components
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["web", "db", "api"]);
        assert_eq!(model.provider, CloudProvider::Aws);
        assert_eq!(model.cluster_name(), "Demo");
    }

    #[test]
    fn test_active_components_skip_zero_count() {
        let model = ClusterModel::from_yaml_str(MODEL).unwrap();
        let active: Vec<&str> = model.active_components().map(|(k, _)| k.as_str()).collect();
        assert_eq!(active, vec!["web", "api"]);
    }

    #[test]
    fn test_component_security_defaults_to_empty() {
        let model = ClusterModel::from_yaml_str(MODEL).unwrap();
        assert!(model.specification.components["web"].security.rules.is_empty());
        assert_eq!(model.specification.components["api"].security.rules.len(), 1);
    }

    #[test]
    fn test_missing_cloud_field_is_parse_error() {
        let text = r#"
provider: aws
specification:
  cloud:
    cluster_name: Demo
"#;
        let err = ClusterModel::from_yaml_str(text).unwrap_err();
        assert!(err.to_string().contains("vnet_address_pool"));
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let text = r#"{
            "provider": "aws",
            "specification": {
                "cloud": { "cluster_name": "x", "vnet_address_pool": "10.0.0.0/16" },
                "components": { "web": { "machine": "small", "count": -1, "subnet_address_pool": "10.0.1.0/24" } }
            }
        }"#;
        assert!(ClusterModel::from_json_str(text).is_err());
    }
}
