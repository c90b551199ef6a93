// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-cluster-plan
//!
//! Deterministic cluster models and templates shared by the integration
//! tests. Fixtures are the only place that constructs cluster models by
//! hand; tests describe components and let the fixtures assemble them.

#![allow(dead_code)]

use indexmap::IndexMap;
use serde_json::{json, Map};

use cim_cluster_plan::model::{
    CloudSpec, ClusterSpecification, ComponentSecurity, ComponentSpec, SecurityRule,
};
use cim_cluster_plan::{CloudProvider, ClusterModel, DefaultsStore, RawDocument};

pub const CLUSTER_NAME: &str = "Demo";
pub const VNET_ADDRESS_POOL: &str = "10.0.0.0/16";

pub const POOL_A: &str = "10.0.1.0/24";
pub const POOL_B: &str = "10.0.2.0/24";

/// Component without extra security rules
pub fn component(machine: &str, count: u32, subnet_address_pool: &str) -> ComponentSpec {
    ComponentSpec {
        machine: machine.to_string(),
        count,
        subnet_address_pool: subnet_address_pool.to_string(),
        security: ComponentSecurity::default(),
        extra: Map::new(),
    }
}

/// Component contributing its own security rules
pub fn component_with_rules(
    machine: &str,
    count: u32,
    subnet_address_pool: &str,
    rules: Vec<SecurityRule>,
) -> ComponentSpec {
    ComponentSpec {
        security: ComponentSecurity { rules },
        ..component(machine, count, subnet_address_pool)
    }
}

/// AWS cluster named [`CLUSTER_NAME`] with the given components, in order
pub fn cluster(components: Vec<(&str, ComponentSpec)>) -> ClusterModel {
    cluster_for(CloudProvider::Aws, components)
}

pub fn cluster_for(provider: CloudProvider, components: Vec<(&str, ComponentSpec)>) -> ClusterModel {
    let components: IndexMap<String, ComponentSpec> = components
        .into_iter()
        .map(|(key, spec)| (key.to_string(), spec))
        .collect();

    ClusterModel {
        kind: "epiphany-cluster".to_string(),
        title: None,
        provider,
        name: Some("default".to_string()),
        specification: ClusterSpecification {
            cloud: CloudSpec {
                cluster_name: CLUSTER_NAME.to_string(),
                vnet_address_pool: VNET_ADDRESS_POOL.to_string(),
                region: Some("eu-west-2".to_string()),
                extra: Map::new(),
            },
            components,
        },
    }
}

/// Single `web` component, count 2, in [`POOL_A`]
pub fn demo_cluster() -> ClusterModel {
    cluster(vec![("web", component("small", 2, POOL_A))])
}

pub fn builtin_defaults() -> DefaultsStore {
    DefaultsStore::builtin().expect("Built-in templates must parse")
}

pub fn https_rule() -> SecurityRule {
    SecurityRule::inbound_tcp("https", 443, "0.0.0.0/0")
}

pub fn postgres_rule() -> SecurityRule {
    SecurityRule::inbound_tcp("postgres", 5432, POOL_A)
}

/// User override for the `small` machine selector
pub fn small_machine_override() -> RawDocument {
    RawDocument::new(
        "infrastructure/virtual-machine",
        json!({
            "image_id": "ami-user",
            "size": "m5.large",
            "tags": [{ "owner": "platform" }],
            "security": { "rules": [{ "name": "rdp", "destination_port_range": "3389" }] },
        }),
    )
    .with_name("small")
}
