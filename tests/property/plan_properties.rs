// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Plan Building
//!
//! Generates clusters with up to eight components drawn from a small set of
//! machines and address pools, then checks the plan against a count of the
//! enabled components and distinct pools computed independently.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use cim_cluster_plan::model::ComponentSpec;
use cim_cluster_plan::{build_plan, ClusterModel, ResourceConfig, ResourceKind, UserInput};

use crate::fixtures::{builtin_defaults, cluster, component};

// ============================================================================
// Strategies
// ============================================================================

const POOLS: [&str; 4] = ["10.0.1.0/24", "10.0.2.0/24", "10.0.3.0/24", "10.0.1.0/25"];

fn machine() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("small"), Just("medium"), Just("large"), Just("default")]
}

fn component_spec() -> impl Strategy<Value = ComponentSpec> {
    (machine(), 0u32..4, prop::sample::select(POOLS.to_vec()))
        .prop_map(|(machine, count, pool)| component(machine, count, pool))
}

fn cluster_model() -> impl Strategy<Value = ClusterModel> {
    prop::collection::vec(component_spec(), 0..8).prop_map(|specs| {
        let keys: Vec<String> = (0..specs.len()).map(|i| format!("c{}", i)).collect();
        cluster(
            keys.iter()
                .map(String::as_str)
                .zip(specs)
                .collect(),
        )
    })
}

/// Enabled component keys and distinct pools, in first-seen order
fn expected_shape(model: &ClusterModel) -> (Vec<String>, Vec<String>) {
    let mut enabled = Vec::new();
    let mut pools: Vec<String> = Vec::new();
    for (key, spec) in &model.specification.components {
        if spec.count == 0 {
            continue;
        }
        enabled.push(key.clone());
        if !pools.contains(&spec.subnet_address_pool) {
            pools.push(spec.subnet_address_pool.clone());
        }
    }
    (enabled, pools)
}

fn build(model: &ClusterModel) -> Vec<ResourceConfig> {
    build_plan(model, &UserInput::default(), &builtin_defaults())
        .expect("Generated clusters only use built-in machines")
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: 3 base resources, 3 per bucket, 2 per enabled component
    #[test]
    fn prop_plan_length(model in cluster_model()) {
        let (enabled, pools) = expected_shape(&model);
        let plan = build(&model);

        prop_assert_eq!(
            plan.len(),
            3 + 3 * pools.len() + 2 * enabled.len(),
            "Plan length must follow bucket and component counts"
        );
    }

    /// Property: building twice from the same inputs gives the same plan
    #[test]
    fn prop_build_is_deterministic(model in cluster_model()) {
        prop_assert_eq!(build(&model), build(&model), "Same inputs must produce same plan");
    }

    /// Property: no two resources share a name
    #[test]
    fn prop_resource_names_unique(model in cluster_model()) {
        let plan = build(&model);
        let names: HashSet<&str> = plan.iter().map(ResourceConfig::resource_name).collect();

        prop_assert_eq!(names.len(), plan.len(), "Resource names must be unique");
    }

    /// Property: only enabled components get an autoscaling group, in model order
    #[test]
    fn prop_groups_follow_enabled_components(model in cluster_model()) {
        let (enabled, _) = expected_shape(&model);
        let plan = build(&model);

        let groups: Vec<String> = plan
            .iter()
            .filter_map(ResourceConfig::as_autoscaling_group)
            .map(|group| group.specification.name.clone())
            .collect();
        let expected: Vec<String> = enabled
            .iter()
            .map(|key| format!("aws-asg-demo{}", key))
            .collect();

        prop_assert_eq!(groups, expected);
    }

    /// Property: subnets appear once per distinct pool, in first-seen order
    #[test]
    fn prop_subnets_follow_distinct_pools(model in cluster_model()) {
        let (_, pools) = expected_shape(&model);
        let plan = build(&model);

        let subnets: Vec<String> = plan
            .iter()
            .filter_map(|resource| match resource {
                ResourceConfig::Subnet(subnet) => Some(subnet.specification.cidr_block.clone()),
                _ => None,
            })
            .collect();

        prop_assert_eq!(subnets, pools);
    }

    /// Property: every group launches into the subnet holding its component's pool
    #[test]
    fn prop_groups_reference_their_pool_subnet(model in cluster_model()) {
        let plan = build(&model);

        let subnet_pools: HashMap<&str, &str> = plan
            .iter()
            .filter_map(|resource| match resource {
                ResourceConfig::Subnet(subnet) => Some((
                    subnet.specification.name.as_str(),
                    subnet.specification.cidr_block.as_str(),
                )),
                _ => None,
            })
            .collect();

        for (key, spec) in model.active_components() {
            let group_name = format!("aws-asg-demo{}", key);
            let group = plan
                .iter()
                .filter_map(ResourceConfig::as_autoscaling_group)
                .find(|group| group.specification.name == group_name);
            prop_assert!(group.is_some(), "Missing group {}", group_name);

            if let Some(group) = group {
                prop_assert_eq!(group.specification.count, spec.count);
                prop_assert_eq!(
                    subnet_pools.get(group.specification.subnet.as_str()).copied(),
                    Some(spec.subnet_address_pool.as_str())
                );
            }
        }
    }

    /// Property: each security group holds the rules of every group in its bucket
    #[test]
    fn prop_security_group_rule_count(model in cluster_model()) {
        let plan = build(&model);

        let mut expected: HashMap<String, usize> = HashMap::new();
        for (index, resource) in plan.iter().enumerate() {
            if let ResourceConfig::AutoscalingGroup(group) = resource {
                if let Some(ResourceConfig::LaunchConfiguration(launch)) = plan.get(index + 1) {
                    for security_group in &launch.specification.security_groups {
                        *expected.entry(security_group.clone()).or_default() +=
                            group.specification.security.rules.len();
                    }
                }
            }
        }

        for security_group in plan.iter().filter_map(ResourceConfig::as_security_group) {
            let rules = security_group.specification.rules.len();
            let from_groups = expected
                .get(&security_group.specification.name)
                .copied()
                .unwrap_or_default();
            // Built-in security group template carries no rules of its own
            prop_assert_eq!(rules, from_groups);
        }
    }

    /// Property: every plan opens with VPC, gateway and route table
    #[test]
    fn prop_plan_starts_with_network_base(model in cluster_model()) {
        let plan = build(&model);
        let head: Vec<ResourceKind> = plan.iter().take(3).map(ResourceConfig::kind).collect();

        prop_assert_eq!(
            head,
            vec![ResourceKind::Vpc, ResourceKind::InternetGateway, ResourceKind::RouteTable]
        );
    }
}
