// Copyright (c) 2025 - Cowboy AI, Inc.
//! AWS Plan Builder
//!
//! Produces, in order:
//!
//! ```text
//! VPC ─┬─> Internet Gateway
//!      └─> Route Table ──(route via gateway)
//!
//! per subnet bucket (first-seen address pool):
//!      Subnet ─> Security Group ─> Route Table Association
//!
//! per enabled component:
//!      Autoscaling Group ─> Launch Configuration
//! ```
//!
//! A subnet bucket is keyed by the exact `subnet_address_pool` string, so two
//! components share a subnet only when their pool strings are identical;
//! overlapping but differently written ranges get separate buckets.
//! Security rules of every autoscaling group in a bucket are appended to the
//! bucket's security group without de-duplication.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::builder::ConfigBuilder;
use crate::defaults::DefaultsResolver;
use crate::domain::{CloudProvider, ResourceKind, ResourceNames};
use crate::errors::{BuildError, BuildResult};
use crate::input::UserInput;
use crate::model::{
    feature_tag, ClusterModel, ComponentSpec, Document, InternetGatewaySpec,
    LaunchConfigurationSpec, ResourceConfig, RouteTableAssociationSpec, RouteTableSpec,
    SecurityGroupSpec, SecurityRule, SubnetSpec, VirtualMachineSpec, VpcSpec,
};

/// Resources shared by every component with the same address pool
#[derive(Debug, Clone)]
struct SubnetBucket {
    subnet_name: String,
    security_group_name: String,
    /// Position of the security group in the plan
    security_group_position: usize,
}

/// Plan builder for AWS clusters
pub struct AwsConfigBuilder<'a> {
    defaults: &'a dyn DefaultsResolver,
}

impl<'a> AwsConfigBuilder<'a> {
    pub fn new(defaults: &'a dyn DefaultsResolver) -> Self {
        Self { defaults }
    }

    /// User document of the given kind, else the AWS default
    fn resolve<S: DeserializeOwned>(
        &self,
        input: &UserInput,
        kind: ResourceKind,
    ) -> BuildResult<Document<S>> {
        if let Some(document) = input.first_of_kind(kind) {
            debug!("Using user-supplied {} document", kind);
            return document.decode(kind);
        }

        debug!("Using aws default {} template", kind);
        self.defaults
            .default_config(CloudProvider::Aws, kind)?
            .decode(kind)
    }

    /// User virtual machine named after the selector, else the provider template
    fn virtual_machine(
        &self,
        cluster: &ClusterModel,
        input: &UserInput,
        machine: &str,
    ) -> BuildResult<Document<VirtualMachineSpec>> {
        let kind = ResourceKind::VirtualMachine;
        if let Some(document) = input.first_named(kind, machine) {
            debug!("Using user-supplied virtual machine '{}'", machine);
            return document.decode(kind);
        }

        debug!("Using {} virtual machine template '{}'", cluster.provider, machine);
        self.defaults
            .default_config_for_selector(cluster.provider, kind, machine)?
            .decode(kind)
    }

    fn vpc(
        &self,
        cluster: &ClusterModel,
        input: &UserInput,
        names: &ResourceNames,
    ) -> BuildResult<Document<VpcSpec>> {
        let mut vpc: Document<VpcSpec> = self.resolve(input, ResourceKind::Vpc)?;
        vpc.specification.address_pool = cluster.specification.cloud.vnet_address_pool.clone();
        vpc.specification.name = names.vpc();
        Ok(vpc)
    }

    fn internet_gateway(
        &self,
        input: &UserInput,
        names: &ResourceNames,
        vpc: &Document<VpcSpec>,
    ) -> BuildResult<Document<InternetGatewaySpec>> {
        let mut gateway: Document<InternetGatewaySpec> =
            self.resolve(input, ResourceKind::InternetGateway)?;
        gateway.specification.name = names.internet_gateway();
        gateway.specification.vpc_name = vpc.specification.name.clone();
        Ok(gateway)
    }

    fn route_table(
        &self,
        input: &UserInput,
        names: &ResourceNames,
        vpc: &Document<VpcSpec>,
        gateway: &Document<InternetGatewaySpec>,
    ) -> BuildResult<Document<RouteTableSpec>> {
        let mut route_table: Document<RouteTableSpec> =
            self.resolve(input, ResourceKind::RouteTable)?;
        route_table.specification.name = names.route_table();
        route_table.specification.vpc_name = vpc.specification.name.clone();
        route_table.specification.route.gateway_name = gateway.specification.name.clone();
        Ok(route_table)
    }

    /// Append subnet, security group and route association for a new bucket
    #[allow(clippy::too_many_arguments)]
    fn subnet_bucket(
        &self,
        input: &UserInput,
        names: &ResourceNames,
        vpc_name: &str,
        route_table_name: &str,
        address_pool: &str,
        index: usize,
        plan: &mut Vec<ResourceConfig>,
    ) -> BuildResult<SubnetBucket> {
        let mut subnet: Document<SubnetSpec> = self.resolve(input, ResourceKind::Subnet)?;
        subnet.specification.vpc_name = vpc_name.to_string();
        subnet.specification.cidr_block = address_pool.to_string();
        subnet.specification.name = names.subnet(index);

        let mut security_group: Document<SecurityGroupSpec> =
            self.resolve(input, ResourceKind::SecurityGroup)?;
        security_group.specification.name = names.security_group(index);
        security_group.specification.vpc_name = vpc_name.to_string();
        security_group.specification.cidr_block = subnet.specification.cidr_block.clone();

        let mut association: Document<RouteTableAssociationSpec> =
            self.resolve(input, ResourceKind::RouteTableAssociation)?;
        association.specification.name = names.route_association(index);
        association.specification.subnet_name = subnet.specification.name.clone();
        association.specification.route_table_name = route_table_name.to_string();

        debug!(
            "Created subnet bucket {} for {} ({})",
            index, address_pool, subnet.specification.name
        );

        let bucket = SubnetBucket {
            subnet_name: subnet.specification.name.clone(),
            security_group_name: security_group.specification.name.clone(),
            security_group_position: plan.len() + 1,
        };

        plan.push(ResourceConfig::Subnet(subnet));
        plan.push(ResourceConfig::SecurityGroup(security_group));
        plan.push(ResourceConfig::RouteTableAssociation(association));

        Ok(bucket)
    }

    /// Append autoscaling group and launch configuration for one component
    #[allow(clippy::too_many_arguments)]
    fn component(
        &self,
        cluster: &ClusterModel,
        input: &UserInput,
        names: &ResourceNames,
        key: &str,
        component: &ComponentSpec,
        bucket: &SubnetBucket,
        plan: &mut Vec<ResourceConfig>,
    ) -> BuildResult<()> {
        let mut group = self.virtual_machine(cluster, input, &component.machine)?;
        group.specification.name = names.autoscaling_group(key);
        group.specification.count = component.count;
        group.specification.subnet = bucket.subnet_name.clone();
        group.specification.tags.push(feature_tag(key));
        group
            .specification
            .security
            .rules
            .extend(component.security.rules.iter().cloned());

        append_security_rules(plan, bucket, &group.specification.security.rules)?;

        let mut launch_configuration: Document<LaunchConfigurationSpec> =
            self.resolve(input, ResourceKind::LaunchConfiguration)?;
        launch_configuration.specification.name = names.launch_configuration(key);
        launch_configuration.specification.image_id = group.specification.image_id.clone();
        launch_configuration.specification.size = group.specification.size.clone();
        launch_configuration.specification.security_groups =
            vec![bucket.security_group_name.clone()];

        debug!(
            "Created {} x{} in {}",
            group.specification.name, component.count, bucket.subnet_name
        );

        plan.push(ResourceConfig::AutoscalingGroup(group));
        plan.push(ResourceConfig::LaunchConfiguration(launch_configuration));

        Ok(())
    }
}

/// Append rules to the bucket's security group, already emitted in `plan`
fn append_security_rules(
    plan: &mut [ResourceConfig],
    bucket: &SubnetBucket,
    rules: &[SecurityRule],
) -> BuildResult<()> {
    match plan.get_mut(bucket.security_group_position) {
        Some(ResourceConfig::SecurityGroup(security_group))
            if security_group.specification.name == bucket.security_group_name =>
        {
            security_group.specification.rules.extend(rules.iter().cloned());
            Ok(())
        }
        _ => Err(BuildError::SecurityGroupMissing {
            name: bucket.security_group_name.clone(),
            position: bucket.security_group_position,
        }),
    }
}

impl ConfigBuilder for AwsConfigBuilder<'_> {
    fn provider(&self) -> CloudProvider {
        CloudProvider::Aws
    }

    fn build(&self, cluster: &ClusterModel, input: &UserInput) -> BuildResult<Vec<ResourceConfig>> {
        let names = ResourceNames::new(cluster.cluster_name());

        let vpc = self.vpc(cluster, input, &names)?;
        let gateway = self.internet_gateway(input, &names, &vpc)?;
        let route_table = self.route_table(input, &names, &vpc, &gateway)?;

        let vpc_name = vpc.specification.name.clone();
        let route_table_name = route_table.specification.name.clone();

        let mut plan = vec![
            ResourceConfig::Vpc(vpc),
            ResourceConfig::InternetGateway(gateway),
            ResourceConfig::RouteTable(route_table),
        ];

        // bucket index == number of buckets created so far
        let mut buckets: HashMap<&str, SubnetBucket> = HashMap::new();

        for (key, component) in cluster.active_components() {
            let pool = component.subnet_address_pool.as_str();
            if !buckets.contains_key(pool) {
                let bucket = self.subnet_bucket(
                    input,
                    &names,
                    &vpc_name,
                    &route_table_name,
                    pool,
                    buckets.len(),
                    &mut plan,
                )?;
                buckets.insert(pool, bucket);
            }

            let bucket = &buckets[pool];
            self.component(cluster, input, &names, key, component, bucket, &mut plan)?;
        }

        info!(
            "Built plan for cluster '{}': {} resources, {} subnet buckets",
            names.cluster(),
            plan.len(),
            buckets.len()
        );

        Ok(plan)
    }
}
