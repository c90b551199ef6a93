// Copyright (c) 2025 - Cowboy AI, Inc.
//! Infrastructure Plan Builders
//!
//! A [`ConfigBuilder`] turns a [`ClusterModel`] plus the user's override
//! documents into the ordered list of resource documents needed to provision
//! the cluster. Builders are per provider; [`builder_for`] picks one.
//!
//! # Example
//!
//! ```rust
//! use cim_cluster_plan::{build_plan, ClusterModel, DefaultsStore, UserInput};
//!
//! let cluster = ClusterModel::from_yaml_str(r#"
//! provider: aws
//! specification:
//!   cloud:
//!     cluster_name: Demo
//!     vnet_address_pool: 10.0.0.0/16
//!   components:
//!     web:
//!       machine: small
//!       count: 2
//!       subnet_address_pool: 10.0.1.0/24
//! "#).unwrap();
//!
//! let defaults = DefaultsStore::builtin().unwrap();
//! let plan = build_plan(&cluster, &UserInput::default(), &defaults).unwrap();
//! assert_eq!(plan.len(), 8);
//! assert_eq!(plan[0].resource_name(), "demovpc");
//! ```

pub mod aws;
pub mod summary;

use crate::defaults::DefaultsResolver;
use crate::domain::CloudProvider;
use crate::errors::{BuildError, BuildResult};
use crate::input::UserInput;
use crate::model::{ClusterModel, ResourceConfig};

pub use aws::AwsConfigBuilder;
pub use summary::PlanSummary;

/// Provider-specific plan builder
pub trait ConfigBuilder {
    /// Provider this builder plans for
    fn provider(&self) -> CloudProvider;

    /// Build the ordered resource plan for a cluster
    ///
    /// Any failure aborts the whole build; no partial plan is returned.
    fn build(&self, cluster: &ClusterModel, input: &UserInput) -> BuildResult<Vec<ResourceConfig>>;
}

/// Select the builder for a provider
pub fn builder_for<'a>(
    provider: CloudProvider,
    defaults: &'a dyn DefaultsResolver,
) -> BuildResult<Box<dyn ConfigBuilder + 'a>> {
    match provider {
        CloudProvider::Aws => Ok(Box::new(AwsConfigBuilder::new(defaults))),
        other => Err(BuildError::UnsupportedProvider(other.to_string())),
    }
}

/// Build the plan for a cluster with the builder of its provider
pub fn build_plan(
    cluster: &ClusterModel,
    input: &UserInput,
    defaults: &dyn DefaultsResolver,
) -> BuildResult<Vec<ResourceConfig>> {
    builder_for(cluster.provider, defaults)?.build(cluster, input)
}
