//! Cluster infrastructure plans for the Composable Information Machine
//!
//! Derives the ordered list of cloud resource documents (VPC, gateway, route
//! table, subnets, security groups, autoscaling groups, launch
//! configurations) for a cluster from a compact cluster model, falling back
//! to provider default templates wherever the user supplies no document of
//! their own.

pub mod builder;
pub mod config;
pub mod defaults;
pub mod domain;
pub mod errors;
pub mod input;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use builder::{build_plan, builder_for, AwsConfigBuilder, ConfigBuilder, PlanSummary};
pub use config::PlanConfig;
pub use defaults::{DefaultsResolver, DefaultsStore};
pub use domain::{CloudProvider, ResourceKind, ResourceNames};
pub use errors::{BuildError, BuildResult};
pub use input::UserInput;
pub use model::{ClusterModel, Document, RawDocument, ResourceConfig};
pub use render::{render, render_json, render_yaml, OutputFormat};
