// Copyright (c) 2025 - Cowboy AI, Inc.
//! Configuration Documents and Cluster Model
//!
//! - [`Document`] / [`RawDocument`] - Tagged configuration records
//! - Typed specifications, one per resource kind ([`VpcSpec`], [`SubnetSpec`], ...)
//! - [`ResourceConfig`] - One resource of a built plan
//! - [`ClusterModel`] - Read-only cluster description the plan is derived from

pub mod cluster;
pub mod document;
pub mod specs;

pub use cluster::{
    CloudSpec, ClusterModel, ClusterSpecification, ComponentSecurity, ComponentSpec, ModelError,
};
pub use document::{Document, RawDocument};
pub use specs::{
    feature_tag, InternetGatewaySpec, LaunchConfigurationSpec, ResourceConfig, Route,
    RouteTableAssociationSpec, RouteTableSpec, SecurityGroupSpec, SecurityRule, SecuritySpec,
    SubnetSpec, Tag, VirtualMachineSpec, VpcSpec,
};
