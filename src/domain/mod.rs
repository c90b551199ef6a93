// Copyright (c) 2025 - Cowboy AI, Inc.
//! Infrastructure Domain Models
//!
//! Core vocabulary shared by the plan builder, the defaults store and the
//! cluster model.
//!
//! - [`ResourceKind`] - Resource kind taxonomy (`infrastructure/...` tags)
//! - [`CloudProvider`] - Target cloud provider
//! - [`ResourceNames`] - Deterministic resource naming for one cluster

pub mod naming;
pub mod provider;
pub mod resource_kind;

pub use naming::ResourceNames;
pub use provider::CloudProvider;
pub use resource_kind::ResourceKind;
