// Copyright (c) 2025 - Cowboy AI, Inc.
//! Infrastructure Resource Kind Taxonomy
//!
//! Every configuration document carries a `kind` tag such as
//! `infrastructure/vpc`. This module defines the kinds the plan builder
//! produces or consumes. User input may carry other kinds; those stay plain
//! strings and are simply never matched.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Resource kinds handled by the plan builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceKind {
    /// Virtual private cloud (network root)
    #[serde(rename = "infrastructure/vpc")]
    Vpc,
    /// Internet gateway attached to the VPC
    #[serde(rename = "infrastructure/internet-gateway")]
    InternetGateway,
    /// Route table with a default route through the gateway
    #[serde(rename = "infrastructure/route-table")]
    RouteTable,
    /// Association between a subnet and the route table
    #[serde(rename = "infrastructure/route-table-association")]
    RouteTableAssociation,
    /// Subnet carved out of the VPC address pool
    #[serde(rename = "infrastructure/subnet")]
    Subnet,
    /// Security group shared by a subnet bucket
    #[serde(rename = "infrastructure/security-group")]
    SecurityGroup,
    /// Virtual machine template (emitted as an autoscaling group)
    #[serde(rename = "infrastructure/virtual-machine")]
    VirtualMachine,
    /// Launch configuration for an autoscaling group
    #[serde(rename = "infrastructure/launch-configuration")]
    LaunchConfiguration,
}

impl ResourceKind {
    /// All kinds, in plan dependency order
    pub const ALL: [ResourceKind; 8] = [
        Self::Vpc,
        Self::InternetGateway,
        Self::RouteTable,
        Self::Subnet,
        Self::SecurityGroup,
        Self::RouteTableAssociation,
        Self::VirtualMachine,
        Self::LaunchConfiguration,
    ];

    /// Get the canonical kind tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vpc => "infrastructure/vpc",
            Self::InternetGateway => "infrastructure/internet-gateway",
            Self::RouteTable => "infrastructure/route-table",
            Self::RouteTableAssociation => "infrastructure/route-table-association",
            Self::Subnet => "infrastructure/subnet",
            Self::SecurityGroup => "infrastructure/security-group",
            Self::VirtualMachine => "infrastructure/virtual-machine",
            Self::LaunchConfiguration => "infrastructure/launch-configuration",
        }
    }

    /// Parse a kind tag, returning `None` for kinds outside the taxonomy
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }

    /// Get human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Vpc => "VPC",
            Self::InternetGateway => "Internet Gateway",
            Self::RouteTable => "Route Table",
            Self::RouteTableAssociation => "Route Table Association",
            Self::Subnet => "Subnet",
            Self::SecurityGroup => "Security Group",
            Self::VirtualMachine => "Autoscaling Group",
            Self::LaunchConfiguration => "Launch Configuration",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
