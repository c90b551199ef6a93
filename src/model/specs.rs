// Copyright (c) 2025 - Cowboy AI, Inc.
//! Typed Resource Specifications
//!
//! One specification type per resource kind. Each type models the fields
//! the builder reads or writes and keeps every other provider attribute in a
//! flattened `extra` map, so a template passes through the builder intact.
//! All fields default, letting sparse templates and user overrides decode.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::ResourceKind;
use crate::model::document::Document;

/// Free-form key/value tag attached to an autoscaling group
pub type Tag = Map<String, Value>;

/// Build the `{feature: <component>}` tag
pub fn feature_tag(component_key: &str) -> Tag {
    let mut tag = Tag::new();
    tag.insert("feature".to_string(), Value::String(component_key.to_string()));
    tag
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VpcSpec {
    pub name: String,
    pub address_pool: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InternetGatewaySpec {
    pub name: String,
    pub vpc_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Route table with its single route
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteTableSpec {
    pub name: String,
    pub vpc_name: String,
    pub route: Route,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Route {
    pub cidr_block: String,
    /// Name of the gateway the route points at
    pub gateway_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubnetSpec {
    pub name: String,
    pub vpc_name: String,
    pub cidr_block: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Security group shared by every component in a subnet bucket
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityGroupSpec {
    pub name: String,
    pub vpc_name: String,
    pub cidr_block: String,
    pub rules: Vec<SecurityRule>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteTableAssociationSpec {
    pub name: String,
    pub subnet_name: String,
    pub route_table_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Virtual machine template, emitted as an autoscaling group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualMachineSpec {
    pub name: String,
    pub count: u32,
    /// Name of the subnet the group launches into
    pub subnet: String,
    pub image_id: String,
    pub size: String,
    pub tags: Vec<Tag>,
    pub security: SecuritySpec,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecuritySpec {
    pub rules: Vec<SecurityRule>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfigurationSpec {
    pub name: String,
    pub image_id: String,
    pub size: String,
    /// Names of the security groups attached to launched instances
    pub security_groups: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Firewall rule
///
/// Attributes other than `name` pass through as written, so a port range may
/// be `22`, `"22"` or `"1024-2048"`. Rules are compared structurally; two
/// components contributing the same rule to one security group leave two
/// equal entries behind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityRule {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_port_range: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_port_range: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_address_prefix: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_address_prefix: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SecurityRule {
    /// Create an inbound TCP rule for a single port
    pub fn inbound_tcp(name: impl Into<String>, port: u16, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: Some(Value::from("Inbound")),
            access: Some(Value::from("Allow")),
            protocol: Some(Value::from("Tcp")),
            source_port_range: Some(Value::from("*")),
            destination_port_range: Some(Value::from(port.to_string())),
            source_address_prefix: Some(Value::String(source.into())),
            destination_address_prefix: Some(Value::from("0.0.0.0/0")),
            ..Default::default()
        }
    }
}

/// One resource of a built plan
///
/// Serializes as the plain document it wraps.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResourceConfig {
    Vpc(Document<VpcSpec>),
    InternetGateway(Document<InternetGatewaySpec>),
    RouteTable(Document<RouteTableSpec>),
    Subnet(Document<SubnetSpec>),
    SecurityGroup(Document<SecurityGroupSpec>),
    RouteTableAssociation(Document<RouteTableAssociationSpec>),
    AutoscalingGroup(Document<VirtualMachineSpec>),
    LaunchConfiguration(Document<LaunchConfigurationSpec>),
}

impl ResourceConfig {
    /// Resource kind of the wrapped document
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Vpc(_) => ResourceKind::Vpc,
            Self::InternetGateway(_) => ResourceKind::InternetGateway,
            Self::RouteTable(_) => ResourceKind::RouteTable,
            Self::Subnet(_) => ResourceKind::Subnet,
            Self::SecurityGroup(_) => ResourceKind::SecurityGroup,
            Self::RouteTableAssociation(_) => ResourceKind::RouteTableAssociation,
            Self::AutoscalingGroup(_) => ResourceKind::VirtualMachine,
            Self::LaunchConfiguration(_) => ResourceKind::LaunchConfiguration,
        }
    }

    /// Resource name from the specification
    pub fn resource_name(&self) -> &str {
        match self {
            Self::Vpc(doc) => &doc.specification.name,
            Self::InternetGateway(doc) => &doc.specification.name,
            Self::RouteTable(doc) => &doc.specification.name,
            Self::Subnet(doc) => &doc.specification.name,
            Self::SecurityGroup(doc) => &doc.specification.name,
            Self::RouteTableAssociation(doc) => &doc.specification.name,
            Self::AutoscalingGroup(doc) => &doc.specification.name,
            Self::LaunchConfiguration(doc) => &doc.specification.name,
        }
    }

    pub fn as_security_group(&self) -> Option<&Document<SecurityGroupSpec>> {
        match self {
            Self::SecurityGroup(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn as_autoscaling_group(&self) -> Option<&Document<VirtualMachineSpec>> {
        match self {
            Self::AutoscalingGroup(doc) => Some(doc),
            _ => None,
        }
    }
}
