// Copyright (c) 2025 - Cowboy AI, Inc.
//! Deterministic Resource Naming
//!
//! Resource names are pure functions of the cluster name, the resource kind
//! and either a zero-based subnet bucket index or a component key. Building
//! the same cluster twice therefore yields byte-identical names, which lets
//! the provisioning step treat a re-generated plan as an update.
//!
//! The cluster name is lower-cased once, up front. Component keys are used
//! verbatim and are appended to the cluster name with no separator, so
//! `demo` + `web` gives `aws-asg-demoweb`.

/// Name generator for one cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceNames {
    cluster: String,
}

impl ResourceNames {
    /// Create a generator for the given cluster name
    pub fn new(cluster_name: impl AsRef<str>) -> Self {
        Self {
            cluster: cluster_name.as_ref().to_lowercase(),
        }
    }

    /// The lower-cased cluster name
    pub fn cluster(&self) -> &str {
        &self.cluster
    }

    pub fn vpc(&self) -> String {
        format!("{}vpc", self.cluster)
    }

    pub fn internet_gateway(&self) -> String {
        format!("aws-internet-gateway-{}", self.cluster)
    }

    pub fn route_table(&self) -> String {
        format!("aws-route-table-{}", self.cluster)
    }

    pub fn subnet(&self, index: usize) -> String {
        format!("aws-subnet-{}-{}", self.cluster, index)
    }

    pub fn security_group(&self, index: usize) -> String {
        format!("aws-security-group-{}-{}", self.cluster, index)
    }

    pub fn route_association(&self, index: usize) -> String {
        format!("aws-route-association-{}-{}", self.cluster, index)
    }

    pub fn autoscaling_group(&self, component_key: &str) -> String {
        format!("aws-asg-{}{}", self.cluster, component_key)
    }

    pub fn launch_configuration(&self, component_key: &str) -> String {
        format!("aws-launch-config-{}{}", self.cluster, component_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_name_is_lowercased() {
        let names = ResourceNames::new("Demo");
        assert_eq!(names.cluster(), "demo");
        assert_eq!(names.vpc(), "demovpc");
        assert_eq!(names.internet_gateway(), "aws-internet-gateway-demo");
        assert_eq!(names.route_table(), "aws-route-table-demo");
    }

    #[test]
    fn test_bucket_names_carry_index() {
        let names = ResourceNames::new("prod");
        assert_eq!(names.subnet(0), "aws-subnet-prod-0");
        assert_eq!(names.security_group(3), "aws-security-group-prod-3");
        assert_eq!(names.route_association(1), "aws-route-association-prod-1");
    }

    #[test]
    fn test_component_names_have_no_separator() {
        let names = ResourceNames::new("Demo");
        assert_eq!(names.autoscaling_group("web"), "aws-asg-demoweb");
        assert_eq!(names.launch_configuration("web"), "aws-launch-config-demoweb");
        // keys are not lower-cased
        assert_eq!(names.autoscaling_group("Api"), "aws-asg-demoApi");
    }
}
