// Copyright (c) 2025 - Cowboy AI, Inc.
//! Plan summary

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::ResourceKind;
use crate::model::ResourceConfig;

/// Number of resources per kind in a plan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanSummary {
    counts: BTreeMap<ResourceKind, usize>,
}

impl PlanSummary {
    pub fn of(plan: &[ResourceConfig]) -> Self {
        let mut counts = BTreeMap::new();
        for resource in plan {
            *counts.entry(resource.kind()).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn count(&self, kind: ResourceKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .counts
            .iter()
            .map(|(kind, count)| format!("{}: {}", kind.display_name(), count))
            .collect();
        write!(f, "{} resources ({})", self.total(), parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Document, SubnetSpec};

    fn subnet() -> ResourceConfig {
        ResourceConfig::Subnet(Document {
            kind: ResourceKind::Subnet.as_str().to_string(),
            title: None,
            provider: None,
            name: None,
            specification: SubnetSpec::default(),
        })
    }

    #[test]
    fn test_counts_per_kind() {
        let summary = PlanSummary::of(&[subnet(), subnet()]);
        assert_eq!(summary.count(ResourceKind::Subnet), 2);
        assert_eq!(summary.count(ResourceKind::Vpc), 0);
        assert_eq!(summary.total(), 2);
        assert_eq!(summary.to_string(), "2 resources (Subnet: 2)");
    }

    #[test]
    fn test_empty_plan() {
        let summary = PlanSummary::of(&[]);
        assert_eq!(summary.total(), 0);
        assert_eq!(summary.to_string(), "0 resources ()");
    }
}
