//! Shared types for kubeview
//!
//! This crate contains the public shapes served over HTTP. They are built
//! fresh for every request and never stored.

use serde::{Deserialize, Serialize};

// ============================================================================
// Kubernetes Resource Summaries
// ============================================================================

/// Node as exposed by `GET /nodes`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSummary {
    pub name: String,
}

impl NodeSummary {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

/// Pod as exposed by `GET /pods`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodSummary {
    pub name: String,
    pub namespace: String,
}

impl PodSummary {
    pub fn new(name: String, namespace: String) -> Self {
        Self { name, namespace }
    }
}
