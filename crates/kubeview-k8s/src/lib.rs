//! Kubernetes client for kubeview
//!
//! This crate resolves the ambient cluster configuration once and lists
//! nodes and pods on demand, projecting them into the public summaries.

mod client;
mod error;
mod inventory;

pub use client::KubeClient;
pub use error::InventoryError;
pub use inventory::ClusterInventory;

// Re-export types that are used in our public API
pub use kubeview_types::{NodeSummary, PodSummary};
