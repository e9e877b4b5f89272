use async_trait::async_trait;

use crate::InventoryError;
use kubeview_types::{NodeSummary, PodSummary};

/// Read-only view of the cluster inventory.
///
/// Each call performs one fresh listing; implementations must not cache.
/// Results keep the order the source returned them in.
#[async_trait]
pub trait ClusterInventory: Send + Sync {
    /// List every node in the cluster
    async fn list_nodes(&self) -> Result<Vec<NodeSummary>, InventoryError>;

    /// List every pod across all namespaces
    async fn list_pods(&self) -> Result<Vec<PodSummary>, InventoryError>;
}
