//! Kubernetes client for kubeview

use anyhow::{Context, Result};
use async_trait::async_trait;
use k8s_openapi::api::core::v1::{Node, Pod};
use kube::Api;
use kube::api::ListParams;

use crate::{ClusterInventory, InventoryError};
use kubeview_types::{NodeSummary, PodSummary};

/// Kubernetes client wrapper
#[derive(Clone)]
pub struct KubeClient {
    client: kube::Client,
}

impl KubeClient {
    /// Create a new KubeClient from the ambient configuration.
    ///
    /// Looks at `KUBECONFIG` / `~/.kube/config` first and falls back to the
    /// in-cluster service account. No request is sent to the API server here.
    pub async fn new() -> Result<Self> {
        let config = kube::Config::infer()
            .await
            .context("Failed to resolve cluster configuration. Is kubectl configured?")?;

        tracing::info!(
            cluster_url = %config.cluster_url,
            default_namespace = %config.default_namespace,
            "Resolved cluster configuration"
        );

        let client =
            kube::Client::try_from(config).context("Failed to create Kubernetes client")?;

        Ok(Self::from_client(client))
    }

    /// Wrap an already constructed kube::Client
    pub fn from_client(client: kube::Client) -> Self {
        Self { client }
    }

    /// Convert a k8s Node to NodeSummary
    fn node_to_summary(node: Node) -> NodeSummary {
        NodeSummary::new(node.metadata.name.unwrap_or_default())
    }

    /// Convert a k8s Pod to PodSummary
    fn pod_to_summary(pod: Pod) -> PodSummary {
        PodSummary::new(
            pod.metadata.name.unwrap_or_default(),
            pod.metadata.namespace.unwrap_or_default(),
        )
    }
}

#[async_trait]
impl ClusterInventory for KubeClient {
    async fn list_nodes(&self) -> Result<Vec<NodeSummary>, InventoryError> {
        let nodes: Api<Node> = Api::all(self.client.clone());
        let list = nodes.list(&ListParams::default()).await?;

        tracing::debug!(count = list.items.len(), "Listed nodes");

        Ok(list.items.into_iter().map(Self::node_to_summary).collect())
    }

    async fn list_pods(&self) -> Result<Vec<PodSummary>, InventoryError> {
        // Api::all leaves the namespace unscoped
        let pods: Api<Pod> = Api::all(self.client.clone());
        let list = pods.list(&ListParams::default()).await?;

        tracing::debug!(count = list.items.len(), "Listed pods");

        Ok(list.items.into_iter().map(Self::pod_to_summary).collect())
    }
}
