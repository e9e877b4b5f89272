use thiserror::Error;

/// Failure of a list call against the API server
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Error from kube-rs client, shown verbatim
    #[error("{0}")]
    Kube(#[from] kube::Error),
}
