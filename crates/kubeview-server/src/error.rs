use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use kubeview_k8s::InventoryError;

/// Error returned by the listing handlers
#[derive(Debug)]
pub struct ApiError(InventoryError);

impl From<InventoryError> for ApiError {
    fn from(err: InventoryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self.0, "Cluster listing failed");
        // Plain text body carrying the raw error description
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}
