use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Request failures, rendered as plain-text responses.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("failed to read request body")]
    ReadBody,
    #[error("failed to parse request JSON")]
    InvalidJson,
    #[error("invalid BRL value")]
    InvalidAmount,
    #[error("{0:#}")]
    Upstream(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::ReadBody | ApiError::InvalidJson | ApiError::InvalidAmount => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Context, anyhow};

    #[test]
    fn test_upstream_error_renders_cause_chain() {
        let err: anyhow::Result<()> =
            Err(anyhow!("connection refused")).context("Failed to fetch quotes");
        let api_error = ApiError::Upstream(err.unwrap_err());

        assert_eq!(api_error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            api_error.to_string(),
            "Failed to fetch quotes: connection refused"
        );
    }

    #[test]
    fn test_client_error_statuses() {
        assert_eq!(
            ApiError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(ApiError::ReadBody.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidJson.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidAmount.status(), StatusCode::BAD_REQUEST);
    }
}
