use super::AppState;
use super::error::ApiError;
use crate::core::convert::{Conversion, parse_brl};
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::{Method, header};
use axum::response::{IntoResponse, Response};
use std::collections::HashMap;
use tracing::{debug, error, instrument};

#[instrument(name = "ConvertRequest", skip_all)]
pub async fn convert(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    let body = body.map_err(|e| {
        debug!(error = %e, "Failed to read request body");
        ApiError::ReadBody
    })?;

    // Values must be strings; `null` reads as an empty string.
    let request: HashMap<String, Option<String>> =
        serde_json::from_slice(&body).map_err(|e| {
            debug!(error = %e, "Failed to parse request JSON");
            ApiError::InvalidJson
        })?;

    let real = request
        .get("real")
        .and_then(|raw| raw.as_deref())
        .and_then(parse_brl)
        .ok_or_else(|| {
            debug!(real = ?request.get("real"), "Invalid BRL value");
            ApiError::InvalidAmount
        })?;

    let rates = state.rates.get_rates().await.map_err(|e| {
        error!(error = %format!("{e:#}"), "Failed to obtain exchange rates");
        ApiError::Upstream(e)
    })?;

    let conversion = Conversion::from_brl(real, &rates).ok_or_else(|| {
        debug!(real, ?rates, "Converted amount is not finite");
        ApiError::InvalidAmount
    })?;
    debug!(real, ?rates, ?conversion, "Converted amount");

    let mut response = Json(conversion).into_response();
    if let Some(max_age) = state.cache_max_age {
        let cache_control = [(
            header::CACHE_CONTROL,
            format!("public, max-age={}", max_age.as_secs()),
        )];
        response = (cache_control, response).into_response();
    }
    Ok(response)
}

pub async fn method_not_allowed(method: Method) -> ApiError {
    debug!(%method, "Rejected request method");
    ApiError::MethodNotAllowed
}
