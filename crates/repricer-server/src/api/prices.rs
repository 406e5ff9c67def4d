use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use repricer_core::RateParameters;
use repricer_sync::{run_sync, JobOutcome};

use super::{ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

/// Rates for one sync. The older storefront field names are accepted too.
#[derive(Debug, Deserialize)]
pub(super) struct UpdatePricesRequest {
    #[serde(alias = "gold_rate")]
    material_rate: Decimal,
    #[serde(alias = "labour_rate")]
    labor_rate: Decimal,
    #[serde(alias = "gst_rate")]
    tax_rate: Decimal,
}

impl From<UpdatePricesRequest> for RateParameters {
    fn from(req: UpdatePricesRequest) -> Self {
        RateParameters::new(req.material_rate, req.labor_rate, req.tax_rate)
    }
}

/// Runs one full catalog sync and answers once it has finished.
///
/// The job runs on its own task, so a client that hangs up does not stop it
/// partway through the catalog.
pub(super) async fn update_prices(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<UpdatePricesRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<JobOutcome>>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(request_id = %req_id.0, error = %rejection, "rejected sync request body");
        ApiError::new(req_id.0.clone(), "bad_request", rejection.body_text())
    })?;

    tracing::info!(request_id = %req_id.0, "price sync requested");
    let rates: RateParameters = request.into();
    let store = Arc::clone(&state.store);
    let job = tokio::spawn(async move { run_sync(store.as_ref(), rates).await });

    let outcome = job.await.map_err(|e| {
        tracing::error!(request_id = %req_id.0, error = %e, "sync task failed");
        ApiError::new(req_id.0.clone(), "internal_error", "sync task failed")
    })?;

    match outcome {
        JobOutcome::Aborted { cause } => Err(ApiError::new(req_id.0, "sync_aborted", cause)),
        done @ JobOutcome::Done => Ok(Json(ApiResponse {
            data: done,
            meta: ResponseMeta::new(req_id.0),
        })),
    }
}
