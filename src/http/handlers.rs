//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the pure
//! service layer. Computation is synchronous and cheap (one scan of the
//! dataset), so nothing is offloaded to a blocking pool.

use axum::{
    extract::{Query, State},
    Json,
};

use super::dto::{
    HealthResponse, PayloadRangeResponse, PieQuery, ScatterQuery, SiteOptionsResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::services::{
    aggregate_outcomes, build_outcome_pie, build_payload_scatter, build_site_options,
    distinct_sites, filter_by_payload, ChartSpec, PayloadRange, SiteSelection,
};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Wire value assumed when the `site` query parameter is omitted.
const DEFAULT_SITE: &str = "ALL";

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint reporting the number of loaded records.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        records: state.dataset.len(),
    }))
}

// =============================================================================
// Catalog Endpoints
// =============================================================================

/// GET /v1/sites
///
/// Dropdown options: the "All Sites" sentinel followed by the distinct
/// launch sites in first-seen dataset order.
pub async fn list_sites(State(state): State<AppState>) -> HandlerResult<SiteOptionsResponse> {
    let sites = distinct_sites(&state.dataset);
    let options = build_site_options(&sites);
    let total = options.len();

    Ok(Json(SiteOptionsResponse { options, total }))
}

/// GET /v1/payload-range
///
/// Payload-mass bounds observed at load time, bounding the range slider.
pub async fn get_payload_range(
    State(state): State<AppState>,
) -> HandlerResult<PayloadRangeResponse> {
    Ok(Json(state.dataset.payload_bounds().into()))
}

// =============================================================================
// Chart Endpoints
// =============================================================================

/// GET /v1/charts/outcome-pie
///
/// Outcome proportion chart for the current site selection. An unknown site
/// yields an empty pie, not an error.
pub async fn get_outcome_pie(
    State(state): State<AppState>,
    Query(query): Query<PieQuery>,
) -> HandlerResult<ChartSpec> {
    let selection = SiteSelection::parse(query.site.as_deref().unwrap_or(DEFAULT_SITE));

    let counts = aggregate_outcomes(&state.dataset, &selection);
    Ok(Json(build_outcome_pie(counts, &selection)))
}

/// GET /v1/charts/payload-scatter
///
/// Payload-vs-outcome scatter for the current site selection and payload
/// range. Missing bounds default to the dataset bounds; out-of-bounds values
/// are clamped; an inverted range yields an empty chart.
pub async fn get_payload_scatter(
    State(state): State<AppState>,
    Query(query): Query<ScatterQuery>,
) -> HandlerResult<ChartSpec> {
    let selection = SiteSelection::parse(query.site.as_deref().unwrap_or(DEFAULT_SITE));

    let bounds = state.dataset.payload_bounds();
    let low = query.low.unwrap_or(bounds.min);
    let high = query.high.unwrap_or(bounds.max);
    if !low.is_finite() || !high.is_finite() {
        return Err(AppError::BadRequest(
            "payload bounds must be finite numbers".to_string(),
        ));
    }
    let range = PayloadRange::new(low, high).clamp_to(bounds);

    let records = filter_by_payload(&state.dataset, &range, &selection);
    Ok(Json(build_payload_scatter(&records)))
}
