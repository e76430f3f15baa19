//! API handlers for the compliance server
//!
//! Provides REST endpoints for:
//! - Jurisdiction listing and rule lookup
//! - Will validation, recommendations, and full reports
//! - Cross-jurisdiction comparison
//! - Legal update notices
//! - Jurisdiction name resolution

use axum::{
    extract::{Path, Query, State},
    Json,
};
use estate_compliance::{
    normalize_jurisdiction, ComplianceReport, JurisdictionComparison, JurisdictionRecord,
    JurisdictionSummary, LegalUpdate, ValidationResult, WillData,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ServerError;
use crate::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub jurisdictions: usize,
}

/// Handler: GET /health
pub async fn handle_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "estate-compliance-server",
        version: env!("CARGO_PKG_VERSION"),
        jurisdictions: state.service.knowledge_base().len(),
    })
}

/// Jurisdiction list response
#[derive(Serialize)]
pub struct StateListResponse {
    pub success: bool,
    pub states: Vec<JurisdictionSummary>,
    pub count: usize,
}

/// Handler: GET /api/compliance/states
pub async fn handle_list_states(State(state): State<AppState>) -> Json<StateListResponse> {
    let states = state.service.list_all_jurisdictions();
    let count = states.len();

    Json(StateListResponse {
        success: true,
        states,
        count,
    })
}

/// Handler: GET /api/compliance/state/:code
pub async fn handle_get_state(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<JurisdictionRecord>, ServerError> {
    let record = state.service.get_jurisdiction_rules(&code)?;
    Ok(Json(record.clone()))
}

/// Legal updates response
#[derive(Serialize)]
pub struct LegalUpdatesResponse {
    pub success: bool,
    pub state_code: String,
    pub updates: Vec<LegalUpdate>,
}

/// Handler: GET /api/compliance/state/:code/updates
pub async fn handle_get_updates(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<LegalUpdatesResponse>, ServerError> {
    let record = state.service.get_jurisdiction_rules(&code)?;
    let updates = state.service.get_legal_updates(&code)?;

    Ok(Json(LegalUpdatesResponse {
        success: true,
        state_code: record.code.to_string(),
        updates,
    }))
}

/// Will data plus the jurisdiction to check it against
#[derive(Debug, Deserialize)]
pub struct WillRequest {
    #[serde(default)]
    pub will_data: WillData,
    pub state_code: String,
}

/// Handler: POST /api/compliance/validate
pub async fn handle_validate(
    State(state): State<AppState>,
    Json(req): Json<WillRequest>,
) -> Result<Json<ValidationResult>, ServerError> {
    info!("Will validation: state={}", req.state_code);

    let result = state.service.validate_will(&req.will_data, &req.state_code)?;
    debug!(
        "Validation for {}: valid={}, errors={:?}",
        result.jurisdiction_code, result.is_valid, result.errors
    );

    Ok(Json(result))
}

/// Recommendations response
#[derive(Serialize)]
pub struct RecommendationsResponse {
    pub success: bool,
    pub state_code: String,
    pub recommendations: Vec<String>,
}

/// Handler: POST /api/compliance/recommendations
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(req): Json<WillRequest>,
) -> Result<Json<RecommendationsResponse>, ServerError> {
    let record = state.service.get_jurisdiction_rules(&req.state_code)?;
    let recommendations = state
        .service
        .get_recommendations(&req.state_code, &req.will_data)?;

    Ok(Json(RecommendationsResponse {
        success: true,
        state_code: record.code.to_string(),
        recommendations,
    }))
}

/// Comparison request
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub state_codes: Vec<String>,
}

/// Handler: POST /api/compliance/compare
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(req): Json<CompareRequest>,
) -> Result<Json<JurisdictionComparison>, ServerError> {
    if req.state_codes.is_empty() {
        return Err(ServerError::InvalidRequest(
            "state_codes must name at least one jurisdiction".to_string(),
        ));
    }

    info!("Comparing jurisdictions: {}", req.state_codes.join(", "));
    let comparison = state.service.compare_jurisdictions(req.state_codes.as_slice())?;

    Ok(Json(comparison))
}

/// Handler: POST /api/compliance/report
pub async fn handle_report(
    State(state): State<AppState>,
    Json(req): Json<WillRequest>,
) -> Result<Json<ComplianceReport>, ServerError> {
    info!("Compliance report: state={}", req.state_code);

    let report = state
        .service
        .generate_compliance_report(&req.will_data, &req.state_code)?;

    Ok(Json(report))
}

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub jurisdiction: String,
}

/// Resolved jurisdiction name
#[derive(Serialize)]
pub struct ResolveResponse {
    pub success: bool,
    pub jurisdiction: String,
    pub state_code: String,
    pub name: String,
}

/// Handler: GET /api/compliance/resolve?jurisdiction=California,%20USA
pub async fn handle_resolve(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> Result<Json<ResolveResponse>, ServerError> {
    let resolved = normalize_jurisdiction(&query.jurisdiction)
        .ok_or_else(|| ServerError::JurisdictionUnresolved(query.jurisdiction.clone()))?;

    // A state missing from a custom table is as unknown as a foreign one
    let record = state
        .service
        .knowledge_base()
        .get(resolved)
        .ok_or_else(|| ServerError::JurisdictionUnresolved(query.jurisdiction.clone()))?;

    Ok(Json(ResolveResponse {
        success: true,
        jurisdiction: query.jurisdiction,
        state_code: record.code.to_string(),
        name: record.full_name.clone(),
    }))
}
