use crate::core::Scorer;
use crate::models::{ErrorResponse, HealthResponse, ScoreProfilesRequest, ScoreProfilesResponse};
use crate::services::RelayClient;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub scorer: Scorer,
    pub relay: Arc<RelayClient>,
}

/// Configure scoring routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/score", web::post().to(score_profiles));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score and rank candidate profiles
///
/// POST /api/v1/score
///
/// Request body:
/// ```json
/// {
///   "criteria": "Rust, distributed systems",
///   "profiles": [{ "name": "...", "title": "...", ... }],
///   "limit": 20
/// }
/// ```
async fn score_profiles(
    state: web::Data<AppState>,
    req: web::Json<ScoreProfilesRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for score request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    // Cap limit at 100 to bound response size
    let limit = req.limit.min(100) as usize;

    tracing::info!(
        "Scoring {} profiles against criteria: {:?} (limit: {})",
        req.profiles.len(),
        req.criteria,
        limit
    );

    let result = state.scorer.score_and_rank(&req.criteria, req.profiles, limit);

    tracing::info!(
        "Returning {} scored profiles (from {} candidates)",
        result.results.len(),
        result.total_candidates
    );

    HttpResponse::Ok().json(ScoreProfilesResponse {
        results: result.results,
        total_candidates: result.total_candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
