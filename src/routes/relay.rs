use crate::models::{ErrorResponse, RelayRequest};
use crate::routes::leads::AppState;
use crate::services::CORS_HEADERS;
use actix_web::http::{Method, StatusCode};
use actix_web::{web, HttpRequest, HttpResponse, HttpResponseBuilder, Responder};
use validator::Validate;

/// Configure relay routes
///
/// Mounted at the root rather than under /api/v1 so browser preflights reach
/// the relay without a version prefix.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/relay")
            .route(web::post().to(forward))
            .route(web::route().to(preflight)),
    );
}

/// Attach the fixed cross-origin header set to a response under construction
fn with_cors_headers(mut builder: HttpResponseBuilder) -> HttpResponseBuilder {
    for (name, value) in CORS_HEADERS {
        builder.insert_header((name, value));
    }
    builder
}

/// Preflight short-circuit: 200 with permissive headers, no upstream call
pub async fn preflight() -> impl Responder {
    with_cors_headers(HttpResponse::Ok()).finish()
}

/// Fallback for unmatched paths
///
/// Browsers may preflight any path they intend to call, so OPTIONS always
/// succeeds; anything else is a structured 404.
pub async fn fallback(req: HttpRequest) -> impl Responder {
    if req.method() == Method::OPTIONS {
        return with_cors_headers(HttpResponse::Ok()).finish();
    }

    HttpResponse::NotFound().json(ErrorResponse {
        error: "Not found".to_string(),
        message: format!("No route for {} {}", req.method(), req.path()),
        status_code: 404,
    })
}

/// Forward a described request upstream
///
/// POST /relay
///
/// Request body:
/// ```json
/// {
///   "url": "https://api.example.com/search",
///   "method": "POST",
///   "headers": { "Authorization": "Bearer ..." },
///   "body": { ... }
/// }
/// ```
///
/// On success the response carries the upstream status and decoded body; any
/// relay failure surfaces as a structured 500 envelope. Every response,
/// success or failure, carries the permissive cross-origin header set.
async fn forward(state: web::Data<AppState>, req: web::Json<RelayRequest>) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for relay request: field_errors={:?}", errors);
        return with_cors_headers(HttpResponse::BadRequest()).json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.relay.forward(&req).await {
        Ok(upstream) => {
            let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::OK);
            with_cors_headers(HttpResponse::build(status))
                .content_type("application/json")
                .json(upstream.body)
        }
        Err(e) => {
            tracing::error!("Relay request to {} failed: {}", req.url, e);
            with_cors_headers(HttpResponse::InternalServerError()).json(ErrorResponse {
                error: "Relay request failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
