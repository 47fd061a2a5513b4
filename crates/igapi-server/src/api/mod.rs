mod posts;
mod profile;

use axum::{
    http::{HeaderValue, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use igapi_instagram::{ProfileSource, SourceError};

/// Development origins the frontend is served from.
const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Shared request state: the one long-lived source client, injected so
/// tests can swap in a mock source.
#[derive(Clone)]
pub struct AppState<S: ProfileSource> {
    pub source: S,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: &'static str,
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub status: &'static str,
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    service: &'static str,
}

impl ApiError {
    fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status: "error",
            error: ErrorBody {
                code,
                message: message.into(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code {
            "not_found" => StatusCode::NOT_FOUND,
            "unavailable" => StatusCode::SERVICE_UNAVAILABLE,
            "login_required" => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Centralized mapping from source failures to transport errors, shared by
/// both data endpoints so the four-way classification cannot drift.
///
/// Connection details are logged server-side only; the caller gets a
/// generic retry-later message instead of internal diagnostics.
pub(super) fn map_source_error(error: SourceError) -> ApiError {
    match error {
        SourceError::NotFound { username } => {
            ApiError::new("not_found", format!("profile '{username}' not found"))
        }
        SourceError::Connection { reason } => {
            tracing::error!(error = %reason, "connection to instagram failed");
            ApiError::new(
                "unavailable",
                "failed to connect to Instagram, please try again",
            )
        }
        SourceError::LoginRequired { username } => ApiError::new(
            "login_required",
            format!("profile '{username}' requires login to access"),
        ),
        SourceError::Other(message) => {
            tracing::error!(error = %message, "source request failed");
            ApiError::new("internal_error", message)
        }
    }
}

fn build_cors() -> CorsLayer {
    // Credentials are allowed, so wildcards are off the table; origins are
    // enumerated and methods/headers are mirrored from the request.
    let origins = ALLOWED_ORIGINS.map(HeaderValue::from_static);
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn build_app<S: ProfileSource>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/profile/{username}", get(profile::get_profile::<S>))
        .route("/posts/{username}", get(posts::get_posts::<S>))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors()),
        )
        .with_state(state)
}

/// Fixed payload, no outbound call: reports that the service itself is up,
/// not that Instagram is reachable.
async fn health() -> impl IntoResponse {
    Json(HealthData {
        status: "healthy",
        service: "instagram-api",
    })
}
