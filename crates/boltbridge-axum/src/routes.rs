//! Route definitions and router construction.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, header};
use axum::middleware;
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::auth::{API_KEY_HEADER, require_api_key};
use crate::bootstrap::{AxumContext, CorsConfig};
use crate::error::{HttpError, panic_response};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
///
/// An origin that is not a valid header value is dropped with a warning,
/// leaving no origin allowed.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([API_KEY_HEADER, header::CONTENT_TYPE, header::ACCEPT]);

    let allowed: Vec<HeaderValue> = match config.allowed_origin.parse() {
        Ok(value) => vec![value],
        Err(_) => {
            warn!(origin = %config.allowed_origin, "Ignoring invalid CORS origin");
            Vec::new()
        }
    };
    layer.allow_origin(allowed)
}

async fn method_not_allowed() -> HttpError {
    HttpError::MethodNotAllowed
}

/// Build the API routes without the `/api` prefix.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/chat", post(handlers::chat::chat))
        .route("/chat/models", get(handlers::catalog::models))
        .route("/chat/api/tags", get(handlers::catalog::tags))
}

/// Wrap `routes` in the `/api` stack and nest them under `/api`.
///
/// Layer order, innermost first: key guard, panic boundary, CORS. Panic
/// responses therefore still carry the CORS headers. The request body is
/// not size-capped.
fn nest_api(routes: Router<AppState>, state: AppState, cors_config: &CorsConfig) -> Router {
    let auth = middleware::from_fn_with_state(state.clone(), require_api_key);

    Router::new().nest(
        "/api",
        routes
            .method_not_allowed_fallback(method_not_allowed)
            .route_layer(auth)
            .layer(DefaultBodyLimit::disable())
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(build_cors_layer(cors_config))
            .with_state(state),
    )
}

/// Create the main Axum router.
///
/// The key guard runs on every matched `/api` route. CORS wraps the guard so
/// browser preflights are answered without a key.
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = std::sync::Arc::new(ctx);

    nest_api(api_routes(), state, cors_config).layer(TraceLayer::new_for_http())
}
