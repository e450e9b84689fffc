pub mod config;
pub mod domain;
pub mod shutdown;
pub mod state;
pub mod utils;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        domain::hint::handler::ai_hint,
    ),
    components(
        schemas(
            domain::hint::dto::HintRequest,
            domain::hint::dto::HintResponse,
            utils::response::ErrorResponse,
        )
    ),
    tags(
        (name = "AI", description = "AI hint API for the physics sandbox")
    )
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// CORS is fully open on purpose: the game is a static page served from
/// anywhere and the endpoint carries no credentials.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/ai_hint", post(domain::hint::handler::ai_hint))
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
