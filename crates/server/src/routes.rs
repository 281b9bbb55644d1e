use axum::{
    routing::{get, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::users::UserService;

use crate::openapi::ApiDoc;

pub mod users;

/// Shared state handed to every handler.
#[derive(Clone, Default)]
pub struct ServerState {
    pub users: UserService,
}

impl ServerState {
    pub fn new(users: UserService) -> Self {
        Self { users }
    }
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, user CRUD, OpenAPI document and docs UI.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let user_routes = Router::new()
        .route("/user/:user_id", get(users::get_user))
        .route("/user", put(users::create_user).delete(users::delete_user));

    Router::new()
        .route("/health", get(health))
        .merge(user_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

/// Router over a fresh in-memory store with permissive CORS.
pub fn app() -> Router {
    build_router(ServerState::default(), CorsLayer::very_permissive())
}
