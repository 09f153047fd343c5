//! HTTP surface of the menu service.

pub mod error;
pub mod extract;
pub mod handlers;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::clients::MenuClient;

pub use error::ApiError;
pub use extract::MenuJson;
pub use handlers::*;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub menu_client: MenuClient,
}

impl AppState {
    pub fn new(menu_client: MenuClient) -> Self {
        Self { menu_client }
    }
}

/// Builds the application router with request tracing and permissive CORS
/// (the browser frontend is served from a different origin).
///
/// Request spans and responses are logged at INFO so they show under the
/// default `tower_http=info` filter.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/entities", get(list_menu_items).post(create_menu_item))
        .route(
            "/api/entities/{id}",
            get(get_menu_item)
                .put(update_menu_item)
                .delete(delete_menu_item),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
