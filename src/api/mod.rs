pub mod baked_goods;
pub mod bakeries;
pub mod json;
pub mod models;

// Re-exports
pub use json::PrettyJson;
pub use models::*;

use crate::storage::Query;
use axum::{extract::State, response::Html, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the full application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .merge(bakeries::routes())
        .merge(baked_goods::routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

pub async fn home_handler() -> Html<&'static str> {
    Html("<h1>Bakery GET-POST-PATCH-DELETE API</h1>")
}

pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<PrettyJson<HealthResponse>, AppError> {
    let bakeries = Query::count_bakeries(&state.db).await?;
    let baked_goods = Query::count_baked_goods(&state.db).await?;

    Ok(PrettyJson(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        bakeries,
        baked_goods,
    }))
}
