use crate::api::json::PrettyJson;
use crate::api::models::*;
use crate::storage::{BakeryChanges, Mutation, Query};
use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Path, State,
    },
    Form,
};
use tracing::info;

pub async fn list_bakeries_handler(
    State(state): State<AppState>,
) -> Result<PrettyJson<Vec<BakeryResponse>>, AppError> {
    let bakeries = Query::list_bakeries(&state.db).await?;

    Ok(PrettyJson(bakeries.into_iter().map(BakeryResponse::from).collect()))
}

pub async fn get_bakery_handler(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<PrettyJson<BakeryResponse>, AppError> {
    let Path(id) = path.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let bakery = Query::find_bakery(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Bakery not found.".to_string()))?;

    Ok(PrettyJson(bakery.into()))
}

pub async fn update_bakery_handler(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    form: Result<Form<UpdateBakeryForm>, FormRejection>,
) -> Result<PrettyJson<BakeryResponse>, AppError> {
    let Path(id) = path.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let Form(request) = form.map_err(|e| AppError::BadRequest(e.body_text()))?;

    // Validate
    request.validate().map_err(AppError::BadRequest)?;

    let changes = BakeryChanges { name: request.name };

    Mutation::update_bakery(&state.db, id, changes)
        .await?
        .ok_or_else(|| AppError::NotFound("Bakery not found.".to_string()))?;

    info!(bakery_id = id, "Bakery updated");

    let bakery = Query::find_bakery(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Bakery not found.".to_string()))?;

    Ok(PrettyJson(bakery.into()))
}
