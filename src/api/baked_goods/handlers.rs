use crate::api::json::PrettyJson;
use crate::api::models::*;
use crate::storage::{Mutation, NewBakedGood, Query};
use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Form,
};
use tracing::info;

pub async fn by_price_handler(
    State(state): State<AppState>,
) -> Result<PrettyJson<Vec<BakedGoodResponse>>, AppError> {
    let baked_goods = Query::baked_goods_by_price(&state.db).await?;

    Ok(PrettyJson(
        baked_goods.into_iter().map(BakedGoodResponse::from).collect(),
    ))
}

pub async fn most_expensive_handler(
    State(state): State<AppState>,
) -> Result<PrettyJson<BakedGoodResponse>, AppError> {
    let baked_good = Query::most_expensive_baked_good(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("No baked goods found.".to_string()))?;

    Ok(PrettyJson(baked_good.into()))
}

pub async fn create_baked_good_handler(
    State(state): State<AppState>,
    form: Result<Form<CreateBakedGoodForm>, FormRejection>,
) -> Result<(StatusCode, PrettyJson<BakedGoodResponse>), AppError> {
    let Form(request) = form.map_err(|e| AppError::BadRequest(e.body_text()))?;

    // Validate
    request.validate().map_err(AppError::BadRequest)?;

    let new = NewBakedGood {
        name: request.name,
        price: request.price,
        bakery_id: request.bakery_id,
    };

    let (baked_good, bakery) = Mutation::create_baked_good(&state.db, new)
        .await?
        .ok_or_else(|| AppError::NotFound("Bakery not found.".to_string()))?;

    info!(
        baked_good_id = baked_good.id,
        bakery_id = bakery.id,
        price = baked_good.price,
        "Baked good created"
    );

    Ok((
        StatusCode::CREATED,
        PrettyJson(BakedGoodResponse {
            baked_good,
            bakery: Some(bakery),
        }),
    ))
}

pub async fn delete_baked_good_handler(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<PrettyJson<DeleteResponse>, AppError> {
    let Path(id) = path.map_err(|e| AppError::BadRequest(e.body_text()))?;

    if !Mutation::delete_baked_good(&state.db, id).await? {
        return Err(AppError::NotFound("Baked good not found.".to_string()));
    }

    info!(baked_good_id = id, "Baked good deleted");

    Ok(PrettyJson(DeleteResponse {
        delete_successful: true,
        message: format!("Baked good with id {} deleted.", id),
    }))
}
