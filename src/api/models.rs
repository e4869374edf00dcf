use crate::storage::{baked_good, bakery};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DatabaseConnection, DbErr};
use serde::{Deserialize, Serialize};
use tracing::error;

use super::json::PrettyJson;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

/// A bakery with the goods it sells
#[derive(Debug, Serialize)]
pub struct BakeryResponse {
    #[serde(flatten)]
    pub bakery: bakery::Model,
    pub baked_goods: Vec<baked_good::Model>,
}

/// A baked good with its owning bakery
#[derive(Debug, Serialize)]
pub struct BakedGoodResponse {
    #[serde(flatten)]
    pub baked_good: baked_good::Model,
    pub bakery: Option<bakery::Model>,
}

impl From<(bakery::Model, Vec<baked_good::Model>)> for BakeryResponse {
    fn from((bakery, baked_goods): (bakery::Model, Vec<baked_good::Model>)) -> Self {
        Self { bakery, baked_goods }
    }
}

impl From<(baked_good::Model, Option<bakery::Model>)> for BakedGoodResponse {
    fn from((baked_good, bakery): (baked_good::Model, Option<bakery::Model>)) -> Self {
        Self { baked_good, bakery }
    }
}

/// Form body for creating a baked good
#[derive(Debug, Deserialize)]
pub struct CreateBakedGoodForm {
    pub name: String,
    pub price: i32,
    pub bakery_id: i32,
}

/// Form body for updating a bakery. Only the fields listed here may change.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateBakeryForm {
    pub name: Option<String>,
}

/// Response after deleting a baked good
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub delete_successful: bool,
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub bakeries: u64,
    pub baked_goods: u64,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl CreateBakedGoodForm {
    /// Validate the request
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name cannot be empty".to_string());
        }
        if self.price < 0 {
            return Err("Price cannot be negative".to_string());
        }
        Ok(())
    }
}

impl UpdateBakeryForm {
    /// Validate the request
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err("Name cannot be empty".to_string());
            }
        }
        Ok(())
    }
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::Database(err) => {
                error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = PrettyJson(ErrorResponse {
            error: status.to_string(),
            message,
        });

        (status, body).into_response()
    }
}
