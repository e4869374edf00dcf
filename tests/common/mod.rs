#![allow(dead_code)]

use bakery_api::storage::{self, baked_good, bakery};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

pub async fn setup_db() -> DatabaseConnection {
    let db = storage::connect("sqlite::memory:").await.unwrap();
    storage::migrate(&db).await.unwrap();
    db
}

pub async fn insert_bakery(db: &DatabaseConnection, name: &str) -> bakery::Model {
    let now = Utc::now();
    bakery::ActiveModel {
        name: Set(name.to_owned()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn insert_baked_good(
    db: &DatabaseConnection,
    bakery_id: i32,
    name: &str,
    price: i32,
) -> baked_good::Model {
    let now = Utc::now();
    baked_good::ActiveModel {
        name: Set(name.to_owned()),
        price: Set(price),
        bakery_id: Set(bakery_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}
