use super::entities::prelude::*;
use super::entities::{baked_good, bakery};
use chrono::Utc;
use sea_orm::*;

/// Fields required to insert a baked good.
#[derive(Debug, Clone)]
pub struct NewBakedGood {
    pub name: String,
    pub price: i32,
    pub bakery_id: i32,
}

/// The updatable subset of a bakery. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct BakeryChanges {
    pub name: Option<String>,
}

impl BakeryChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

pub struct Mutation;

impl Mutation {
    /// Insert a baked good. Returns `None` when `bakery_id` names no bakery.
    pub async fn create_baked_good(
        db: &DbConn,
        new: NewBakedGood,
    ) -> Result<Option<(baked_good::Model, bakery::Model)>, DbErr> {
        let Some(bakery) = Bakery::find_by_id(new.bakery_id).one(db).await? else {
            return Ok(None);
        };

        let now = Utc::now();
        let baked_good = baked_good::ActiveModel {
            name: Set(new.name),
            price: Set(new.price),
            bakery_id: Set(bakery.id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;

        Ok(Some((baked_good, bakery)))
    }

    /// Apply `changes` to bakery `id`. Returns `None` when it does not exist.
    pub async fn update_bakery(
        db: &DbConn,
        id: i32,
        changes: BakeryChanges,
    ) -> Result<Option<bakery::Model>, DbErr> {
        let Some(bakery) = Bakery::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        if changes.is_empty() {
            return Ok(Some(bakery));
        }

        let mut active: bakery::ActiveModel = bakery.into();
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        active.updated_at = Set(Utc::now());

        active.update(db).await.map(Some)
    }

    /// Delete baked good `id`, reporting whether a row was removed.
    pub async fn delete_baked_good(db: &DbConn, id: i32) -> Result<bool, DbErr> {
        let result = BakedGood::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }
}
