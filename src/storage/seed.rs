use super::entities::prelude::*;
use super::entities::{baked_good, bakery};
use chrono::Utc;
use sea_orm::*;
use tracing::info;

const BAKERIES: &[&str] = &["Delightful donuts", "Incredible crullers", "Crusty loaves"];

const BAKED_GOODS: &[(&str, i32, usize)] = &[
    ("Chocolate dipped donut", 4, 0),
    ("Apple-spice filled donut", 5, 0),
    ("Glazed honey cruller", 6, 1),
    ("Chocolate cruller", 7, 1),
    ("Sourdough boule", 9, 2),
    ("Rye loaf", 8, 2),
];

/// Replace every row with a small fixed dataset.
pub async fn seed(db: &DbConn) -> Result<(), DbErr> {
    let txn = db.begin().await?;

    BakedGood::delete_many().exec(&txn).await?;
    Bakery::delete_many().exec(&txn).await?;

    let now = Utc::now();
    let mut bakery_ids = Vec::with_capacity(BAKERIES.len());
    for name in BAKERIES {
        let bakery = bakery::ActiveModel {
            name: Set((*name).to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        bakery_ids.push(bakery.id);
    }

    for (name, price, owner) in BAKED_GOODS {
        baked_good::ActiveModel {
            name: Set((*name).to_owned()),
            price: Set(*price),
            bakery_id: Set(bakery_ids[*owner]),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;

    info!(
        bakeries = BAKERIES.len(),
        baked_goods = BAKED_GOODS.len(),
        "Seeded database"
    );
    Ok(())
}
