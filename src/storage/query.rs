use super::entities::prelude::*;
use super::entities::{baked_good, bakery};
use sea_orm::*;

/// A bakery together with the goods it sells.
pub type BakeryWithGoods = (bakery::Model, Vec<baked_good::Model>);

/// A baked good together with its owning bakery.
///
/// The bakery is an `Option` only because the ORM joins with a left join; the
/// foreign key guarantees it is present for every stored row.
pub type BakedGoodWithBakery = (baked_good::Model, Option<bakery::Model>);

pub struct Query;

impl Query {
    pub async fn list_bakeries(db: &DbConn) -> Result<Vec<BakeryWithGoods>, DbErr> {
        Bakery::find()
            .find_with_related(BakedGood)
            .order_by_asc(bakery::Column::Id)
            .order_by_asc(baked_good::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_bakery(db: &DbConn, id: i32) -> Result<Option<BakeryWithGoods>, DbErr> {
        let Some(bakery) = Bakery::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let goods = bakery
            .find_related(BakedGood)
            .order_by_asc(baked_good::Column::Id)
            .all(db)
            .await?;

        Ok(Some((bakery, goods)))
    }

    /// Every baked good, most expensive first. Ties keep insertion order.
    pub async fn baked_goods_by_price(db: &DbConn) -> Result<Vec<BakedGoodWithBakery>, DbErr> {
        BakedGood::find()
            .find_also_related(Bakery)
            .order_by_desc(baked_good::Column::Price)
            .order_by_asc(baked_good::Column::Id)
            .all(db)
            .await
    }

    pub async fn most_expensive_baked_good(
        db: &DbConn,
    ) -> Result<Option<BakedGoodWithBakery>, DbErr> {
        BakedGood::find()
            .find_also_related(Bakery)
            .order_by_desc(baked_good::Column::Price)
            .order_by_asc(baked_good::Column::Id)
            .one(db)
            .await
    }

    pub async fn count_bakeries(db: &DbConn) -> Result<u64, DbErr> {
        Bakery::find().count(db).await
    }

    pub async fn count_baked_goods(db: &DbConn) -> Result<u64, DbErr> {
        BakedGood::find().count(db).await
    }
}
