use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_bakeries::Bakeries;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BakedGoods::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BakedGoods::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BakedGoods::Name).string().not_null())
                    .col(ColumnDef::new(BakedGoods::Price).integer().not_null())
                    .col(ColumnDef::new(BakedGoods::BakeryId).integer().not_null())
                    .col(
                        ColumnDef::new(BakedGoods::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BakedGoods::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_baked_goods_bakery_id")
                            .from(BakedGoods::Table, BakedGoods::BakeryId)
                            .to(Bakeries::Table, Bakeries::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BakedGoods::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BakedGoods {
    Table,
    Id,
    Name,
    Price,
    BakeryId,
    CreatedAt,
    UpdatedAt,
}
