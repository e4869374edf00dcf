//! Schema migrations, applied at startup before the router is built.

use sea_orm_migration::prelude::*;

mod m20240101_000001_create_bakeries;
mod m20240101_000002_create_baked_goods;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_bakeries::Migration),
            Box::new(m20240101_000002_create_baked_goods::Migration),
        ]
    }
}
