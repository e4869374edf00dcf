mod common;

use bakery_api::storage::{self, baked_good, BakeryChanges, Mutation, NewBakedGood, Query};
use chrono::Utc;
use common::{insert_baked_good, insert_bakery, setup_db};
use sea_orm::{ActiveModelTrait, Set};

#[tokio::test]
async fn migrations_are_idempotent() {
    let db = setup_db().await;
    storage::migrate(&db).await.unwrap();

    assert_eq!(Query::count_bakeries(&db).await.unwrap(), 0);
    assert_eq!(Query::count_baked_goods(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn list_bakeries_groups_goods_by_owner() {
    let db = setup_db().await;
    let a = insert_bakery(&db, "Alpha").await;
    let b = insert_bakery(&db, "Beta").await;
    let empty = insert_bakery(&db, "Gamma").await;
    insert_baked_good(&db, a.id, "Bagel", 2).await;
    insert_baked_good(&db, b.id, "Baguette", 3).await;
    insert_baked_good(&db, a.id, "Bialy", 4).await;

    let bakeries = Query::list_bakeries(&db).await.unwrap();
    assert_eq!(bakeries.len(), 3);

    let (alpha, alpha_goods) = &bakeries[0];
    assert_eq!(alpha.id, a.id);
    let names: Vec<_> = alpha_goods.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["Bagel", "Bialy"]);

    assert_eq!(bakeries[1].1.len(), 1);
    assert_eq!(bakeries[2].0.id, empty.id);
    assert!(bakeries[2].1.is_empty());
}

#[tokio::test]
async fn find_bakery_returns_none_for_unknown_id() {
    let db = setup_db().await;
    insert_bakery(&db, "Alpha").await;

    assert!(Query::find_bakery(&db, 42).await.unwrap().is_none());
}

#[tokio::test]
async fn baked_goods_sort_by_descending_price() {
    let db = setup_db().await;
    let bakery = insert_bakery(&db, "Alpha").await;
    insert_baked_good(&db, bakery.id, "Cheap", 1).await;
    insert_baked_good(&db, bakery.id, "Pricey", 9).await;
    insert_baked_good(&db, bakery.id, "Middling", 5).await;

    let goods = Query::baked_goods_by_price(&db).await.unwrap();
    let prices: Vec<_> = goods.iter().map(|(g, _)| g.price).collect();
    assert_eq!(prices, [9, 5, 1]);
    assert!(goods.iter().all(|(_, b)| b.as_ref() == Some(&bakery)));

    let (top, _) = Query::most_expensive_baked_good(&db).await.unwrap().unwrap();
    assert_eq!(top.name, "Pricey");
}

#[tokio::test]
async fn most_expensive_is_none_when_empty() {
    let db = setup_db().await;
    assert!(Query::most_expensive_baked_good(&db).await.unwrap().is_none());
}

#[tokio::test]
async fn create_baked_good_requires_existing_bakery() {
    let db = setup_db().await;
    let bakery = insert_bakery(&db, "Alpha").await;

    let missing = Mutation::create_baked_good(
        &db,
        NewBakedGood {
            name: "Orphan".into(),
            price: 3,
            bakery_id: bakery.id + 100,
        },
    )
    .await
    .unwrap();
    assert!(missing.is_none());

    let (created, owner) = Mutation::create_baked_good(
        &db,
        NewBakedGood {
            name: "Croissant".into(),
            price: 3,
            bakery_id: bakery.id,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(created.bakery_id, bakery.id);
    assert_eq!(owner, bakery);
    assert_eq!(Query::count_baked_goods(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn schema_rejects_baked_good_for_unknown_bakery() {
    let db = setup_db().await;
    let bakery = insert_bakery(&db, "Alpha").await;

    let now = Utc::now();
    let orphan = baked_good::ActiveModel {
        name: Set("Orphan".to_owned()),
        price: Set(3),
        bakery_id: Set(bakery.id + 100),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&db)
    .await;

    assert!(orphan.is_err());
    assert_eq!(Query::count_baked_goods(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn update_bakery_touches_only_allowed_fields() {
    let db = setup_db().await;
    let bakery = insert_bakery(&db, "Alpha").await;

    let updated = Mutation::update_bakery(
        &db,
        bakery.id,
        BakeryChanges {
            name: Some("Omega".into()),
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.id, bakery.id);
    assert_eq!(updated.name, "Omega");
    assert_eq!(updated.created_at, bakery.created_at);
    assert!(updated.updated_at >= bakery.updated_at);

    let unchanged = Mutation::update_bakery(&db, bakery.id, BakeryChanges::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged, updated);

    assert!(
        Mutation::update_bakery(&db, 999, BakeryChanges::default())
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn delete_baked_good_reports_whether_a_row_was_removed() {
    let db = setup_db().await;
    let bakery = insert_bakery(&db, "Alpha").await;
    let good = insert_baked_good(&db, bakery.id, "Scone", 2).await;

    assert!(Mutation::delete_baked_good(&db, good.id).await.unwrap());
    assert!(!Mutation::delete_baked_good(&db, good.id).await.unwrap());
    assert_eq!(Query::count_baked_goods(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn seed_replaces_existing_rows() {
    let db = setup_db().await;
    insert_bakery(&db, "Leftover").await;

    storage::seed::seed(&db).await.unwrap();
    storage::seed::seed(&db).await.unwrap();

    let bakeries = Query::list_bakeries(&db).await.unwrap();
    assert_eq!(bakeries.len(), 3);
    assert!(bakeries.iter().all(|(b, goods)| b.name != "Leftover" && !goods.is_empty()));
    assert_eq!(Query::count_baked_goods(&db).await.unwrap(), 6);
}
