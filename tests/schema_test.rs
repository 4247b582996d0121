mod common;

use chrono::NaiveDate;
use nordicx_reports::entities::{
    customer, customer_purchase_history, employee, order, order_item, product, schedule, supplier,
};
use nordicx_reports::schema;
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

#[tokio::test]
async fn seeding_yields_expected_row_counts() {
    let app = common::TestDb::new().await;
    let db = app.db.get_pool();

    assert_eq!(
        customer::Entity::find().count(db).await.expect("count"),
        schema::CUSTOMER_ROWS as u64
    );
    assert_eq!(
        supplier::Entity::find().count(db).await.expect("count"),
        schema::SUPPLIER_ROWS as u64
    );
    assert_eq!(
        product::Entity::find().count(db).await.expect("count"),
        schema::PRODUCT_ROWS as u64
    );
    assert_eq!(
        order::Entity::find().count(db).await.expect("count"),
        schema::ORDER_ROWS as u64
    );
    assert_eq!(
        order_item::Entity::find().count(db).await.expect("count"),
        schema::ORDER_ITEM_ROWS as u64
    );
    assert_eq!(
        employee::Entity::find().count(db).await.expect("count"),
        schema::EMPLOYEE_ROWS as u64
    );
    assert_eq!(
        schedule::Entity::find().count(db).await.expect("count"),
        schema::SCHEDULE_ROWS as u64
    );

    // One view row per seeded order.
    assert_eq!(
        customer_purchase_history::Entity::find()
            .count(db)
            .await
            .expect("count view"),
        schema::ORDER_ROWS as u64
    );
}

#[tokio::test]
async fn reinitialization_resets_prior_state() {
    let app = common::TestDb::new().await;
    let db = app.db.get_pool();

    order::Entity::delete_by_id(1)
        .exec(db)
        .await
        .expect("delete order");
    assert_eq!(order::Entity::find().count(db).await.expect("count"), 9);

    schema::initialize(&app.db).await.expect("re-initialize");

    assert_eq!(order::Entity::find().count(db).await.expect("count"), 10);
    assert_eq!(
        order_item::Entity::find().count(db).await.expect("count"),
        15
    );
    // AUTOINCREMENT restarts from 1 on reset.
    assert!(order::Entity::find_by_id(1)
        .one(db)
        .await
        .expect("find")
        .is_some());
}

#[tokio::test]
async fn ensure_initialized_is_a_noop_on_seeded_store() {
    let app = common::TestDb::new().await;
    let db = app.db.get_pool();

    order::Entity::delete_by_id(2)
        .exec(db)
        .await
        .expect("delete order");

    let ran = schema::ensure_initialized(&app.db)
        .await
        .expect("ensure_initialized");
    assert!(!ran);
    // The deleted order stays deleted: no hidden reseed.
    assert_eq!(order::Entity::find().count(db).await.expect("count"), 9);
}

#[tokio::test]
async fn check_constraints_reject_bad_rows() {
    let app = common::TestDb::new().await;
    let db = app.db.get_pool();

    // Negative stock level fails.
    let result = product::ActiveModel {
        supplier_id: Set(1),
        name: Set("Broken Crate".to_string()),
        price: Set(dec!(10.00)),
        stock_level: Set(-5),
        ..Default::default()
    }
    .insert(db)
    .await;
    assert!(result.is_err(), "negative stock level must be rejected");

    // Negative price fails.
    let result = product::ActiveModel {
        supplier_id: Set(1),
        name: Set("Free Lunch".to_string()),
        price: Set(dec!(-1.00)),
        stock_level: Set(1),
        ..Default::default()
    }
    .insert(db)
    .await;
    assert!(result.is_err(), "negative price must be rejected");

    // Zero stock is allowed.
    let model = product::ActiveModel {
        supplier_id: Set(1),
        name: Set("Out Of Stock Lamp".to_string()),
        price: Set(dec!(19.99)),
        stock_level: Set(0),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("zero stock level is valid");
    assert_eq!(model.stock_level, 0);

    // Non-positive quantity fails.
    let result = order_item::ActiveModel {
        order_id: Set(1),
        product_id: Set(1),
        quantity: Set(0),
        price: Set(dec!(5.00)),
        ..Default::default()
    }
    .insert(db)
    .await;
    assert!(result.is_err(), "zero quantity must be rejected");

    // Negative order total fails.
    let result = order::ActiveModel {
        customer_id: Set(1),
        order_date: Set(d(2025, 3, 1)),
        total_amount: Set(dec!(-10.00)),
        ..Default::default()
    }
    .insert(db)
    .await;
    assert!(result.is_err(), "negative total must be rejected");
}

#[tokio::test]
async fn unique_email_is_enforced() {
    let app = common::TestDb::new().await;
    let db = app.db.get_pool();

    let result = customer::ActiveModel {
        name: Set("Duplicate".to_string()),
        email: Set("john.smith@hotmail.com".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await;
    assert!(result.is_err(), "duplicate customer email must be rejected");
}

#[tokio::test]
async fn foreign_keys_are_enforced() {
    let app = common::TestDb::new().await;
    let db = app.db.get_pool();

    let result = product::ActiveModel {
        supplier_id: Set(999),
        name: Set("Orphan Product".to_string()),
        price: Set(dec!(1.00)),
        stock_level: Set(1),
        ..Default::default()
    }
    .insert(db)
    .await;
    assert!(result.is_err(), "unknown supplier id must be rejected");
}

#[tokio::test]
async fn supplier_delete_is_restricted_while_products_exist() {
    let app = common::TestDb::new().await;
    let db = app.db.get_pool();

    let result = supplier::Entity::delete_by_id(1).exec(db).await;
    assert!(result.is_err(), "supplier with products must not be deletable");

    // Products referenced by order items are likewise restricted.
    let result = product::Entity::delete_by_id(3).exec(db).await;
    assert!(
        result.is_err(),
        "product referenced by order items must not be deletable"
    );
}

#[tokio::test]
async fn order_delete_cascades_to_items() {
    let app = common::TestDb::new().await;
    let db = app.db.get_pool();

    // Order 1 carries two seeded items.
    assert_eq!(
        order_item::Entity::find()
            .filter(order_item::Column::OrderId.eq(1))
            .count(db)
            .await
            .expect("count"),
        2
    );

    order::Entity::delete_by_id(1)
        .exec(db)
        .await
        .expect("delete order");

    assert_eq!(
        order_item::Entity::find()
            .filter(order_item::Column::OrderId.eq(1))
            .count(db)
            .await
            .expect("count"),
        0
    );
    assert_eq!(
        order_item::Entity::find().count(db).await.expect("count"),
        13
    );
}

#[tokio::test]
async fn employee_delete_cascades_to_schedules() {
    let app = common::TestDb::new().await;
    let db = app.db.get_pool();

    employee::Entity::delete_by_id(1)
        .exec(db)
        .await
        .expect("delete employee");

    assert_eq!(
        schedule::Entity::find()
            .filter(schedule::Column::EmployeeId.eq(1))
            .count(db)
            .await
            .expect("count"),
        0
    );
    assert_eq!(schedule::Entity::find().count(db).await.expect("count"), 9);
}

#[tokio::test]
async fn purchase_history_view_is_live() {
    let app = common::TestDb::new().await;
    let db = app.db.get_pool();

    assert_eq!(
        customer_purchase_history::Entity::find()
            .count(db)
            .await
            .expect("count"),
        10
    );

    order::ActiveModel {
        customer_id: Set(1),
        order_date: Set(d(2025, 2, 10)),
        total_amount: Set(dec!(10.00)),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert order");

    assert_eq!(
        customer_purchase_history::Entity::find()
            .count(db)
            .await
            .expect("count"),
        11
    );

    order::Entity::delete_by_id(1)
        .exec(db)
        .await
        .expect("delete order");

    assert_eq!(
        customer_purchase_history::Entity::find()
            .count(db)
            .await
            .expect("count"),
        10
    );
}
