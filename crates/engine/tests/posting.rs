use chrono::Utc;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait, Statement};

use engine::{
    AcquisitionLineInput, CreateItemCmd, Engine, EngineError, PostAcquisitionCmd, PostSaleCmd,
    SaleLineInput, acquisition_lines, acquisitions, movements, sale_lines, sales,
};
use migration::MigratorTrait;

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();

    let backend = db.get_database_backend();
    for sql in [
        "INSERT INTO users (username) VALUES ('alice')",
        "INSERT INTO sets (set_code, name) VALUES ('SV1', 'Scarlet Base')",
        "INSERT INTO storage_locations (name) VALUES ('Binder A')",
        "INSERT INTO card_prints (set_id, card_number, name, rarity) \
         VALUES (1, '001/198', 'Sprigatito', 'common')",
    ] {
        db.execute(Statement::from_string(backend, sql)).await.unwrap();
    }

    let engine = Engine::builder().database(db.clone()).build();
    (engine, db)
}

async fn seeded_item(engine: &Engine) -> i64 {
    engine
        .create_item(CreateItemCmd::new(1, 1, 1, 1))
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn acquisition_posts_header_lines_and_movements() {
    let (engine, db) = engine_with_db().await;
    let item_id = seeded_item(&engine).await;

    let posted = engine
        .post_acquisition(
            PostAcquisitionCmd::new(Utc::now(), "usd")
                .line(AcquisitionLineInput::new(item_id, 3, 250))
                .line(AcquisitionLineInput {
                    fees_minor: Some(30),
                    shipping_minor: Some(120),
                    ..AcquisitionLineInput::new(item_id, 1, 900)
                }),
        )
        .await
        .unwrap();

    assert_eq!(posted.acquisition.currency, "USD");
    assert_eq!(posted.lines.len(), 2);
    assert_eq!(posted.lines[0].acquisition_id, posted.acquisition.id);
    assert_eq!(posted.lines[0].fees_minor, 0);
    assert_eq!(posted.lines[1].fees_minor, 30);
    assert_eq!(posted.lines[1].shipping_minor, 120);

    let headers = acquisitions::Entity::find().all(&db).await.unwrap();
    assert_eq!(headers.len(), 1);
    let lines = acquisition_lines::Entity::find().all(&db).await.unwrap();
    assert_eq!(lines.len(), 2);

    let movement_rows = movements::Entity::find().all(&db).await.unwrap();
    assert_eq!(movement_rows.len(), 2);
    for (movement, line) in movement_rows.iter().zip(&posted.lines) {
        assert_eq!(movement.movement_type, "purchase");
        assert_eq!(movement.quantity_delta, line.quantity);
        assert_eq!(movement.inventory_item_id, item_id);
        assert_eq!(movement.reference_kind.as_deref(), Some("acquisition"));
        assert_eq!(
            movement.reference_id.as_deref(),
            Some(posted.acquisition.id.to_string().as_str())
        );
    }
}

#[tokio::test]
async fn sale_posts_negated_movements() {
    let (engine, db) = engine_with_db().await;
    let item_id = seeded_item(&engine).await;

    let posted = engine
        .post_sale(
            PostSaleCmd::new(Utc::now(), "eur").line(SaleLineInput::new(item_id, 2, 1500)),
        )
        .await
        .unwrap();

    assert_eq!(posted.sale.currency, "EUR");
    assert_eq!(posted.lines.len(), 1);

    let movement_rows = movements::Entity::find().all(&db).await.unwrap();
    assert_eq!(movement_rows.len(), 1);
    assert_eq!(movement_rows[0].movement_type, "sale");
    assert_eq!(movement_rows[0].quantity_delta, -2);
    assert_eq!(movement_rows[0].reference_kind.as_deref(), Some("sale"));
    assert_eq!(
        movement_rows[0].reference_id.as_deref(),
        Some(posted.sale.id.to_string().as_str())
    );
}

#[tokio::test]
async fn duplicate_item_across_lines_produces_one_movement_per_line() {
    let (engine, db) = engine_with_db().await;
    let item_id = seeded_item(&engine).await;

    // One purchase restocking the same item twice with different cost lots.
    engine
        .post_acquisition(
            PostAcquisitionCmd::new(Utc::now(), "USD")
                .line(AcquisitionLineInput::new(item_id, 1, 100))
                .line(AcquisitionLineInput::new(item_id, 1, 175)),
        )
        .await
        .unwrap();

    let movement_rows = movements::Entity::find().all(&db).await.unwrap();
    assert_eq!(movement_rows.len(), 2);
    assert!(
        movement_rows
            .iter()
            .all(|movement| movement.inventory_item_id == item_id)
    );
}

#[tokio::test]
async fn invalid_line_leaves_nothing_behind() {
    let (engine, db) = engine_with_db().await;
    let item_id = seeded_item(&engine).await;

    let err = engine
        .post_sale(
            PostSaleCmd::new(Utc::now(), "USD")
                .line(SaleLineInput::new(item_id, 1, 500))
                .line(SaleLineInput::new(item_id, 0, 500)),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));

    assert!(sales::Entity::find().all(&db).await.unwrap().is_empty());
    assert!(sale_lines::Entity::find().all(&db).await.unwrap().is_empty());
    assert!(movements::Entity::find().all(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_envelope_is_rejected() {
    let (engine, db) = engine_with_db().await;

    let err = engine
        .post_acquisition(PostAcquisitionCmd::new(Utc::now(), "USD"))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));

    assert!(acquisitions::Entity::find().all(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn bad_currency_is_rejected_before_any_write() {
    let (engine, db) = engine_with_db().await;
    let item_id = seeded_item(&engine).await;

    let err = engine
        .post_acquisition(
            PostAcquisitionCmd::new(Utc::now(), "EURO")
                .line(AcquisitionLineInput::new(item_id, 1, 100)),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));

    assert!(acquisitions::Entity::find().all(&db).await.unwrap().is_empty());
    assert!(movements::Entity::find().all(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn negative_money_is_rejected() {
    let (engine, _db) = engine_with_db().await;
    let item_id = seeded_item(&engine).await;

    let err = engine
        .post_sale(
            PostSaleCmd::new(Utc::now(), "USD").line(SaleLineInput {
                fees_minor: Some(-1),
                ..SaleLineInput::new(item_id, 1, 100)
            }),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));
}
