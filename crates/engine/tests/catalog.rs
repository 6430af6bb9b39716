use chrono::Utc;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

use engine::{
    AcquisitionLineInput, CardPrintFilter, CreateItemCmd, CreateListingCmd, Engine, EngineError,
    ListingFilter, ListingStatus, PageRequest, PostAcquisitionCmd, PostSaleCmd, SaleLineInput,
};
use migration::MigratorTrait;

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();

    let backend = db.get_database_backend();
    for sql in [
        "INSERT INTO users (username) VALUES ('alice')",
        "INSERT INTO sets (set_code, name) VALUES ('SV1', 'Scarlet Base')",
        "INSERT INTO sets (set_code, name) VALUES ('OBF', 'Obsidian Flames')",
        "INSERT INTO storage_locations (name) VALUES ('Binder A')",
        "INSERT INTO marketplaces (name, slug) VALUES ('Cardmarket', 'cardmarket')",
        "INSERT INTO marketplaces (name, slug) VALUES ('eBay', 'ebay')",
        // Print 1: SV1, English. Print 2: SV1, Japanese. Print 3: OBF, English.
        "INSERT INTO card_prints (set_id, card_number, name, rarity) \
         VALUES (1, '001/198', 'Sprigatito', 'common')",
        "INSERT INTO card_prints (set_id, card_number, name, rarity) \
         VALUES (1, '025/198', 'Pikachu', 'rare')",
        "INSERT INTO card_prints (set_id, card_number, name, rarity) \
         VALUES (2, '125/197', 'Charizard ex', 'double rare')",
        "INSERT INTO card_print_languages (card_print_id, language_id) VALUES (1, 1)",
        "INSERT INTO card_print_languages (card_print_id, language_id) VALUES (2, 2)",
        "INSERT INTO card_print_languages (card_print_id, language_id) VALUES (3, 1)",
    ] {
        db.execute(Statement::from_string(backend, sql)).await.unwrap();
    }

    let engine = Engine::builder().database(db.clone()).build();
    (engine, db)
}

#[tokio::test]
async fn out_of_range_pagination_is_clamped_not_rejected() {
    let (engine, _db) = engine_with_db().await;

    let page = PageRequest::clamped(Some(0), Some(500));
    let (views, total) = engine
        .list_card_prints(&CardPrintFilter::default(), page)
        .await
        .unwrap();

    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, 100);
    assert_eq!(total, 3);
    assert_eq!(views.len(), 3);
}

#[tokio::test]
async fn list_is_paged_and_ordered_by_id() {
    let (engine, _db) = engine_with_db().await;

    let (first, total) = engine
        .list_card_prints(
            &CardPrintFilter::default(),
            PageRequest::clamped(Some(1), Some(2)),
        )
        .await
        .unwrap();
    assert_eq!(total, 3);
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].print.id, 1);
    assert_eq!(first[1].print.id, 2);

    let (second, _) = engine
        .list_card_prints(
            &CardPrintFilter::default(),
            PageRequest::clamped(Some(2), Some(2)),
        )
        .await
        .unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].print.id, 3);
}

#[tokio::test]
async fn set_code_filter_matches_case_insensitively() {
    let (engine, _db) = engine_with_db().await;

    let filter = CardPrintFilter {
        set_code: Some("sv1".to_string()),
        ..CardPrintFilter::default()
    };
    let (views, total) = engine
        .list_card_prints(&filter, PageRequest::default())
        .await
        .unwrap();

    assert_eq!(total, 2);
    assert!(views.iter().all(|v| v.print.set_id == 1));
    assert!(
        views
            .iter()
            .all(|v| v.set.as_ref().map(|s| s.set_code.as_str()) == Some("SV1"))
    );
}

#[tokio::test]
async fn language_filter_goes_through_the_junction() {
    let (engine, _db) = engine_with_db().await;

    let filter = CardPrintFilter {
        language: Some("jp".to_string()),
        ..CardPrintFilter::default()
    };
    let (views, total) = engine
        .list_card_prints(&filter, PageRequest::default())
        .await
        .unwrap();

    assert_eq!(total, 1);
    assert_eq!(views[0].print.id, 2);
    assert_eq!(views[0].languages.len(), 1);
    assert_eq!(views[0].languages[0].code, "JP");
}

#[tokio::test]
async fn card_number_filter_is_a_substring_match() {
    let (engine, _db) = engine_with_db().await;

    let filter = CardPrintFilter {
        card_number: Some("25/19".to_string()),
        ..CardPrintFilter::default()
    };
    let (views, total) = engine
        .list_card_prints(&filter, PageRequest::default())
        .await
        .unwrap();

    assert_eq!(total, 2);
    let ids: Vec<i64> = views.iter().map(|v| v.print.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[tokio::test]
async fn filters_are_and_combined() {
    let (engine, _db) = engine_with_db().await;

    let filter = CardPrintFilter {
        set_code: Some("SV1".to_string()),
        language: Some("EN".to_string()),
        card_number: Some("001".to_string()),
    };
    let (views, total) = engine
        .list_card_prints(&filter, PageRequest::default())
        .await
        .unwrap();

    assert_eq!(total, 1);
    assert_eq!(views[0].print.id, 1);
}

#[tokio::test]
async fn missing_card_print_is_not_found() {
    let (engine, _db) = engine_with_db().await;

    let err = engine.card_print(999).await.unwrap_err();
    assert!(matches!(err, EngineError::NotFound(_)));
}

#[tokio::test]
async fn listing_defaults_to_active_and_uppercases_currency() {
    let (engine, _db) = engine_with_db().await;
    let item = engine
        .create_item(CreateItemCmd::new(1, 1, 1, 1))
        .await
        .unwrap();

    let listing = engine
        .create_listing(CreateListingCmd {
            currency: Some("usd".to_string()),
            listed_price_minor: Some(4200),
            ..CreateListingCmd::new(1, item.id, "CM-1234")
        })
        .await
        .unwrap();

    assert_eq!(listing.listing_status, "active");
    assert_eq!(listing.currency.as_deref(), Some("USD"));

    let fetched = engine.listing(listing.id).await.unwrap();
    assert_eq!(fetched, listing);
}

#[tokio::test]
async fn listings_filter_on_marketplace_and_status() {
    let (engine, _db) = engine_with_db().await;
    let item = engine
        .create_item(CreateItemCmd::new(1, 1, 1, 1))
        .await
        .unwrap();

    engine
        .create_listing(CreateListingCmd::new(1, item.id, "CM-1"))
        .await
        .unwrap();
    engine
        .create_listing(CreateListingCmd {
            listing_status: Some(ListingStatus::Paused),
            ..CreateListingCmd::new(1, item.id, "CM-2")
        })
        .await
        .unwrap();
    engine
        .create_listing(CreateListingCmd::new(2, item.id, "EB-1"))
        .await
        .unwrap();

    let (rows, total) = engine
        .list_listings(
            ListingFilter {
                marketplace_id: Some(1),
                status: Some(ListingStatus::Active),
            },
            PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(rows[0].external_listing_id, "CM-1");

    // Newest first when unfiltered.
    let (rows, total) = engine
        .list_listings(ListingFilter::default(), PageRequest::default())
        .await
        .unwrap();
    assert_eq!(total, 3);
    assert_eq!(rows[0].external_listing_id, "EB-1");
}

#[tokio::test]
async fn listing_validation_rejects_bad_input() {
    let (engine, _db) = engine_with_db().await;

    for cmd in [
        CreateListingCmd::new(0, 1, "X-1"),
        CreateListingCmd::new(1, 0, "X-1"),
        CreateListingCmd::new(1, 1, "   "),
        CreateListingCmd {
            listed_price_minor: Some(-5),
            ..CreateListingCmd::new(1, 1, "X-1")
        },
    ] {
        let err = engine.create_listing(cmd).await.unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
    }
}

#[tokio::test]
async fn missing_listing_is_not_found() {
    let (engine, _db) = engine_with_db().await;

    let err = engine.listing(42).await.unwrap_err();
    assert!(matches!(err, EngineError::NotFound(_)));
}

#[tokio::test]
async fn profitability_reports_rank_by_realized_profit() {
    let (engine, _db) = engine_with_db().await;

    // Item 1 sells print 1 (set SV1), item 2 sells print 3 (set OBF).
    let item_one = engine
        .create_item(CreateItemCmd::new(1, 1, 1, 1))
        .await
        .unwrap();
    let item_two = engine
        .create_item(CreateItemCmd::new(3, 1, 1, 1))
        .await
        .unwrap();

    engine
        .post_acquisition(
            PostAcquisitionCmd::new(Utc::now(), "USD")
                .line(AcquisitionLineInput::new(item_one.id, 1, 100))
                .line(AcquisitionLineInput::new(item_two.id, 1, 1000)),
        )
        .await
        .unwrap();

    engine
        .post_sale(
            PostSaleCmd::new(Utc::now(), "USD")
                .line(SaleLineInput {
                    language_id: Some(1),
                    fees_minor: Some(10),
                    shipping_minor: Some(5),
                    ..SaleLineInput::new(item_one.id, 1, 250)
                })
                .line(SaleLineInput {
                    language_id: Some(1),
                    ..SaleLineInput::new(item_two.id, 1, 5000)
                }),
        )
        .await
        .unwrap();

    let by_card = engine
        .profitability_by_card(PageRequest::default())
        .await
        .unwrap();
    assert_eq!(by_card.len(), 2);

    // The Charizard sale is the more profitable one and comes first.
    assert_eq!(by_card[0].card_print_id, 3);
    assert_eq!(by_card[0].gross_revenue_minor, 5000);
    assert_eq!(by_card[0].cogs_minor, 1000);
    assert_eq!(by_card[0].realized_profit_minor, 4000);

    assert_eq!(by_card[1].card_print_id, 1);
    assert_eq!(by_card[1].sold_quantity, 1);
    assert_eq!(by_card[1].gross_revenue_minor, 250);
    assert_eq!(by_card[1].cogs_minor, 100);
    assert_eq!(by_card[1].gross_margin_minor, 150);
    assert_eq!(by_card[1].realized_profit_minor, 135);
    assert_eq!(by_card[1].language_code.as_deref(), Some("EN"));

    let by_set = engine.profitability_by_set().await.unwrap();
    assert_eq!(by_set.len(), 2);
    assert_eq!(by_set[0].set_name, "Obsidian Flames");
    assert_eq!(by_set[0].realized_profit_minor, 4000);
    assert_eq!(by_set[1].set_name, "Scarlet Base");
    assert_eq!(by_set[1].realized_profit_minor, 135);
}
