use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use migration::MigratorTrait;
use sea_orm::{ConnectionTrait, Database, Statement};
use serde_json::{Value, json};
use tower::ServiceExt;

use server::{ServerState, TokenSigner, router};

use std::sync::Arc;

async fn app() -> Router {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();

    let backend = db.get_database_backend();
    for sql in [
        "INSERT INTO users (username) VALUES ('alice')",
        "INSERT INTO sets (set_code, name) VALUES ('SV1', 'Scarlet Base')",
        "INSERT INTO storage_locations (name) VALUES ('Binder A')",
        "INSERT INTO marketplaces (name, slug) VALUES ('Cardmarket', 'cardmarket')",
        "INSERT INTO card_prints (set_id, card_number, name, rarity) \
         VALUES (1, '001/198', 'Sprigatito', 'common')",
        "INSERT INTO card_print_languages (card_print_id, language_id) VALUES (1, 1)",
    ] {
        db.execute(Statement::from_string(backend, sql)).await.unwrap();
    }

    let engine = engine::Engine::builder().database(db.clone()).build();
    router(ServerState {
        engine: Arc::new(engine),
        db,
        tokens: TokenSigner::new("test-secret".as_bytes()),
    })
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn patch(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PATCH")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app().await;

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "bindery-api");
}

#[tokio::test]
async fn login_refresh_logout_flow() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(post("/auth/login", json!({"username": "alice"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["tokenType"], "Bearer");
    assert_eq!(body["expiresIn"], 900);
    let refresh_token = body["refreshToken"].as_str().unwrap().to_string();
    let access_token = body["accessToken"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(post("/auth/refresh", json!({"refreshToken": refresh_token})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["accessToken"].as_str().is_some());

    // An access token is not accepted where a refresh token is expected.
    let response = app
        .clone()
        .oneshot(post("/auth/refresh", json!({"refreshToken": access_token})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .clone()
        .oneshot(post("/auth/logout", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn unknown_user_login_is_a_generic_401() {
    let app = app().await;

    let response = app
        .oneshot(post("/auth/login", json!({"username": "mallory"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["error"], "invalid credentials");
}

#[tokio::test]
async fn catalog_list_clamps_pagination_and_filters() {
    let app = app().await;

    let response = app
        .oneshot(get("/catalog/card-prints?page=0&pageSize=500&setCode=sv1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["pageSize"], 100);
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["data"][0]["cardNumber"], "001/198");
    assert_eq!(body["data"][0]["set"]["setCode"], "SV1");
    assert_eq!(body["data"][0]["languages"][0]["code"], "EN");
}

#[tokio::test]
async fn missing_card_print_is_404() {
    let app = app().await;

    let response = app.oneshot(get("/catalog/card-prints/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn inventory_item_create_and_patch() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(post(
            "/inventory/items",
            json!({"cardPrintId": 1, "userId": 1, "locationId": 1, "conditionId": 1}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["quantityOnHand"], 1);
    let item_id = body["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(patch(
            &format!("/inventory/items/{item_id}"),
            json!({"quantityReserved": 1}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["quantityReserved"], 1);
    assert_eq!(body["quantityOnHand"], 1);

    let response = app
        .oneshot(patch("/inventory/items/999", json!({"quantityReserved": 1})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn acquisition_posting_end_to_end() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(post(
            "/inventory/items",
            json!({"cardPrintId": 1, "userId": 1, "locationId": 1, "conditionId": 1}),
        ))
        .await
        .unwrap();
    let item_id = body_json(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(post(
            "/transactions/acquisitions",
            json!({
                "acquiredAt": "2024-01-01T00:00:00Z",
                "currency": "usd",
                "lines": [
                    {"inventoryItemId": item_id, "quantity": 3, "unitCostMinor": 250}
                ]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["currency"], "USD");
    assert_eq!(body["lines"].as_array().unwrap().len(), 1);
    assert_eq!(body["lines"][0]["quantity"], 3);
    assert_eq!(body["lines"][0]["feesMinor"], 0);
}

#[tokio::test]
async fn invalid_acquisition_envelope_is_400() {
    let app = app().await;

    let response = app
        .oneshot(post(
            "/transactions/acquisitions",
            json!({
                "acquiredAt": "2024-01-01T00:00:00Z",
                "currency": "USD",
                "lines": [
                    {"inventoryItemId": 1, "quantity": 0, "unitCostMinor": 250}
                ]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn sale_posting_end_to_end() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(post(
            "/inventory/items",
            json!({"cardPrintId": 1, "userId": 1, "locationId": 1, "conditionId": 1}),
        ))
        .await
        .unwrap();
    let item_id = body_json(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(post(
            "/transactions/sales",
            json!({
                "soldAt": "2024-02-01T00:00:00Z",
                "currency": "eur",
                "lines": [
                    {"inventoryItemId": item_id, "quantity": 1, "unitPriceMinor": 5000}
                ]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["currency"], "EUR");
    assert_eq!(body["lines"][0]["unitPriceMinor"], 5000);
}

#[tokio::test]
async fn listing_create_list_and_fetch() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(post(
            "/inventory/items",
            json!({"cardPrintId": 1, "userId": 1, "locationId": 1, "conditionId": 1}),
        ))
        .await
        .unwrap();
    let item_id = body_json(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(post(
            "/marketplaces/listings",
            json!({
                "marketplaceId": 1,
                "inventoryItemId": item_id,
                "externalListingId": "CM-1234",
                "currency": "usd"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["listingStatus"], "active");
    assert_eq!(body["currency"], "USD");
    let listing_id = body["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(get("/marketplaces/listings?marketplaceId=1&status=active"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["pagination"]["total"], 1);

    let response = app
        .clone()
        .oneshot(get(&format!("/marketplaces/listings/{listing_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(get("/marketplaces/listings/999"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn reports_come_back_empty_without_sales() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(get("/reports/profitability/by-card?page=0&pageSize=500"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 0);

    let response = app
        .oneshot(get("/reports/profitability/by-set"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
