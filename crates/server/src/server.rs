//! Router, shared state and the server entry points.

use axum::{
    Router,
    routing::{get, patch, post},
};
use sea_orm::DatabaseConnection;

use std::sync::Arc;

use crate::{auth, catalog, health, inventory, marketplaces, reports, transactions};
use crate::tokens::TokenSigner;
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
    pub db: DatabaseConnection,
    pub tokens: TokenSigner,
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health::get))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh))
        .route("/auth/logout", post(auth::logout))
        .route("/catalog/card-prints", get(catalog::list))
        .route("/catalog/card-prints/{id}", get(catalog::get_one))
        .route("/inventory/items", post(inventory::create_item))
        .route("/inventory/items/{id}", patch(inventory::update_item))
        .route("/inventory/movements", post(inventory::create_movement))
        .route(
            "/marketplaces/listings",
            get(marketplaces::list).post(marketplaces::create),
        )
        .route("/marketplaces/listings/{id}", get(marketplaces::get_one))
        .route(
            "/transactions/acquisitions",
            post(transactions::create_acquisition),
        )
        .route("/transactions/sales", post(transactions::create_sale))
        .route("/reports/profitability/by-card", get(reports::by_card))
        .route("/reports/profitability/by-set", get(reports::by_set))
        .with_state(state)
}

pub async fn run(engine: Engine, db: DatabaseConnection, tokens: TokenSigner) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(engine, db, tokens, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    engine: Engine,
    db: DatabaseConnection,
    tokens: TokenSigner,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
        db,
        tokens,
    };

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    db: DatabaseConnection,
    tokens: TokenSigner,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, db, tokens, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
