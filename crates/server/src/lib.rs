//! HTTP server for the bindery API.
//!
//! Thin axum handlers over the engine: extract, call, map to JSON. The only
//! state carried per process is the database handle, the engine and the
//! token signer.

use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;
use sea_orm::DbErr;
use serde::Serialize;

pub use server::{ServerState, router, run, run_with_listener, spawn_with_listener};
pub use tokens::TokenSigner;

mod auth;
mod catalog;
mod health;
mod inventory;
mod marketplaces;
mod reports;
mod server;
mod tokens;
mod transactions;
pub mod users;

pub enum ServerError {
    Engine(EngineError),
    /// Any authentication failure. Deliberately carries no detail: the
    /// response must not reveal which check failed.
    Auth,
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::Validation(_) => StatusCode::BAD_REQUEST,
        EngineError::NotFound(_) => StatusCode::NOT_FOUND,
        EngineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => {
                (status_for_engine_error(&err), message_for_engine_error(err))
            }
            ServerError::Auth => (StatusCode::UNAUTHORIZED, "invalid credentials".to_string()),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<DbErr> for ServerError {
    fn from(value: DbErr) -> Self {
        Self::Engine(EngineError::Database(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let res =
            ServerError::from(EngineError::Validation("bad input".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let res = ServerError::from(EngineError::NotFound("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn database_maps_to_500() {
        let res = ServerError::from(EngineError::Database(DbErr::Custom(
            "boom".to_string(),
        )))
        .into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn auth_maps_to_401() {
        let res = ServerError::Auth.into_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn generic_maps_to_400() {
        let res = ServerError::Generic("bad".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_detail_is_not_leaked() {
        let message = message_for_engine_error(EngineError::Database(DbErr::Custom(
            "secret table names".to_string(),
        )));
        assert_eq!(message, "internal server error");
    }
}
