//! Errors the engine can return.
//!
//! Every write path validates its input before touching the database, so a
//! [`Validation`] error guarantees no row was created. [`Database`] wraps the
//! underlying [`DbErr`] untranslated; the server decides how much of it to
//! surface.
//!
//! [`Validation`]: EngineError::Validation
//! [`Database`]: EngineError::Database

use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::NotFound(a), Self::NotFound(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
