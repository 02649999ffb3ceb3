//! Error types for the holocron schema layer.
//!
//! The layer itself never recovers from storage failures: uniqueness, foreign key and
//! not-null violations raised by the database are carried through [`Error::DbErr`] to the
//! caller. [`Error::constraint_violation`] lets a web layer tell those categories apart,
//! and [`Error::to_dto`] builds the transport body for an error response.

pub mod config;

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{error::config::ConfigError, model::api::ErrorDto};

/// Main error type for holocron.
///
/// Aggregates configuration errors and database errors into a single type so that
/// services can use `?` on both repository calls and configuration lookups.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] DbErr),
}

/// Constraint category reported by the storage engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// A unique column already holds the value, e.g. a duplicate `user.email`.
    Unique(String),
    /// A favorite referenced a user or catalog row that does not exist.
    ForeignKey(String),
}

impl Error {
    /// Classifies the database constraint this error violated, if any.
    ///
    /// Not-null violations are not reported separately by the driver and return `None`
    /// along with every other error kind.
    pub fn constraint_violation(&self) -> Option<ConstraintViolation> {
        let Self::DbErr(err) = self else {
            return None;
        };

        match err.sql_err()? {
            SqlErr::UniqueConstraintViolation(msg) => Some(ConstraintViolation::Unique(msg)),
            SqlErr::ForeignKeyConstraintViolation(msg) => {
                Some(ConstraintViolation::ForeignKey(msg))
            }
            _ => None,
        }
    }

    /// Builds the error body an HTTP layer returns for this error.
    ///
    /// Constraint violations are described to the client; anything else is logged and
    /// replaced with a generic message so internals don't leak.
    pub fn to_dto(&self) -> ErrorDto {
        let error = match self.constraint_violation() {
            Some(ConstraintViolation::Unique(_)) => "Resource already exists".to_string(),
            Some(ConstraintViolation::ForeignKey(_)) => {
                "Referenced resource does not exist".to_string()
            }
            None => {
                tracing::error!("{}", self);
                "Internal server error".to_string()
            }
        };

        ErrorDto { error }
    }
}
