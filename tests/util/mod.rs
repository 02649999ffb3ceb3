//! Error type for tests that mix fixture setup with service calls.

use holocron_test_utils::TestError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceTestError {
    #[error(transparent)]
    Fixture(#[from] TestError),
    #[error(transparent)]
    Service(#[from] holocron::error::Error),
    #[error(transparent)]
    DbErr(#[from] DbErr),
    #[error("expected {0} to exist")]
    Missing(&'static str),
}
