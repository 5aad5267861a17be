//! Persistence of computed heatwave counts.

pub mod error;
pub mod schema;
pub mod sqlite;

use crate::store::error::StoreError;
use crate::types::heatwave::YearResult;
use std::future::Future;

/// Durable home for per-year heatwave counts.
///
/// Writes are upserts keyed by year: a later write for the same year replaces
/// the earlier one.
pub trait ResultStore: Send + Sync {
    fn upsert(&self, result: YearResult) -> impl Future<Output = Result<(), StoreError>> + Send;
}
