//! SQLite-backed [`ResultStore`].

use crate::store::error::StoreError;
use crate::store::schema::create_schema;
use crate::store::ResultStore;
use crate::types::heatwave::YearResult;
use crate::utils::ensure_dir_exists;
use chrono::{DateTime, Utc};
use log::{debug, info};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tokio::task;

const UPSERT_SQL: &str = "INSERT INTO heatwave_events (year, events, updated_at)
     VALUES (?1, ?2, ?3)
     ON CONFLICT(year) DO UPDATE SET events = excluded.events, updated_at = excluded.updated_at";

/// A persisted heatwave count.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredYear {
    pub year: i32,
    pub events: u32,
    pub updated_at: DateTime<Utc>,
}

impl StoredYear {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            year: row.get(0)?,
            events: row.get(1)?,
            updated_at: row.get(2)?,
        })
    }
}

/// Stores heatwave counts in a SQLite database, one row per year.
///
/// The connection is opened once and shared behind a mutex; all SQLite work
/// runs on tokio's blocking pool. Call [`SqliteStore::close`] on shutdown to
/// surface errors from closing the connection.
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Opens (or creates) the database file at `path`, creating missing parent
    /// directories and applying the schema.
    pub async fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_dir_exists(parent)
                .await
                .map_err(|e| StoreError::DirCreation(parent.to_path_buf(), e))?;
        }

        let path_buf = path.to_path_buf();
        let conn = task::spawn_blocking(move || {
            let conn =
                Connection::open(&path_buf).map_err(|e| StoreError::Open(path_buf.clone(), e))?;
            conn.execute_batch(create_schema())?;
            Ok::<Connection, StoreError>(conn)
        })
        .await??;
        info!("Opened heatwave database at {}", path.display());
        Ok(Self::from_connection(conn))
    }

    /// Opens a private in-memory database. Its contents are lost when the store is dropped.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(create_schema())?;
        Ok(Self::from_connection(conn))
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    async fn with_connection<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        task::spawn_blocking(move || {
            let guard = conn.lock().map_err(|_| StoreError::Poisoned)?;
            f(&guard).map_err(StoreError::from)
        })
        .await?
    }

    /// Reads back the stored count for `year`, if any.
    pub async fn fetch(&self, year: i32) -> Result<Option<StoredYear>, StoreError> {
        self.with_connection(move |conn| {
            conn.query_row(
                "SELECT year, events, updated_at FROM heatwave_events WHERE year = ?1",
                params![year],
                StoredYear::from_row,
            )
            .optional()
        })
        .await
    }

    /// All stored counts in ascending year order.
    pub async fn all(&self) -> Result<Vec<StoredYear>, StoreError> {
        self.with_connection(|conn| {
            let mut stmt =
                conn.prepare("SELECT year, events, updated_at FROM heatwave_events ORDER BY year")?;
            let rows = stmt.query_map([], StoredYear::from_row)?;
            rows.collect()
        })
        .await
    }

    /// Closes the connection.
    ///
    /// # Errors
    ///
    /// [`StoreError::StillShared`] if a background operation still holds the
    /// connection, or [`StoreError::Sqlite`] if SQLite fails to close it.
    pub fn close(self) -> Result<(), StoreError> {
        let mutex = Arc::try_unwrap(self.conn).map_err(|_| StoreError::StillShared)?;
        let conn = mutex.into_inner().map_err(|_| StoreError::Poisoned)?;
        conn.close().map_err(|(_, e)| StoreError::Sqlite(e))?;
        info!("Closed heatwave database");
        Ok(())
    }
}

impl ResultStore for SqliteStore {
    async fn upsert(&self, result: YearResult) -> Result<(), StoreError> {
        let updated_at = Utc::now();
        self.with_connection(move |conn| {
            conn.execute(
                UPSERT_SQL,
                params![result.year, result.heatwave_events, updated_at],
            )
        })
        .await?;
        debug!(
            "Stored {} heatwave events for {}",
            result.heatwave_events, result.year
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upsert_inserts_then_overwrites() -> Result<(), StoreError> {
        let store = SqliteStore::open_in_memory()?;
        store.upsert(YearResult::new(2020, 2)).await?;
        let first = store.fetch(2020).await?.expect("row for 2020");
        assert_eq!(first.events, 2);

        store.upsert(YearResult::new(2020, 5)).await?;
        let second = store.fetch(2020).await?.expect("row for 2020");
        assert_eq!(second.events, 5);
        assert!(second.updated_at >= first.updated_at);

        assert_eq!(store.all().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_missing_year() -> Result<(), StoreError> {
        let store = SqliteStore::open_in_memory()?;
        assert_eq!(store.fetch(1999).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_all_is_ordered_by_year() -> Result<(), StoreError> {
        let store = SqliteStore::open_in_memory()?;
        for (year, events) in [(2003, 1), (2001, 0), (2002, 4)] {
            store.upsert(YearResult::new(year, events)).await?;
        }
        let years: Vec<(i32, u32)> = store
            .all()
            .await?
            .into_iter()
            .map(|row| (row.year, row.events))
            .collect();
        assert_eq!(years, vec![(2001, 0), (2002, 4), (2003, 1)]);
        Ok(())
    }

    #[tokio::test]
    async fn test_concurrent_writes_to_different_years() -> Result<(), StoreError> {
        let store = Arc::new(SqliteStore::open_in_memory()?);
        let mut handles = Vec::new();
        for year in 2000..2010 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.upsert(YearResult::new(year, (year - 2000) as u32)).await
            }));
        }
        for handle in handles {
            handle.await??;
        }
        assert_eq!(store.all().await?.len(), 10);
        Ok(())
    }

    #[tokio::test]
    async fn test_file_database_survives_reopen() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("heatwave.sqlite");

        let store = SqliteStore::open(&path).await?;
        store.upsert(YearResult::new(2015, 3)).await?;
        store.close()?;

        let reopened = SqliteStore::open(&path).await?;
        let row = reopened.fetch(2015).await?.expect("row for 2015");
        assert_eq!(row.events, 3);
        reopened.close()?;
        Ok(())
    }
}
