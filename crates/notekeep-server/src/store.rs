//! SQLite-backed note store.
//!
//! `SqliteNotes` owns an optional pool: a store built with
//! [`SqliteNotes::uninitialized`] (or one that has been closed) answers every
//! call with `StoreUnavailable`, which the HTTP layer turns into a 500. Query
//! failures on a live pool surface as `BadQuery`.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteValueRef};
use sqlx::{Row, TypeInfo, Value, ValueRef};

use notekeep_core::analytics::NoteAggregates;
use notekeep_core::error::{NotekeepError, Result};
use notekeep_core::note::{Note, NoteInput};
use notekeep_core::scalar::AggregateScalar;

use crate::config::DatabaseSection;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL DEFAULT '',
    created_at TEXT DEFAULT CURRENT_TIMESTAMP,
    updated_at TEXT DEFAULT CURRENT_TIMESTAMP
)
"#;

const NOTE_COLUMNS: &str = "id, title, content, created_at, updated_at";

#[derive(Debug, sqlx::FromRow)]
struct NoteRow {
    id: i64,
    title: String,
    content: String,
    created_at: Option<String>,
    updated_at: Option<String>,
}

impl From<NoteRow> for Note {
    fn from(r: NoteRow) -> Self {
        Note {
            id: r.id,
            title: r.title,
            content: r.content,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

pub struct SqliteNotes {
    pool: Option<SqlitePool>,
}

impl SqliteNotes {
    /// Open the pool and migrate the schema.
    pub async fn connect(cfg: &DatabaseSection) -> Result<Self> {
        let opts = SqliteConnectOptions::from_str(&cfg.url)
            .map_err(|e| NotekeepError::StoreUnavailable(format!("invalid database url: {e}")))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(cfg.effective_max_connections())
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opts)
            .await
            .map_err(|e| NotekeepError::StoreUnavailable(format!("connect failed: {e}")))?;
        tracing::info!(url = %cfg.url, "database connected");

        let store = Self { pool: Some(pool) };
        store.migrate().await?;
        tracing::info!("notes schema migrated");
        Ok(store)
    }

    /// A store with no backing pool. Every operation fails with
    /// `StoreUnavailable`.
    pub fn uninitialized() -> Self {
        Self { pool: None }
    }

    pub fn pool(&self) -> Result<&SqlitePool> {
        match &self.pool {
            Some(p) if !p.is_closed() => Ok(p),
            _ => Err(NotekeepError::store_not_initialized()),
        }
    }

    pub async fn close(&self) {
        if let Some(p) = &self.pool {
            p.close().await;
            tracing::info!("database closed");
        }
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(SCHEMA)
            .execute(self.pool()?)
            .await
            .map_err(query_error)?;
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Note>> {
        let rows = sqlx::query_as::<_, NoteRow>(&format!(
            "SELECT {NOTE_COLUMNS} FROM notes ORDER BY id"
        ))
        .fetch_all(self.pool()?)
        .await
        .map_err(query_error)?;
        Ok(rows.into_iter().map(Note::from).collect())
    }

    pub async fn get(&self, id: i64) -> Result<Note> {
        sqlx::query_as::<_, NoteRow>(&format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = ?"))
            .bind(id)
            .fetch_optional(self.pool()?)
            .await
            .map_err(query_error)?
            .map(Note::from)
            .ok_or(NotekeepError::NotFound)
    }

    pub async fn create(&self, input: NoteInput) -> Result<Note> {
        let row = sqlx::query_as::<_, NoteRow>(&format!(
            "INSERT INTO notes (title, content) VALUES (?, ?) RETURNING {NOTE_COLUMNS}"
        ))
        .bind(input.title)
        .bind(input.content)
        .fetch_one(self.pool()?)
        .await
        .map_err(query_error)?;
        Ok(row.into())
    }

    pub async fn update(&self, id: i64, input: NoteInput) -> Result<Note> {
        sqlx::query_as::<_, NoteRow>(&format!(
            "UPDATE notes SET title = ?, content = ?, updated_at = CURRENT_TIMESTAMP \
             WHERE id = ? RETURNING {NOTE_COLUMNS}"
        ))
        .bind(input.title)
        .bind(input.content)
        .bind(id)
        .fetch_optional(self.pool()?)
        .await
        .map_err(query_error)?
        .map(Note::from)
        .ok_or(NotekeepError::NotFound)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let done = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(self.pool()?)
            .await
            .map_err(query_error)?;
        if done.rows_affected() == 0 {
            return Err(NotekeepError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl NoteAggregates for SqliteNotes {
    async fn count(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM notes")
            .fetch_one(self.pool()?)
            .await
            .map_err(query_error)
    }

    async fn average_content_length(&self) -> Result<AggregateScalar> {
        let row = sqlx::query("SELECT AVG(LENGTH(content)) AS avg FROM notes")
            .fetch_one(self.pool()?)
            .await
            .map_err(query_error)?;
        let raw = row.try_get_raw(0).map_err(query_error)?;
        Ok(decode_scalar(raw))
    }
}

/// Tag a value by its runtime SQLite datatype.
fn decode_scalar(raw: SqliteValueRef<'_>) -> AggregateScalar {
    if raw.is_null() {
        return AggregateScalar::Null;
    }
    let type_name = raw.type_info().name().to_string();
    let value = ValueRef::to_owned(&raw);

    let decoded = match type_name.as_str() {
        "REAL" => value.try_decode::<f64>().map(AggregateScalar::Float),
        "INTEGER" => value.try_decode::<i64>().map(AggregateScalar::Integer),
        "TEXT" => value.try_decode::<String>().map(AggregateScalar::Text),
        "BLOB" => value.try_decode::<Vec<u8>>().map(AggregateScalar::Bytes),
        _ => Ok(AggregateScalar::Other(type_name.clone())),
    };
    decoded.unwrap_or_else(|e| {
        tracing::debug!(%type_name, error = %e, "aggregate value did not decode");
        AggregateScalar::Other(type_name.clone())
    })
}

fn query_error(e: sqlx::Error) -> NotekeepError {
    match e {
        sqlx::Error::PoolClosed => NotekeepError::store_not_initialized(),
        other => NotekeepError::BadQuery(other.to_string()),
    }
}
