//! PostgreSQL event store.
//!
//! This module provides PostgreSQL-based persistence using sqlx.  The schema
//! lives in this crate's `migrations/` directory.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use koyomi_core::{Event, EventId, EventInput};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::repository::EventRepository;

const EVENT_COLUMNS: &str =
    "id, title, description, start_date, end_date, all_day, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct EventRow {
    id: i64,
    title: String,
    description: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    all_day: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event {
            id: row.id,
            title: row.title,
            description: row.description,
            start_date: row.start_date,
            end_date: row.end_date,
            all_day: row.all_day,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL-backed [`EventRepository`].
#[derive(Debug, Clone)]
pub struct PostgresEventRepository {
    pool: PgPool,
}

impl PostgresEventRepository {
    /// Connect to a PostgreSQL database.
    ///
    /// # Arguments
    ///
    /// * `url` - PostgreSQL connection URL
    /// * `max_connections` - upper bound of the connection pool
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(|e| StoreError::Connection(e.into()))?;
        info!(max_connections, "connected to PostgreSQL");
        Ok(Self { pool })
    }

    /// Apply pending schema migrations.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!()
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::Migration(e.into()))?;
        info!("database migrations applied");
        Ok(())
    }
}

#[async_trait]
impl EventRepository for PostgresEventRepository {
    async fn all(&self) -> Result<Vec<Event>, StoreError> {
        let sql = format!("SELECT {EVENT_COLUMNS} FROM events ORDER BY start_date ASC, id ASC");
        let rows: Vec<EventRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn get(&self, id: EventId) -> Result<Option<Event>, StoreError> {
        let sql = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1");
        let row: Option<EventRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Event::from))
    }

    async fn in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Event>, StoreError> {
        let sql = format!(
            "SELECT {EVENT_COLUMNS} FROM events \
             WHERE start_date <= $2 AND end_date >= $1 \
             ORDER BY start_date ASC, id ASC"
        );
        let rows: Vec<EventRow> = sqlx::query_as(&sql)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await?;
        debug!(%start, %end, count = rows.len(), "fetched events in range");
        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn create(&self, input: &EventInput) -> Result<Event, StoreError> {
        let sql = format!(
            "INSERT INTO events (title, description, start_date, end_date, all_day) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {EVENT_COLUMNS}"
        );
        let row: EventRow = sqlx::query_as(&sql)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.all_day)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn update(&self, id: EventId, input: &EventInput) -> Result<Option<Event>, StoreError> {
        let sql = format!(
            "UPDATE events \
             SET title = $1, description = $2, start_date = $3, end_date = $4, all_day = $5, \
                 updated_at = NOW() \
             WHERE id = $6 \
             RETURNING {EVENT_COLUMNS}"
        );
        let row: Option<EventRow> = sqlx::query_as(&sql)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.all_day)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Event::from))
    }

    async fn delete(&self, id: EventId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
