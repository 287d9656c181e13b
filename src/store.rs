//! Persistence of the schedule as one opaque JSON blob.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tokio::sync::Mutex;
use tracing::warn;

use crate::db::repository;
use crate::error::AppError;
use crate::models::Schedule;

pub const STORAGE_KEY: &str = "grade-horaria";

#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Read the saved schedule. Missing or unreadable data loads as empty.
    async fn load(&self) -> Result<Schedule, AppError>;
    async fn save(&self, schedule: &Schedule) -> Result<(), AppError>;
    async fn clear(&self) -> Result<(), AppError>;
}

fn parse_blob(data: &str) -> Schedule {
    serde_json::from_str(data).unwrap_or_else(|e| {
        warn!("stored schedule is unreadable, starting empty: {}", e);
        Vec::new()
    })
}

pub struct SqliteScheduleStore {
    db: SqlitePool,
    key: String,
}

impl SqliteScheduleStore {
    pub fn new(db: SqlitePool) -> Self {
        Self {
            db,
            key: STORAGE_KEY.to_string(),
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db
    }
}

#[async_trait]
impl ScheduleStore for SqliteScheduleStore {
    async fn load(&self) -> Result<Schedule, AppError> {
        let row = repository::fetch_blob(&self.db, &self.key).await?;
        Ok(row.map(|r| parse_blob(&r.data)).unwrap_or_default())
    }

    async fn save(&self, schedule: &Schedule) -> Result<(), AppError> {
        let data = serde_json::to_string(schedule)?;
        repository::upsert_blob(&self.db, &self.key, &data).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), AppError> {
        repository::delete_blob(&self.db, &self.key).await?;
        Ok(())
    }
}

/// Keeps the serialized blob in memory. Used by tests.
#[derive(Default)]
pub struct MemoryScheduleStore {
    blob: Mutex<Option<String>>,
}

impl MemoryScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(data: impl Into<String>) -> Self {
        Self {
            blob: Mutex::new(Some(data.into())),
        }
    }

    pub async fn blob(&self) -> Option<String> {
        self.blob.lock().await.clone()
    }
}

#[async_trait]
impl ScheduleStore for MemoryScheduleStore {
    async fn load(&self) -> Result<Schedule, AppError> {
        Ok(self.blob.lock().await.as_deref().map(parse_blob).unwrap_or_default())
    }

    async fn save(&self, schedule: &Schedule) -> Result<(), AppError> {
        *self.blob.lock().await = Some(serde_json::to_string(schedule)?);
        Ok(())
    }

    async fn clear(&self) -> Result<(), AppError> {
        *self.blob.lock().await = None;
        Ok(())
    }
}
