use chrono::Utc;
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, FromRow)]
pub struct BlobRow {
    pub key: String,
    pub data: String,
    pub saved_at: String,
}

pub async fn fetch_blob(db: &SqlitePool, key: &str) -> Result<Option<BlobRow>, sqlx::Error> {
    sqlx::query_as::<_, BlobRow>(
        r#"
        SELECT key, data, saved_at
        FROM schedule_blobs
        WHERE key = ?1
        "#,
    )
    .bind(key)
    .fetch_optional(db)
    .await
}

pub async fn upsert_blob(db: &SqlitePool, key: &str, data: &str) -> Result<(), sqlx::Error> {
    let now = Utc::now().to_rfc3339();

    sqlx::query(
        r#"
        INSERT INTO schedule_blobs (key, data, saved_at)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(key) DO UPDATE SET
            data = excluded.data,
            saved_at = excluded.saved_at
        "#,
    )
    .bind(key)
    .bind(data)
    .bind(now)
    .execute(db)
    .await?;

    Ok(())
}

pub async fn delete_blob(db: &SqlitePool, key: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM schedule_blobs WHERE key = ?1")
        .bind(key)
        .execute(db)
        .await?;

    Ok(result.rows_affected() > 0)
}
