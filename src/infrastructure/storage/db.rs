use crate::domain::error::TranslateError;
use crate::domain::model::{CacheKey, TranslationRecord};
use crate::domain::traits::CacheBackend;
use async_trait::async_trait;
use std::path::Path;
use tokio_rusqlite::Connection;

pub async fn init_database(db_path: &Path) -> Result<Connection, TranslateError> {
    let db = Connection::open(db_path.to_path_buf()).await?;
    create_schema(&db).await?;
    Ok(db)
}

/// In-memory database, used when no file should be touched.
pub async fn init_memory_database() -> Result<Connection, TranslateError> {
    let db = Connection::open_in_memory().await?;
    create_schema(&db).await?;
    Ok(db)
}

async fn create_schema(db: &Connection) -> Result<(), TranslateError> {
    db.call(|conn| {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS translations (
                cache_key TEXT PRIMARY KEY,
                data BLOB NOT NULL,
                compressed_size INTEGER NOT NULL,
                original_size INTEGER NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        Ok::<_, rusqlite::Error>(())
    })
    .await?;

    Ok(())
}

/// SQLite cache store. Records are kept as zstd-compressed JSON and never expire.
pub struct SqliteCache {
    conn: Connection,
}

impl SqliteCache {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl CacheBackend for SqliteCache {
    async fn get(&self, key: &CacheKey) -> Result<Option<TranslationRecord>, TranslateError> {
        query_record(&self.conn, key.as_str()).await
    }

    async fn put(&self, key: &CacheKey, record: &TranslationRecord) -> Result<(), TranslateError> {
        insert_record(&self.conn, key.as_str(), record).await
    }

    async fn len(&self) -> Result<usize, TranslateError> {
        let count = self
            .conn
            .call(|conn| {
                let count: i64 =
                    conn.query_row("SELECT COUNT(*) FROM translations", [], |row| row.get(0))?;
                Ok::<_, rusqlite::Error>(count)
            })
            .await?;
        Ok(count.max(0) as usize)
    }
}

async fn query_record(
    db: &Connection,
    key: &str,
) -> Result<Option<TranslationRecord>, TranslateError> {
    use rusqlite::OptionalExtension;
    use std::io::Cursor;
    use tokio_rusqlite::params;
    use zstd::stream::decode_all;

    let key_string = key.to_string();
    let result = db
        .call(move |conn| {
            conn.query_row(
                "SELECT data FROM translations WHERE cache_key = ?",
                params![key_string],
                |row| {
                    let compressed_data: Vec<u8> = row.get(0)?;
                    let decompressed = decode_all(Cursor::new(&compressed_data)).map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(
                            0,
                            rusqlite::types::Type::Blob,
                            Box::new(e),
                        )
                    })?;
                    let record: TranslationRecord =
                        serde_json::from_slice(&decompressed).map_err(|e| {
                            rusqlite::Error::FromSqlConversionFailure(
                                0,
                                rusqlite::types::Type::Blob,
                                Box::new(e),
                            )
                        })?;
                    Ok(record)
                },
            )
            .optional()
        })
        .await?;

    Ok(result)
}

async fn insert_record(
    db: &Connection,
    key: &str,
    record: &TranslationRecord,
) -> Result<(), TranslateError> {
    use std::io::Cursor;
    use tokio_rusqlite::params;
    use zstd::stream::encode_all;

    let serialized = serde_json::to_vec(record)?;
    let compressed = encode_all(Cursor::new(&serialized), 0)?;
    let now = chrono::Utc::now().timestamp();

    let key_string = key.to_string();
    let compressed_len = compressed.len();
    let original_len = serialized.len();

    // Last write wins; created_at survives a rewrite of the same key
    db.call(move |conn| {
        conn.execute(
            "INSERT INTO translations (cache_key, data, compressed_size, original_size, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)
             ON CONFLICT(cache_key) DO UPDATE SET
                data = excluded.data,
                compressed_size = excluded.compressed_size,
                original_size = excluded.original_size,
                updated_at = excluded.updated_at",
            params![key_string, compressed, compressed_len, original_len, now],
        )
    })
    .await?;

    Ok(())
}
