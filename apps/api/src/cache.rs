//! Content-addressable response cache.
//!
//! Keys are the SHA-256 of the normalized (sorted-key, compact) request JSON;
//! the model id is a separate column so a model upgrade never serves stale
//! results. Writes are upserts: identical input overwrites rather than
//! duplicating, and the last concurrent writer wins (an accepted race,
//! since results for identical input are equivalent).
//!
//! Every failure path degrades: a broken pool at startup disables the cache,
//! read errors report a miss, write errors report false. The engine never
//! fails because the cache did.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use tracing::{error, info, warn};

/// Snapshot of the cache table, logged at startup.
#[derive(Debug, Clone)]
pub struct CacheStats {
    pub total_entries: i64,
    pub latest_entry: Option<DateTime<Utc>>,
}

/// Hex SHA-256 over the canonical serialization of the payload.
/// `serde_json`'s default object map is sorted, so identical normalized
/// input always produces an identical key.
pub fn cache_key(payload: &serde_json::Value) -> String {
    let serialized = serde_json::to_string(payload).unwrap_or_default();
    let digest = Sha256::digest(serialized.as_bytes());
    format!("{digest:x}")
}

#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the cached payload, or None on miss, disabled cache, or error.
    async fn get(&self, key: &str, model: &str) -> Option<String>;
    /// Stores (upserting on conflict). Returns false when skipped or failed.
    async fn set(&self, key: &str, model: &str, payload: &str) -> bool;
}

/// Postgres-backed store behind a bounded connection pool.
pub struct PgCacheStore {
    pool: Option<PgPool>,
}

impl PgCacheStore {
    /// Connects, provisions the table, and runs a test query. Any failure
    /// (or `enabled = false`) yields a disabled store instead of an error.
    pub async fn connect(database_url: &str, pool_size: u32, enabled: bool) -> Self {
        if !enabled {
            info!("response cache disabled by configuration");
            return Self { pool: None };
        }

        let pool = match PgPoolOptions::new()
            .max_connections(pool_size)
            .connect(database_url)
            .await
        {
            Ok(pool) => pool,
            Err(e) => {
                warn!("cache unavailable, continuing without caching: {e}");
                return Self { pool: None };
            }
        };

        let schema = r#"
            CREATE TABLE IF NOT EXISTS response_cache (
                cache_key TEXT NOT NULL,
                model TEXT NOT NULL,
                response_json JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                UNIQUE (cache_key, model)
            )
        "#;
        if let Err(e) = sqlx::query(schema).execute(&pool).await {
            warn!("cache schema provisioning failed, continuing without caching: {e}");
            return Self { pool: None };
        }

        match sqlx::query("SELECT 1").execute(&pool).await {
            Ok(_) => {
                info!("response cache initialized");
                Self { pool: Some(pool) }
            }
            Err(e) => {
                warn!("cache test query failed, continuing without caching: {e}");
                Self { pool: None }
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    pub async fn stats(&self) -> Option<CacheStats> {
        let pool = self.pool.as_ref()?;
        let row = sqlx::query(
            "SELECT COUNT(*) AS total_entries, MAX(updated_at) AS latest_entry FROM response_cache",
        )
        .fetch_one(pool)
        .await
        .ok()?;

        Some(CacheStats {
            total_entries: row.try_get("total_entries").unwrap_or(0),
            latest_entry: row.try_get("latest_entry").ok().flatten(),
        })
    }
}

#[async_trait]
impl CacheStore for PgCacheStore {
    async fn get(&self, key: &str, model: &str) -> Option<String> {
        let pool = self.pool.as_ref()?;

        let result = sqlx::query(
            r#"
            SELECT response_json::text AS response_json
            FROM response_cache
            WHERE cache_key = $1 AND model = $2
            "#,
        )
        .bind(key)
        .bind(model)
        .fetch_optional(pool)
        .await;

        match result {
            Ok(Some(row)) => {
                info!("cache hit for key {}", &key[..16.min(key.len())]);
                row.try_get::<String, _>("response_json").ok()
            }
            Ok(None) => {
                info!("cache miss for key {}", &key[..16.min(key.len())]);
                None
            }
            Err(e) => {
                warn!("cache read failed: {e}");
                None
            }
        }
    }

    async fn set(&self, key: &str, model: &str, payload: &str) -> bool {
        let Some(pool) = self.pool.as_ref() else {
            return false;
        };

        let result = sqlx::query(
            r#"
            INSERT INTO response_cache (cache_key, model, response_json)
            VALUES ($1, $2, $3::jsonb)
            ON CONFLICT (cache_key, model)
            DO UPDATE SET
                response_json = EXCLUDED.response_json,
                updated_at = NOW()
            "#,
        )
        .bind(key)
        .bind(model)
        .bind(payload)
        .execute(pool)
        .await;

        match result {
            Ok(_) => {
                info!("cache write for key {}", &key[..16.min(key.len())]);
                true
            }
            Err(e) => {
                error!("cache write failed: {e}");
                false
            }
        }
    }
}

#[cfg(test)]
pub mod testing {
    //! In-memory store used by pipeline and round-trip tests.

    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MemoryCacheStore {
        entries: Mutex<HashMap<(String, String), String>>,
    }

    #[async_trait]
    impl CacheStore for MemoryCacheStore {
        async fn get(&self, key: &str, model: &str) -> Option<String> {
            self.entries
                .lock()
                .unwrap()
                .get(&(key.to_string(), model.to_string()))
                .cloned()
        }

        async fn set(&self, key: &str, model: &str, payload: &str) -> bool {
            self.entries
                .lock()
                .unwrap()
                .insert((key.to_string(), model.to_string()), payload.to_string());
            true
        }
    }
}
