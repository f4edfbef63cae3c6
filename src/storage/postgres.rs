//! PostgreSQL implementation of the storage medium.
//!
//! A single `kv_entries(key, value)` table backs both booking records and
//! check-in ledger entries. The primary-key constraint gives
//! `set_if_absent` its atomicity across gateway processes via
//! `INSERT ... ON CONFLICT DO NOTHING`.

use async_trait::async_trait;
use sqlx::PgPool;

use super::StorageMedium;
use crate::error::GatewayError;

/// PostgreSQL-backed [`StorageMedium`] using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresMedium {
    pool: PgPool,
}

impl PostgresMedium {
    /// Creates a new medium with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the backing table if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::StorageUnavailable`] on database failure.
    pub async fn ensure_schema(&self) -> Result<(), GatewayError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS kv_entries (\
                 key TEXT PRIMARY KEY,\
                 value TEXT NOT NULL,\
                 updated_at TIMESTAMPTZ NOT NULL DEFAULT now()\
             )",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| GatewayError::StorageUnavailable(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl StorageMedium for PostgresMedium {
    async fn get(&self, key: &str) -> Result<Option<String>, GatewayError> {
        sqlx::query_scalar::<_, String>("SELECT value FROM kv_entries WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| GatewayError::StorageUnavailable(e.to_string()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), GatewayError> {
        sqlx::query(
            "INSERT INTO kv_entries (key, value) VALUES ($1, $2) \
             ON CONFLICT (key) DO UPDATE SET value = $2, updated_at = now()",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| GatewayError::StorageUnavailable(e.to_string()))?;
        Ok(())
    }

    async fn set_if_absent(&self, key: &str, value: &str) -> Result<bool, GatewayError> {
        let result = sqlx::query(
            "INSERT INTO kv_entries (key, value) VALUES ($1, $2) \
             ON CONFLICT (key) DO NOTHING",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| GatewayError::StorageUnavailable(e.to_string()))?;
        Ok(result.rows_affected() == 1)
    }

    async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, GatewayError> {
        // LIKE-escape the prefix so `_` in key namespaces matches literally.
        let pattern = format!("{}%", like_escape(prefix));
        sqlx::query_scalar::<_, String>(
            "SELECT key FROM kv_entries WHERE key LIKE $1 ESCAPE '\\'",
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| GatewayError::StorageUnavailable(e.to_string()))
    }
}

/// Escapes LIKE metacharacters (`%`, `_`, `\`) in a literal prefix.
fn like_escape(prefix: &str) -> String {
    let mut escaped = String::with_capacity(prefix.len());
    for ch in prefix.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn like_escape_handles_metacharacters() {
        assert_eq!(like_escape("booking_"), "booking\\_");
        assert_eq!(like_escape("100%"), "100\\%");
        assert_eq!(like_escape("plain"), "plain");
    }
}
