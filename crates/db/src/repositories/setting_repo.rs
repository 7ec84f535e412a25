//! Repository for the `website_settings` table.
//!
//! Settings form a flat key/value map with one row per key.

use std::collections::BTreeMap;

use sqlx::PgPool;

use crate::models::setting::Setting;

const COLUMNS: &str = "id, setting_key, setting_value, created_at, updated_at";

const UPSERT: &str = "INSERT INTO website_settings (setting_key, setting_value) \
                      VALUES ($1, $2) \
                      ON CONFLICT (setting_key) \
                      DO UPDATE SET setting_value = EXCLUDED.setting_value, updated_at = NOW()";

pub struct SettingRepo;

impl SettingRepo {
    /// All setting rows ordered by key.
    pub async fn list(pool: &PgPool) -> Result<Vec<Setting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM website_settings ORDER BY setting_key");
        sqlx::query_as::<_, Setting>(&query).fetch_all(pool).await
    }

    /// All settings as a `key -> value` map.
    pub async fn as_map(pool: &PgPool) -> Result<BTreeMap<String, String>, sqlx::Error> {
        let rows = Self::list(pool).await?;
        Ok(rows
            .into_iter()
            .map(|row| (row.setting_key, row.setting_value))
            .collect())
    }

    pub async fn find_by_key(pool: &PgPool, key: &str) -> Result<Option<Setting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM website_settings WHERE setting_key = $1");
        sqlx::query_as::<_, Setting>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// Upsert every pair inside one transaction.
    ///
    /// Either all pairs are persisted or, on the first failure, none are:
    /// the transaction is rolled back when it is dropped uncommitted.
    pub async fn bulk_upsert(
        pool: &PgPool,
        entries: &[(String, String)],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        for (key, value) in entries {
            sqlx::query(UPSERT)
                .bind(key)
                .bind(value)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await
    }
}
