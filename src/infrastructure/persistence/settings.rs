use crate::domain::entities::Setting;
use crate::domain::ports::settings_repository::SettingsRepository;
use crate::infrastructure::http::middleware::error::ApiResult;
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use sqlx::{any::AnyRow, Row};

fn setting_from_row(row: &AnyRow) -> ApiResult<Setting> {
    let value: String = row.try_get("value")?;

    Ok(Setting {
        key: row.try_get("key")?,
        value: serde_json::from_str(&value)?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl SettingsRepository for Database {
    async fn list_settings(&self) -> ApiResult<Vec<Setting>> {
        let rows = sqlx::query("SELECT key, value, updated_at FROM settings ORDER BY key ASC")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(setting_from_row).collect()
    }

    async fn get_setting(&self, key: &str) -> ApiResult<Option<Setting>> {
        let row = sqlx::query("SELECT key, value, updated_at FROM settings WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(setting_from_row).transpose()
    }

    async fn set_setting(&self, key: &str, value: &serde_json::Value) -> ApiResult<()> {
        let now = chrono::Utc::now().to_rfc3339();
        let value = serde_json::to_string(value)?;

        sqlx::query(
            "INSERT INTO settings (key, value, updated_at)
             VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET
                 value = excluded.value,
                 updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(&value)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
