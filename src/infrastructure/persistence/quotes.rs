use crate::domain::entities::{NewQuote, Quote, QuoteFilter, QuoteStatus};
use crate::domain::ports::quote_repository::QuoteRepository;
use crate::domain::services::reference_number::ReferenceKind;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::infrastructure::persistence::reference_counters::next_reference;
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use sqlx::{any::AnyRow, Row};

const QUOTE_COLUMNS: &str = "id, reference_number, status, name, email, phone, gemeente, address,
    services, description, budget, timeline, locale, admin_notes, created_at, updated_at";

fn quote_from_row(row: &AnyRow) -> ApiResult<Quote> {
    let status: String = row.try_get("status")?;
    let services: String = row.try_get("services")?;

    Ok(Quote {
        id: row.try_get("id")?,
        reference_number: row.try_get("reference_number")?,
        status: status.parse().map_err(ApiError::Internal)?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        gemeente: row.try_get("gemeente")?,
        address: row.try_get("address")?,
        services: serde_json::from_str(&services)?,
        description: row.try_get("description")?,
        budget: row.try_get("budget")?,
        timeline: row.try_get("timeline")?,
        locale: row.try_get("locale")?,
        admin_notes: row.try_get("admin_notes")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl QuoteRepository for Database {
    async fn create_quote(&self, quote: &NewQuote, year: i32) -> ApiResult<Quote> {
        let services = serde_json::to_string(&quote.services)?;

        let mut tx = self.pool.begin().await?;

        let reference_number = next_reference(&mut *tx, ReferenceKind::Quote, year).await?;

        sqlx::query(
            "INSERT INTO quotes (id, reference_number, status, name, email, phone, gemeente,
                 address, services, description, budget, timeline, locale, created_at, updated_at)
             VALUES (?, ?, 'NEW', ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&quote.id)
        .bind(&reference_number)
        .bind(&quote.name)
        .bind(&quote.email)
        .bind(&quote.phone)
        .bind(&quote.gemeente)
        .bind(&quote.address)
        .bind(&services)
        .bind(&quote.description)
        .bind(&quote.budget)
        .bind(&quote.timeline)
        .bind(&quote.locale)
        .bind(&quote.created_at)
        .bind(&quote.created_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            "Quote created: id={}, reference_number={}",
            quote.id,
            reference_number
        );

        Ok(quote.clone().into_quote(reference_number))
    }

    async fn get_quote(&self, id: &str) -> ApiResult<Option<Quote>> {
        let sql = format!("SELECT {} FROM quotes WHERE id = ?", QUOTE_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(quote_from_row).transpose()
    }

    async fn list_quotes(&self, filter: &QuoteFilter) -> ApiResult<Vec<Quote>> {
        let rows = if let Some(status) = filter.status {
            let sql = format!(
                "SELECT {} FROM quotes WHERE status = ? ORDER BY created_at DESC",
                QUOTE_COLUMNS
            );
            sqlx::query(&sql)
                .bind(status.as_str())
                .fetch_all(&self.pool)
                .await?
        } else {
            let sql = format!("SELECT {} FROM quotes ORDER BY created_at DESC", QUOTE_COLUMNS);
            sqlx::query(&sql).fetch_all(&self.pool).await?
        };

        rows.iter().map(quote_from_row).collect()
    }

    async fn update_quote(&self, quote: &Quote) -> ApiResult<()> {
        let result = sqlx::query(
            "UPDATE quotes SET status = ?, admin_notes = ?, updated_at = ? WHERE id = ?",
        )
        .bind(quote.status.as_str())
        .bind(&quote.admin_notes)
        .bind(&quote.updated_at)
        .bind(&quote.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!("Quote {} not found", quote.id)));
        }

        Ok(())
    }

    async fn delete_quote(&self, id: &str) -> ApiResult<bool> {
        let result = sqlx::query("DELETE FROM quotes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_by_status(&self) -> ApiResult<Vec<(QuoteStatus, i64)>> {
        let rows =
            sqlx::query("SELECT status, COUNT(*) AS count FROM quotes GROUP BY status ORDER BY status")
                .fetch_all(&self.pool)
                .await?;

        rows.iter()
            .map(|row| -> ApiResult<(QuoteStatus, i64)> {
                let status: String = row.try_get("status")?;
                let count: i64 = row.try_get("count")?;
                Ok((status.parse().map_err(ApiError::Internal)?, count))
            })
            .collect()
    }
}
