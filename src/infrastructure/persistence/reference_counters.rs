use crate::domain::services::reference_number::{format_reference, ReferenceKind};
use crate::infrastructure::http::middleware::error::ApiResult;
use sqlx::{AnyConnection, Row};

fn source_table(kind: ReferenceKind) -> &'static str {
    match kind {
        ReferenceKind::Appointment => "appointments",
        ReferenceKind::Quote => "quotes",
    }
}

/// Allocate the next reference number for `kind` in `year`.
///
/// Single upsert on `reference_counters`, so concurrent callers are
/// serialized by the database. A year's counter row is seeded from the
/// highest reference already present in the source table. Call inside the
/// transaction that inserts the row carrying the reference so a failed
/// insert does not consume a number.
pub async fn next_reference(
    conn: &mut AnyConnection,
    kind: ReferenceKind,
    year: i32,
) -> ApiResult<String> {
    let prefix = kind.year_prefix(year);

    let sql = format!(
        "INSERT INTO reference_counters (kind, year, last_value)
         VALUES (?, ?, COALESCE(
             (SELECT MAX(CAST(substr(reference_number, ?) AS INTEGER))
              FROM {} WHERE reference_number LIKE ?), 0) + 1)
         ON CONFLICT(kind, year) DO UPDATE SET last_value = reference_counters.last_value + 1
         RETURNING last_value",
        source_table(kind)
    );

    let row = sqlx::query(&sql)
        .bind(kind.as_str())
        .bind(year as i64)
        .bind(prefix.len() as i64 + 1)
        .bind(format!("{}%", prefix))
        .fetch_one(&mut *conn)
        .await?;

    let sequence: i64 = row.try_get("last_value")?;

    Ok(format_reference(kind, year, sequence))
}
