use crate::domain::entities::{
    Appointment, AppointmentFilter, AppointmentStatus, BookedSlot, NewAppointment,
};
use crate::domain::ports::appointment_repository::AppointmentRepository;
use crate::domain::services::reference_number::ReferenceKind;
use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use crate::infrastructure::persistence::reference_counters::next_reference;
use crate::infrastructure::persistence::Database;
use async_trait::async_trait;
use sqlx::{any::AnyRow, Row};

const APPOINTMENT_COLUMNS: &str = "id, reference_number, appointment_date, appointment_time, status,
    name, email, phone, gemeente, address, postal_code, project_type, description,
    preferred_contact, locale, admin_notes, created_at, updated_at";

fn appointment_from_row(row: &AnyRow) -> ApiResult<Appointment> {
    let status: String = row.try_get("status")?;

    Ok(Appointment {
        id: row.try_get("id")?,
        reference_number: row.try_get("reference_number")?,
        appointment_date: row.try_get("appointment_date")?,
        appointment_time: row.try_get("appointment_time")?,
        status: status.parse().map_err(ApiError::Internal)?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        gemeente: row.try_get("gemeente")?,
        address: row.try_get("address")?,
        postal_code: row.try_get("postal_code")?,
        project_type: row.try_get("project_type")?,
        description: row.try_get("description")?,
        preferred_contact: row.try_get("preferred_contact")?,
        locale: row.try_get("locale")?,
        admin_notes: row.try_get("admin_notes")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl AppointmentRepository for Database {
    async fn create_appointment(
        &self,
        appointment: &NewAppointment,
        year: i32,
    ) -> ApiResult<Appointment> {
        let mut tx = self.pool.begin().await?;

        let reference_number = next_reference(&mut *tx, ReferenceKind::Appointment, year).await?;

        sqlx::query(
            "INSERT INTO appointments (id, reference_number, appointment_date, appointment_time,
                 status, name, email, phone, gemeente, address, postal_code, project_type,
                 description, preferred_contact, locale, created_at, updated_at)
             VALUES (?, ?, ?, ?, 'PENDING', ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&appointment.id)
        .bind(&reference_number)
        .bind(&appointment.appointment_date)
        .bind(&appointment.appointment_time)
        .bind(&appointment.name)
        .bind(&appointment.email)
        .bind(&appointment.phone)
        .bind(&appointment.gemeente)
        .bind(&appointment.address)
        .bind(&appointment.postal_code)
        .bind(&appointment.project_type)
        .bind(&appointment.description)
        .bind(&appointment.preferred_contact)
        .bind(&appointment.locale)
        .bind(&appointment.created_at)
        .bind(&appointment.created_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            "Appointment created: id={}, reference_number={}, slot={} {}",
            appointment.id,
            reference_number,
            appointment.appointment_date,
            appointment.appointment_time
        );

        Ok(appointment.clone().into_appointment(reference_number))
    }

    async fn get_appointment(&self, id: &str) -> ApiResult<Option<Appointment>> {
        let sql = format!("SELECT {} FROM appointments WHERE id = ?", APPOINTMENT_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(appointment_from_row).transpose()
    }

    async fn list_appointments(&self, filter: &AppointmentFilter) -> ApiResult<Vec<Appointment>> {
        let mut conditions = Vec::new();
        let mut binds: Vec<String> = Vec::new();

        if let Some(status) = filter.status {
            conditions.push("status = ?");
            binds.push(status.as_str().to_string());
        }
        if let Some(from) = &filter.from {
            conditions.push("appointment_date >= ?");
            binds.push(from.clone());
        }
        if let Some(to) = &filter.to {
            conditions.push("appointment_date <= ?");
            binds.push(to.clone());
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            "SELECT {} FROM appointments {} ORDER BY appointment_date ASC, appointment_time ASC",
            APPOINTMENT_COLUMNS, where_clause
        );

        let mut query = sqlx::query(&sql);
        for value in &binds {
            query = query.bind(value);
        }

        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(appointment_from_row).collect()
    }

    async fn list_booked_slots(&self, start: &str, end: &str) -> ApiResult<Vec<BookedSlot>> {
        let rows = sqlx::query(
            "SELECT appointment_date, appointment_time
             FROM appointments
             WHERE appointment_date >= ? AND appointment_date <= ? AND status <> 'CANCELLED'
             ORDER BY appointment_date ASC, appointment_time ASC",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> ApiResult<BookedSlot> {
                Ok(BookedSlot {
                    date: row.try_get("appointment_date")?,
                    time: row.try_get("appointment_time")?,
                })
            })
            .collect()
    }

    async fn is_slot_taken(
        &self,
        date: &str,
        time: &str,
        exclude_id: Option<&str>,
    ) -> ApiResult<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM appointments
             WHERE appointment_date = ? AND appointment_time = ? AND status <> 'CANCELLED'
               AND id <> ?",
        )
        .bind(date)
        .bind(time)
        .bind(exclude_id.unwrap_or(""))
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    async fn update_appointment(&self, appointment: &Appointment) -> ApiResult<()> {
        let result = sqlx::query(
            "UPDATE appointments
             SET status = ?, appointment_date = ?, appointment_time = ?, admin_notes = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(appointment.status.as_str())
        .bind(&appointment.appointment_date)
        .bind(&appointment.appointment_time)
        .bind(&appointment.admin_notes)
        .bind(&appointment.updated_at)
        .bind(&appointment.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!(
                "Appointment {} not found",
                appointment.id
            )));
        }

        Ok(())
    }

    async fn delete_appointment(&self, id: &str) -> ApiResult<bool> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_by_status(&self) -> ApiResult<Vec<(AppointmentStatus, i64)>> {
        let rows = sqlx::query(
            "SELECT status, COUNT(*) AS count FROM appointments GROUP BY status ORDER BY status",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> ApiResult<(AppointmentStatus, i64)> {
                let status: String = row.try_get("status")?;
                let count: i64 = row.try_get("count")?;
                Ok((status.parse().map_err(ApiError::Internal)?, count))
            })
            .collect()
    }

    async fn count_upcoming(&self, from: &str) -> ApiResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM appointments
             WHERE appointment_date >= ? AND status IN ('PENDING', 'CONFIRMED', 'RESCHEDULED')",
        )
        .bind(from)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
