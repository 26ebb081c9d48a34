use super::IReminderRepo;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::error;
use udhaar_domain::{NewReminder, Reminder, ID};

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    id: i32,
    person_name: String,
    phone_number: String,
    amount: i64,
    due_date: DateTime<Utc>,
    is_paid: bool,
}

impl From<ReminderRaw> for Reminder {
    fn from(e: ReminderRaw) -> Self {
        Self {
            id: e.id.into(),
            person_name: e.person_name,
            phone_number: e.phone_number,
            amount: e.amount,
            due_date: e.due_date,
            is_paid: e.is_paid,
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn insert(&self, draft: &NewReminder) -> anyhow::Result<Reminder> {
        let reminder: ReminderRaw = sqlx::query_as(
            r#"
            INSERT INTO reminders(person_name, phone_number, amount, due_date, is_paid)
            VALUES($1, $2, $3, $4, $5)
            RETURNING id, person_name, phone_number, amount, due_date, is_paid
            "#,
        )
        .bind(&draft.person_name)
        .bind(&draft.phone_number)
        .bind(draft.amount)
        .bind(draft.due_date)
        .bind(draft.is_paid)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to insert reminder: {:?}", e);
            e
        })?;

        Ok(reminder.into())
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE reminders
            SET person_name = $2,
            phone_number = $3,
            amount = $4,
            due_date = $5,
            is_paid = $6
            WHERE id = $1
            "#,
        )
        .bind(reminder.id.inner())
        .bind(&reminder.person_name)
        .bind(&reminder.phone_number)
        .bind(reminder.amount)
        .bind(reminder.due_date)
        .bind(reminder.is_paid)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to update reminder: {:?}", e);
            e
        })?;

        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        let reminder: Option<ReminderRaw> = match sqlx::query_as(
            r#"
            SELECT id, person_name, phone_number, amount, due_date, is_paid FROM reminders
            WHERE id = $1
            "#,
        )
        .bind(reminder_id.inner())
        .fetch_optional(&self.pool)
        .await
        {
            Ok(reminder) => reminder,
            Err(e) => {
                error!("Unable to find reminder: {:?}", e);
                return None;
            }
        };
        reminder.map(|r| r.into())
    }

    async fn find_all(&self) -> Vec<Reminder> {
        let reminders: Vec<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT id, person_name, phone_number, amount, due_date, is_paid FROM reminders
            ORDER BY due_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default();

        reminders.into_iter().map(|r| r.into()).collect()
    }

    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            DELETE FROM reminders
            WHERE id = $1
            "#,
        )
        .bind(reminder_id.inner())
        .execute(&self.pool)
        .await
        .map(|_| ())
        .map_err(anyhow::Error::new)
    }
}
