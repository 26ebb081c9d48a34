mod inmemory;
mod postgres;

pub use inmemory::InMemoryReminderRepo;
pub use postgres::PostgresReminderRepo;
use udhaar_domain::{NewReminder, Reminder, ID};

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    /// Persists the draft and returns the stored row with its
    /// assigned id.
    async fn insert(&self, draft: &NewReminder) -> anyhow::Result<Reminder>;
    /// Writes the full row back. Merging partial updates into the
    /// existing row is the caller's job.
    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn find(&self, reminder_id: &ID) -> Option<Reminder>;
    /// All reminders ordered by due date descending.
    async fn find_all(&self) -> Vec<Reminder>;
    /// Idempotent. Deleting an id that does not exist is not an error.
    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context;
    use chrono::{Duration, Utc};
    use udhaar_domain::NewReminder;

    fn draft(name: &str, amount: i64, due_in_days: i64, is_paid: bool) -> NewReminder {
        NewReminder {
            person_name: name.into(),
            phone_number: "9876543210".into(),
            amount,
            due_date: Utc::now() + Duration::days(due_in_days),
            is_paid,
        }
    }

    #[tokio::test]
    async fn create_find_and_delete() {
        let ctx = setup_context().await;
        let reminder = ctx
            .repos
            .reminders
            .insert(&draft("Rahul Sharma", 500, 2, false))
            .await
            .unwrap();

        // Round-trip by id
        let res = ctx.repos.reminders.find(&reminder.id).await.unwrap();
        assert_eq!(res, reminder);
        assert_eq!(res.person_name, "Rahul Sharma");
        assert_eq!(res.amount, 500);
        assert!(!res.is_paid);

        // Listed exactly once
        let all = ctx.repos.reminders.find_all().await;
        assert_eq!(all.iter().filter(|r| r.id == reminder.id).count(), 1);

        // Delete
        assert!(ctx.repos.reminders.delete(&reminder.id).await.is_ok());
        assert!(ctx.repos.reminders.find(&reminder.id).await.is_none());
        assert!(ctx
            .repos
            .reminders
            .find_all()
            .await
            .iter()
            .all(|r| r.id != reminder.id));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let ctx = setup_context().await;
        let reminder = ctx
            .repos
            .reminders
            .insert(&draft("Amit Patel", 1200, -1, false))
            .await
            .unwrap();

        assert!(ctx.repos.reminders.delete(&reminder.id).await.is_ok());
        assert!(ctx.repos.reminders.delete(&reminder.id).await.is_ok());
    }

    #[tokio::test]
    async fn save_overwrites_the_row() {
        let ctx = setup_context().await;
        let mut reminder = ctx
            .repos
            .reminders
            .insert(&draft("Sneha Gupta", 250, 5, false))
            .await
            .unwrap();

        reminder.is_paid = true;
        assert!(ctx.repos.reminders.save(&reminder).await.is_ok());

        let res = ctx.repos.reminders.find(&reminder.id).await.unwrap();
        assert!(res.is_paid);
        assert_eq!(res.person_name, "Sneha Gupta");
        assert_eq!(res.amount, 250);
    }

    #[tokio::test]
    async fn assigns_a_fresh_id_to_every_insert() {
        let ctx = setup_context().await;
        let mut ids = Vec::new();
        for i in 0..5 {
            let reminder = ctx
                .repos
                .reminders
                .insert(&draft("Priya Verma", 100 + i, i, false))
                .await
                .unwrap();
            assert!(!ids.contains(&reminder.id));
            ids.push(reminder.id);
        }
    }

    #[tokio::test]
    async fn lists_reminders_by_due_date_descending() {
        let ctx = setup_context().await;
        for days in [1, 9, 4] {
            ctx.repos
                .reminders
                .insert(&draft("Rohan Mehta", 100, days, false))
                .await
                .unwrap();
        }

        let all = ctx.repos.reminders.find_all().await;
        assert!(all.windows(2).all(|w| w[0].due_date >= w[1].due_date));
    }
}
