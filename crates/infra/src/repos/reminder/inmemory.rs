use super::IReminderRepo;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Mutex;
use udhaar_domain::{Entity, NewReminder, Reminder, ID};

/// Keeps reminders in a plain `Vec` behind a mutex. Used by the test
/// suites and by local runs without a `DATABASE_URL`.
pub struct InMemoryReminderRepo {
    reminders: Mutex<Vec<Reminder>>,
    next_id: AtomicI32,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

impl Default for InMemoryReminderRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, draft: &NewReminder) -> anyhow::Result<Reminder> {
        let reminder = Reminder {
            id: ID::from(self.next_id.fetch_add(1, Ordering::SeqCst)),
            person_name: draft.person_name.clone(),
            phone_number: draft.phone_number.clone(),
            amount: draft.amount,
            due_date: draft.due_date,
            is_paid: draft.is_paid,
        };
        self.reminders.lock().unwrap().push(reminder.clone());
        Ok(reminder)
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        let mut reminders = self.reminders.lock().unwrap();
        for existing in reminders.iter_mut() {
            if existing.id() == reminder.id() {
                *existing = reminder.clone();
            }
        }
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        self.reminders
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id() == *reminder_id)
            .cloned()
    }

    async fn find_all(&self) -> Vec<Reminder> {
        let mut reminders = self.reminders.lock().unwrap().clone();
        reminders.sort_by(|a, b| b.due_date.cmp(&a.due_date));
        reminders
    }

    async fn delete(&self, reminder_id: &ID) -> anyhow::Result<()> {
        self.reminders
            .lock()
            .unwrap()
            .retain(|r| r.id() != *reminder_id);
        Ok(())
    }
}
