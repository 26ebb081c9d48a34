use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use udhaar_domain::{Reminder, ID};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub person_name: String,
    pub phone_number: String,
    pub amount: i64,
    pub due_date: DateTime<Utc>,
    pub is_paid: bool,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            person_name: reminder.person_name,
            phone_number: reminder.phone_number,
            amount: reminder.amount,
            due_date: reminder.due_date,
            is_paid: reminder.is_paid,
        }
    }
}
