use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};

/// A payment that someone owes the user: who, how much, and by when.
/// Rows are owned by the record store; the id is assigned on insert
/// and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    pub person_name: String,
    pub phone_number: String,
    pub amount: i64,
    pub due_date: DateTime<Utc>,
    pub is_paid: bool,
}

/// The fields of a `Reminder` before the store has assigned an id.
#[derive(Debug, Clone)]
pub struct NewReminder {
    pub person_name: String,
    pub phone_number: String,
    pub amount: i64,
    pub due_date: DateTime<Utc>,
    pub is_paid: bool,
}

impl Reminder {
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.is_paid && self.due_date < now
    }
}

impl Entity for Reminder {
    fn id(&self) -> ID {
        self.id
    }
}
