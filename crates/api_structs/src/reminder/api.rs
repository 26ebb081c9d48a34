use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dtos::ReminderDTO;
use udhaar_domain::ID;

pub mod list_reminders {
    use super::*;

    pub type APIResponse = Vec<ReminderDTO>;
}

pub mod create_reminder {
    use super::*;

    /// Every field is optional at the wire level so that a missing
    /// field can be reported by name instead of failing body
    /// deserialization wholesale.
    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub person_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub phone_number: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub amount: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub due_date: Option<DateTime<Utc>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_paid: Option<bool>,
    }

    pub type APIResponse = ReminderDTO;
}

pub mod update_reminder {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    /// A field that is absent is left untouched; a field that is
    /// present is validated with the same rules as creation.
    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub person_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub phone_number: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub amount: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub due_date: Option<DateTime<Utc>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_paid: Option<bool>,
    }

    pub type APIResponse = ReminderDTO;
}

pub mod delete_reminder {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }
}
