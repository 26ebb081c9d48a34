mod base;
mod cache;
mod reminder;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
pub use cache::ReminderCache;
pub use reminder::{
    CreateReminderInput, DeleteReminderInput, ReminderClient, UpdateReminderInput,
};
pub use status::StatusClient;
use std::sync::Arc;

// Domain
pub use udhaar_api_structs::dtos::ReminderDTO as Reminder;
pub use udhaar_domain::ID;

/// Udhaar Server SDK
///
/// The SDK contains methods for interacting with the Udhaar payment
/// reminders server API.
#[derive(Clone)]
pub struct UdhaarSDK {
    pub reminder: ReminderClient,
    pub status: StatusClient,
}

impl UdhaarSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let reminder = ReminderClient::new(base.clone());
        let status = StatusClient::new(base);

        Self { reminder, status }
    }
}
