use crate::reminder::{
    CreateReminderInput, DeleteReminderInput, ReminderClient, UpdateReminderInput,
};
use crate::APIResponse;
use std::sync::Mutex;
use udhaar_api_structs::dtos::ReminderDTO;

/// Client side cache over the reminder API following the invalidate
/// and refetch strategy: `list` serves the cached copy when there is
/// one, and every successful mutation drops the cache so the next
/// read fetches fresh data from the server. Mutation results are
/// never merged into the cached list locally, and a failed mutation
/// leaves the cache exactly as it was.
pub struct ReminderCache {
    client: ReminderClient,
    list: Mutex<Option<Vec<ReminderDTO>>>,
}

impl ReminderCache {
    pub fn new(client: ReminderClient) -> Self {
        Self {
            client,
            list: Mutex::new(None),
        }
    }

    pub async fn list(&self) -> APIResponse<Vec<ReminderDTO>> {
        if let Some(cached) = self.list.lock().unwrap().as_ref() {
            return Ok(cached.clone());
        }
        let fresh = self.client.list().await?;
        *self.list.lock().unwrap() = Some(fresh.clone());
        Ok(fresh)
    }

    pub async fn create(&self, input: CreateReminderInput) -> APIResponse<ReminderDTO> {
        let created = self.client.create(input).await?;
        self.invalidate();
        Ok(created)
    }

    pub async fn update(&self, input: UpdateReminderInput) -> APIResponse<ReminderDTO> {
        let updated = self.client.update(input).await?;
        self.invalidate();
        Ok(updated)
    }

    pub async fn delete(&self, input: DeleteReminderInput) -> APIResponse<()> {
        self.client.delete(input).await?;
        self.invalidate();
        Ok(())
    }

    pub fn invalidate(&self) {
        *self.list.lock().unwrap() = None;
    }
}
