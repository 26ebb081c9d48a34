use crate::{APIResponse, BaseClient};
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use std::sync::Arc;
use udhaar_api_structs::*;
use udhaar_domain::ID;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

pub struct CreateReminderInput {
    pub person_name: String,
    pub phone_number: String,
    pub amount: i64,
    pub due_date: DateTime<Utc>,
    pub is_paid: Option<bool>,
}

pub struct UpdateReminderInput {
    pub reminder_id: ID,
    pub person_name: Option<String>,
    pub phone_number: Option<String>,
    pub amount: Option<i64>,
    pub due_date: Option<DateTime<Utc>>,
    pub is_paid: Option<bool>,
}

pub struct DeleteReminderInput {
    pub reminder_id: ID,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn list(&self) -> APIResponse<list_reminders::APIResponse> {
        self.base.get("reminders".into(), StatusCode::OK).await
    }

    pub async fn create(
        &self,
        input: CreateReminderInput,
    ) -> APIResponse<create_reminder::APIResponse> {
        let body = create_reminder::RequestBody {
            person_name: Some(input.person_name),
            phone_number: Some(input.phone_number),
            amount: Some(input.amount),
            due_date: Some(input.due_date),
            is_paid: input.is_paid,
        };
        self.base
            .post(body, "reminders".into(), StatusCode::CREATED)
            .await
    }

    pub async fn update(
        &self,
        input: UpdateReminderInput,
    ) -> APIResponse<update_reminder::APIResponse> {
        let body = update_reminder::RequestBody {
            person_name: input.person_name,
            phone_number: input.phone_number,
            amount: input.amount,
            due_date: input.due_date,
            is_paid: input.is_paid,
        };
        self.base
            .patch(
                body,
                format!("reminders/{}", input.reminder_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, input: DeleteReminderInput) -> APIResponse<()> {
        self.base
            .delete(
                format!("reminders/{}", input.reminder_id),
                StatusCode::NO_CONTENT,
            )
            .await
    }
}
