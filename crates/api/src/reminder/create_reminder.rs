use crate::{
    error::UdhaarError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use udhaar_api_structs::create_reminder::{APIResponse, RequestBody};
use udhaar_domain::{NewReminder, Reminder};
use udhaar_infra::UdhaarContext;

fn handle_error(e: UseCaseErrors) -> UdhaarError {
    match e {
        UseCaseErrors::InvalidField { field, message } => UdhaarError::BadClientData {
            message: message.into(),
            field: Some(field.into()),
        },
        UseCaseErrors::StorageError => UdhaarError::InternalError,
    }
}

pub async fn create_reminder_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<UdhaarContext>,
) -> Result<HttpResponse, UdhaarError> {
    let body = body.0;
    let usecase = CreateReminderUseCase {
        person_name: body.person_name,
        phone_number: body.phone_number,
        amount: body.amount,
        due_date: body.due_date,
        is_paid: body.is_paid,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Created().json(APIResponse::new(reminder)))
        .map_err(handle_error)
}

#[derive(Debug)]
struct CreateReminderUseCase {
    pub person_name: Option<String>,
    pub phone_number: Option<String>,
    pub amount: Option<i64>,
    pub due_date: Option<DateTime<Utc>>,
    pub is_paid: Option<bool>,
}

#[derive(Debug)]
enum UseCaseErrors {
    InvalidField {
        field: &'static str,
        message: &'static str,
    },
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseErrors;

    // Fields are checked in the order they appear in the contract and
    // the first failure wins; the store is never touched on failure.
    async fn execute(&mut self, ctx: &UdhaarContext) -> Result<Self::Response, Self::Errors> {
        let person_name = match &self.person_name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            Some(_) => {
                return Err(UseCaseErrors::InvalidField {
                    field: "personName",
                    message: "Person name cannot be empty",
                })
            }
            None => {
                return Err(UseCaseErrors::InvalidField {
                    field: "personName",
                    message: "Person name is required",
                })
            }
        };
        let phone_number = match &self.phone_number {
            Some(phone) if !phone.trim().is_empty() => phone.clone(),
            Some(_) => {
                return Err(UseCaseErrors::InvalidField {
                    field: "phoneNumber",
                    message: "Phone number cannot be empty",
                })
            }
            None => {
                return Err(UseCaseErrors::InvalidField {
                    field: "phoneNumber",
                    message: "Phone number is required",
                })
            }
        };
        let amount = match self.amount {
            Some(amount) if amount >= 1 => amount,
            Some(_) => {
                return Err(UseCaseErrors::InvalidField {
                    field: "amount",
                    message: "Amount must be at least 1",
                })
            }
            None => {
                return Err(UseCaseErrors::InvalidField {
                    field: "amount",
                    message: "Amount is required",
                })
            }
        };
        let due_date = match self.due_date {
            Some(due_date) => due_date,
            None => {
                return Err(UseCaseErrors::InvalidField {
                    field: "dueDate",
                    message: "Due date is required",
                })
            }
        };

        let draft = NewReminder {
            person_name,
            phone_number,
            amount,
            due_date,
            is_paid: self.is_paid.unwrap_or(false),
        };

        ctx.repos
            .reminders
            .insert(&draft)
            .await
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
