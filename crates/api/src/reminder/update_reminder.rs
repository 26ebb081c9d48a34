use crate::{
    error::UdhaarError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use udhaar_api_structs::update_reminder::{APIResponse, PathParams, RequestBody};
use udhaar_domain::{Reminder, ID};
use udhaar_infra::UdhaarContext;

fn handle_error(e: UseCaseErrors) -> UdhaarError {
    match e {
        UseCaseErrors::NotFound => UdhaarError::NotFound("Reminder not found".into()),
        UseCaseErrors::InvalidField { field, message } => UdhaarError::BadClientData {
            message: message.into(),
            field: Some(field.into()),
        },
        UseCaseErrors::StorageError => UdhaarError::InternalError,
    }
}

pub async fn update_reminder_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<UdhaarContext>,
) -> Result<HttpResponse, UdhaarError> {
    let body = body.0;
    let usecase = UpdateReminderUseCase {
        reminder_id: path_params.reminder_id,
        person_name: body.person_name,
        phone_number: body.phone_number,
        amount: body.amount,
        due_date: body.due_date,
        is_paid: body.is_paid,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(handle_error)
}

#[derive(Debug)]
struct UpdateReminderUseCase {
    pub reminder_id: ID,
    pub person_name: Option<String>,
    pub phone_number: Option<String>,
    pub amount: Option<i64>,
    pub due_date: Option<DateTime<Utc>>,
    pub is_paid: Option<bool>,
}

#[derive(Debug)]
enum UseCaseErrors {
    NotFound,
    InvalidField {
        field: &'static str,
        message: &'static str,
    },
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseErrors;

    // Only the supplied fields are merged into the stored row; an
    // invalid supplied field fails the whole request before any write.
    async fn execute(&mut self, ctx: &UdhaarContext) -> Result<Self::Response, Self::Errors> {
        let mut reminder = match ctx.repos.reminders.find(&self.reminder_id).await {
            Some(reminder) => reminder,
            None => return Err(UseCaseErrors::NotFound),
        };

        if let Some(person_name) = &self.person_name {
            if person_name.trim().is_empty() {
                return Err(UseCaseErrors::InvalidField {
                    field: "personName",
                    message: "Person name cannot be empty",
                });
            }
            reminder.person_name = person_name.clone();
        }
        if let Some(phone_number) = &self.phone_number {
            if phone_number.trim().is_empty() {
                return Err(UseCaseErrors::InvalidField {
                    field: "phoneNumber",
                    message: "Phone number cannot be empty",
                });
            }
            reminder.phone_number = phone_number.clone();
        }
        if let Some(amount) = self.amount {
            if amount < 1 {
                return Err(UseCaseErrors::InvalidField {
                    field: "amount",
                    message: "Amount must be at least 1",
                });
            }
            reminder.amount = amount;
        }
        if let Some(due_date) = self.due_date {
            reminder.due_date = due_date;
        }
        if let Some(is_paid) = self.is_paid {
            reminder.is_paid = is_paid;
        }

        ctx.repos
            .reminders
            .save(&reminder)
            .await
            .map(|_| reminder)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Duration;
    use udhaar_domain::NewReminder;
    use udhaar_infra::setup_context;

    fn update_nothing(reminder_id: ID) -> UpdateReminderUseCase {
        UpdateReminderUseCase {
            reminder_id,
            person_name: None,
            phone_number: None,
            amount: None,
            due_date: None,
            is_paid: None,
        }
    }

    #[actix_web::test]
    async fn update_nonexisting_reminder_is_not_found() {
        let ctx = setup_context().await;
        let mut usecase = update_nothing(ID::from(999));
        usecase.is_paid = Some(true);

        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseErrors::NotFound)
        ));
        assert!(ctx.repos.reminders.find_all().await.is_empty());
    }

    #[actix_web::test]
    async fn updating_is_paid_alone_leaves_the_other_fields_unchanged() {
        let ctx = setup_context().await;
        let created = ctx
            .repos
            .reminders
            .insert(&NewReminder {
                person_name: "Rahul Sharma".into(),
                phone_number: "9876543210".into(),
                amount: 500,
                due_date: Utc::now() + Duration::days(2),
                is_paid: false,
            })
            .await
            .unwrap();

        let mut usecase = update_nothing(created.id);
        usecase.is_paid = Some(true);
        let updated = usecase.execute(&ctx).await.unwrap();

        assert!(updated.is_paid);
        assert_eq!(updated.person_name, created.person_name);
        assert_eq!(updated.phone_number, created.phone_number);
        assert_eq!(updated.amount, created.amount);
        assert_eq!(updated.due_date, created.due_date);
    }

    #[actix_web::test]
    async fn rejects_an_invalid_present_field_without_writing() {
        let ctx = setup_context().await;
        let created = ctx
            .repos
            .reminders
            .insert(&NewReminder {
                person_name: "Amit Patel".into(),
                phone_number: "9123456789".into(),
                amount: 1200,
                due_date: Utc::now(),
                is_paid: false,
            })
            .await
            .unwrap();

        let mut usecase = update_nothing(created.id);
        usecase.amount = Some(0);
        usecase.is_paid = Some(true);

        match usecase.execute(&ctx).await {
            Err(UseCaseErrors::InvalidField { field, .. }) => assert_eq!(field, "amount"),
            res => panic!("Expected amount validation error, got {:?}", res),
        }

        let stored = ctx.repos.reminders.find(&created.id).await.unwrap();
        assert_eq!(stored.amount, 1200);
        assert!(!stored.is_paid);
    }
}
