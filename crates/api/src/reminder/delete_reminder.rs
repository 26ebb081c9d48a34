use crate::{
    error::UdhaarError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use udhaar_api_structs::delete_reminder::PathParams;
use udhaar_domain::ID;
use udhaar_infra::UdhaarContext;

fn handle_error(e: UseCaseErrors) -> UdhaarError {
    match e {
        UseCaseErrors::StorageError => UdhaarError::InternalError,
    }
}

pub async fn delete_reminder_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<UdhaarContext>,
) -> Result<HttpResponse, UdhaarError> {
    let usecase = DeleteReminderUseCase {
        reminder_id: path_params.reminder_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::NoContent().finish())
        .map_err(handle_error)
}

#[derive(Debug)]
struct DeleteReminderUseCase {
    pub reminder_id: ID,
}

#[derive(Debug)]
enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteReminderUseCase {
    type Response = ();

    type Errors = UseCaseErrors;

    // Deleting an unknown id is a no-op and still succeeds.
    async fn execute(&mut self, ctx: &UdhaarContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .reminders
            .delete(&self.reminder_id)
            .await
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
