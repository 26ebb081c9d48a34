use crate::{
    error::UdhaarError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use udhaar_api_structs::dtos::ReminderDTO;
use udhaar_api_structs::list_reminders::APIResponse;
use udhaar_domain::Reminder;
use udhaar_infra::UdhaarContext;

fn handle_error(e: UseCaseErrors) -> UdhaarError {
    match e {}
}

pub async fn list_reminders_controller(
    ctx: web::Data<UdhaarContext>,
) -> Result<HttpResponse, UdhaarError> {
    let usecase = ListRemindersUseCase;

    execute(usecase, &ctx)
        .await
        .map(|reminders| {
            HttpResponse::Ok().json(
                reminders
                    .into_iter()
                    .map(ReminderDTO::new)
                    .collect::<APIResponse>(),
            )
        })
        .map_err(handle_error)
}

#[derive(Debug)]
struct ListRemindersUseCase;

#[derive(Debug)]
enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for ListRemindersUseCase {
    type Response = Vec<Reminder>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &UdhaarContext) -> Result<Self::Response, Self::Errors> {
        Ok(ctx.repos.reminders.find_all().await)
    }
}
