use actix_web::{http::StatusCode, HttpResponse};
use thiserror::Error;
use udhaar_api_structs::ApiErrorBody;

#[derive(Error, Debug)]
pub enum UdhaarError {
    #[error("Internal server error")]
    InternalError,
    #[error("Invalid data provided: {message}")]
    BadClientData { message: String, field: Option<String> },
    #[error("{0}")]
    NotFound(String),
}

impl actix_web::error::ResponseError for UdhaarError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Self::BadClientData { message, field } => ApiErrorBody {
                message: message.clone(),
                field: field.clone(),
            },
            Self::NotFound(message) => ApiErrorBody {
                message: message.clone(),
                field: None,
            },
            Self::InternalError => ApiErrorBody {
                message: self.to_string(),
                field: None,
            },
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
