use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use udhaar_api_structs::ApiErrorBody;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum APIErrorVariant {
    Network,
    MalformedResponse,
    BadClientData,
    NotFound,
    UnexpectedStatusCode,
}

/// Error returned by every SDK call. `field` carries the name of the
/// first invalid field when the server rejected the request with a
/// validation error.
#[derive(Debug)]
pub struct APIError {
    pub variant: APIErrorVariant,
    pub message: String,
    pub field: Option<String>,
}

pub type APIResponse<T> = Result<T, APIError>;

pub(crate) struct BaseClient {
    address: String,
    client: Client,
}

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            address,
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.address, path)
    }

    async fn check_status_code(
        &self,
        res: Result<Response, reqwest::Error>,
        expected_status_code: StatusCode,
    ) -> Result<Response, APIError> {
        let res = res.map_err(|e| APIError {
            variant: APIErrorVariant::Network,
            message: format!("Unable to reach server: {}", e),
            field: None,
        })?;

        let status = res.status();
        if status == expected_status_code {
            return Ok(res);
        }

        let variant = match status {
            StatusCode::BAD_REQUEST => APIErrorVariant::BadClientData,
            StatusCode::NOT_FOUND => APIErrorVariant::NotFound,
            _ => APIErrorVariant::UnexpectedStatusCode,
        };
        match res.json::<ApiErrorBody>().await {
            Ok(body) => Err(APIError {
                variant,
                message: body.message,
                field: body.field,
            }),
            Err(_) => Err(APIError {
                variant,
                message: format!("Unexpected status code: {}", status),
                field: None,
            }),
        }
    }

    async fn parse_body<T: DeserializeOwned>(&self, res: Response) -> APIResponse<T> {
        res.json::<T>().await.map_err(|_| APIError {
            variant: APIErrorVariant::MalformedResponse,
            message: "Unable to parse the response from the server".into(),
            field: None,
        })
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.client.get(self.url(&path)).send().await;
        let res = self.check_status_code(res, expected_status_code).await?;
        self.parse_body(res).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        body: B,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.client.post(self.url(&path)).json(&body).send().await;
        let res = self.check_status_code(res, expected_status_code).await?;
        self.parse_body(res).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        body: B,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self.client.patch(self.url(&path)).json(&body).send().await;
        let res = self.check_status_code(res, expected_status_code).await?;
        self.parse_body(res).await
    }

    /// The delete endpoint answers with an empty body, so only the
    /// status code is checked.
    pub async fn delete(&self, path: String, expected_status_code: StatusCode) -> APIResponse<()> {
        let res = self.client.delete(self.url(&path)).send().await;
        self.check_status_code(res, expected_status_code)
            .await
            .map(|_| ())
    }
}
