use serde::{Deserialize, Serialize};

/// Body of every non-2xx response. `field` is only present for
/// validation failures and names the first field that failed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}
