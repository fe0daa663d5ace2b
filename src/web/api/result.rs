use rocket::serde::json::Json;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Response shape shared by the wake endpoints: the HTTP status is always 200
/// and the body carries either a `message` or an `error` field.
#[derive(Debug, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum WakeResponse {
    Sent { message: String },
    Failed { error: String },
}

pub fn handle(result: Result<String, String>) -> Json<WakeResponse> {
    match result {
        Ok(message) => Json(WakeResponse::Sent { message }),
        Err(error) => Json(WakeResponse::Failed { error }),
    }
}
