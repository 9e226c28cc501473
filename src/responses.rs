use rocket::http::{ContentType, Status};
use rocket::response::{self, Responder};
use rocket::Request;
use serde::{Deserialize, Serialize};

/// Serializes `T` as indented JSON.
#[derive(Debug)]
pub struct IndentedJson<T>(pub T);

impl<'r, T: Serialize> Responder<'r, 'static> for IndentedJson<T> {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let body = serde_json::to_string_pretty(&self.0).map_err(|err| {
            tracing::error!("Failed to serialize response body: {}", err);
            Status::InternalServerError
        })?;
        (ContentType::JSON, body).respond_to(request)
    }
}

/// Error payload: `{"message": "..."}`.
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Message {
            message: message.into(),
        }
    }
}
