use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::models::user::{ApiUser, GetUsersResponse};
use crate::models::{ApiResponse, RegisterAccountRequest};

/// Failure taxonomy of the platform API, normalized to display messages.
/// The error panels classify these by substring, so the Display strings
/// are the contract.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network Error: Unable to connect to the server. Please check your internet connection.")]
    Network(#[source] reqwest::Error),
    #[error("{message}")]
    Http { status: StatusCode, message: String },
    #[error("Unexpected response: the server returned data the client could not read.")]
    Decode(#[source] reqwest::Error),
}

#[derive(Clone)]
pub struct ApiRepository {
    client: reqwest::Client,
    base_url: String,
}

impl ApiRepository {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::new();
        Self { client, base_url }
    }

    pub async fn get_users(&self) -> Result<GetUsersResponse, ApiError> {
        self.get("/api/users").await
    }

    pub async fn get_user(&self, id: i64) -> Result<ApiUser, ApiError> {
        self.get(&format!("/api/users/{}", id)).await
    }

    pub async fn register_account(
        &self,
        body: &RegisterAccountRequest,
    ) -> Result<ApiResponse<Value>, ApiError> {
        let url = format!("{}/api/register-account", self.base_url);
        let req = self
            .client
            .post(url)
            .headers(json_headers())
            .json(body)
            .send()
            .await;
        let res = match req {
            Ok(res) => res,
            Err(e) => {
                warn!("register-account request failed: {}", e);
                return Err(ApiError::Network(e));
            }
        };
        decode(res).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let req = self.client.get(url).headers(json_headers()).send().await;
        let res = match req {
            Ok(res) => res,
            Err(e) => {
                warn!("GET {} failed: {}", path, e);
                return Err(ApiError::Network(e));
            }
        };
        let envelope: ApiResponse<T> = decode(res).await?;
        Ok(envelope.data)
    }
}

async fn decode<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, ApiError> {
    let status = res.status();
    if !status.is_success() {
        let message = match res.json::<Value>().await {
            Ok(body) => {
                error_message_from_body(&body).unwrap_or_else(|| default_status_message(status))
            }
            Err(_) => default_status_message(status),
        };
        warn!("API responded {}: {}", status, message);
        return Err(ApiError::Http { status, message });
    }
    res.json::<T>().await.map_err(ApiError::Decode)
}

/// The backend is inconsistent about which field carries the error text.
fn error_message_from_body(body: &Value) -> Option<String> {
    for field in ["message", "response", "error"] {
        if let Some(text) = body.get(field).and_then(Value::as_str) {
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }
    None
}

fn default_status_message(status: StatusCode) -> String {
    match status.as_u16() {
        500 => "Internal Server Error: The server encountered an error while processing your request.".to_string(),
        404 => "Not Found: The requested resource could not be found.".to_string(),
        403 => "Forbidden: You do not have permission to access this resource.".to_string(),
        401 => "Unauthorized: Please check your credentials.".to_string(),
        _ => format!("API request failed: {}", status),
    }
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn body_message_takes_priority_in_field_order() {
        let body = json!({ "error": "last", "message": "first" });
        assert_eq!(error_message_from_body(&body), Some("first".to_string()));

        let body = json!({ "response": "from response field" });
        assert_eq!(
            error_message_from_body(&body),
            Some("from response field".to_string())
        );

        let body = json!({ "message": "" });
        assert_eq!(error_message_from_body(&body), None);

        let body = json!({ "unrelated": true });
        assert_eq!(error_message_from_body(&body), None);
    }

    #[test]
    fn canned_messages_for_known_statuses() {
        assert!(default_status_message(StatusCode::INTERNAL_SERVER_ERROR)
            .starts_with("Internal Server Error"));
        assert!(default_status_message(StatusCode::NOT_FOUND).starts_with("Not Found"));
        assert!(default_status_message(StatusCode::FORBIDDEN).starts_with("Forbidden"));
        assert!(default_status_message(StatusCode::UNAUTHORIZED).starts_with("Unauthorized"));
        assert_eq!(
            default_status_message(StatusCode::BAD_GATEWAY),
            "API request failed: 502 Bad Gateway"
        );
    }
}
