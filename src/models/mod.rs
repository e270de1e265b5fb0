use serde::{Deserialize, Serialize};
pub mod activity;
pub mod chart;
pub mod user;

/// Envelope every platform endpoint wraps its payload in.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub response: String,
    pub data: T,
}

#[derive(Debug, Serialize, Clone)]
pub struct RegisterAccountRequest {
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    #[serde(rename = "customerName")]
    pub customer_name: String,
    #[serde(rename = "bankName")]
    pub bank_name: String,
}
