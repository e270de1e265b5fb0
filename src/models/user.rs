use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUser {
    pub id: i64,
    pub customer_name: String,
    pub phone_number: String,
    #[serde(default)]
    pub account_number: String,
    pub bank_name: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(default)]
    pub accounts: Vec<AccountData>,
    #[serde(default)]
    pub transactions: Vec<TransactionData>,
    #[serde(default)]
    pub bill_payments: Vec<BillPaymentData>,
    // Shape is not pinned down by the backend, kept opaque.
    #[serde(default)]
    pub beneficiaries: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountData {
    pub id: i64,
    #[serde(default)]
    pub account_number: String,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub currency: String,
    pub bank_name: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionData {
    pub id: i64,
    #[serde(default)]
    pub receiver_name: String,
    pub bank_name: Option<String>,
    pub bank_account: Option<String>,
    pub account_number: Option<String>,
    #[serde(default)]
    pub amount: f64,
    pub balance_before: Option<f64>,
    pub balance_after: Option<f64>,
    pub transaction_date: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub transaction_type: String,
    #[serde(default)]
    pub reference: String,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPaymentData {
    pub id: i64,
    #[serde(default)]
    pub payment_type: String,
    #[serde(default)]
    pub provider: String,
    pub phone_number: Option<String>,
    pub meter_number: Option<String>,
    pub account_number: Option<String>,
    #[serde(default)]
    pub amount: f64,
    pub balance_before: Option<f64>,
    pub balance_after: Option<f64>,
    pub payment_date: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub reference: String,
    pub description: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUsersResponse {
    #[serde(default)]
    pub total_users: i64,
    #[serde(default)]
    pub users: Vec<ApiUser>,
}

/// Row shape the users table works with, projected from [`ApiUser`].
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub account_number: String,
    pub registration_date: Option<String>,
    pub email: String,
    pub status: String,
}
