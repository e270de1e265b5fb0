use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Transaction,
    User,
    Ticket,
}

impl ActivityType {
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityType::Transaction => "💳",
            ActivityType::User => "👤",
            ActivityType::Ticket => "🧾",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Completed,
    Pending,
}

impl ActivityStatus {
    /// Only "success" counts as completed. The backend's full status set is
    /// not documented, so anything else displays as pending.
    pub fn from_api(status: Option<&str>) -> Self {
        match status {
            Some("success") => ActivityStatus::Completed,
            _ => ActivityStatus::Pending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityStatus::Completed => "completed",
            ActivityStatus::Pending => "pending",
        }
    }
}
