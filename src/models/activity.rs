use serde::{Deserialize, Serialize};

use crate::enums::activity::{ActivityStatus, ActivityType};

/// Uniform entry of the merged activity feed. Transactions, bill payments
/// and user registrations all flatten into this shape before rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub title: String,
    pub description: String,
    pub amount: Option<String>,
    pub time: String,
    pub status: ActivityStatus,
}
