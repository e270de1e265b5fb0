use chrono::Utc;
use futures_util::future;

use crate::models::activity::ActivityItem;
use crate::pages::{PageState, SKELETON_LINE};
use crate::repositories::api_repository::ApiRepository;
use crate::services::activity_service;
use crate::services::stats_service::{self, DashboardStats};
use crate::utils::errors::render_error_panel;
use crate::utils::format::format_currency;

pub const ACTIVITY_FEED_ITEMS: usize = 5;

/// Home page: stat cards plus the recent-activity feed. The two regions
/// are disjoint, fetch independently and may settle differently.
pub struct DashboardPage {
    stats: PageState<DashboardStats>,
    activities: PageState<Vec<ActivityItem>>,
}

impl DashboardPage {
    pub fn new() -> Self {
        Self {
            stats: PageState::Loading,
            activities: PageState::Loading,
        }
    }

    pub async fn load(repo: &ApiRepository) -> Self {
        let (stats_result, feed_result) = future::join(repo.get_users(), repo.get_users()).await;
        let now = Utc::now();

        let stats =
            PageState::from_result(stats_result.map(|data| stats_service::dashboard_stats(&data.users)));
        // The activity region degrades to the bundled feed instead of an
        // error panel; the stats region still reports its own failure.
        let activities = match feed_result {
            Ok(data) => PageState::Ready(activity_service::recent_activities(
                &data.users,
                ACTIVITY_FEED_ITEMS,
                now,
            )),
            Err(_) => PageState::Ready(activity_service::fallback_activities(ACTIVITY_FEED_ITEMS)),
        };

        Self { stats, activities }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("🏦 Dashboard\n\n");

        match &self.stats {
            PageState::Loading => {
                out.push_str(SKELETON_LINE);
                out.push('\n');
                out.push_str(SKELETON_LINE);
                out.push('\n');
            }
            PageState::Error(error) => {
                out.push_str(&render_error_panel(error));
                out.push('\n');
            }
            PageState::Ready(stats) => {
                out.push_str(&format!("👥 Total Users: {}\n", stats.total_users));
                out.push_str(&format!(
                    "💳 Transactions: {}\n",
                    format_currency(stats.total_transactions)
                ));
                out.push_str(&format!(
                    "💰 Total Balance: {}\n",
                    format_currency(stats.total_balance)
                ));
                out.push_str(&format!("🗂 Total Accounts: {}\n", stats.total_accounts));
                out.push_str(&format!("🔔 Total Activities: {}\n", stats.total_activities));
            }
        }

        out.push_str("\nRecent Activity\n");
        match &self.activities {
            PageState::Loading => {
                out.push_str(SKELETON_LINE);
                out.push('\n');
            }
            PageState::Error(error) => {
                out.push_str(&render_error_panel(error));
                out.push('\n');
            }
            PageState::Ready(items) if items.is_empty() => {
                out.push_str("No recent activity to display\n");
            }
            PageState::Ready(items) => {
                for item in items {
                    out.push_str(&render_activity_line(item));
                }
            }
        }
        out
    }
}

pub fn render_activity_line(item: &ActivityItem) -> String {
    let mut line = format!("{} {} · {}\n", item.kind.icon(), item.title, item.description);
    match &item.amount {
        Some(amount) => line.push_str(&format!(
            "   {} · {} · {}\n",
            amount,
            item.time,
            item.status.label()
        )),
        None => line.push_str(&format!("   {} · {}\n", item.time, item.status.label())),
    }
    line
}
