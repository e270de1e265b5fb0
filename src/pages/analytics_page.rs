use chrono::{DateTime, Utc};

use crate::models::user::ApiUser;
use crate::pages::{PageState, SKELETON_LINE};
use crate::repositories::api_repository::ApiRepository;
use crate::services::chart_service;
use crate::utils::errors::render_error_panel;
use crate::utils::format::{format_currency, format_currency_abbrev};
use crate::utils::table::Table;

const CHART_WIDTH: u32 = 900;
const CHART_HEIGHT: u32 = 600;

/// Analytics page: summary tiles, a balance-distribution table, and two
/// charts shipped as images once the data is in.
pub struct AnalyticsPage {
    users: PageState<Vec<ApiUser>>,
}

impl AnalyticsPage {
    pub fn new() -> Self {
        Self {
            users: PageState::Loading,
        }
    }

    pub async fn load(repo: &ApiRepository) -> Self {
        Self {
            users: PageState::from_result(repo.get_users().await.map(|data| data.users)),
        }
    }

    pub fn render_summary(&self) -> String {
        let users = match &self.users {
            PageState::Loading => {
                return format!("📊 Analytics\n\n{}\n{}", SKELETON_LINE, SKELETON_LINE)
            }
            PageState::Error(error) => {
                return format!("📊 Analytics\n\n{}", render_error_panel(error))
            }
            PageState::Ready(users) => users,
        };

        let total_volume: f64 = users
            .iter()
            .flat_map(|user| user.transactions.iter())
            .map(|txn| txn.amount)
            .sum();
        let transaction_count: usize = users.iter().map(|user| user.transactions.len()).sum();
        let bill_payment_count: usize = users.iter().map(|user| user.bill_payments.len()).sum();

        let mut out = format!(
            "📊 Analytics\n\nTransaction Volume: {}\nTotal Transactions: {}\nBill Payments: {}\n",
            format_currency(total_volume),
            transaction_count,
            bill_payment_count
        );

        let points = chart_service::chart_data(users);
        let distributed: f64 = points.iter().map(|p| p.total_balance).sum();
        if distributed > 0.0 {
            out.push_str("\nBalance Distribution\n");
            let mut table = Table::new(vec!["Name", "Balance", "Share"]);
            for point in &points {
                table.add_row(vec![
                    point.name.clone(),
                    format_currency_abbrev(point.total_balance),
                    format!("{:.1}%", point.total_balance / distributed * 100.0),
                ]);
            }
            out.push_str(&table.render());
            out.push('\n');
        } else {
            out.push_str("\nNo balance data available.\n");
        }
        out
    }

    /// Chart images for the populated state, captioned. Empty while the
    /// page is loading or errored.
    pub fn charts(&self, now: DateTime<Utc>) -> Vec<(&'static str, Result<Vec<u8>, String>)> {
        let users = match &self.users {
            PageState::Ready(users) => users,
            _ => return Vec::new(),
        };
        let points = chart_service::chart_data(users);
        let trend = chart_service::trend_data(users, now);
        vec![
            (
                "Top Transaction Volumes",
                chart_service::render_volume_chart(&points, CHART_WIDTH, CHART_HEIGHT),
            ),
            (
                "Transaction Trends (Last 7 Days)",
                chart_service::render_trend_chart(&trend, CHART_WIDTH, CHART_HEIGHT),
            ),
        ]
    }
}
