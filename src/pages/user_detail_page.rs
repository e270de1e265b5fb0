use chrono::{DateTime, Utc};

use crate::models::user::ApiUser;
use crate::pages::{PageState, SKELETON_LINE};
use crate::repositories::api_repository::ApiRepository;
use crate::services::activity_service;
use crate::utils::errors::render_error_panel;
use crate::utils::format::{format_currency, initials, parse_event_date};

/// The side panel: one user's full profile fetched by id on open.
pub struct UserDetailPage {
    user: PageState<ApiUser>,
}

impl UserDetailPage {
    pub fn new() -> Self {
        Self {
            user: PageState::Loading,
        }
    }

    pub async fn load(repo: &ApiRepository, id: i64) -> Self {
        Self {
            user: PageState::from_result(repo.get_user(id).await),
        }
    }

    pub fn render(&self, now: DateTime<Utc>) -> String {
        let user = match &self.user {
            PageState::Loading => {
                return format!("👤 User Details\n\n{}\n{}", SKELETON_LINE, SKELETON_LINE)
            }
            PageState::Error(error) => {
                return format!("👤 User Details\n\n{}", render_error_panel(error))
            }
            PageState::Ready(user) => user,
        };

        let mut out = format!(
            "👤 User Details\n\n({}) {}\n{}\n",
            initials(&user.customer_name),
            user.customer_name,
            user.phone_number
        );

        if !user.accounts.is_empty() {
            let total: f64 = user.accounts.iter().map(|account| account.balance).sum();
            out.push_str(&format!(
                "\nAccount Balance\nTotal Balance: {}\n{} account{}\n",
                format_currency(total),
                user.accounts.len(),
                if user.accounts.len() == 1 { "" } else { "s" }
            ));
        }

        out.push_str("\nAccount Information\n");
        out.push_str(&format!("Account Number: {}\n", user.account_number));
        out.push_str(&format!("Phone Number: {}\n", user.phone_number));
        out.push_str(&format!(
            "Bank Name: {}\n",
            user.bank_name.as_deref().unwrap_or("N/A")
        ));
        if let Some(registered) = parse_event_date(user.created_at.as_deref()) {
            out.push_str(&format!(
                "Registration Date: {}\n",
                registered.format("%d %b %Y")
            ));
        }

        if !user.accounts.is_empty() {
            out.push_str("\nAll Accounts\n");
            for account in &user.accounts {
                out.push_str(&format!(
                    "{} · {} · {} {}\n",
                    account.account_number,
                    account.bank_name.as_deref().unwrap_or("N/A"),
                    format_currency(account.balance),
                    account.currency
                ));
            }
        }

        out.push_str("\nRecent Activity\n");
        let activities = activity_service::user_activities(user, now);
        if activities.is_empty() {
            out.push_str("No recent activity to display\n");
        } else {
            for item in &activities {
                out.push_str(&format!("{} · {}\n", item.title, item.description));
                if let Some(amount) = &item.amount {
                    out.push_str(&format!(
                        "   {} · {} · {}\n",
                        amount,
                        item.time,
                        item.status.label()
                    ));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn user_fixture() -> ApiUser {
        serde_json::from_value(json!({
            "id": 5,
            "customerName": "Adaeze Obi",
            "phoneNumber": "08011111111",
            "accountNumber": "0011223344",
            "bankName": "Zenith Bank",
            "createdAt": "2025-01-10T08:00:00Z",
            "accounts": [
                { "id": 1, "accountNumber": "0011223344", "balance": 1000.0, "currency": "NGN", "bankName": "Zenith Bank" },
                { "id": 2, "accountNumber": "0011223345", "balance": 500.0, "currency": "NGN" }
            ],
            "transactions": [
                {
                    "id": 10,
                    "receiverName": "Bola Ade",
                    "amount": 200.0,
                    "transactionDate": "2025-06-15T09:00:00Z",
                    "status": "success",
                    "transactionType": "debit",
                    "reference": "TX-1"
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn ready_panel_shows_profile_balance_and_accounts() {
        let page = UserDetailPage {
            user: PageState::Ready(user_fixture()),
        };
        let rendered = page.render(fixed_now());
        assert!(rendered.contains("(AO) Adaeze Obi"));
        assert!(rendered.contains("Total Balance: ₦1,500.00"));
        assert!(rendered.contains("2 accounts"));
        assert!(rendered.contains("Registration Date: 10 Jan 2025"));
        assert!(rendered.contains("0011223345 · N/A · ₦500.00 NGN"));
    }

    #[test]
    fn debit_activity_is_signed_in_the_panel() {
        let page = UserDetailPage {
            user: PageState::Ready(user_fixture()),
        };
        let rendered = page.render(fixed_now());
        assert!(rendered.contains("Bola Ade · Debit • TX-1"));
        assert!(rendered.contains("-₦200.00 · 3 hours ago · completed"));
    }

    #[test]
    fn missing_detail_renders_not_found_panel() {
        let page = UserDetailPage {
            user: PageState::Error(
                "Not Found: The requested resource could not be found.".to_string(),
            ),
        };
        assert!(page.render(fixed_now()).contains("Not Found"));
    }

    #[test]
    fn user_without_activity_says_so() {
        let mut user = user_fixture();
        user.transactions.clear();
        let page = UserDetailPage {
            user: PageState::Ready(user),
        };
        assert!(page
            .render(fixed_now())
            .contains("No recent activity to display"));
    }
}
