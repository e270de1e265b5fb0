use chrono::{DateTime, Utc};

use crate::enums::activity::{ActivityStatus, ActivityType};
use crate::models::activity::ActivityItem;
use crate::models::user::ApiUser;
use crate::utils::format::{
    capitalize, format_currency, format_relative_time, format_signed_currency, parse_event_date,
};

/// The side panel shows at most this many entries for one user.
pub const SIDE_PANEL_MAX_ITEMS: usize = 6;

// Bundled feed for the dashboard variant that renders without a live API.
const FALLBACK_FEED: &str = include_str!("../../data/recent_activities.json");

struct DatedActivity {
    date: Option<DateTime<Utc>>,
    item: ActivityItem,
}

/// Merge transactions, bill payments and registration events across all
/// users into one feed, newest first, truncated to `max_items`. Entries
/// without a parsable timestamp sort last.
pub fn recent_activities(
    users: &[ApiUser],
    max_items: usize,
    now: DateTime<Utc>,
) -> Vec<ActivityItem> {
    let mut activities: Vec<DatedActivity> = Vec::new();

    for user in users {
        for txn in &user.transactions {
            let is_credit = txn.transaction_type == "credit";
            let date = parse_event_date(
                txn.transaction_date
                    .as_deref()
                    .or(txn.created_at.as_deref()),
            );
            activities.push(DatedActivity {
                date,
                item: ActivityItem {
                    id: format!("txn-{}", txn.id),
                    kind: ActivityType::Transaction,
                    title: if is_credit {
                        "Payment Received".to_string()
                    } else {
                        "Payment Sent".to_string()
                    },
                    description: format!(
                        "{} {}",
                        if is_credit { "From" } else { "To" },
                        txn.receiver_name
                    ),
                    amount: Some(format_currency(txn.amount)),
                    time: format_relative_time(date, now),
                    status: ActivityStatus::from_api(txn.status.as_deref()),
                },
            });
        }

        for payment in &user.bill_payments {
            let date = parse_event_date(
                payment
                    .payment_date
                    .as_deref()
                    .or(payment.created_at.as_deref()),
            );
            activities.push(DatedActivity {
                date,
                item: ActivityItem {
                    id: format!("bill-{}", payment.id),
                    kind: ActivityType::Ticket,
                    title: format!("{} Payment", capitalize(&payment.payment_type)),
                    description: format!("{} - {}", payment.provider, payment.reference),
                    amount: Some(format_currency(payment.amount)),
                    time: format_relative_time(date, now),
                    status: ActivityStatus::from_api(payment.status.as_deref()),
                },
            });
        }

        if user.created_at.is_some() {
            let date = parse_event_date(user.created_at.as_deref());
            activities.push(DatedActivity {
                date,
                item: ActivityItem {
                    id: format!("user-{}", user.id),
                    kind: ActivityType::User,
                    title: "New User Registration".to_string(),
                    description: format!("{} registered", user.customer_name),
                    amount: None,
                    time: format_relative_time(date, now),
                    status: ActivityStatus::Completed,
                },
            });
        }
    }

    sorted_items(activities, max_items)
}

/// One user's merged feed for the side panel: transactions and bill
/// payments only, debits rendered negative, capped at six entries.
pub fn user_activities(user: &ApiUser, now: DateTime<Utc>) -> Vec<ActivityItem> {
    let mut activities: Vec<DatedActivity> = Vec::new();

    for txn in &user.transactions {
        let is_credit = txn.transaction_type == "credit";
        let date = parse_event_date(
            txn.transaction_date
                .as_deref()
                .or(txn.created_at.as_deref()),
        );
        let title = if txn.receiver_name.is_empty() {
            "Transaction".to_string()
        } else {
            txn.receiver_name.clone()
        };
        activities.push(DatedActivity {
            date,
            item: ActivityItem {
                id: format!("txn-{}", txn.id),
                kind: ActivityType::Transaction,
                title,
                description: format!(
                    "{} • {}",
                    if is_credit { "Credit" } else { "Debit" },
                    txn.reference
                ),
                amount: Some(format_signed_currency(txn.amount, !is_credit)),
                time: format_relative_time(date, now),
                status: ActivityStatus::from_api(txn.status.as_deref()),
            },
        });
    }

    for payment in &user.bill_payments {
        let date = parse_event_date(
            payment
                .payment_date
                .as_deref()
                .or(payment.created_at.as_deref()),
        );
        activities.push(DatedActivity {
            date,
            item: ActivityItem {
                id: format!("bill-{}", payment.id),
                kind: ActivityType::Ticket,
                title: format!(
                    "{} • {}",
                    payment.payment_type.to_uppercase(),
                    payment.provider
                ),
                description: format!("Reference • {}", payment.reference),
                amount: Some(format_currency(payment.amount)),
                time: format_relative_time(date, now),
                status: ActivityStatus::from_api(payment.status.as_deref()),
            },
        });
    }

    sorted_items(activities, SIDE_PANEL_MAX_ITEMS)
}

/// The bundled feed, already formatted, for when the live one is
/// unreachable.
pub fn fallback_activities(max_items: usize) -> Vec<ActivityItem> {
    let mut items: Vec<ActivityItem> = serde_json::from_str(FALLBACK_FEED).unwrap_or_default();
    items.truncate(max_items);
    items
}

fn sorted_items(mut activities: Vec<DatedActivity>, max_items: usize) -> Vec<ActivityItem> {
    activities.sort_by(|a, b| b.date.cmp(&a.date));
    activities.truncate(max_items);
    activities.into_iter().map(|a| a.item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn users_fixture() -> Vec<ApiUser> {
        serde_json::from_value(json!([
            {
                "id": 1,
                "customerName": "Adaeze Obi",
                "phoneNumber": "08011111111",
                "createdAt": "2025-06-10T09:00:00Z",
                "transactions": [
                    {
                        "id": 10,
                        "receiverName": "Bola Ade",
                        "amount": 1500000.0,
                        "transactionDate": "2025-06-15T10:00:00Z",
                        "status": "success",
                        "transactionType": "credit",
                        "reference": "TX-1001"
                    },
                    {
                        "id": 11,
                        "receiverName": "Chi Eze",
                        "amount": 200.0,
                        "transactionDate": "2025-06-14T10:00:00Z",
                        "status": "processing",
                        "transactionType": "debit",
                        "reference": "TX-1002"
                    }
                ],
                "billPayments": [
                    {
                        "id": 20,
                        "paymentType": "electricity",
                        "provider": "IKEDC",
                        "amount": 50.0,
                        "paymentDate": "2025-06-15T11:30:00Z",
                        "status": "success",
                        "reference": "BP-2001"
                    }
                ]
            },
            {
                "id": 2,
                "customerName": "Bola Ade",
                "phoneNumber": "08022222222",
                "createdAt": "2025-06-15T11:45:00Z"
            }
        ]))
        .unwrap()
    }

    #[test]
    fn feed_merges_all_sources_newest_first() {
        let items = recent_activities(&users_fixture(), 10, fixed_now());
        // 2 transactions + 1 bill + 2 registrations
        assert_eq!(items.len(), 5);
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["user-2", "bill-20", "txn-10", "txn-11", "user-1"]
        );
    }

    #[test]
    fn feed_truncates_to_max_items() {
        let items = recent_activities(&users_fixture(), 2, fixed_now());
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "user-2");
        assert_eq!(items[1].id, "bill-20");
    }

    #[test]
    fn credit_and_debit_get_direction_titles() {
        let items = recent_activities(&users_fixture(), 10, fixed_now());
        let credit = items.iter().find(|i| i.id == "txn-10").unwrap();
        assert_eq!(credit.title, "Payment Received");
        assert_eq!(credit.description, "From Bola Ade");
        assert_eq!(credit.amount.as_deref(), Some("₦1,500,000.00"));
        assert_eq!(credit.status, ActivityStatus::Completed);

        let debit = items.iter().find(|i| i.id == "txn-11").unwrap();
        assert_eq!(debit.title, "Payment Sent");
        assert_eq!(debit.description, "To Chi Eze");
        assert_eq!(debit.status, ActivityStatus::Pending);
    }

    #[test]
    fn bill_payments_use_capitalized_type_and_provider() {
        let items = recent_activities(&users_fixture(), 10, fixed_now());
        let bill = items.iter().find(|i| i.id == "bill-20").unwrap();
        assert_eq!(bill.title, "Electricity Payment");
        assert_eq!(bill.description, "IKEDC - BP-2001");
        assert_eq!(bill.kind, ActivityType::Ticket);
    }

    #[test]
    fn undated_entries_sort_after_dated_ones() {
        let mut users = users_fixture();
        users[0].transactions[0].transaction_date = Some("garbage".to_string());
        users[0].transactions[0].created_at = None;
        let items = recent_activities(&users, 10, fixed_now());
        assert_eq!(items.last().unwrap().id, "txn-10");
        assert_eq!(items.last().unwrap().time, "—");
    }

    #[test]
    fn side_panel_caps_at_six_and_signs_debits() {
        let mut users = users_fixture();
        // Pad the first user beyond the cap.
        for n in 0..6 {
            let mut extra = users[0].transactions[1].clone();
            extra.id = 100 + n;
            users[0].transactions.push(extra);
        }
        let items = user_activities(&users[0], fixed_now());
        assert_eq!(items.len(), SIDE_PANEL_MAX_ITEMS);

        let debit = items.iter().find(|i| i.id == "txn-11").unwrap();
        assert_eq!(debit.amount.as_deref(), Some("-₦200.00"));
        assert_eq!(debit.description, "Debit • TX-1002");

        let credit = items.iter().find(|i| i.id == "txn-10").unwrap();
        assert_eq!(credit.amount.as_deref(), Some("₦1,500,000.00"));
        assert_eq!(credit.title, "Bola Ade");
    }

    #[test]
    fn side_panel_excludes_registration_events() {
        let users = users_fixture();
        let items = user_activities(&users[1], fixed_now());
        assert!(items.is_empty());
    }

    #[test]
    fn fallback_feed_parses_and_truncates() {
        let items = fallback_activities(3);
        assert_eq!(items.len(), 3);
        assert!(!items[0].id.is_empty());
    }
}
