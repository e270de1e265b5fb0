use chrono::{DateTime, Utc};

use crate::models::user::{ApiUser, UserRecord};
use crate::utils::format::parse_event_date;

/// Project API users into table rows, newest registrations first. The API
/// gives no ordering guarantee, so the sort always happens here. Rows whose
/// registration date does not parse go to the end.
pub fn map_user_rows(users: &[ApiUser]) -> Vec<UserRecord> {
    let mut rows: Vec<(Option<DateTime<Utc>>, UserRecord)> = users
        .iter()
        .map(|user| {
            let registration_date = user
                .created_at
                .clone()
                .or_else(|| user.updated_at.clone());
            let parsed = parse_event_date(registration_date.as_deref());
            let record = UserRecord {
                id: user.id.to_string(),
                name: user.customer_name.clone(),
                account_number: user.account_number.clone(),
                registration_date,
                // The API carries no email; the phone number stands in.
                email: user.phone_number.clone(),
                status: "Active".to_string(),
            };
            (parsed, record)
        })
        .collect();

    // Stable sort: None is Ord-smallest, so descending order lands
    // unparsable dates after every dated row.
    rows.sort_by(|a, b| b.0.cmp(&a.0));
    rows.into_iter().map(|(_, record)| record).collect()
}
