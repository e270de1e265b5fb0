use chrono::{DateTime, Utc};

use crate::models::user::UserRecord;
use crate::pages::{PageState, SKELETON_LINE};
use crate::repositories::api_repository::ApiRepository;
use crate::services::user_service;
use crate::utils::errors::render_error_panel;
use crate::utils::format::{format_registration_date, parse_event_date, MISSING_DATE};
use crate::utils::table::Table;

pub const PAGE_SIZE: usize = 10;

/// Users page: the full mapped list plus which slice of it to show.
pub struct UsersPage {
    users: PageState<Vec<UserRecord>>,
    page: usize,
}

impl UsersPage {
    pub fn new(page: usize) -> Self {
        Self {
            users: PageState::Loading,
            page,
        }
    }

    pub async fn load(repo: &ApiRepository, page: usize) -> Self {
        let users = PageState::from_result(
            repo.get_users()
                .await
                .map(|data| user_service::map_user_rows(&data.users)),
        );
        Self { users, page }
    }

    pub fn render(&self, now: DateTime<Utc>) -> String {
        let rows = match &self.users {
            PageState::Loading => return format!("👥 Users\n\n{}\n{}", SKELETON_LINE, SKELETON_LINE),
            PageState::Error(error) => return format!("👥 Users\n\n{}", render_error_panel(error)),
            PageState::Ready(rows) => rows,
        };

        if rows.is_empty() {
            return "👥 Users\n\nNo registered users yet.".to_string();
        }

        let total_pages = (rows.len() + PAGE_SIZE - 1) / PAGE_SIZE;
        let page = self.page.clamp(1, total_pages);
        let start = (page - 1) * PAGE_SIZE;
        let slice = &rows[start..(start + PAGE_SIZE).min(rows.len())];

        let mut table = Table::new(vec!["#", "Name", "Account", "Phone", "Registered"]);
        for (i, row) in slice.iter().enumerate() {
            let registered =
                format_registration_date(parse_event_date(row.registration_date.as_deref()), now);
            table.add_row(vec![
                format!("{:02}", start + i + 1),
                row.name.clone(),
                if row.account_number.is_empty() {
                    MISSING_DATE.to_string()
                } else {
                    row.account_number.clone()
                },
                row.email.clone(),
                registered,
            ]);
        }

        let mut out = format!("👥 Users\n\n{}", table.render());
        out.push_str(&format!(
            "\nPage {}/{} · {} users",
            page,
            total_pages,
            rows.len()
        ));
        if total_pages > 1 {
            out.push_str("\nSend /users <page> for more. /user <id> opens a profile.");
        } else {
            out.push_str("\n/user <id> opens a profile.");
        }
        out
    }
}
