pub mod analytics_page;
pub mod dashboard_page;
pub mod user_detail_page;
pub mod users_page;

/// What one page region holds across its fetch-then-render cycle. A region
/// starts Loading, renders a skeleton, and moves to exactly one of Error or
/// Ready once its awaited fetch settles.
#[derive(Debug)]
pub enum PageState<T> {
    Loading,
    Error(String),
    Ready(T),
}

impl<T> PageState<T> {
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => PageState::Ready(data),
            Err(e) => PageState::Error(e.to_string()),
        }
    }
}

/// Text stand-in for the skeleton placeholders the loading state shows.
pub const SKELETON_LINE: &str = "░░░░░░░░░░░░░░░░░░░░";
