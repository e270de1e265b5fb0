pub mod activity_service;
pub mod chart_service;
pub mod register_service;
pub mod stats_service;
pub mod telegram_service;
pub mod user_service;
