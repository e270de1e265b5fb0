pub mod config;
pub mod controllers;
pub mod enums;
pub mod models;
pub mod pages;
pub mod repositories;
pub mod services;
pub mod utils;

use std::sync::Arc;

use clap::Parser;

use crate::config::AppConfig;
use crate::repositories::api_repository::ApiRepository;
use crate::repositories::session_repository::SessionRepository;
use crate::services::telegram_service::TelegramService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Initialize environment
    dotenv::dotenv().ok();
    let app_config = Arc::new(AppConfig::parse());

    //Instantiate services
    let api_repository = ApiRepository::new(app_config.api_base_url.clone());
    let session_repository = SessionRepository::new(app_config.redis_url.clone()).await?;
    let telegram_service = TelegramService::new(
        &app_config.teloxide_token,
        api_repository,
        session_repository,
    );

    let cloned_telegram_service = telegram_service.clone();
    tokio::spawn(async move {
        cloned_telegram_service.listen_and_reply().await;
    });

    controllers::server::serve(app_config, telegram_service).await
}
