use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::telegram_service::TelegramService;

/// Services the HTTP handlers get injected as axum state.
#[derive(Clone)]
pub struct ServiceRegister {
    pub telegram_service: TelegramService,
}

impl ServiceRegister {
    pub async fn new(_app_config: Arc<AppConfig>, telegram_service: TelegramService) -> Self {
        Self { telegram_service }
    }
}
