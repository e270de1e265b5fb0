use chrono::Utc;
use reqwest::Client;
use teloxide::payloads::SendPhotoSetters;
use teloxide::prelude::{Requester, ResponseResult};
use teloxide::repls::CommandReplExt;
use teloxide::types::{InputFile, Message};
use teloxide::utils::command::BotCommands;
use teloxide::Bot;
use tracing::{info, warn};

use crate::enums::telegram::Command;
use crate::models::RegisterAccountRequest;
use crate::pages::analytics_page::AnalyticsPage;
use crate::pages::dashboard_page::DashboardPage;
use crate::pages::user_detail_page::UserDetailPage;
use crate::pages::users_page::UsersPage;
use crate::repositories::api_repository::ApiRepository;
use crate::repositories::session_repository::SessionRepository;

const WELCOME: &str = "Welcome to the bank admin console.\n\
/dashboard - platform statistics and recent activity\n\
/users - registered users\n\
/user <id> - one user's full detail\n\
/analytics - charts\n\
/register <phone> <name> <bank> - create an account\n\
/help - all commands";

#[derive(Clone)]
pub struct TelegramService {
    bot: Bot,
    api_repository: ApiRepository,
    session_repository: SessionRepository,
}

impl TelegramService {
    pub fn new(
        bot_token: &String,
        api_repository: ApiRepository,
        session_repository: SessionRepository,
    ) -> Self {
        let reqwest_client = Client::new();
        let bot = Bot::with_client(bot_token, reqwest_client);
        Self {
            bot,
            api_repository,
            session_repository,
        }
    }

    pub async fn listen_and_reply(self) {
        Command::repl(self.bot.clone(), move |bot, msg, cmd| {
            TelegramService::answer(self.clone(), bot, msg, cmd)
        })
        .await;
    }

    pub async fn answer(self, bot: Bot, msg: Message, cmd: Command) -> ResponseResult<()> {
        match cmd {
            Command::Start => {
                bot.send_message(msg.chat.id, WELCOME).await?;
            }
            Command::Help => {
                bot.send_message(msg.chat.id, Command::descriptions().to_string())
                    .await?;
            }
            Command::Dashboard => self.show_dashboard(&bot, &msg).await?,
            Command::Users(page) => self.show_users(&bot, &msg, &page).await?,
            Command::User(id) => self.show_user(&bot, &msg, &id).await?,
            Command::Analytics => self.show_analytics(&bot, &msg).await?,
            Command::Register {
                phone_number,
                customer_name,
                bank_name,
            } => {
                self.register(&bot, &msg, phone_number, customer_name, bank_name)
                    .await?
            }
            Command::Retry => self.retry(&bot, &msg).await?,
        }
        Ok(())
    }

    async fn show_dashboard(&self, bot: &Bot, msg: &Message) -> ResponseResult<()> {
        self.remember_view(msg.chat.id.0, "dashboard").await;
        info!("Rendering dashboard for chat {}", msg.chat.id);
        let pending = bot
            .send_message(msg.chat.id, DashboardPage::new().render())
            .await?;
        let page = DashboardPage::load(&self.api_repository).await;
        bot.edit_message_text(msg.chat.id, pending.id, page.render())
            .await?;
        Ok(())
    }

    async fn show_users(&self, bot: &Bot, msg: &Message, page_arg: &str) -> ResponseResult<()> {
        let page_number = page_arg.trim().parse::<usize>().unwrap_or(1).max(1);
        self.remember_view(msg.chat.id.0, &format!("users {}", page_number))
            .await;
        let pending = bot
            .send_message(msg.chat.id, UsersPage::new(page_number).render(Utc::now()))
            .await?;
        let page = UsersPage::load(&self.api_repository, page_number).await;
        bot.edit_message_text(msg.chat.id, pending.id, page.render(Utc::now()))
            .await?;
        Ok(())
    }

    async fn show_user(&self, bot: &Bot, msg: &Message, id_arg: &str) -> ResponseResult<()> {
        let id = match id_arg.trim().parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                bot.send_message(msg.chat.id, "Usage: /user <id>, e.g. /user 42")
                    .await?;
                return Ok(());
            }
        };
        self.remember_view(msg.chat.id.0, &format!("user {}", id))
            .await;
        let pending = bot
            .send_message(msg.chat.id, UserDetailPage::new().render(Utc::now()))
            .await?;
        let page = UserDetailPage::load(&self.api_repository, id).await;
        bot.edit_message_text(msg.chat.id, pending.id, page.render(Utc::now()))
            .await?;
        Ok(())
    }

    async fn show_analytics(&self, bot: &Bot, msg: &Message) -> ResponseResult<()> {
        self.remember_view(msg.chat.id.0, "analytics").await;
        let pending = bot
            .send_message(msg.chat.id, AnalyticsPage::new().render_summary())
            .await?;
        let page = AnalyticsPage::load(&self.api_repository).await;
        bot.edit_message_text(msg.chat.id, pending.id, page.render_summary())
            .await?;

        for (caption, rendered) in page.charts(Utc::now()) {
            match rendered {
                Ok(png) => {
                    bot.send_photo(msg.chat.id, InputFile::memory(png))
                        .caption(caption)
                        .await?;
                }
                Err(e) => {
                    warn!("Chart rendering failed: {}", e);
                    bot.send_message(msg.chat.id, format!("{}: {}", caption, e))
                        .await?;
                }
            }
        }
        Ok(())
    }

    async fn register(
        &self,
        bot: &Bot,
        msg: &Message,
        phone_number: String,
        customer_name: String,
        bank_name: String,
    ) -> ResponseResult<()> {
        if phone_number.is_empty() || customer_name.is_empty() || bank_name.is_empty() {
            bot.send_message(
                msg.chat.id,
                "Usage: /register <phone> <name> <bank>, e.g. /register 08011111111 Adaeze Zenith",
            )
            .await?;
            return Ok(());
        }

        let request = RegisterAccountRequest {
            phone_number,
            customer_name,
            bank_name,
        };
        match self.api_repository.register_account(&request).await {
            Ok(reply) => {
                let text = if reply.response.is_empty() {
                    "Account created.".to_string()
                } else {
                    reply.response
                };
                let prefix = if reply.success { "✅" } else { "❗" };
                bot.send_message(msg.chat.id, format!("{} {}", prefix, text))
                    .await?;
            }
            Err(e) => {
                // Form errors show inline, not as a full panel.
                bot.send_message(msg.chat.id, format!("❗ {}", e)).await?;
            }
        }
        Ok(())
    }

    async fn retry(&self, bot: &Bot, msg: &Message) -> ResponseResult<()> {
        let stored = match self.session_repository.last_view(msg.chat.id.0).await {
            Ok(view) => view,
            Err(e) => {
                warn!("Failed to read last view for chat {}: {:?}", msg.chat.id, e);
                None
            }
        };
        match stored.as_deref() {
            Some("dashboard") => self.show_dashboard(bot, msg).await,
            Some("analytics") => self.show_analytics(bot, msg).await,
            Some(view) if view.starts_with("users") => {
                self.show_users(bot, msg, view.trim_start_matches("users").trim())
                    .await
            }
            Some(view) if view.starts_with("user ") => {
                self.show_user(bot, msg, view.trim_start_matches("user ").trim())
                    .await
            }
            _ => {
                bot.send_message(
                    msg.chat.id,
                    "Nothing to retry yet. Open a view first, e.g. /dashboard.",
                )
                .await?;
                Ok(())
            }
        }
    }

    async fn remember_view(&self, chat_id: i64, command: &str) {
        // Retry memory is best-effort; the view must render either way.
        if let Err(e) = self
            .session_repository
            .remember_last_view(chat_id, command)
            .await
        {
            warn!("Failed to remember last view for chat {}: {:?}", chat_id, e);
        }
    }
}
