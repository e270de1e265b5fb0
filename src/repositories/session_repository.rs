use anyhow::Context;
use bb8_redis::bb8::Pool;
use bb8_redis::redis::{AsyncCommands, RedisError};
use bb8_redis::RedisConnectionManager;
use tracing::warn;

const REDIS_PREFIX: &str = "view";
// A stale retry target is worse than none.
const LAST_VIEW_TTL_SECONDS: usize = 86400;

/// Remembers each chat's last view-producing command so /retry can re-run it.
#[derive(Clone)]
pub struct SessionRepository {
    redis_client: Pool<RedisConnectionManager>,
}

impl SessionRepository {
    pub async fn new(redis_url: String) -> anyhow::Result<Self> {
        let redis_manager =
            RedisConnectionManager::new(redis_url).context("Invalid redis URL")?;
        let redis_pool = Pool::builder()
            .build(redis_manager)
            .await
            .context("Failed to build redis pool")?;
        Ok(Self {
            redis_client: redis_pool,
        })
    }

    pub async fn remember_last_view(&self, chat_id: i64, command: &str) -> anyhow::Result<()> {
        let mut redis_conn = self.redis_client.get().await?;
        let res: Result<(), RedisError> = redis_conn
            .set_ex(
                format!("{}:{}", REDIS_PREFIX, chat_id),
                command,
                LAST_VIEW_TTL_SECONDS,
            )
            .await;
        match res {
            Ok(_) => Ok(()),
            Err(e) => {
                warn!("Failed to store last view for chat {}: {:?}", chat_id, e);
                Err(e.into())
            }
        }
    }

    pub async fn last_view(&self, chat_id: i64) -> anyhow::Result<Option<String>> {
        let mut redis_conn = self.redis_client.get().await?;
        let res: Option<String> = redis_conn
            .get(format!("{}:{}", REDIS_PREFIX, chat_id))
            .await?;
        Ok(res)
    }
}
