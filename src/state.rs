use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use crate::auth::{Argon2Hasher, JwtKeys, UuidGenerator};
use crate::config::AppConfig;
use crate::users::{AccountService, InMemoryUserStore, PgUserStore, UserStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub accounts: AccountService,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let store: Arc<dyn UserStore> = match &config.database_url {
            Some(url) => {
                let db = sqlx::postgres::PgPoolOptions::new()
                    .max_connections(10)
                    .connect(url)
                    .await
                    .context("connect to database")?;

                // Run migrations if present
                if let Err(e) = sqlx::migrate!("./migrations").run(&db).await {
                    warn!(error = %e, "migration failed; continuing");
                }
                info!("using postgres user store");
                Arc::new(PgUserStore::new(db))
            }
            None => {
                warn!("DATABASE_URL not set; accounts are kept in memory only");
                Arc::new(InMemoryUserStore::new())
            }
        };

        Ok(Self::from_parts(config, store))
    }

    pub fn from_parts(config: Arc<AppConfig>, store: Arc<dyn UserStore>) -> Self {
        let accounts = AccountService::new(
            store,
            Arc::new(UuidGenerator),
            Arc::new(JwtKeys::from_config(&config.jwt)),
            Arc::new(Argon2Hasher),
        );
        Self { config, accounts }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        let config = Arc::new(AppConfig {
            database_url: None,
            jwt: crate::config::JwtConfig {
                secret: "test".into(),
                issuer: "test-issuer".into(),
                audience: "test-aud".into(),
                ttl_minutes: 5,
            },
            admin: None,
        });
        Self::from_parts(config, Arc::new(InMemoryUserStore::new()))
    }
}
