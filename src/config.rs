use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

/// Credentials for the admin account created at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminSeed {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// `None` runs the service on the in-memory store.
    pub database_url: Option<String>,
    pub jwt: JwtConfig,
    pub admin: Option<AdminSeed>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").filter(|v| !v.is_empty());
        let jwt = JwtConfig {
            secret: lookup("JWT_SECRET").context("JWT_SECRET must be set")?,
            issuer: lookup("JWT_ISSUER").unwrap_or_else(|| "accounts".into()),
            audience: lookup("JWT_AUDIENCE").unwrap_or_else(|| "accounts-users".into()),
            ttl_minutes: lookup("JWT_TTL_MINUTES")
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60),
        };
        let admin = match (lookup("ADMIN_EMAIL"), lookup("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminSeed {
                name: lookup("ADMIN_NAME").unwrap_or_else(|| "admin".into()),
                email,
                password,
            }),
            _ => None,
        };
        Ok(Self {
            database_url,
            jwt,
            admin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_secret_is_set() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("JWT_SECRET", "s3cret")])).unwrap();
        assert!(cfg.database_url.is_none());
        assert_eq!(cfg.jwt.secret, "s3cret");
        assert_eq!(cfg.jwt.issuer, "accounts");
        assert_eq!(cfg.jwt.audience, "accounts-users");
        assert_eq!(cfg.jwt.ttl_minutes, 60);
        assert!(cfg.admin.is_none());
    }

    #[test]
    fn missing_secret_is_an_error() {
        let err = AppConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("JWT_SECRET"));
    }

    #[test]
    fn admin_seed_needs_email_and_password() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s"),
            ("ADMIN_EMAIL", "admin@email.com"),
        ]))
        .unwrap();
        assert!(cfg.admin.is_none());

        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s"),
            ("ADMIN_EMAIL", "admin@email.com"),
            ("ADMIN_PASSWORD", "bananinha"),
            ("JWT_TTL_MINUTES", "15"),
            ("DATABASE_URL", "postgres://localhost/accounts"),
        ]))
        .unwrap();
        let admin = cfg.admin.expect("admin seed");
        assert_eq!(admin.name, "admin");
        assert_eq!(admin.email, "admin@email.com");
        assert_eq!(cfg.jwt.ttl_minutes, 15);
        assert_eq!(cfg.database_url.as_deref(), Some("postgres://localhost/accounts"));
    }

    #[test]
    fn bad_ttl_falls_back_to_default() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "s"),
            ("JWT_TTL_MINUTES", "soon"),
        ]))
        .unwrap();
        assert_eq!(cfg.jwt.ttl_minutes, 60);
    }
}
