use std::net::SocketAddr;

use anyhow::{Context, Result, bail};

/// Placeholder secrets that must never sign real tokens.
const PLACEHOLDER_SECRETS: &[&str] = &["change-me-to-a-random-string", "dev-secret-change-me"];

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub host: String,
    pub port: u16,
    pub token_ttl_hours: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET").unwrap_or_default();
        if jwt_secret.is_empty() || PLACEHOLDER_SECRETS.contains(&jwt_secret.as_str()) {
            bail!("JWT_SECRET is unset or still a placeholder; set it in the environment or .env");
        }

        let port: u16 = match lookup("SCRIBE_PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("Invalid SCRIBE_PORT '{}'", raw))?,
            None => 3000,
        };

        let token_ttl_hours: i64 = match lookup("SCRIBE_TOKEN_TTL_HOURS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("Invalid SCRIBE_TOKEN_TTL_HOURS '{}'", raw))?,
            None => 24 * 30,
        };
        if token_ttl_hours <= 0 {
            bail!("SCRIBE_TOKEN_TTL_HOURS must be positive");
        }

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://scribe.db".into()),
            jwt_secret,
            host: lookup("SCRIBE_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
            token_ttl_hours,
        })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .with_context(|| format!("Invalid listen address '{}'", addr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply() {
        let cfg = config(&[("JWT_SECRET", "s3cret")]).unwrap();
        assert_eq!(cfg.database_url, "sqlite://scribe.db");
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.token_ttl_hours, 720);
        assert_eq!(cfg.addr().unwrap().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn missing_or_placeholder_secret_is_refused() {
        assert!(config(&[]).is_err());
        assert!(config(&[("JWT_SECRET", "")]).is_err());
        assert!(config(&[("JWT_SECRET", "dev-secret-change-me")]).is_err());
    }

    #[test]
    fn overrides_are_parsed() {
        let cfg = config(&[
            ("JWT_SECRET", "s3cret"),
            ("DATABASE_URL", "sqlite:///var/lib/scribe.db"),
            ("SCRIBE_HOST", "127.0.0.1"),
            ("SCRIBE_PORT", "8787"),
            ("SCRIBE_TOKEN_TTL_HOURS", "2"),
        ])
        .unwrap();
        assert_eq!(cfg.database_url, "sqlite:///var/lib/scribe.db");
        assert_eq!(cfg.addr().unwrap().to_string(), "127.0.0.1:8787");
        assert_eq!(cfg.token_ttl_hours, 2);
    }

    #[test]
    fn bad_numbers_are_errors() {
        assert!(config(&[("JWT_SECRET", "s"), ("SCRIBE_PORT", "http")]).is_err());
        assert!(config(&[("JWT_SECRET", "s"), ("SCRIBE_TOKEN_TTL_HOURS", "0")]).is_err());
    }
}
