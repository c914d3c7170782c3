use crate::domain::token_model::Account;
use crate::domain::token_model::Role;
use crate::domain::token_model::DEFAULT_ACCESS_TOKEN_EXPIRES_IN_SECONDS;
use log::warn;
use std::env;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_JWT_SECRET: &str = "insecure-dev-secret-change-me";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value: {value}")]
    InvalidValue { name: &'static str, value: String },
    #[error("ACCOUNTS_JSON could not be parsed: {0}")]
    InvalidAccounts(#[from] serde_json::Error),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub jwt_secret: String,
    pub access_token_expires_in: u64,
    pub auth_enabled: bool,
    pub seed_wishes: bool,
    pub accounts: Vec<Account>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            access_token_expires_in: DEFAULT_ACCESS_TOKEN_EXPIRES_IN_SECONDS,
            auth_enabled: true,
            seed_wishes: true,
            accounts: default_accounts(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from any variable source, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let jwt_secret = match lookup("JWT_SECRET") {
            Some(secret) if !secret.is_empty() => secret,
            _ => {
                warn!("JWT_SECRET not set, using the insecure development secret");
                defaults.jwt_secret
            }
        };

        let accounts = match lookup("ACCOUNTS_JSON") {
            Some(raw) => serde_json::from_str::<Vec<Account>>(&raw)?,
            None => defaults.accounts,
        };

        Ok(Self {
            port: parse_var(&lookup, "PORT", defaults.port)?,
            jwt_secret,
            access_token_expires_in: parse_var(
                &lookup,
                "ACCESS_TOKEN_EXPIRES_IN_SECONDS",
                defaults.access_token_expires_in,
            )?,
            auth_enabled: parse_var(&lookup, "AUTH_ENABLED", defaults.auth_enabled)?,
            seed_wishes: parse_var(&lookup, "SEED_WISHES", defaults.seed_wishes)?,
            accounts,
        })
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        None => Ok(default),
    }
}

/// Development fixtures; replace through `ACCOUNTS_JSON`.
pub fn default_accounts() -> Vec<Account> {
    [
        ("admin", "adminpass", Role::Admin),
        ("writer", "writerpass", Role::Writer),
        ("visitor", "visitorpass", Role::Visitor),
    ]
    .into_iter()
    .map(|(username, password, role)| Account {
        username: username.to_string(),
        password: password.to_string(),
        role,
    })
    .collect()
}
