use std::{net::IpAddr, path::PathBuf, str::FromStr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
const DEFAULT_TOKENS_PATH: &str = ".tokens.txt";
const DEFAULT_PLATFORM_TIMEOUT_SECS: u64 = 10;

/// How the dispatcher treats a notification carrying a token outside the allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidTokenPolicy {
    /// Reported as an ordinary failed notification (400).
    #[default]
    Reject,
    /// Treated as a trust violation and refused outright (403).
    Abort,
}

impl FromStr for InvalidTokenPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "abort" => Ok(Self::Abort),
            other => Err(format!("expected 'reject' or 'abort', got '{}'", other)),
        }
    }
}

/// PEM certificate chain and private key served by the HTTP listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsPaths {
    pub cert: PathBuf,
    pub key: PathBuf,
}

pub struct Config {
    pub discord_bot_token: String,
    pub ping_role_id: u64,
    pub channel_id: u64,

    pub bind_address: IpAddr,
    pub port: u16,
    pub tls: Option<TlsPaths>,

    pub test_get: bool,
    pub test_post: bool,

    pub tokens_path: PathBuf,
    pub invalid_token_policy: InvalidTokenPolicy,
    pub platform_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from any variable source.
    ///
    /// `from_env` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let tls = match (
            optional(&lookup, "TLS_CERT_PATH"),
            optional(&lookup, "TLS_KEY_PATH"),
        ) {
            (Some(cert), Some(key)) => Some(TlsPaths {
                cert: PathBuf::from(cert),
                key: PathBuf::from(key),
            }),
            (None, None) => None,
            _ => return Err(ConfigError::IncompleteTls),
        };

        Ok(Self {
            discord_bot_token: required(&lookup, "DISCORD_BOT_TOKEN")?,
            ping_role_id: parse_id(&lookup, "PING_ROLE_ID")?,
            channel_id: parse_id(&lookup, "CHANNEL_ID")?,
            bind_address: parse_or(&lookup, "BIND_ADDRESS", DEFAULT_BIND_ADDRESS)?,
            port: parse_port(&lookup)?,
            tls,
            test_get: flag(&lookup, "TEST_GET"),
            test_post: flag(&lookup, "TEST_POST"),
            tokens_path: PathBuf::from(
                optional(&lookup, "TOKENS_PATH").unwrap_or_else(|| DEFAULT_TOKENS_PATH.to_string()),
            ),
            invalid_token_policy: parse_or(&lookup, "INVALID_TOKEN_POLICY", "reject")?,
            platform_timeout: Duration::from_secs(parse_or(
                &lookup,
                "PLATFORM_TIMEOUT_SECS",
                &DEFAULT_PLATFORM_TIMEOUT_SECS.to_string(),
            )?),
        })
    }
}

fn optional<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn required<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Any non-empty value enables a flag, including "false" or "0".
fn flag<F>(lookup: &F, name: &str) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, name).is_some()
}

fn parse_value<T>(name: &str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.clone(),
            reason: e.to_string(),
        })
}

fn parse_or<F, T>(lookup: &F, name: &str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let value = optional(lookup, name).unwrap_or_else(|| default.to_string());
    parse_value(name, value)
}

/// Discord snowflakes are never zero, so zero is rejected like a missing value.
fn parse_id<F>(lookup: &F, name: &str) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = required(lookup, name)?;
    match parse_value::<u64>(name, value.clone())? {
        0 => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            reason: "id must be non-zero".to_string(),
        }),
        id => Ok(id),
    }
}

fn parse_port<F>(lookup: &F) -> Result<u16, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = required(lookup, "PORT")?;
    match parse_value::<u16>("PORT", value.clone())? {
        0 => Err(ConfigError::InvalidEnvVar {
            name: "PORT".to_string(),
            value,
            reason: "port must be non-zero".to_string(),
        }),
        port => Ok(port),
    }
}
