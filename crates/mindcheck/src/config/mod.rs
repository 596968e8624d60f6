use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::assessment::{AssessmentSettings, UnresolvedAnswerPolicy, DEFAULT_SAMPLE_COUNT};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub assessment: AssessmentSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let default_question_count = match env::var("APP_DEFAULT_QUESTION_COUNT") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidQuestionCount { value: raw })?,
            Err(_) => DEFAULT_SAMPLE_COUNT,
        };

        let unresolved_answers = match env::var("APP_UNRESOLVED_ANSWERS") {
            Ok(raw) => parse_unresolved_policy(&raw)?,
            Err(_) => UnresolvedAnswerPolicy::default(),
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            assessment: AssessmentSettings {
                default_question_count,
                unresolved_answers,
            },
        })
    }
}

fn parse_unresolved_policy(raw: &str) -> Result<UnresolvedAnswerPolicy, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "skip" | "ignore" => Ok(UnresolvedAnswerPolicy::Skip),
        "reject" | "strict" => Ok(UnresolvedAnswerPolicy::Reject),
        _ => Err(ConfigError::InvalidUnresolvedPolicy {
            value: raw.to_string(),
        }),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidQuestionCount { value: String },
    InvalidUnresolvedPolicy { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidQuestionCount { value } => write!(
                f,
                "APP_DEFAULT_QUESTION_COUNT must be a non-negative integer (got '{value}')"
            ),
            ConfigError::InvalidUnresolvedPolicy { value } => write!(
                f,
                "APP_UNRESOLVED_ANSWERS must be 'skip' or 'reject' (got '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidQuestionCount { .. }
            | ConfigError::InvalidUnresolvedPolicy { .. } => None,
        }
    }
}
