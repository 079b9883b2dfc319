use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::{error, info};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::services::low_stock::AlertPolicy;

/// Default values for configuration
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENV: &str = "development";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE_URL: &str = "sqlite://stockwatch.db?mode=rwc";
const CONFIG_DIR: &str = "config";

/// Threshold used when neither the inventory row nor the product category sets one
pub const DEFAULT_FALLBACK_THRESHOLD: i32 = 10;
/// Days-until-stockout reported when there is no sales velocity to project from
pub const DEFAULT_STOCKOUT_SENTINEL_DAYS: i64 = 999;
/// Trailing window used for sales velocity
pub const DEFAULT_SALES_WINDOW_DAYS: i64 = 30;

/// Tunables of the low-stock alert computation
#[derive(Clone, Debug, Deserialize, Validate, PartialEq)]
pub struct AlertSettings {
    /// Last step of the threshold cascade
    #[serde(default = "default_fallback_threshold")]
    #[validate(range(min = 0, message = "fallback_threshold must not be negative"))]
    pub fallback_threshold: i32,

    /// Reported when the daily velocity is zero
    #[serde(default = "default_stockout_sentinel_days")]
    #[validate(range(min = 0, message = "stockout_sentinel_days must not be negative"))]
    pub stockout_sentinel_days: i64,

    /// Length of the trailing sales window, in days
    #[serde(default = "default_sales_window_days")]
    #[validate(range(min = 1, max = 3650, message = "sales_window_days must be 1..=3650"))]
    pub sales_window_days: i64,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            fallback_threshold: DEFAULT_FALLBACK_THRESHOLD,
            stockout_sentinel_days: DEFAULT_STOCKOUT_SENTINEL_DAYS,
            sales_window_days: DEFAULT_SALES_WINDOW_DAYS,
        }
    }
}

impl From<&AlertSettings> for AlertPolicy {
    fn from(settings: &AlertSettings) -> Self {
        AlertPolicy {
            fallback_threshold: settings.fallback_threshold,
            stockout_sentinel_days: settings.stockout_sentinel_days,
            sales_window_days: settings.sales_window_days,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct AppConfig {
    /// Database connection URL
    #[validate(length(min = 1, message = "database_url must be set"))]
    pub database_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    #[validate(range(min = 1))]
    pub port: u16,

    /// Application environment
    pub environment: String,

    /// Logging level
    #[serde(default = "default_log_level")]
    #[validate(custom = "validate_log_level")]
    pub log_level: String,

    /// Log in JSON format (structured logging)
    #[serde(default)]
    pub log_json: bool,

    /// Whether to run database migrations on startup
    #[serde(default)]
    pub auto_migrate: bool,

    /// CORS: comma-separated list of allowed origins (production)
    #[serde(default)]
    pub cors_allowed_origins: Option<String>,

    /// Allow permissive CORS fallback
    #[serde(default)]
    pub cors_allow_any_origin: bool,

    /// DB pool: max connections
    #[serde(default = "default_db_max_connections")]
    #[validate(range(min = 1))]
    pub db_max_connections: u32,

    /// DB pool: min connections
    #[serde(default = "default_db_min_connections")]
    pub db_min_connections: u32,

    /// DB connect timeout (seconds)
    #[serde(default = "default_db_connect_timeout_secs")]
    pub db_connect_timeout_secs: u64,

    /// DB idle timeout (seconds)
    #[serde(default = "default_db_idle_timeout_secs")]
    pub db_idle_timeout_secs: u64,

    /// DB acquire timeout (seconds)
    #[serde(default = "default_db_acquire_timeout_secs")]
    pub db_acquire_timeout_secs: u64,

    /// Per-request timeout applied by the HTTP stack (seconds)
    #[serde(default = "default_request_timeout_secs")]
    #[validate(range(min = 1))]
    pub request_timeout_secs: u64,

    /// Low-stock alert tunables
    #[serde(default)]
    pub alerts: AlertSettings,
}

impl AppConfig {
    /// Creates a new configuration with defaults for every optional field
    pub fn new(database_url: String, host: String, port: u16, environment: String) -> Self {
        Self {
            database_url,
            host,
            port,
            environment,
            log_level: default_log_level(),
            log_json: false,
            auto_migrate: false,
            cors_allowed_origins: None,
            cors_allow_any_origin: false,
            db_max_connections: default_db_max_connections(),
            db_min_connections: default_db_min_connections(),
            db_connect_timeout_secs: default_db_connect_timeout_secs(),
            db_idle_timeout_secs: default_db_idle_timeout_secs(),
            db_acquire_timeout_secs: default_db_acquire_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            alerts: AlertSettings::default(),
        }
    }

    /// Gets database URL reference
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Checks if running in development environment
    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }

    /// Returns true if explicit CORS origins are configured
    pub fn has_cors_allowed_origins(&self) -> bool {
        self.cors_allowed_origins
            .as_ref()
            .map(|raw| raw.split(',').any(|origin| !origin.trim().is_empty()))
            .unwrap_or(false)
    }

    /// Whether we should fall back to permissive CORS
    pub fn should_allow_permissive_cors(&self) -> bool {
        self.is_development() || self.cors_allow_any_origin
    }

    /// Gets log level reference
    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    /// Alert policy derived from the `alerts` section
    pub fn alert_policy(&self) -> AlertPolicy {
        AlertPolicy::from(&self.alerts)
    }

    fn validate_additional_constraints(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if !self.should_allow_permissive_cors() && !self.has_cors_allowed_origins() {
            let mut err = ValidationError::new("cors_allowed_origins_required");
            err.message = Some(
                "Set APP__CORS_ALLOWED_ORIGINS for non-development environments or explicitly opt-in via APP__CORS_ALLOW_ANY_ORIGIN=true".into(),
            );
            errors.add("cors_allowed_origins", err);
        }

        if self.db_min_connections > self.db_max_connections {
            let mut err = ValidationError::new("db_min_connections");
            err.message = Some("db_min_connections must not exceed db_max_connections".into());
            errors.add("db_min_connections", err);
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),

    #[error("Configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Default value functions
fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_db_max_connections() -> u32 {
    16
}
fn default_db_min_connections() -> u32 {
    2
}
fn default_db_connect_timeout_secs() -> u64 {
    30
}
fn default_db_idle_timeout_secs() -> u64 {
    600
}
fn default_db_acquire_timeout_secs() -> u64 {
    8
}
fn default_request_timeout_secs() -> u64 {
    30
}

fn default_fallback_threshold() -> i32 {
    DEFAULT_FALLBACK_THRESHOLD
}
fn default_stockout_sentinel_days() -> i64 {
    DEFAULT_STOCKOUT_SENTINEL_DAYS
}
fn default_sales_window_days() -> i64 {
    DEFAULT_SALES_WINDOW_DAYS
}

/// Validates log level values
fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if valid_levels.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("log_level");
        err.message = Some("Must be one of: trace, debug, info, warn, error".into());
        Err(err)
    }
}

/// Initializes tracing using the provided log level as the default filter
pub fn init_tracing(level: &str, json: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_directive = format!("stockwatch_api={},tower_http=debug", level);
    let filter_directive = env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);

    let filter = EnvFilter::new(filter_directive);
    if json {
        let _ = fmt().with_env_filter(filter).json().try_init();
    } else {
        let _ = fmt().with_env_filter(filter).try_init();
    }
}

/// Loads application configuration
///
/// Layers configuration sources in this order:
/// 1. Built-in defaults
/// 2. Default config (config/default.toml)
/// 3. Environment-specific config (config/{env}.toml)
/// 4. Environment variables (APP__*)
pub fn load_config() -> Result<AppConfig, AppConfigError> {
    load_config_from(CONFIG_DIR)
}

/// Same as [`load_config`] with an explicit config directory
pub fn load_config_from(config_dir: &str) -> Result<AppConfig, AppConfigError> {
    // Support both RUN_ENV and APP_ENV for selecting config profile
    let run_env = env::var("RUN_ENV")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| DEFAULT_ENV.to_string());
    info!("Loading configuration for environment: {}", run_env);

    if !Path::new(config_dir).exists() {
        info!(
            "Config directory '{}' not found; relying on built-in defaults and environment variables",
            config_dir
        );
    }

    let config = Config::builder()
        .set_default("database_url", DEFAULT_DATABASE_URL)?
        .set_default("host", DEFAULT_HOST)?
        .set_default("port", DEFAULT_PORT as i64)?
        .set_default("environment", run_env.as_str())?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("log_json", false)?
        .add_source(File::with_name(&format!("{}/default", config_dir)).required(false))
        .add_source(File::with_name(&format!("{}/{}", config_dir, run_env)).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    app_config.validate().map_err(|e| {
        error!("Configuration validation failed: {:?}", e);
        AppConfigError::Validation(e)
    })?;

    app_config.alerts.validate().map_err(|e| {
        error!("Alert settings validation failed: {:?}", e);
        AppConfigError::Validation(e)
    })?;

    app_config.validate_additional_constraints().map_err(|e| {
        error!("Configuration constraint validation failed: {:?}", e);
        AppConfigError::Validation(e)
    })?;

    info!("Configuration loaded successfully");
    Ok(app_config)
}
