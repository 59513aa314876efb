use std::fs::File;
use std::io::Write;
use std::str::FromStr;
use regex::Regex;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::mongodb_config::MongoDbConfig;
use crate::config::structs::postgres_config::PostgresConfig;
use crate::config::structs::rabbitmq_config::RabbitMqConfig;
use crate::config::structs::sentry_config::SentryConfig;

const LOG_LEVELS: [&str; 6] = ["off", "trace", "debug", "info", "warn", "error"];
const QUEUE_NAME_PATTERN: &str = r"^[A-Za-z0-9_.:\-]{1,251}$";

impl Default for Configuration {
    fn default() -> Self {
        Configuration::init()
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            postgres: PostgresConfig::default(),
            mongodb: MongoDbConfig::default(),
            rabbitmq: RabbitMqConfig::default(),
            sentry_config: SentryConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path).map_err(ConfigurationError::IOError)?;
        Self::load(data.as_slice()).map_err(ConfigurationError::ParseError)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::IOError)?;
        file.write_all(data.as_ref()).map_err(ConfigurationError::IOError)
    }

    /// Loads `path`, applies environment overrides and validates the result.
    ///
    /// When the file is missing or corrupt and `create` is set, the defaults are
    /// written to `path` and an error is still returned so the operator can edit
    /// the new file before starting again.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(error);
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&Configuration::init()).map_err(ConfigurationError::SerializeError)?;
                Configuration::save_file(path, config_toml)?;
                eprintln!("Please edit {} and start again, exiting now...", path);
                return Err(ConfigurationError::ValidationError(format!("{} was created with defaults", path)));
            }
        };

        let config = config.apply_env_overrides()?;
        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    pub fn apply_env_overrides(self) -> Result<Configuration, ConfigurationError> {
        self.apply_env_overrides_with(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`, which maps an environment variable name
    /// to its value.
    ///
    /// Empty values are treated as unset, and so is a numeric `0`: the current
    /// value is kept in both cases.
    pub fn apply_env_overrides_with<F>(mut self, lookup: F) -> Result<Configuration, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(value) = var("LOG_LEVEL") {
            self.log_level = value;
        }

        if let Some(value) = var("PG_HOST") {
            self.postgres.host = value;
        }
        if let Some(port) = parse_env("PG_PORT", var("PG_PORT"))? {
            self.postgres.port = port;
        }
        if let Some(value) = var("PG_DATABASE") {
            self.postgres.database = value;
        }
        if let Some(value) = var("PG_USER") {
            self.postgres.user = value;
        }
        if let Some(value) = var("PG_PASSWORD") {
            self.postgres.password = value;
        }
        if let Some(max) = parse_env("PG_POOL_MAX", var("PG_POOL_MAX"))? {
            self.postgres.max_connections = max;
        }
        if let Some(ms) = parse_env("PG_IDLE_TIMEOUT_MS", var("PG_IDLE_TIMEOUT_MS"))? {
            self.postgres.idle_timeout_ms = ms;
        }
        if let Some(ms) = parse_env("PG_CONNECT_TIMEOUT_MS", var("PG_CONNECT_TIMEOUT_MS"))? {
            self.postgres.connect_timeout_ms = ms;
        }

        if let Some(value) = var("MONGO_URI") {
            self.mongodb.uri = value;
        }
        if let Some(value) = var("MONGO_DB_NAME") {
            self.mongodb.db_name = value;
        }

        if let Some(value) = var("RABBITMQ_URL") {
            self.rabbitmq.url = value;
        }
        if let Some(value) = var("RABBITMQ_QUEUE") {
            self.rabbitmq.queue = value;
        }
        if let Some(value) = var("RABBITMQ_PUBLISHER_CONFIRM") {
            self.rabbitmq.publisher_confirm = value == "true";
        }
        if let Some(attempts) = parse_env("RABBITMQ_RETRY_ATTEMPTS", var("RABBITMQ_RETRY_ATTEMPTS"))? {
            self.rabbitmq.retry_attempts = attempts;
        }
        if let Some(delay) = parse_env("RABBITMQ_RETRY_DELAY", var("RABBITMQ_RETRY_DELAY"))? {
            self.rabbitmq.retry_delay_ms = delay;
        }

        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigurationError::ValidationError(format!(
                "unknown log level '{}', expected one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        let required = [
            ("[PgSQL] host", &self.postgres.host),
            ("[PgSQL] database", &self.postgres.database),
            ("[PgSQL] user", &self.postgres.user),
            ("[MongoDB] db_name", &self.mongodb.db_name),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigurationError::ValidationError(format!("{} cannot be empty", name)));
            }
        }

        if self.postgres.port == 0 {
            return Err(ConfigurationError::ValidationError(String::from("[PgSQL] port cannot be 0")));
        }
        if self.postgres.max_connections == 0 {
            return Err(ConfigurationError::ValidationError(String::from("[PgSQL] max_connections must be at least 1")));
        }
        if self.postgres.connect_timeout_ms == 0 {
            return Err(ConfigurationError::ValidationError(String::from("[PgSQL] connect_timeout_ms cannot be 0")));
        }

        if !self.mongodb.uri.starts_with("mongodb://") && !self.mongodb.uri.starts_with("mongodb+srv://") {
            return Err(ConfigurationError::ValidationError(String::from(
                "[MongoDB] uri must start with mongodb:// or mongodb+srv://",
            )));
        }

        if !self.rabbitmq.url.starts_with("amqp://") && !self.rabbitmq.url.starts_with("amqps://") {
            return Err(ConfigurationError::ValidationError(String::from(
                "[RabbitMQ] url must start with amqp:// or amqps://",
            )));
        }
        Self::validate_value("[RabbitMQ] queue", &self.rabbitmq.queue, QUEUE_NAME_PATTERN)?;

        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError> {
        let regex_check = Regex::new(regex)
            .map_err(|e| ConfigurationError::ValidationError(format!("{} has a broken pattern: {}", name, e)))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!(
                "{} [:] Name: \"{}\" [:] Regex: \"{}\"",
                name, value, regex_check
            )));
        }
        Ok(())
    }
}

/// `Ok(None)` when the variable is unset or zero.
fn parse_env<T: FromStr + Default + PartialEq>(key: &str, value: Option<String>) -> Result<Option<T>, ConfigurationError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let parsed = value.trim().parse::<T>().map_err(|_| {
        ConfigurationError::EnvVarError(format!("{} must be a valid number, got '{}'", key, value))
    })?;
    Ok(if parsed == T::default() { None } else { Some(parsed) })
}
