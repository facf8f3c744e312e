// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use error::Error;
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use std::{env, fs};
use tracing::{debug, instrument};

/// Same value as `telegram::DEFAULT_API_URL`; this crate does not depend
/// on the client.
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";
pub const TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const TOKEN_PATTERN: &str = r"^\d+:[A-Za-z0-9_-]+$";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
  pub bot: BotSection,
  pub execution: ExecutionConfig,
  pub propagation: Vec<PropagationRule>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BotSection {
  pub token: Option<String>,
  pub api_url: String,
  pub timeout_secs: u64,
}

impl Default for BotSection {
  fn default() -> Self {
    Self {
      token: None,
      api_url: DEFAULT_API_URL.to_string(),
      timeout_secs: DEFAULT_TIMEOUT_SECS,
    }
  }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
  pub forced: bool,
  pub propagate: bool,
}

/// Store the value found at `path` of every response under `key`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PropagationRule {
  pub path: String,
  pub key: String,
}

impl Config {
  #[instrument(skip(path))]
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
    let content = fs::read_to_string(path)?;
    let config = Self::parse(&content)?;
    debug!("Loaded configuration successfully");
    Ok(config)
  }

  pub fn parse(content: &str) -> Result<Self, Error> {
    toml::from_str(content).map_err(|e| Error::ConfigError(e.to_string()))
  }

  /// Reads `path` when it exists, applies the `TELEGRAM_BOT_TOKEN` override
  /// and validates the result.
  #[instrument(skip(path))]
  pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
    let path = path.as_ref();
    let mut config = if path.exists() {
      Self::from_file(path)?
    } else {
      debug!("No configuration file at {}, using defaults", path.display());
      Self::default()
    };

    config.override_token(env::var(TOKEN_ENV).ok());
    config.validate()?;
    Ok(config)
  }

  pub fn override_token(&mut self, token: Option<String>) {
    if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
      self.bot.token = Some(token.trim().to_string());
    }
  }

  pub fn validate(&self) -> Result<(), Error> {
    if self.bot.api_url.trim().is_empty() {
      return Err(Error::ConfigError("api_url cannot be empty".into()));
    }

    if let Some(token) = &self.bot.token {
      let pattern = Regex::new(TOKEN_PATTERN)?;
      if !pattern.is_match(token) {
        return Err(Error::ConfigError(
          "Bot token must look like <bot id>:<secret>".into(),
        ));
      }
    }

    if let Some(rule) = self
      .propagation
      .iter()
      .find(|r| r.path.trim().is_empty() || r.key.trim().is_empty())
    {
      return Err(Error::ConfigError(format!(
        "Propagation rule needs both path and key: {:?}",
        rule
      )));
    }

    Ok(())
  }

  pub fn token(&self) -> Result<&str, Error> {
    self.bot.token.as_deref().ok_or(Error::MissingToken)
  }

  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.bot.timeout_secs)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_file_uses_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.bot.api_url, DEFAULT_API_URL);
    assert_eq!(config.timeout(), Duration::from_secs(30));
    assert!(!config.execution.forced);
    assert!(config.propagation.is_empty());
    assert!(matches!(config.token(), Err(Error::MissingToken)));
  }

  #[test]
  fn parses_all_sections() {
    let config = Config::parse(
      r#"
        [bot]
        token = "123456:ABC-def_ghi"
        api_url = "http://localhost:8081"
        timeout_secs = 5

        [execution]
        forced = true

        [[propagation]]
        path = "message.chat.id"
        key = "chat_id"
      "#,
    )
    .unwrap();

    assert_eq!(config.token().unwrap(), "123456:ABC-def_ghi");
    assert_eq!(config.bot.api_url, "http://localhost:8081");
    assert_eq!(config.timeout(), Duration::from_secs(5));
    assert!(config.execution.forced);
    assert!(!config.execution.propagate);
    assert_eq!(
      config.propagation,
      vec![PropagationRule {
        path: "message.chat.id".into(),
        key: "chat_id".into()
      }]
    );
    config.validate().unwrap();
  }

  #[test]
  fn rejects_malformed_token() {
    let mut config = Config::default();
    config.override_token(Some("not-a-token".into()));
    assert!(matches!(config.validate(), Err(Error::ConfigError(_))));
  }

  #[test]
  fn blank_override_keeps_file_token() {
    let mut config = Config::parse("[bot]\ntoken = \"1:abc\"").unwrap();
    config.override_token(Some("   ".into()));
    assert_eq!(config.token().unwrap(), "1:abc");
    config.override_token(Some("2:xyz".into()));
    assert_eq!(config.token().unwrap(), "2:xyz");
  }

  #[test]
  fn rejects_incomplete_propagation_rule() {
    let config = Config::parse("[[propagation]]\npath = \"update_id\"\nkey = \"\"").unwrap();
    assert!(config.validate().is_err());
  }

  #[test]
  fn invalid_toml_is_a_config_error() {
    assert!(matches!(
      Config::parse("[bot\ntoken = 1"),
      Err(Error::ConfigError(_))
    ));
  }
}
