// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  bot::{Bot, ExecuteOptions},
  client::{BotApi, TelegramClient},
  config::ClientConfig,
  propagation::FieldRule,
};
use error::Error;
use std::{sync::Arc, time::Duration};

#[derive(Default)]
pub struct TelegramClientBuilder {
  pub(crate) config: ClientConfig,
}

impl TelegramClientBuilder {
  pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
    self.config.api_url = api_url.into();
    self
  }

  pub fn timeout(mut self, timeout: Duration) -> Self {
    self.config.timeout = timeout;
    self
  }

  pub fn build(self) -> Result<TelegramClient, Error> {
    if self.config.api_url.trim().is_empty() {
      return Err(Error::ConfigError("API URL cannot be empty".into()));
    }

    let client = reqwest::Client::builder()
      .timeout(self.config.timeout)
      .build()
      .map_err(Error::HttpError)?;

    Ok(TelegramClient {
      config: self.config,
      client,
    })
  }
}

pub struct BotBuilder {
  pub(crate) token: String,
  pub(crate) client: TelegramClientBuilder,
  pub(crate) api: Option<Arc<dyn BotApi>>,
  pub(crate) rules: Vec<FieldRule>,
  pub(crate) options: ExecuteOptions,
}

impl Default for BotBuilder {
  fn default() -> Self {
    Self {
      token: String::new(),
      client: TelegramClientBuilder::default(),
      api: None,
      rules: Bot::default_rules(),
      options: ExecuteOptions::default(),
    }
  }
}

impl BotBuilder {
  pub fn token(mut self, token: impl Into<String>) -> Self {
    self.token = token.into();
    self
  }

  pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
    self.client = self.client.api_url(api_url);
    self
  }

  pub fn timeout(mut self, timeout: Duration) -> Self {
    self.client = self.client.timeout(timeout);
    self
  }

  /// Replaces the bot-wide extraction rules.
  pub fn rules(mut self, rules: Vec<FieldRule>) -> Self {
    self.rules = rules;
    self
  }

  pub fn rule(mut self, path: impl Into<String>, key: impl Into<String>) -> Self {
    self.rules.push(FieldRule::new(path, key));
    self
  }

  pub fn forced(mut self, forced: bool) -> Self {
    self.options.forced = forced;
    self
  }

  pub fn propagate(mut self, propagate: bool) -> Self {
    self.options.propagate = propagate;
    self
  }

  /// Uses `api` instead of an HTTP client built from the settings above.
  pub fn api(mut self, api: impl BotApi + 'static) -> Self {
    self.api = Some(Arc::new(api));
    self
  }

  pub fn build(self) -> Result<Bot, Error> {
    if self.token.is_empty() {
      return Err(Error::ConfigError("Bot token cannot be empty".into()));
    }

    let api: Arc<dyn BotApi> = match self.api {
      Some(api) => api,
      None => Arc::new(self.client.build()?),
    };

    Ok(Bot::from_parts(self.token, api, self.rules, self.options))
  }
}
