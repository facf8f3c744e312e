// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
  /// The Bot API answered with `ok: false` or a non-success status.
  #[error("API error {code}: {description}")]
  Api {
    code: i64,
    description: String,
    retry_after: Option<i64>,
    migrate_to_chat_id: Option<i64>,
  },
  #[error("Configuration error: {0}")]
  ConfigError(String),
  #[error("IO error: {0}")]
  IoError(#[from] std::io::Error),
  #[error("HTTP error: {0}")]
  HttpError(#[from] reqwest::Error),
  #[error("Failed to parse response: {0}")]
  ParseError(String),
  #[error("JSON error: {0}")]
  JsonError(#[from] serde_json::Error),
  #[error("Regex error: {0}")]
  RegexError(#[from] regex::Error),
  #[error("Bot token must be provided before executing a method")]
  MissingToken,
  #[error("Pipeline error: {0}")]
  PipelineError(String),
}

impl Error {
  /// Error code reported by the Bot API, if this is an API failure.
  pub fn api_code(&self) -> Option<i64> {
    match self {
      Error::Api { code, .. } => Some(*code),
      _ => None,
    }
  }

  pub fn is_api(&self) -> bool {
    matches!(self, Error::Api { .. })
  }
}
