// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  builders::TelegramClientBuilder,
  config::ClientConfig,
  request::{HttpMethod, Request},
  types::{file_name, InputFile, ResponseParameters},
};
use async_trait::async_trait;
use error::Error;
use reqwest::{
  multipart::{Form, Part},
  Client,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

/// Sends prepared requests to the Bot API.
#[async_trait]
pub trait BotApi: Send + Sync {
  /// Performs the call and returns the `result` field of the answer.
  async fn request(&self, token: &str, request: &Request) -> Result<Value, Error>;
}

/// Envelope of every Bot API answer.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
  pub ok: bool,
  pub result: Option<Value>,
  pub error_code: Option<i64>,
  pub description: Option<String>,
  pub parameters: Option<ResponseParameters>,
}

#[derive(Clone, Debug)]
pub struct TelegramClient {
  pub(crate) config: ClientConfig,
  pub(crate) client: Client,
}

impl TelegramClient {
  pub fn builder() -> TelegramClientBuilder {
    TelegramClientBuilder::default()
  }

  pub fn api_url(&self) -> &str {
    &self.config.api_url
  }

  fn endpoint(&self, token: &str, method: &str) -> Result<Url, Error> {
    let raw = format!(
      "{}/bot{}/{}",
      self.config.api_url.trim_end_matches('/'),
      token,
      method
    );
    Url::parse(&raw).map_err(|e| Error::ConfigError(format!("Invalid API URL: {}", e)))
  }

  async fn form(&self, request: &Request) -> Result<Form, Error> {
    let mut form = Form::new();
    for (key, value) in request.text_params() {
      form = form.text(key, value);
    }

    for attachment in request.attachments() {
      let (file_name, data) = match &attachment.file {
        InputFile::Memory { name, data } => (name.clone(), data.clone()),
        InputFile::Path(path) => (file_name(path), tokio::fs::read(path).await?),
        InputFile::FileId(_) | InputFile::Url(_) => continue,
      };
      debug!(part = %attachment.name, size = data.len(), "Attaching file");
      form = form.part(attachment.name.clone(), Part::bytes(data).file_name(file_name));
    }

    Ok(form)
  }

  async fn read_response(response: reqwest::Response) -> Result<Value, Error> {
    let status = response.status();
    let body = response.text().await?;

    let envelope: ApiResponse = match serde_json::from_str(&body) {
      Ok(envelope) => envelope,
      Err(e) if status.is_success() => {
        return Err(Error::ParseError(format!("HTTP {}: {}", status, e)));
      }
      Err(_) => {
        let error = Error::Api {
          code: i64::from(status.as_u16()),
          description: status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.to_string()),
          retry_after: None,
          migrate_to_chat_id: None,
        };
        warn!("{}", error);
        return Err(error);
      }
    };

    if !status.is_success() || !envelope.ok {
      let parameters = envelope.parameters.unwrap_or_default();
      let error = Error::Api {
        code: envelope.error_code.unwrap_or_else(|| i64::from(status.as_u16())),
        description: envelope
          .description
          .unwrap_or_else(|| status.to_string()),
        retry_after: parameters.retry_after,
        migrate_to_chat_id: parameters.migrate_to_chat_id,
      };
      warn!("{}", error);
      return Err(error);
    }

    Ok(envelope.result.unwrap_or(Value::Null))
  }
}

#[async_trait]
impl BotApi for TelegramClient {
  #[instrument(skip(self, token, request), fields(method = request.name()))]
  async fn request(&self, token: &str, request: &Request) -> Result<Value, Error> {
    if token.is_empty() {
      return Err(Error::MissingToken);
    }

    let url = self.endpoint(token, request.name())?;

    let builder = match request.http_method() {
      HttpMethod::Get => self.client.get(url).query(&request.text_params()),
      HttpMethod::Post if request.is_multipart() => {
        self.client.post(url).multipart(self.form(request).await?)
      }
      HttpMethod::Post => self.client.post(url).json(&request.wire_params()),
    };

    debug!(multipart = request.is_multipart(), "Sending request");
    let response = builder.send().await.map_err(Error::HttpError)?;

    Self::read_response(response).await
  }
}
