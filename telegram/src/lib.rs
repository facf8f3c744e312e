// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
mod bot;
mod builders;
mod client;
mod config;
pub mod methods;
mod pipeline;
pub mod propagation;
pub mod request;
pub mod types;

pub use crate::{
  bot::{Bot, ExecuteOptions},
  builders::{BotBuilder, TelegramClientBuilder},
  client::{BotApi, TelegramClient},
  config::{ClientConfig, DEFAULT_API_URL},
  pipeline::{Pipe, Pipeline},
  propagation::{FieldRule, PropagatedValues},
  request::{Call, HttpMethod, Method, Request, Response},
  types::{ChatId, InputFile, ParseMode},
};
pub use error::Error;
