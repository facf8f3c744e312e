// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::{CallbackGame, Message, PollType, User};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Any of the four reply markup kinds accepted by the send methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
  InlineKeyboard(InlineKeyboardMarkup),
  ReplyKeyboard(ReplyKeyboardMarkup),
  Remove(ReplyKeyboardRemove),
  ForceReply(ForceReply),
}

impl From<InlineKeyboardMarkup> for ReplyMarkup {
  fn from(markup: InlineKeyboardMarkup) -> Self {
    ReplyMarkup::InlineKeyboard(markup)
  }
}

impl From<ReplyKeyboardMarkup> for ReplyMarkup {
  fn from(markup: ReplyKeyboardMarkup) -> Self {
    ReplyMarkup::ReplyKeyboard(markup)
  }
}

impl From<ReplyKeyboardRemove> for ReplyMarkup {
  fn from(markup: ReplyKeyboardRemove) -> Self {
    ReplyMarkup::Remove(markup)
  }
}

impl From<ForceReply> for ReplyMarkup {
  fn from(markup: ForceReply) -> Self {
    ReplyMarkup::ForceReply(markup)
  }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyKeyboardMarkup {
  pub keyboard: Vec<Vec<KeyboardButton>>,
  pub resize_keyboard: Option<bool>,
  pub one_time_keyboard: Option<bool>,
  pub selective: Option<bool>,
}

impl ReplyKeyboardMarkup {
  pub fn new(keyboard: Vec<Vec<KeyboardButton>>) -> Self {
    Self {
      keyboard,
      resize_keyboard: None,
      one_time_keyboard: None,
      selective: None,
    }
  }

  pub fn resize(mut self) -> Self {
    self.resize_keyboard = Some(true);
    self
  }

  pub fn one_time(mut self) -> Self {
    self.one_time_keyboard = Some(true);
    self
  }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardButton {
  pub text: String,
  pub request_contact: Option<bool>,
  pub request_location: Option<bool>,
  pub request_poll: Option<KeyboardButtonPollType>,
}

impl KeyboardButton {
  pub fn new(text: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      request_contact: None,
      request_location: None,
      request_poll: None,
    }
  }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyboardButtonPollType {
  /// Any poll type is allowed when absent.
  #[serde(rename = "type")]
  pub kind: Option<PollType>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyKeyboardRemove {
  pub remove_keyboard: bool,
  pub selective: Option<bool>,
}

impl Default for ReplyKeyboardRemove {
  fn default() -> Self {
    Self {
      remove_keyboard: true,
      selective: None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
  pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
  pub fn new(inline_keyboard: Vec<Vec<InlineKeyboardButton>>) -> Self {
    Self { inline_keyboard }
  }

  pub fn row(mut self, row: Vec<InlineKeyboardButton>) -> Self {
    self.inline_keyboard.push(row);
    self
  }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
  pub text: String,
  pub url: Option<String>,
  pub login_url: Option<LoginUrl>,
  pub callback_data: Option<String>,
  pub switch_inline_query: Option<String>,
  pub switch_inline_query_current_chat: Option<String>,
  pub callback_game: Option<CallbackGame>,
  pub pay: Option<bool>,
}

impl InlineKeyboardButton {
  pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      url: Some(url.into()),
      ..Default::default()
    }
  }

  pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      callback_data: Some(data.into()),
      ..Default::default()
    }
  }

  pub fn switch_inline_query(text: impl Into<String>, query: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      switch_inline_query: Some(query.into()),
      ..Default::default()
    }
  }

  pub fn pay(text: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      pay: Some(true),
      ..Default::default()
    }
  }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginUrl {
  pub url: String,
  pub forward_text: Option<String>,
  pub bot_username: Option<String>,
  pub request_write_access: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackQuery {
  pub id: String,
  pub from: User,
  pub message: Option<Message>,
  pub inline_message_id: Option<String>,
  pub chat_instance: String,
  pub data: Option<String>,
  pub game_short_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceReply {
  pub force_reply: bool,
  pub selective: Option<bool>,
}

impl Default for ForceReply {
  fn default() -> Self {
    Self {
      force_reply: true,
      selective: None,
    }
  }
}
