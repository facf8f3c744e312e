// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::{
  CallbackQuery, ChosenInlineResult, InlineQuery, Message, Poll, PollAnswer, PreCheckoutQuery,
  ShippingQuery,
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// An incoming update. At most one of the optional fields is present.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
  pub update_id: i64,
  pub message: Option<Message>,
  pub edited_message: Option<Message>,
  pub channel_post: Option<Message>,
  pub edited_channel_post: Option<Message>,
  pub inline_query: Option<InlineQuery>,
  pub chosen_inline_result: Option<ChosenInlineResult>,
  pub callback_query: Option<CallbackQuery>,
  pub shipping_query: Option<ShippingQuery>,
  pub pre_checkout_query: Option<PreCheckoutQuery>,
  pub poll: Option<Poll>,
  pub poll_answer: Option<PollAnswer>,
}

impl Update {
  /// Any message carried by the update, edited or not.
  pub fn any_message(&self) -> Option<&Message> {
    self
      .message
      .as_ref()
      .or(self.edited_message.as_ref())
      .or(self.channel_post.as_ref())
      .or(self.edited_channel_post.as_ref())
  }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookInfo {
  /// Empty when the bot uses getUpdates.
  pub url: String,
  pub has_custom_certificate: bool,
  pub pending_update_count: i64,
  pub last_error_date: Option<i64>,
  pub last_error_message: Option<String>,
  pub max_connections: Option<i64>,
  pub allowed_updates: Option<Vec<String>>,
}
