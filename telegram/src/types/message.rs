// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::{
  Chat, Game, InlineKeyboardMarkup, Invoice, PassportData, Sticker, SuccessfulPayment, User,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
  pub message_id: i64,
  pub from: Option<User>,
  pub date: i64,
  pub chat: Chat,
  pub forward_from: Option<User>,
  pub forward_from_chat: Option<Chat>,
  pub forward_from_message_id: Option<i64>,
  pub forward_signature: Option<String>,
  pub forward_sender_name: Option<String>,
  pub forward_date: Option<i64>,
  pub reply_to_message: Option<Box<Message>>,
  pub via_bot: Option<User>,
  pub edit_date: Option<i64>,
  pub media_group_id: Option<String>,
  pub author_signature: Option<String>,
  pub text: Option<String>,
  pub entities: Option<Vec<MessageEntity>>,
  pub caption_entities: Option<Vec<MessageEntity>>,
  pub animation: Option<Animation>,
  pub audio: Option<Audio>,
  pub document: Option<Document>,
  pub photo: Option<Vec<PhotoSize>>,
  pub sticker: Option<Sticker>,
  pub video: Option<Video>,
  pub video_note: Option<VideoNote>,
  pub voice: Option<Voice>,
  pub caption: Option<String>,
  pub contact: Option<Contact>,
  pub dice: Option<Dice>,
  pub game: Option<Game>,
  pub poll: Option<Poll>,
  pub venue: Option<Venue>,
  pub location: Option<Location>,
  pub new_chat_members: Option<Vec<User>>,
  pub left_chat_member: Option<User>,
  pub new_chat_title: Option<String>,
  pub new_chat_photo: Option<Vec<PhotoSize>>,
  pub delete_chat_photo: Option<bool>,
  pub group_chat_created: Option<bool>,
  pub supergroup_chat_created: Option<bool>,
  pub channel_chat_created: Option<bool>,
  pub migrate_to_chat_id: Option<i64>,
  pub migrate_from_chat_id: Option<i64>,
  pub pinned_message: Option<Box<Message>>,
  pub invoice: Option<Invoice>,
  pub successful_payment: Option<SuccessfulPayment>,
  pub connected_website: Option<String>,
  pub passport_data: Option<PassportData>,
  pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Message {
  pub fn date_time(&self) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(self.date, 0)
  }

  pub fn edit_date_time(&self) -> Option<DateTime<Utc>> {
    self.edit_date.and_then(|date| DateTime::from_timestamp(date, 0))
  }

  /// Text of the message, or the caption for media messages.
  pub fn text_or_caption(&self) -> Option<&str> {
    self.text.as_deref().or(self.caption.as_deref())
  }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEntity {
  /// mention, hashtag, cashtag, bot_command, url, email, phone_number, bold,
  /// italic, underline, strikethrough, code, pre, text_link or text_mention.
  #[serde(rename = "type")]
  pub kind: String,
  pub offset: i64,
  pub length: i64,
  pub url: Option<String>,
  pub user: Option<User>,
  pub language: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSize {
  pub file_id: String,
  pub file_unique_id: String,
  pub width: i64,
  pub height: i64,
  pub file_size: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
  pub file_id: String,
  pub file_unique_id: String,
  pub width: i64,
  pub height: i64,
  pub duration: i64,
  pub thumb: Option<PhotoSize>,
  pub file_name: Option<String>,
  pub mime_type: Option<String>,
  pub file_size: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audio {
  pub file_id: String,
  pub file_unique_id: String,
  pub duration: i64,
  pub performer: Option<String>,
  pub title: Option<String>,
  pub mime_type: Option<String>,
  pub file_size: Option<i64>,
  pub thumb: Option<PhotoSize>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
  pub file_id: String,
  pub file_unique_id: String,
  pub thumb: Option<PhotoSize>,
  pub file_name: Option<String>,
  pub mime_type: Option<String>,
  pub file_size: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
  pub file_id: String,
  pub file_unique_id: String,
  pub width: i64,
  pub height: i64,
  pub duration: i64,
  pub thumb: Option<PhotoSize>,
  pub mime_type: Option<String>,
  pub file_size: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoNote {
  pub file_id: String,
  pub file_unique_id: String,
  pub length: i64,
  pub duration: i64,
  pub thumb: Option<PhotoSize>,
  pub file_size: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
  pub file_id: String,
  pub file_unique_id: String,
  pub duration: i64,
  pub mime_type: Option<String>,
  pub file_size: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  pub phone_number: String,
  pub first_name: String,
  pub last_name: Option<String>,
  pub user_id: Option<i64>,
  pub vcard: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dice {
  pub emoji: String,
  pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
  pub text: String,
  pub voter_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollAnswer {
  pub poll_id: String,
  pub user: User,
  /// Empty when the user retracted the vote.
  pub option_ids: Vec<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PollType {
  Regular,
  Quiz,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poll {
  pub id: String,
  pub question: String,
  pub options: Vec<PollOption>,
  pub total_voter_count: i64,
  pub is_closed: bool,
  pub is_anonymous: bool,
  #[serde(rename = "type")]
  pub kind: PollType,
  pub allows_multiple_answers: bool,
  pub correct_option_id: Option<i64>,
  pub explanation: Option<String>,
  pub explanation_entities: Option<Vec<MessageEntity>>,
  pub open_period: Option<i64>,
  pub close_date: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
  pub longitude: f64,
  pub latitude: f64,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
  pub location: Location,
  pub title: String,
  pub address: String,
  pub foursquare_id: Option<String>,
  pub foursquare_type: Option<String>,
}
