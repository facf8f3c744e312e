// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::{Message, PhotoSize};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
  pub id: i64,
  pub is_bot: bool,
  pub first_name: String,
  pub last_name: Option<String>,
  pub username: Option<String>,
  pub language_code: Option<String>,
  /// Returned only in getMe.
  pub can_join_groups: Option<bool>,
  /// Returned only in getMe.
  pub can_read_all_group_messages: Option<bool>,
  /// Returned only in getMe.
  pub supports_inline_queries: Option<bool>,
}

impl User {
  pub fn full_name(&self) -> String {
    match &self.last_name {
      Some(last_name) => format!("{} {}", self.first_name, last_name),
      None => self.first_name.clone(),
    }
  }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatType {
  Private,
  Group,
  Supergroup,
  Channel,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
  pub id: i64,
  #[serde(rename = "type")]
  pub kind: ChatType,
  pub title: Option<String>,
  pub username: Option<String>,
  pub first_name: Option<String>,
  pub last_name: Option<String>,
  // The fields below are filled only by getChat.
  pub photo: Option<ChatPhoto>,
  pub description: Option<String>,
  pub invite_link: Option<String>,
  pub pinned_message: Option<Box<Message>>,
  pub permissions: Option<ChatPermissions>,
  pub slow_mode_delay: Option<i64>,
  pub sticker_set_name: Option<String>,
  pub can_set_sticker_set: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPhoto {
  pub small_file_id: String,
  pub small_file_unique_id: String,
  pub big_file_id: String,
  pub big_file_unique_id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatMemberStatus {
  Creator,
  Administrator,
  Member,
  Restricted,
  Left,
  Kicked,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMember {
  pub user: User,
  pub status: ChatMemberStatus,
  pub custom_title: Option<String>,
  pub until_date: Option<i64>,
  pub can_be_edited: Option<bool>,
  pub can_post_messages: Option<bool>,
  pub can_edit_messages: Option<bool>,
  pub can_delete_messages: Option<bool>,
  pub can_restrict_members: Option<bool>,
  pub can_promote_members: Option<bool>,
  pub can_change_info: Option<bool>,
  pub can_invite_users: Option<bool>,
  pub can_pin_messages: Option<bool>,
  pub is_member: Option<bool>,
  pub can_send_messages: Option<bool>,
  pub can_send_media_messages: Option<bool>,
  pub can_send_polls: Option<bool>,
  pub can_send_other_messages: Option<bool>,
  pub can_add_web_page_previews: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatPermissions {
  pub can_send_messages: Option<bool>,
  pub can_send_media_messages: Option<bool>,
  pub can_send_polls: Option<bool>,
  pub can_send_other_messages: Option<bool>,
  pub can_add_web_page_previews: Option<bool>,
  pub can_change_info: Option<bool>,
  pub can_invite_users: Option<bool>,
  pub can_pin_messages: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommand {
  pub command: String,
  pub description: String,
}

impl BotCommand {
  pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
    Self {
      command: command.into(),
      description: description.into(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfilePhotos {
  pub total_count: i64,
  pub photos: Vec<Vec<PhotoSize>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
  pub file_id: String,
  pub file_unique_id: String,
  pub file_size: Option<i64>,
  pub file_path: Option<String>,
}

impl File {
  /// Download link, valid for at least an hour after getFile.
  pub fn download_url(&self, api_url: &str, token: &str) -> Option<String> {
    self.file_path.as_ref().map(|path| {
      format!(
        "{}/file/bot{}/{}",
        api_url.trim_end_matches('/'),
        token,
        path
      )
    })
  }
}
