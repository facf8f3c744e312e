// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::Message;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};

/// Target chat: a numeric identifier or a channel username (`@channel`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
  Id(i64),
  Username(String),
}

impl From<i64> for ChatId {
  fn from(id: i64) -> Self {
    ChatId::Id(id)
  }
}

impl From<i32> for ChatId {
  fn from(id: i32) -> Self {
    ChatId::Id(id.into())
  }
}

impl From<&str> for ChatId {
  fn from(username: &str) -> Self {
    ChatId::Username(username.to_string())
  }
}

impl From<String> for ChatId {
  fn from(username: String) -> Self {
    ChatId::Username(username)
  }
}

impl fmt::Display for ChatId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ChatId::Id(id) => write!(f, "{}", id),
      ChatId::Username(name) => write!(f, "{}", name),
    }
  }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
  Markdown,
  MarkdownV2,
  #[serde(rename = "HTML")]
  Html,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatAction {
  Typing,
  UploadPhoto,
  RecordVideo,
  UploadVideo,
  RecordAudio,
  UploadAudio,
  UploadDocument,
  FindLocation,
  RecordVideoNote,
  UploadVideoNote,
}

/// A file to send: something Telegram already knows about, or bytes to
/// upload with `multipart/form-data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputFile {
  FileId(String),
  Url(String),
  Memory { name: String, data: Vec<u8> },
  Path(PathBuf),
}

impl InputFile {
  pub fn file_id(id: impl Into<String>) -> Self {
    InputFile::FileId(id.into())
  }

  pub fn url(url: impl Into<String>) -> Self {
    InputFile::Url(url.into())
  }

  pub fn memory(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
    InputFile::Memory {
      name: name.into(),
      data: data.into(),
    }
  }

  pub fn path(path: impl Into<PathBuf>) -> Self {
    InputFile::Path(path.into())
  }

  pub fn is_upload(&self) -> bool {
    matches!(self, InputFile::Memory { .. } | InputFile::Path(_))
  }

  /// Name of the multipart part carrying this file, `None` for references.
  pub fn attach_name(&self) -> Option<String> {
    match self {
      InputFile::Memory { name, .. } => Some(name.clone()),
      InputFile::Path(path) => Some(file_name(path)),
      InputFile::FileId(_) | InputFile::Url(_) => None,
    }
  }
}

pub(crate) fn file_name(path: &Path) -> String {
  path
    .file_name()
    .and_then(|n| n.to_str())
    .unwrap_or("file")
    .to_string()
}

impl Serialize for InputFile {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      InputFile::FileId(value) | InputFile::Url(value) => serializer.serialize_str(value),
      InputFile::Memory { name, .. } => serializer.serialize_str(&format!("attach://{}", name)),
      InputFile::Path(path) => {
        serializer.serialize_str(&format!("attach://{}", file_name(path)))
      }
    }
  }
}

impl From<&str> for InputFile {
  fn from(value: &str) -> Self {
    InputFile::from(value.to_string())
  }
}

impl From<String> for InputFile {
  fn from(value: String) -> Self {
    if value.starts_with("http://") || value.starts_with("https://") {
      InputFile::Url(value)
    } else {
      InputFile::FileId(value)
    }
  }
}

impl From<PathBuf> for InputFile {
  fn from(path: PathBuf) -> Self {
    InputFile::Path(path)
  }
}

impl From<&Path> for InputFile {
  fn from(path: &Path) -> Self {
    InputFile::Path(path.to_path_buf())
  }
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResponseParameters {
  pub migrate_to_chat_id: Option<i64>,
  pub retry_after: Option<i64>,
}

/// Result of editing methods: the edited message, or `true` when the
/// message was sent via inline mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EditResult {
  Message(Box<Message>),
  Done(bool),
}

impl EditResult {
  pub fn message(&self) -> Option<&Message> {
    match self {
      EditResult::Message(message) => Some(message),
      EditResult::Done(_) => None,
    }
  }
}
