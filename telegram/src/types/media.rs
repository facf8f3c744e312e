// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::{InputFile, ParseMode};
use serde::Serialize;
use serde_with::skip_serializing_none;

/// Content of a media message for sendMediaGroup and editMessageMedia.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputMedia {
  Photo(InputMediaPhoto),
  Video(InputMediaVideo),
  Animation(InputMediaAnimation),
  Audio(InputMediaAudio),
  Document(InputMediaDocument),
}

impl InputMedia {
  pub fn media(&self) -> &InputFile {
    match self {
      InputMedia::Photo(m) => &m.media,
      InputMedia::Video(m) => &m.media,
      InputMedia::Animation(m) => &m.media,
      InputMedia::Audio(m) => &m.media,
      InputMedia::Document(m) => &m.media,
    }
  }

  pub fn thumb(&self) -> Option<&InputFile> {
    match self {
      InputMedia::Photo(_) => None,
      InputMedia::Video(m) => m.thumb.as_ref(),
      InputMedia::Animation(m) => m.thumb.as_ref(),
      InputMedia::Audio(m) => m.thumb.as_ref(),
      InputMedia::Document(m) => m.thumb.as_ref(),
    }
  }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputMediaPhoto {
  pub media: InputFile,
  pub caption: Option<String>,
  pub parse_mode: Option<ParseMode>,
}

impl InputMediaPhoto {
  pub fn new(media: impl Into<InputFile>) -> Self {
    Self {
      media: media.into(),
      caption: None,
      parse_mode: None,
    }
  }

  pub fn caption(mut self, caption: impl Into<String>) -> Self {
    self.caption = Some(caption.into());
    self
  }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputMediaVideo {
  pub media: InputFile,
  pub thumb: Option<InputFile>,
  pub caption: Option<String>,
  pub parse_mode: Option<ParseMode>,
  pub width: Option<i64>,
  pub height: Option<i64>,
  pub duration: Option<i64>,
  pub supports_streaming: Option<bool>,
}

impl InputMediaVideo {
  pub fn new(media: impl Into<InputFile>) -> Self {
    Self {
      media: media.into(),
      thumb: None,
      caption: None,
      parse_mode: None,
      width: None,
      height: None,
      duration: None,
      supports_streaming: None,
    }
  }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputMediaAnimation {
  pub media: InputFile,
  pub thumb: Option<InputFile>,
  pub caption: Option<String>,
  pub parse_mode: Option<ParseMode>,
  pub width: Option<i64>,
  pub height: Option<i64>,
  pub duration: Option<i64>,
}

impl InputMediaAnimation {
  pub fn new(media: impl Into<InputFile>) -> Self {
    Self {
      media: media.into(),
      thumb: None,
      caption: None,
      parse_mode: None,
      width: None,
      height: None,
      duration: None,
    }
  }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputMediaAudio {
  pub media: InputFile,
  pub thumb: Option<InputFile>,
  pub caption: Option<String>,
  pub parse_mode: Option<ParseMode>,
  pub duration: Option<i64>,
  pub performer: Option<String>,
  pub title: Option<String>,
}

impl InputMediaAudio {
  pub fn new(media: impl Into<InputFile>) -> Self {
    Self {
      media: media.into(),
      thumb: None,
      caption: None,
      parse_mode: None,
      duration: None,
      performer: None,
      title: None,
    }
  }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputMediaDocument {
  pub media: InputFile,
  pub thumb: Option<InputFile>,
  pub caption: Option<String>,
  pub parse_mode: Option<ParseMode>,
}

impl InputMediaDocument {
  pub fn new(media: impl Into<InputFile>) -> Self {
    Self {
      media: media.into(),
      thumb: None,
      caption: None,
      parse_mode: None,
    }
  }
}

impl From<InputMediaPhoto> for InputMedia {
  fn from(media: InputMediaPhoto) -> Self {
    InputMedia::Photo(media)
  }
}

impl From<InputMediaVideo> for InputMedia {
  fn from(media: InputMediaVideo) -> Self {
    InputMedia::Video(media)
  }
}

impl From<InputMediaAnimation> for InputMedia {
  fn from(media: InputMediaAnimation) -> Self {
    InputMedia::Animation(media)
  }
}

impl From<InputMediaAudio> for InputMedia {
  fn from(media: InputMediaAudio) -> Self {
    InputMedia::Audio(media)
  }
}

impl From<InputMediaDocument> for InputMedia {
  fn from(media: InputMediaDocument) -> Self {
    InputMedia::Document(media)
  }
}
