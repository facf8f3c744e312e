// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::{InlineKeyboardMarkup, Location, ParseMode, User};
use serde::{ser::Error as _, Deserialize, Serialize, Serializer};
use serde_json::Value;
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQuery {
  pub id: String,
  pub from: User,
  pub location: Option<Location>,
  pub query: String,
  pub offset: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChosenInlineResult {
  pub result_id: String,
  pub from: User,
  pub location: Option<Location>,
  pub inline_message_id: Option<String>,
  pub query: String,
}

/// Content of the message sent instead of an inline result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputMessageContent {
  Text(InputTextMessageContent),
  Venue(InputVenueMessageContent),
  Location(InputLocationMessageContent),
  Contact(InputContactMessageContent),
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputTextMessageContent {
  pub message_text: String,
  pub parse_mode: Option<ParseMode>,
  pub disable_web_page_preview: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputLocationMessageContent {
  pub latitude: f64,
  pub longitude: f64,
  pub live_period: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputVenueMessageContent {
  pub latitude: f64,
  pub longitude: f64,
  pub title: String,
  pub address: String,
  pub foursquare_id: Option<String>,
  pub foursquare_type: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputContactMessageContent {
  pub phone_number: String,
  pub first_name: String,
  pub last_name: Option<String>,
  pub vcard: Option<String>,
}

impl InputMessageContent {
  pub fn text(message_text: impl Into<String>) -> Self {
    InputMessageContent::Text(InputTextMessageContent {
      message_text: message_text.into(),
      parse_mode: None,
      disable_web_page_preview: None,
    })
  }
}

// Every result shares the same shape: required fields taken by `new`,
// optional fields with chainable setters, and the `type` tag of the wire
// format.
macro_rules! inline_result {
  (
    $(#[$meta:meta])*
    $name:ident => $variant:ident($tag:literal) {
      $( $req:ident : $req_ty:ty ),* $(,)?
    }
    optional {
      $( $opt:ident : $opt_ty:ty ),* $(,)?
    }
  ) => {
    $(#[$meta])*
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct $name {
      $( pub $req: $req_ty, )*
      $(
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub $opt: Option<$opt_ty>,
      )*
    }

    impl $name {
      pub const TYPE: &'static str = $tag;

      pub fn new($( $req: impl Into<$req_ty> ),*) -> Self {
        Self {
          $( $req: $req.into(), )*
          $( $opt: None, )*
        }
      }

      $(
        pub fn $opt(mut self, $opt: impl Into<$opt_ty>) -> Self {
          self.$opt = Some($opt.into());
          self
        }
      )*
    }

    impl From<$name> for InlineQueryResult {
      fn from(result: $name) -> Self {
        InlineQueryResult::$variant(result)
      }
    }
  };
}

inline_result! {
  /// A link to an article or web page.
  InlineQueryResultArticle => Article("article") {
    id: String,
    title: String,
    input_message_content: InputMessageContent,
  }
  optional {
    reply_markup: InlineKeyboardMarkup,
    url: String,
    hide_url: bool,
    description: String,
    thumb_url: String,
    thumb_width: i64,
    thumb_height: i64,
  }
}

inline_result! {
  /// A link to a JPEG photo.
  InlineQueryResultPhoto => Photo("photo") {
    id: String,
    photo_url: String,
    thumb_url: String,
  }
  optional {
    photo_width: i64,
    photo_height: i64,
    title: String,
    description: String,
    caption: String,
    parse_mode: ParseMode,
    reply_markup: InlineKeyboardMarkup,
    input_message_content: InputMessageContent,
  }
}

inline_result! {
  /// A link to an animated GIF file.
  InlineQueryResultGif => Gif("gif") {
    id: String,
    gif_url: String,
    thumb_url: String,
  }
  optional {
    gif_width: i64,
    gif_height: i64,
    gif_duration: i64,
    title: String,
    caption: String,
    parse_mode: ParseMode,
    reply_markup: InlineKeyboardMarkup,
    input_message_content: InputMessageContent,
  }
}

inline_result! {
  /// A link to a video animation (H.264/MPEG-4 AVC video without sound).
  InlineQueryResultMpeg4Gif => Mpeg4Gif("mpeg4_gif") {
    id: String,
    mpeg4_url: String,
    thumb_url: String,
  }
  optional {
    mpeg4_width: i64,
    mpeg4_height: i64,
    mpeg4_duration: i64,
    title: String,
    caption: String,
    parse_mode: ParseMode,
    reply_markup: InlineKeyboardMarkup,
    input_message_content: InputMessageContent,
  }
}

inline_result! {
  /// A link to a page containing an embedded video player or a video file.
  InlineQueryResultVideo => Video("video") {
    id: String,
    video_url: String,
    mime_type: String,
    thumb_url: String,
    title: String,
  }
  optional {
    caption: String,
    parse_mode: ParseMode,
    video_width: i64,
    video_height: i64,
    video_duration: i64,
    description: String,
    reply_markup: InlineKeyboardMarkup,
    input_message_content: InputMessageContent,
  }
}

inline_result! {
  /// A link to an MP3 audio file.
  InlineQueryResultAudio => Audio("audio") {
    id: String,
    audio_url: String,
    title: String,
  }
  optional {
    caption: String,
    parse_mode: ParseMode,
    performer: String,
    audio_duration: i64,
    reply_markup: InlineKeyboardMarkup,
    input_message_content: InputMessageContent,
  }
}

inline_result! {
  /// A link to a voice recording in an .OGG container encoded with OPUS.
  InlineQueryResultVoice => Voice("voice") {
    id: String,
    voice_url: String,
    title: String,
  }
  optional {
    caption: String,
    parse_mode: ParseMode,
    voice_duration: i64,
    reply_markup: InlineKeyboardMarkup,
    input_message_content: InputMessageContent,
  }
}

inline_result! {
  /// A link to a PDF or ZIP file.
  InlineQueryResultDocument => Document("document") {
    id: String,
    title: String,
    document_url: String,
    mime_type: String,
  }
  optional {
    caption: String,
    parse_mode: ParseMode,
    description: String,
    reply_markup: InlineKeyboardMarkup,
    input_message_content: InputMessageContent,
    thumb_url: String,
    thumb_width: i64,
    thumb_height: i64,
  }
}

inline_result! {
  InlineQueryResultLocation => Location("location") {
    id: String,
    latitude: f64,
    longitude: f64,
    title: String,
  }
  optional {
    live_period: i64,
    reply_markup: InlineKeyboardMarkup,
    input_message_content: InputMessageContent,
    thumb_url: String,
    thumb_width: i64,
    thumb_height: i64,
  }
}

inline_result! {
  InlineQueryResultVenue => Venue("venue") {
    id: String,
    latitude: f64,
    longitude: f64,
    title: String,
    address: String,
  }
  optional {
    foursquare_id: String,
    foursquare_type: String,
    reply_markup: InlineKeyboardMarkup,
    input_message_content: InputMessageContent,
    thumb_url: String,
    thumb_width: i64,
    thumb_height: i64,
  }
}

inline_result! {
  InlineQueryResultContact => Contact("contact") {
    id: String,
    phone_number: String,
    first_name: String,
  }
  optional {
    last_name: String,
    vcard: String,
    reply_markup: InlineKeyboardMarkup,
    input_message_content: InputMessageContent,
    thumb_url: String,
    thumb_width: i64,
    thumb_height: i64,
  }
}

inline_result! {
  InlineQueryResultGame => Game("game") {
    id: String,
    game_short_name: String,
  }
  optional {
    reply_markup: InlineKeyboardMarkup,
  }
}

inline_result! {
  /// A photo already stored on the Telegram servers.
  InlineQueryResultCachedPhoto => CachedPhoto("photo") {
    id: String,
    photo_file_id: String,
  }
  optional {
    title: String,
    description: String,
    caption: String,
    parse_mode: ParseMode,
    reply_markup: InlineKeyboardMarkup,
    input_message_content: InputMessageContent,
  }
}

inline_result! {
  InlineQueryResultCachedGif => CachedGif("gif") {
    id: String,
    gif_file_id: String,
  }
  optional {
    title: String,
    caption: String,
    parse_mode: ParseMode,
    reply_markup: InlineKeyboardMarkup,
    input_message_content: InputMessageContent,
  }
}

inline_result! {
  InlineQueryResultCachedMpeg4Gif => CachedMpeg4Gif("mpeg4_gif") {
    id: String,
    mpeg4_file_id: String,
  }
  optional {
    title: String,
    caption: String,
    parse_mode: ParseMode,
    reply_markup: InlineKeyboardMarkup,
    input_message_content: InputMessageContent,
  }
}

inline_result! {
  InlineQueryResultCachedSticker => CachedSticker("sticker") {
    id: String,
    sticker_file_id: String,
  }
  optional {
    reply_markup: InlineKeyboardMarkup,
    input_message_content: InputMessageContent,
  }
}

inline_result! {
  InlineQueryResultCachedDocument => CachedDocument("document") {
    id: String,
    title: String,
    document_file_id: String,
  }
  optional {
    description: String,
    caption: String,
    parse_mode: ParseMode,
    reply_markup: InlineKeyboardMarkup,
    input_message_content: InputMessageContent,
  }
}

inline_result! {
  InlineQueryResultCachedVideo => CachedVideo("video") {
    id: String,
    video_file_id: String,
    title: String,
  }
  optional {
    description: String,
    caption: String,
    parse_mode: ParseMode,
    reply_markup: InlineKeyboardMarkup,
    input_message_content: InputMessageContent,
  }
}

inline_result! {
  InlineQueryResultCachedVoice => CachedVoice("voice") {
    id: String,
    voice_file_id: String,
    title: String,
  }
  optional {
    caption: String,
    parse_mode: ParseMode,
    reply_markup: InlineKeyboardMarkup,
    input_message_content: InputMessageContent,
  }
}

inline_result! {
  InlineQueryResultCachedAudio => CachedAudio("audio") {
    id: String,
    audio_file_id: String,
  }
  optional {
    caption: String,
    parse_mode: ParseMode,
    reply_markup: InlineKeyboardMarkup,
    input_message_content: InputMessageContent,
  }
}

/// One result of an inline query. Serialized with its `type` tag; cached
/// and linked variants of the same media share a tag and differ by their
/// file field.
#[derive(Debug, Clone, PartialEq)]
pub enum InlineQueryResult {
  Article(InlineQueryResultArticle),
  Photo(InlineQueryResultPhoto),
  Gif(InlineQueryResultGif),
  Mpeg4Gif(InlineQueryResultMpeg4Gif),
  Video(InlineQueryResultVideo),
  Audio(InlineQueryResultAudio),
  Voice(InlineQueryResultVoice),
  Document(InlineQueryResultDocument),
  Location(InlineQueryResultLocation),
  Venue(InlineQueryResultVenue),
  Contact(InlineQueryResultContact),
  Game(InlineQueryResultGame),
  CachedPhoto(InlineQueryResultCachedPhoto),
  CachedGif(InlineQueryResultCachedGif),
  CachedMpeg4Gif(InlineQueryResultCachedMpeg4Gif),
  CachedSticker(InlineQueryResultCachedSticker),
  CachedDocument(InlineQueryResultCachedDocument),
  CachedVideo(InlineQueryResultCachedVideo),
  CachedVoice(InlineQueryResultCachedVoice),
  CachedAudio(InlineQueryResultCachedAudio),
}

impl InlineQueryResult {
  pub fn kind(&self) -> &'static str {
    match self {
      InlineQueryResult::Article(_) => InlineQueryResultArticle::TYPE,
      InlineQueryResult::Photo(_) => InlineQueryResultPhoto::TYPE,
      InlineQueryResult::Gif(_) => InlineQueryResultGif::TYPE,
      InlineQueryResult::Mpeg4Gif(_) => InlineQueryResultMpeg4Gif::TYPE,
      InlineQueryResult::Video(_) => InlineQueryResultVideo::TYPE,
      InlineQueryResult::Audio(_) => InlineQueryResultAudio::TYPE,
      InlineQueryResult::Voice(_) => InlineQueryResultVoice::TYPE,
      InlineQueryResult::Document(_) => InlineQueryResultDocument::TYPE,
      InlineQueryResult::Location(_) => InlineQueryResultLocation::TYPE,
      InlineQueryResult::Venue(_) => InlineQueryResultVenue::TYPE,
      InlineQueryResult::Contact(_) => InlineQueryResultContact::TYPE,
      InlineQueryResult::Game(_) => InlineQueryResultGame::TYPE,
      InlineQueryResult::CachedPhoto(_) => InlineQueryResultCachedPhoto::TYPE,
      InlineQueryResult::CachedGif(_) => InlineQueryResultCachedGif::TYPE,
      InlineQueryResult::CachedMpeg4Gif(_) => InlineQueryResultCachedMpeg4Gif::TYPE,
      InlineQueryResult::CachedSticker(_) => InlineQueryResultCachedSticker::TYPE,
      InlineQueryResult::CachedDocument(_) => InlineQueryResultCachedDocument::TYPE,
      InlineQueryResult::CachedVideo(_) => InlineQueryResultCachedVideo::TYPE,
      InlineQueryResult::CachedVoice(_) => InlineQueryResultCachedVoice::TYPE,
      InlineQueryResult::CachedAudio(_) => InlineQueryResultCachedAudio::TYPE,
    }
  }

  fn body(&self) -> Result<Value, serde_json::Error> {
    match self {
      InlineQueryResult::Article(r) => serde_json::to_value(r),
      InlineQueryResult::Photo(r) => serde_json::to_value(r),
      InlineQueryResult::Gif(r) => serde_json::to_value(r),
      InlineQueryResult::Mpeg4Gif(r) => serde_json::to_value(r),
      InlineQueryResult::Video(r) => serde_json::to_value(r),
      InlineQueryResult::Audio(r) => serde_json::to_value(r),
      InlineQueryResult::Voice(r) => serde_json::to_value(r),
      InlineQueryResult::Document(r) => serde_json::to_value(r),
      InlineQueryResult::Location(r) => serde_json::to_value(r),
      InlineQueryResult::Venue(r) => serde_json::to_value(r),
      InlineQueryResult::Contact(r) => serde_json::to_value(r),
      InlineQueryResult::Game(r) => serde_json::to_value(r),
      InlineQueryResult::CachedPhoto(r) => serde_json::to_value(r),
      InlineQueryResult::CachedGif(r) => serde_json::to_value(r),
      InlineQueryResult::CachedMpeg4Gif(r) => serde_json::to_value(r),
      InlineQueryResult::CachedSticker(r) => serde_json::to_value(r),
      InlineQueryResult::CachedDocument(r) => serde_json::to_value(r),
      InlineQueryResult::CachedVideo(r) => serde_json::to_value(r),
      InlineQueryResult::CachedVoice(r) => serde_json::to_value(r),
      InlineQueryResult::CachedAudio(r) => serde_json::to_value(r),
    }
  }
}

impl Serialize for InlineQueryResult {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut body = self.body().map_err(S::Error::custom)?;
    match body.as_object_mut() {
      Some(map) => {
        map.insert("type".to_string(), Value::from(self.kind()));
      }
      None => return Err(S::Error::custom("inline query result must be an object")),
    }
    body.serialize(serializer)
  }
}
