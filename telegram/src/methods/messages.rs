// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::types::{
  ChatAction, ChatId, EditResult, File, InlineKeyboardMarkup, InputFile, InputMedia, Message,
  ParseMode, Poll, PollType, ReplyMarkup, User, UserProfilePhotos,
};

method! {
  /// Basic information about the bot.
  GetMe => "getMe" -> User, Get {}
  optional {}
}

method! {
  SendMessage => "sendMessage" -> Message {
    chat_id: ChatId,
    text: String,
  }
  optional {
    parse_mode: ParseMode,
    disable_web_page_preview: bool,
    disable_notification: bool,
    reply_to_message_id: i64,
    reply_markup: ReplyMarkup,
  }
}

method! {
  ForwardMessage => "forwardMessage" -> Message {
    chat_id: ChatId,
    from_chat_id: ChatId,
    message_id: i64,
  }
  optional {
    disable_notification: bool,
  }
}

method! {
  SendPhoto => "sendPhoto" -> Message {
    chat_id: ChatId,
    photo: InputFile,
  }
  optional {
    caption: String,
    parse_mode: ParseMode,
    disable_notification: bool,
    reply_to_message_id: i64,
    reply_markup: ReplyMarkup,
  }
  attachments [photo]
}

method! {
  /// Audio files must be in .MP3 or .M4A format.
  SendAudio => "sendAudio" -> Message {
    chat_id: ChatId,
    audio: InputFile,
  }
  optional {
    caption: String,
    parse_mode: ParseMode,
    duration: i64,
    performer: String,
    title: String,
    thumb: InputFile,
    disable_notification: bool,
    reply_to_message_id: i64,
    reply_markup: ReplyMarkup,
  }
  attachments [audio, thumb]
}

method! {
  SendDocument => "sendDocument" -> Message {
    chat_id: ChatId,
    document: InputFile,
  }
  optional {
    thumb: InputFile,
    caption: String,
    parse_mode: ParseMode,
    disable_notification: bool,
    reply_to_message_id: i64,
    reply_markup: ReplyMarkup,
  }
  attachments [document, thumb]
}

method! {
  SendVideo => "sendVideo" -> Message {
    chat_id: ChatId,
    video: InputFile,
  }
  optional {
    duration: i64,
    width: i64,
    height: i64,
    thumb: InputFile,
    caption: String,
    parse_mode: ParseMode,
    supports_streaming: bool,
    disable_notification: bool,
    reply_to_message_id: i64,
    reply_markup: ReplyMarkup,
  }
  attachments [video, thumb]
}

method! {
  /// GIF or H.264/MPEG-4 AVC video without sound.
  SendAnimation => "sendAnimation" -> Message {
    chat_id: ChatId,
    animation: InputFile,
  }
  optional {
    duration: i64,
    width: i64,
    height: i64,
    thumb: InputFile,
    caption: String,
    parse_mode: ParseMode,
    disable_notification: bool,
    reply_to_message_id: i64,
    reply_markup: ReplyMarkup,
  }
  attachments [animation, thumb]
}

method! {
  SendVoice => "sendVoice" -> Message {
    chat_id: ChatId,
    voice: InputFile,
  }
  optional {
    caption: String,
    parse_mode: ParseMode,
    duration: i64,
    disable_notification: bool,
    reply_to_message_id: i64,
    reply_markup: ReplyMarkup,
  }
  attachments [voice]
}

method! {
  SendVideoNote => "sendVideoNote" -> Message {
    chat_id: ChatId,
    video_note: InputFile,
  }
  optional {
    duration: i64,
    length: i64,
    thumb: InputFile,
    disable_notification: bool,
    reply_to_message_id: i64,
    reply_markup: ReplyMarkup,
  }
  attachments [video_note, thumb]
}

method! {
  /// Sends 2 to 10 photos or videos as an album.
  SendMediaGroup => "sendMediaGroup" -> Vec<Message> {
    chat_id: ChatId,
    media: Vec<InputMedia>,
  }
  optional {
    disable_notification: bool,
    reply_to_message_id: i64,
  }
  attachments [media]
}

method! {
  SendLocation => "sendLocation" -> Message {
    chat_id: ChatId,
    latitude: f64,
    longitude: f64,
  }
  optional {
    live_period: i64,
    disable_notification: bool,
    reply_to_message_id: i64,
    reply_markup: ReplyMarkup,
  }
}

method! {
  EditMessageLiveLocation => "editMessageLiveLocation" -> EditResult {
    latitude: f64,
    longitude: f64,
  }
  optional {
    chat_id: ChatId,
    message_id: i64,
    inline_message_id: String,
    reply_markup: InlineKeyboardMarkup,
  }
}

method! {
  StopMessageLiveLocation => "stopMessageLiveLocation" -> EditResult {}
  optional {
    chat_id: ChatId,
    message_id: i64,
    inline_message_id: String,
    reply_markup: InlineKeyboardMarkup,
  }
}

method! {
  SendVenue => "sendVenue" -> Message {
    chat_id: ChatId,
    latitude: f64,
    longitude: f64,
    title: String,
    address: String,
  }
  optional {
    foursquare_id: String,
    foursquare_type: String,
    disable_notification: bool,
    reply_to_message_id: i64,
    reply_markup: ReplyMarkup,
  }
}

method! {
  SendContact => "sendContact" -> Message {
    chat_id: ChatId,
    phone_number: String,
    first_name: String,
  }
  optional {
    last_name: String,
    vcard: String,
    disable_notification: bool,
    reply_to_message_id: i64,
    reply_markup: ReplyMarkup,
  }
}

method! {
  SendPoll => "sendPoll" -> Message {
    chat_id: ChatId,
    question: String,
    options: Vec<String>,
  }
  optional {
    is_anonymous: bool,
    r#type: PollType,
    allows_multiple_answers: bool,
    correct_option_id: i64,
    explanation: String,
    explanation_parse_mode: ParseMode,
    open_period: i64,
    close_date: i64,
    is_closed: bool,
    disable_notification: bool,
    reply_to_message_id: i64,
    reply_markup: ReplyMarkup,
  }
}

method! {
  /// Emoji is one of 🎲 or 🎯; the API picks 🎲 when unset.
  SendDice => "sendDice" -> Message {
    chat_id: ChatId,
  }
  optional {
    emoji: String,
    disable_notification: bool,
    reply_to_message_id: i64,
    reply_markup: ReplyMarkup,
  }
}

method! {
  SendChatAction => "sendChatAction" -> bool {
    chat_id: ChatId,
    action: ChatAction,
  }
  optional {}
}

method! {
  GetUserProfilePhotos => "getUserProfilePhotos" -> UserProfilePhotos, Get {
    user_id: i64,
  }
  optional {
    offset: i64,
    limit: i64,
  }
}

method! {
  GetFile => "getFile" -> File, Get {
    file_id: String,
  }
  optional {}
}

method! {
  EditMessageText => "editMessageText" -> EditResult {
    text: String,
  }
  optional {
    chat_id: ChatId,
    message_id: i64,
    inline_message_id: String,
    parse_mode: ParseMode,
    disable_web_page_preview: bool,
    reply_markup: InlineKeyboardMarkup,
  }
}

method! {
  EditMessageCaption => "editMessageCaption" -> EditResult {}
  optional {
    chat_id: ChatId,
    message_id: i64,
    inline_message_id: String,
    caption: String,
    parse_mode: ParseMode,
    reply_markup: InlineKeyboardMarkup,
  }
}

method! {
  EditMessageMedia => "editMessageMedia" -> EditResult {
    media: InputMedia,
  }
  optional {
    chat_id: ChatId,
    message_id: i64,
    inline_message_id: String,
    reply_markup: InlineKeyboardMarkup,
  }
  attachments [media]
}

method! {
  EditMessageReplyMarkup => "editMessageReplyMarkup" -> EditResult {}
  optional {
    chat_id: ChatId,
    message_id: i64,
    inline_message_id: String,
    reply_markup: InlineKeyboardMarkup,
  }
}

method! {
  StopPoll => "stopPoll" -> Poll {
    chat_id: ChatId,
    message_id: i64,
  }
  optional {
    reply_markup: InlineKeyboardMarkup,
  }
}

method! {
  /// Messages can only be deleted within 48 hours of sending.
  DeleteMessage => "deleteMessage" -> bool {
    chat_id: ChatId,
    message_id: i64,
  }
  optional {}
}
