// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::types::{EditResult, GameHighScore, InlineKeyboardMarkup, Message};

method! {
  SendGame => "sendGame" -> Message {
    chat_id: i64,
    game_short_name: String,
  }
  optional {
    disable_notification: bool,
    reply_to_message_id: i64,
    reply_markup: InlineKeyboardMarkup,
  }
}

method! {
  SetGameScore => "setGameScore" -> EditResult {
    user_id: i64,
    score: i64,
  }
  optional {
    force: bool,
    disable_edit_message: bool,
    chat_id: i64,
    message_id: i64,
    inline_message_id: String,
  }
}

method! {
  GetGameHighScores => "getGameHighScores" -> Vec<GameHighScore>, Get {
    user_id: i64,
  }
  optional {
    chat_id: i64,
    message_id: i64,
    inline_message_id: String,
  }
}
