// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::types::{BotCommand, Chat, ChatId, ChatMember, ChatPermissions, InputFile};

method! {
  /// Bans a user. Users banned for more than 366 days or less than 30
  /// seconds are banned forever.
  KickChatMember => "kickChatMember" -> bool {
    chat_id: ChatId,
    user_id: i64,
  }
  optional {
    until_date: i64,
  }
}

method! {
  UnbanChatMember => "unbanChatMember" -> bool {
    chat_id: ChatId,
    user_id: i64,
  }
  optional {}
}

method! {
  RestrictChatMember => "restrictChatMember" -> bool {
    chat_id: ChatId,
    user_id: i64,
    permissions: ChatPermissions,
  }
  optional {
    until_date: i64,
  }
}

method! {
  /// Pass `false` for every permission to demote a user.
  PromoteChatMember => "promoteChatMember" -> bool {
    chat_id: ChatId,
    user_id: i64,
  }
  optional {
    can_change_info: bool,
    can_post_messages: bool,
    can_edit_messages: bool,
    can_delete_messages: bool,
    can_invite_users: bool,
    can_restrict_members: bool,
    can_pin_messages: bool,
    can_promote_members: bool,
  }
}

method! {
  SetChatAdministratorCustomTitle => "setChatAdministratorCustomTitle" -> bool {
    chat_id: ChatId,
    user_id: i64,
    custom_title: String,
  }
  optional {}
}

method! {
  SetChatPermissions => "setChatPermissions" -> bool {
    chat_id: ChatId,
    permissions: ChatPermissions,
  }
  optional {}
}

method! {
  ExportChatInviteLink => "exportChatInviteLink" -> String {
    chat_id: ChatId,
  }
  optional {}
}

method! {
  /// The photo must be uploaded; file ids and URLs are rejected.
  SetChatPhoto => "setChatPhoto" -> bool {
    chat_id: ChatId,
    photo: InputFile,
  }
  optional {}
  attachments [photo]
}

method! {
  DeleteChatPhoto => "deleteChatPhoto" -> bool {
    chat_id: ChatId,
  }
  optional {}
}

method! {
  SetChatTitle => "setChatTitle" -> bool {
    chat_id: ChatId,
    title: String,
  }
  optional {}
}

method! {
  SetChatDescription => "setChatDescription" -> bool {
    chat_id: ChatId,
  }
  optional {
    description: String,
  }
}

method! {
  PinChatMessage => "pinChatMessage" -> bool {
    chat_id: ChatId,
    message_id: i64,
  }
  optional {
    disable_notification: bool,
  }
}

method! {
  UnpinChatMessage => "unpinChatMessage" -> bool {
    chat_id: ChatId,
  }
  optional {}
}

method! {
  LeaveChat => "leaveChat" -> bool {
    chat_id: ChatId,
  }
  optional {}
}

method! {
  GetChat => "getChat" -> Chat, Get {
    chat_id: ChatId,
  }
  optional {}
}

method! {
  GetChatAdministrators => "getChatAdministrators" -> Vec<ChatMember>, Get {
    chat_id: ChatId,
  }
  optional {}
}

method! {
  GetChatMembersCount => "getChatMembersCount" -> i64, Get {
    chat_id: ChatId,
  }
  optional {}
}

method! {
  GetChatMember => "getChatMember" -> ChatMember, Get {
    chat_id: ChatId,
    user_id: i64,
  }
  optional {}
}

method! {
  SetChatStickerSet => "setChatStickerSet" -> bool {
    chat_id: ChatId,
    sticker_set_name: String,
  }
  optional {}
}

method! {
  DeleteChatStickerSet => "deleteChatStickerSet" -> bool {
    chat_id: ChatId,
  }
  optional {}
}

method! {
  AnswerCallbackQuery => "answerCallbackQuery" -> bool {
    callback_query_id: String,
  }
  optional {
    text: String,
    show_alert: bool,
    url: String,
    cache_time: i64,
  }
}

method! {
  SetMyCommands => "setMyCommands" -> bool {
    commands: Vec<BotCommand>,
  }
  optional {}
}

method! {
  GetMyCommands => "getMyCommands" -> Vec<BotCommand>, Get {}
  optional {}
}
