// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::types::{ChatId, File, InputFile, MaskPosition, Message, ReplyMarkup, StickerSet};

method! {
  SendSticker => "sendSticker" -> Message {
    chat_id: ChatId,
    sticker: InputFile,
  }
  optional {
    disable_notification: bool,
    reply_to_message_id: i64,
    reply_markup: ReplyMarkup,
  }
  attachments [sticker]
}

method! {
  GetStickerSet => "getStickerSet" -> StickerSet, Get {
    name: String,
  }
  optional {}
}

method! {
  /// Uploads a .PNG for later use in createNewStickerSet and addStickerToSet.
  UploadStickerFile => "uploadStickerFile" -> File {
    user_id: i64,
    png_sticker: InputFile,
  }
  optional {}
  attachments [png_sticker]
}

method! {
  /// Exactly one of `png_sticker` or `tgs_sticker` must be set.
  CreateNewStickerSet => "createNewStickerSet" -> bool {
    user_id: i64,
    name: String,
    title: String,
    emojis: String,
  }
  optional {
    png_sticker: InputFile,
    tgs_sticker: InputFile,
    contains_masks: bool,
    mask_position: MaskPosition,
  }
  attachments [png_sticker, tgs_sticker]
}

method! {
  AddStickerToSet => "addStickerToSet" -> bool {
    user_id: i64,
    name: String,
    emojis: String,
  }
  optional {
    png_sticker: InputFile,
    tgs_sticker: InputFile,
    mask_position: MaskPosition,
  }
  attachments [png_sticker, tgs_sticker]
}

method! {
  SetStickerPositionInSet => "setStickerPositionInSet" -> bool {
    sticker: String,
    position: i64,
  }
  optional {}
}

method! {
  DeleteStickerFromSet => "deleteStickerFromSet" -> bool {
    sticker: String,
  }
  optional {}
}

method! {
  SetStickerSetThumb => "setStickerSetThumb" -> bool {
    name: String,
    user_id: i64,
  }
  optional {
    thumb: InputFile,
  }
  attachments [thumb]
}
