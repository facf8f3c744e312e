// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde_json::json;
use telegram::types::{
  ChatId, ChatMember, ChatMemberStatus, ChatType, EditResult, ForceReply, InputMedia,
  InputMediaVideo, KeyboardButton, PassportElementError, ReplyKeyboardMarkup, ReplyMarkup,
  StickerSet, Update, WebhookInfo,
};
use telegram::InputFile;

#[test]
fn message_update_parses_nested_objects() {
  let update: Update = serde_json::from_value(json!({
    "update_id": 1001,
    "message": {
      "message_id": 7,
      "date": 1585000000,
      "chat": { "id": -100500, "type": "supergroup", "title": "Rustaceans" },
      "from": { "id": 1, "is_bot": false, "first_name": "Ann", "last_name": "Lee" },
      "text": "/start now",
      "entities": [{ "type": "bot_command", "offset": 0, "length": 6 }],
      "reply_to_message": {
        "message_id": 6,
        "date": 1584999999,
        "chat": { "id": -100500, "type": "supergroup", "title": "Rustaceans" },
        "photo": [
          { "file_id": "small", "file_unique_id": "s", "width": 90, "height": 90 },
          { "file_id": "big", "file_unique_id": "b", "width": 800, "height": 800, "file_size": 1024 }
        ],
        "caption": "a cat"
      }
    }
  }))
  .unwrap();

  let message = update.any_message().unwrap();
  assert_eq!(message.chat.kind, ChatType::Supergroup);
  assert_eq!(message.from.as_ref().unwrap().full_name(), "Ann Lee");
  assert_eq!(message.entities.as_ref().unwrap()[0].kind, "bot_command");
  assert_eq!(
    message.date_time().unwrap().to_rfc3339(),
    "2020-03-23T21:46:40+00:00"
  );

  let reply = message.reply_to_message.as_ref().unwrap();
  assert_eq!(reply.text_or_caption(), Some("a cat"));
  assert_eq!(reply.photo.as_ref().unwrap()[1].file_size, Some(1024));
  assert!(reply.text.is_none());
}

#[test]
fn callback_query_update() {
  let update: Update = serde_json::from_value(json!({
    "update_id": 5,
    "callback_query": {
      "id": "cb1",
      "from": { "id": 9, "is_bot": false, "first_name": "Bo" },
      "chat_instance": "ci",
      "data": "vote:yes"
    }
  }))
  .unwrap();

  assert!(update.any_message().is_none());
  assert_eq!(
    update.callback_query.unwrap().data.as_deref(),
    Some("vote:yes")
  );
}

#[test]
fn chat_member_status() {
  let member: ChatMember = serde_json::from_value(json!({
    "user": { "id": 2, "is_bot": false, "first_name": "Cy" },
    "status": "administrator",
    "can_pin_messages": true,
    "custom_title": "boss"
  }))
  .unwrap();

  assert_eq!(member.status, ChatMemberStatus::Administrator);
  assert_eq!(member.can_pin_messages, Some(true));
  assert_eq!(member.can_post_messages, None);
}

#[test]
fn edit_result_is_message_or_true() {
  let done: EditResult = serde_json::from_value(json!(true)).unwrap();
  assert_eq!(done, EditResult::Done(true));
  assert!(done.message().is_none());

  let edited: EditResult = serde_json::from_value(json!({
    "message_id": 3,
    "date": 1585000000,
    "chat": { "id": 1, "type": "private" },
    "text": "edited",
    "edit_date": 1585000100
  }))
  .unwrap();
  let message = edited.message().unwrap();
  assert_eq!(message.text.as_deref(), Some("edited"));
  assert!(message.edit_date_time().is_some());
}

#[test]
fn sticker_set_with_mask_positions() {
  let set: StickerSet = serde_json::from_value(json!({
    "name": "masks_by_tobe_bot",
    "title": "Masks",
    "is_animated": false,
    "contains_masks": true,
    "stickers": [{
      "file_id": "st",
      "file_unique_id": "u",
      "width": 512,
      "height": 512,
      "is_animated": false,
      "emoji": "😎",
      "mask_position": { "point": "eyes", "x_shift": 0.0, "y_shift": -0.5, "scale": 1.5 }
    }]
  }))
  .unwrap();

  let mask = set.stickers[0].mask_position.unwrap();
  assert_eq!(mask.scale, 1.5);
}

#[test]
fn webhook_info_optional_fields() {
  let info: WebhookInfo = serde_json::from_value(json!({
    "url": "",
    "has_custom_certificate": false,
    "pending_update_count": 0
  }))
  .unwrap();

  assert!(info.url.is_empty());
  assert!(info.allowed_updates.is_none());
}

#[test]
fn reply_markup_serializes_without_wrapper() {
  let markup: ReplyMarkup =
    ReplyKeyboardMarkup::new(vec![vec![KeyboardButton::new("yes"), KeyboardButton::new("no")]])
      .resize()
      .into();

  assert_eq!(
    serde_json::to_value(&markup).unwrap(),
    json!({
      "keyboard": [[{ "text": "yes" }, { "text": "no" }]],
      "resize_keyboard": true
    })
  );

  let force: ReplyMarkup = ForceReply::default().into();
  assert_eq!(serde_json::to_value(&force).unwrap(), json!({ "force_reply": true }));
}

#[test]
fn input_media_is_tagged_and_refers_to_uploads() {
  let mut video = InputMediaVideo::new(InputFile::path("/tmp/clip.mp4"));
  video.thumb = Some(InputFile::memory("thumb.jpg", vec![0xff]));
  video.supports_streaming = Some(true);

  assert_eq!(
    serde_json::to_value(InputMedia::from(video)).unwrap(),
    json!({
      "type": "video",
      "media": "attach://clip.mp4",
      "thumb": "attach://thumb.jpg",
      "supports_streaming": true
    })
  );
}

#[test]
fn chat_id_forms() {
  assert_eq!(serde_json::to_value(ChatId::from(-100)).unwrap(), json!(-100));
  assert_eq!(
    serde_json::to_value(ChatId::from("@news")).unwrap(),
    json!("@news")
  );
  assert_eq!(ChatId::from(7i64).to_string(), "7");
}

#[test]
fn passport_errors_carry_source_tag() {
  let error = PassportElementError::Data {
    kind: "passport".to_string(),
    field_name: "document_no".to_string(),
    data_hash: "aGFzaA==".to_string(),
    message: "Wrong number".to_string(),
  };

  assert_eq!(
    serde_json::to_value(&error).unwrap(),
    json!({
      "source": "data",
      "type": "passport",
      "field_name": "document_no",
      "data_hash": "aGFzaA==",
      "message": "Wrong number"
    })
  );
}
