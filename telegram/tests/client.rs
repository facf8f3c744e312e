// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
mod common;

use common::{endpoint, http_bot, me_json, message_json, ok, TOKEN};
use serde_json::json;
use telegram::{
  methods::{GetChat, GetMe, GetUpdates, SendMediaGroup, SendMessage, SendPhoto},
  types::{InlineKeyboardButton, InlineKeyboardMarkup, InputMedia, InputMediaPhoto, ParseMode},
  Bot, Error, InputFile, TelegramClient,
};
use wiremock::{
  matchers::{body_json, body_string_contains, method, path, query_param},
  Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn get_me_uses_get_and_token_path() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path(endpoint("getMe")))
    .respond_with(ResponseTemplate::new(200).set_body_json(ok(me_json())))
    .expect(1)
    .mount(&server)
    .await;

  let mut bot = http_bot(&server);
  let me = bot.execute(&GetMe::new()).await.unwrap();

  assert_eq!(me.id, 777);
  assert_eq!(me.username.as_deref(), Some("tobe_bot"));
}

#[tokio::test]
async fn send_message_posts_json_body() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path(endpoint("sendMessage")))
    .and(body_json(json!({
      "chat_id": 42,
      "text": "*hi*",
      "parse_mode": "MarkdownV2",
      "reply_markup": {
        "inline_keyboard": [[{ "text": "open", "url": "https://example.com" }]]
      }
    })))
    .respond_with(ResponseTemplate::new(200).set_body_json(ok(message_json(10, 42, "hi"))))
    .expect(1)
    .mount(&server)
    .await;

  let mut bot = http_bot(&server);
  let keyboard =
    InlineKeyboardMarkup::default().row(vec![InlineKeyboardButton::url("open", "https://example.com")]);
  let message = bot
    .execute(
      &SendMessage::new(42, "*hi*")
        .parse_mode(ParseMode::MarkdownV2)
        .reply_markup(keyboard),
    )
    .await
    .unwrap();

  assert_eq!(message.message_id, 10);
  assert_eq!(message.chat.id, 42);
}

#[tokio::test]
async fn getters_send_query_parameters() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path(endpoint("getChat")))
    .and(query_param("chat_id", "@channel"))
    .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({
      "id": -1001,
      "type": "channel",
      "title": "News",
      "username": "channel"
    }))))
    .expect(1)
    .mount(&server)
    .await;

  let mut bot = http_bot(&server);
  let chat = bot.execute(&GetChat::new("@channel")).await.unwrap();

  assert_eq!(chat.id, -1001);
  assert_eq!(chat.title.as_deref(), Some("News"));
}

#[tokio::test]
async fn api_failure_carries_code_and_parameters() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path(endpoint("sendMessage")))
    .respond_with(ResponseTemplate::new(429).set_body_json(json!({
      "ok": false,
      "error_code": 429,
      "description": "Too Many Requests: retry after 5",
      "parameters": { "retry_after": 5 }
    })))
    .mount(&server)
    .await;

  let mut bot = http_bot(&server);
  let err = bot.execute(&SendMessage::new(1, "x")).await.unwrap_err();

  match err {
    Error::Api {
      code,
      description,
      retry_after,
      migrate_to_chat_id,
    } => {
      assert_eq!(code, 429);
      assert!(description.starts_with("Too Many Requests"));
      assert_eq!(retry_after, Some(5));
      assert_eq!(migrate_to_chat_id, None);
    }
    other => panic!("unexpected error: {other:?}"),
  }
}

#[tokio::test]
async fn ok_false_without_code_falls_back_to_status() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path(endpoint("getMe")))
    .respond_with(
      ResponseTemplate::new(401).set_body_json(json!({ "ok": false, "description": "Unauthorized" })),
    )
    .mount(&server)
    .await;

  let mut bot = http_bot(&server);
  let err = bot.execute(&GetMe::new()).await.unwrap_err();

  assert_eq!(err.api_code(), Some(401));
}

#[tokio::test]
async fn non_json_body_is_a_parse_error() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path(endpoint("getMe")))
    .respond_with(ResponseTemplate::new(200).set_body_string("<html>hello</html>"))
    .mount(&server)
    .await;

  let mut bot = http_bot(&server);
  let err = bot.execute(&GetMe::new()).await.unwrap_err();

  assert!(matches!(err, Error::ParseError(_)), "got {err:?}");
}

#[tokio::test]
async fn non_json_error_page_keeps_http_status() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path(endpoint("getMe")))
    .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
    .mount(&server)
    .await;

  let mut bot = http_bot(&server);
  let err = bot.execute(&GetMe::new()).await.unwrap_err();

  assert_eq!(err.api_code(), Some(502));
  match err {
    Error::Api { description, .. } => assert_eq!(description, "Bad Gateway"),
    other => panic!("unexpected error: {other:?}"),
  }
}

#[tokio::test]
async fn uploads_are_sent_as_multipart() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path(endpoint("sendPhoto")))
    .and(body_string_contains("name=\"photo\"; filename=\"cat.jpg\""))
    .and(body_string_contains("name=\"caption\""))
    .respond_with(ResponseTemplate::new(200).set_body_json(ok(message_json(3, 5, ""))))
    .expect(1)
    .mount(&server)
    .await;

  let mut bot = http_bot(&server);
  let photo = SendPhoto::new(5, InputFile::memory("cat.jpg", b"jpeg bytes".to_vec())).caption("cat");
  let message = bot.execute(&photo).await.unwrap();

  assert_eq!(message.message_id, 3);
}

#[tokio::test]
async fn media_group_with_repeated_file_names_sends_each_file() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path(endpoint("sendMediaGroup")))
    .and(body_string_contains("attach://img.jpg"))
    .and(body_string_contains("attach://1_img.jpg"))
    .and(body_string_contains("name=\"img.jpg\"; filename=\"img.jpg\""))
    .and(body_string_contains("name=\"1_img.jpg\"; filename=\"img.jpg\""))
    .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!([
      message_json(1, 5, ""),
      message_json(2, 5, "")
    ]))))
    .expect(1)
    .mount(&server)
    .await;

  let mut bot = http_bot(&server);
  let group = SendMediaGroup::new(
    5,
    vec![
      InputMedia::from(InputMediaPhoto::new(InputFile::memory("img.jpg", vec![1]))),
      InputMedia::from(InputMediaPhoto::new(InputFile::memory("img.jpg", vec![2]))),
    ],
  );
  let messages = bot.execute(&group).await.unwrap();

  assert_eq!(messages.len(), 2);
}

#[tokio::test]
async fn media_group_references_parts_by_name() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path(endpoint("sendMediaGroup")))
    .and(body_string_contains("attach://one.jpg"))
    .and(body_string_contains("name=\"one.jpg\"; filename=\"one.jpg\""))
    .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!([
      message_json(1, 5, ""),
      message_json(2, 5, "")
    ]))))
    .expect(1)
    .mount(&server)
    .await;

  let mut bot = http_bot(&server);
  let group = SendMediaGroup::new(
    5,
    vec![
      InputMedia::from(InputMediaPhoto::new(InputFile::memory("one.jpg", vec![1, 2]))),
      InputMedia::from(InputMediaPhoto::new("AgADBAAD")),
    ],
  );
  let messages = bot.execute(&group).await.unwrap();

  assert_eq!(messages.len(), 2);
}

#[tokio::test]
async fn missing_token_fails_before_any_request() {
  let server = MockServer::start().await;
  let client = TelegramClient::builder().api_url(server.uri()).build().unwrap();
  let mut bot = Bot::with_api("", client);

  let err = bot.execute(&GetUpdates::new()).await.unwrap_err();

  assert!(matches!(err, Error::MissingToken));
  assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn builder_rejects_empty_token() {
  assert!(matches!(
    Bot::builder().token("").build(),
    Err(Error::ConfigError(_))
  ));
  assert!(Bot::new(TOKEN).is_ok());
}
