// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use std::{
  collections::{HashMap, VecDeque},
  sync::{Arc, Mutex},
};
use telegram::{Bot, BotApi, Error, Request};
use wiremock::MockServer;

pub const TOKEN: &str = "123456:TEST-token_x";

pub fn endpoint(method: &str) -> String {
  format!("/bot{}/{}", TOKEN, method)
}

pub fn ok(result: Value) -> Value {
  json!({ "ok": true, "result": result })
}

pub fn message_json(message_id: i64, chat_id: i64, text: &str) -> Value {
  json!({
    "message_id": message_id,
    "date": 1585000000,
    "chat": { "id": chat_id, "type": "private", "first_name": "Ann" },
    "from": { "id": chat_id, "is_bot": false, "first_name": "Ann" },
    "text": text
  })
}

pub fn me_json() -> Value {
  json!({
    "id": 777,
    "is_bot": true,
    "first_name": "Tobe",
    "username": "tobe_bot",
    "can_join_groups": true,
    "can_read_all_group_messages": false,
    "supports_inline_queries": false
  })
}

/// A bot talking HTTP to `server`.
pub fn http_bot(server: &MockServer) -> Bot {
  Bot::builder()
    .token(TOKEN)
    .api_url(server.uri())
    .build()
    .expect("bot should build")
}

type Answer = Result<Value, (i64, String)>;

/// In-memory transport: answers from per-method queues and records every
/// request it receives.
#[derive(Clone, Default)]
pub struct FakeApi {
  answers: Arc<Mutex<HashMap<String, VecDeque<Answer>>>>,
  sent: Arc<Mutex<Vec<Request>>>,
}

impl FakeApi {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn reply(self, method: &str, result: Value) -> Self {
    self.push(method, Ok(result));
    self
  }

  pub fn fail(self, method: &str, code: i64, description: &str) -> Self {
    self.push(method, Err((code, description.to_string())));
    self
  }

  fn push(&self, method: &str, answer: Answer) {
    self
      .answers
      .lock()
      .unwrap()
      .entry(method.to_string())
      .or_default()
      .push_back(answer);
  }

  pub fn sent(&self) -> Vec<Request> {
    self.sent.lock().unwrap().clone()
  }

  pub fn sent_names(&self) -> Vec<&'static str> {
    self.sent().iter().map(|r| r.name()).collect()
  }

  pub fn bot(&self) -> Bot {
    Bot::with_api(TOKEN, self.clone())
  }
}

#[async_trait]
impl BotApi for FakeApi {
  async fn request(&self, _token: &str, request: &Request) -> Result<Value, Error> {
    self.sent.lock().unwrap().push(request.clone());

    let answer = self
      .answers
      .lock()
      .unwrap()
      .get_mut(request.name())
      .and_then(|queue| queue.pop_front());

    match answer {
      Some(Ok(result)) => Ok(result),
      Some(Err((code, description))) => Err(Error::Api {
        code,
        description,
        retry_after: None,
        migrate_to_chat_id: None,
      }),
      None => Err(Error::Api {
        code: 404,
        description: "Not Found".to_string(),
        retry_after: None,
        migrate_to_chat_id: None,
      }),
    }
  }
}
