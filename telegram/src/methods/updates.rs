// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::types::{InputFile, Update, WebhookInfo};

method! {
  /// Long polling. Updates with an id below `offset` are confirmed and
  /// dropped by the server.
  GetUpdates => "getUpdates" -> Vec<Update>, Get {}
  optional {
    offset: i64,
    limit: i64,
    timeout: i64,
    allowed_updates: Vec<String>,
  }
}

method! {
  SetWebhook => "setWebhook" -> bool {
    url: String,
  }
  optional {
    certificate: InputFile,
    max_connections: i64,
    allowed_updates: Vec<String>,
  }
  attachments [certificate]
}

method! {
  DeleteWebhook => "deleteWebhook" -> bool {}
  optional {}
}

method! {
  GetWebhookInfo => "getWebhookInfo" -> WebhookInfo, Get {}
  optional {}
}
