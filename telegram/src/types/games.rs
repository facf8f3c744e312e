// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::{Animation, MessageEntity, PhotoSize, User};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
  pub title: String,
  pub description: String,
  pub photo: Vec<PhotoSize>,
  pub text: Option<String>,
  pub text_entities: Option<Vec<MessageEntity>>,
  pub animation: Option<Animation>,
}

/// Placeholder, holds no information.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CallbackGame {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameHighScore {
  pub position: i64,
  pub user: User,
  pub score: i64,
}
