// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::PhotoSize;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sticker {
  pub file_id: String,
  pub file_unique_id: String,
  pub width: i64,
  pub height: i64,
  pub is_animated: bool,
  pub thumb: Option<PhotoSize>,
  pub emoji: Option<String>,
  pub set_name: Option<String>,
  pub mask_position: Option<MaskPosition>,
  pub file_size: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerSet {
  pub name: String,
  pub title: String,
  pub is_animated: bool,
  pub contains_masks: bool,
  pub stickers: Vec<Sticker>,
  pub thumb: Option<PhotoSize>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MaskPoint {
  Forehead,
  Eyes,
  Mouth,
  Chin,
}

/// Where a mask is placed on faces by default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaskPosition {
  pub point: MaskPoint,
  pub x_shift: f64,
  pub y_shift: f64,
  pub scale: f64,
}
