// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Objects of the Bot API schema. Field names follow the wire format; the
//! only renames are `type` fields, exposed as `kind`.
mod common;
mod games;
mod inline;
mod markup;
mod media;
mod message;
mod passport;
mod payments;
mod stickers;
mod updates;
mod user;

pub use self::{
  common::*, games::*, inline::*, markup::*, media::*, message::*, passport::*, payments::*,
  stickers::*, updates::*, user::*,
};
pub(crate) use self::common::file_name;
