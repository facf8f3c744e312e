// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! One struct per Bot API operation.
//!
//! Required parameters are taken by `new`, optional ones are set with the
//! setter of the same name. Getters go out as GET with a query string,
//! everything else as POST.

// Declares a method struct, its constructor and setters, and the `Method`
// impl. Verb defaults to POST; fields listed under `attachments` are
// scanned for uploads.
macro_rules! method {
  (
    $(#[$meta:meta])*
    $name:ident => $api:literal -> $resp:ty $(, $verb:ident)? {
      $( $req:ident : $req_ty:ty ),* $(,)?
    }
    optional {
      $( $opt:ident : $opt_ty:ty ),* $(,)?
    }
    $( attachments [ $( $att:ident ),* $(,)? ] )?
  ) => {
    $(#[$meta])*
    #[derive(Debug, Clone, serde::Serialize)]
    pub struct $name {
      $( pub $req: $req_ty, )*
      $(
        #[serde(skip_serializing_if = "Option::is_none")]
        pub $opt: Option<$opt_ty>,
      )*
    }

    impl $name {
      #[allow(clippy::new_without_default, clippy::too_many_arguments)]
      pub fn new($( $req: impl Into<$req_ty> ),*) -> Self {
        Self {
          $( $req: $req.into(), )*
          $( $opt: None, )*
        }
      }

      $(
        pub fn $opt(mut self, $opt: impl Into<$opt_ty>) -> Self {
          self.$opt = Some($opt.into());
          self
        }
      )*
    }

    impl $crate::request::Method for $name {
      type Response = $resp;

      const NAME: &'static str = $api;
      $( const HTTP_METHOD: $crate::request::HttpMethod = $crate::request::HttpMethod::$verb; )?
      const FIELDS: &'static [&'static str] = &[ $( stringify!($req), )* $( stringify!($opt), )* ];

      $(
        fn attachments(&self) -> Vec<$crate::request::Attachment> {
          let mut out = Vec::new();
          $( $crate::request::Attach::attach(&self.$att, stringify!($att), &mut out); )*
          out
        }
      )?
    }
  };
}

mod chat;
mod games;
mod inline;
mod messages;
mod passport;
mod payments;
mod stickers;
mod updates;

pub use self::{
  chat::*, games::*, inline::*, messages::*, passport::*, payments::*, stickers::*, updates::*,
};
