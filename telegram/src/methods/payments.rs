// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::types::{InlineKeyboardMarkup, LabeledPrice, Message, ShippingOption};

method! {
  SendInvoice => "sendInvoice" -> Message {
    chat_id: i64,
    title: String,
    description: String,
    payload: String,
    provider_token: String,
    start_parameter: String,
    currency: String,
    prices: Vec<LabeledPrice>,
  }
  optional {
    provider_data: String,
    photo_url: String,
    photo_size: i64,
    photo_width: i64,
    photo_height: i64,
    need_name: bool,
    need_phone_number: bool,
    need_email: bool,
    need_shipping_address: bool,
    send_phone_number_to_provider: bool,
    send_email_to_provider: bool,
    is_flexible: bool,
    disable_notification: bool,
    reply_to_message_id: i64,
    reply_markup: InlineKeyboardMarkup,
  }
}

method! {
  /// `shipping_options` is required when `ok` is true, `error_message`
  /// when it is false.
  AnswerShippingQuery => "answerShippingQuery" -> bool {
    shipping_query_id: String,
    ok: bool,
  }
  optional {
    shipping_options: Vec<ShippingOption>,
    error_message: String,
  }
}

method! {
  AnswerPreCheckoutQuery => "answerPreCheckoutQuery" -> bool {
    pre_checkout_query_id: String,
    ok: bool,
  }
  optional {
    error_message: String,
  }
}
