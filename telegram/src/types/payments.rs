// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::User;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// A portion of the price; `amount` is in the smallest units of the currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledPrice {
  pub label: String,
  pub amount: i64,
}

impl LabeledPrice {
  pub fn new(label: impl Into<String>, amount: i64) -> Self {
    Self {
      label: label.into(),
      amount,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
  pub title: String,
  pub description: String,
  pub start_parameter: String,
  pub currency: String,
  pub total_amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
  pub country_code: String,
  pub state: String,
  pub city: String,
  pub street_line1: String,
  pub street_line2: String,
  pub post_code: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderInfo {
  pub name: Option<String>,
  pub phone_number: Option<String>,
  pub email: Option<String>,
  pub shipping_address: Option<ShippingAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingOption {
  pub id: String,
  pub title: String,
  pub prices: Vec<LabeledPrice>,
}

impl ShippingOption {
  pub fn new(id: impl Into<String>, title: impl Into<String>, prices: Vec<LabeledPrice>) -> Self {
    Self {
      id: id.into(),
      title: title.into(),
      prices,
    }
  }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessfulPayment {
  pub currency: String,
  pub total_amount: i64,
  pub invoice_payload: String,
  pub shipping_option_id: Option<String>,
  pub order_info: Option<OrderInfo>,
  pub telegram_payment_charge_id: String,
  pub provider_payment_charge_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingQuery {
  pub id: String,
  pub from: User,
  pub invoice_payload: String,
  pub shipping_address: ShippingAddress,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreCheckoutQuery {
  pub id: String,
  pub from: User,
  pub currency: String,
  pub total_amount: i64,
  pub invoice_payload: String,
  pub shipping_option_id: Option<String>,
  pub order_info: Option<OrderInfo>,
}
