// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::types::PassportElementError;

method! {
  /// The user cannot resubmit the Passport until the errors are fixed.
  SetPassportDataErrors => "setPassportDataErrors" -> bool {
    user_id: i64,
    errors: Vec<PassportElementError>,
  }
  optional {}
}
