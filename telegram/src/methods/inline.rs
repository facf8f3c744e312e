// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::types::InlineQueryResult;

method! {
  /// No more than 50 results per query are allowed.
  AnswerInlineQuery => "answerInlineQuery" -> bool {
    inline_query_id: String,
    results: Vec<InlineQueryResult>,
  }
  optional {
    cache_time: i64,
    is_personal: bool,
    next_offset: String,
    switch_pm_text: String,
    switch_pm_parameter: String,
  }
}
