// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  propagation::{self, FieldRule},
  types::{InputFile, InputMedia},
};
use error::Error;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet, VecDeque};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
  Get,
  Post,
}

/// A remote operation of the Bot API.
///
/// Implementors serialize to the parameter object of the call. `FIELDS`
/// lists every parameter the operation accepts, required or not.
pub trait Method: Serialize + Send + Sync {
  type Response: DeserializeOwned + Send;

  const NAME: &'static str;
  const HTTP_METHOD: HttpMethod = HttpMethod::Post;
  const FIELDS: &'static [&'static str];

  /// Files that must travel as multipart parts.
  fn attachments(&self) -> Vec<Attachment> {
    Vec::new()
  }
}

/// A file part of a multipart request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
  pub name: String,
  /// Parameter the file belongs to.
  pub param: String,
  pub file: InputFile,
  /// The part stands in for the parameter of the same name.
  pub(crate) replaces_param: bool,
}

impl Attachment {
  pub fn param(field: impl Into<String>, file: InputFile) -> Self {
    let field = field.into();
    Self {
      name: field.clone(),
      param: field,
      file,
      replaces_param: true,
    }
  }

  /// A file referenced as `attach://<name>` from inside `field`.
  pub fn nested(field: impl Into<String>, name: impl Into<String>, file: InputFile) -> Self {
    Self {
      name: name.into(),
      param: field.into(),
      file,
      replaces_param: false,
    }
  }
}

/// Collects uploads carried by a method parameter.
pub trait Attach {
  fn attach(&self, field: &str, out: &mut Vec<Attachment>);
}

impl Attach for InputFile {
  fn attach(&self, field: &str, out: &mut Vec<Attachment>) {
    if self.is_upload() {
      out.push(Attachment::param(field, self.clone()));
    }
  }
}

impl Attach for InputMedia {
  fn attach(&self, field: &str, out: &mut Vec<Attachment>) {
    for file in std::iter::once(self.media()).chain(self.thumb()) {
      if let Some(name) = file.attach_name() {
        out.push(Attachment::nested(field, name, file.clone()));
      }
    }
  }
}

impl<T: Attach> Attach for Option<T> {
  fn attach(&self, field: &str, out: &mut Vec<Attachment>) {
    if let Some(inner) = self {
      inner.attach(field, out);
    }
  }
}

impl<T: Attach> Attach for Vec<T> {
  fn attach(&self, field: &str, out: &mut Vec<Attachment>) {
    for item in self {
      item.attach(field, out);
    }
  }
}

/// A method prepared for sending: its name, verb and parameters as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
  name: &'static str,
  http_method: HttpMethod,
  fields: &'static [&'static str],
  params: Map<String, Value>,
  attachments: Vec<Attachment>,
}

impl Request {
  pub fn new<M: Method>(method: &M) -> Result<Self, Error> {
    let mut params = match serde_json::to_value(method)? {
      Value::Object(map) => map,
      Value::Null => Map::new(),
      other => {
        return Err(Error::ParseError(format!(
          "{} parameters must serialize to an object, got {}",
          M::NAME,
          other
        )))
      }
    };

    let mut attachments = method.attachments();
    unique_part_names(&mut attachments, &mut params);

    Ok(Self {
      name: M::NAME,
      http_method: M::HTTP_METHOD,
      fields: M::FIELDS,
      params,
      attachments,
    })
  }

  pub fn name(&self) -> &'static str {
    self.name
  }

  pub fn http_method(&self) -> HttpMethod {
    self.http_method
  }

  pub fn params(&self) -> &Map<String, Value> {
    &self.params
  }

  pub fn param(&self, key: &str) -> Option<&Value> {
    self.params.get(key)
  }

  pub fn attachments(&self) -> &[Attachment] {
    &self.attachments
  }

  pub fn is_multipart(&self) -> bool {
    !self.attachments.is_empty()
  }

  /// Whether the method takes a parameter called `key`.
  pub fn accepts(&self, key: &str) -> bool {
    self
      .fields
      .iter()
      .any(|field| field.trim_start_matches("r#") == key)
  }

  /// Sets an accepted parameter. Returns `false` and leaves the request
  /// untouched when the method has no such parameter. Uploads previously
  /// carried by the parameter are dropped.
  pub fn set_param(&mut self, key: &str, value: Value) -> bool {
    if !self.accepts(key) {
      return false;
    }
    self.attachments.retain(|a| a.param != key);
    self.params.insert(key.to_string(), value);
    true
  }

  /// Parameters as they go over the wire. Uploads sent as their own parts
  /// are left out.
  pub fn wire_params(&self) -> Map<String, Value> {
    self
      .params
      .iter()
      .filter(|(key, _)| {
        !self
          .attachments
          .iter()
          .any(|a| a.replaces_param && &a.name == *key)
      })
      .map(|(key, value)| (key.clone(), value.clone()))
      .collect()
  }

  /// Wire parameters flattened to text for query strings and form fields.
  pub fn text_params(&self) -> Vec<(String, String)> {
    self
      .wire_params()
      .into_iter()
      .map(|(key, value)| (key, stringify(&value)))
      .collect()
  }
}

/// Gives every nested part a name no other part of the request uses and
/// points the matching `attach://` references at it.
fn unique_part_names(attachments: &mut [Attachment], params: &mut Map<String, Value>) {
  let mut taken: HashSet<String> = attachments
    .iter()
    .filter(|a| a.replaces_param)
    .map(|a| a.name.clone())
    .collect();
  let mut renames: HashMap<(String, String), VecDeque<String>> = HashMap::new();

  for (index, attachment) in attachments.iter_mut().enumerate() {
    if attachment.replaces_param {
      continue;
    }
    let original = attachment.name.clone();
    let mut suffix = index;
    while taken.contains(&attachment.name) {
      attachment.name = format!("{}_{}", suffix, original);
      suffix += 1;
    }
    taken.insert(attachment.name.clone());
    renames
      .entry((attachment.param.clone(), original))
      .or_default()
      .push_back(attachment.name.clone());
  }

  for ((param, original), mut names) in renames {
    if let Some(value) = params.get_mut(&param) {
      rewrite_references(value, &format!("attach://{}", original), &mut names);
    }
  }
}

// Values are visited in the order `Attach` collects files: list order,
// then `media` before `thumb`.
fn rewrite_references(value: &mut Value, reference: &str, names: &mut VecDeque<String>) {
  match value {
    Value::String(s) if s == reference => {
      if let Some(name) = names.pop_front() {
        *s = format!("attach://{}", name);
      }
    }
    Value::Array(items) => {
      for item in items {
        rewrite_references(item, reference, names);
      }
    }
    Value::Object(map) => {
      for item in map.values_mut() {
        rewrite_references(item, reference, names);
      }
    }
    _ => {}
  }
}

fn stringify(value: &Value) -> String {
  match value {
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}

/// A request together with its propagation options.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
  pub(crate) request: Request,
  pub(crate) propagate: bool,
  pub(crate) rules: Vec<FieldRule>,
}

impl Call {
  pub fn new<M: Method>(method: &M) -> Result<Self, Error> {
    Ok(Self::from(Request::new(method)?))
  }

  /// Fill accepted parameters from the propagated values before sending.
  pub fn propagate(mut self) -> Self {
    self.propagate = true;
    self
  }

  /// Store the value at `path` of the result under `key` after a
  /// successful call.
  pub fn propagate_field(mut self, path: impl Into<String>, key: impl Into<String>) -> Self {
    self.rules.push(FieldRule::new(path, key));
    self
  }

  pub fn name(&self) -> &'static str {
    self.request.name()
  }

  pub fn request(&self) -> &Request {
    &self.request
  }

  pub fn request_mut(&mut self) -> &mut Request {
    &mut self.request
  }
}

impl From<Request> for Call {
  fn from(request: Request) -> Self {
    Self {
      request,
      propagate: false,
      rules: Vec::new(),
    }
  }
}

/// The `result` of a successful call.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
  method: &'static str,
  result: Value,
}

impl Response {
  pub fn new(method: &'static str, result: Value) -> Self {
    Self { method, result }
  }

  pub fn method(&self) -> &'static str {
    self.method
  }

  pub fn result(&self) -> &Value {
    &self.result
  }

  pub fn into_result(self) -> Value {
    self.result
  }

  pub fn parse<T: DeserializeOwned>(&self) -> Result<T, Error> {
    serde_json::from_value(self.result.clone())
      .map_err(|e| Error::ParseError(format!("{} result: {}", self.method, e)))
  }

  pub fn extract(&self, path: &str) -> Option<&Value> {
    propagation::extract(&self.result, path)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    methods::{GetMe, SendMediaGroup, SendMessage, SendPhoto, SendPoll},
    types::{InputMediaPhoto, InputMediaVideo, ParseMode, PollType},
  };
  use serde_json::json;

  #[test]
  fn request_skips_unset_optionals() {
    let request = Request::new(&SendMessage::new(42, "hello")).unwrap();

    assert_eq!(request.name(), "sendMessage");
    assert_eq!(request.http_method(), HttpMethod::Post);
    assert_eq!(
      Value::Object(request.params().clone()),
      json!({ "chat_id": 42, "text": "hello" })
    );
    assert!(!request.is_multipart());
  }

  #[test]
  fn parameterless_method_has_empty_params() {
    let request = Request::new(&GetMe::new()).unwrap();
    assert_eq!(request.http_method(), HttpMethod::Get);
    assert!(request.params().is_empty());
  }

  #[test]
  fn set_param_only_touches_accepted_keys() {
    let mut request = Request::new(&SendMessage::new(1, "x")).unwrap();

    assert!(request.set_param("reply_to_message_id", json!(7)));
    assert!(!request.set_param("offset", json!(3)));
    assert_eq!(request.param("reply_to_message_id"), Some(&json!(7)));
    assert!(request.param("offset").is_none());
  }

  #[test]
  fn text_params_keep_strings_raw() {
    let request =
      Request::new(&SendMessage::new("@channel", "hi").parse_mode(ParseMode::MarkdownV2)).unwrap();
    let mut params = request.text_params();
    params.sort();

    assert_eq!(
      params,
      vec![
        ("chat_id".to_string(), "@channel".to_string()),
        ("parse_mode".to_string(), "MarkdownV2".to_string()),
        ("text".to_string(), "hi".to_string()),
      ]
    );
  }

  #[test]
  fn top_level_upload_becomes_its_own_part() {
    let photo = SendPhoto::new(5, InputFile::memory("cat.jpg", vec![1, 2, 3])).caption("cat");
    let request = Request::new(&photo).unwrap();

    assert!(request.is_multipart());
    assert_eq!(request.attachments().len(), 1);
    assert_eq!(request.attachments()[0].name, "photo");
    assert!(!request.wire_params().contains_key("photo"));
    assert_eq!(request.wire_params()["caption"], "cat");
  }

  #[test]
  fn file_references_are_plain_params() {
    let request = Request::new(&SendPhoto::new(5, "AgADBAAD")).unwrap();
    assert!(!request.is_multipart());
    assert_eq!(request.wire_params()["photo"], "AgADBAAD");
  }

  #[test]
  fn media_group_uploads_are_referenced_by_name() {
    let group = SendMediaGroup::new(
      5,
      vec![
        InputMedia::from(InputMediaPhoto::new(InputFile::memory("a.jpg", vec![0]))),
        InputMedia::from(InputMediaPhoto::new("https://example.com/b.jpg")),
      ],
    );
    let request = Request::new(&group).unwrap();

    assert_eq!(request.attachments().len(), 1);
    assert_eq!(request.attachments()[0].name, "a.jpg");
    assert_eq!(
      request.wire_params()["media"],
      json!([
        { "type": "photo", "media": "attach://a.jpg" },
        { "type": "photo", "media": "https://example.com/b.jpg" }
      ])
    );
  }

  #[test]
  fn uploads_sharing_a_file_name_get_distinct_parts() {
    let mut video = InputMediaVideo::new(InputFile::path("/tmp/b/cat.jpg"));
    video.thumb = Some(InputFile::memory("cat.jpg", vec![2]));
    let group = SendMediaGroup::new(
      5,
      vec![
        InputMedia::from(InputMediaPhoto::new(InputFile::path("/tmp/a/cat.jpg"))),
        InputMedia::from(video),
      ],
    );
    let request = Request::new(&group).unwrap();

    let names: Vec<_> = request.attachments().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["cat.jpg", "1_cat.jpg", "2_cat.jpg"]);
    assert_eq!(
      request.attachments()[1].file,
      InputFile::path("/tmp/b/cat.jpg")
    );
    assert_eq!(
      request.wire_params()["media"],
      json!([
        { "type": "photo", "media": "attach://cat.jpg" },
        { "type": "video", "media": "attach://1_cat.jpg", "thumb": "attach://2_cat.jpg" }
      ])
    );
  }

  #[test]
  fn repeated_in_memory_names_are_numbered_in_order() {
    let group = SendMediaGroup::new(
      5,
      vec![
        InputMedia::from(InputMediaPhoto::new(InputFile::memory("img.jpg", vec![0]))),
        InputMedia::from(InputMediaPhoto::new(InputFile::memory("img.jpg", vec![1]))),
      ],
    );
    let request = Request::new(&group).unwrap();

    assert_eq!(request.attachments()[0].name, "img.jpg");
    assert_eq!(request.attachments()[1].name, "1_img.jpg");
    assert_eq!(
      request.attachments()[1].file,
      InputFile::memory("img.jpg", vec![1])
    );
  }

  #[test]
  fn replacing_an_uploaded_param_drops_its_part() {
    let mut request =
      Request::new(&SendPhoto::new(5, InputFile::memory("x.jpg", vec![1]))).unwrap();
    assert!(request.is_multipart());

    assert!(request.set_param("photo", json!("AgADfileid")));

    assert!(!request.is_multipart());
    assert!(request.attachments().is_empty());
    assert_eq!(request.wire_params()["photo"], "AgADfileid");
  }

  #[test]
  fn replacing_media_drops_nested_parts() {
    let group = SendMediaGroup::new(
      5,
      vec![InputMedia::from(InputMediaPhoto::new(InputFile::memory("a.jpg", vec![0])))],
    );
    let mut request = Request::new(&group).unwrap();

    request.set_param("media", json!([{ "type": "photo", "media": "AgADfileid" }]));
    assert!(!request.is_multipart());
  }

  #[test]
  fn raw_identifier_fields_are_accepted_by_plain_name() {
    let poll = SendPoll::new(1, "Best crab?", vec!["Ferris".to_string()]).r#type(PollType::Quiz);
    let mut request = Request::new(&poll).unwrap();

    assert!(request.accepts("type"));
    assert_eq!(request.param("type"), Some(&json!("quiz")));
    assert!(request.set_param("type", json!("regular")));
    assert_eq!(request.param("type"), Some(&json!("regular")));
  }

  #[test]
  fn call_collects_propagation_rules() {
    let call = Call::new(&GetMe::new())
      .unwrap()
      .propagate()
      .propagate_field("id", "user_id");

    assert!(call.propagate);
    assert_eq!(call.rules, vec![FieldRule::new("id", "user_id")]);
    assert_eq!(call.name(), "getMe");
  }

  #[test]
  fn response_parses_typed_result() {
    let response = Response::new("getChatMembersCount", json!(12));
    assert_eq!(response.parse::<i64>().unwrap(), 12);
    assert!(matches!(
      response.parse::<String>(),
      Err(Error::ParseError(_))
    ));
  }
}
