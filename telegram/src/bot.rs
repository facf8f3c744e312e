// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  builders::BotBuilder,
  client::BotApi,
  methods::GetMe,
  pipeline::Pipeline,
  propagation::{FieldRule, PropagatedValues},
  request::{Call, Method, Response},
  types::User,
};
use error::Error;
use std::{fmt, sync::Arc};
use tracing::{debug, info, instrument, warn};

/// How a batch of calls is dispatched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecuteOptions {
  /// Keep dispatching after a failed call.
  pub forced: bool,
  /// Fill parameters of every call from the propagated values.
  pub propagate: bool,
}

impl ExecuteOptions {
  pub fn forced() -> Self {
    Self {
      forced: true,
      ..Self::default()
    }
  }

  pub fn propagate() -> Self {
    Self {
      propagate: true,
      ..Self::default()
    }
  }
}

/// Holds the token and dispatches methods one at a time, carrying values
/// from responses into later requests.
pub struct Bot {
  token: String,
  api: Arc<dyn BotApi>,
  rules: Vec<FieldRule>,
  options: ExecuteOptions,
  values: PropagatedValues,
  me: Option<User>,
}

impl fmt::Debug for Bot {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Bot")
      .field("rules", &self.rules)
      .field("options", &self.options)
      .field("values", &self.values)
      .field("me", &self.me)
      .finish_non_exhaustive()
  }
}

impl Bot {
  pub fn builder() -> BotBuilder {
    BotBuilder::default()
  }

  /// A bot talking to the public Bot API with default settings.
  pub fn new(token: impl Into<String>) -> Result<Self, Error> {
    Self::builder().token(token).build()
  }

  /// A bot using a custom transport.
  pub fn with_api(token: impl Into<String>, api: impl BotApi + 'static) -> Self {
    Self::from_parts(
      token.into(),
      Arc::new(api),
      Self::default_rules(),
      ExecuteOptions::default(),
    )
  }

  pub(crate) fn from_parts(
    token: String,
    api: Arc<dyn BotApi>,
    rules: Vec<FieldRule>,
    options: ExecuteOptions,
  ) -> Self {
    Self {
      token,
      api,
      rules,
      options,
      values: PropagatedValues::new(),
      me: None,
    }
  }

  /// Rules applied to every successful response unless replaced.
  pub fn default_rules() -> Vec<FieldRule> {
    vec![FieldRule::new("update_id", "offset")]
  }

  pub fn token(&self) -> &str {
    &self.token
  }

  pub fn set_token(&mut self, token: impl Into<String>) {
    self.token = token.into();
  }

  /// Identity fetched by the last [`Bot::sync`].
  pub fn me(&self) -> Option<&User> {
    self.me.as_ref()
  }

  pub fn options(&self) -> ExecuteOptions {
    self.options
  }

  pub fn rules(&self) -> &[FieldRule] {
    &self.rules
  }

  pub fn propagated(&self) -> &PropagatedValues {
    &self.values
  }

  pub fn propagated_mut(&mut self) -> &mut PropagatedValues {
    &mut self.values
  }

  pub fn clear_cache(&mut self) {
    self.values.clear();
  }

  /// Calls getMe and remembers the bot user.
  #[instrument(skip(self))]
  pub async fn sync(&mut self) -> Result<&User, Error> {
    let me = self.execute(&GetMe::new()).await?;
    info!(id = me.id, username = ?me.username, "Bot identity synced");
    Ok(self.me.insert(me))
  }

  /// Runs one method and parses its typed result.
  pub async fn execute<M: Method>(&mut self, method: &M) -> Result<M::Response, Error> {
    self.call(Call::new(method)?).await?.parse()
  }

  pub async fn call(&mut self, call: Call) -> Result<Response, Error> {
    let propagate = self.options.propagate;
    self.dispatch(call, propagate).await
  }

  /// Dispatches `calls` in order with the bot's options.
  pub async fn execute_all(
    &mut self,
    calls: impl IntoIterator<Item = Call>,
  ) -> Vec<Result<Response, Error>> {
    let options = self.options;
    self.execute_all_with(calls, options).await
  }

  /// Dispatches `calls` in order. Without `forced`, nothing is sent after
  /// the first failure.
  #[instrument(skip(self, calls))]
  pub async fn execute_all_with(
    &mut self,
    calls: impl IntoIterator<Item = Call>,
    options: ExecuteOptions,
  ) -> Vec<Result<Response, Error>> {
    let mut results = Vec::new();

    for call in calls {
      let name = call.name();
      let result = self.dispatch(call, options.propagate).await;
      let failed = result.is_err();
      if let Err(e) = &result {
        warn!(method = name, "Call failed: {}", e);
      }
      results.push(result);

      if failed && !options.forced {
        debug!("Stopping batch after failed call");
        break;
      }
    }

    results
  }

  pub fn pipeline(&mut self) -> Pipeline<'_> {
    Pipeline::new(self)
  }

  #[instrument(skip(self, call), fields(method = call.name()))]
  pub(crate) async fn dispatch(&mut self, call: Call, propagate: bool) -> Result<Response, Error> {
    if self.token.is_empty() {
      return Err(Error::MissingToken);
    }

    let Call {
      mut request,
      propagate: wants_propagation,
      rules,
    } = call;

    if propagate || wants_propagation {
      let applied = self.values.apply(&mut request);
      debug!(applied, "Applied propagated values");
    }

    let result = self.api.request(&self.token, &request).await?;

    self.values.absorb(&result, &self.rules);
    self.values.absorb(&result, &rules);

    Ok(Response::new(request.name(), result))
  }
}
