// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Ordered steps where each step may load parameters from the result of
//! an earlier one.
use crate::{
  bot::Bot,
  propagation::{extract, FieldRule},
  request::{Call, Method, Response},
};
use error::Error;
use std::collections::BTreeMap;
use tracing::{debug, instrument, warn};

/// One step of a [`Pipeline`].
#[derive(Debug, Clone)]
pub struct Pipe {
  call: Call,
  load_from: Option<usize>,
  loads: Vec<FieldRule>,
  skip_answer: bool,
}

impl Pipe {
  pub fn new<M: Method>(method: &M) -> Result<Self, Error> {
    Ok(Self::from_call(Call::new(method)?))
  }

  pub fn from_call(call: Call) -> Self {
    Self {
      call,
      load_from: None,
      loads: Vec::new(),
      skip_answer: false,
    }
  }

  /// Sets parameter `key` from the value at `path` of the source result.
  pub fn load(mut self, path: impl Into<String>, key: impl Into<String>) -> Self {
    self.loads.push(FieldRule::new(path, key));
    self
  }

  /// Loads from step `step` (zero based) instead of the previous one.
  pub fn load_from(mut self, step: usize) -> Self {
    self.load_from = Some(step);
    self
  }

  /// Keeps a successful result out of the returned map. Later steps can
  /// still load from it. Failures are always returned.
  pub fn skip_answer(mut self) -> Self {
    self.skip_answer = true;
    self
  }

  /// Step to load from when running as step `index`.
  fn source(&self, index: usize) -> Result<Option<usize>, Error> {
    match self.load_from {
      Some(step) if step >= index => Err(Error::PipelineError(format!(
        "step {} cannot load from step {}",
        index, step
      ))),
      Some(step) => Ok(Some(step)),
      None => Ok(index.checked_sub(1)),
    }
  }

  fn apply_loads(&mut self, index: usize, source: &Response) {
    for rule in &self.loads {
      match extract(source.result(), &rule.path) {
        Some(value) => {
          if !self.call.request_mut().set_param(&rule.key, value.clone()) {
            warn!(
              step = index,
              key = %rule.key,
              method = self.call.name(),
              "Method does not accept loaded parameter"
            );
          }
        }
        None => debug!(step = index, path = %rule.path, "Value not available"),
      }
    }
  }
}

impl From<Call> for Pipe {
  fn from(call: Call) -> Self {
    Self::from_call(call)
  }
}

/// Runs [`Pipe`]s in order on a borrowed [`Bot`].
pub struct Pipeline<'a> {
  bot: &'a mut Bot,
  pipes: Vec<Pipe>,
  forced: bool,
}

impl<'a> Pipeline<'a> {
  pub fn new(bot: &'a mut Bot) -> Self {
    let forced = bot.options().forced;
    Self {
      bot,
      pipes: Vec::new(),
      forced,
    }
  }

  pub fn pipe(mut self, pipe: impl Into<Pipe>) -> Self {
    self.pipes.push(pipe.into());
    self
  }

  /// Keep running after a failed step.
  pub fn forced(mut self) -> Self {
    self.forced = true;
    self
  }

  pub fn len(&self) -> usize {
    self.pipes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.pipes.is_empty()
  }

  /// Runs every step and returns the results keyed by step index.
  #[instrument(skip(self), fields(steps = self.pipes.len(), forced = self.forced))]
  pub async fn run(self) -> BTreeMap<usize, Result<Response, Error>> {
    let Pipeline { bot, pipes, forced } = self;
    let mut results: BTreeMap<usize, Result<Response, Error>> = BTreeMap::new();
    let mut skipped = Vec::new();

    for (index, mut pipe) in pipes.into_iter().enumerate() {
      let result = match pipe.source(index) {
        Err(e) => Err(e),
        Ok(source) => {
          if let Some(Ok(previous)) = source.and_then(|step| results.get(&step)) {
            pipe.apply_loads(index, previous);
          }
          bot.call(pipe.call).await
        }
      };

      let failed = result.is_err();
      if pipe.skip_answer && !failed {
        skipped.push(index);
      }

      if let Err(e) = &result {
        warn!(step = index, "Pipeline step failed: {}", e);
      }
      results.insert(index, result);

      if failed && !forced {
        break;
      }
    }

    results.retain(|index, _| !skipped.contains(index));
    results
  }
}
