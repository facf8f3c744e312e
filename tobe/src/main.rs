// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::Config;
use std::path::PathBuf;
use telegram::{
  methods::{GetUpdates, SendMessage},
  types::{ParseMode, Update},
  Bot, FieldRule,
};
use tracing::{info, instrument, warn};

const LONG_POLL_SECS: i64 = 25;

#[derive(Debug, Parser)]
#[command(name = "tobe", version, about = "Telegram Bot API client")]
struct Cli {
  /// Configuration file; missing files fall back to defaults.
  #[arg(short, long, default_value = "tobe.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
  /// Print the identity of the bot.
  Me,
  /// Send a text message.
  Send {
    #[arg(long, allow_hyphen_values = true)]
    chat_id: String,
    #[arg(long)]
    text: String,
    /// markdown, markdownv2 or html.
    #[arg(long)]
    parse_mode: Option<String>,
  },
  /// Fetch pending updates once.
  Updates {
    #[arg(long, default_value_t = 100)]
    limit: i64,
  },
  /// Echo text messages back until interrupted.
  Echo,
}

pub struct Runner {
  bot: Bot,
}

#[cfg(debug_assertions)]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .init();
}

#[cfg(not(debug_assertions))]
fn setup_logging() {
  tracing_subscriber::fmt().init();
}

#[tokio::main]
async fn main() -> Result<()> {
  #[cfg(debug_assertions)]
  dotenvy::dotenv().ok();
  setup_logging();

  let cli = Cli::parse();
  let config = Config::load(&cli.config)
    .with_context(|| format!("Failed to load {}", cli.config.display()))?;

  let mut runner = Runner::new(&config)?;
  match cli.command {
    Command::Me => runner.me().await,
    Command::Send {
      chat_id,
      text,
      parse_mode,
    } => runner.send(&chat_id, text, parse_mode.as_deref()).await,
    Command::Updates { limit } => runner.updates(limit).await,
    Command::Echo => runner.echo().await,
  }
}

fn parse_mode(value: &str) -> Result<ParseMode> {
  match value.to_ascii_lowercase().as_str() {
    "markdown" => Ok(ParseMode::Markdown),
    "markdownv2" => Ok(ParseMode::MarkdownV2),
    "html" => Ok(ParseMode::Html),
    other => anyhow::bail!("Unknown parse mode: {}", other),
  }
}

fn describe(update: &Update) -> String {
  match update.any_message() {
    Some(message) => format!(
      "#{} chat {}: {}",
      update.update_id,
      message.chat.id,
      message.text_or_caption().unwrap_or("<no text>")
    ),
    None => format!("#{} (non-message update)", update.update_id),
  }
}

impl Runner {
  #[instrument(skip(config))]
  pub fn new(config: &Config) -> Result<Self> {
    let token = config.token().context("Missing bot token")?;

    let mut builder = Bot::builder()
      .token(token)
      .api_url(config.bot.api_url.clone())
      .timeout(config.timeout())
      .forced(config.execution.forced)
      .propagate(config.execution.propagate);

    if !config.propagation.is_empty() {
      builder = builder.rules(
        config
          .propagation
          .iter()
          .map(|rule| FieldRule::new(rule.path.clone(), rule.key.clone()))
          .collect(),
      );
    }

    Ok(Self {
      bot: builder.build()?,
    })
  }

  #[instrument(skip(self))]
  pub async fn me(&mut self) -> Result<()> {
    let me = self.bot.sync().await.context("getMe failed")?;
    println!(
      "{} (@{}) id={}",
      me.full_name(),
      me.username.as_deref().unwrap_or("-"),
      me.id
    );
    Ok(())
  }

  #[instrument(skip(self, text))]
  pub async fn send(&mut self, chat_id: &str, text: String, mode: Option<&str>) -> Result<()> {
    let chat_id: telegram::ChatId = match chat_id.parse::<i64>() {
      Ok(id) => id.into(),
      Err(_) => chat_id.into(),
    };

    let mut method = SendMessage::new(chat_id, text);
    if let Some(mode) = mode {
      method = method.parse_mode(parse_mode(mode)?);
    }

    let message = self.bot.execute(&method).await.context("sendMessage failed")?;
    info!(message_id = message.message_id, "Message sent");
    println!("sent message {}", message.message_id);
    Ok(())
  }

  #[instrument(skip(self))]
  pub async fn updates(&mut self, limit: i64) -> Result<()> {
    let updates = self
      .bot
      .execute(&GetUpdates::new().limit(limit))
      .await
      .context("getUpdates failed")?;

    if updates.is_empty() {
      println!("no pending updates");
    }
    for update in &updates {
      println!("{}", describe(update));
    }
    Ok(())
  }

  #[instrument(skip(self))]
  pub async fn echo(&mut self) -> Result<()> {
    let me = self.bot.sync().await.context("getMe failed")?;
    info!("Echoing messages as {}", me.full_name());

    let mut offset: Option<i64> = None;
    loop {
      let mut request = GetUpdates::new().timeout(LONG_POLL_SECS);
      if let Some(offset) = offset {
        request = request.offset(offset);
      }

      let updates = tokio::select! {
        result = self.bot.execute(&request) => result.context("getUpdates failed")?,
        _ = tokio::signal::ctrl_c() => {
          info!("Interrupted, stopping");
          return Ok(());
        }
      };

      for update in &updates {
        let next = update.update_id + 1;
        offset = Some(next);
        // The default rule caches the raw update_id; confirm past it instead.
        self.bot.propagated_mut().insert("offset", next.into());

        let Some(message) = update.message.as_ref() else {
          continue;
        };
        let Some(text) = message.text.as_deref() else {
          continue;
        };

        let reply = SendMessage::new(message.chat.id, text).reply_to_message_id(message.message_id);
        if let Err(e) = self.bot.execute(&reply).await {
          warn!("Failed to echo message {}: {}", message.message_id, e);
        }
      }
    }
  }
}
