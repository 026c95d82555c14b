//! Minimal Telegram Bot API client and update types.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Inbound webhook payload. Only the fields the tracker uses are decoded.
#[derive(Debug, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    pub chat: Chat,
    pub from: Option<User>,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct User {
    pub id: i64,
}

impl Message {
    /// Key for per-user state: the sender, or the chat for anonymous posts.
    pub fn user_id(&self) -> i64 {
        self.from.as_ref().map_or(self.chat.id, |user| user.id)
    }
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: i64,
    text: &'a str,
}

#[derive(Serialize)]
struct SetWebhook<'a> {
    url: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    ok: bool,
    description: Option<String>,
}

/// Client for the Bot API methods the server calls.
pub struct TelegramClient {
    http: reqwest::Client,
    bot_url: String,
}

impl TelegramClient {
    pub fn new(api_base: &str, token: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            bot_url: format!("{}/bot{token}", api_base.trim_end_matches('/')),
        })
    }

    /// Sends a plain-text message to a chat.
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        self.call("sendMessage", &SendMessage { chat_id, text }).await
    }

    /// Registers the public webhook URL with Telegram.
    pub async fn set_webhook(&self, url: &str) -> Result<()> {
        self.call("setWebhook", &SetWebhook { url }).await
    }

    async fn call<B: Serialize>(&self, method: &str, body: &B) -> Result<()> {
        let response: ApiResponse = self
            .http
            .post(format!("{}/{method}", self.bot_url))
            .json(body)
            .send()
            .await
            .with_context(|| format!("Telegram {method} request failed"))?
            .json()
            .await
            .with_context(|| format!("Telegram {method} returned an unreadable response"))?;

        if !response.ok {
            bail!(
                "Telegram {method} was rejected: {}",
                response.description.unwrap_or_default()
            );
        }
        Ok(())
    }
}
