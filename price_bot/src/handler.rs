use crate::command::Command;
use crate::ticker::{PriceQuote, PriceSource};

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Local};
use teloxide::types::ChatId;
use tracing::instrument;

pub const GREETING: &str = "Hello friend! Send 'price' to find out the current BTC/USD sell price.";
pub const PRICE_UNAVAILABLE: &str =
    "Sorry, I couldn't retrieve the price right now. Please try again later.";
pub const INVALID_COMMAND: &str = "Invalid command. Please send 'price'.";

#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub chat_id: ChatId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub chat_id: ChatId,
    pub text: String,
}

impl OutboundMessage {
    pub fn new(chat_id: ChatId, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
        }
    }
}

/// Outbound side of the chat platform. Delivery is not confirmed back.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, message: OutboundMessage) -> Result<()>;
}

pub fn format_price_message(quote: &PriceQuote, now: DateTime<Local>) -> String {
    format!(
        "{}\nSell BTC price: {}",
        now.format("%Y-%m-%d %H:%M"),
        quote
    )
}

/// Resolves the command and sends exactly one reply to the originating chat.
#[instrument(skip_all, fields(chat_id, command))]
pub async fn dispatch_message<T, P>(transport: &T, prices: &P, message: InboundMessage) -> Result<()>
where
    T: ChatTransport + ?Sized,
    P: PriceSource + ?Sized,
{
    let span = tracing::Span::current();
    let command = Command::parse(&message.text);

    span.record("chat_id", message.chat_id.0);
    span.record("command", command.name());

    handle(transport, prices, message.chat_id, command).await
}

pub async fn handle<T, P>(transport: &T, prices: &P, chat_id: ChatId, command: Command) -> Result<()>
where
    T: ChatTransport + ?Sized,
    P: PriceSource + ?Sized,
{
    match command {
        Command::Start => handle_start(transport, chat_id).await,
        Command::Price => handle_price(transport, prices, chat_id).await,
        Command::Invalid => handle_invalid(transport, chat_id).await,
    }
}

pub async fn handle_start<T>(transport: &T, chat_id: ChatId) -> Result<()>
where
    T: ChatTransport + ?Sized,
{
    transport.send(OutboundMessage::new(chat_id, GREETING)).await
}

pub async fn handle_price<T, P>(transport: &T, prices: &P, chat_id: ChatId) -> Result<()>
where
    T: ChatTransport + ?Sized,
    P: PriceSource + ?Sized,
{
    // Fetch errors are already logged by the price source.
    let text = match prices.fetch().await {
        Ok(quote) => format_price_message(&quote, Local::now()),
        Err(_) => PRICE_UNAVAILABLE.to_owned(),
    };
    transport.send(OutboundMessage::new(chat_id, text)).await
}

pub async fn handle_invalid<T>(transport: &T, chat_id: ChatId) -> Result<()>
where
    T: ChatTransport + ?Sized,
{
    transport.send(OutboundMessage::new(chat_id, INVALID_COMMAND)).await
}
