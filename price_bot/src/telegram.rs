//! teloxide bindings for the chat transport and the receive loop.

use crate::handler::{dispatch_message, ChatTransport, InboundMessage, OutboundMessage};
use crate::host::ReceiveLoop;
use crate::ticker::TickerClient;

use anyhow::Result;
use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;
use teloxide::prelude::*;

#[async_trait]
impl ChatTransport for Bot {
    async fn send(&self, message: OutboundMessage) -> Result<()> {
        let reply = self.send_message(message.chat_id, message.text).send().await?;
        tracing::debug!("Sent reply {} to chat {}", reply.id.0, message.chat_id.0);
        Ok(())
    }
}

/// Long-polls Telegram and feeds every text message to the handlers.
pub struct TelegramReceiver {
    bot: Bot,
    prices: Arc<TickerClient>,
}

impl Debug for TelegramReceiver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramReceiver")
            .field("prices", &self.prices)
            .finish()
    }
}

impl TelegramReceiver {
    pub fn new(bot: Bot, prices: Arc<TickerClient>) -> Self {
        Self { bot, prices }
    }
}

#[async_trait(?Send)]
impl ReceiveLoop for TelegramReceiver {
    async fn run(&mut self) -> Result<()> {
        let bot_info = self.bot.get_me().await?;
        tracing::info!("Started bot: {:?}", bot_info.user.username);

        let handler = Update::filter_message().branch(Message::filter_text().endpoint(on_text));

        Dispatcher::builder(self.bot.clone(), handler)
            .dependencies(dptree::deps![self.prices.clone()])
            .distribution_function(single_worker)
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
        Ok(())
    }
}

/// Every update shares one worker, so messages are handled one at a time
/// across all chats.
fn single_worker(_: &Update) -> Option<()> {
    Some(())
}

async fn on_text(
    bot: Bot,
    msg: Message,
    text: String,
    prices: Arc<TickerClient>,
) -> ResponseResult<()> {
    let message = InboundMessage {
        chat_id: msg.chat.id,
        text,
    };
    if let Err(e) = dispatch_message(&bot, prices.as_ref(), message).await {
        tracing::error!("Error sending message: {:?}", e);
    }
    Ok(())
}
