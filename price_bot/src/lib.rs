//! Telegram bot that answers `price` with the current BTC/USD sell price.

pub mod command;
pub mod error;
pub mod handler;
pub mod host;
pub mod telegram;
pub mod ticker;

#[cfg(test)]
pub(crate) mod testing;
