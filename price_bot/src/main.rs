use anyhow::Result;
use clap::Parser;
use price_bot::host::PollingHost;
use price_bot::telegram::TelegramReceiver;
use price_bot::ticker::TickerClient;
use std::sync::Arc;
use teloxide::Bot;

#[derive(Parser)]
#[clap(author, version, about = "Telegram bot replying with the BTC/USD sell price")]
struct Args {
    #[clap(short, long, env = "TG_TOKEN", hide_env_values = true)]
    tg_token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();

    let bot = match args.tg_token {
        Some(token) => Bot::new(token),
        None => {
            tracing::warn!("Telegram token is not provided, creating from env");
            Bot::from_env()
        }
    };

    let prices = Arc::new(TickerClient::default());
    tracing::info!("Quoting prices from {:?}", prices);

    let mut receiver = TelegramReceiver::new(bot, prices);

    tracing::info!("Bot is polling. Press Ctrl+C to stop.");
    PollingHost::default().run(&mut receiver).await;
    Ok(())
}
