//! Supervisory loop keeping the inbound update stream alive.
//!
//! The host alternates between two states. While `Polling` it drives the
//! receive loop; a fault moves it to `Restarting`, which logs the fault,
//! waits out the back-off and goes back to `Polling`. A receive loop that
//! returns `Ok(())` has been shut down by the operator and ends the host.

use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

pub const RESTART_DELAY: Duration = Duration::from_secs(5);

/// Blocking source of inbound messages, dispatching each to the handlers.
#[async_trait(?Send)]
pub trait ReceiveLoop {
    async fn run(&mut self) -> Result<()>;
}

#[derive(Debug)]
pub enum HostState {
    Polling,
    Restarting(anyhow::Error),
}

#[derive(Debug, Clone)]
pub struct PollingHost {
    restart_delay: Duration,
}

impl Default for PollingHost {
    fn default() -> Self {
        Self::new(RESTART_DELAY)
    }
}

impl PollingHost {
    pub fn new(restart_delay: Duration) -> Self {
        Self { restart_delay }
    }

    pub async fn run<L>(&self, receiver: &mut L)
    where
        L: ReceiveLoop + ?Sized,
    {
        let mut state = HostState::Polling;
        loop {
            state = match state {
                HostState::Polling => match receiver.run().await {
                    Ok(()) => {
                        tracing::info!("Receive loop stopped, shutting down");
                        return;
                    }
                    Err(fault) => HostState::Restarting(fault),
                },
                HostState::Restarting(fault) => {
                    tracing::error!("Bot polling exception: {:?}", fault);
                    tokio::time::sleep(self.restart_delay).await;
                    tracing::info!("Re-starting polling...");
                    HostState::Polling
                }
            };
        }
    }
}
