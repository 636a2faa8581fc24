//! Periodic refresh of the open-conversation badge.

use std::{
    future::Future,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use tokio::{
    task::JoinHandle,
    time::{MissedTickBehavior, interval},
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};
use trike_api::{ApiClient, ApiError};

/// Where the poller reads the open-conversation count from.
pub trait OpenChatSource: Send + Sync + 'static {
    /// Polling is skipped while this is false.
    fn has_token(&self) -> bool;

    /// `Ok(None)` when the backend answered but declined to report a count.
    fn open_chats(&self) -> impl Future<Output = anyhow::Result<Option<u64>>> + Send;
}

impl OpenChatSource for ApiClient {
    fn has_token(&self) -> bool {
        ApiClient::has_token(self)
    }

    fn open_chats(&self) -> impl Future<Output = anyhow::Result<Option<u64>>> + Send {
        async move {
            match self.chat_stats().await {
                Ok(stats) => Ok(Some(stats.open_conversations)),
                Err(ApiError::Rejected { message, .. }) => {
                    warn!(%message, "chat stats rejected");
                    Ok(None)
                }
                Err(source) => Err(source.into()),
            }
        }
    }
}

/// Run one refresh.
///
/// A fresh count replaces the badge, a declined answer leaves it alone, and
/// a failed fetch resets it to zero.
pub async fn refresh_open_chats<S: OpenChatSource>(chats: &S, badge: &AtomicU64) {
    if !chats.has_token() {
        return;
    }

    match chats.open_chats().await {
        Ok(Some(count)) => badge.store(count, Ordering::Relaxed),
        Ok(None) => {}
        Err(source) => {
            error!(?source, "failed to fetch open chats");
            badge.store(0, Ordering::Relaxed);
        }
    }
}

/// Background task refreshing the badge on a fixed interval.
///
/// The first refresh runs immediately. Dropping the poller cancels it;
/// [`ChatPoller::shutdown`] also waits for the task to finish.
pub struct ChatPoller {
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl ChatPoller {
    pub fn start<S: OpenChatSource>(
        source: Arc<S>,
        every: Duration,
        badge: Arc<AtomicU64>,
    ) -> Self {
        let cancel = CancellationToken::new();
        let stop = cancel.clone();

        let task = tokio::spawn(async move {
            let mut ticker = interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = stop.cancelled() => break,
                    _ = ticker.tick() => refresh_open_chats(source.as_ref(), &badge).await,
                }
            }

            debug!("chat poller stopped");
        });

        Self {
            cancel,
            task: Some(task),
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Cancel the task and wait for it to exit.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take()
            && let Err(source) = task.await
        {
            error!(?source, "chat poller task failed");
        }
    }
}

impl Drop for ChatPoller {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
