//! Session refresh for authenticated calls.
//!
//! Any authenticated request can discover that the access token expired
//! (envelope code 498). The client routes every such request through
//! [`SessionGuard::run`], which refreshes the token pair and replays the
//! request at most once:
//!
//! ```text
//! Idle --expired--> Refreshing --ok--> Retrying --ok/other error--> done
//!                       |                  |
//!                       +--refresh error---+--expired again--> Failed
//! ```

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;

use crate::api::ApiError;

/// Where a guarded call currently is.
#[derive(Debug)]
pub enum RefreshState {
    Idle,
    Refreshing,
    Retrying,
    Failed(ApiError),
}

/// Enforces the one-refresh, one-retry rule and coalesces refreshes that
/// several in-flight requests trigger at the same time.
#[derive(Debug, Default)]
pub struct SessionGuard {
    /// Bumped after every successful refresh.
    epoch: AtomicU64,
    refresh_lock: Mutex<()>,
}

impl SessionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful refreshes performed through this guard.
    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::Acquire)
    }

    /// Runs `action`; on an expired session runs `refresh` and then `action`
    /// one more time. A second expiry, or a failed refresh, ends the call.
    pub async fn run<T, A, AF, R, RF>(&self, mut action: A, mut refresh: R) -> Result<T, ApiError>
    where
        A: FnMut() -> AF,
        AF: Future<Output = Result<T, ApiError>>,
        R: FnMut() -> RF,
        RF: Future<Output = Result<(), ApiError>>,
    {
        let observed = self.epoch();
        let mut state = RefreshState::Idle;
        loop {
            tracing::trace!(?state, "session guard");
            state = match state {
                RefreshState::Idle => match action().await {
                    Err(err) if err.is_session_expired() => {
                        tracing::info!(%err, "Session expired, refreshing credentials");
                        RefreshState::Refreshing
                    }
                    other => return other,
                },
                RefreshState::Refreshing => match self.refresh_once(observed, &mut refresh).await {
                    Ok(()) => RefreshState::Retrying,
                    Err(err) => RefreshState::Failed(err),
                },
                RefreshState::Retrying => match action().await {
                    Err(err) if err.is_session_expired() => {
                        tracing::warn!(%err, "Session still expired after refresh, giving up");
                        RefreshState::Failed(err)
                    }
                    other => return other,
                },
                RefreshState::Failed(err) => return Err(err),
            };
        }
    }

    async fn refresh_once<R, RF>(&self, observed: u64, refresh: &mut R) -> Result<(), ApiError>
    where
        R: FnMut() -> RF,
        RF: Future<Output = Result<(), ApiError>>,
    {
        let _serialized = self.refresh_lock.lock().await;
        if self.epoch() != observed {
            tracing::debug!("Credentials were refreshed by a concurrent request");
            return Ok(());
        }
        refresh().await?;
        self.epoch.fetch_add(1, Ordering::AcqRel);
        Ok(())
    }
}
