//! Live validation of the repository URL field.
//!
//! Keystrokes go through [`RepoValidator::submit`]. A burst of submissions
//! becomes one backend call once the input settles. Every accepted submission
//! takes a sequence number and only the response for the latest one is
//! applied, so a slow answer for an old input cannot overwrite a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use tokio::sync::watch;

use crate::api::{validate_repo, ApiClient, ApiError};
use crate::models::RepoMetadata;
use crate::utils::Debouncer;

type Check = Arc<dyn Fn(String) -> BoxFuture<'static, Result<RepoMetadata, ApiError>> + Send + Sync>;

/// State of the validated field.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldState {
    Idle,
    /// Timer armed, nothing sent yet.
    Pending,
    InFlight,
    Valid(RepoMetadata),
    Invalid(String),
}

impl FieldState {
    pub fn is_settled(&self) -> bool {
        matches!(self, FieldState::Valid(_) | FieldState::Invalid(_))
    }
}

/// What happened to one submitted value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Empty, or the value last sent to the backend. The timer was not touched.
    Ignored,
    Scheduled(u64),
}

struct Shared {
    check: Check,
    last_sent: Mutex<Option<String>>,
    latest: AtomicU64,
    state: watch::Sender<FieldState>,
}

impl Shared {
    fn last_sent(&self) -> MutexGuard<'_, Option<String>> {
        self.last_sent.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn is_latest(&self, seq: u64) -> bool {
        self.latest.load(Ordering::Acquire) == seq
    }

    async fn dispatch(self: Arc<Self>, seq: u64, value: String) {
        if !self.is_latest(seq) {
            return;
        }
        *self.last_sent() = Some(value.clone());
        self.state.send_replace(FieldState::InFlight);
        tracing::debug!(seq, repo = %value, "Validating repository");

        let outcome = (self.check)(value).await;
        if !self.is_latest(seq) {
            tracing::debug!(seq, "Discarding validation result for a superseded input");
            return;
        }
        let next = match outcome {
            Ok(meta) => FieldState::Valid(meta),
            Err(e) => FieldState::Invalid(e.to_string()),
        };
        self.state.send_replace(next);
    }
}

pub struct RepoValidator {
    shared: Arc<Shared>,
    debouncer: Debouncer<(u64, String)>,
}

impl RepoValidator {
    pub fn new<F>(quiet: Duration, check: F) -> Self
    where
        F: Fn(String) -> BoxFuture<'static, Result<RepoMetadata, ApiError>> + Send + Sync + 'static,
    {
        let (state, _) = watch::channel(FieldState::Idle);
        let shared = Arc::new(Shared {
            check: Arc::new(check),
            last_sent: Mutex::new(None),
            latest: AtomicU64::new(0),
            state,
        });
        let target = Arc::clone(&shared);
        let debouncer = Debouncer::new(quiet, move |(seq, value): (u64, String)| {
            Arc::clone(&target).dispatch(seq, value).boxed()
        });
        Self { shared, debouncer }
    }

    /// Validates through `/api/user/validate`.
    pub fn for_client(client: Arc<ApiClient>, quiet: Duration) -> Self {
        Self::new(quiet, move |repo| {
            let client = Arc::clone(&client);
            async move { validate_repo(&client, &repo).await }.boxed()
        })
    }

    /// Feeds the current input. Must be called from within a Tokio runtime.
    pub fn submit(&self, input: &str) -> Submission {
        let value = input.trim();
        if value.is_empty() || self.shared.last_sent().as_deref() == Some(value) {
            return Submission::Ignored;
        }
        let seq = self.shared.latest.fetch_add(1, Ordering::AcqRel) + 1;
        self.shared.state.send_replace(FieldState::Pending);
        self.debouncer.call((seq, value.to_string()));
        Submission::Scheduled(seq)
    }

    pub fn state(&self) -> FieldState {
        self.shared.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FieldState> {
        self.shared.state.subscribe()
    }

    /// Value of the last request actually sent.
    pub fn last_sent(&self) -> Option<String> {
        self.shared.last_sent().clone()
    }

    /// Waits until the latest submission has a verdict.
    pub async fn settled(&self) -> FieldState {
        let mut rx = self.subscribe();
        let settled = match rx.wait_for(FieldState::is_settled).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        };
        settled
    }
}
