use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;

use crate::api::{load_public_applications, ApiClient, ApiError};
use crate::render::{PublicListingView, PublicUpdate};

/// Polls a user's public applications and feeds them to a view.
pub struct PublicListingPoller {
    client: Arc<ApiClient>,
    owner_tag: String,
    interval: Duration,
    view: PublicListingView,
}

impl PublicListingPoller {
    pub fn new(client: Arc<ApiClient>, owner_tag: impl Into<String>, interval: Duration, app_host: &str) -> Self {
        Self {
            client,
            owner_tag: owner_tag.into(),
            interval,
            view: PublicListingView::new(app_host),
        }
    }

    pub fn view(&self) -> &PublicListingView {
        &self.view
    }

    pub async fn poll_once(&mut self) -> Result<PublicUpdate, ApiError> {
        let apps = load_public_applications(&self.client, &self.owner_tag).await?;
        let update = self.view.apply(apps.as_deref());
        if update == PublicUpdate::Unchanged {
            tracing::debug!(owner = %self.owner_tag, "Nothing to render");
        }
        Ok(update)
    }

    /// Polls every interval, the first time immediately. A failed poll is
    /// handed to `each` like any other and polling goes on. Stops after
    /// `max_polls` when given.
    pub async fn run<F>(&mut self, max_polls: Option<u64>, mut each: F)
    where
        F: FnMut(Result<PublicUpdate, ApiError>),
    {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut polls = 0u64;
        loop {
            if max_polls.is_some_and(|max| polls >= max) {
                return;
            }
            ticker.tick().await;
            polls += 1;
            let result = self.poll_once().await;
            if let Err(ref e) = result {
                tracing::warn!(%e, owner = %self.owner_tag, "Public listing poll failed");
            }
            each(result);
        }
    }
}
