use crate::models::ApplicationSummary;

use super::dashboard::{public_application_listing, Listing};

/// Outcome of feeding one poll result to the view.
#[derive(Clone, Debug, PartialEq)]
pub enum PublicUpdate {
    /// Same number of applications as last time; nothing to redraw.
    Unchanged,
    Render(Listing),
}

/// State of one public listing screen across polls.
///
/// Redraws only when the number of applications changes. An absent list
/// shows the placeholder once and resets the count.
#[derive(Clone, Debug, Default)]
pub struct PublicListingView {
    last_render: Option<usize>,
    app_host: String,
}

impl PublicListingView {
    pub fn new(app_host: impl Into<String>) -> Self {
        Self {
            last_render: None,
            app_host: app_host.into(),
        }
    }

    /// Row count of the last redraw, `None` before the first one.
    pub fn last_render(&self) -> Option<usize> {
        self.last_render
    }

    pub fn apply(&mut self, apps: Option<&[ApplicationSummary]>) -> PublicUpdate {
        let count = apps.map(<[_]>::len).unwrap_or(0);
        if self.last_render == Some(count) {
            return PublicUpdate::Unchanged;
        }
        self.last_render = Some(count);
        PublicUpdate::Render(public_application_listing(apps, &self.app_host))
    }
}
