//! Terminal rendering of the dashboard and public listings.
//!
//! Every render replaces the whole listing; there is no diffing.

pub mod dashboard;
pub mod public_listing;

pub use dashboard::{
    application_listing, database_listing, public_application_listing, ListRow, Listing, RowAction,
    NO_APPLICATIONS, NO_DATABASES, NO_PUBLIC_APPLICATIONS,
};
pub use public_listing::{PublicListingView, PublicUpdate};
