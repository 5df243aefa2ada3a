//! Page URL construction for the ActionKit event collection
//!
//! ActionKit returns `meta.next` as a server-relative path; it is resolved
//! against the same origin the first request went to.

use crate::actionkit::PageMeta;

/// Origin used when no ActionKit URL is configured
pub const DEFAULT_ACTIONKIT_URL: &str = "https://indivisible.actionkit.com";

/// Path of the event collection endpoint
pub const EVENTS_PATH: &str = "/rest/v1/event/";

fn trim_origin(origin: &str) -> &str {
    origin.trim_end_matches('/')
}

/// URL of the first page of events for a campaign
pub fn events_url(origin: &str, campaign_id: u64) -> String {
    format!("{}{}?campaign={}", trim_origin(origin), EVENTS_PATH, campaign_id)
}

/// URL of the page after the one `meta` came from, if any
///
/// A null, absent or empty `next` ends pagination.
pub fn next_page_url(origin: &str, meta: &PageMeta) -> Option<String> {
    meta.next
        .as_deref()
        .filter(|next| !next.is_empty())
        .map(|next| format!("{}{}", trim_origin(origin), next))
}
