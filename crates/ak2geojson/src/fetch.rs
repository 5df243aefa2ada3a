use crate::config::Config;
use crate::prelude::*;
use ak2geojson_core::actionkit::EventPage;
use ak2geojson_core::geojson::{transform_event, FeatureCollection};
use ak2geojson_core::pagination::{events_url, next_page_url};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

/// Anything that can return one page of ActionKit events for a URL
pub trait PageSource {
    async fn fetch_page(&self, url: &str) -> Result<EventPage>;
}

/// ActionKit REST client authenticated with HTTP Basic Auth
#[derive(Debug, Clone)]
pub struct ActionKitClient {
    client: reqwest::Client,
}

impl ActionKitClient {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: create_authenticated_client(&config.username, &config.password)?,
        })
    }
}

/// Default headers for ActionKit requests: Basic Auth and `Accept: application/json`
pub fn authenticated_headers(username: &str, password: &str) -> Result<HeaderMap> {
    use base64::Engine;

    let auth_string = format!("{}:{}", username, password);
    let auth_encoded = base64::engine::general_purpose::STANDARD.encode(&auth_string);

    let mut headers = HeaderMap::new();
    let mut auth_value = HeaderValue::from_str(&format!("Basic {auth_encoded}"))
        .map_err(|e| eyre!("Invalid header value: {}", e))?;
    auth_value.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth_value);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    Ok(headers)
}

/// Create an HTTP client that sends [`authenticated_headers`] on every request
pub fn create_authenticated_client(username: &str, password: &str) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .default_headers(authenticated_headers(username, password)?)
        .build()
        .map_err(|e| eyre!("Failed to build HTTP client: {}", e))
}

impl PageSource for ActionKitClient {
    async fn fetch_page(&self, url: &str) -> Result<EventPage> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| eyre!("Failed to send request to ActionKit: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Http {
                url: url.to_string(),
                status,
                body,
            }
            .into());
        }

        response
            .json()
            .await
            .map_err(|e| eyre!("Failed to parse ActionKit events page {}: {}", url, e))
    }
}

/// Fetch every event of a campaign, following `meta.next` until it runs out
///
/// Features keep the order the API returned them in, across pages. The first
/// failing request or record aborts the whole run.
pub async fn fetch_features<S: PageSource>(
    source: &S,
    origin: &str,
    campaign_id: u64,
) -> Result<FeatureCollection> {
    let mut collection = FeatureCollection::new();
    let mut next_url = Some(events_url(origin, campaign_id));

    let mut page = 1;
    while let Some(url) = next_url {
        let events_page = source.fetch_page(&url).await?;
        log::debug!(
            "Page {} ({}) returned {} events",
            page,
            url,
            events_page.objects.len()
        );
        if let (1, Some(total)) = (page, events_page.meta.total_count) {
            log::debug!("ActionKit reports {} events for campaign {}", total, campaign_id);
        }

        for record in events_page.objects {
            let feature = transform_event(record, collection.len())?;
            collection.push(feature);
        }

        next_url = next_page_url(origin, &events_page.meta);
        page += 1;
    }

    log::info!("Found {} events", collection.len());

    Ok(collection)
}
