use crate::prelude::*;
use ak2geojson_core::destination::S3Destination;
use ak2geojson_core::pagination::DEFAULT_ACTIONKIT_URL;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Convert the events of an ActionKit campaign into a GeoJSON FeatureCollection and publish it to S3"
)]
pub struct App {
    /// ActionKit API username
    #[clap(long, env = "ACTIONKIT_USERNAME")]
    pub username: String,

    /// ActionKit API password
    #[clap(long, env = "ACTIONKIT_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// ActionKit campaign whose events are converted
    #[clap(long, env = "ACTIONKIT_CAMPAIGN_ID")]
    pub campaign_id: u64,

    /// Destination object, as s3://bucket/key
    #[clap(long, env = "S3_URL")]
    pub s3_url: String,

    /// ActionKit instance origin
    #[clap(long, env = "ACTIONKIT_URL", default_value = DEFAULT_ACTIONKIT_URL)]
    pub actionkit_url: String,

    /// AWS Region of the destination bucket
    #[clap(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Print the GeoJSON to stdout instead of uploading it
    #[arg(long)]
    pub dry_run: bool,

    /// Whether to display additional information.
    #[clap(long, env = "AK2GEOJSON_VERBOSE", default_value = "false")]
    pub verbose: bool,
}

/// Validated settings for one run
#[derive(Debug, Clone)]
pub struct Config {
    pub username: String,
    pub password: String,
    pub campaign_id: u64,
    pub destination: S3Destination,
    pub actionkit_url: String,
    pub region: Option<String>,
    pub dry_run: bool,
}

impl Config {
    /// Build the run configuration from parsed arguments
    ///
    /// Fails before any network call when the destination is not an `s3://` URL.
    pub fn from_app(app: App) -> Result<Self> {
        let destination = S3Destination::parse(&app.s3_url)?;

        Ok(Self {
            username: app.username,
            password: app.password,
            campaign_id: app.campaign_id,
            destination,
            actionkit_url: app.actionkit_url.trim_end_matches('/').to_string(),
            region: app.region,
            dry_run: app.dry_run,
        })
    }
}
