use crate::prelude::*;
use ak2geojson_core::destination::S3Destination;
use ak2geojson_core::geojson::FeatureCollection;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_sdk_s3::Client as S3Client;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Build an S3 client from the default AWS credential and region chain
pub async fn create_s3_client(region: Option<&str>) -> S3Client {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = region {
        loader = loader.region(Region::new(region.to_string()));
    }

    let shared_config = loader.load().await;
    S3Client::new(&shared_config)
}

/// Serialize a collection to compact JSON
pub fn encode(collection: &FeatureCollection) -> Result<Vec<u8>> {
    collection
        .to_compact_json()
        .map_err(|e| eyre!("Failed to serialize FeatureCollection: {}", e))
}

/// Overwrite the destination object with the collection, world-readable
pub async fn publish(
    s3_client: &S3Client,
    destination: &S3Destination,
    collection: &FeatureCollection,
) -> Result<()> {
    let body = encode(collection)?;

    log::info!(
        "Writing to bucket {}, key {}",
        destination.bucket,
        destination.key
    );
    let output = s3_client
        .put_object()
        .bucket(&destination.bucket)
        .key(&destination.key)
        .acl(ObjectCannedAcl::PublicRead)
        .content_type(JSON_CONTENT_TYPE)
        .body(ByteStream::from(body))
        .send()
        .await
        .map_err(|e| Error::Storage {
            bucket: destination.bucket.clone(),
            key: destination.key.clone(),
            message: DisplayErrorContext(&e).to_string(),
        })?;

    log::info!(
        "Result of S3 put: etag={}",
        output.e_tag().unwrap_or("<none>")
    );
    Ok(())
}
