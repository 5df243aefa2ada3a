//! Parsing of `s3://bucket/key` destinations

use url::Url;

/// Scheme every destination URL must use
pub const S3_SCHEME: &str = "s3";

/// Error type for destination parsing
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DestinationError {
    #[error("Malformed destination URL {url}: {reason}")]
    Malformed { url: String, reason: url::ParseError },

    #[error("Require an s3:// URL to save to, got {scheme}:// in {url}")]
    UnsupportedScheme { url: String, scheme: String },

    #[error("Destination URL {0} has no bucket")]
    MissingBucket(String),

    #[error("Destination URL {0} has no object key")]
    MissingKey(String),
}

/// Bucket and key of the object to write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Destination {
    pub bucket: String,
    pub key: String,
}

impl S3Destination {
    /// Parse an `s3://bucket/key` URL
    ///
    /// `Url` validates the scheme and bucket. The key is the raw text after the
    /// bucket's `/`, up to any query or fragment, with no percent-encoding or
    /// dot-segment normalization, so it names exactly the configured object.
    pub fn parse(raw: &str) -> Result<Self, DestinationError> {
        let url = Url::parse(raw).map_err(|reason| DestinationError::Malformed {
            url: raw.to_string(),
            reason,
        })?;

        if url.scheme() != S3_SCHEME {
            return Err(DestinationError::UnsupportedScheme {
                url: raw.to_string(),
                scheme: url.scheme().to_string(),
            });
        }

        if url.host_str().map_or(true, str::is_empty) {
            return Err(DestinationError::MissingBucket(raw.to_string()));
        }

        let (bucket, key) = split_raw(raw);
        if key.is_empty() {
            return Err(DestinationError::MissingKey(raw.to_string()));
        }

        Ok(Self {
            bucket: bucket.to_string(),
            key: key.to_string(),
        })
    }
}

/// Split `scheme://bucket/key?query#fragment` into its raw bucket and key
fn split_raw(raw: &str) -> (&str, &str) {
    let rest = raw.split_once("://").map_or(raw, |(_, rest)| rest);
    let rest = rest.split(['?', '#']).next().unwrap_or_default();

    match rest.split_once('/') {
        Some((bucket, key)) => (bucket, key),
        None => (rest, ""),
    }
}

impl std::fmt::Display for S3Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}://{}/{}", S3_SCHEME, self.bucket, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bucket_and_key() {
        let dest = S3Destination::parse("s3://events-bucket/maps/events.json").unwrap();

        assert_eq!(dest.bucket, "events-bucket");
        assert_eq!(dest.key, "maps/events.json");
        assert_eq!(dest.to_string(), "s3://events-bucket/maps/events.json");
    }

    #[test]
    fn test_key_is_kept_verbatim() {
        let spaced = S3Destination::parse("s3://events-bucket/my events.json").unwrap();
        assert_eq!(spaced.key, "my events.json");

        let dotted = S3Destination::parse("s3://events-bucket/a/../b.json").unwrap();
        assert_eq!(dotted.bucket, "events-bucket");
        assert_eq!(dotted.key, "a/../b.json");

        let escaped = S3Destination::parse("s3://events-bucket/maps/%41.json").unwrap();
        assert_eq!(escaped.key, "maps/%41.json");
    }

    #[test]
    fn test_key_stops_at_query() {
        let dest = S3Destination::parse("s3://events-bucket/events.json?versionId=1").unwrap();
        assert_eq!(dest.key, "events.json");
    }

    #[test]
    fn test_http_scheme_is_rejected() {
        let err = S3Destination::parse("http://events-bucket/events.json").unwrap_err();

        assert!(matches!(
            err,
            DestinationError::UnsupportedScheme { ref scheme, .. } if scheme == "http"
        ));
    }

    #[test]
    fn test_https_scheme_is_rejected() {
        let result = S3Destination::parse("https://events-bucket.s3.amazonaws.com/events.json");
        assert!(matches!(
            result,
            Err(DestinationError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn test_malformed_url() {
        let result = S3Destination::parse("events-bucket/events.json");
        assert!(matches!(result, Err(DestinationError::Malformed { .. })));
    }

    #[test]
    fn test_missing_key() {
        assert_eq!(
            S3Destination::parse("s3://events-bucket/"),
            Err(DestinationError::MissingKey("s3://events-bucket/".to_string()))
        );
        assert!(matches!(
            S3Destination::parse("s3://events-bucket"),
            Err(DestinationError::MissingKey(_))
        ));
    }

    #[test]
    fn test_missing_bucket() {
        assert!(matches!(
            S3Destination::parse("s3:///events.json"),
            Err(DestinationError::MissingBucket(_))
        ));
    }
}
