#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("ActionKit request to {url} failed [{status}]: {body}")]
    Http {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to write s3://{bucket}/{key}: {message}")]
    Storage {
        bucket: String,
        key: String,
        message: String,
    },
}
