/// Failures at the crate's I/O edges. The geometry itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "im-io")]
    #[error("failed to load raster image: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid job: {0}")]
    InvalidJob(String),
}

pub type Result<T> = std::result::Result<T, Error>;
