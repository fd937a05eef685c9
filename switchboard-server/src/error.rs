use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid client origin {origin:?}: {source}")]
    InvalidOrigin {
        origin: String,
        #[source]
        source: axum::http::header::InvalidHeaderValue,
    },

    #[error("failed to bind signaling listener: {0}")]
    Bind(#[source] std::io::Error),

    #[error("signaling server terminated: {0}")]
    Serve(#[source] std::io::Error),
}
