#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("invalid page URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}
