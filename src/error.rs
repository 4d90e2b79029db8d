/// Failure to produce a usable offer catalog from the data source.
///
/// A load error is terminal for the session: callers show a "data
/// unavailable" state instead of an empty catalog.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document has no `offers` array")]
    MissingOffers,

    #[error("duplicate offer id: {0}")]
    DuplicateId(String),

    #[error("invalid offer {id}: {reason}")]
    InvalidOffer { id: String, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog unavailable: {0}")]
    Load(#[from] LoadError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
