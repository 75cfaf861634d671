//! Error types for the sitemap generation library.

use thiserror::Error;

/// Main error type for sitemap generation operations.
///
/// Every pipeline stage either returns a fully valid transformed path list
/// or raises; partial output is never returned.
#[derive(Debug, Error)]
pub enum SitemapGenError {
    /// Route input failed normalization or structural validation
    #[error(transparent)]
    Route(#[from] data_model_smx::routes::RouteError),

    /// A filter rule is not a valid regular expression
    #[error("invalid filter rule: {0}")]
    InvalidRule(#[from] regex::Error),

    /// A dynamic path segment had no (or an incomplete) binding at expansion time
    #[error("unresolved parameter `:{name}` in path `{path}`")]
    UnresolvedParameter {
        /// The canonical path carrying the token
        path: String,
        /// The parameter name without its marker
        name: String,
    },

    /// No hostname was configured but a sitemap document was requested
    #[error("a hostname is required to build sitemap documents")]
    MissingHostname,

    /// The configured hostname is not an absolute URL
    #[error("invalid hostname: {0}")]
    InvalidHostname(#[from] url::ParseError),

    /// Shard capacity must be positive
    #[error("shard capacity must be at least 1, got {0}")]
    InvalidLimit(usize),

    /// XML serialization failed
    #[error("sitemap serialization failed: {0}")]
    Serialize(String),

    /// Writing a sitemap file failed
    #[error("failed to write sitemap: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result with SitemapGenError
pub type Result<T> = std::result::Result<T, SitemapGenError>;
