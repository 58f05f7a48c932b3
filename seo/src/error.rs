//! Configuration errors raised while building page metadata and the route table.

/// A page or route declaration that cannot produce valid metadata.
///
/// These are development-time failures: the catalog refuses to build, the
/// server refuses to start, and the catalog test fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// The descriptor title is empty or whitespace.
    #[error("page title is empty (url: {url:?})")]
    EmptyTitle { url: String },
    /// The descriptor url is empty or whitespace.
    #[error("page url is empty (title: {title:?})")]
    EmptyUrl { title: String },
    /// The site base URL is not an absolute `http(s)://host` URL.
    #[error("invalid base site url: {0:?}")]
    InvalidBaseUrl(String),
    /// A route pattern is malformed.
    #[error("invalid route pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: &'static str },
    /// A descriptor url does not equal the path of the route that owns it.
    #[error("descriptor url {url:?} does not match route {pattern:?}")]
    UrlMismatch { pattern: String, url: String },
    /// A route pattern matches the same paths as one already registered.
    #[error("route {pattern:?} duplicates registered route {existing:?}")]
    DuplicateRoute { pattern: String, existing: String },
    /// A route was looked up but never registered.
    #[error("route {0:?} is not registered")]
    UnregisteredRoute(String),
}

/// `sitemap.xml` could not be written.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("sitemap write failed: {0}")]
pub struct SitemapError(pub String);
