//! Declarative per-route page configuration.

use serde::{Deserialize, Serialize};

/// Static SEO configuration for one route.
///
/// Built once with the consuming builder methods and never mutated after.
/// Field names serialize in camelCase so descriptor files can be shared with
/// non-Rust tooling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDescriptor {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    /// Site-relative path, e.g. `/teams`.
    pub url: String,
    #[serde(default)]
    pub no_index: bool,
}

impl PageDescriptor {
    /// Start a descriptor with the two required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self { title: title.into(), description: String::new(), keywords: Vec::new(), url: url.into(), no_index: false }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Mark the page as excluded from search indexing.
    #[must_use]
    pub fn no_index(mut self) -> Self {
        self.no_index = true;
        self
    }
}
