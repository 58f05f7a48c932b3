//! JSON payloads exchanged with the community backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Signed-in user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub role: Role,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Member,
    Admin,
}

/// Content collections served by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentKind {
    News,
    Team,
    Player,
    Product,
}

impl ContentKind {
    /// REST collection path, e.g. `/api/news`.
    #[must_use]
    pub fn api_path(self) -> &'static str {
        match self {
            Self::News => "/api/news",
            Self::Team => "/api/teams",
            Self::Player => "/api/players",
            Self::Product => "/api/shop",
        }
    }

    /// Site route prefix for item links, e.g. `/news`.
    #[must_use]
    pub fn route_prefix(self) -> &'static str {
        match self {
            Self::News => "/news",
            Self::Team => "/teams",
            Self::Player => "/players",
            Self::Product => "/shop",
        }
    }

    /// Lower-case plural noun for placeholder text.
    #[must_use]
    pub fn plural(self) -> &'static str {
        match self {
            Self::News => "articles",
            Self::Team => "teams",
            Self::Player => "players",
            Self::Product => "products",
        }
    }

    #[must_use]
    pub fn item_href(self, id: &str) -> String {
        format!("{}/{id}", self.route_prefix())
    }
}

/// List entry for collection pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCard {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Full record for detail pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDetail {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}
