//! Curated-list ("Awesome Ethereum") entries.

use serde::{Deserialize, Serialize};

/// A single linked resource from the curated list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub url: String,
    pub description: String,
}

/// A `##` section of the curated list with its resources.
///
/// `slug` is the anchor id derived from `title`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    pub slug: String,
    pub resources: Vec<Resource>,
}

impl Category {
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            resources: Vec::new(),
        }
    }
}
