//! Category types for product organization.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category (e.g., streaming, design, AI tools).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier, also used as the URL slug.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Category description for browsing pages.
    pub description: Option<String>,
}

impl Category {
    /// Create a new category.
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The URL-friendly slug.
    pub fn slug(&self) -> &str {
        self.id.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category() {
        let cat = Category::new("streaming", "Streaming").with_description("Movies and music");
        assert_eq!(cat.slug(), "streaming");
        assert_eq!(cat.name, "Streaming");
        assert!(cat.description.is_some());
    }
}
