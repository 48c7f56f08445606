//! Markdown source loading seam.

use std::borrow::Cow;

use crate::category::Category;

/// Error returned when a category's markdown source cannot be supplied.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The loader has no source for this category.
    #[error("no markdown source for category {0}")]
    Missing(Category),
    /// I/O error from a file-backed loader.
    #[error("failed to read source for category {category}")]
    Io {
        category: Category,
        #[source]
        source: std::io::Error,
    },
}

/// Supplier of raw markdown source text, one table per category.
///
/// The rendering pipeline never validates the document shape; a source
/// whose table does not match the category schema renders degraded, not
/// failed.
pub trait ContentSource {
    fn load(&self, category: Category) -> Result<Cow<'_, str>, ContentError>;
}

/// The content set embedded in the crate.
pub struct BundledContent;

impl ContentSource for BundledContent {
    fn load(&self, category: Category) -> Result<Cow<'_, str>, ContentError> {
        let source = match category {
            Category::Websites => include_str!("../content/websites.md"),
            Category::Platforms => include_str!("../content/platforms.md"),
            Category::DeveloperTools => include_str!("../content/developer-tools.md"),
            Category::SecurityKeys => include_str!("../content/security-keys.md"),
        };
        Ok(Cow::Borrowed(source))
    }
}
