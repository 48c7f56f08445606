//! Pipeline driver: markdown sources in, grid fragments out.

use crate::category::Category;
use crate::content::{ContentError, ContentSource};

/// One category's rendered grid, ready for embedding into its panel.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryFragment {
    pub category: Category,
    pub html: String,
}

/// Render one category's markdown source through its grid layout.
#[must_use]
pub fn render_category(category: Category, markdown: &str) -> String {
    category.grid().render(markdown)
}

/// Render every category's source into an HTML fragment.
///
/// A pure map over the fixed category set; renders are independent and
/// order-insensitive. Fails only when a source cannot be loaded.
pub fn render_catalog<S: ContentSource>(source: &S) -> Result<Vec<CategoryFragment>, ContentError> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let markdown = source.load(category)?;
            let html = render_category(category, &markdown);
            tracing::debug!(category = %category, bytes = html.len(), "rendered category grid");
            Ok(CategoryFragment { category, html })
        })
        .collect()
}
