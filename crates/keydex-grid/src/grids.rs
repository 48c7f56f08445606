//! The two grid layouts and the selector enum over them.

use std::fmt::Write;

use crate::backend::GridBackend;
use crate::renderer::GridRenderer;
use crate::state::escape_html;

/// Three-column grid for listing tables (logo, name, features).
///
/// Links keep their plain parser form; only the logo column gets the icon
/// treatment.
pub struct DirectoryGrid;

impl GridBackend for DirectoryGrid {
    const COLUMNS: usize = 3;
    const TRACKS: &'static str = "md:grid-cols-[auto_1fr_1fr]";
}

/// Four-column grid for the websites table (logo, name, features, link).
///
/// Cells carry two extra structural rules: enlarged text on the column two
/// positions from the end of each row, and a narrow-viewport full-width
/// treatment on each row's last column. Both selectors are hard-coded to
/// four columns and must be re-derived if `COLUMNS` ever changes.
pub struct WebsiteGrid;

impl GridBackend for WebsiteGrid {
    const COLUMNS: usize = 4;
    const TRACKS: &'static str = "grid-cols-[auto_1fr_1fr] md:grid-cols-[auto_1fr_1fr_auto]";
    const CELL_EXTRAS: &'static str =
        "[&:nth-last-child(4n+2)]:text-2xl [&:nth-child(4n)]:max-md:col-span-full";

    /// Anchor that opens in a new tab and swaps its label by viewport:
    /// the original text on wide screens, a fixed "Website" label on
    /// narrow ones. Both labels are present in the markup; visibility is
    /// purely a styling concern.
    fn anchor(href: &str, title: &str, inner: &str, out: &mut String) {
        let title_attr = if title.is_empty() {
            String::new()
        } else {
            format!(r#" title="{}""#, escape_html(title))
        };
        write!(
            out,
            r#"<a href="{}"{title_attr} target="_blank" rel="noopener noreferrer"><span class="hidden md:inline">{inner}</span><span class="md:hidden">Website</span></a>"#,
            escape_html(href)
        )
        .unwrap();
    }
}

/// Selector over the fixed set of grid layouts.
///
/// The set is closed: each variant pairs a column count with the cell and
/// container markup that agree on it, assembled at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GridKind {
    /// Three-column listing layout.
    Directory,
    /// Four-column layout with responsive link column.
    Website,
}

impl GridKind {
    /// Render a markdown source through this layout's backend.
    #[must_use]
    pub fn render(self, markdown: &str) -> String {
        match self {
            Self::Directory => GridRenderer::<DirectoryGrid>::new().render_markdown(markdown),
            Self::Website => GridRenderer::<WebsiteGrid>::new().render_markdown(markdown),
        }
    }
}
