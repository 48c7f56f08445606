//! Content categories and their grid layout assignment.

use std::fmt;

use keydex_grid::GridKind;

/// A content grouping in the directory.
///
/// The set is fixed at compile time; each category owns one markdown table
/// and one grid layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Category {
    Websites,
    Platforms,
    DeveloperTools,
    SecurityKeys,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 4] = [
        Category::Websites,
        Category::Platforms,
        Category::DeveloperTools,
        Category::SecurityKeys,
    ];

    /// URL- and file-safe identifier.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Websites => "websites",
            Self::Platforms => "platforms",
            Self::DeveloperTools => "developer-tools",
            Self::SecurityKeys => "security-keys",
        }
    }

    /// Human-readable panel title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Websites => "Websites",
            Self::Platforms => "Platforms",
            Self::DeveloperTools => "Developer Tools",
            Self::SecurityKeys => "Security Keys",
        }
    }

    /// The grid layout this category's table renders with.
    ///
    /// Websites carries a trailing link column, so it gets the four-column
    /// layout; everything else uses the three-column listing layout.
    #[must_use]
    pub fn grid(self) -> GridKind {
        match self {
            Self::Websites => GridKind::Website,
            Self::Platforms | Self::DeveloperTools | Self::SecurityKeys => GridKind::Directory,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
