//! Passkey ecosystem categories and the grid rendering pipeline.
//!
//! This crate owns the fixed set of content categories, the mapping from
//! each category to its grid layout, and the driver that turns markdown
//! sources into HTML fragments for the page-composition layer.
//!
//! # Example
//!
//! ```
//! use keydex_catalog::{BundledContent, render_catalog};
//!
//! let fragments = render_catalog(&BundledContent).unwrap();
//! assert_eq!(fragments.len(), 4);
//! ```

mod category;
mod content;
mod pipeline;

pub use category::Category;
pub use content::{BundledContent, ContentError, ContentSource};
pub use pipeline::{CategoryFragment, render_catalog, render_category};
