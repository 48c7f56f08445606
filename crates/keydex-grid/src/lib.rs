//! Markdown table to HTML grid renderer with per-category backends.
//!
//! This crate provides a generic [`GridRenderer`] that turns a markdown
//! table into a flat CSS-grid fragment using the [`GridBackend`] trait.
//!
//! # Architecture
//!
//! The renderer walks pulldown-cmark events and replaces the table, row,
//! cell, image, and link output with grid-oriented markup:
//!
//! - [`DirectoryGrid`]: three-column layout for listing-style tables
//!   (logo, name, features)
//! - [`WebsiteGrid`]: four-column layout with a trailing link column and
//!   viewport-responsive anchors
//!
//! Rows emit no wrapper element; cells are flat siblings of the grid
//! container, which is what lets `nth-child` structural selectors drive
//! the column-dependent styling. Everything outside a table renders as
//! conventional HTML.
//!
//! # Example
//!
//! ```
//! use keydex_grid::{DirectoryGrid, GridRenderer};
//!
//! let markdown = "\
//! | Logo | Name | Features |
//! | :--- | :--- | :------- |
//! | ![Acme](/public/logos/acme.png) | Acme | Passkey sign-in |";
//!
//! let html = GridRenderer::<DirectoryGrid>::new().render_markdown(markdown);
//! assert!(html.contains(r#"data-columns="3""#));
//! assert!(html.contains(r#"src="/logos/acme.png""#));
//! ```

mod align;
mod backend;
mod grids;
mod renderer;
mod state;

pub use align::justify_class;
pub use backend::GridBackend;
pub use grids::{DirectoryGrid, GridKind, WebsiteGrid};
pub use renderer::GridRenderer;
pub use state::escape_html;
