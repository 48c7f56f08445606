//! Grid render backend trait.

use std::fmt::Write;

use crate::state::escape_html;

/// Per-category rendering overrides for the grid renderer.
///
/// A backend bundles everything that varies between table layouts: the
/// declared column count, the responsive track template, extra structural
/// classes on cells, and the inline image/link markup. The column count is
/// a single const that both the container and the cell border selector are
/// derived from, so the two cannot disagree.
pub trait GridBackend {
    /// Number of grid tracks the table container declares.
    const COLUMNS: usize;

    /// Responsive `grid-cols` template classes for the container.
    const TRACKS: &'static str;

    /// Structural classes appended to every cell beyond the shared set.
    const CELL_EXTRAS: &'static str = "";

    /// Render an image token as a fixed-size icon.
    ///
    /// Any occurrence of the `/public` asset prefix is stripped from the
    /// source path. Missing alt/title render as empty attributes.
    fn image(src: &str, alt: &str, title: &str, out: &mut String) {
        let src = src.replace("/public", "");
        write!(
            out,
            r#"<img class="h-8 w-8 object-contain" src="{}" alt="{}" title="{}">"#,
            escape_html(&src),
            escape_html(alt),
            escape_html(title)
        )
        .unwrap();
    }

    /// Render a link token around already-rendered inner markup.
    ///
    /// The default form matches plain parser output.
    fn anchor(href: &str, title: &str, inner: &str, out: &mut String) {
        if title.is_empty() {
            write!(out, r#"<a href="{}">{inner}</a>"#, escape_html(href)).unwrap();
        } else {
            write!(
                out,
                r#"<a href="{}" title="{}">{inner}</a>"#,
                escape_html(href),
                escape_html(title)
            )
            .unwrap();
        }
    }
}
