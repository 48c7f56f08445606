//! Rendering state for table, cell, image, and link buffering.

use pulldown_cmark::Alignment;

/// Escape HTML special characters in text content and attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Tracks position and column alignments while inside a table.
#[derive(Default)]
pub(crate) struct TableState {
    alignments: Vec<Alignment>,
    in_head: bool,
    cell_index: usize,
}

impl TableState {
    pub(crate) fn start(&mut self, alignments: Vec<Alignment>) {
        self.alignments = alignments;
        self.in_head = false;
        self.cell_index = 0;
    }

    pub(crate) fn end(&mut self) {
        self.alignments.clear();
    }

    pub(crate) fn start_head(&mut self) {
        self.in_head = true;
        self.cell_index = 0;
    }

    pub(crate) fn end_head(&mut self) {
        self.in_head = false;
    }

    pub(crate) fn start_row(&mut self) {
        self.cell_index = 0;
    }

    pub(crate) fn next_cell(&mut self) {
        self.cell_index += 1;
    }

    pub(crate) fn is_in_head(&self) -> bool {
        self.in_head
    }

    /// Alignment of the current cell's column, `None` when out of range.
    pub(crate) fn current_alignment(&self) -> Alignment {
        self.alignments
            .get(self.cell_index)
            .copied()
            .unwrap_or(Alignment::None)
    }
}

/// Buffers a table cell's rendered markup and raw text.
///
/// The raw text is kept separately so header suppression can do an exact
/// label match regardless of inline markup.
#[derive(Default)]
pub(crate) struct CellState {
    active: bool,
    html: String,
    text: String,
}

impl CellState {
    pub(crate) fn start(&mut self) {
        self.active = true;
        self.html.clear();
        self.text.clear();
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn push_html(&mut self, html: &str) {
        self.html.push_str(html);
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub(crate) fn end(&mut self) -> (String, String) {
        self.active = false;
        (
            std::mem::take(&mut self.html),
            std::mem::take(&mut self.text),
        )
    }
}

/// Collects alt text between image start and end events.
#[derive(Default)]
pub(crate) struct ImageState {
    active: bool,
    alt: String,
}

impl ImageState {
    pub(crate) fn start(&mut self) {
        self.active = true;
        self.alt.clear();
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn push_alt(&mut self, text: &str) {
        self.alt.push_str(text);
    }

    pub(crate) fn end(&mut self) -> String {
        self.active = false;
        std::mem::take(&mut self.alt)
    }
}

/// Buffers rendered inner markup between link start and end events.
#[derive(Default)]
pub(crate) struct LinkState {
    active: bool,
    html: String,
}

impl LinkState {
    pub(crate) fn start(&mut self) {
        self.active = true;
        self.html.clear();
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn push_html(&mut self, html: &str) {
        self.html.push_str(html);
    }

    pub(crate) fn end(&mut self) -> String {
        self.active = false;
        std::mem::take(&mut self.html)
    }
}
