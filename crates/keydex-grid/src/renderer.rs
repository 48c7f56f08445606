//! Generic markdown renderer with a pluggable grid backend.

use std::fmt::Write;
use std::marker::PhantomData;

use pulldown_cmark::{
    CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd,
};

use crate::align::justify_class;
use crate::backend::GridBackend;
use crate::state::{CellState, ImageState, LinkState, TableState, escape_html};

/// Header labels rendered as empty slots. The cell element still renders,
/// so the grid keeps its declared column count.
const SUPPRESSED_HEADERS: [&str; 2] = ["Logo", "Features"];

/// Shared layout classes every cell carries, before the variant and
/// alignment classes are appended.
const CELL_BASE: &str = "flex items-center px-4 py-3";

/// Markdown renderer producing flat grid fragments.
///
/// Table, row, cell, image, and link tokens render through the
/// [`GridBackend`] overrides; everything else renders as conventional
/// HTML. The renderer is total over well-formed token streams: malformed
/// tables degrade to a lopsided grid rather than an error.
pub struct GridRenderer<B: GridBackend> {
    output: String,
    table: TableState,
    cell: CellState,
    image: ImageState,
    link: LinkState,
    pending_image: Option<(String, String)>,
    pending_link: Option<(String, String)>,
    _backend: PhantomData<B>,
}

impl<B: GridBackend> GridRenderer<B> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(4096),
            table: TableState::default(),
            cell: CellState::default(),
            image: ImageState::default(),
            link: LinkState::default(),
            pending_image: None,
            pending_link: None,
            _backend: PhantomData,
        }
    }

    /// Parser options the grid layouts expect.
    #[must_use]
    pub fn parser_options() -> Options {
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH
    }

    /// Create a configured parser for the given markdown text.
    #[must_use]
    pub fn create_parser(markdown: &str) -> Parser<'_> {
        Parser::new_ext(markdown, Self::parser_options())
    }

    /// Render markdown text directly using the configured parser options.
    pub fn render_markdown(&mut self, markdown: &str) -> String {
        self.render(Self::create_parser(markdown))
    }

    /// Render markdown events into an HTML fragment.
    pub fn render<'a, I>(&mut self, events: I) -> String
    where
        I: Iterator<Item = Event<'a>>,
    {
        for event in events {
            self.process_event(event);
        }
        std::mem::take(&mut self.output)
    }

    /// Push already-rendered markup into the innermost active buffer.
    fn push_markup(&mut self, markup: &str) {
        if self.link.is_active() {
            self.link.push_html(markup);
        } else if self.cell.is_active() {
            self.cell.push_html(markup);
        } else {
            self.output.push_str(markup);
        }
    }

    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(&tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline_code(&code),
            Event::Html(html) | Event::InlineHtml(html) => self.push_markup(&html),
            Event::SoftBreak => self.push_markup("\n"),
            Event::HardBreak => self.push_markup("<br>"),
            Event::Rule => self.push_markup("<hr>"),
            Event::TaskListMarker(_)
            | Event::FootnoteReference(_)
            | Event::InlineMath(_)
            | Event::DisplayMath(_) => {
                // Not enabled in parser options
            }
        }
    }

    fn start_tag(&mut self, tag: &Tag<'_>) {
        match tag {
            Tag::Paragraph => self.push_markup("<p>"),
            Tag::Heading { level, .. } => {
                let opening = format!("<h{}>", heading_level_to_num(*level));
                self.push_markup(&opening);
            }
            Tag::BlockQuote(_) => self.push_markup("<blockquote>"),
            Tag::CodeBlock(kind) => match kind {
                CodeBlockKind::Fenced(info) if !info.is_empty() => {
                    let lang = info.split_whitespace().next().unwrap_or("");
                    let opening =
                        format!(r#"<pre><code class="language-{}">"#, escape_html(lang));
                    self.push_markup(&opening);
                }
                _ => self.push_markup("<pre><code>"),
            },
            Tag::List(start) => match start {
                Some(1) => self.push_markup("<ol>"),
                Some(n) => {
                    let opening = format!(r#"<ol start="{n}">"#);
                    self.push_markup(&opening);
                }
                None => self.push_markup("<ul>"),
            },
            Tag::Item => self.push_markup("<li>"),
            Tag::Table(alignments) => {
                self.table.start(alignments.clone());
                write!(
                    self.output,
                    r#"<div class="grid {}" data-columns="{}">"#,
                    B::TRACKS,
                    B::COLUMNS
                )
                .unwrap();
            }
            Tag::TableHead => self.table.start_head(),
            Tag::TableRow => self.table.start_row(),
            Tag::TableCell => self.cell.start(),
            Tag::Emphasis => self.push_markup("<em>"),
            Tag::Strong => self.push_markup("<strong>"),
            Tag::Strikethrough => self.push_markup("<s>"),
            Tag::Link {
                dest_url, title, ..
            } => {
                self.pending_link = Some((dest_url.to_string(), title.to_string()));
                self.link.start();
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                self.pending_image = Some((dest_url.to_string(), title.to_string()));
                self.image.start();
            }
            Tag::FootnoteDefinition(_)
            | Tag::HtmlBlock
            | Tag::MetadataBlock(_)
            | Tag::DefinitionList
            | Tag::DefinitionListTitle
            | Tag::DefinitionListDefinition
            | Tag::Superscript
            | Tag::Subscript => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.push_markup("</p>"),
            TagEnd::Heading(level) => {
                let closing = format!("</h{}>", heading_level_to_num(level));
                self.push_markup(&closing);
            }
            TagEnd::BlockQuote(_) => self.push_markup("</blockquote>"),
            TagEnd::CodeBlock => self.push_markup("</code></pre>"),
            TagEnd::List(ordered) => {
                self.push_markup(if ordered { "</ol>" } else { "</ul>" });
            }
            TagEnd::Item => self.push_markup("</li>"),
            TagEnd::Table => {
                self.output.push_str("</div>");
                self.table.end();
            }
            TagEnd::TableHead => self.table.end_head(),
            TagEnd::TableRow => {
                // Rows add no wrapper: cells stay flat grid siblings
            }
            TagEnd::TableCell => self.table_cell_end(),
            TagEnd::Emphasis => self.push_markup("</em>"),
            TagEnd::Strong => self.push_markup("</strong>"),
            TagEnd::Strikethrough => self.push_markup("</s>"),
            TagEnd::Link => {
                let inner = self.link.end();
                if let Some((href, title)) = self.pending_link.take() {
                    let mut anchor = String::new();
                    B::anchor(&href, &title, &inner, &mut anchor);
                    self.push_markup(&anchor);
                }
            }
            TagEnd::Image => {
                let alt = self.image.end();
                if let Some((src, title)) = self.pending_image.take() {
                    let mut image = String::new();
                    B::image(&src, &alt, &title, &mut image);
                    self.push_markup(&image);
                }
            }
            TagEnd::FootnoteDefinition
            | TagEnd::HtmlBlock
            | TagEnd::MetadataBlock(_)
            | TagEnd::DefinitionList
            | TagEnd::DefinitionListTitle
            | TagEnd::DefinitionListDefinition
            | TagEnd::Superscript
            | TagEnd::Subscript => {}
        }
    }

    /// Close the current cell: apply header suppression, assemble the
    /// class list, and wrap the buffered content.
    fn table_cell_end(&mut self) {
        let (html, text) = self.cell.end();
        let is_head = self.table.is_in_head();
        let suppressed = is_head && SUPPRESSED_HEADERS.contains(&text.as_str());
        let content = if suppressed { "" } else { html.as_str() };

        let mut classes = format!(
            "{CELL_BASE} border-b border-zinc-200 [&:nth-last-child(-n+{})]:border-b-0",
            B::COLUMNS
        );
        if is_head {
            classes.push_str(" font-semibold");
        }
        if !B::CELL_EXTRAS.is_empty() {
            classes.push(' ');
            classes.push_str(B::CELL_EXTRAS);
        }
        if let Some(justify) = justify_class(self.table.current_alignment()) {
            classes.push(' ');
            classes.push_str(justify);
        }

        write!(self.output, r#"<div class="{classes}">{content}</div>"#).unwrap();
        self.table.next_cell();
    }

    fn text(&mut self, text: &str) {
        if self.image.is_active() {
            self.image.push_alt(text);
            return;
        }
        if self.cell.is_active() {
            self.cell.push_text(text);
        }
        let escaped = escape_html(text);
        self.push_markup(&escaped);
    }

    fn inline_code(&mut self, code: &str) {
        if self.cell.is_active() {
            self.cell.push_text(code);
        }
        let markup = format!("<code>{}</code>", escape_html(code));
        self.push_markup(&markup);
    }
}

impl<B: GridBackend> Default for GridRenderer<B> {
    fn default() -> Self {
        Self::new()
    }
}

fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::grids::{DirectoryGrid, WebsiteGrid};

    fn render_directory(markdown: &str) -> String {
        GridRenderer::<DirectoryGrid>::new().render_markdown(markdown)
    }

    fn render_website(markdown: &str) -> String {
        GridRenderer::<WebsiteGrid>::new().render_markdown(markdown)
    }

    const LISTING: &str = "\
| Logo | Name | Features |
| :--- | :--- | :------- |
| ![Acme](/public/acme.png) | Acme | Passkeys |";

    const WEBSITES: &str = "\
| Logo | Name | Features | Link |
| :--- | :--- | :------- | ---: |
| ![Acme](img.png) | Acme | Passkeys | [acme.example](https://acme.example) |";

    #[test]
    fn test_directory_table_exact_fragment() {
        let cell = "flex items-center px-4 py-3 border-b border-zinc-200 \
                    [&:nth-last-child(-n+3)]:border-b-0";
        let expected = format!(
            concat!(
                r#"<div class="grid md:grid-cols-[auto_1fr_1fr]" data-columns="3">"#,
                r#"<div class="{cell} font-semibold justify-start"></div>"#,
                r#"<div class="{cell} font-semibold justify-start">Name</div>"#,
                r#"<div class="{cell} font-semibold justify-start"></div>"#,
                r#"<div class="{cell} justify-start">"#,
                r#"<img class="h-8 w-8 object-contain" src="/acme.png" alt="Acme" title="">"#,
                "</div>",
                r#"<div class="{cell} justify-start">Acme</div>"#,
                r#"<div class="{cell} justify-start">Passkeys</div>"#,
                "</div>",
            ),
            cell = cell,
        );
        assert_eq!(render_directory(LISTING), expected);
    }

    #[test]
    fn test_header_suppression_both_variants() {
        for html in [render_directory(LISTING), render_website(WEBSITES)] {
            assert!(!html.contains(">Logo<"), "Logo header should be empty: {html}");
            assert!(
                !html.contains(">Features<"),
                "Features header should be empty: {html}"
            );
            assert!(html.contains(">Name</div>"), "Name header stays visible");
        }
    }

    #[test]
    fn test_suppressed_header_keeps_its_grid_slot() {
        let html = render_directory("| Logo | Name | Features |\n| - | - | - |");
        // Three header cells render even though two carry no text.
        assert_eq!(html.matches("<div class=\"flex").count(), 3);
    }

    #[test]
    fn test_data_cell_text_round_trips() {
        let html = render_directory("| A | B | C |\n| - | - | - |\n| x | YubiKey 5 | z |");
        assert!(html.contains(">YubiKey 5</div>"));
    }

    #[test]
    fn test_suppression_only_applies_to_header_cells() {
        let html = render_directory("| A | B | C |\n| - | - | - |\n| Logo | Features | z |");
        assert!(html.contains(">Logo</div>"));
        assert!(html.contains(">Features</div>"));
    }

    #[test]
    fn test_alignment_directives() {
        let html =
            render_directory("| A | B | C |\n| :- | :-: | -: |\n| a | b | c |");
        assert!(html.contains("justify-start"));
        assert!(html.contains("justify-center"));
        assert!(html.contains("justry-end"));
    }

    #[test]
    fn test_absent_alignment_emits_no_directive() {
        let html = render_directory("| A |\n| - |\n| a |");
        assert!(!html.contains("justify"));
    }

    #[test]
    fn test_column_count_independent_of_rows() {
        let header_only = "| A | B | C | D |\n| - | - | - | - |";
        let one_row = format!("{header_only}\n| a | b | c | d |");
        let many_rows = format!("{header_only}\n| a | b | c | d |\n| e | f | g | h |");
        for source in [header_only.to_owned(), one_row, many_rows] {
            assert!(render_website(&source).contains(r#"data-columns="4""#));
            assert!(render_directory(&source).contains(r#"data-columns="3""#));
        }
    }

    #[test]
    fn test_websites_end_to_end() {
        let html = render_website(WEBSITES);
        assert!(html.contains(r#"data-columns="4""#));
        assert!(
            html.contains(r#"<img class="h-8 w-8 object-contain" src="img.png" alt="Acme" title="">"#)
        );
        assert!(html.contains(">Acme</div>"));
        assert!(html.contains(">Passkeys</div>"));
        assert!(html.contains(r#"href="https://acme.example""#));
        assert!(html.contains(r#"target="_blank" rel="noopener noreferrer""#));
        assert!(html.contains(r#"<span class="hidden md:inline">acme.example</span>"#));
        assert!(html.contains(r#"<span class="md:hidden">Website</span>"#));
    }

    #[test]
    fn test_default_variant_keeps_plain_anchors() {
        let html = render_directory(WEBSITES);
        assert!(html.contains(r#"<a href="https://acme.example">acme.example</a>"#));
        assert!(!html.contains("md:hidden"));
        assert!(!html.contains("target="));
    }

    #[test]
    fn test_website_cells_carry_structural_extras() {
        let html = render_website(WEBSITES);
        assert!(html.contains("[&:nth-last-child(-n+4)]:border-b-0"));
        assert!(html.contains("[&:nth-last-child(4n+2)]:text-2xl"));
        assert!(html.contains("[&:nth-child(4n)]:max-md:col-span-full"));
    }

    #[test]
    fn test_directory_cells_have_no_extras() {
        let html = render_directory(LISTING);
        assert!(!html.contains("text-2xl"));
        assert!(!html.contains("col-span-full"));
    }

    #[test]
    fn test_rows_emit_no_wrapper() {
        let html = render_directory(LISTING);
        assert!(!html.contains("<tr"));
        assert!(!html.contains("<table"));
        // Container plus six cells is all the markup there is.
        assert_eq!(html.matches("<div").count(), 7);
    }

    #[test]
    fn test_image_path_without_prefix_unchanged() {
        let html = render_directory("| A |\n| - |\n| ![x](logos/a.png) |");
        assert!(html.contains(r#"src="logos/a.png""#));
    }

    #[test]
    fn test_image_prefix_stripped_everywhere() {
        let html = render_directory("| A |\n| - |\n| ![x](/public/a/public/b.png) |");
        assert!(html.contains(r#"src="/a/b.png""#));
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render_directory("| A |\n| - |\n| AT&T < you |");
        assert!(html.contains("AT&amp;T &lt; you"));
    }

    #[test]
    fn test_non_table_markdown_renders_as_html() {
        let html = render_directory(
            "# Title\n\nSome *em* and **strong** with `code`.\n\n- one\n- two",
        );
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<p>Some <em>em</em> and <strong>strong</strong> with <code>code</code>.</p>"));
        assert!(html.contains("<ul><li>one</li><li>two</li></ul>"));
    }

    #[test]
    fn test_inline_markup_inside_cells() {
        let html = render_directory("| A |\n| - |\n| **bold** feature |");
        assert!(html.contains("<strong>bold</strong> feature</div>"));
    }

    #[test]
    fn test_empty_input_renders_empty_fragment() {
        assert_eq!(render_directory(""), "");
    }

    #[test]
    fn test_missing_header_degrades_without_error() {
        // No delimiter row: not a table at all, renders as a paragraph.
        let html = render_directory("| Logo | Name | Features |");
        assert!(html.contains("<p>"));
        assert!(!html.contains("data-columns"));
    }
}
