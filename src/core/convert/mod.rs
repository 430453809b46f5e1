//! HTML conversion of rendered documents
//!
//! Produces a standalone HTML5 page per document: embedded stylesheet, a
//! table of contents beside the content and an anchor on every heading.
//! Output depends only on the input file and the options, so converting the
//! same document twice yields identical bytes.

mod links;
mod toc;

pub use toc::MAX_TOC_LEVELS;

use crate::core::render::{escape_html, RenderedDocument};
use crate::domain::ConvertError;
use comrak::options::Options;
use comrak::{format_html, parse_document, Arena};
use std::path::{Path, PathBuf};

const DEFAULT_STYLESHEET: &str = include_str!("default.css");
const DEFAULT_PAGE_TITLE: &str = "API documentation";
const TOC_TITLE: &str = "Table of Contents";

/// Output format of the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    #[default]
    Html5,
}

impl Backend {
    pub fn extension(&self) -> &'static str {
        match self {
            Backend::Html5 => "html",
        }
    }
}

/// Where the table of contents is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TocPlacement {
    #[default]
    Left,
    Right,
    /// Above the content, scrolling with it
    Top,
}

impl TocPlacement {
    fn body_class(&self) -> &'static str {
        match self {
            TocPlacement::Left => "article toc2 toc-left",
            TocPlacement::Right => "article toc2 toc-right",
            TocPlacement::Top => "article",
        }
    }

    fn nav_class(&self) -> &'static str {
        match self {
            TocPlacement::Left | TocPlacement::Right => "toc2",
            TocPlacement::Top => "toc",
        }
    }
}

/// Trust level of the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SafeMode {
    /// Raw HTML passes through and local stylesheets may be embedded
    #[default]
    Unsafe,
    /// Raw HTML is dropped and only the built-in stylesheet is used
    Safe,
}

/// Converter settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub backend: Backend,
    pub toc_placement: TocPlacement,
    /// Section levels listed in the table of contents, at most [`MAX_TOC_LEVELS`]
    pub toc_levels: u8,
    pub safe_mode: SafeMode,
    /// Local CSS file embedded instead of the built-in stylesheet
    pub stylesheet: Option<PathBuf>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            backend: Backend::Html5,
            toc_placement: TocPlacement::Left,
            toc_levels: 3,
            safe_mode: SafeMode::Unsafe,
            stylesheet: None,
        }
    }
}

/// Converts rendered Markdown documents to HTML pages
///
/// # Example
///
/// ```no_run
/// use docsmith::core::convert::{ConvertOptions, HtmlConverter};
///
/// let converter = HtmlConverter::new(ConvertOptions::default()).unwrap();
/// assert_eq!(converter.options().toc_levels, 3);
/// ```
#[derive(Debug)]
pub struct HtmlConverter {
    options: ConvertOptions,
    stylesheet: String,
}

impl HtmlConverter {
    /// Creates a converter, loading the stylesheet up front
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::SafeMode`] when a custom stylesheet is
    /// requested in safe mode and [`ConvertError::Stylesheet`] when it cannot
    /// be read.
    pub fn new(options: ConvertOptions) -> Result<Self, ConvertError> {
        let stylesheet = match (&options.stylesheet, options.safe_mode) {
            (None, _) => DEFAULT_STYLESHEET.to_string(),
            (Some(path), SafeMode::Safe) => {
                return Err(ConvertError::SafeMode(format!(
                    "custom stylesheet {} cannot be embedded",
                    path.display()
                )));
            }
            (Some(path), SafeMode::Unsafe) => {
                std::fs::read_to_string(path).map_err(|e| ConvertError::Stylesheet {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?
            }
        };

        Ok(Self {
            options,
            stylesheet,
        })
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Output path for a document: same directory and stem, backend extension
    pub fn output_path(&self, source: &Path) -> PathBuf {
        source.with_extension(self.options.backend.extension())
    }

    /// Converts a rendered document, writing the page next to it
    ///
    /// Any existing page at the output path is overwritten. The document
    /// itself is left in place; its owner removes it.
    ///
    /// # Errors
    ///
    /// Returns a [`ConvertError`] if the document cannot be read, formatted
    /// or written.
    pub fn convert(&self, document: &RenderedDocument) -> Result<PathBuf, ConvertError> {
        let source = document.path();
        let markdown = std::fs::read_to_string(source).map_err(|e| ConvertError::Read {
            path: source.display().to_string(),
            message: e.to_string(),
        })?;

        let page = self.render_page(&markdown)?;

        let output = self.output_path(source);
        std::fs::write(&output, page.as_bytes()).map_err(|e| ConvertError::Write {
            path: output.display().to_string(),
            message: e.to_string(),
        })?;

        tracing::debug!(
            port = %document.port(),
            path = %output.display(),
            bytes = page.len(),
            "Converted document to HTML"
        );

        Ok(output)
    }

    /// Builds the full page for trusted Markdown
    pub(crate) fn render_page(&self, markdown: &str) -> Result<String, ConvertError> {
        let options = markdown_options(self.options.safe_mode);
        let arena = Arena::new();
        let root = parse_document(&arena, markdown, &options);
        let stripped = links::strip_unsafe_links(root);
        if stripped > 0 {
            tracing::debug!(count = stripped, "Removed links with disallowed targets");
        }
        let headings = toc::collect_headings(root);

        let mut body = String::new();
        format_html(root, &options, &mut body)
            .map_err(|e| ConvertError::Format(e.to_string()))?;
        let body = toc::inject_heading_ids(&body, &headings);

        let title = headings
            .iter()
            .find(|h| h.level == 1)
            .map(|h| h.text.as_str())
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_PAGE_TITLE);
        let contents = toc::build_toc(&headings, self.options.toc_levels);

        Ok(self.layout(title, &contents, &body))
    }

    fn layout(&self, title: &str, contents: &str, body: &str) -> String {
        let placement = self.options.toc_placement;
        let mut page = String::with_capacity(body.len() + contents.len() + self.stylesheet.len() + 512);

        page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        page.push_str("<meta charset=\"UTF-8\">\n");
        page.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        page.push_str(concat!(
            "<meta name=\"generator\" content=\"docsmith ",
            env!("CARGO_PKG_VERSION"),
            "\">\n"
        ));
        page.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        page.push_str("<style>\n");
        page.push_str(&self.stylesheet);
        if !self.stylesheet.ends_with('\n') {
            page.push('\n');
        }
        page.push_str("</style>\n</head>\n");

        page.push_str(&format!("<body class=\"{}\">\n", placement.body_class()));
        if !contents.is_empty() {
            page.push_str(&format!(
                "<nav id=\"toc\" class=\"{}\">\n<div id=\"toctitle\">{}</div>\n",
                placement.nav_class(),
                TOC_TITLE
            ));
            page.push_str(contents);
            page.push_str("</nav>\n");
        }
        page.push_str("<main id=\"content\">\n");
        page.push_str(body);
        page.push_str("</main>\n</body>\n</html>\n");

        page
    }
}

fn markdown_options(safe_mode: SafeMode) -> Options<'static> {
    let mut options = Options::default();
    let ext = &mut options.extension;
    ext.table = true;
    ext.autolink = true;
    ext.strikethrough = true;
    ext.tagfilter = false;

    options.render.r#unsafe = safe_mode == SafeMode::Unsafe;
    options
}
