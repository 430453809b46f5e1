//! Heading anchors and the table of contents

use crate::core::render::escape_html;
use comrak::nodes::{AstNode, NodeValue};
use std::collections::HashMap;

/// Deepest section level the table of contents can show
pub const MAX_TOC_LEVELS: u8 = 5;

const FALLBACK_ANCHOR: &str = "section";

/// A heading of the parsed document with its anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Heading {
    pub level: u8,
    pub text: String,
    pub anchor: String,
}

/// Produces unique anchors; repeats get `-2`, `-3` and so on
#[derive(Debug, Default)]
pub(crate) struct AnchorSlugger {
    occurrences: HashMap<String, usize>,
}

impl AnchorSlugger {
    pub fn anchor_for(&mut self, text: &str) -> String {
        let mut base = slug::slugify(text);
        if base.is_empty() {
            base = FALLBACK_ANCHOR.to_string();
        }

        let count = self.occurrences.entry(base.clone()).or_insert(0);
        *count += 1;

        if *count == 1 {
            base
        } else {
            format!("{base}-{}", *count)
        }
    }
}

/// Headings in document order
pub(crate) fn collect_headings<'a>(root: &'a AstNode<'a>) -> Vec<Heading> {
    fn walk<'a>(node: &'a AstNode<'a>, slugger: &mut AnchorSlugger, out: &mut Vec<Heading>) {
        let level = {
            let data = node.data.borrow();
            match &data.value {
                NodeValue::Heading(heading) => Some(heading.level),
                _ => None,
            }
        };

        if let Some(level) = level {
            let text = collect_inline_text(node)
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");
            let anchor = slugger.anchor_for(&text);
            out.push(Heading {
                level,
                text,
                anchor,
            });
        }

        let mut child = node.first_child();
        while let Some(next) = child {
            walk(next, slugger, out);
            child = next.next_sibling();
        }
    }

    let mut slugger = AnchorSlugger::default();
    let mut headings = Vec::new();
    walk(root, &mut slugger, &mut headings);
    headings
}

pub(crate) fn collect_inline_text<'a>(node: &'a AstNode<'a>) -> String {
    fn walk<'a>(node: &'a AstNode<'a>, buffer: &mut String) {
        {
            let data = node.data.borrow();
            match &data.value {
                NodeValue::Text(text) => buffer.push_str(text),
                NodeValue::Code(code) => buffer.push_str(&code.literal),
                NodeValue::LineBreak | NodeValue::SoftBreak => buffer.push(' '),
                _ => {}
            }
        }
        let mut child = node.first_child();
        while let Some(next) = child {
            walk(next, buffer);
            child = next.next_sibling();
        }
    }

    let mut text = String::new();
    let mut child = node.first_child();
    while let Some(next) = child {
        walk(next, &mut text);
        child = next.next_sibling();
    }
    text
}

/// Adds an `id` to each `<hN>` opening tag, matching headings in order
///
/// Only valid for HTML produced from trusted Markdown, where every `<hN>` tag
/// comes from a heading node.
pub(crate) fn inject_heading_ids(html: &str, headings: &[Heading]) -> String {
    let mut out = String::with_capacity(html.len() + headings.len() * 24);
    let mut rest = html;

    for heading in headings {
        let open = format!("<h{}>", heading.level);
        let Some(idx) = rest.find(&open) else {
            break;
        };
        out.push_str(&rest[..idx]);
        out.push_str(&format!("<h{} id=\"{}\">", heading.level, heading.anchor));
        rest = &rest[idx + open.len()..];
    }

    out.push_str(rest);
    out
}

/// Nested list of section links
///
/// Level 1 is the document title and is left out. `toc_levels` counts
/// section levels below the title, so 3 lists `<h2>` through `<h4>`.
pub(crate) fn build_toc(headings: &[Heading], toc_levels: u8) -> String {
    let deepest = toc_levels.clamp(1, MAX_TOC_LEVELS) + 1;
    let mut html = String::new();
    let mut open: Vec<u8> = Vec::new();

    for heading in headings
        .iter()
        .filter(|h| h.level >= 2 && h.level <= deepest)
    {
        while let Some(&top) = open.last() {
            if top <= heading.level {
                break;
            }
            html.push_str("</li>\n</ul>\n");
            open.pop();
        }

        match open.last() {
            Some(&top) if top == heading.level => html.push_str("</li>\n"),
            _ => {
                html.push_str(&format!(
                    "<ul class=\"sectlevel{}\">\n",
                    heading.level - 1
                ));
                open.push(heading.level);
            }
        }

        html.push_str(&format!(
            "<li><a href=\"#{}\">{}</a>",
            heading.anchor,
            escape_html(&heading.text)
        ));
    }

    while open.pop().is_some() {
        html.push_str("</li>\n</ul>\n");
    }

    html
}
