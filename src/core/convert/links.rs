//! Link targets allowed in converted pages
//!
//! Unsafe rendering turns comrak's own URL filter off, so links and images
//! are checked here before formatting.

use comrak::nodes::{AstNode, NodeValue};

const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Unwraps links and images whose target uses a scheme other than
/// http, https or mailto, keeping their text
///
/// Relative targets and fragments are kept. Returns the number of nodes
/// unwrapped.
pub(crate) fn strip_unsafe_links<'a>(root: &'a AstNode<'a>) -> usize {
    fn walk<'a>(node: &'a AstNode<'a>, out: &mut Vec<&'a AstNode<'a>>) {
        let rejected = {
            let data = node.data.borrow();
            match &data.value {
                NodeValue::Link(link) | NodeValue::Image(link) => !is_allowed_target(&link.url),
                _ => false,
            }
        };
        if rejected {
            out.push(node);
        }

        let mut child = node.first_child();
        while let Some(next) = child {
            walk(next, out);
            child = next.next_sibling();
        }
    }

    let mut rejected = Vec::new();
    walk(root, &mut rejected);

    for node in &rejected {
        while let Some(child) = node.first_child() {
            node.insert_before(child);
        }
        node.detach();
    }

    rejected.len()
}

fn is_allowed_target(url: &str) -> bool {
    // Browsers ignore tabs and newlines inside URLs
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect();

    match cleaned.find([':', '/', '?', '#']) {
        Some(idx) if cleaned[idx..].starts_with(':') => {
            let scheme = cleaned[..idx].to_ascii_lowercase();
            ALLOWED_SCHEMES.contains(&scheme.as_str())
        }
        _ => true,
    }
}
