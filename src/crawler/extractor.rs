//! Content extractor for visible page text and outbound links
//!
//! This module isolates the human-visible text of an HTML page:
//! - Only the `<body>` region is considered
//! - Non-content elements (scripts, navigation, forms, ...) are dropped with
//!   their whole subtree
//! - Comments are dropped
//! - Remaining text nodes are joined with single spaces
//!
//! Anchor `href` values are collected before anchors are dropped from the text.

use ego_tree::{NodeId, NodeRef};
use scraper::{ElementRef, Html, Node, Selector};
use std::collections::HashSet;
use thiserror::Error;
use url::Url;

/// Elements removed, with everything inside them, before text extraction
pub const FORBIDDEN_TAGS: &[&str] = &[
    "style", "script", "noscript", "footer", "aside", "img", "form", "button", "nav", "figure",
    "a", "meta",
];

/// A step of the extraction that had to be skipped
///
/// Issues never abort an extraction; the remaining steps still run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionIssue {
    #[error("document has no <body> element")]
    MissingBody,

    #[error("could not select <{tag}> elements: {message}")]
    InvalidSelector { tag: String, message: String },
}

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default)]
pub struct ExtractedPage {
    /// Visible text, whitespace-joined
    pub text: String,

    /// Raw `href` values of every anchor, in document order, unresolved
    pub links: Vec<String>,

    /// Steps that were skipped while extracting
    pub issues: Vec<ExtractionIssue>,
}

/// Extracts visible text and raw links from an HTML page
///
/// # Text Extraction Rules
///
/// **Include:**
/// - Text nodes inside `<body>` whose trimmed content is not empty
///
/// **Exclude:**
/// - Everything in `<head>`
/// - Subtrees of `style`, `script`, `noscript`, `footer`, `aside`, `img`,
///   `form`, `button`, `nav`, `figure`, `a`, `meta`
/// - Comments
///
/// # Example
///
/// ```
/// use url::Url;
/// use wordsweep::crawler::extract_page;
///
/// let html = r#"<html><body><p>Hello</p><script>var x;</script><a href="/next">Next</a></body></html>"#;
/// let page_url = Url::parse("https://www.example.com/").unwrap();
/// let page = extract_page(html, &page_url);
/// assert_eq!(page.text, "Hello");
/// assert_eq!(page.links, vec!["/next".to_string()]);
/// ```
pub fn extract_page(html: &str, page_url: &Url) -> ExtractedPage {
    let document = Html::parse_document(html);
    let mut issues = Vec::new();

    let links = extract_links(&document, &mut issues);

    let text = match find_body(&document) {
        Some(body) => visible_text(body, &mut issues),
        None => {
            issues.push(ExtractionIssue::MissingBody);
            String::new()
        }
    };

    for issue in &issues {
        tracing::warn!("Skipped extraction step on {}: {}", page_url, issue);
    }

    ExtractedPage {
        text,
        links,
        issues,
    }
}

/// Collects the `href` of every anchor in the document
fn extract_links(document: &Html, issues: &mut Vec<ExtractionIssue>) -> Vec<String> {
    let selector = match Selector::parse("a[href]") {
        Ok(selector) => selector,
        Err(e) => {
            issues.push(ExtractionIssue::InvalidSelector {
                tag: "a".to_string(),
                message: e.to_string(),
            });
            return Vec::new();
        }
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .map(str::to_string)
        .collect()
}

/// Finds the `<body>` element, if the document has one
fn find_body(document: &Html) -> Option<ElementRef<'_>> {
    let selector = Selector::parse("body").ok()?;
    document.select(&selector).next()
}

/// Joins the visible text nodes below `body`
fn visible_text(body: ElementRef<'_>, issues: &mut Vec<ExtractionIssue>) -> String {
    let mut excluded: HashSet<NodeId> = HashSet::new();

    for tag in FORBIDDEN_TAGS {
        match Selector::parse(tag) {
            Ok(selector) => excluded.extend(body.select(&selector).map(|element| element.id())),
            Err(e) => issues.push(ExtractionIssue::InvalidSelector {
                tag: tag.to_string(),
                message: e.to_string(),
            }),
        }
    }

    let mut parts: Vec<&str> = Vec::new();

    // Explicit stack: deeply nested markup must not exhaust the call stack
    let mut stack: Vec<NodeRef<'_, Node>> = body.children().rev().collect();
    while let Some(node) = stack.pop() {
        if excluded.contains(&node.id()) {
            continue;
        }

        match node.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    parts.push(trimmed);
                }
            }
            Node::Element(_) => stack.extend(node.children().rev()),
            // Comments, doctypes and processing instructions
            _ => {}
        }
    }

    parts.join(" ")
}
