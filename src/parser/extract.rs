use crate::config::{CONTAINER_TAG, TITLE_TAG};
use crate::error::{MalformedReason, Result, TermFreqError};

use super::document::{Document, Node};

/// Title plus the raw text lines found in content containers, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedCorpus {
    pub title: Option<String>,
    pub lines: Vec<String>,
}

/// Pull the title and container text out of a parsed page.
///
/// Only text that is a *direct* child of a container is taken. Text under any
/// other tag is skipped, even inside a container, but containers nested
/// under such tags still contribute their own direct text. A container's own
/// text comes before the text of containers nested in it.
pub fn extract(document: &Document) -> Result<ExtractedCorpus> {
    let title = find_title(&document.root)
        .ok_or_else(|| TermFreqError::malformed(MalformedReason::NoTitle))?;

    let mut lines = Vec::new();
    collect_lines(&document.root, &mut lines);

    Ok(ExtractedCorpus { title, lines })
}

/// First `title` element in document order.
///
/// `None` when there is no title element; `Some(None)` when it holds no text.
/// An empty title is "no title text" rather than an empty string, and the
/// report renders both the same way: as a blank first line.
fn find_title(root: &Node) -> Option<Option<String>> {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        let Node::Element { tag, children } = node else {
            continue;
        };
        if tag == TITLE_TAG {
            let text: String = children
                .iter()
                .filter_map(|c| match c {
                    Node::Text(t) => Some(t.as_str()),
                    Node::Element { .. } => None,
                })
                .collect();
            return Some((!text.is_empty()).then_some(text));
        }
        stack.extend(children.iter().rev());
    }
    None
}

/// Pre-order walk with a heap stack; page depth is unbounded.
fn collect_lines(root: &Node, lines: &mut Vec<String>) {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        let Node::Element { tag, children } = node else {
            continue;
        };

        if tag == CONTAINER_TAG {
            for child in children {
                if let Node::Text(text) = child {
                    push_lines(text, lines);
                }
            }
        }

        stack.extend(children.iter().rev());
    }
}

fn push_lines(text: &str, lines: &mut Vec<String>) {
    lines.extend(
        text.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string),
    );
}
