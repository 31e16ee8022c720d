use scraper::{ElementRef, Html};

use crate::error::{MalformedReason, Result, TermFreqError};

/// One node of a parsed page: an element with ordered children, or a raw text fragment.
#[derive(Debug, PartialEq, Eq)]
pub enum Node {
    Element { tag: String, children: Vec<Node> },
    Text(String),
}

impl Node {
    pub fn element(tag: &str, children: Vec<Node>) -> Self {
        Node::Element {
            tag: tag.to_string(),
            children,
        }
    }

    pub fn text(s: &str) -> Self {
        Node::Text(s.to_string())
    }
}

// Page depth is attacker-controlled; tear the tree down with a heap stack
// instead of the default recursive drop.
impl Drop for Node {
    fn drop(&mut self) {
        let Node::Element { children, .. } = self else {
            return;
        };
        let mut pending = std::mem::take(children);
        while let Some(mut node) = pending.pop() {
            if let Node::Element { children, .. } = &mut node {
                pending.append(children);
            }
        }
    }
}

/// Immutable parsed page. Comments, doctypes and processing instructions are dropped.
#[derive(Debug, PartialEq, Eq)]
pub struct Document {
    pub root: Node,
}

impl Document {
    pub fn new(root: Node) -> Self {
        Document { root }
    }

    /// Parse markup with html5ever's error-tolerant tree builder.
    ///
    /// Blank input is rejected outright; anything else builds some tree and is
    /// judged later by the extractor (e.g. for a missing title).
    pub fn parse(markup: &str) -> Result<Self> {
        if markup.trim().is_empty() {
            return Err(TermFreqError::malformed(MalformedReason::Empty));
        }
        let html = Html::parse_document(markup);
        Ok(Document::new(convert(html.root_element())))
    }
}

/// An element under construction and the source children still to visit.
struct Frame<I> {
    tag: String,
    children: Vec<Node>,
    pending: I,
}

/// Copy the scraper tree into `Node`s without recursing on the call stack.
fn convert(root: ElementRef<'_>) -> Node {
    let mut open = Vec::new();
    let mut current = Frame {
        tag: root.value().name().to_string(),
        children: Vec::new(),
        pending: root.children(),
    };

    loop {
        match current.pending.next() {
            Some(child) => match child.value() {
                scraper::Node::Text(text) => current.children.push(Node::text(text)),
                scraper::Node::Element(element) => {
                    let frame = Frame {
                        tag: element.name().to_string(),
                        children: Vec::new(),
                        pending: child.children(),
                    };
                    open.push(std::mem::replace(&mut current, frame));
                }
                _ => {}
            },
            None => {
                let node = Node::Element {
                    tag: current.tag,
                    children: current.children,
                };
                match open.pop() {
                    Some(parent) => {
                        current = parent;
                        current.children.push(node);
                    }
                    None => return node,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(node: &'a Node, tag: &str) -> Option<&'a Node> {
        match node {
            Node::Element { tag: t, .. } if t == tag => Some(node),
            Node::Element { children, .. } => children.iter().find_map(|c| find(c, tag)),
            Node::Text(_) => None,
        }
    }

    #[test]
    fn blank_input_is_malformed() {
        for input in ["", "   \n\t "] {
            assert!(matches!(
                Document::parse(input),
                Err(TermFreqError::MalformedDocument { reason: MalformedReason::Empty })
            ));
        }
    }

    #[test]
    fn parses_into_tagged_tree() {
        let doc = Document::parse("<html><head><title>hey</title></head><body><div>hi</div></body></html>")
            .unwrap();
        assert!(matches!(&doc.root, Node::Element { tag, .. } if tag == "html"));
        assert_eq!(
            find(&doc.root, "title"),
            Some(&Node::element("title", vec![Node::text("hey")]))
        );
        assert_eq!(
            find(&doc.root, "div"),
            Some(&Node::element("div", vec![Node::text("hi")]))
        );
    }

    #[test]
    fn entities_are_decoded() {
        let doc = Document::parse("<title>t</title><div>hello world&#33;</div>").unwrap();
        assert_eq!(
            find(&doc.root, "div"),
            Some(&Node::element("div", vec![Node::text("hello world!")]))
        );
    }

    #[test]
    fn deep_nesting_builds_and_drops() {
        std::thread::Builder::new()
            .stack_size(8 << 20)
            .spawn(walk_deep_document)
            .unwrap()
            .join()
            .unwrap();
    }

    fn walk_deep_document() {
        let depth = 50_000;
        let html = format!("<title>t</title>{}word", "<div>".repeat(depth));
        let doc = Document::parse(&html).unwrap();

        let mut node = &doc.root;
        let mut divs = 0;
        loop {
            let Node::Element { tag, children } = node else { break };
            if tag == "div" {
                divs += 1;
            }
            match children.last() {
                Some(last) => node = last,
                None => break,
            }
        }
        assert_eq!(divs, depth);
        assert_eq!(node, &Node::text("word"));
        drop(doc);
    }

    #[test]
    fn comments_are_dropped() {
        let doc = Document::parse("<title>t</title><div>a<!-- skip -->b</div>").unwrap();
        assert_eq!(
            find(&doc.root, "div"),
            Some(&Node::element("div", vec![Node::text("a"), Node::text("b")]))
        );
    }
}
