//! Readable rendering of strict paths for diagnostics.
//!
//! The path is resolved against its document and walked from the target
//! back up to the document root. Elements, attributes and the declaration
//! contribute a piece of markup; the pieces are then joined root first,
//! giving something like `<SolarSystem><Planet ... diameter='4878 km'>`.
//! Text and comments only locate their parent, so a content mismatch in
//! `<Node>Hello</Node>` renders as `<Node>`.

use crate::node::{AnyNode, Attribute, Fragment};
use crate::path::StrictPath;

/// Renders the markup leading to the node `path` designates in
/// `fragment`. A path that does not resolve is rendered as is.
pub fn format_path(path: &StrictPath, fragment: &Fragment) -> String {
    let Some(chain) = path.resolve(fragment) else {
        return path.to_string();
    };
    let mut aggregator = Aggregator::default();
    for node in chain.iter().rev() {
        aggregator.visit(*node);
    }
    aggregator.finish()
}

/// Collects the pieces contributed by each node, target first.
#[derive(Default)]
struct Aggregator {
    pieces: Vec<String>,
    // attribute waiting to be placed into its owner's tag
    attribute: Option<String>,
}

impl Aggregator {
    fn visit(&mut self, node: AnyNode<'_>) {
        match node {
            AnyNode::Fragment(_) | AnyNode::Content(_) | AnyNode::Comment(_) => {}
            AnyNode::Declaration(declaration) => {
                let inner = match self.attribute.take() {
                    Some(attribute) => attribute,
                    None if declaration.attributes().is_empty() => String::new(),
                    None => " ...".to_string(),
                };
                self.pieces.push(format!("<?xml{} ?>", inner));
            }
            AnyNode::Element(element) => {
                let inner = match self.attribute.take() {
                    Some(attribute) => attribute,
                    None if element.attributes().is_empty() => String::new(),
                    None => " ...".to_string(),
                };
                self.pieces.push(format!("<{}{}>", element.name(), inner));
            }
            AnyNode::Attribute(attribute) => {
                self.attribute = Some(attribute_piece(attribute));
            }
        }
    }

    fn finish(self) -> String {
        self.pieces.into_iter().rev().collect()
    }
}

fn attribute_piece(attribute: &Attribute) -> String {
    let position = attribute.position();
    let mut piece = String::new();
    if !position.is_first() {
        piece.push_str(" ...");
    }
    piece.push_str(&format!(" {}='{}'", attribute.name(), attribute.value()));
    if !position.is_last() {
        piece.push_str(" ...");
    }
    piece
}
