//! Index-based paths.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::node::{AnyNode, Fragment};

/// One hop of a [`StrictPath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrictStep {
    /// The child node at this index. From the document root, index 0 is the
    /// document element.
    Element(usize),
    /// The attribute at this index of an element or of the declaration.
    Attribute(usize),
    /// The declaration, reachable only from the document root.
    Declaration,
}

/// A path resolving to exactly one node of one document.
///
/// Rendered as `/0/3:1` (child 3 of the document element, then its second
/// attribute) or `/?xml:0`. The empty path is the document itself and is
/// rendered as `/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StrictPath {
    steps: Vec<StrictStep>,
}

impl StrictPath {
    /// The document itself.
    pub fn root() -> Self {
        StrictPath::default()
    }

    /// Extends the path to the child node at `index`.
    pub fn element(&self, index: usize) -> Self {
        self.extended(StrictStep::Element(index))
    }

    /// Extends the path to the attribute at `index`.
    pub fn attribute(&self, index: usize) -> Self {
        self.extended(StrictStep::Attribute(index))
    }

    /// Extends the path to the declaration.
    pub fn declaration(&self) -> Self {
        self.extended(StrictStep::Declaration)
    }

    pub fn steps(&self) -> &[StrictStep] {
        &self.steps
    }

    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    /// The final hop, `None` for the root.
    pub fn last(&self) -> Option<StrictStep> {
        self.steps.last().copied()
    }

    /// The path without its final hop, `None` for the root.
    pub fn parent(&self) -> Option<StrictPath> {
        let (_, init) = self.steps.split_last()?;
        Some(StrictPath {
            steps: init.to_vec(),
        })
    }

    /// Resolves the path against `fragment`. Returns `None` when the path
    /// does not exist in that document.
    pub fn find<'a>(&self, fragment: &'a Fragment) -> Option<AnyNode<'a>> {
        self.steps
            .iter()
            .try_fold(AnyNode::Fragment(fragment), |node, step| node.step(*step))
    }

    /// Resolves only the final hop, starting from `parent`, which must be the
    /// node the rest of the path leads to. The root path resolves to
    /// `parent` itself.
    pub fn find_in_parent<'a>(&self, parent: AnyNode<'a>) -> Option<AnyNode<'a>> {
        match self.last() {
            Some(step) => parent.step(step),
            None => Some(parent),
        }
    }

    /// Every node along the path, from the document down to the target.
    pub fn resolve<'a>(&self, fragment: &'a Fragment) -> Option<Vec<AnyNode<'a>>> {
        let mut chain = Vec::with_capacity(self.steps.len() + 1);
        let mut node = AnyNode::Fragment(fragment);
        chain.push(node);
        for step in &self.steps {
            node = node.step(*step)?;
            chain.push(node);
        }
        Some(chain)
    }

    /// Renders the markup surrounding the target, see
    /// [`format_path`](crate::xml::format_path).
    pub fn format(&self, fragment: &Fragment) -> String {
        crate::xml::format_path(self, fragment)
    }

    fn extended(&self, step: StrictStep) -> Self {
        let mut steps = Vec::with_capacity(self.steps.len() + 1);
        steps.extend_from_slice(&self.steps);
        steps.push(step);
        StrictPath { steps }
    }
}

impl<'a> AnyNode<'a> {
    /// Follows one strict hop from this node.
    pub fn step(self, step: StrictStep) -> Option<AnyNode<'a>> {
        match (self, step) {
            (AnyNode::Fragment(f), StrictStep::Element(0)) => Some(AnyNode::Element(f.root())),
            (AnyNode::Fragment(f), StrictStep::Declaration) => {
                Some(AnyNode::Declaration(f.declaration()))
            }
            (AnyNode::Element(e), StrictStep::Element(i)) => e.child(i).map(AnyNode::from),
            (AnyNode::Element(e), StrictStep::Attribute(i)) => {
                e.attributes().get(i).map(AnyNode::Attribute)
            }
            (AnyNode::Declaration(d), StrictStep::Attribute(i)) => {
                d.attributes().get(i).map(AnyNode::Attribute)
            }
            _ => None,
        }
    }
}

impl fmt::Display for StrictPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return f.write_str("/");
        }
        for step in &self.steps {
            match step {
                StrictStep::Element(i) => write!(f, "/{}", i)?,
                StrictStep::Attribute(i) => write!(f, ":{}", i)?,
                StrictStep::Declaration => f.write_str("/?xml")?,
            }
        }
        Ok(())
    }
}

impl FromStr for StrictPath {
    type Err = Error;

    /// Parses the rendering produced by `Display`.
    fn from_str(s: &str) -> Result<Self> {
        if s == "/" {
            return Ok(StrictPath::root());
        }
        let invalid = || Error::invalid(format!("invalid strict path '{}'", s));
        let rest = s.strip_prefix('/').ok_or_else(invalid)?;

        let mut path = StrictPath::root();
        for (n, segment) in rest.split('/').enumerate() {
            let (head, attribute) = match segment.split_once(':') {
                Some((head, attribute)) => (head, Some(attribute)),
                None => (segment, None),
            };
            path = if head == "?xml" && n == 0 {
                path.declaration()
            } else {
                path.element(head.parse().map_err(|_| invalid())?)
            };
            if let Some(attribute) = attribute {
                path = path.attribute(attribute.parse().map_err(|_| invalid())?);
            }
        }
        // an attribute can only end a path
        let misplaced = path
            .steps
            .iter()
            .rev()
            .skip(1)
            .any(|step| matches!(step, StrictStep::Attribute(_)));
        if misplaced {
            return Err(invalid());
        }
        Ok(path)
    }
}
