//! Parser building documents from quick-xml events.
//!
//! Elements are assembled bottom-up: each open element keeps an
//! [`ElementBuilder`] on a stack, collecting children until its end tag,
//! at which point it is built and handed to its parent.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::escape::{resolve_xml_entity, unescape};
use quick_xml::events::{BytesDecl, BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

use crate::error::{Error, Result};
use crate::node::{
    Attribute, AttributeCollection, Declaration, Element, ElementBuilder, Fragment, Position,
};

/// Options for parsing.
#[derive(Debug, Clone, Default)]
pub struct ParserOptions {
    /// Whether comments are left out of the tree. Text on both sides of a
    /// dropped comment becomes a single text node.
    pub drop_comments: bool,
    /// Whether text made only of whitespace is kept as a text node.
    pub keep_whitespace_text: bool,
}

/// Parser producing [`Fragment`]s.
#[derive(Debug, Clone, Default)]
pub struct XmlParser {
    options: ParserOptions,
}

/// Parse state for one document.
#[derive(Default)]
struct TreeState {
    declaration: Option<Declaration>,
    stack: Vec<ElementBuilder>,
    root: Option<Element>,
    text: String,
    elements: usize,
}

impl XmlParser {
    /// Creates a parser with default options.
    pub fn new() -> Self {
        XmlParser::default()
    }

    /// Creates a parser with the given options.
    pub fn with_options(options: ParserOptions) -> Self {
        XmlParser { options }
    }

    /// Parses a document from a string.
    pub fn parse_str(&self, xml: &str) -> Result<Fragment> {
        let mut reader = Reader::from_str(xml);
        self.configure(&mut reader);
        self.parse_reader(&mut reader)
    }

    /// Parses a document from a file.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Fragment> {
        let file = File::open(path)?;
        let mut reader = Reader::from_reader(BufReader::new(file));
        self.configure(&mut reader);
        self.parse_reader(&mut reader)
    }

    fn configure<R>(&self, reader: &mut Reader<R>) {
        // whitespace is judged per text run, after references are resolved
        reader.config_mut().trim_text_start = false;
        reader.config_mut().trim_text_end = false;
    }

    fn parse_reader<R: BufRead>(&self, reader: &mut Reader<R>) -> Result<Fragment> {
        let mut state = TreeState::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    self.flush_text(&mut state)?;
                    let builder = self.start_element(e, reader)?;
                    state.stack.push(builder);
                }
                Ok(Event::End(_)) => {
                    self.flush_text(&mut state)?;
                    let builder = state
                        .stack
                        .pop()
                        .ok_or_else(|| Error::malformed("end tag without start tag"))?;
                    Self::attach(&mut state, builder.build()?)?;
                }
                Ok(Event::Empty(ref e)) => {
                    self.flush_text(&mut state)?;
                    let builder = self.start_element(e, reader)?;
                    Self::attach(&mut state, builder.build()?)?;
                }
                Ok(Event::Text(e)) => {
                    let raw = std::str::from_utf8(e.as_ref()).map_err(Error::malformed)?;
                    let text = unescape(raw).map_err(Error::malformed)?;
                    state.text.push_str(&text);
                }
                Ok(Event::CData(e)) => {
                    let text = std::str::from_utf8(e.as_ref()).map_err(Error::malformed)?;
                    state.text.push_str(text);
                }
                Ok(Event::GeneralRef(e)) => {
                    let raw = e.decode().map_err(Error::malformed)?;
                    state.text.push_str(&resolve_reference(&raw)?);
                }
                Ok(Event::Comment(e)) => {
                    self.flush_text(&mut state)?;
                    if !self.options.drop_comments {
                        let text = std::str::from_utf8(e.as_ref()).map_err(Error::malformed)?;
                        // comments outside the document element have no owner
                        if let Some(parent) = state.stack.last_mut() {
                            parent.push_comment(text);
                        }
                    }
                }
                Ok(Event::Decl(ref e)) => {
                    state.declaration = Some(declaration(e)?);
                }
                Ok(Event::PI(_)) | Ok(Event::DocType(_)) => {}
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::malformed(format!(
                        "at position {}: {}",
                        reader.error_position(),
                        e
                    )))
                }
            }
            buf.clear();
        }

        self.flush_text(&mut state)?;
        if let Some(open) = state.stack.last() {
            return Err(Error::malformed(format!(
                "element <{}> is never closed",
                open.name()
            )));
        }
        let root = state.root.ok_or(Error::MissingRootElement)?;
        debug!(root = root.name(), elements = state.elements, "parsed document");
        Ok(Fragment::new(state.declaration.unwrap_or_default(), root))
    }

    /// Reads the name and attributes of a start or empty tag.
    fn start_element<R>(&self, e: &BytesStart, reader: &Reader<R>) -> Result<ElementBuilder> {
        let qname = e.name();
        let name = reader
            .decoder()
            .decode(qname.as_ref())
            .map_err(Error::malformed)?;
        let mut builder = ElementBuilder::new(name);

        for attr in e.attributes() {
            let attr = attr.map_err(Error::malformed)?;
            let key = reader
                .decoder()
                .decode(attr.key.as_ref())
                .map_err(Error::malformed)?;
            let value = attr.unescape_value().map_err(Error::malformed)?;
            builder.push_attribute(key, value);
        }
        Ok(builder)
    }

    /// Moves pending text into the open element, unless it is whitespace
    /// that should be dropped.
    fn flush_text(&self, state: &mut TreeState) -> Result<()> {
        if state.text.is_empty() {
            return Ok(());
        }
        let text = std::mem::take(&mut state.text);
        let blank = text.trim().is_empty();
        match state.stack.last_mut() {
            Some(parent) if !blank || self.options.keep_whitespace_text => {
                parent.push_text(text);
                Ok(())
            }
            Some(_) => Ok(()),
            None if blank => Ok(()),
            None => Err(Error::malformed(format!(
                "text '{}' outside the document element",
                text.trim()
            ))),
        }
    }

    fn attach(state: &mut TreeState, element: Element) -> Result<()> {
        state.elements += 1;
        match state.stack.last_mut() {
            Some(parent) => parent.push_element(element),
            None if state.root.is_none() => state.root = Some(element),
            None => {
                return Err(Error::malformed(format!(
                    "second document element <{}>",
                    element.name()
                )))
            }
        }
        Ok(())
    }
}

/// Collects the pseudo-attributes of `<?xml ...?>` in their usual order.
fn declaration(e: &BytesDecl) -> Result<Declaration> {
    let mut attributes = Vec::new();
    let version = e.version().map_err(Error::malformed)?;
    attributes.push(("version", version));
    if let Some(encoding) = e.encoding() {
        attributes.push(("encoding", encoding.map_err(Error::malformed)?));
    }
    if let Some(standalone) = e.standalone() {
        attributes.push(("standalone", standalone.map_err(Error::malformed)?));
    }

    let attributes = attributes
        .into_iter()
        .map(|(name, value)| {
            let value = std::str::from_utf8(&value).map_err(Error::malformed)?;
            Attribute::new(Position::SOLE, name, value)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Declaration::new(AttributeCollection::new(attributes)))
}

/// Resolves `&name;` or `&#NN;` given the text between `&` and `;`.
/// Unknown named entities are kept verbatim.
fn resolve_reference(raw: &str) -> Result<String> {
    if let Some(resolved) = resolve_xml_entity(raw) {
        return Ok(resolved.to_string());
    }
    let Some(number) = raw.strip_prefix('#') else {
        return Ok(format!("&{};", raw));
    };
    let code = match number.strip_prefix('x').or_else(|| number.strip_prefix('X')) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => number.parse::<u32>(),
    }
    .map_err(|_| Error::malformed(format!("invalid character reference '&{};'", raw)))?;
    char::from_u32(code)
        .map(String::from)
        .ok_or_else(|| Error::malformed(format!("invalid code point {} in '&{};'", code, raw)))
}

/// Parses a document with default options.
pub fn parse(xml: &str) -> Result<Fragment> {
    XmlParser::new().parse_str(xml)
}

/// Parses a document with the given options.
pub fn parse_with(xml: &str, options: &ParserOptions) -> Result<Fragment> {
    XmlParser::with_options(options.clone()).parse_str(xml)
}

/// Parses a document from a file with default options.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Fragment> {
    XmlParser::new().parse_file(path)
}
