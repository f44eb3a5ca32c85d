//! XML printer that outputs documents as markup.

use std::io::Write;

use crate::node::{Declaration, Element, Fragment, Node};

/// Options for XML printing.
#[derive(Debug, Clone)]
pub struct XmlPrinterOptions {
    /// Whether to pretty-print with indentation.
    pub pretty_print: bool,
    /// Whether to print the `<?xml ...?>` declaration when the document has
    /// one.
    pub declaration: bool,
}

impl Default for XmlPrinterOptions {
    fn default() -> Self {
        XmlPrinterOptions {
            pretty_print: false,
            declaration: true,
        }
    }
}

/// XML printer that outputs node trees.
pub struct XmlPrinter<W: Write> {
    writer: W,
    options: XmlPrinterOptions,
}

impl<W: Write> XmlPrinter<W> {
    /// Creates a new XML printer.
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, XmlPrinterOptions::default())
    }

    /// Creates a new XML printer with the given options.
    pub fn with_options(writer: W, options: XmlPrinterOptions) -> Self {
        XmlPrinter { writer, options }
    }

    /// Prints a whole document.
    pub fn print(&mut self, fragment: &Fragment) -> std::io::Result<()> {
        let declaration = fragment.declaration();
        if self.options.declaration && !declaration.attributes().is_empty() {
            self.print_declaration(declaration)?;
            self.newline()?;
        }
        self.print_element(fragment.root())?;
        self.writer.flush()
    }

    /// Prints one element and its subtree.
    pub fn print_element(&mut self, element: &Element) -> std::io::Result<()> {
        self.element(element, 0)
    }

    fn print_declaration(&mut self, declaration: &Declaration) -> std::io::Result<()> {
        write!(self.writer, "<?xml")?;
        for attribute in declaration.attributes() {
            write!(
                self.writer,
                " {}=\"{}\"",
                attribute.name(),
                to_entities(attribute.value())
            )?;
        }
        write!(self.writer, "?>")
    }

    fn element(&mut self, element: &Element, indent: usize) -> std::io::Result<()> {
        write!(self.writer, "<{}", element.name())?;
        for attribute in element.attributes() {
            write!(
                self.writer,
                " {}=\"{}\"",
                attribute.name(),
                to_entities(attribute.value())
            )?;
        }

        if element.is_empty() {
            return write!(self.writer, "/>");
        }
        write!(self.writer, ">")?;

        // text-only elements stay on one line even when pretty printing
        let inline = !self.options.pretty_print || element.text().is_some();
        for child in element.children() {
            if !inline {
                self.newline()?;
                self.indent(indent + 1)?;
            }
            match child {
                Node::Element(e) => self.element(e, indent + 1)?,
                Node::Content(c) => write!(self.writer, "{}", to_entities(c.value()))?,
                Node::Comment(c) => write!(self.writer, "<!--{}-->", c.value())?,
            }
        }
        if !inline {
            self.newline()?;
            self.indent(indent)?;
        }
        write!(self.writer, "</{}>", element.name())
    }

    fn newline(&mut self) -> std::io::Result<()> {
        if self.options.pretty_print {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn indent(&mut self, level: usize) -> std::io::Result<()> {
        write!(self.writer, "{}", "  ".repeat(level))
    }
}

/// Converts special characters to XML entities.
fn to_entities(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result
}

/// Prints a document to a string.
pub fn print_to_string(fragment: &Fragment) -> std::io::Result<String> {
    print_with(fragment, XmlPrinterOptions::default())
}

/// Prints a document to a string with pretty printing.
pub fn print_to_string_pretty(fragment: &Fragment) -> std::io::Result<String> {
    let options = XmlPrinterOptions {
        pretty_print: true,
        ..Default::default()
    };
    print_with(fragment, options)
}

fn print_with(fragment: &Fragment, options: XmlPrinterOptions) -> std::io::Result<String> {
    let mut output = Vec::new();
    XmlPrinter::with_options(&mut output, options).print(fragment)?;
    Ok(String::from_utf8_lossy(&output).into_owned())
}

/// Compact markup of one element. Writing into memory cannot fail.
pub(crate) fn element_to_string(element: &Element) -> String {
    let mut output = Vec::new();
    let written = XmlPrinter::new(&mut output).print_element(element);
    debug_assert!(written.is_ok());
    String::from_utf8_lossy(&output).into_owned()
}

/// Compact markup of a document. Writing into memory cannot fail.
pub(crate) fn fragment_to_string(fragment: &Fragment) -> String {
    print_to_string(fragment).unwrap_or_default()
}
