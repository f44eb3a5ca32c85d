//! XML parsing and output.
//!
//! Parsing turns markup into a [`Fragment`](crate::Fragment) through
//! quick-xml's streaming reader. Output covers both printing documents back
//! to markup and formatting strict paths for diagnostics.

mod formatter;
mod parser;
mod printer;

pub use formatter::format_path;
pub use parser::{parse, parse_file, parse_with, ParserOptions, XmlParser};
pub use printer::{print_to_string, print_to_string_pretty, XmlPrinter, XmlPrinterOptions};

pub(crate) use printer::{element_to_string, fragment_to_string};
