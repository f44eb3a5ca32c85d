//! Example: Compare two XML documents
//!
//! This example parses an actual and an expected document and prints every
//! difference found under the given options, along with a readable location.
//!
//! Usage: cargo run --example compare <actual.xml> <expected.xml> [options]
//!
//! `options` takes flag or preset names such as `default`, `loose` or
//! `"IgnoreComments | IgnoreElementsOrder"`.

use std::env;

use xmlcmp::{Options, XmlParser};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 || args.len() > 4 {
        eprintln!("Usage: {} <actual.xml> <expected.xml> [options]", args[0]);
        std::process::exit(1);
    }

    let options: Options = match args.get(3) {
        Some(text) => text.parse()?,
        None => Options::DEFAULT,
    };

    let parser = XmlParser::new();
    eprintln!("Parsing actual: {}", args[1]);
    let actual = parser.parse_file(&args[1])?;
    eprintln!("Parsing expected: {}", args[2]);
    let expected = parser.parse_file(&args[2])?;

    eprintln!("Comparing with options: {}", options);
    let diffs = actual.diff(&expected, options);
    if diffs.is_empty() {
        println!("Documents are equivalent.");
        return Ok(());
    }

    for diff in &diffs {
        println!("{}", diff.describe(&actual, &expected));
        println!(
            "  actual at {}, expected at {}",
            diff.location(),
            diff.expected_location()
        );
    }
    eprintln!("{} difference(s) found.", diffs.len());
    std::process::exit(2);
}
