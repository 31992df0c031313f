//! CSS values and declaration parsing: value model, logos tokenizer,
//! recursive-descent parser.

pub mod parser;
pub mod tokenizer;
pub mod value;

pub use parser::{parse_declarations, parse_declarations_lenient, parse_value, ParseError};
pub use value::{CssValue, Declaration, Rgba};
