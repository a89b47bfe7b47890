//! Word tokenization and re-casing for arbitrary strings.
//!
//! This crate extracts an ordered sequence of word tokens out of free-form
//! input (`"hello world"`, `"HELLO_WORLD"`, `"helloWorld"`, ...) and joins
//! the tokens back together under a casing policy. Conversion is pure and
//! stateless: no I/O, no shared state, bounded by input length.
//!
//! # Example
//!
//! ```
//! use recase::{to_camel_case, to_kebab_case};
//!
//! assert_eq!(to_camel_case("hello world"), "helloWorld");
//! assert_eq!(to_kebab_case("HelloWorld"), "hello-world");
//! ```

mod case;
mod convert;
mod error;
mod tokenizer;

// Casing policies
pub use case::Case;
// Conversion pipeline
pub use convert::{
    Converter, to_camel_case, to_dot_case, to_kebab_case, to_pascal_case, to_snake_case,
};
pub use error::{Error, Result};
// Word extraction
pub use tokenizer::Tokenizer;
