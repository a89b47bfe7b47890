//! Error types for the conversion entry points.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for recase operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// The input bytes do not decode as UTF-8 text.
    #[error("input is not text: invalid UTF-8 at byte {}", .source.valid_up_to())]
    #[diagnostic(
        code(recase::not_text),
        help("re-encode the input as UTF-8 before converting")
    )]
    NotText {
        #[source]
        source: std::str::Utf8Error,
    },

    /// A strict converter rejected an input with no content.
    #[error("input is empty or whitespace-only")]
    #[diagnostic(
        code(recase::empty_input),
        help("disable strict mode to map empty input to an empty string instead")
    )]
    EmptyInput,
}
