//! Conversion pipeline: tokenize, then join under a policy.

use crate::{
    case::Case,
    error::{Error, Result},
    tokenizer::Tokenizer,
};

/// Configured conversion of free-form input into one casing policy.
///
/// The free functions in this module cover the common paths; the builder
/// exists for deployments that need extra separators, strict empty-input
/// handling, or untyped byte input.
///
/// # Example
///
/// ```
/// use recase::{Case, Converter};
///
/// let converter = Converter::new(Case::Kebab).separator('/');
/// assert_eq!(converter.convert("api/user profile")?, "api-user-profile");
/// # Ok::<(), recase::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Converter {
    case: Case,
    tokenizer: Tokenizer,
    strict: bool,
}

impl Converter {
    /// Create a lenient converter for `case` with the default separators.
    ///
    /// The policy's own joiner is always recognized as a separator, which
    /// keeps conversion idempotent: re-converting dot.case output splits
    /// on the dots it produced.
    pub fn new(case: Case) -> Self {
        let mut tokenizer = Tokenizer::new();
        for ch in case.joiner().chars() {
            tokenizer = tokenizer.separator(ch);
        }
        Self {
            case,
            tokenizer,
            strict: false,
        }
    }

    /// Recognize `ch` as an additional word separator.
    ///
    /// Whitespace, `-` and `_` are always separators.
    pub fn separator(mut self, ch: char) -> Self {
        self.tokenizer = self.tokenizer.separator(ch);
        self
    }

    /// Reject empty or whitespace-only input instead of returning `""`.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Convert `input` to the configured casing.
    ///
    /// Fails with [`Error::EmptyInput`] only when strict mode is on and
    /// the input has no content. An input that has content but no
    /// alphanumeric characters still converts to an empty string.
    pub fn convert(&self, input: &str) -> Result<String> {
        if self.strict && input.trim().is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(self.run(input))
    }

    /// Convert untyped bytes, validating that they are UTF-8 text first.
    ///
    /// Fails with [`Error::NotText`] when they are not. This is the entry
    /// point for callers holding data that merely claims to be text.
    pub fn convert_bytes(&self, input: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(input).map_err(|source| Error::NotText { source })?;
        self.convert(text)
    }

    fn run(&self, input: &str) -> String {
        self.case.join(&self.tokenizer.tokenize(input))
    }
}

/// Convert a string to camelCase (e.g., "hello_world" -> "helloWorld")
pub fn to_camel_case(s: &str) -> String {
    Converter::new(Case::Camel).run(s)
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    Converter::new(Case::Pascal).run(s)
}

/// Convert a string to snake_case (e.g., "HelloWorld" -> "hello_world")
pub fn to_snake_case(s: &str) -> String {
    Converter::new(Case::Snake).run(s)
}

/// Convert a string to kebab-case (e.g., "HelloWorld" -> "hello-world")
pub fn to_kebab_case(s: &str) -> String {
    Converter::new(Case::Kebab).run(s)
}

/// Convert a string to dot.case (e.g., "HelloWorld" -> "hello.world")
pub fn to_dot_case(s: &str) -> String {
    Converter::new(Case::Dot).run(s)
}
