//! Word extraction from free-form input.

/// Separators every tokenizer recognizes, on top of whitespace.
const DEFAULT_SEPARATORS: [char; 2] = ['-', '_'];

/// Splits input into an ordered sequence of word tokens.
///
/// A token is a maximal run of alphanumeric characters. Boundaries come
/// from separator characters (whitespace, `-`, `_`, plus any configured
/// extras), from an uppercase letter directly following a lowercase letter
/// or a digit (embedded capitals, as in `camelCase`), and from the ends of
/// the input. Characters that are neither alphanumeric nor separators are
/// dropped without starting a new token.
///
/// Tokenization is a single character-classification scan; no pattern
/// engine is involved.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    extra: Vec<char>,
}

impl Tokenizer {
    /// Create a tokenizer that splits on whitespace, `-` and `_`.
    pub fn new() -> Self {
        Self { extra: Vec::new() }
    }

    /// Recognize `ch` as an additional separator.
    ///
    /// The default separators are always retained.
    pub fn separator(mut self, ch: char) -> Self {
        if !self.is_separator(ch) {
            self.extra.push(ch);
        }
        self
    }

    fn is_separator(&self, ch: char) -> bool {
        ch.is_whitespace() || DEFAULT_SEPARATORS.contains(&ch) || self.extra.contains(&ch)
    }

    /// Tokenize `input`, discarding empty tokens.
    ///
    /// Returns an empty vector when the input holds no alphanumeric
    /// content at all. That is not an error; the caller decides what an
    /// empty word sequence means.
    pub fn tokenize(&self, input: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut prev: Option<char> = None;

        for ch in input.chars() {
            if self.is_separator(ch) {
                flush(&mut tokens, &mut current);
                prev = None;
                continue;
            }
            // "fooBar" and "123Apple" split before the uppercase letter.
            if ch.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_numeric()) {
                flush(&mut tokens, &mut current);
            }
            if ch.is_alphanumeric() {
                current.push(ch);
            }
            prev = Some(ch);
        }
        flush(&mut tokens, &mut current);

        tokens
    }
}

fn flush(tokens: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        tokens.push(std::mem::take(current));
    }
}
