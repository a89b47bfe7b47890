//! Casing policies.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A casing policy: how word tokens are transformed and joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    /// `helloWorld`
    Camel,
    /// `HelloWorld`
    Pascal,
    /// `hello_world`
    Snake,
    /// `hello-world`
    Kebab,
    /// `hello.world`
    Dot,
}

/// Per-token transforms and joiner for one policy.
///
/// Policies differ only along these three axes, so each [`Case`] resolves
/// to a table instead of carrying its own join loop.
struct Policy {
    /// Transform for the token at index 0.
    head: fn(&str) -> String,
    /// Transform for tokens at index > 0.
    tail: fn(&str) -> String,
    /// Placed between adjacent tokens.
    joiner: &'static str,
}

const CAMEL: Policy = Policy {
    head: lowercase,
    tail: capitalize,
    joiner: "",
};

const PASCAL: Policy = Policy {
    head: capitalize,
    tail: capitalize,
    joiner: "",
};

const SNAKE: Policy = Policy {
    head: lowercase,
    tail: lowercase,
    joiner: "_",
};

const KEBAB: Policy = Policy {
    head: lowercase,
    tail: lowercase,
    joiner: "-",
};

const DOT: Policy = Policy {
    head: lowercase,
    tail: lowercase,
    joiner: ".",
};

impl Case {
    /// Every supported policy.
    pub const ALL: [Case; 5] = [Case::Camel, Case::Pascal, Case::Snake, Case::Kebab, Case::Dot];

    fn policy(&self) -> &'static Policy {
        match self {
            Case::Camel => &CAMEL,
            Case::Pascal => &PASCAL,
            Case::Snake => &SNAKE,
            Case::Kebab => &KEBAB,
            Case::Dot => &DOT,
        }
    }

    /// The character sequence placed between tokens.
    ///
    /// Empty for the contiguous policies (camel, pascal).
    pub fn joiner(&self) -> &'static str {
        self.policy().joiner
    }

    /// Join a token sequence under this policy.
    ///
    /// An empty sequence joins to an empty string. The output contains no
    /// separator characters other than [`Case::joiner`].
    pub fn join<S: AsRef<str>>(&self, tokens: &[S]) -> String {
        let policy = self.policy();
        let mut out = String::new();
        for (i, token) in tokens.iter().enumerate() {
            if i == 0 {
                out.push_str(&(policy.head)(token.as_ref()));
            } else {
                out.push_str(policy.joiner);
                out.push_str(&(policy.tail)(token.as_ref()));
            }
        }
        out
    }

    /// Returns the policy identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Case::Camel => "camel",
            Case::Pascal => "pascal",
            Case::Snake => "snake",
            Case::Kebab => "kebab",
            Case::Dot => "dot",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Case {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" | "camelcase" => Ok(Case::Camel),
            "pascal" | "pascalcase" => Ok(Case::Pascal),
            "snake" | "snake_case" => Ok(Case::Snake),
            "kebab" | "kebab-case" => Ok(Case::Kebab),
            "dot" | "dot.case" => Ok(Case::Dot),
            _ => Err(format!(
                "unknown case '{}', expected one of 'camel', 'pascal', 'snake', 'kebab', 'dot'",
                s
            )),
        }
    }
}

fn lowercase(token: &str) -> String {
    token.to_lowercase()
}

/// Uppercase the first character, lowercase the rest. A token whose first
/// character has no case (digits) keeps it verbatim.
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}
