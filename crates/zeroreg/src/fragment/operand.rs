//! Operands accepted by combinators.

use super::Fragment;

/// Either a typed [`Fragment`] or plain text.
///
/// Plain text is escaped into a safe literal the moment it reaches a
/// combinator, so it always matches itself exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operand {
    /// An already-built fragment, used as-is.
    Fragment(Fragment),
    /// Plain text, escaped before use.
    Text(String),
}

impl Operand {
    /// Normalize into a fragment.
    #[must_use]
    pub fn into_fragment(self) -> Fragment {
        match self {
            Self::Fragment(fragment) => fragment,
            Self::Text(text) => Fragment::literal(&text),
        }
    }
}

impl From<Fragment> for Operand {
    fn from(fragment: Fragment) -> Self {
        Self::Fragment(fragment)
    }
}

impl From<&Fragment> for Operand {
    fn from(fragment: &Fragment) -> Self {
        Self::Fragment(fragment.clone())
    }
}

impl From<&str> for Operand {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Operand {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for Operand {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<char> for Operand {
    fn from(c: char) -> Self {
        Self::Text(c.to_string())
    }
}
