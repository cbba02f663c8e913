//! Match results.

use std::collections::BTreeMap;

/// Result of a successful match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// Start position of the match in the input, in bytes.
    pub start: usize,
    /// End position of the match in the input, in bytes.
    pub end: usize,
    /// The matched text.
    pub text: String,
    /// Capture groups 1..n; `None` for groups that did not participate.
    pub captures: Vec<Option<String>>,
    /// Named capture groups that participated in the match.
    pub named: BTreeMap<String, String>,
}

impl PatternMatch {
    /// Assemble a match from engine groups (group 0 first) and the matching
    /// group names.
    pub(crate) fn from_groups<'h, 'n, G, N>(groups: G, names: N) -> Self
    where
        G: IntoIterator<Item = Option<(usize, usize, &'h str)>>,
        N: IntoIterator<Item = Option<&'n str>>,
    {
        let mut groups = groups.into_iter().zip(names);
        let (start, end, text) = groups
            .next()
            .and_then(|(whole, _)| whole)
            .map_or((0, 0, String::new()), |(start, end, text)| {
                (start, end, text.to_owned())
            });

        let mut captures = Vec::new();
        let mut named = BTreeMap::new();
        for (group, name) in groups {
            let value = group.map(|(_, _, text)| text.to_owned());
            if let (Some(name), Some(value)) = (name, &value) {
                named.insert(name.to_owned(), value.clone());
            }
            captures.push(value);
        }

        Self {
            start,
            end,
            text,
            captures,
            named,
        }
    }

    /// The matched text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Group `index`, where 0 is the whole match.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        match index {
            0 => Some(&self.text),
            n => self.captures.get(n - 1)?.as_deref(),
        }
    }

    /// The text captured by the group called `name`.
    #[must_use]
    pub fn name(&self, name: &str) -> Option<&str> {
        self.named.get(name).map(String::as_str)
    }

    /// Get the length of the match in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the match is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
