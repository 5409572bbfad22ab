// src/tokenize.rs
//! Field splitting with an explicit delimiter set.

/// Characters that separate fields. Whitespace always separates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelimiterSet {
    extra: Vec<char>,
}

impl DelimiterSet {
    /// Splits on whitespace only.
    #[must_use]
    pub fn whitespace() -> Self {
        Self::default()
    }

    /// Splits on whitespace plus every character in `chars`.
    #[must_use]
    pub fn with_chars(chars: &str) -> Self {
        let mut extra: Vec<char> = Vec::new();
        for c in chars.chars().filter(|c| !c.is_whitespace()) {
            if !extra.contains(&c) {
                extra.push(c);
            }
        }
        Self { extra }
    }

    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        c.is_whitespace() || self.extra.contains(&c)
    }

    /// The non-whitespace delimiters, in the order given.
    #[must_use]
    pub fn extra(&self) -> &[char] {
        &self.extra
    }
}

/// Splits `text` into fields. Runs of delimiters never yield empty fields.
#[must_use]
pub fn tokenize<'a>(text: &'a str, delimiters: &DelimiterSet) -> Vec<&'a str> {
    text.split(|c: char| delimiters.contains(c))
        .filter(|field| !field.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_default() {
        let fields = tokenize("  a 5\tb\n", &DelimiterSet::whitespace());
        assert_eq!(fields, vec!["a", "5", "b"]);
    }

    #[test]
    fn test_colon_and_whitespace() {
        let delims = DelimiterSet::with_chars(":");
        let fields = tokenize("src dst\nsrc:3:dst", &delims);
        assert_eq!(fields, vec!["src", "dst", "src", "3", "dst"]);
    }

    #[test]
    fn test_repeated_delimiters_collapse() {
        let delims = DelimiterSet::with_chars(":;");
        assert_eq!(tokenize("a::;b", &delims), vec!["a", "b"]);
        assert_eq!(delims.extra(), &[':', ';']);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("", &DelimiterSet::whitespace()).is_empty());
    }
}
