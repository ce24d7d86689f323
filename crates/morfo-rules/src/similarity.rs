// MAP-style similarity groups.
//
// A grouping string mixes bare characters with parenthesized units:
// bare characters and one-character groups are mutually similar single
// characters, longer groups are similar as whole substrings
// (e.g. "aàá(ss)" for suggestion-time swaps).

/// A parsed similarity group: the flat set of similar single characters
/// and the multi-character strings similar as units. Read-only after
/// parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimilarityGroup {
    pub chars: String,
    pub strings: Vec<String>,
}

impl SimilarityGroup {
    /// Decompose a grouping-syntax string. An unterminated `(` ends the
    /// parse quietly; what was gathered so far stands.
    pub fn new(source: &str) -> Self {
        let mut chars = String::new();
        let mut strings = Vec::new();
        let mut rest = source;
        loop {
            match rest.find('(') {
                None => {
                    chars.push_str(rest);
                    break;
                }
                Some(open) => {
                    chars.push_str(&rest[..open]);
                    rest = &rest[open + 1..];
                    let Some(close) = rest.find(')') else {
                        break;
                    };
                    let group = &rest[..close];
                    let mut group_chars = group.chars();
                    match (group_chars.next(), group_chars.next()) {
                        (Some(c), None) => chars.push(c),
                        (Some(_), Some(_)) => strings.push(group.to_string()),
                        (None, _) => {} // "()" contributes nothing
                    }
                    rest = &rest[close + 1..];
                }
            }
        }
        Self { chars, strings }
    }
}

impl From<&str> for SimilarityGroup {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}
