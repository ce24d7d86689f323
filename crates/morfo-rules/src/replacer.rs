// Longest-match substring rewriter.
//
// Backs the ICONV/OCONV conversion passes: a single left-to-right sweep
// that, at every position, splices in the replacement of the longest
// registered pattern prefixing the remaining text. The pattern table is
// sorted once at load time so the longest-prefix search is a repeated
// binary-search narrowing instead of a scan.

use std::cmp::Ordering;

/// Compare `pat` against the front of `text`: `Equal` means `pat` is a
/// prefix of `text` (or equals it), otherwise the byte ordering of the
/// first difference, with a longer-than-text pattern ordering greater.
fn cmp_prefix_of(pat: &str, text: &str) -> Ordering {
    let n = pat.len().min(text.len());
    pat.as_bytes().cmp(&text.as_bytes()[..n])
}

/// Sorted, duplicate-key-free (pattern, replacement) pairs. Patterns are
/// never empty; among duplicate patterns the first loaded wins.
#[derive(Debug, Clone, Default)]
pub struct SubstrReplacer {
    table: Vec<(String, String)>,
}

impl SubstrReplacer {
    pub fn new(mut table: Vec<(String, String)>) -> Self {
        table.retain(|(pat, _)| !pat.is_empty());
        table.sort_by(|a, b| a.0.cmp(&b.0));
        table.dedup_by(|later, earlier| later.0 == earlier.0);
        Self { table }
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// The longest registered pattern that prefixes `text`, if any.
    ///
    /// Every pattern that prefixes `text` compares `Equal` under the
    /// prefix ordering, and they all sort below longer refinements of
    /// themselves, so repeatedly taking the upper bound and stepping
    /// past each hit converges on the longest match.
    fn find_match(&self, text: &str) -> Option<&(String, String)> {
        let mut lo = 0usize;
        let mut last_match = None;
        loop {
            let ub = lo
                + self.table[lo..]
                    .partition_point(|(pat, _)| cmp_prefix_of(pat, text) != Ordering::Greater);
            if ub == lo {
                // Remaining range is entirely greater than `text`.
                break;
            }
            let candidate = ub - 1;
            if cmp_prefix_of(&self.table[candidate].0, text) == Ordering::Equal {
                // Match; keep narrowing above it for a longer one.
                last_match = Some(candidate);
                lo = candidate + 1;
            } else {
                break;
            }
        }
        last_match.map(|i| &self.table[i])
    }

    /// Rewrite `word` in place, leftmost-longest at each position. An
    /// empty table is the identity.
    pub fn replace(&self, word: &mut String) {
        if self.table.is_empty() {
            return;
        }
        let mut i = 0;
        while i < word.len() {
            if let Some((pat, rep)) = self.find_match(&word[i..]) {
                let pat_len = pat.len();
                let rep_len = rep.len();
                word.replace_range(i..i + pat_len, rep);
                i += rep_len;
                continue;
            }
            // No pattern here; advance one character.
            i += word[i..].chars().next().map_or(1, char::len_utf8);
        }
    }

    pub fn replace_copy(&self, word: &str) -> String {
        let mut word = word.to_string();
        self.replace(&mut word);
        word
    }
}

impl From<Vec<(String, String)>> for SubstrReplacer {
    fn from(table: Vec<(String, String)>) -> Self {
        Self::new(table)
    }
}

impl From<Vec<(&str, &str)>> for SubstrReplacer {
    fn from(table: Vec<(&str, &str)>) -> Self {
        Self::new(
            table
                .into_iter()
                .map(|(p, r)| (p.to_string(), r.to_string()))
                .collect(),
        )
    }
}
