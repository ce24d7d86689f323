// Priority- and backtrack-aware phonetic rewriting.
//
// PHONE-style rule tables: each rule is a pattern over an extended
// syntax and a replacement. Rules are grouped by the first character
// they match; within a group the author's order is priority order, so
// the load-time sort must be stable. A malformed rule never matches --
// it is skipped, not reported.
//
// Pattern syntax after the literal run:
//   (abc)  optional one-character class, consumes one more character
//   <      go back after replace: rescan at the same position
//   -      go back before replace: one trailing matched character per
//          dash is left in place (count must stay below the match length)
//   0-9    priority digit, default 5; lower tries earlier at a tail
//   ^      only at word begin; a second ^ treats the next match as begin
//   $      only at word end

/// Everything one successful rule match reports back to the rewrite loop.
#[derive(Debug, Clone, Copy)]
struct PhonetMatch {
    count_matched: usize,
    go_back_before_replace: usize,
    priority: usize,
    go_back_after_replace: bool,
    treat_next_as_begin: bool,
}

impl Default for PhonetMatch {
    fn default() -> Self {
        Self {
            count_matched: 0,
            go_back_before_replace: 0,
            priority: 5,
            go_back_after_replace: false,
            treat_next_as_begin: false,
        }
    }
}

#[derive(Debug, Clone)]
struct PhoneticRule {
    pattern: Vec<char>,
    replacement: Vec<char>,
}

/// Default cap on go-back-after-replace repetitions per rewrite.
///
/// The cap guarantees termination against rule sets that keep matching
/// at the same position; its exact value is a tunable, not a contract.
pub const DEFAULT_GO_BACK_LIMIT: usize = 100;

/// An ordered phonetic rule table.
///
/// Rules are stable-sorted at load time by the first character their
/// pattern matches; empty patterns are dropped and a replacement equal
/// to the sentinel `_` is normalized to "emit nothing".
#[derive(Debug, Clone)]
pub struct PhoneticTable {
    table: Vec<PhoneticRule>,
    go_back_limit: usize,
}

impl Default for PhoneticTable {
    fn default() -> Self {
        Self {
            table: Vec::new(),
            go_back_limit: DEFAULT_GO_BACK_LIMIT,
        }
    }
}

impl PhoneticTable {
    pub fn new(rules: Vec<(String, String)>) -> Self {
        let mut t = Self {
            table: rules
                .into_iter()
                .map(|(pat, rep)| PhoneticRule {
                    pattern: pat.chars().collect(),
                    replacement: rep.chars().collect(),
                })
                .collect(),
            go_back_limit: DEFAULT_GO_BACK_LIMIT,
        };
        t.order();
        t
    }

    /// Replace the termination cap on `<` rescans.
    pub fn with_go_back_limit(mut self, limit: usize) -> Self {
        self.go_back_limit = limit;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Stable sort by first pattern character, dropping empty patterns
    /// and normalizing the `_` deletion sentinel. Stability preserves
    /// the author's priority order among rules sharing a first letter.
    fn order(&mut self) {
        self.table.retain(|r| !r.pattern.is_empty());
        self.table.sort_by_key(|r| r.pattern[0]);
        for r in &mut self.table {
            if r.replacement == ['_'] {
                r.replacement.clear();
            }
        }
    }

    /// The contiguous run of rules whose patterns start with `c`.
    fn rules_for(&self, c: char) -> &[PhoneticRule] {
        let lo = self.table.partition_point(|r| r.pattern[0] < c);
        let hi = lo + self.table[lo..].partition_point(|r| r.pattern[0] == c);
        &self.table[lo..hi]
    }

    /// Evaluate one rule's pattern against `data` starting at `pos`.
    ///
    /// `None` covers both an ordinary non-match and a malformed rule
    /// (unclosed class, back-count not below the match length, trailing
    /// junk): bad rules simply never match.
    fn match_rule(
        data: &[char],
        pos: usize,
        pattern: &[char],
        at_begin: bool,
    ) -> Option<PhonetMatch> {
        let is_special = |c: char| matches!(c, '(' | '<' | '-' | '0'..='9' | '^' | '$');
        let mut j = pattern
            .iter()
            .position(|&c| is_special(c))
            .unwrap_or(pattern.len());

        // The literal run must match in full.
        if pos + j > data.len() || data[pos..pos + j] != pattern[..j] {
            return None;
        }
        let mut m = PhonetMatch {
            count_matched: j,
            ..PhonetMatch::default()
        };
        if j == pattern.len() {
            return if m.count_matched != 0 { Some(m) } else { None };
        }

        if pattern[j] == '(' {
            let close = pattern[j..].iter().position(|&c| c == ')').map(|k| j + k)?;
            let class = &pattern[j + 1..close];
            let next = data.get(pos + j)?;
            if !class.contains(next) {
                return None;
            }
            j = close + 1;
            m.count_matched += 1;
        }
        if j == pattern.len() {
            return Some(m);
        }

        if pattern[j] == '<' {
            m.go_back_after_replace = true;
            j += 1;
        }

        // Run of dashes: matched characters to leave in place.
        match pattern[j..].iter().position(|&c| c != '-') {
            None => {
                m.go_back_before_replace = pattern.len() - j;
                if m.go_back_before_replace >= m.count_matched {
                    return None; // bad rule
                }
                return Some(m);
            }
            Some(k) => {
                m.go_back_before_replace = k;
                if m.go_back_before_replace >= m.count_matched {
                    return None; // bad rule
                }
                j += k;
            }
        }

        if pattern[j].is_ascii_digit() {
            m.priority = (pattern[j] as u8 - b'0') as usize;
            j += 1;
        }
        if j == pattern.len() {
            return Some(m);
        }

        if pattern[j] == '^' {
            if !at_begin {
                return None;
            }
            j += 1;
        }
        if j == pattern.len() {
            return Some(m);
        }
        if pattern[j] == '^' {
            m.treat_next_as_begin = true;
            j += 1;
        }
        if j == pattern.len() {
            return Some(m);
        }

        // Nothing but a terminal end anchor may remain.
        if pattern[j] != '$' {
            return None; // bad rule
        }
        if pos + m.count_matched == data.len() {
            return Some(m);
        }
        None
    }

    /// One left-to-right rewrite pass over `word`. Returns whether any
    /// substitution occurred.
    ///
    /// At each position every rule keyed by the current character is
    /// tried in table order; the first match wins, except that a match
    /// with no leave-in-place suffix first offers its tail position to a
    /// higher-or-equal-priority rule, which may take over the match.
    pub fn replace(&self, word: &mut Vec<char>) -> bool {
        if self.table.is_empty() {
            return false;
        }
        let mut changed = false;
        // Set by a matched rule's ^^ marker; the word start itself also
        // counts as begin.
        let mut treat_next_as_begin = false;
        let mut go_backs = 0usize;
        let mut i = 0usize;
        while i < word.len() {
            let at_begin = i == 0 || treat_next_as_begin;
            let mut advanced = false;
            for rule in self.rules_for(word[i]) {
                let Some(mut m) = Self::match_rule(word, i, &rule.pattern, at_begin) else {
                    continue;
                };
                let mut winner = rule;
                if m.go_back_before_replace == 0 {
                    // Offer the tail position to a competing rule.
                    let j = i + m.count_matched - 1;
                    for rule2 in self.rules_for(word[j]) {
                        let Some(m2) = Self::match_rule(word, j, &rule2.pattern, false) else {
                            continue;
                        };
                        if m2.priority >= m.priority {
                            i = j;
                            winner = rule2;
                            m = m2;
                            break;
                        }
                    }
                }
                let end = i + m.count_matched - m.go_back_before_replace;
                word.splice(i..end, winner.replacement.iter().copied());
                treat_next_as_begin = m.treat_next_as_begin;
                if m.go_back_after_replace && go_backs < self.go_back_limit {
                    // Rescan from the same position.
                    go_backs += 1;
                } else {
                    i += winner.replacement.len();
                }
                changed = true;
                advanced = true;
                break;
            }
            if !advanced {
                i += 1;
            }
        }
        changed
    }

    /// Convenience wrapper over [`replace`](Self::replace) for `String`.
    pub fn replace_str(&self, word: &mut String) -> bool {
        let mut chars: Vec<char> = word.chars().collect();
        if self.replace(&mut chars) {
            *word = chars.into_iter().collect();
            true
        } else {
            false
        }
    }
}

impl From<Vec<(&str, &str)>> for PhoneticTable {
    fn from(rules: Vec<(&str, &str)>) -> Self {
        Self::new(
            rules
                .into_iter()
                .map(|(p, r)| (p.to_string(), r.to_string()))
                .collect(),
        )
    }
}
