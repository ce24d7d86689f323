// Restricted pattern matcher for affix conditions.
//
// Affix conditions only ever need literal runs, a one-character wildcard
// `.`, and one-character classes `[...]` / `[^...]`. Compiling them into
// fixed-width spans beats a general regex engine by a wide margin, and
// matching never backtracks: the total matched length is known up front.

use crate::RuleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpanKind {
    /// Run of literal characters that must match exactly.
    Literal,
    /// `.` -- consumes one arbitrary character.
    Dot,
    /// `[...]` -- current character must be in the class.
    AnyOf,
    /// `[^...]` -- current character must not be in the class.
    NoneOf,
}

/// One compiled span: a range of chars in the pattern plus its kind.
#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    len: usize,
    kind: SpanKind,
}

/// A compiled affix condition.
///
/// Built once from the pattern text when a rule is loaded, immutable
/// afterwards, queried for every candidate stripping. The compiled form
/// has a fixed total length in characters; a word fragment of any other
/// length can never match.
#[derive(Debug, Clone, Default)]
pub struct Condition {
    source: String,
    text: Vec<char>,
    spans: Vec<Span>,
    length: usize,
}

impl Condition {
    /// Compile `pattern`. Fails on bracket errors: a `]` with no opener,
    /// a `[` with no closer, or an empty bracket body.
    pub fn new(pattern: &str) -> Result<Self, RuleError> {
        let text: Vec<char> = pattern.chars().collect();
        let mut spans = Vec::new();
        let mut length = 0usize;
        let mut i = 0usize;
        while i != text.len() {
            let j = text[i..]
                .iter()
                .position(|c| matches!(c, '[' | ']' | '.'))
                .map(|off| i + off);
            match j {
                None => {
                    spans.push(Span {
                        start: i,
                        len: text.len() - i,
                        kind: SpanKind::Literal,
                    });
                    length += text.len() - i;
                    break;
                }
                Some(j) if j != i => {
                    spans.push(Span {
                        start: i,
                        len: j - i,
                        kind: SpanKind::Literal,
                    });
                    length += j - i;
                    i = j;
                }
                Some(_) => {}
            }
            match text[i] {
                '.' => {
                    spans.push(Span {
                        start: i,
                        len: 1,
                        kind: SpanKind::Dot,
                    });
                    length += 1;
                    i += 1;
                }
                ']' => return Err(RuleError::UnmatchedClosingBracket),
                _ => {
                    // '['
                    i += 1;
                    if i == text.len() {
                        return Err(RuleError::UnmatchedOpeningBracket);
                    }
                    let kind = if text[i] == '^' {
                        i += 1;
                        SpanKind::NoneOf
                    } else {
                        SpanKind::AnyOf
                    };
                    let close = text[i..]
                        .iter()
                        .position(|&c| c == ']')
                        .map(|off| i + off)
                        .ok_or(RuleError::UnmatchedOpeningBracket)?;
                    if close == i {
                        return Err(RuleError::EmptyBracket);
                    }
                    spans.push(Span {
                        start: i,
                        len: close - i,
                        kind,
                    });
                    length += 1;
                    i = close + 1;
                }
            }
        }
        Ok(Self {
            source: pattern.to_string(),
            text,
            spans,
            length,
        })
    }

    /// The fixed number of characters this condition matches.
    pub fn length(&self) -> usize {
        self.length
    }

    /// The pattern text this condition was compiled from.
    pub fn pattern(&self) -> &str {
        &self.source
    }

    /// Match against `word[pos..pos + len]` (char offsets).
    ///
    /// Errors when `pos` is beyond the word's length. `len` is trimmed to
    /// the available remainder; a trimmed length different from the
    /// compiled length is an immediate non-match. The spans then consume
    /// exactly their declared widths in order: all succeed or the first
    /// failing span decides.
    pub fn matches(&self, word: &[char], pos: usize, mut len: usize) -> Result<bool, RuleError> {
        if pos > word.len() {
            return Err(RuleError::PositionOutOfBounds {
                pos,
                len: word.len(),
            });
        }
        if word.len() - pos < len {
            len = word.len() - pos;
        }
        if len != self.length {
            return Ok(false);
        }
        let mut i = pos;
        for span in &self.spans {
            let body = &self.text[span.start..span.start + span.len];
            match span.kind {
                SpanKind::Literal => {
                    if word[i..i + span.len] != *body {
                        return Ok(false);
                    }
                    i += span.len;
                }
                SpanKind::Dot => i += 1,
                SpanKind::AnyOf => {
                    if !body.contains(&word[i]) {
                        return Ok(false);
                    }
                    i += 1;
                }
                SpanKind::NoneOf => {
                    if body.contains(&word[i]) {
                        return Ok(false);
                    }
                    i += 1;
                }
            }
        }
        Ok(true)
    }

    /// Match anchored at the start of `word`.
    pub fn match_prefix(&self, word: &[char]) -> bool {
        self.matches(word, 0, self.length).unwrap_or(false)
    }

    /// Match anchored at the end of `word`.
    pub fn match_suffix(&self, word: &[char]) -> bool {
        if self.length > word.len() {
            return false;
        }
        self.matches(word, word.len() - self.length, self.length)
            .unwrap_or(false)
    }
}
