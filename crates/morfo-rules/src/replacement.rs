// Replacement pairs partitioned by anchor.
//
// Same load-time reclassification as the break table, with one more
// range: a pattern carrying both anchors applies to the whole word
// only. Final range order: whole-word, start-word, end-word, anywhere.

use crate::partition::stable_partition;

/// Ordered (pattern, replacement) pairs in one backing vector,
/// partitioned into whole / start / end / anywhere ranges with the
/// anchor markers stripped from the stored patterns.
#[derive(Debug, Clone, Default)]
pub struct ReplacementTable {
    table: Vec<(String, String)>,
    whole_word_reps_last: usize,
    start_word_reps_last: usize,
    end_word_reps_last: usize,
}

impl ReplacementTable {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        let mut t = Self {
            table: entries,
            whole_word_reps_last: 0,
            start_word_reps_last: 0,
            end_word_reps_last: 0,
        };
        t.order_entries();
        t
    }

    fn order_entries(&mut self) {
        self.table
            .retain(|(pat, _)| !pat.is_empty() && pat != "^" && pat != "$");

        // Start-anchored first (this includes the both-anchors group),
        // leading ^ stripped.
        let start_last = stable_partition(&mut self.table, |(pat, _)| pat.starts_with('^'));
        for (pat, _) in &mut self.table[..start_last] {
            pat.remove(0);
        }

        // Within the start-anchored prefix, both-anchors pairs come
        // first: those are whole-word replacements.
        let whole_last =
            stable_partition(&mut self.table[..start_last], |(pat, _)| pat.ends_with('$'));
        for (pat, _) in &mut self.table[..whole_last] {
            pat.pop();
        }
        self.whole_word_reps_last = whole_last;
        self.start_word_reps_last = start_last;

        let end_last = start_last
            + stable_partition(&mut self.table[start_last..], |(pat, _)| pat.ends_with('$'));
        for (pat, _) in &mut self.table[start_last..end_last] {
            pat.pop();
        }
        self.end_word_reps_last = end_last;
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Pairs that replace only when the pattern equals the whole word.
    pub fn whole_word_replacements(&self) -> &[(String, String)] {
        &self.table[..self.whole_word_reps_last]
    }

    /// Pairs that replace only at the start of a word.
    pub fn start_word_replacements(&self) -> &[(String, String)] {
        &self.table[self.whole_word_reps_last..self.start_word_reps_last]
    }

    /// Pairs that replace only at the end of a word.
    pub fn end_word_replacements(&self) -> &[(String, String)] {
        &self.table[self.start_word_reps_last..self.end_word_reps_last]
    }

    /// Pairs that replace anywhere in a word.
    pub fn any_place_replacements(&self) -> &[(String, String)] {
        &self.table[self.end_word_reps_last..]
    }
}

impl From<Vec<(String, String)>> for ReplacementTable {
    fn from(entries: Vec<(String, String)>) -> Self {
        Self::new(entries)
    }
}

impl From<Vec<(&str, &str)>> for ReplacementTable {
    fn from(entries: Vec<(&str, &str)>) -> Self {
        Self::new(
            entries
                .into_iter()
                .map(|(p, r)| (p.to_string(), r.to_string()))
                .collect(),
        )
    }
}
