// Word-break patterns partitioned by anchor.
//
// The tokenizer consults three groups: patterns that break only at the
// start of a word (`^...`), only at the end (`...$`), and anywhere.
// Classification happens once at load time; the anchor markers are
// stripped from the stored patterns afterwards.

use crate::partition::stable_partition;

/// Ordered break patterns in one backing vector, partitioned into
/// start / end / middle ranges. The ranges never overlap and together
/// cover the whole table minus the degenerate entries dropped at load.
#[derive(Debug, Clone, Default)]
pub struct BreakTable {
    table: Vec<String>,
    start_breaks_last: usize,
    end_breaks_last: usize,
}

impl BreakTable {
    pub fn new(entries: Vec<String>) -> Self {
        let mut t = Self {
            table: entries,
            start_breaks_last: 0,
            end_breaks_last: 0,
        };
        t.order_entries();
        t
    }

    /// One-time load-time classification. Drops empty patterns and bare
    /// anchor markers, then partitions: start-anchored first, then
    /// end-anchored, then the rest, stripping the anchors as each group
    /// is formed.
    fn order_entries(&mut self) {
        self.table.retain(|s| !s.is_empty() && s != "^" && s != "$");

        let start_last = stable_partition(&mut self.table, |s| s.starts_with('^'));
        for s in &mut self.table[..start_last] {
            s.remove(0);
        }
        self.start_breaks_last = start_last;

        let end_last =
            start_last + stable_partition(&mut self.table[start_last..], |s| s.ends_with('$'));
        for s in &mut self.table[start_last..end_last] {
            s.pop();
        }
        self.end_breaks_last = end_last;
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Patterns that break only at the start of a word, anchors stripped.
    pub fn start_word_breaks(&self) -> &[String] {
        &self.table[..self.start_breaks_last]
    }

    /// Patterns that break only at the end of a word, anchors stripped.
    pub fn end_word_breaks(&self) -> &[String] {
        &self.table[self.start_breaks_last..self.end_breaks_last]
    }

    /// Patterns that break anywhere inside a word.
    pub fn middle_word_breaks(&self) -> &[String] {
        &self.table[self.end_breaks_last..]
    }
}

impl From<Vec<String>> for BreakTable {
    fn from(entries: Vec<String>) -> Self {
        Self::new(entries)
    }
}

impl From<Vec<&str>> for BreakTable {
    fn from(entries: Vec<&str>) -> Self {
        Self::new(entries.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_and_strips_anchors() {
        let t = BreakTable::from(vec!["^a", "b$", "c"]);
        assert_eq!(t.start_word_breaks(), &["a".to_string()]);
        assert_eq!(t.end_word_breaks(), &["b".to_string()]);
        assert_eq!(t.middle_word_breaks(), &["c".to_string()]);
    }

    #[test]
    fn drops_empty_and_bare_anchor_entries() {
        let t = BreakTable::from(vec!["", "^", "$", "-"]);
        assert_eq!(t.len(), 1);
        assert_eq!(t.middle_word_breaks(), &["-".to_string()]);
    }

    #[test]
    fn preserves_author_order_within_groups() {
        let t = BreakTable::from(vec!["x", "^p1", "y", "^p2", "q1$", "q2$"]);
        assert_eq!(t.start_word_breaks(), &["p1".to_string(), "p2".to_string()]);
        assert_eq!(t.end_word_breaks(), &["q1".to_string(), "q2".to_string()]);
        assert_eq!(t.middle_word_breaks(), &["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn start_anchor_takes_precedence_over_end_anchor() {
        // "^ab$" classifies as start-anchored; only the ^ is stripped.
        let t = BreakTable::from(vec!["^ab$"]);
        assert_eq!(t.start_word_breaks(), &["ab$".to_string()]);
        assert!(t.end_word_breaks().is_empty());
    }

    #[test]
    fn reconstruction_from_ranges_is_stable() {
        // Partitioning is deterministic: rebuilding from the emitted
        // ranges (re-anchored) reproduces identical boundaries.
        let t = BreakTable::from(vec!["^a", "m1", "b$", "m2", "^c"]);
        let mut rebuilt: Vec<String> = Vec::new();
        rebuilt.extend(t.start_word_breaks().iter().map(|s| format!("^{s}")));
        rebuilt.extend(t.end_word_breaks().iter().map(|s| format!("{s}$")));
        rebuilt.extend(t.middle_word_breaks().iter().cloned());
        let t2 = BreakTable::new(rebuilt);
        assert_eq!(t2.start_word_breaks(), t.start_word_breaks());
        assert_eq!(t2.end_word_breaks(), t.end_word_breaks());
        assert_eq!(t2.middle_word_breaks(), t.middle_word_breaks());
    }

    #[test]
    fn empty_table_has_empty_ranges() {
        let t = BreakTable::default();
        assert!(t.is_empty());
        assert!(t.start_word_breaks().is_empty());
        assert!(t.end_word_breaks().is_empty());
        assert!(t.middle_word_breaks().is_empty());
    }
}
