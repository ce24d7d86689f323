// Compound rules matched over per-word flag sets.
//
// A compound candidate is a sequence of dictionary words; each position
// contributes that word's flag set. A rule is a simple pattern over
// flags plus two wildcards, and the candidate is accepted when any rule
// matches the whole sequence.

use morfo_core::flag_set::{Flag, FlagSet};

/// One token of a compound rule pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompoundToken {
    /// Matches a position whose flag set contains this flag.
    Flag(Flag),
    /// Matches exactly one position, unconditionally.
    AnyOne,
    /// Matches zero or more positions, unconditionally.
    ZeroOrMore,
}

/// The stored rule patterns plus a rolled-up union of every flag they
/// mention, used to reject candidates before any pattern is tried.
#[derive(Debug, Clone, Default)]
pub struct CompoundRuleTable {
    rules: Vec<Vec<CompoundToken>>,
    all_flags: FlagSet,
}

impl CompoundRuleTable {
    pub fn new(rules: Vec<Vec<CompoundToken>>) -> Self {
        let mut all_flags = FlagSet::new();
        for rule in &rules {
            for token in rule {
                if let CompoundToken::Flag(f) = token {
                    all_flags.insert(*f);
                }
            }
        }
        Self { rules, all_flags }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Fast pre-check: can any rule possibly involve one of `flags`?
    pub fn has_any_of_flags(&self, flags: &FlagSet) -> bool {
        self.all_flags.intersects(flags)
    }

    /// Whether any stored rule accepts the whole sequence of per-word
    /// flag sets.
    pub fn match_any_rule(&self, words: &[&FlagSet]) -> bool {
        self.rules.iter().any(|rule| match_rule(rule, words))
    }
}

fn match_rule(pattern: &[CompoundToken], words: &[&FlagSet]) -> bool {
    let Some((token, rest)) = pattern.split_first() else {
        return words.is_empty();
    };
    match *token {
        CompoundToken::ZeroOrMore => {
            (0..=words.len()).any(|skip| match_rule(rest, &words[skip..]))
        }
        CompoundToken::AnyOne => !words.is_empty() && match_rule(rest, &words[1..]),
        CompoundToken::Flag(flag) => {
            words.first().is_some_and(|set| set.contains(flag)) && match_rule(rest, &words[1..])
        }
    }
}
