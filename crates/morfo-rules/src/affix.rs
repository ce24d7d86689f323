// Prefix and suffix rules, indexed by append text.
//
// Many rules share one append string, so the tables are multisets keyed
// by it: root recovery strips a candidate affix from a word and asks
// "which rules append exactly this text", then validates each hit's
// condition against the stripped form.

use morfo_core::flag_set::{Flag, FlagSet};
use morfo_core::multiset::{HashMultiset, Keyed};

use crate::RuleError;
use crate::condition::Condition;

/// Behavior shared by [`Prefix`] and [`Suffix`] that the generic
/// [`AffixTable`] needs: the append text (the table key) and the
/// continuation flags rolled up per table.
pub trait AffixRule {
    fn appending(&self) -> &str;
    fn cont_flags(&self) -> &FlagSet;
}

/// A prefix rule: strip `stripping` from the front of a derived word and
/// the root had `appending` removed, or the other way around. The
/// condition is anchored at the start of the derived word.
#[derive(Debug, Clone, Default)]
pub struct Prefix {
    pub flag: Flag,
    /// Whether this rule may combine with suffix rules on one word.
    pub cross_product: bool,
    pub stripping: String,
    pub appending: String,
    /// Flags the derived word gains, permitting further rule application.
    pub cont_flags: FlagSet,
    pub condition: Condition,
}

impl Prefix {
    pub fn new(
        flag: Flag,
        cross_product: bool,
        stripping: &str,
        appending: &str,
        cont_flags: FlagSet,
        condition: &str,
    ) -> Result<Self, RuleError> {
        Ok(Self {
            flag,
            cross_product,
            stripping: stripping.to_string(),
            appending: appending.to_string(),
            cont_flags,
            condition: Condition::new(condition)?,
        })
    }

    /// Replace the appended text at the front of `word` with the strip
    /// text, recovering the root form. The caller guarantees `word`
    /// actually starts with the append text.
    pub fn to_root(&self, word: &mut String) {
        word.replace_range(..self.appending.len(), &self.stripping);
    }

    pub fn to_root_copy(&self, word: &str) -> String {
        let mut word = word.to_string();
        self.to_root(&mut word);
        word
    }

    /// Replace the strip text at the front of `word` with the append
    /// text, deriving the affixed form.
    pub fn to_derived(&self, word: &mut String) {
        word.replace_range(..self.stripping.len(), &self.appending);
    }

    pub fn to_derived_copy(&self, word: &str) -> String {
        let mut word = word.to_string();
        self.to_derived(&mut word);
        word
    }

    /// Test the condition against the start of the (root) word.
    pub fn check_condition(&self, word: &[char]) -> bool {
        self.condition.match_prefix(word)
    }
}

impl Keyed for Prefix {
    type Key = str;

    fn key(&self) -> &str {
        &self.appending
    }
}

impl AffixRule for Prefix {
    fn appending(&self) -> &str {
        &self.appending
    }

    fn cont_flags(&self) -> &FlagSet {
        &self.cont_flags
    }
}

/// A suffix rule; mirror image of [`Prefix`], anchored at the word's end.
#[derive(Debug, Clone, Default)]
pub struct Suffix {
    pub flag: Flag,
    pub cross_product: bool,
    pub stripping: String,
    pub appending: String,
    pub cont_flags: FlagSet,
    pub condition: Condition,
}

impl Suffix {
    pub fn new(
        flag: Flag,
        cross_product: bool,
        stripping: &str,
        appending: &str,
        cont_flags: FlagSet,
        condition: &str,
    ) -> Result<Self, RuleError> {
        Ok(Self {
            flag,
            cross_product,
            stripping: stripping.to_string(),
            appending: appending.to_string(),
            cont_flags,
            condition: Condition::new(condition)?,
        })
    }

    /// The caller guarantees `word` actually ends with the append text.
    pub fn to_root(&self, word: &mut String) {
        let at = word.len() - self.appending.len();
        word.replace_range(at.., &self.stripping);
    }

    pub fn to_root_copy(&self, word: &str) -> String {
        let mut word = word.to_string();
        self.to_root(&mut word);
        word
    }

    pub fn to_derived(&self, word: &mut String) {
        let at = word.len() - self.stripping.len();
        word.replace_range(at.., &self.appending);
    }

    pub fn to_derived_copy(&self, word: &str) -> String {
        let mut word = word.to_string();
        self.to_derived(&mut word);
        word
    }

    /// Test the condition against the end of the (root) word.
    pub fn check_condition(&self, word: &[char]) -> bool {
        self.condition.match_suffix(word)
    }
}

impl Keyed for Suffix {
    type Key = str;

    fn key(&self) -> &str {
        &self.appending
    }
}

impl AffixRule for Suffix {
    fn appending(&self) -> &str {
        &self.appending
    }

    fn cont_flags(&self) -> &FlagSet {
        &self.cont_flags
    }
}

/// Index from append text to the rules that append it, plus a rolled-up
/// union of every continuation flag stored in any rule. The rollup lets
/// recursive rule application bail out before any lookup when the needed
/// continuation flag cannot exist in this table at all.
///
/// Insert-only during dictionary load, read-only afterwards.
#[derive(Debug, Clone)]
pub struct AffixTable<A> {
    table: HashMultiset<A>,
    all_cont_flags: FlagSet,
}

impl<A: AffixRule + Keyed<Key = str>> Default for AffixTable<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: AffixRule + Keyed<Key = str>> AffixTable<A> {
    pub fn new() -> Self {
        Self {
            table: HashMultiset::new(),
            all_cont_flags: FlagSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn insert(&mut self, rule: A) {
        self.all_cont_flags.union_with(rule.cont_flags());
        self.table.insert(rule);
    }

    /// All rules whose append text equals `appending`, possibly empty.
    pub fn lookup(&self, appending: &str) -> &[A] {
        self.table.equal_range(appending)
    }

    pub fn has_continuation_flags(&self) -> bool {
        !self.all_cont_flags.is_empty()
    }

    pub fn has_continuation_flag(&self, flag: Flag) -> bool {
        self.all_cont_flags.contains(flag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &A> {
        self.table.iter()
    }
}

pub type PrefixTable = AffixTable<Prefix>;
pub type SuffixTable = AffixTable<Suffix>;
