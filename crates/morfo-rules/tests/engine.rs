// End-to-end exercise of the rule tables the way the checking and
// suggestion layers drive them: build tables from parsed rule tuples,
// then run root recovery and the transformation passes over real words.

use morfo_core::flag_set::FlagSet;
use morfo_rules::affix::{Prefix, PrefixTable, Suffix, SuffixTable};
use morfo_rules::break_table::BreakTable;
use morfo_rules::compound::{CompoundRuleTable, CompoundToken};
use morfo_rules::phonetic::PhoneticTable;
use morfo_rules::replacement::ReplacementTable;
use morfo_rules::replacer::SubstrReplacer;

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// A small English-like affix setup: un- prefix, -s and -ies suffixes.
fn build_tables() -> (PrefixTable, SuffixTable) {
    let mut prefixes = PrefixTable::new();
    prefixes.insert(Prefix::new(1, true, "", "un", FlagSet::new(), ".").unwrap());

    let mut suffixes = SuffixTable::new();
    suffixes.insert(
        Suffix::new(2, true, "", "s", FlagSet::from_flags(vec![30]), "[^sxy]").unwrap(),
    );
    suffixes.insert(Suffix::new(3, true, "y", "ies", FlagSet::new(), "[^aeiou]y").unwrap());
    (prefixes, suffixes)
}

#[test]
fn root_recovery_strips_and_validates() {
    let (prefixes, suffixes) = build_tables();

    // "unlocks": the checker peels candidate affixes off both ends.
    let word = "unlocks";
    let hits = prefixes.lookup(&word[..2]);
    assert_eq!(hits.len(), 1);
    let prefix = &hits[0];
    let stem = prefix.to_root_copy(word);
    assert_eq!(stem, "locks");
    assert!(prefix.check_condition(&chars(&stem)));

    let hits = suffixes.lookup(&stem[stem.len() - 1..]);
    assert_eq!(hits.len(), 1);
    let suffix = &hits[0];
    let root = suffix.to_root_copy(&stem);
    assert_eq!(root, "lock");
    assert!(suffix.check_condition(&chars(&root)));
    assert!(prefix.cross_product && suffix.cross_product);
}

#[test]
fn condition_rejects_invalid_stripping() {
    let (_, suffixes) = build_tables();
    // "boxs" would strip to "box", but the -s rule forbids x-final roots.
    let suffix = &suffixes.lookup("s")[0];
    let root = suffix.to_root_copy("boxs");
    assert_eq!(root, "box");
    assert!(!suffix.check_condition(&chars(&root)));
}

#[test]
fn ies_suffix_round_trip() {
    let (_, suffixes) = build_tables();
    let suffix = &suffixes.lookup("ies")[0];
    let root = suffix.to_root_copy("berries");
    assert_eq!(root, "berry");
    assert!(suffix.check_condition(&chars(&root)));
    // "key" keeps its vowel-y: the condition refuses the derivation.
    assert!(!suffix.check_condition(&chars("key")));
}

#[test]
fn continuation_rollup_short_circuits_recursion() {
    let (prefixes, suffixes) = build_tables();
    // Only the -s rule grants flag 30; the prefix table grants nothing,
    // so recursive prefix application can be skipped wholesale.
    assert!(suffixes.has_continuation_flag(30));
    assert!(!suffixes.has_continuation_flag(2));
    assert!(!prefixes.has_continuation_flags());
}

#[test]
fn tokenization_breaks_by_anchor_class() {
    let breaks = BreakTable::from(vec!["^-", "-$", "--", "'"]);
    assert_eq!(breaks.start_word_breaks(), &["-".to_string()]);
    assert_eq!(breaks.end_word_breaks(), &["-".to_string()]);
    assert_eq!(
        breaks.middle_word_breaks(),
        &["--".to_string(), "'".to_string()]
    );

    // The tokenizer's contract: try middle breaks anywhere in the word.
    let word = "re--do";
    let pat = &breaks.middle_word_breaks()[0];
    let at = word.find(pat.as_str()).unwrap();
    assert_eq!((&word[..at], &word[at + pat.len()..]), ("re", "do"));
}

#[test]
fn suggestion_passes_compose() {
    // Input conversion first, then REP-style candidates, then a
    // phonetic key for ranking -- three independent passes.
    let iconv = SubstrReplacer::from(vec![("’", "'"), ("ij", "y")]);
    assert_eq!(iconv.replace_copy("bij’t"), "by't");

    let reps = ReplacementTable::from(vec![("^kn", "n"), ("alot$", "a lot"), ("ie", "ei")]);
    let (pat, with) = &reps.any_place_replacements()[0];
    let candidate = "recieve".replace(pat.as_str(), with);
    assert_eq!(candidate, "receive");
    assert_eq!(reps.start_word_replacements().len(), 1);
    assert_eq!(reps.end_word_replacements().len(), 1);

    let phone = PhoneticTable::from(vec![("ph", "F"), ("gh$", "F"), ("ough", "AU")]);
    let mut key = String::from("tough");
    assert!(phone.replace_str(&mut key));
    assert_eq!(key, "tAU");
    let mut key2 = String::from("photograph");
    assert!(phone.replace_str(&mut key2));
    assert_eq!(key2, "FotograF");
}

#[test]
fn compound_rules_gate_word_sequences() {
    // Classic numbers-compounding shape: digit words (flag 1) repeated,
    // then a unit word (flag 2).
    let rules = CompoundRuleTable::new(vec![vec![
        CompoundToken::Flag(1),
        CompoundToken::ZeroOrMore,
        CompoundToken::Flag(2),
    ]]);
    let digit = FlagSet::from_flags(vec![1]);
    let filler = FlagSet::from_flags(vec![1, 9]);
    let unit = FlagSet::from_flags(vec![2]);

    assert!(rules.match_any_rule(&[&digit, &unit]));
    assert!(rules.match_any_rule(&[&digit, &filler, &filler, &unit]));
    assert!(!rules.match_any_rule(&[&unit, &digit]));

    // Pre-check lets the checker skip words carrying no compound flag.
    assert!(rules.has_any_of_flags(&digit));
    assert!(!rules.has_any_of_flags(&FlagSet::from_flags(vec![7])));
}
