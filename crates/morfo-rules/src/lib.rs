//! Matching and indexing engine for the morfo spell checker.
//!
//! This crate answers two questions at dictionary-checking speed: "does
//! this word fragment satisfy this rule" and "which stored rules are
//! keyed by this fragment". The affix-file parser builds these tables
//! once at load time; afterwards they are read-only and safe to share
//! across reader threads.
//!
//! # Architecture
//!
//! - [`condition`] -- Restricted fixed-length pattern matcher for affix conditions
//! - [`affix`] -- Prefix/suffix rules and the append-text indexed tables
//! - [`break_table`] -- Word-break patterns partitioned by anchor
//! - [`replacement`] -- REP-style replacement pairs partitioned by anchor
//! - [`replacer`] -- Longest-match substring rewriter (ICONV/OCONV)
//! - [`similarity`] -- MAP-style similarity groups
//! - [`phonetic`] -- Priority- and backtrack-aware phonetic rewriting
//! - [`compound`] -- Compound rules matched over per-word flag sets

pub mod affix;
pub mod break_table;
pub mod compound;
pub mod condition;
mod partition;
pub mod phonetic;
pub mod replacement;
pub mod replacer;
pub mod similarity;

/// Structural errors raised while loading rules.
///
/// A malformed condition pattern or an out-of-bounds match position
/// indicates a corrupt rule source and must reach the caller. Runtime
/// nonconformities -- a failed match, a malformed phonetic rule, a table
/// miss -- are ordinary negative results, never errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("closing bracket has no matching opening bracket")]
    UnmatchedClosingBracket,
    #[error("opening bracket has no matching closing bracket")]
    UnmatchedOpeningBracket,
    #[error("empty bracket expression")]
    EmptyBracket,
    #[error("match position {pos} is beyond the word length {len}")]
    PositionOutOfBounds { pos: usize, len: usize },
}
