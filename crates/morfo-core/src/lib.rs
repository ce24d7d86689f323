//! Supporting containers for the morfo spell-checking engine.
//!
//! These types carry no matching semantics of their own; they are the
//! storage layer beneath the rule tables in `morfo-rules`.
//!
//! - [`flag_set`] -- Morphological flags and sorted flag sets
//! - [`multiset`] -- Open-hashing multiset with contiguous equal-key runs
//! - [`string_list`] -- String list that recycles cleared buffers
//!
//! All containers follow a two-phase lifecycle: mutation happens while a
//! dictionary is being loaded, after which the structures are read-only
//! and safe to share across any number of reader threads.

pub mod flag_set;
pub mod multiset;
pub mod string_list;
