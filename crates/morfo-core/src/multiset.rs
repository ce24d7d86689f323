// Open-hashing multiset with inline small-bucket storage.
//
// Backing store for the affix tables: many values may share one key (the
// affix append text), and lookup must return the whole group of values
// for a key as one contiguous slice.

use core::hash::{BuildHasher, Hash};

use hashbrown::DefaultHashBuilder;
use smallvec::SmallVec;

/// A value that exposes a borrowed lookup key.
///
/// The key borrows from the value itself (for an affix rule it is the
/// append text the rule owns), so the multiset never stores keys
/// separately and lookup results stay valid exactly as long as the table
/// is not mutated.
pub trait Keyed {
    type Key: ?Sized + Hash + Eq;

    fn key(&self) -> &Self::Key;
}

/// One bucket: inline storage for the common single-entry case.
type Bucket<V> = SmallVec<[V; 1]>;

const INITIAL_BUCKETS: usize = 16;

// Load factor 7/8. Bucket counts are powers of two >= 16, so the
// integer arithmetic below is exact.
const MAX_LOAD_NUM: usize = 7;
const MAX_LOAD_DEN: usize = 8;

/// Open-hashing multiset keyed by [`Keyed::key`].
///
/// The bucket count is always a power of two; a value's bucket is
/// `hash & (bucket_count - 1)`. Within a bucket, entries with equal keys
/// are kept contiguous -- the bucket is NOT otherwise sorted. That
/// invariant alone is what makes [`equal_range`](Self::equal_range)
/// correct without any secondary index, and the insertion and rebuild
/// paths must preserve it.
///
/// The load factor never exceeds 7/8; on breach the table is rebuilt
/// with roughly double the bucket count and every entry reinserted.
/// This engine only ever inserts during dictionary load; there is no
/// removal operation.
#[derive(Debug, Clone)]
pub struct HashMultiset<V, S = DefaultHashBuilder> {
    buckets: Vec<Bucket<V>>,
    len: usize,
    max_load_capacity: usize,
    hasher: S,
}

impl<V: Keyed> Default for HashMultiset<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Keyed> HashMultiset<V> {
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }
}

impl<V: Keyed, S: BuildHasher> HashMultiset<V, S> {
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            buckets: (0..INITIAL_BUCKETS).map(|_| Bucket::new()).collect(),
            len: 0,
            max_load_capacity: INITIAL_BUCKETS * MAX_LOAD_NUM / MAX_LOAD_DEN,
            hasher,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    fn bucket_index(&self, key: &V::Key) -> usize {
        let h = self.hasher.hash_one(key);
        (h as usize) & (self.buckets.len() - 1)
    }

    /// Rebuild into at least `count` buckets, reinserting every entry.
    ///
    /// Must only be called during the single-threaded build phase: the
    /// swap at the end invalidates every outstanding lookup slice.
    pub fn rehash(&mut self, count: usize)
    where
        S: Clone,
    {
        if self.is_empty() {
            let mut capacity = INITIAL_BUCKETS;
            while capacity <= count {
                capacity <<= 1;
            }
            self.buckets = (0..capacity).map(|_| Bucket::new()).collect();
            self.max_load_capacity = capacity * MAX_LOAD_NUM / MAX_LOAD_DEN;
            return;
        }
        let count = count.max(self.len * MAX_LOAD_DEN / MAX_LOAD_NUM);
        let mut fresh = Self::with_hasher(self.hasher.clone());
        fresh.rehash(count);
        for bucket in self.buckets.drain(..) {
            for value in bucket {
                fresh.insert(value);
            }
        }
        *self = fresh;
    }

    /// Size the table so `count` entries fit under the load threshold.
    pub fn reserve(&mut self, count: usize)
    where
        S: Clone,
    {
        self.rehash((count * MAX_LOAD_DEN).div_ceil(MAX_LOAD_NUM));
    }

    /// Insert a value, keeping entries with equal keys contiguous.
    ///
    /// Empty and single-entry buckets just append, as does a key equal to
    /// the bucket's last entry. Otherwise a backward scan finds the end
    /// of the matching run and inserts there; with no matching run the
    /// value is appended, starting a new run at the bucket's end.
    pub fn insert(&mut self, value: V)
    where
        S: Clone,
    {
        if self.len == self.max_load_capacity {
            self.reserve(self.len + 1);
        }
        let idx = self.bucket_index(value.key());
        let bucket = &mut self.buckets[idx];
        if bucket.len() <= 1 || bucket.last().is_some_and(|last| last.key() == value.key()) {
            bucket.push(value);
        } else if let Some(run_end) = bucket.iter().rposition(|x| x.key() == value.key()) {
            bucket.insert(run_end + 1, value);
        } else {
            bucket.push(value);
        }
        self.len += 1;
    }

    /// All values whose key equals `key`, as one contiguous slice.
    ///
    /// A miss is an empty slice, never an error. The slice borrows the
    /// bucket storage and is invalidated by any later insert or rehash.
    pub fn equal_range(&self, key: &V::Key) -> &[V] {
        if self.buckets.is_empty() {
            return &[];
        }
        let bucket = &self.buckets[self.bucket_index(key)];
        match bucket.len() {
            0 => &[],
            1 => {
                if bucket[0].key() == key {
                    &bucket[..]
                } else {
                    &[]
                }
            }
            _ => {
                let Some(first) = bucket.iter().position(|x| x.key() == key) else {
                    return &[];
                };
                let next = first + 1;
                if next == bucket.len() || bucket[next].key() != key {
                    return &bucket[first..next];
                }
                // The run extends past `next`; bound it by scanning
                // backward from the bucket's end.
                let last = bucket.iter().rposition(|x| x.key() == key).unwrap_or(first);
                &bucket[first..=last]
            }
        }
    }

    /// Iterate over every stored value, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.buckets.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Entry {
        key: String,
        payload: u32,
    }

    impl Entry {
        fn new(key: &str, payload: u32) -> Self {
            Self {
                key: key.to_string(),
                payload,
            }
        }
    }

    impl Keyed for Entry {
        type Key = str;

        fn key(&self) -> &str {
            &self.key
        }
    }

    #[test]
    fn empty_table_has_empty_ranges() {
        let set: HashMultiset<Entry> = HashMultiset::new();
        assert!(set.is_empty());
        assert!(set.equal_range("x").is_empty());
    }

    #[test]
    fn single_key_round_trip() {
        let mut set = HashMultiset::new();
        set.insert(Entry::new("un", 1));
        let run = set.equal_range("un");
        assert_eq!(run.len(), 1);
        assert_eq!(run[0].payload, 1);
        assert!(set.equal_range("re").is_empty());
    }

    #[test]
    fn equal_keys_form_one_run_in_insertion_order() {
        let mut set = HashMultiset::new();
        set.insert(Entry::new("un", 1));
        set.insert(Entry::new("re", 10));
        set.insert(Entry::new("un", 2));
        set.insert(Entry::new("un", 3));
        let run = set.equal_range("un");
        let payloads: Vec<u32> = run.iter().map(|e| e.payload).collect();
        assert_eq!(payloads, vec![1, 2, 3]);
        assert_eq!(set.equal_range("re").len(), 1);
    }

    #[test]
    fn distinct_keys_are_all_retrievable() {
        let mut set = HashMultiset::new();
        let n = 10_000;
        for i in 0..n {
            set.insert(Entry::new(&format!("key{i}"), i));
        }
        assert_eq!(set.len(), n as usize);
        for i in 0..n {
            let run = set.equal_range(&format!("key{i}"));
            assert_eq!(run.len(), 1, "key{i} lost or duplicated");
            assert_eq!(run[0].payload, i);
        }
    }

    #[test]
    fn rebuild_preserves_runs_and_counts() {
        let mut set = HashMultiset::new();
        // Far past several load-factor rebuilds, with key multiplicity 3.
        for i in 0..2_000u32 {
            for rep in 0..3 {
                set.insert(Entry::new(&format!("k{i}"), i * 10 + rep));
            }
        }
        assert_eq!(set.len(), 6_000);
        assert!(set.bucket_count().is_power_of_two());
        for i in 0..2_000u32 {
            let run = set.equal_range(&format!("k{i}"));
            assert_eq!(run.len(), 3);
            let payloads: Vec<u32> = run.iter().map(|e| e.payload).collect();
            assert_eq!(payloads, vec![i * 10, i * 10 + 1, i * 10 + 2]);
        }
    }

    #[test]
    fn load_factor_stays_under_seven_eighths() {
        let mut set = HashMultiset::new();
        for i in 0..1_000u32 {
            set.insert(Entry::new(&format!("k{i}"), i));
            assert!(set.len() * 8 <= set.bucket_count() * 7);
        }
    }

    #[test]
    fn reserve_ahead_avoids_growth_during_fill() {
        let mut set = HashMultiset::new();
        set.reserve(1_000);
        let buckets = set.bucket_count();
        for i in 0..1_000u32 {
            set.insert(Entry::new(&format!("k{i}"), i));
        }
        assert_eq!(set.bucket_count(), buckets);
    }

    #[test]
    fn iter_visits_every_entry_once() {
        let mut set = HashMultiset::new();
        for i in 0..100u32 {
            set.insert(Entry::new(&format!("k{}", i % 7), i));
        }
        let mut seen: Vec<u32> = set.iter().map(|e| e.payload).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..100).collect::<Vec<_>>());
    }
}
