// Morphological flags and sorted, duplicate-free flag sets.

/// A single morphological flag.
///
/// A flag is a small integer code naming one capability a dictionary word
/// or affix rule can carry, e.g. "may take this suffix". Flags have no
/// structure beyond identity and ordering; the affix-file parser resolves
/// the textual flag encodings (numeric, single-character, two-character)
/// into this type before any rule reaches the engine.
pub type Flag = u16;

/// A set of flags stored as a sorted, duplicate-free sequence.
///
/// Kept sorted at all times so that membership is a binary search and
/// subset/intersection tests are merge-style scans. A set is built once
/// per rule or dictionary word and then queried many times.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlagSet {
    data: Vec<Flag>,
}

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from flags in any order, with duplicates allowed.
    pub fn from_flags(mut flags: Vec<Flag>) -> Self {
        flags.sort_unstable();
        flags.dedup();
        Self { data: flags }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn contains(&self, flag: Flag) -> bool {
        self.data.binary_search(&flag).is_ok()
    }

    /// Insert a flag, keeping the sequence sorted. Idempotent.
    pub fn insert(&mut self, flag: Flag) {
        if let Err(pos) = self.data.binary_search(&flag) {
            self.data.insert(pos, flag);
        }
    }

    /// Remove a flag. Returns whether it was present.
    pub fn erase(&mut self, flag: Flag) -> bool {
        match self.data.binary_search(&flag) {
            Ok(pos) => {
                self.data.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    /// Merge-insert every flag of `other` into `self`.
    pub fn union_with(&mut self, other: &FlagSet) {
        if other.is_empty() {
            return;
        }
        let mut merged = Vec::with_capacity(self.data.len() + other.data.len());
        let mut a = self.data.iter().copied().peekable();
        let mut b = other.data.iter().copied().peekable();
        while let (Some(&x), Some(&y)) = (a.peek(), b.peek()) {
            if x < y {
                merged.push(x);
                a.next();
            } else if y < x {
                merged.push(y);
                b.next();
            } else {
                merged.push(x);
                a.next();
                b.next();
            }
        }
        merged.extend(a);
        merged.extend(b);
        self.data = merged;
    }

    /// Merge-scan intersection test: true when the two sets share a flag.
    pub fn intersects(&self, other: &FlagSet) -> bool {
        let mut a = self.data.iter();
        let mut b = other.data.iter();
        let (mut x, mut y) = (a.next(), b.next());
        while let (Some(&fx), Some(&fy)) = (x, y) {
            if fx < fy {
                x = a.next();
            } else if fy < fx {
                y = b.next();
            } else {
                return true;
            }
        }
        false
    }

    pub fn as_slice(&self) -> &[Flag] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Flag> {
        self.data.iter()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl FromIterator<Flag> for FlagSet {
    fn from_iter<I: IntoIterator<Item = Flag>>(iter: I) -> Self {
        Self::from_flags(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FlagSet {
    type Item = &'a Flag;
    type IntoIter = std::slice::Iter<'a, Flag>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
