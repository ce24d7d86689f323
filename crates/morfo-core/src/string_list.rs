// String list that recycles cleared buffers.
//
// Suggestion generation clears and refills the same list thousands of
// times per word; keeping the backing String allocations alive across
// clears removes almost all of that churn. Purely a performance
// container -- no matching semantics live here.

/// A growable list of strings with a logical length separate from the
/// allocated length. [`clear`](Self::clear) and [`truncate`](Self::truncate)
/// only shrink the logical length; buffers past it are retained and
/// reused by the next [`emplace_back`](Self::emplace_back) or
/// [`push_str`](Self::push_str).
#[derive(Debug, Default, Clone)]
pub struct StringList {
    data: Vec<String>,
    len: usize,
}

impl StringList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live strings.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots, live or retained.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Drop all live strings logically; every buffer stays allocated.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.len = new_len;
        }
    }

    /// Append an empty string, reusing a retained buffer when one exists.
    pub fn emplace_back(&mut self) -> &mut String {
        if self.len == self.data.len() {
            self.data.push(String::new());
        } else {
            self.data[self.len].clear();
        }
        self.len += 1;
        &mut self.data[self.len - 1]
    }

    /// Append a copy of `s`, reusing a retained buffer when one exists.
    pub fn push_str(&mut self, s: &str) {
        self.emplace_back().push_str(s);
    }

    pub fn pop(&mut self) {
        if self.len > 0 {
            self.len -= 1;
        }
    }

    /// Grow or shrink the logical length; newly exposed slots are cleared.
    pub fn resize(&mut self, new_len: usize) {
        if new_len > self.len {
            let clear_end = self.data.len().min(new_len);
            for slot in self.data[self.len..clear_end].iter_mut() {
                slot.clear();
            }
            if new_len > self.data.len() {
                self.data.resize(new_len, String::new());
            }
        }
        self.len = new_len;
    }

    pub fn get(&self, index: usize) -> Option<&String> {
        self.as_slice().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut String> {
        if index < self.len {
            self.data.get_mut(index)
        } else {
            None
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.data[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.as_slice().iter()
    }

    pub fn last(&self) -> Option<&String> {
        self.as_slice().last()
    }

    /// Give up the live strings as a plain `Vec`, leaving the list empty.
    pub fn extract_vec(&mut self) -> Vec<String> {
        self.data.truncate(self.len);
        self.len = 0;
        std::mem::take(&mut self.data)
    }

    /// Drop the retained buffers past the logical length.
    pub fn shrink_to_fit(&mut self) {
        self.data.truncate(self.len);
        self.data.shrink_to_fit();
        for s in &mut self.data {
            s.shrink_to_fit();
        }
    }
}

impl std::ops::Index<usize> for StringList {
    type Output = String;

    fn index(&self, index: usize) -> &String {
        &self.as_slice()[index]
    }
}

impl PartialEq for StringList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for StringList {}

impl<'a> IntoIterator for &'a StringList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl FromIterator<String> for StringList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let data: Vec<String> = iter.into_iter().collect();
        let len = data.len();
        Self { data, len }
    }
}
