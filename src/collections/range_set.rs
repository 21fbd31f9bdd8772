/// A set of indices in `0..capacity` with a tracked member count
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RangeSet {
    len: usize,
    members: Vec<bool>,
}

impl RangeSet {
    pub fn with_all(capacity: usize) -> Self {
        Self {
            len: capacity,
            members: vec![true; capacity],
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, n: usize) -> bool {
        self.members[n]
    }

    /// Returns false if `n` was already a member
    pub fn insert(&mut self, n: usize) -> bool {
        if self.members[n] {
            return false;
        }
        self.members[n] = true;
        self.len += 1;
        true
    }

    /// Returns false if `n` was not a member
    pub fn remove(&mut self, n: usize) -> bool {
        if !self.members[n] {
            return false;
        }
        self.members[n] = false;
        self.len -= 1;
        true
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            members: &self.members,
            index: 0,
        }
    }
}

pub(crate) struct Iter<'a> {
    members: &'a [bool],
    index: usize,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.members.len() {
            let i = self.index;
            self.index += 1;
            if self.members[i] {
                return Some(i);
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
