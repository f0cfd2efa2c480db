/// A set of arguments, given by their ids.
///
/// Subsets are values: two subsets are equal iff they contain the same ids,
/// whatever the number of ids they were built for.
/// This is the type of candidate sets and extensions handled by the semantics.
///
/// # Example
///
/// ```
/// # use exaf::aa::ArgumentSubset;
/// let mut subset = ArgumentSubset::new(4);
/// subset.insert(2);
/// subset.insert(0);
/// assert_eq!(vec![0, 2], subset.iter().collect::<Vec<usize>>());
/// assert_eq!(ArgumentSubset::from_ids(10, vec![2, 0]), subset);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ArgumentSubset {
    members: Vec<bool>,
    len: usize,
}

impl ArgumentSubset {
    /// Builds an empty subset of a framework with `n_ids` argument ids.
    pub fn new(n_ids: usize) -> Self {
        Self {
            members: vec![false; n_ids],
            len: 0,
        }
    }

    /// Builds a subset of a framework with `n_ids` argument ids, given its members.
    pub fn from_ids<I>(n_ids: usize, ids: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut subset = Self::new(n_ids);
        ids.into_iter().for_each(|id| {
            subset.insert(id);
        });
        subset
    }

    /// Adds an argument to this subset.
    ///
    /// Returns `false` if the argument was already a member.
    pub fn insert(&mut self, id: usize) -> bool {
        if id >= self.members.len() {
            self.members.resize(id + 1, false);
        }
        if self.members[id] {
            false
        } else {
            self.members[id] = true;
            self.len += 1;
            true
        }
    }

    /// Removes an argument from this subset.
    ///
    /// Returns `false` if the argument was not a member.
    pub fn remove(&mut self, id: usize) -> bool {
        match self.members.get_mut(id) {
            Some(m) if *m => {
                *m = false;
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    /// Returns `true` iff the argument with the given id belongs to this subset.
    pub fn contains(&self, id: usize) -> bool {
        self.members.get(id).copied().unwrap_or(false)
    }

    /// Returns the number of arguments in this subset.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` iff this subset has no argument.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over the ids of the members, in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter_map(|(i, m)| if *m { Some(i) } else { None })
    }

    /// Returns `true` iff each member of this subset is a member of the other one.
    pub fn is_subset(&self, other: &ArgumentSubset) -> bool {
        self.len <= other.len && self.iter().all(|id| other.contains(id))
    }
}

impl PartialEq for ArgumentSubset {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.is_subset(other)
    }
}

impl Eq for ArgumentSubset {}
