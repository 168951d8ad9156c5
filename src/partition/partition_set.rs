/// PartitionSet maintains a total assignment of elements to sets, with O(1) move/find.
/// Set 0 holds every element not yet moved anywhere else.
#[derive(Debug, Clone)]
pub(crate) struct PartitionSet {
    sets: Vec<Vec<usize>>,  // sets[s] = elements currently in set s
    index: Vec<usize>,      // index[e] = s when e is in sets[s]
    position: Vec<usize>    // position[e] = i when sets[s][i] is e
}

impl PartitionSet {
    /// Create a PartitionSet with a single set 0 holding all `num_elems` elements.
    pub(crate) fn new(num_elems: usize) -> Self {
        Self {
            sets: vec![(0..num_elems).collect()],
            index: vec![0; num_elems],
            position: (0..num_elems).collect(),
        }
    }

    /// Number of sets, including set 0.
    #[inline] pub(crate) fn num_sets(&self) -> usize { self.sets.len() }

    /// Append a new empty set and return its index.
    pub(crate) fn add_set(&mut self) -> usize {
        self.sets.push(Vec::new());
        self.sets.len() - 1
    }

    /// Return the set that `elem` is currently in.
    #[inline]
    pub(crate) fn find(&self, elem: usize) -> usize {
        debug_assert!(elem < self.index.len(), "element out of range");
        self.index[elem]
    }

    /// Returns a reference to the elements currently in `set`.
    #[inline]
    pub(crate) fn get(&self, set: usize) -> &[usize] {
        debug_assert!(set < self.sets.len(), "set out of range");
        &self.sets[set]
    }

    /// Iterator over each set as a slice.
    #[inline]
    pub(crate) fn iter_sets(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.sets.iter().map(|v| v.as_slice())
    }

    /// Move `elem` to `set`. Panics in debug if out of range.
    pub(crate) fn move_to(&mut self, elem: usize, set: usize) {
        debug_assert!(elem < self.index.len(), "element out of range");
        debug_assert!(set < self.sets.len(), "set out of range");

        let (prev, pos) = (self.index[elem], self.position[elem]);
        if prev == set { return }

        // Remove from previous set by swapping with last element.
        if let Some(last_elem) = self.sets[prev].pop() {
            if last_elem != elem {
                self.sets[prev][pos] = last_elem;
                self.position[last_elem] = pos;
            }
        }

        // Add to new set.
        self.index[elem] = set;
        self.position[elem] = self.sets[set].len();
        self.sets[set].push(elem);
    }
}
