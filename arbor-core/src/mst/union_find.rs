//! Union-find (disjoint set union) used by the Kruskal selection phase.
//!
//! Each element owns one signed slot. A non-negative slot names the element's
//! parent. A negative slot marks a representative and stores `-(height + 1)`,
//! an upper bound on the height of the tree rooted there, so fresh singletons
//! hold `-1`.

/// Partition of `0..len()` into disjoint sets.
///
/// # Examples
/// ```
/// use arbor_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// let (a, b) = (sets.find(0), sets.find(1));
/// sets.union(a, b);
/// assert!(sets.same_set(0, 1));
/// assert!(!sets.same_set(1, 2));
/// assert_eq!(sets.set_count(), 3);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisjointSet {
    slots: Vec<isize>,
    set_count: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![-1; len],
            set_count: len,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` when the structure holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the number of disjoint sets remaining.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// Returns the representative of the set containing `element`.
    ///
    /// Every node visited on the way to the root is repointed directly at it,
    /// so a repeated lookup follows at most one link.
    ///
    /// # Panics
    /// Panics when `element >= self.len()`.
    pub fn find(&mut self, element: usize) -> usize {
        self.check_bounds(element, "find");

        let mut root = element;
        while let Some(parent) = self.parent_of(root) {
            root = parent;
        }

        let mut node = element;
        while let Some(parent) = self.parent_of(node) {
            self.slots[node] = as_slot(root);
            node = parent;
        }

        root
    }

    /// Merges the sets whose representatives are `left_root` and
    /// `right_root`, returning the representative of the merged set.
    ///
    /// The taller tree adopts the shorter one. On equal heights `left_root`
    /// becomes the representative and its height grows by one.
    ///
    /// # Panics
    /// Panics when either id is out of range, when either id is not a
    /// representative, or when both ids name the same set.
    pub fn union(&mut self, left_root: usize, right_root: usize) -> usize {
        self.check_bounds(left_root, "union");
        self.check_bounds(right_root, "union");
        assert!(
            self.is_root(left_root) && self.is_root(right_root),
            "union requires representatives, got {left_root} and {right_root}"
        );
        assert_ne!(
            left_root, right_root,
            "union requires two distinct sets, got {left_root} twice"
        );

        let left_height = self.slots[left_root];
        let right_height = self.slots[right_root];
        self.set_count -= 1;

        // Heights are stored negated: the smaller slot is the taller tree.
        if right_height < left_height {
            self.slots[left_root] = as_slot(right_root);
            return right_root;
        }
        if left_height == right_height {
            self.slots[left_root] -= 1;
        }
        self.slots[right_root] = as_slot(left_root);
        left_root
    }

    /// Returns `true` when `left` and `right` belong to the same set.
    ///
    /// # Panics
    /// Panics when either id is out of range.
    pub fn same_set(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }

    fn is_root(&self, element: usize) -> bool {
        self.slots[element] < 0
    }

    fn parent_of(&self, element: usize) -> Option<usize> {
        usize::try_from(self.slots[element]).ok()
    }

    fn check_bounds(&self, element: usize, operation: &str) {
        assert!(
            element < self.slots.len(),
            "{operation} called with element {element}, but the set holds {} elements",
            self.slots.len()
        );
    }

    #[cfg(test)]
    pub(super) fn path_length(&self, element: usize) -> usize {
        let mut steps = 0;
        let mut node = element;
        while let Some(parent) = self.parent_of(node) {
            node = parent;
            steps += 1;
        }
        steps
    }
}

fn as_slot(id: usize) -> isize {
    // Vec allocations never exceed isize::MAX elements, so ids always fit.
    isize::try_from(id).unwrap_or(isize::MAX)
}
