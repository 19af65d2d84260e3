//! Set of loads already assigned to a route.

use fixedbitset::FixedBitSet;

/// Tracks which catalog positions have been placed on a route.
///
/// Backed by a bitset sized to the catalog, so membership checks are O(1).
///
/// # Examples
///
/// ```
/// use greedy_vrp::models::PlannedSet;
///
/// let mut planned = PlannedSet::new(3);
/// assert!(planned.insert(1));
/// assert!(!planned.insert(1));
/// assert!(planned.contains(1));
/// assert_eq!(planned.len(), 1);
/// assert!(!planned.is_complete());
/// ```
#[derive(Debug, Clone)]
pub struct PlannedSet {
    bits: FixedBitSet,
    count: usize,
}

impl PlannedSet {
    /// Creates an empty set for `capacity` loads.
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(capacity),
            count: 0,
        }
    }

    /// Marks `index` as planned. Returns `false` if it already was.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn insert(&mut self, index: usize) -> bool {
        let was_set = self.bits.put(index);
        if !was_set {
            self.count += 1;
        }
        !was_set
    }

    /// Returns `true` if `index` is planned.
    pub fn contains(&self, index: usize) -> bool {
        self.bits.contains(index)
    }

    /// Number of planned loads.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if nothing has been planned yet.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns `true` once every load is planned.
    pub fn is_complete(&self) -> bool {
        self.count == self.bits.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let planned = PlannedSet::new(4);
        assert!(planned.is_empty());
        assert_eq!(planned.len(), 0);
        assert!(!planned.is_complete());
        assert!(!planned.contains(3));
    }

    #[test]
    fn test_complete() {
        let mut planned = PlannedSet::new(2);
        planned.insert(1);
        planned.insert(0);
        assert!(planned.is_complete());
        assert_eq!(planned.len(), 2);
    }

    #[test]
    fn test_zero_capacity_is_complete() {
        assert!(PlannedSet::new(0).is_complete());
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds() {
        let mut planned = PlannedSet::new(1);
        planned.insert(5);
    }
}
