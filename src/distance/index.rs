//! Dense pairwise distance index over loads.

use tracing::debug;

use crate::models::{Coordinate, Load, PlannedSet};

/// Which points of two loads a matrix entry connects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferencePoints {
    /// Entry (i, j) is the hop from load i's dropoff to load j's pickup.
    DropoffToPickup,
    /// Entry (i, j) is the distance between the two pickups.
    PickupToPickup,
}

impl ReferencePoints {
    fn exit(self, load: &Load) -> Coordinate {
        match self {
            Self::DropoffToPickup => load.dropoff(),
            Self::PickupToPickup => load.pickup(),
        }
    }
}

/// An n×n distance matrix over loads, stored in row-major order, together
/// with each row's neighbors sorted by distance.
///
/// The matrix is sized to the number of loads. Diagonal entries are zero and
/// a load is never its own neighbor.
///
/// # Examples
///
/// ```
/// use greedy_vrp::models::{Coordinate, Load, PlannedSet};
/// use greedy_vrp::distance::{DistanceIndex, ReferencePoints};
///
/// let loads = vec![
///     Load::new(1, Coordinate::new(0.0, 0.0), Coordinate::new(3.0, 0.0)),
///     Load::new(2, Coordinate::new(3.0, 4.0), Coordinate::new(6.0, 8.0)),
/// ];
/// let index = DistanceIndex::build(&loads, ReferencePoints::DropoffToPickup);
/// assert!((index.get(0, 1) - 4.0).abs() < 1e-10);
/// assert_eq!(index.size(), 2);
///
/// let planned = PlannedSet::new(2);
/// assert_eq!(index.nearest_unplanned(0, &planned), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceIndex {
    data: Vec<f64>,
    size: usize,
    neighbors: Vec<Vec<usize>>,
    reference: ReferencePoints,
}

impl DistanceIndex {
    /// Computes the index for `loads` using the given reference points.
    pub fn build(loads: &[Load], reference: ReferencePoints) -> Self {
        let n = loads.len();
        let mut data = vec![0.0; n * n];
        for (i, from) in loads.iter().enumerate() {
            let exit = reference.exit(from);
            for (j, to) in loads.iter().enumerate() {
                if i != j {
                    data[i * n + j] = exit.distance_to(&to.pickup());
                }
            }
        }

        let neighbors = (0..n)
            .map(|i| sorted_neighbors(&data[i * n..(i + 1) * n], i))
            .collect();

        debug!("built {}x{} distance index ({:?})", n, n, reference);

        Self {
            data,
            size: n,
            neighbors,
            reference,
        }
    }

    /// Returns the distance from load `from` to load `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Distances from load `from` to every load.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Number of loads in this index.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Reference points the entries were computed between.
    pub fn reference(&self) -> ReferencePoints {
        self.reference
    }

    #[cfg(test)]
    fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the closest unplanned load to `from`.
    ///
    /// Ties go to the lower catalog index. Returns `None` when every other
    /// load is planned.
    pub fn nearest_unplanned(&self, from: usize, planned: &PlannedSet) -> Option<usize> {
        self.neighbors[from]
            .iter()
            .copied()
            .find(|&j| !planned.contains(j))
    }
}

/// Returns the closest unplanned load in a single matrix row.
///
/// Sorts the row on every call; [`DistanceIndex::nearest_unplanned`] gives
/// the same answer from presorted neighbor lists.
pub fn nearest_in_row(row: &[f64], from: usize, planned: &PlannedSet) -> Option<usize> {
    sorted_neighbors(row, from)
        .into_iter()
        .find(|&j| !planned.contains(j))
}

// Stable sort, so equal distances keep ascending index order.
fn sorted_neighbors(row: &[f64], from: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..row.len()).filter(|&j| j != from).collect();
    order.sort_by(|&a, &b| row[a].total_cmp(&row[b]));
    order
}
