//! Spatial indexing for efficient neighbor queries.
//!
//! Wraps a KD-tree over one population's positions. Trees are rebuilt by the
//! tick driver at the points in the tick where the indexed positions are
//! final, so queries never see a moved entity at a stale location; entities
//! killed mid-tick remain in the tree and are filtered by their liveness flag
//! at the call site.

use kdtree::distance::squared_euclidean;
use kdtree::{ErrorKind as KdTreeError, KdTree};
use ndarray::Array1;

use super::cell::Cell;

/// Type alias for the 2D spatial KD-tree used for neighbor queries.
pub type Tree2D = KdTree<f64, usize, Vec<f64>>;

/// KD-tree index over one population, mapping positions to vector indices.
pub struct PopulationIndex {
    tree: Tree2D,
}

impl PopulationIndex {
    /// Builds an index over the current positions of a population.
    ///
    /// # Arguments
    ///
    /// * `cells` - The population to index
    ///
    /// # Returns
    ///
    /// An index, or an error if tree building fails.
    pub fn build(cells: &[Cell]) -> Result<Self, KdTreeError> {
        let mut tree = KdTree::with_capacity(2, cells.len());
        for (i, cell) in cells.iter().enumerate() {
            tree.add(cell.pos.to_vec(), i)?;
        }
        Ok(Self { tree })
    }

    /// Queries population members within a radius.
    ///
    /// # Arguments
    ///
    /// * `pos` - Center position for the query
    /// * `radius` - Search radius (will be squared internally)
    ///
    /// # Returns
    ///
    /// Vector of (`distance_squared`, index) pairs within the radius.
    pub fn within(&self, pos: &Array1<f64>, radius: f64) -> Vec<(f64, usize)> {
        self.tree
            .within(&pos.to_vec(), radius.powi(2), &squared_euclidean)
            .unwrap_or_default()
            .into_iter()
            .map(|(dist_sq, &idx)| (dist_sq, idx))
            .collect()
    }

    /// Finds the nearest population member satisfying a predicate.
    ///
    /// Members are visited in ascending distance order, so the first match is
    /// the closest satisfying one; equidistant members tie-break in tree
    /// iteration order.
    pub fn nearest_where(
        &self,
        pos: &Array1<f64>,
        mut predicate: impl FnMut(usize) -> bool,
    ) -> Option<usize> {
        let point = pos.to_vec();
        let nearest = self.tree.iter_nearest(&point, &squared_euclidean).ok()?;
        nearest.map(|(_, &idx)| idx).find(|&idx| predicate(idx))
    }
}
