//! Static quadtree over the index bounds. The tree is subdivided once, at construction, and
//! each leaf stores its places in a [`BalancedPointIndex`].

mod api;
mod config;
mod core;
mod query_circle;
mod query_rect;
mod types;

pub use config::Config;
pub use types::{InsertOutcome, QueryStats};

use crate::point_index::BalancedPointIndex;
use common::shapes::Rectangle;
use types::{Leaf, PartitionNode};

#[cfg(feature = "query_stats")]
use std::cell::Cell;

pub struct SpatialPartition {
    nodes: Vec<PartitionNode>,
    leaves: Vec<Leaf>,
    root: u32,
    bounds: Rectangle,
    config: Config,
    len: usize,
    #[cfg(feature = "query_stats")]
    query_stats: Cell<QueryStats>,
}

impl SpatialPartition {
    /// Every leaf's region and point index, in construction order.
    pub fn leaves(&self) -> impl Iterator<Item = (&Rectangle, &BalancedPointIndex)> + '_ {
        self.leaves.iter().map(|leaf| (&leaf.region, &leaf.index))
    }
}

impl std::fmt::Debug for SpatialPartition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpatialPartition")
            .field("bounds", &self.bounds)
            .field("nodes", &self.nodes.len())
            .field("leaves", &self.leaves.len())
            .field("len", &self.len)
            .finish()
    }
}
