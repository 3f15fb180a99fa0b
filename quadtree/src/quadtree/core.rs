use super::types::{split_region, quadrant_of, Leaf, NodeKind, PartitionNode};
use super::{Config, SpatialPartition};
use crate::error::{PlaceIndexError, PlaceIndexResult};
use crate::point_index::BalancedPointIndex;
use common::shapes::Rectangle;
use log::debug;

impl SpatialPartition {
    /// Builds the tree for `bounds`, splitting down to `max_depth` levels with the default
    /// [`Config`] otherwise.
    pub fn new(bounds: Rectangle, max_depth: u32) -> PlaceIndexResult<Self> {
        Self::new_with_config(
            bounds,
            Config {
                max_depth,
                ..Config::default()
            },
        )
    }

    /// The shape of the tree depends only on `bounds` and `config`; it never changes after
    /// this returns, however many places are inserted.
    pub fn new_with_config(bounds: Rectangle, config: Config) -> PlaceIndexResult<Self> {
        let coord_end = i32::MAX as i64 + 1;
        if bounds.right() > coord_end || bounds.bottom() > coord_end {
            return Err(PlaceIndexError::InvalidBounds { bounds });
        }

        let mut tree = Self {
            nodes: Vec::new(),
            leaves: Vec::new(),
            root: 0,
            bounds,
            config,
            len: 0,
            #[cfg(feature = "query_stats")]
            query_stats: Default::default(),
        };
        tree.root = tree.build_node(bounds, 0);
        debug!(
            "built partition over {:?}: {} nodes, {} leaves, depth {}",
            bounds,
            tree.nodes.len(),
            tree.leaves.len(),
            tree.depth()
        );
        Ok(tree)
    }

    fn should_split(&self, region: &Rectangle, level: u32) -> bool {
        level < self.config.max_depth
            && region.width > 1
            && region.height > 1
            && region.area() > self.config.node_capacity
    }

    // Children are pushed before their parent, so the root is the last node.
    fn build_node(&mut self, region: Rectangle, level: u32) -> u32 {
        let kind = if self.should_split(&region, level) {
            let mut children = [0u32; 4];
            for (child, quad) in children.iter_mut().zip(split_region(&region)) {
                *child = self.build_node(quad, level + 1);
            }
            NodeKind::Internal { children }
        } else {
            let leaf = self.leaves.len() as u32;
            self.leaves.push(Leaf {
                region,
                index: BalancedPointIndex::with_capacity(self.config.leaf_reserve),
            });
            NodeKind::Leaf { leaf }
        };
        let id = self.nodes.len() as u32;
        self.nodes.push(PartitionNode {
            region,
            level,
            kind,
        });
        id
    }

    /// Leaf slot owning `(x, y)`, or `None` outside the bounds. Containment is only checked
    /// here at the root; every level below picks a quadrant by midpoint comparison.
    pub(crate) fn leaf_for(&self, x: i32, y: i32) -> Option<usize> {
        if !self.bounds.contains_point(x, y) {
            return None;
        }
        let mut node = &self.nodes[self.root as usize];
        loop {
            match node.kind {
                NodeKind::Internal { children } => {
                    node = &self.nodes[children[quadrant_of(&node.region, x, y)] as usize];
                }
                NodeKind::Leaf { leaf } => return Some(leaf as usize),
            }
        }
    }

    pub(crate) fn leaf_index(&self, x: i32, y: i32) -> Option<&BalancedPointIndex> {
        self.leaf_for(x, y).map(|leaf| &self.leaves[leaf].index)
    }

    pub(crate) fn leaf_index_mut(&mut self, x: i32, y: i32) -> Option<&mut BalancedPointIndex> {
        let leaf = self.leaf_for(x, y)?;
        Some(&mut self.leaves[leaf].index)
    }
}
