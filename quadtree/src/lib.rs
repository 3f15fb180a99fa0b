//! Hybrid spatial index for service-tagged places.
//!
//! A [`SpatialPartition`] is a quadtree whose shape is fixed when it is built; every leaf owns
//! a [`BalancedPointIndex`], an AVL tree keyed by `(x, y)`, which holds the places of that leaf.

pub mod error;
pub mod point_index;
pub mod quadtree;

pub use common::{shapes, Place, ServiceBit, ServiceMask, ServiceTag, ServiceType};
pub use error::{PlaceIndexError, PlaceIndexResult};
pub use point_index::{BalancedPointIndex, IndexInsert, NodeId};
pub use quadtree::{Config, InsertOutcome, QueryStats, SpatialPartition};

pub type QuadTree = SpatialPartition;
