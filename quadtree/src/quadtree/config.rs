#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Config {
    /// Deepest level a region may be split to; the root is level 0.
    pub max_depth: u32,
    /// Regions whose area is at most this many square units are not split further. The
    /// default of 1 leaves the split to `max_depth` and the region size alone.
    pub node_capacity: u64,
    /// Node slots pre-allocated in every leaf's point index.
    pub leaf_reserve: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_depth: 8,
            node_capacity: 1,
            leaf_reserve: 0,
        }
    }
}
