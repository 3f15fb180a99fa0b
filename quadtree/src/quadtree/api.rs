use super::types::{InsertOutcome, NodeKind, QueryStats};
use super::{Config, SpatialPartition};
use crate::error::{PlaceIndexError, PlaceIndexResult};
use crate::point_index::IndexInsert;
use common::shapes::Rectangle;
use common::{Place, ServiceMask, ServiceTag};
use log::{trace, warn};

impl SpatialPartition {
    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn max_depth(&self) -> u32 {
        self.config.max_depth
    }

    /// Deepest level actually reached by the construction.
    pub fn depth(&self) -> u32 {
        self.nodes.iter().map(|node| node.level).max().unwrap_or(0)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds `place` to the leaf that owns its coordinate.
    ///
    /// If a place already stands there, the new services are merged into it and
    /// [`InsertOutcome::Merged`] is returned; nothing else about the stored place changes.
    pub fn insert(&mut self, place: Place) -> PlaceIndexResult<InsertOutcome> {
        let bounds = self.bounds;
        let Some(index) = self.leaf_index_mut(place.x(), place.y()) else {
            warn!(
                "rejected place ({}, {}) outside bounds {:?}",
                place.x(),
                place.y(),
                bounds
            );
            return Err(PlaceIndexError::OutOfBounds {
                x: place.x(),
                y: place.y(),
                bounds,
            });
        };
        match index.insert(place) {
            IndexInsert::Inserted(_) => {
                self.len += 1;
                Ok(InsertOutcome::Inserted)
            }
            IndexInsert::Occupied(id) => {
                if let Some(existing) = index.get_mut(id) {
                    existing.services = existing.services.union(place.services);
                    trace!(
                        "merged services into ({}, {}): {:?}",
                        place.x(),
                        place.y(),
                        existing.services
                    );
                }
                Ok(InsertOutcome::Merged)
            }
        }
    }

    /// Removes and returns the place at `(x, y)`.
    pub fn remove(&mut self, x: i32, y: i32) -> Option<Place> {
        let removed = self.leaf_index_mut(x, y)?.delete(x, y)?;
        self.len -= 1;
        Some(removed)
    }

    /// Whether a place was removed.
    pub fn delete(&mut self, x: i32, y: i32) -> bool {
        self.remove(x, y).is_some()
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&Place> {
        self.leaf_index(x, y)?.search(x, y)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some()
    }

    /// Sets `service` on the place at `(x, y)`. Returns whether the place exists.
    pub fn add_service<T: ServiceTag>(&mut self, x: i32, y: i32, service: T) -> bool {
        self.edit_place(x, y, |place| place.add_service(service))
    }

    /// Clears `service` on the place at `(x, y)`. Returns whether the place exists.
    pub fn remove_service<T: ServiceTag>(&mut self, x: i32, y: i32, service: T) -> bool {
        self.edit_place(x, y, |place| place.remove_service(service))
    }

    /// Replaces the whole service set of the place at `(x, y)`. Returns whether the place
    /// exists.
    pub fn set_services(&mut self, x: i32, y: i32, services: ServiceMask) -> bool {
        self.edit_place(x, y, |place| place.services = services)
    }

    fn edit_place<F>(&mut self, x: i32, y: i32, f: F) -> bool
    where
        F: FnOnce(&mut Place),
    {
        match self
            .leaf_index_mut(x, y)
            .and_then(|index| index.search_mut(x, y))
        {
            Some(place) => {
                f(place);
                true
            }
            None => false,
        }
    }

    /// Empties every leaf. The tree shape is kept.
    pub fn clear(&mut self) {
        for leaf in &mut self.leaves {
            leaf.index.clear();
        }
        self.len = 0;
    }

    pub fn all_places(&self, places: &mut Vec<Place>) {
        for leaf in &self.leaves {
            places.extend(leaf.index.iter().copied());
        }
    }

    pub fn leaf_regions(&self, regions: &mut Vec<Rectangle>) {
        regions.extend(self.nodes.iter().filter_map(|node| match node.kind {
            NodeKind::Leaf { .. } => Some(node.region),
            NodeKind::Internal { .. } => None,
        }));
    }

    #[inline(always)]
    pub(crate) fn record_query(&self, node_visits: usize, place_visits: usize) {
        #[cfg(feature = "query_stats")]
        {
            let mut stats = self.query_stats.get();
            stats.query_calls += 1;
            stats.node_visits += node_visits as u64;
            stats.place_visits += place_visits as u64;
            self.query_stats.set(stats);
        }
        #[cfg(not(feature = "query_stats"))]
        {
            let _ = (node_visits, place_visits);
        }
    }

    /// Returns the counters gathered since the last call and resets them. Always empty
    /// without the `query_stats` feature.
    pub fn take_query_stats(&self) -> QueryStats {
        #[cfg(feature = "query_stats")]
        {
            self.query_stats.take()
        }
        #[cfg(not(feature = "query_stats"))]
        {
            QueryStats::default()
        }
    }
}
