use super::types::NodeKind;
use super::SpatialPartition;
use common::shapes::Rectangle;
use common::{Place, ServiceMask, ServiceTag};
use log::trace;
use smallvec::SmallVec;

type NodeStack = SmallVec<[u32; 64]>;

impl SpatialPartition {
    /// Places inside `range` offering `service`.
    ///
    /// Order within one leaf is ascending `(x, y)`; across leaves it is unspecified, so sort
    /// the result if a global order matters.
    pub fn range_query<T: ServiceTag>(&self, range: &Rectangle, service: T) -> Vec<Place> {
        let mut found = Vec::new();
        self.range_query_into(range, service, &mut found);
        found
    }

    pub fn range_query_into<T: ServiceTag>(
        &self,
        range: &Rectangle,
        service: T,
        found: &mut Vec<Place>,
    ) {
        self.range_query_mask_with(range, ServiceMask::of(service), |place| found.push(*place));
    }

    pub fn range_query_with<T, F>(&self, range: &Rectangle, service: T, f: F)
    where
        T: ServiceTag,
        F: FnMut(&Place),
    {
        self.range_query_mask_with(range, ServiceMask::of(service), f);
    }

    /// Like [`Self::range_query_with`], but a place must offer every service in `filter`.
    /// An empty filter matches every place.
    pub fn range_query_mask_with<F>(&self, range: &Rectangle, filter: ServiceMask, mut f: F)
    where
        F: FnMut(&Place),
    {
        let mut node_visits = 0;
        let mut place_visits = 0;
        let mut stack = NodeStack::new();
        if self.nodes[self.root as usize].region.intersects(range) {
            stack.push(self.root);
        }
        while let Some(id) = stack.pop() {
            node_visits += 1;
            match self.nodes[id as usize].kind {
                NodeKind::Internal { children } => {
                    for child in children {
                        if self.nodes[child as usize].region.intersects(range) {
                            stack.push(child);
                        }
                    }
                }
                NodeKind::Leaf { leaf } => {
                    let index = &self.leaves[leaf as usize].index;
                    place_visits += index.range_collect_with(range, filter, &mut f);
                }
            }
        }
        trace!(
            "range query {:?} visited {} nodes, {} places",
            range,
            node_visits,
            place_visits
        );
        self.record_query(node_visits, place_visits);
    }
}
