use crate::point_index::BalancedPointIndex;
use common::shapes::Rectangle;

// Child order inside an internal node.
pub(crate) const NE: usize = 0;
pub(crate) const NW: usize = 1;
pub(crate) const SW: usize = 2;
pub(crate) const SE: usize = 3;

pub(crate) enum NodeKind {
    Internal { children: [u32; 4] },
    Leaf { leaf: u32 },
}

pub(crate) struct PartitionNode {
    pub(crate) region: Rectangle,
    pub(crate) level: u32,
    pub(crate) kind: NodeKind,
}

pub(crate) struct Leaf {
    pub(crate) region: Rectangle,
    pub(crate) index: BalancedPointIndex,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// A place already stood at the coordinate; the new services were added to it.
    Merged,
}

#[cfg(feature = "query_stats")]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryStats {
    pub query_calls: u64,
    pub node_visits: u64,
    pub place_visits: u64,
}

#[cfg(not(feature = "query_stats"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryStats;

/// West/north halves get `w / 2` and `h / 2`; east/south get the rest, so odd sizes still
/// tile the parent exactly.
#[inline(always)]
pub(crate) fn midpoint(region: &Rectangle) -> (i64, i64) {
    (
        region.left() + (region.width / 2) as i64,
        region.top() + (region.height / 2) as i64,
    )
}

pub(crate) fn split_region(region: &Rectangle) -> [Rectangle; 4] {
    let (mx, my) = midpoint(region);
    let (left, top, right, bottom) = (region.left(), region.top(), region.right(), region.bottom());
    let mut quads = [Rectangle::default(); 4];
    quads[NE] = Rectangle::from_edges(mx, top, right, my);
    quads[NW] = Rectangle::from_edges(left, top, mx, my);
    quads[SW] = Rectangle::from_edges(left, my, mx, bottom);
    quads[SE] = Rectangle::from_edges(mx, my, right, bottom);
    quads
}

/// Child slot holding `(x, y)`. Uses the same midpoint as [`split_region`], so a point always
/// lands in the child whose region contains it.
#[inline(always)]
pub(crate) fn quadrant_of(region: &Rectangle, x: i32, y: i32) -> usize {
    let (mx, my) = midpoint(region);
    let west = (x as i64) < mx;
    let north = (y as i64) < my;
    match (west, north) {
        (false, true) => NE,
        (true, true) => NW,
        (true, false) => SW,
        (false, false) => SE,
    }
}
