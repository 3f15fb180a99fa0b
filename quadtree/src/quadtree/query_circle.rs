use super::SpatialPartition;
use crate::error::{PlaceIndexError, PlaceIndexResult};
use common::shapes::{Circle, Shape};
use common::{Place, ServiceMask, ServiceTag};

impl SpatialPartition {
    /// Places within `circle` (boundary included) offering `service`, in no particular order.
    pub fn disc_query<T: ServiceTag>(
        &self,
        circle: &Circle,
        service: T,
    ) -> PlaceIndexResult<Vec<Place>> {
        if !circle.is_valid() {
            return Err(PlaceIndexError::InvalidCircleRadius {
                radius: circle.radius(),
            });
        }
        let candidates = circle.bounding_box_within(&self.bounds);
        let mut found = Vec::new();
        self.range_query_mask_with(&candidates, ServiceMask::of(service), |place| {
            if circle.contains_point(place.x(), place.y()) {
                found.push(*place);
            }
        });
        Ok(found)
    }

    /// Up to `k` places offering `service` within `max_distance` of `(x, y)`, nearest first.
    ///
    /// Candidates come from a range query over the disc's bounding square, clipped to the
    /// index bounds, and are then sorted exactly; equal distances keep their query order, which
    /// within a leaf is ascending `(x, y)`. A negative or NaN `max_distance` finds nothing.
    pub fn find_nearest_by_service<T: ServiceTag>(
        &self,
        x: i32,
        y: i32,
        service: T,
        max_distance: f64,
        k: usize,
    ) -> Vec<Place> {
        let circle = Circle::new(x, y, max_distance);
        if k == 0 || !circle.is_valid() {
            return Vec::new();
        }
        let area = circle.bounding_box_within(&self.bounds);
        let mut candidates = Vec::new();
        self.range_query_mask_with(&area, ServiceMask::of(service), |place| {
            if circle.contains_point(place.x(), place.y()) {
                candidates.push((circle.distance_sq_to(place.x(), place.y()), *place));
            }
        });
        candidates.sort_by_key(|(distance_sq, _)| *distance_sq);
        candidates.truncate(k);
        candidates.into_iter().map(|(_, place)| place).collect()
    }
}
