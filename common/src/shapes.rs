use rand::Rng;
use std::fmt::Debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub trait Shape: Debug {
    fn bounding_box(&self) -> Rectangle;
    fn contains_point(&self, x: i32, y: i32) -> bool;
}

/// Squared euclidean distance between two integer points, exact over the whole `i32` range.
#[inline(always)]
pub fn distance_sq(ax: i32, ay: i32, bx: i32, by: i32) -> u128 {
    let dx = (ax as i64 - bx as i64).unsigned_abs() as u128;
    let dy = (ay as i64 - by as i64).unsigned_abs() as u128;
    dx * dx + dy * dy
}

/// Whether a point `sqrt(distance_sq)` away lies within `radius`, decided exactly.
///
/// A finite `f64` is `m * 2^e` for integers `m` and `e`, so `distance_sq <= radius^2` is
/// checked as `distance_sq * 2^(-2e) <= m^2` without any rounding.
pub fn within_distance(distance_sq: u128, radius: f64) -> bool {
    if radius.is_nan() || radius < 0.0 {
        return false;
    }
    // Two i32 points are never 2^33 apart.
    if radius >= MAX_POINT_DISTANCE {
        return true;
    }
    if distance_sq == 0 {
        return true;
    }
    let bits = radius.to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exp) = if exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), exponent - 1075)
    };
    let mantissa_sq = mantissa as u128 * mantissa as u128;
    // radius < 2^33 with a 53-bit mantissa keeps exp negative.
    let shift = (-2 * exp) as u32;
    if shift >= u128::BITS || distance_sq.leading_zeros() < shift {
        return false;
    }
    distance_sq << shift <= mantissa_sq
}

const MAX_POINT_DISTANCE: f64 = 8_589_934_592.0;

fn square_edges(x: i32, y: i32, radius: f64) -> Option<(i64, i64, i64, i64)> {
    if radius.is_nan() || radius < 0.0 {
        return None;
    }
    // Anything past this covers the whole i32 plane anyway.
    let r = radius.floor().min(u32::MAX as f64) as i64;
    let (x, y) = (x as i64, y as i64);
    Some((x - r, y - r, x + r + 1, y + r + 1))
}

/// Half-open axis-aligned box `[x, x + width) x [y, y + height)`.
///
/// Edges are computed in `i64`, so `right()`/`bottom()` never overflow even when the box
/// reaches the end of the `i32` range.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds the smallest box whose edges lie at `i64` coordinates `[left, right)`,
    /// clamped to what an `i32` origin and `u32` size can express.
    pub fn from_edges(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        let left = left.clamp(i32::MIN as i64, i32::MAX as i64);
        let top = top.clamp(i32::MIN as i64, i32::MAX as i64);
        let width = u32::try_from((right - left).max(0)).unwrap_or(u32::MAX);
        let height = u32::try_from((bottom - top).max(0)).unwrap_or(u32::MAX);
        Self {
            x: left as i32,
            y: top as i32,
            width,
            height,
        }
    }

    /// The closed square `[x - r, x + r] x [y - r, y + r]` with `r = floor(radius)`.
    ///
    /// A square wider than `u32::MAX` loses its far edge; use [`Self::around_within`] when the
    /// result must reach `i32::MAX`.
    pub fn around(x: i32, y: i32, radius: f64) -> Self {
        match square_edges(x, y, radius) {
            Some((left, top, right, bottom)) => Self::from_edges(left, top, right, bottom),
            None => Self::new(x, y, 0, 0),
        }
    }

    /// [`Self::around`] intersected with `clip`. The edges are clipped before the box is built,
    /// so the result is exact whenever `clip` is.
    pub fn around_within(x: i32, y: i32, radius: f64, clip: &Rectangle) -> Self {
        match square_edges(x, y, radius) {
            Some((left, top, right, bottom)) => Self::from_edges(
                left.max(clip.left()),
                top.max(clip.top()),
                right.min(clip.right()),
                bottom.min(clip.bottom()),
            ),
            None => Self::new(x, y, 0, 0),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn left(&self) -> i64 {
        self.x as i64
    }

    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    pub fn top(&self) -> i64 {
        self.y as i64
    }

    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn center(&self) -> (i64, i64) {
        (
            self.left() + (self.width / 2) as i64,
            self.top() + (self.height / 2) as i64,
        )
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        let (x, y) = (x as i64, y as i64);
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }

    /// Separating-axis test on two half-open boxes. Empty boxes intersect nothing.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// True when `other` lies entirely inside `self`.
    pub fn contains_rect(&self, other: &Rectangle) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }

    pub fn expand_to_include(&mut self, other: &Rectangle) {
        let left = i64::min(self.left(), other.left());
        let right = i64::max(self.right(), other.right());
        let top = i64::min(self.top(), other.top());
        let bottom = i64::max(self.bottom(), other.bottom());
        *self = Self::from_edges(left, top, right, bottom);
    }

    /// Uniformly random integer point inside the box, or `None` when it is empty.
    pub fn random_point_inside<R: Rng>(&self, rng: &mut R) -> Option<(i32, i32)> {
        if self.is_empty() {
            return None;
        }
        Some((
            self._safe_rand(rng, self.left(), self.right()),
            self._safe_rand(rng, self.top(), self.bottom()),
        ))
    }

    fn _safe_rand<R: Rng>(&self, rng: &mut R, min: i64, max: i64) -> i32 {
        let max = max.min(i32::MAX as i64 + 1);
        if min >= max {
            return min as i32;
        }
        rng.gen_range(min..max) as i32
    }
}

impl Shape for Rectangle {
    fn bounding_box(&self) -> Rectangle {
        *self
    }

    fn contains_point(&self, x: i32, y: i32) -> bool {
        Rectangle::contains_point(self, x, y)
    }
}

/// Closed disc around an integer center.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Circle {
    pub x: i32,
    pub y: i32,
    pub radius: f64,
}

impl Circle {
    pub fn new(x: i32, y: i32, radius: f64) -> Self {
        Self { x, y, radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// A NaN or negative radius describes no disc at all.
    pub fn is_valid(&self) -> bool {
        self.radius >= 0.0
    }

    pub fn distance_sq_to(&self, x: i32, y: i32) -> u128 {
        distance_sq(self.x, self.y, x, y)
    }

    /// Bounding box clipped to `clip`; see [`Rectangle::around_within`].
    pub fn bounding_box_within(&self, clip: &Rectangle) -> Rectangle {
        Rectangle::around_within(self.x, self.y, self.radius, clip)
    }
}

impl Shape for Circle {
    fn bounding_box(&self) -> Rectangle {
        Rectangle::around(self.x, self.y, self.radius)
    }

    fn contains_point(&self, x: i32, y: i32) -> bool {
        within_distance(self.distance_sq_to(x, y), self.radius)
    }
}
