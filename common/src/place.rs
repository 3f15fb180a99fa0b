use crate::services::{ServiceMask, ServiceTag};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point of interest and the services it offers.
///
/// Identity is the coordinate alone: two places at the same `(x, y)` compare equal whatever
/// their services, and places order lexicographically by `(x, y)`.
#[derive(Debug, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Place {
    x: i32,
    y: i32,
    pub services: ServiceMask,
}

impl Place {
    pub fn new(x: i32, y: i32) -> Self {
        Self::with_services(x, y, ServiceMask::empty())
    }

    pub fn with_services(x: i32, y: i32, services: ServiceMask) -> Self {
        Self { x, y, services }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn coords(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn is_at(&self, x: i32, y: i32) -> bool {
        self.x == x && self.y == y
    }

    pub fn offers<T: ServiceTag>(&self, service: T) -> bool {
        self.services.contains(service)
    }

    pub fn add_service<T: ServiceTag>(&mut self, service: T) {
        self.services.insert(service);
    }

    pub fn remove_service<T: ServiceTag>(&mut self, service: T) {
        self.services.remove(service);
    }

    /// Orders this place's key against a bare coordinate.
    #[inline(always)]
    pub fn cmp_coords(&self, x: i32, y: i32) -> Ordering {
        (self.x, self.y).cmp(&(x, y))
    }
}

impl PartialEq for Place {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Place {}

impl Hash for Place {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.x, self.y).hash(state);
    }
}

impl PartialOrd for Place {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Place {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_coords(other.x, other.y)
    }
}
