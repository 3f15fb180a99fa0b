//! Service tags and the per-place service bitmask.
//!
//! The catalog of services is owned by whoever feeds the index; all the index needs is a
//! stable bit position per tag, which is what [`ServiceTag`] provides.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const MAX_SERVICES: u32 = u64::BITS;

/// A bit position in `0..64`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceBit(u8);

impl ServiceBit {
    pub const fn new(index: u32) -> Option<Self> {
        if index < MAX_SERVICES {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    pub const fn index(self) -> u32 {
        self.0 as u32
    }

    #[inline(always)]
    pub const fn mask(self) -> u64 {
        1u64 << self.0
    }
}

pub trait ServiceTag: Copy {
    fn service_bit(self) -> ServiceBit;
}

impl ServiceTag for ServiceBit {
    fn service_bit(self) -> ServiceBit {
        self
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum ServiceType {
    Restaurant,
    Hotel,
    Supermarket,
    GasStation,
    Cafe,
    Hospital,
    Gym,
    Library,
    School,
    Bank,
    Atm,
}

impl ServiceType {
    pub const ALL: [ServiceType; 11] = [
        ServiceType::Restaurant,
        ServiceType::Hotel,
        ServiceType::Supermarket,
        ServiceType::GasStation,
        ServiceType::Cafe,
        ServiceType::Hospital,
        ServiceType::Gym,
        ServiceType::Library,
        ServiceType::School,
        ServiceType::Bank,
        ServiceType::Atm,
    ];
}

impl ServiceTag for ServiceType {
    fn service_bit(self) -> ServiceBit {
        ServiceBit(self as u8)
    }
}

/// Set of services offered by a place, one bit per [`ServiceBit`].
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ServiceMask(u64);

impl ServiceMask {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub fn of<T: ServiceTag>(tag: T) -> Self {
        Self(tag.service_bit().mask())
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub fn insert<T: ServiceTag>(&mut self, tag: T) {
        self.0 |= tag.service_bit().mask();
    }

    pub fn remove<T: ServiceTag>(&mut self, tag: T) {
        self.0 &= !tag.service_bit().mask();
    }

    pub fn contains<T: ServiceTag>(self, tag: T) -> bool {
        self.0 & tag.service_bit().mask() != 0
    }

    /// Every bit set in `other` is also set here. The empty mask is contained in everything.
    pub const fn contains_all(self, other: ServiceMask) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: ServiceMask) -> Self {
        Self(self.0 | other.0)
    }

    pub fn iter(self) -> impl Iterator<Item = ServiceBit> {
        let mut remaining = self.0;
        std::iter::from_fn(move || {
            if remaining == 0 {
                return None;
            }
            let index = remaining.trailing_zeros();
            remaining &= remaining - 1;
            ServiceBit::new(index)
        })
    }
}

impl<T: ServiceTag> FromIterator<T> for ServiceMask {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut mask = ServiceMask::empty();
        for tag in iter {
            mask.insert(tag);
        }
        mask
    }
}

impl fmt::Debug for ServiceMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(ServiceBit::index)).finish()
    }
}
