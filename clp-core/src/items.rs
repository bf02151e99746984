// Copyright 2024 the clp-core authors under the terms of the MIT License as detailed
// in the accompanying file LICENSE or <https://opensource.org/licenses/MIT>.

//! `ItemMultiset`: a `BoxType -> count` map supporting the arithmetic and
//! partial order the engine needs to track remaining inventory.

use crate::boxtype::BoxType;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::ops::{AddAssign, SubAssign};

/// Mapping from `BoxType` to a (possibly transiently negative) count.
///
/// Missing keys are treated as count zero; `ItemMultiset` never
/// distinguishes "absent" from "present with count zero" for comparison or
/// arithmetic purposes.
#[derive(Clone, Debug, Default)]
pub struct ItemMultiset {
    counts: HashMap<BoxType, i64>,
}

impl ItemMultiset {
    pub fn new() -> Self {
        ItemMultiset {
            counts: HashMap::new(),
        }
    }

    pub fn get(&self, boxtype: &BoxType) -> i64 {
        self.counts.get(boxtype).copied().unwrap_or(0)
    }

    pub fn set(&mut self, boxtype: BoxType, qty: i64) {
        self.counts.insert(boxtype, qty);
    }

    pub fn add(&mut self, boxtype: BoxType, delta: i64) {
        *self.counts.entry(boxtype).or_insert(0) += delta;
    }

    pub fn is_empty(&self) -> bool {
        self.counts.values().all(|&qty| qty == 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BoxType, &i64)> {
        self.counts.iter()
    }
}

impl AddAssign<&ItemMultiset> for ItemMultiset {
    fn add_assign(&mut self, other: &ItemMultiset) {
        for (boxtype, qty) in other.counts.iter() {
            *self.counts.entry(*boxtype).or_insert(0) += qty;
        }
    }
}

impl SubAssign<&ItemMultiset> for ItemMultiset {
    fn sub_assign(&mut self, other: &ItemMultiset) {
        for (boxtype, qty) in other.counts.iter() {
            *self.counts.entry(*boxtype).or_insert(0) -= qty;
        }
    }
}

impl PartialEq for ItemMultiset {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

/// Componentwise partial order: `A <= B` iff every key's count in `A` is at
/// most the corresponding count in `B` (missing = 0). Two multisets with
/// counts that differ in both directions are incomparable (`None`).
impl PartialOrd for ItemMultiset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let mut has_less = false;
        let mut has_greater = false;
        let keys = self.counts.keys().chain(other.counts.keys());
        for boxtype in keys {
            match self.get(boxtype).cmp(&other.get(boxtype)) {
                Ordering::Less => has_less = true,
                Ordering::Greater => has_greater = true,
                Ordering::Equal => {}
            }
        }
        match (has_less, has_greater) {
            (false, false) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            (true, true) => None,
        }
    }
}
