// Copyright 2024 the clp-core authors under the terms of the MIT License as detailed
// in the accompanying file LICENSE or <https://opensource.org/licenses/MIT>.

//! `FreeSpace`: the maximal set of empty cuboids inside a block.

use crate::config::EngineConfig;
use crate::geom::{Aabb, ContainerDims, Space};
use crate::items::ItemMultiset;

/// An unordered, non-redundant collection of `Space`s: no live space is a
/// strict subset of another.
#[derive(Clone, Debug, Default)]
pub struct FreeSpace {
    spaces: Vec<Space>,
}

impl FreeSpace {
    pub fn new() -> Self {
        FreeSpace { spaces: Vec::new() }
    }

    pub fn from_single(space: Space) -> Self {
        FreeSpace {
            spaces: vec![space],
        }
    }

    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    pub fn push(&mut self, space: Space) {
        self.spaces.push(space);
    }

    /// Updates the free-space set after a placement of `placed` (§4.5).
    pub fn crop(&mut self, placed: &Aabb, container: ContainerDims, config: &EngineConfig) {
        let mut untouched = Vec::with_capacity(self.spaces.len());
        let mut new_pieces = Vec::new();

        for space in self.spaces.drain(..) {
            if space.aabb().touch_intersects(placed) {
                if space.aabb().strict_intersects(placed) {
                    new_pieces.extend(space.subtract(placed, container, config));
                } else {
                    new_pieces.push(space);
                }
            } else {
                untouched.push(space);
            }
        }

        remove_nonmaximal(&mut new_pieces);
        untouched.extend(new_pieces);
        self.spaces = untouched;
    }

    /// The live space with minimum priority; ties broken by insertion order.
    pub fn closest_space(&self) -> Option<&Space> {
        self.spaces.iter().min_by_key(|s| s.priority())
    }

    /// Drops every space too small to fit any box type with positive
    /// remaining count, without considering rotation.
    pub fn filter(&mut self, items: &ItemMultiset) {
        self.spaces.retain(|space| {
            items
                .iter()
                .any(|(bt, &qty)| qty > 0 && space.aabb().fits_dims(bt.l, bt.w, bt.h))
        });
    }
}

/// Sorts `spaces` by volume descending and drops any space strictly
/// contained in an earlier (larger-or-equal-volume) one. Idempotent:
/// running it again on its own output is a no-op.
fn remove_nonmaximal(spaces: &mut Vec<Space>) {
    spaces.sort_by(|a, b| b.aabb().volume().cmp(&a.aabb().volume()));
    let mut dropped = vec![false; spaces.len()];
    for i in 0..spaces.len() {
        if dropped[i] {
            continue;
        }
        for j in (i + 1)..spaces.len() {
            if dropped[j] {
                continue;
            }
            if spaces[i].aabb().contains(spaces[j].aabb()) {
                dropped[j] = true;
            }
        }
    }
    let mut idx = 0;
    spaces.retain(|_| {
        let keep = !dropped[idx];
        idx += 1;
        keep
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxtype::BoxType;
    use crate::config::FillingPolicy;

    fn container() -> ContainerDims {
        ContainerDims {
            l: 20,
            w: 20,
            h: 20,
        }
    }

    fn config() -> EngineConfig {
        EngineConfig {
            filling_policy: FillingPolicy::Origin,
            vertical_stability: true,
        }
    }

    fn space(aabb: Aabb) -> Space {
        Space::new(aabb, container(), &config())
    }

    #[test]
    fn remove_nonmaximal_drops_contained_piece() {
        let mut spaces = vec![
            space(Aabb::new(0, 10, 0, 10, 0, 10).unwrap()),
            space(Aabb::new(0, 5, 0, 5, 0, 5).unwrap()),
        ];
        remove_nonmaximal(&mut spaces);
        assert_eq!(spaces.len(), 1);
        assert_eq!(spaces[0].aabb(), &Aabb::new(0, 10, 0, 10, 0, 10).unwrap());
    }

    #[test]
    fn remove_nonmaximal_is_idempotent() {
        let mut spaces = vec![
            space(Aabb::new(0, 10, 0, 10, 0, 10).unwrap()),
            space(Aabb::new(0, 10, 0, 5, 0, 10).unwrap()),
            space(Aabb::new(5, 15, 0, 10, 0, 10).unwrap()),
        ];
        remove_nonmaximal(&mut spaces);
        let once = spaces.clone();
        remove_nonmaximal(&mut spaces);
        assert_eq!(spaces.len(), once.len());
    }

    #[test]
    fn crop_is_noop_when_nothing_touches() {
        let mut fs = FreeSpace::from_single(space(Aabb::new(0, 10, 0, 10, 0, 10).unwrap()));
        let placed = Aabb::new(100, 110, 100, 110, 100, 110).unwrap();
        fs.crop(&placed, container(), &config());
        assert_eq!(fs.spaces().len(), 1);
    }

    #[test]
    fn crop_after_center_placement_leaves_three_slabs() {
        let mut fs = FreeSpace::from_single(space(Aabb::new(0, 20, 0, 20, 0, 20).unwrap()));
        let placed = Aabb::new(0, 10, 0, 10, 0, 10).unwrap();
        fs.crop(&placed, container(), &config());
        assert_eq!(fs.spaces().len(), 3);
    }

    #[test]
    fn filter_drops_spaces_too_small_for_any_remaining_item() {
        let mut fs = FreeSpace::from_single(space(Aabb::new(0, 5, 0, 5, 0, 5).unwrap()));
        let mut items = ItemMultiset::new();
        items.set(BoxType::new(1, 10, 10, 10, false, false, false, 1), 3);
        fs.filter(&items);
        assert!(fs.is_empty());
    }
}
