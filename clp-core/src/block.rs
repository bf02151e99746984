// Copyright 2024 the clp-core authors under the terms of the MIT License as detailed
// in the accompanying file LICENSE or <https://opensource.org/licenses/MIT>.

//! `Block`: a cuboidal aggregate of items, either a placed leaf, a virtual
//! composite candidate, or a live container tracking its own free space.

use crate::boxtype::{BoxType, Coord, Orientation};
use crate::config::EngineConfig;
use crate::error::Axis;
use crate::free_space::FreeSpace;
use crate::geom::{Aabb, ContainerDims, Space};
use crate::items::ItemMultiset;

/// Default fill-ratio gate used by `join` when the caller doesn't override
/// it (§4.6).
pub const DEFAULT_MIN_FILL_RATIO: f64 = 0.98;

#[derive(Clone, Debug)]
pub struct Block {
    pub l: Coord,
    pub w: Coord,
    pub h: Coord,
    pub items: ItemMultiset,
    pub occupied_volume: i64,
    pub weight: i64,
    pub children: Vec<Aabb>,
    pub free_space: FreeSpace,
    /// Carried but never interpreted by the core.
    pub tokens: Vec<String>,
}

impl Block {
    pub fn dims(&self) -> ContainerDims {
        ContainerDims {
            l: self.l,
            w: self.w,
            h: self.h,
        }
    }

    pub fn volume(&self) -> i64 {
        self.l as i64 * self.w as i64 * self.h as i64
    }

    /// A leaf block: a single `BoxType` in one orientation. No free space,
    /// no children.
    pub fn leaf(boxtype: &BoxType, orientation: Orientation) -> Block {
        let (l, w, h) = orientation.dims(boxtype);
        let mut items = ItemMultiset::new();
        items.set(*boxtype, 1);
        Block {
            l,
            w,
            h,
            items,
            occupied_volume: boxtype.volume(),
            weight: boxtype.weight,
            children: Vec::new(),
            free_space: FreeSpace::new(),
            tokens: Vec::new(),
        }
    }

    /// Duplicates scalar fields, items, and tokens. Free space and children
    /// are not carried — the caller reconstructs them if needed.
    pub fn copy_of(other: &Block) -> Block {
        Block {
            l: other.l,
            w: other.w,
            h: other.h,
            items: other.items.clone(),
            occupied_volume: other.occupied_volume,
            weight: other.weight,
            children: Vec::new(),
            free_space: FreeSpace::new(),
            tokens: other.tokens.clone(),
        }
    }

    /// A composite block of the given dims, with occupied volume and
    /// weight summed from `items`.
    pub fn composite(l: Coord, w: Coord, h: Coord, items: ItemMultiset) -> Block {
        let mut occupied_volume = 0i64;
        let mut weight = 0i64;
        for (boxtype, &qty) in items.iter() {
            occupied_volume += boxtype.volume() * qty;
            weight += boxtype.weight * qty;
        }
        Block {
            l,
            w,
            h,
            items,
            occupied_volume,
            weight,
            children: Vec::new(),
            free_space: FreeSpace::new(),
            tokens: Vec::new(),
        }
    }

    /// An empty container of the given dims: free space is initialized to
    /// a single `Space` covering the whole interior.
    pub fn container(l: Coord, w: Coord, h: Coord, config: &EngineConfig) -> Block {
        let dims = ContainerDims { l, w, h };
        let whole = Aabb::new(0, l, 0, w, 0, h).expect("container dims must be positive");
        let space = Space::new(whole, dims, config);
        Block {
            l,
            w,
            h,
            items: ItemMultiset::new(),
            occupied_volume: 0,
            weight: 0,
            children: Vec::new(),
            free_space: FreeSpace::from_single(space),
            tokens: Vec::new(),
        }
    }

    /// Positions `child` at `(x, y, z)` in block-local coordinates.
    ///
    /// Preconditions (caller-enforced, not checked here): `child` fits
    /// within at least one live space, and `self.items` has enough
    /// remaining inventory — callers should check `is_constructible`
    /// against their pool before calling this.
    pub fn add(&mut self, child: &Block, x: Coord, y: Coord, z: Coord, config: &EngineConfig) {
        let aabb = Aabb::new(x, x + child.l, y, y + child.w, z, z + child.h)
            .expect("child placement must be a valid extent");
        self.children.push(aabb);
        self.occupied_volume += child.occupied_volume;
        self.weight += child.weight;
        self.items += &child.items;
        let dims = self.dims();
        self.free_space.crop(&aabb, dims, config);
    }

    /// Tries to stack `self` and `other` along `axis`. On success, mutates
    /// `self` into the joined block and returns `true`; on failure (fill
    /// ratio below `min_fr`), leaves `self` unchanged and returns `false`.
    pub fn join(&mut self, other: &Block, axis: Axis, min_fr: f64) -> bool {
        let (l, w, h) = match axis {
            Axis::X => (self.l + other.l, self.w.max(other.w), self.h.max(other.h)),
            Axis::Y => (self.l.max(other.l), self.w + other.w, self.h.max(other.h)),
            Axis::Z => (self.l.max(other.l), self.w.max(other.w), self.h + other.h),
        };
        let volume = l as i64 * w as i64 * h as i64;
        let occupied = self.occupied_volume + other.occupied_volume;
        let fill_ratio = occupied as f64 / volume as f64;
        if fill_ratio < min_fr {
            return false;
        }
        self.l = l;
        self.w = w;
        self.h = h;
        self.occupied_volume = occupied;
        self.weight += other.weight;
        self.items += &other.items;
        true
    }

    /// True iff this block's items are affordable against `pool`.
    pub fn is_constructible(&self, pool: &ItemMultiset) -> bool {
        self.items <= *pool
    }

    /// True iff this block fits inside a container of dims `container`,
    /// axis-wise (no rotation considered here — orientation is already
    /// materialized on leaves).
    pub fn fits_container(&self, container: ContainerDims) -> bool {
        self.l <= container.l && self.w <= container.w && self.h <= container.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FillingPolicy;

    fn config() -> EngineConfig {
        EngineConfig {
            filling_policy: FillingPolicy::Origin,
            vertical_stability: true,
        }
    }

    fn boxtype(id: u32) -> BoxType {
        BoxType::new(id, 10, 10, 10, false, false, false, 5)
    }

    #[test]
    fn leaf_has_no_free_space_or_children() {
        let bt = boxtype(1);
        let block = Block::leaf(&bt, Orientation::Lwh);
        assert_eq!((block.l, block.w, block.h), (10, 10, 10));
        assert_eq!(block.occupied_volume, 1000);
        assert!(block.free_space.is_empty());
        assert!(block.children.is_empty());
    }

    #[test]
    fn add_conserves_volume_and_crops_free_space() {
        let config = config();
        let mut container = Block::container(20, 20, 20, &config);
        let bt = boxtype(1);
        let child = Block::leaf(&bt, Orientation::Lwh);
        container.add(&child, 0, 0, 0, &config);
        assert_eq!(container.occupied_volume, 1000);
        assert_eq!(container.children.len(), 1);
        assert_eq!(
            container.occupied_volume,
            container.children.iter().map(|c| c.volume()).sum::<i64>()
        );
        assert_eq!(container.free_space.spaces().len(), 3);
        let closest = container.free_space.closest_space().unwrap();
        assert_eq!(closest.priority(), 0);
        assert_eq!(closest.corner_point(), [0, 0, 0]);
    }

    #[test]
    fn join_along_x_sums_stacking_axis_and_maxes_others() {
        let a = Block::composite(5, 5, 4, ItemMultiset::new());
        let mut a = Block {
            occupied_volume: 100,
            ..a
        };
        let b = Block::composite(5, 5, 4, ItemMultiset::new());
        let b = Block {
            occupied_volume: 100,
            ..b
        };
        let joined = a.join(&b, Axis::X, 0.98);
        assert!(joined);
        assert_eq!((a.l, a.w, a.h), (10, 5, 4));
        assert_eq!(a.occupied_volume, 200);
    }

    #[test]
    fn join_below_fill_ratio_gate_is_rejected_and_unchanged() {
        let a = Block::composite(5, 5, 4, ItemMultiset::new());
        let mut a = Block {
            occupied_volume: 100,
            ..a
        };
        let before = (a.l, a.w, a.h, a.occupied_volume);
        let b = Block::composite(5, 6, 4, ItemMultiset::new());
        let b = Block {
            occupied_volume: 100,
            ..b
        };
        let joined = a.join(&b, Axis::X, 0.98);
        assert!(!joined);
        assert_eq!((a.l, a.w, a.h, a.occupied_volume), before);
    }

    #[test]
    fn is_constructible_checks_against_pool() {
        let bt = boxtype(1);
        let block = Block::leaf(&bt, Orientation::Lwh);
        let mut pool = ItemMultiset::new();
        pool.set(bt, 1);
        assert!(block.is_constructible(&pool));
        pool.set(bt, 0);
        assert!(!block.is_constructible(&pool));
    }
}
