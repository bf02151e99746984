// Copyright 2024 the clp-core authors under the terms of the MIT License as detailed
// in the accompanying file LICENSE or <https://opensource.org/licenses/MIT>.

//! `Space`: a free `Aabb` augmented with a priority key under a filling
//! policy.

use crate::boxtype::Coord;
use crate::config::{EngineConfig, FillingPolicy};
use crate::geom::aabb::Aabb;

/// The dims of a `Space`'s enclosing container, passed explicitly rather
/// than stored as a back-reference (see the weak-back-reference note this
/// crate's design ledger resolves: no stored reference, no ownership
/// cycle — just three numbers, read once at `Space` construction time).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContainerDims {
    pub l: Coord,
    pub w: Coord,
    pub h: Coord,
}

/// A free cuboid plus the priority key that orders candidate spaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Space {
    aabb: Aabb,
    corner_point: [Coord; 3],
    priority: i64,
}

impl Space {
    pub fn new(aabb: Aabb, container: ContainerDims, config: &EngineConfig) -> Self {
        let (corner_point, priority) = compute_priority(&aabb, container, config);
        Space {
            aabb,
            corner_point,
            priority,
        }
    }

    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    pub fn corner_point(&self) -> [Coord; 3] {
        self.corner_point
    }

    pub fn priority(&self) -> i64 {
        self.priority
    }

    pub fn l(&self) -> Coord {
        self.aabb.l()
    }

    pub fn w(&self) -> Coord {
        self.aabb.w()
    }

    pub fn h(&self) -> Coord {
        self.aabb.h()
    }

    pub fn volume(&self) -> i64 {
        self.aabb.volume()
    }

    /// Placement-aware subtraction (§4.4): identical to plain `Aabb`
    /// subtraction except for the +z slab, which is restricted to the
    /// placed block's xy-footprint when vertical stability is enabled.
    pub fn subtract(
        &self,
        placed: &Aabb,
        container: ContainerDims,
        config: &EngineConfig,
    ) -> Vec<Space> {
        let a = &self.aabb;
        let mut pieces = Vec::with_capacity(6);
        let mut push = |aabb: Aabb| pieces.push(Space::new(aabb, container, config));

        if placed.xmax < a.xmax {
            push(Aabb::new(placed.xmax, a.xmax, a.ymin, a.ymax, a.zmin, a.zmax).unwrap());
        }
        if placed.ymax < a.ymax {
            push(Aabb::new(a.xmin, a.xmax, placed.ymax, a.ymax, a.zmin, a.zmax).unwrap());
        }
        if placed.zmax < a.zmax {
            if config.vertical_stability {
                push(
                    Aabb::new(placed.xmin, placed.xmax, placed.ymin, placed.ymax, placed.zmax, a.zmax)
                        .unwrap(),
                );
            } else {
                push(Aabb::new(a.xmin, a.xmax, a.ymin, a.ymax, placed.zmax, a.zmax).unwrap());
            }
        }
        if placed.xmin > a.xmin {
            push(Aabb::new(a.xmin, placed.xmin, a.ymin, a.ymax, a.zmin, a.zmax).unwrap());
        }
        if placed.ymin > a.ymin {
            push(Aabb::new(a.xmin, a.xmax, a.ymin, placed.ymin, a.zmin, a.zmax).unwrap());
        }
        if placed.zmin > a.zmin {
            push(Aabb::new(a.xmin, a.xmax, a.ymin, a.ymax, a.zmin, placed.zmin).unwrap());
        }
        pieces
    }
}

fn compute_priority(
    aabb: &Aabb,
    container: ContainerDims,
    config: &EngineConfig,
) -> ([Coord; 3], i64) {
    let (xmin, xmax, ymin, ymax, zmin, zmax) =
        (aabb.xmin, aabb.xmax, aabb.ymin, aabb.ymax, aabb.zmin, aabb.zmax);

    let mut dx = xmin as i64;
    let mut dy = ymin as i64;
    let mut dz = zmin as i64;
    let mut corner = [xmin, ymin, zmin];

    if config.filling_policy == FillingPolicy::BottomUp {
        dz = 1000 * zmin as i64;
    }

    let not_origin = config.filling_policy != FillingPolicy::Origin;
    if not_origin && (container.l - xmax) < xmin {
        dx = (container.l - xmax) as i64;
        corner[0] = xmax;
    }
    if not_origin && (container.w - ymax) < ymin {
        dy = (container.w - ymax) as i64;
        corner[1] = ymax;
    }
    if config.filling_policy == FillingPolicy::Free && (container.h - zmax) < zmin {
        dz = (container.h - zmax) as i64;
        corner[2] = zmax;
    }

    (corner, dx + dy + dz)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container() -> ContainerDims {
        ContainerDims { l: 20, w: 20, h: 20 }
    }

    #[test]
    fn origin_policy_never_shifts_corner() {
        let config = EngineConfig {
            filling_policy: FillingPolicy::Origin,
            vertical_stability: true,
        };
        let aabb = Aabb::new(10, 20, 0, 20, 0, 10).unwrap();
        let space = Space::new(aabb, container(), &config);
        assert_eq!(space.corner_point(), [10, 0, 0]);
        assert_eq!(space.priority(), 10);
    }

    #[test]
    fn boundary_equal_to_container_does_not_shift_under_non_origin_policy() {
        let config = EngineConfig {
            filling_policy: FillingPolicy::BottomUp,
            vertical_stability: true,
        };
        // xmax == container.l, so `L - xmax (=0) < xmin` only if xmin > 0.
        let aabb = Aabb::new(0, 20, 0, 20, 0, 10).unwrap();
        let space = Space::new(aabb, container(), &config);
        assert_eq!(space.corner_point(), [0, 0, 0]);
    }

    #[test]
    fn bottom_up_dominates_with_large_z_multiplier() {
        let config = EngineConfig {
            filling_policy: FillingPolicy::BottomUp,
            vertical_stability: true,
        };
        let aabb = Aabb::new(0, 5, 0, 5, 5, 10).unwrap();
        let space = Space::new(aabb, container(), &config);
        assert_eq!(space.priority(), 1000 * 5);
    }

    #[test]
    fn subtract_with_vertical_stability_restricts_top_slab_to_footprint() {
        let config = EngineConfig {
            filling_policy: FillingPolicy::Origin,
            vertical_stability: true,
        };
        let space = Space::new(Aabb::new(0, 20, 0, 20, 0, 20).unwrap(), container(), &config);
        let placed = Aabb::new(0, 10, 0, 10, 0, 10).unwrap();
        let pieces = space.subtract(&placed, container(), &config);
        let top = pieces
            .iter()
            .find(|s| s.aabb().zmin == 10)
            .expect("a +z piece must exist");
        assert_eq!((top.l(), top.w(), top.h()), (10, 10, 10));
    }

    #[test]
    fn subtract_without_vertical_stability_uses_full_xy_extent() {
        let config = EngineConfig {
            filling_policy: FillingPolicy::Origin,
            vertical_stability: false,
        };
        let space = Space::new(Aabb::new(0, 20, 0, 20, 0, 20).unwrap(), container(), &config);
        let placed = Aabb::new(0, 10, 0, 10, 0, 10).unwrap();
        let pieces = space.subtract(&placed, container(), &config);
        let top = pieces
            .iter()
            .find(|s| s.aabb().zmin == 10)
            .expect("a +z piece must exist");
        assert_eq!((top.l(), top.w(), top.h()), (20, 20, 10));
    }
}
