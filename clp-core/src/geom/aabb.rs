// Copyright 2024 the clp-core authors under the terms of the MIT License as detailed
// in the accompanying file LICENSE or <https://opensource.org/licenses/MIT>.

//! Integer axis-aligned bounding boxes.

use crate::boxtype::Coord;
use crate::error::{Axis, GeometryError};

/// An integer-coordinate axis-aligned box. Always non-degenerate
/// (`xmax > xmin` etc.) once constructed; immutable after that.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aabb {
    pub xmin: Coord,
    pub xmax: Coord,
    pub ymin: Coord,
    pub ymax: Coord,
    pub zmin: Coord,
    pub zmax: Coord,
}

impl Aabb {
    pub fn new(
        xmin: Coord,
        xmax: Coord,
        ymin: Coord,
        ymax: Coord,
        zmin: Coord,
        zmax: Coord,
    ) -> Result<Self, GeometryError> {
        if xmax <= xmin {
            return Err(GeometryError::InvalidGeometry {
                axis: Axis::X,
                min: xmin,
                max: xmax,
            });
        }
        if ymax <= ymin {
            return Err(GeometryError::InvalidGeometry {
                axis: Axis::Y,
                min: ymin,
                max: ymax,
            });
        }
        if zmax <= zmin {
            return Err(GeometryError::InvalidGeometry {
                axis: Axis::Z,
                min: zmin,
                max: zmax,
            });
        }
        Ok(Aabb {
            xmin,
            xmax,
            ymin,
            ymax,
            zmin,
            zmax,
        })
    }

    pub fn l(&self) -> Coord {
        self.xmax - self.xmin
    }

    pub fn w(&self) -> Coord {
        self.ymax - self.ymin
    }

    pub fn h(&self) -> Coord {
        self.zmax - self.zmin
    }

    pub fn volume(&self) -> i64 {
        self.l() as i64 * self.w() as i64 * self.h() as i64
    }

    /// All three axis intervals overlap with positive length.
    pub fn strict_intersects(&self, other: &Aabb) -> bool {
        self.xmin < other.xmax
            && other.xmin < self.xmax
            && self.ymin < other.ymax
            && other.ymin < self.ymax
            && self.zmin < other.zmax
            && other.zmin < self.zmax
    }

    /// All three axis intervals overlap or touch at a boundary.
    pub fn touch_intersects(&self, other: &Aabb) -> bool {
        self.xmin <= other.xmax
            && other.xmin <= self.xmax
            && self.ymin <= other.ymax
            && other.ymin <= self.ymax
            && self.zmin <= other.zmax
            && other.zmin <= self.zmax
    }

    /// `self` encloses `other` on every axis (`self ⊇ other`).
    pub fn contains(&self, other: &Aabb) -> bool {
        self.xmin <= other.xmin
            && other.xmax <= self.xmax
            && self.ymin <= other.ymin
            && other.ymax <= self.ymax
            && self.zmin <= other.zmin
            && other.zmax <= self.zmax
    }

    /// Does a box of dims `(l, w, h)` fit within `self` without rotation?
    pub fn fits_dims(&self, l: Coord, w: Coord, h: Coord) -> bool {
        self.l() >= l && self.w() >= w && self.h() >= h
    }

    /// `self - other`: up to six axis-slab remainders of `self` outside
    /// `other`. Pieces may overlap each other; `FreeSpace` is responsible
    /// for restoring maximality across the whole free-space set.
    pub fn subtract(&self, other: &Aabb) -> Vec<Aabb> {
        let mut pieces = Vec::with_capacity(6);
        if other.xmax < self.xmax {
            pieces.push(
                Aabb::new(other.xmax, self.xmax, self.ymin, self.ymax, self.zmin, self.zmax)
                    .expect("slab from a valid Aabb is non-degenerate"),
            );
        }
        if other.ymax < self.ymax {
            pieces.push(
                Aabb::new(self.xmin, self.xmax, other.ymax, self.ymax, self.zmin, self.zmax)
                    .expect("slab from a valid Aabb is non-degenerate"),
            );
        }
        if other.zmax < self.zmax {
            pieces.push(
                Aabb::new(self.xmin, self.xmax, self.ymin, self.ymax, other.zmax, self.zmax)
                    .expect("slab from a valid Aabb is non-degenerate"),
            );
        }
        if other.xmin > self.xmin {
            pieces.push(
                Aabb::new(self.xmin, other.xmin, self.ymin, self.ymax, self.zmin, self.zmax)
                    .expect("slab from a valid Aabb is non-degenerate"),
            );
        }
        if other.ymin > self.ymin {
            pieces.push(
                Aabb::new(self.xmin, self.xmax, self.ymin, other.ymin, self.zmin, self.zmax)
                    .expect("slab from a valid Aabb is non-degenerate"),
            );
        }
        if other.zmin > self.zmin {
            pieces.push(
                Aabb::new(self.xmin, self.xmax, self.ymin, self.ymax, self.zmin, other.zmin)
                    .expect("slab from a valid Aabb is non-degenerate"),
            );
        }
        pieces
    }
}
