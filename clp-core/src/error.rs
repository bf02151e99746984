// Copyright 2024 the clp-core authors under the terms of the MIT License as detailed
// in the accompanying file LICENSE or <https://opensource.org/licenses/MIT>.

//! Error types for `clp-core`.
//!
//! Kept deliberately small: per the error-handling design, only geometry
//! construction and instance-file parsing can actually fail at runtime.
//! Everything else (`JoinInfeasible`, `NoSpace`, `InventoryExhausted`) is a
//! `bool`/`Option`/caller-checked precondition rather than an `Err` variant.

use crate::boxtype::Coord;
use std::fmt;

/// An axis, used purely to label which extent failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        })
    }
}

/// Errors arising from `Aabb`/`Space` construction.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// An extent was constructed with `max <= min` on some axis.
    #[error("invalid {axis} extent: max ({max}) must be strictly greater than min ({min})")]
    InvalidGeometry { axis: Axis, min: Coord, max: Coord },
}
