// Copyright 2024 the clp-core authors under the terms of the MIT License as detailed
// in the accompanying file LICENSE or <https://opensource.org/licenses/MIT>.

//! Integer cuboid geometry: plain `Aabb`s and priority-carrying `Space`s.

pub mod aabb;
pub mod space;

pub use aabb::Aabb;
pub use space::{ContainerDims, Space};
