// Copyright 2024 the clp-core authors under the terms of the MIT License as detailed
// in the accompanying file LICENSE or <https://opensource.org/licenses/MIT>.

//! Geometry and block-building engine for the 3D container loading problem.
//!
//! Given a rectangular container and a multiset of box types, this crate
//! enumerates candidate *blocks* (axis-aligned cuboidal arrangements of one
//! or more boxes), tracks a container's free space as a maximal set of
//! empty cuboids after each placement, and picks placements under
//! pluggable evaluation and constraints. See [`engine::pack_greedy`] for
//! the placement loop tying everything together.
//!
//! The engine is single-threaded and synchronous: no operation suspends or
//! blocks on I/O, and there is no cancellation/timeout built in — callers
//! bound runtime via `max_bl` and by halting their own placement loop.

pub mod block;
pub mod block_list;
pub mod boxtype;
pub mod config;
pub mod engine;
pub mod error;
pub mod free_space;
pub mod geom;
pub mod instance;
pub mod items;

pub use block::Block;
pub use block_list::BlockList;
pub use boxtype::{BoxType, Coord, Orientation};
pub use config::{EngineConfig, FillingPolicy};
pub use engine::{Constraint, Evaluator};
pub use error::GeometryError;
pub use free_space::FreeSpace;
pub use geom::{Aabb, ContainerDims, Space};
pub use items::ItemMultiset;
