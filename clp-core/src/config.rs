// Copyright 2024 the clp-core authors under the terms of the MIT License as detailed
// in the accompanying file LICENSE or <https://opensource.org/licenses/MIT>.

//! Per-engine configuration.
//!
//! `FillingPolicy` and `vertical_stability` govern `Space` priority and
//! subtraction, but are never stored as global/static state: every
//! constructor that needs them takes an `&EngineConfig` explicitly. Two
//! packing sessions with different policies just use two `EngineConfig`
//! values; nothing is shared between them.

/// Biases `Space` priority toward a particular corner of the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillingPolicy {
    /// Always prefer the block origin `(0,0,0)`.
    Origin,
    /// Prefer lower layers first, then the origin corner within a layer.
    BottomUp,
    /// Like `BottomUp`, but also allows ceiling-anchored corners.
    Free,
}

impl Default for FillingPolicy {
    fn default() -> Self {
        FillingPolicy::Origin
    }
}

/// Immutable for the duration of a packing computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    pub filling_policy: FillingPolicy,
    pub vertical_stability: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            filling_policy: FillingPolicy::Origin,
            vertical_stability: true,
        }
    }
}
