// Copyright 2024 the clp-core authors under the terms of the MIT License as detailed
// in the accompanying file LICENSE or <https://opensource.org/licenses/MIT>.

//! Pluggable evaluation/constraints and the greedy placement loop that
//! exercises them end-to-end.

use crate::block::Block;
use crate::block_list::{best, generate_general_blocks, remove_unconstructable};
use crate::config::EngineConfig;
use crate::geom::Space;
use crate::items::ItemMultiset;

/// Scores a candidate `(block, space, container)` triple; higher is better.
pub trait Evaluator {
    fn evaluate(&self, block: &Block, space: &Space, container: &Block) -> f64;
}

/// A feasibility predicate over a candidate `(block, space, container)`.
pub trait Constraint {
    fn is_satisfied(&self, block: &Block, space: &Space, container: &Block) -> bool;
}

/// Prefers the block with the greatest occupied volume — the textbook CLP
/// default objective.
pub struct MaxVolumeEvaluator;

impl Evaluator for MaxVolumeEvaluator {
    fn evaluate(&self, block: &Block, _space: &Space, _container: &Block) -> f64 {
        block.occupied_volume as f64
    }
}

/// Does the block's `(l, w, h)` fit within the candidate space?
pub struct FitsInSpaceConstraint;

impl Constraint for FitsInSpaceConstraint {
    fn is_satisfied(&self, block: &Block, space: &Space, _container: &Block) -> bool {
        space.aabb().fits_dims(block.l, block.w, block.h)
    }
}

/// Does the block fit within the outer container's bounds?
pub struct FitsContainerConstraint;

impl Constraint for FitsContainerConstraint {
    fn is_satisfied(&self, block: &Block, _space: &Space, container: &Block) -> bool {
        block.fits_container(container.dims())
    }
}

/// Repeatedly asks `container`'s free space for the highest-priority space,
/// asks the candidate list for the best fitting block, and places it —
/// §2's placement loop, made runnable. Returns the number of blocks
/// placed. Terminates when there is no live space left, or no admissible
/// block for the current closest space.
pub fn pack_greedy(
    container: &mut Block,
    pool: &mut ItemMultiset,
    engine: &EngineConfig,
    evaluator: &dyn Evaluator,
    constraints: &[&dyn Constraint],
    max_bl: usize,
    min_fr: f64,
) -> usize {
    let mut placed_count = 0;

    loop {
        let mut candidates =
            generate_general_blocks(pool, container.dims(), min_fr, max_bl);
        remove_unconstructable(&mut candidates, pool);
        if candidates.is_empty() {
            break;
        }

        container.free_space.filter(pool);
        let space = match container.free_space.closest_space() {
            Some(s) => *s,
            None => break,
        };

        let chosen = match best(&candidates, &space, container, evaluator, constraints) {
            Some(b) => b.clone(),
            None => break,
        };

        // `corner_point` may name the space's *far* edge on an axis (§4.3's
        // non-origin policies): in that case the child must be placed
        // flush against that edge, not with its own origin corner there.
        let aabb = space.aabb();
        let corner = space.corner_point();
        let x = if corner[0] == aabb.xmax {
            corner[0] - chosen.l
        } else {
            corner[0]
        };
        let y = if corner[1] == aabb.ymax {
            corner[1] - chosen.w
        } else {
            corner[1]
        };
        let z = if corner[2] == aabb.zmax {
            corner[2] - chosen.h
        } else {
            corner[2]
        };
        container.add(&chosen, x, y, z, engine);
        *pool -= &chosen.items;
        placed_count += 1;
    }

    placed_count
}
