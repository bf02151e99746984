// Copyright 2024 the clp-core authors under the terms of the MIT License as detailed
// in the accompanying file LICENSE or <https://opensource.org/licenses/MIT>.

//! `BlockList`: generation of simple and general blocks, and selection of
//! the best candidate under pluggable evaluation and constraints.

use crate::block::{Block, DEFAULT_MIN_FILL_RATIO};
use crate::boxtype::admissible_orientations;
use crate::engine::{Constraint, Evaluator};
use crate::error::Axis;
use crate::geom::{ContainerDims, Space};
use crate::items::ItemMultiset;

/// Default cap on the number of blocks `generate_general_blocks` will
/// produce before stopping (§4.7).
pub const DEFAULT_MAX_BL: usize = 10_000;

const JOIN_AXES: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

/// For each `BoxType` present in `items`, emits one `Block` per admissible
/// orientation.
pub fn generate_simple_blocks(items: &ItemMultiset) -> Vec<Block> {
    let mut blocks = Vec::new();
    for (boxtype, _qty) in items.iter() {
        for orientation in admissible_orientations(boxtype) {
            blocks.push(Block::leaf(boxtype, orientation));
        }
    }
    blocks
}

/// One `join` attempt per axis for the ordered pair `(b1, b2)` (§9's
/// resolution of the `Block::generate_blocks` open question).
fn generate_blocks(b1: &Block, b2: &Block, min_fr: f64) -> Vec<Block> {
    let mut candidates = Vec::with_capacity(3);
    for axis in JOIN_AXES {
        let mut candidate = Block::copy_of(b1);
        if candidate.join(b2, axis, min_fr) {
            candidates.push(candidate);
        }
    }
    candidates
}

/// Iterative pairwise composition (§4.7). Stops when a round produces
/// nothing new, or when `blocks.len() >= max_bl`.
pub fn generate_general_blocks(
    items: &ItemMultiset,
    container: ContainerDims,
    min_fr: f64,
    max_bl: usize,
) -> Vec<Block> {
    let mut blocks = generate_simple_blocks(items);
    let mut previous = blocks.clone();

    while blocks.len() < max_bl {
        let mut new_blocks = Vec::new();
        'rounds: for b1 in &previous {
            for b2 in &blocks {
                for candidate in generate_blocks(b1, b2, min_fr) {
                    if candidate.is_constructible(items) && candidate.fits_container(container) {
                        new_blocks.push(candidate);
                        if blocks.len() + new_blocks.len() >= max_bl {
                            break 'rounds;
                        }
                    }
                }
            }
        }

        if new_blocks.is_empty() {
            break;
        }

        blocks.extend(new_blocks.iter().cloned());
        if blocks.len() >= max_bl {
            log::debug!(
                "general block generation capped at max_bl={} blocks",
                max_bl
            );
        }
        previous = new_blocks;
    }

    blocks
}

/// Linear scan: among blocks for which every constraint holds, returns the
/// one maximizing `evaluator`. Ties are broken first-seen-wins.
pub fn best<'a>(
    blocks: &'a [Block],
    space: &Space,
    container: &Block,
    evaluator: &dyn Evaluator,
    constraints: &[&dyn Constraint],
) -> Option<&'a Block> {
    let mut best_block: Option<&Block> = None;
    let mut best_score = f64::NEG_INFINITY;
    for block in blocks {
        if !constraints
            .iter()
            .all(|c| c.is_satisfied(block, space, container))
        {
            continue;
        }
        let score = evaluator.evaluate(block, space, container);
        if score > best_score {
            best_score = score;
            best_block = Some(block);
        }
    }
    best_block
}

/// Drops every block whose items exceed the available pool.
pub fn remove_unconstructable(blocks: &mut Vec<Block>, items: &ItemMultiset) {
    blocks.retain(|b| b.is_constructible(items));
}

/// Convenience wrapper mirroring §4.7's default fill-ratio gate.
pub fn generate_general_blocks_default(
    items: &ItemMultiset,
    container: ContainerDims,
) -> Vec<Block> {
    generate_general_blocks(items, container, DEFAULT_MIN_FILL_RATIO, DEFAULT_MAX_BL)
}

/// A generated candidate pool: simple blocks, then general blocks composed
/// from them, selectable by `best` and pruned by `remove_unconstructable`
/// as inventory shrinks. A thin wrapper over `Vec<Block>` — the free
/// functions above do the actual work and remain independently usable.
#[derive(Clone, Debug, Default)]
pub struct BlockList {
    pub blocks: Vec<Block>,
}

impl BlockList {
    pub fn new() -> Self {
        BlockList { blocks: Vec::new() }
    }

    /// Populates this list with one block per admissible orientation of
    /// every `BoxType` in `items`.
    pub fn generate_simple(&mut self, items: &ItemMultiset) {
        self.blocks = generate_simple_blocks(items);
    }

    /// Extends this list via iterative pairwise composition, starting from
    /// whatever simple/general blocks it already holds.
    pub fn generate_general(
        &mut self,
        items: &ItemMultiset,
        container: ContainerDims,
        min_fr: f64,
        max_bl: usize,
    ) {
        if self.blocks.is_empty() {
            self.generate_simple(items);
        }
        self.blocks = generate_general_blocks(items, container, min_fr, max_bl);
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn best(
        &self,
        space: &Space,
        container: &Block,
        evaluator: &dyn Evaluator,
        constraints: &[&dyn Constraint],
    ) -> Option<&Block> {
        best(&self.blocks, space, container, evaluator, constraints)
    }

    pub fn remove_unconstructable(&mut self, items: &ItemMultiset) {
        remove_unconstructable(&mut self.blocks, items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxtype::BoxType;
    use crate::config::EngineConfig;
    use crate::engine::{FitsContainerConstraint, MaxVolumeEvaluator};

    fn rotatable_box() -> BoxType {
        BoxType::new(1, 10, 20, 30, true, true, true, 1)
    }

    #[test]
    fn simple_blocks_for_fully_rotatable_box_has_six_distinct_dims() {
        let mut items = ItemMultiset::new();
        items.set(rotatable_box(), 4);
        let blocks = generate_simple_blocks(&items);
        assert_eq!(blocks.len(), 6);
        let dims: std::collections::HashSet<(i32, i32, i32)> =
            blocks.iter().map(|b| (b.l, b.w, b.h)).collect();
        assert_eq!(dims.len(), 6);
    }

    #[test]
    fn general_blocks_stay_within_max_bl() {
        let mut items = ItemMultiset::new();
        items.set(rotatable_box(), 100);
        let container = ContainerDims {
            l: 200,
            w: 200,
            h: 200,
        };
        let blocks = generate_general_blocks(&items, container, 0.0, 12);
        assert!(blocks.len() <= 12);
    }

    #[test]
    fn remove_unconstructable_drops_blocks_beyond_pool() {
        let bt = rotatable_box();
        let mut blocks = generate_simple_blocks(&{
            let mut items = ItemMultiset::new();
            items.set(bt, 1);
            items
        });
        let mut empty_pool = ItemMultiset::new();
        empty_pool.set(bt, 0);
        remove_unconstructable(&mut blocks, &empty_pool);
        assert!(blocks.is_empty());
    }

    #[test]
    fn best_picks_max_volume_under_constraints() {
        let config = EngineConfig::default();
        let container = Block::container(100, 100, 100, &config);
        let space = container.free_space.spaces()[0];
        let small = Block::leaf(&BoxType::new(1, 10, 10, 10, false, false, false, 1), crate::boxtype::Orientation::Lwh);
        let large = Block::leaf(&BoxType::new(2, 20, 20, 20, false, false, false, 1), crate::boxtype::Orientation::Lwh);
        let blocks = vec![small, large];
        let evaluator = MaxVolumeEvaluator;
        let constraint = FitsContainerConstraint;
        let constraints: Vec<&dyn Constraint> = vec![&constraint];
        let picked = best(&blocks, &space, &container, &evaluator, &constraints).unwrap();
        assert_eq!(picked.occupied_volume, 20 * 20 * 20);
    }

    #[test]
    fn block_list_generate_simple_matches_free_function() {
        let mut items = ItemMultiset::new();
        items.set(rotatable_box(), 4);
        let mut list = BlockList::new();
        list.generate_simple(&items);
        assert_eq!(list.len(), generate_simple_blocks(&items).len());
    }
}
