// Copyright 2024 the clp-core authors under the terms of the MIT License as detailed
// in the accompanying file LICENSE or <https://opensource.org/licenses/MIT>.

//! Instance file data contracts (§6) and a reproducible instance generator.
//!
//! This module only implements the *data contract* an external instance
//! generator/solver would use: parsing and writing the text format, plus a
//! Rust-native generator reproducing the documented behavior of the
//! original Python generator. No subprocess is spawned here, and no
//! solver is invoked — both are explicitly out of scope.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;
use std::io::{self, Write};

/// One parsed `t d1 o1 d2 o2 d3 o3 qty` line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxSpec {
    pub type_id: u32,
    pub d1: i32,
    pub o1: bool,
    pub d2: i32,
    pub o2: bool,
    pub d3: i32,
    pub o3: bool,
    pub qty: i64,
}

/// One instance: id, seed, container dims, and its box-type specs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance {
    pub id: u32,
    pub seed: u64,
    pub l: i32,
    pub w: i32,
    pub h: i32,
    pub box_specs: Vec<BoxSpec>,
}

/// A batch of instances, as read from or written to one instance file.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct InstanceBatch {
    pub instances: Vec<Instance>,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum InstanceFormatError {
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: &'static str },
    #[error("could not parse {field} as an integer: {value:?}")]
    InvalidInt { field: &'static str, value: String },
}

struct Tokens<'a> {
    iter: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Tokens {
            iter: text.split_whitespace(),
        }
    }

    fn next_token(&mut self, expected: &'static str) -> Result<&'a str, InstanceFormatError> {
        self.iter
            .next()
            .ok_or(InstanceFormatError::UnexpectedEof { expected })
    }

    fn next_i64(&mut self, field: &'static str) -> Result<i64, InstanceFormatError> {
        let token = self.next_token(field)?;
        token
            .parse::<i64>()
            .map_err(|_| InstanceFormatError::InvalidInt {
                field,
                value: token.to_string(),
            })
    }

    fn next_i32(&mut self, field: &'static str) -> Result<i32, InstanceFormatError> {
        Ok(self.next_i64(field)? as i32)
    }

    fn next_u32(&mut self, field: &'static str) -> Result<u32, InstanceFormatError> {
        Ok(self.next_i64(field)? as u32)
    }

    fn next_bool(&mut self, field: &'static str) -> Result<bool, InstanceFormatError> {
        Ok(self.next_i64(field)? != 0)
    }
}

/// Parses the instance file text format described in §6.
pub fn parse_batch(text: &str) -> Result<InstanceBatch, InstanceFormatError> {
    let mut tokens = Tokens::new(text);
    let n = tokens.next_u32("instance count")?;
    let mut instances = Vec::with_capacity(n as usize);

    for _ in 0..n {
        let id = tokens.next_u32("instance id")?;
        let seed = tokens.next_i64("seed")? as u64;
        let l = tokens.next_i32("container l")?;
        let w = tokens.next_i32("container w")?;
        let h = tokens.next_i32("container h")?;
        let t = tokens.next_u32("box type count")?;

        let mut box_specs = Vec::with_capacity(t as usize);
        for _ in 0..t {
            let type_id = tokens.next_u32("box type id")?;
            let d1 = tokens.next_i32("d1")?;
            let o1 = tokens.next_bool("o1")?;
            let d2 = tokens.next_i32("d2")?;
            let o2 = tokens.next_bool("o2")?;
            let d3 = tokens.next_i32("d3")?;
            let o3 = tokens.next_bool("o3")?;
            let qty = tokens.next_i64("qty")?;
            box_specs.push(BoxSpec {
                type_id,
                d1,
                o1,
                d2,
                o2,
                d3,
                o3,
                qty,
            });
        }

        instances.push(Instance {
            id,
            seed,
            l,
            w,
            h,
            box_specs,
        });
    }

    Ok(InstanceBatch { instances })
}

impl InstanceBatch {
    /// Writes this batch in the §6 text format, byte-for-byte matching
    /// what the original generator emits.
    pub fn write<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.instances.len())?;
        for instance in &self.instances {
            writeln!(out, "{} {}", instance.id, instance.seed)?;
            writeln!(out, "{} {} {}", instance.l, instance.w, instance.h)?;
            writeln!(out, "{}", instance.box_specs.len())?;
            for spec in &instance.box_specs {
                writeln!(
                    out,
                    "{} {} {} {} {} {} {} {}",
                    spec.type_id,
                    spec.d1,
                    spec.o1 as u8,
                    spec.d2,
                    spec.o2 as u8,
                    spec.d3,
                    spec.o3 as u8,
                    spec.qty
                )?;
            }
        }
        Ok(())
    }
}

/// Fixed container dims used by the reference generator.
pub const CONTAINER_DIMS: (i32, i32, i32) = (587, 233, 220);

/// Per-axis dimension ranges (inclusive) used by the reference generator.
const DIM_RANGES: [(i32, i32); 3] = [(30, 120), (25, 100), (20, 80)];

/// Rotation admissibility threshold: axis `j` is rotatable iff
/// `d_j / min(d_1,d_2,d_3) < ROTATION_THRESHOLD`.
const ROTATION_THRESHOLD: f64 = 2.0;

/// Configuration for `generate_batch`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub instances: u32,
    /// Number of distinct box types per instance. The reference generator
    /// defaults this to 10.
    pub n_types: u32,
    pub initial_seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            instances: 1,
            n_types: 10,
            initial_seed: 40,
        }
    }
}

/// Generates a batch reproducing the documented behavior of
/// `get_instance.py`: fixed container dims, per-axis dimension ranges,
/// rotation threshold, volume-bounded top-up of quantities, and a seed
/// that advances by `+100` between instances.
pub fn generate_batch(config: GeneratorConfig) -> InstanceBatch {
    let (l, w, h) = CONTAINER_DIMS;
    let container_volume = l as i64 * w as i64 * h as i64;
    let mut seed = config.initial_seed;
    let mut instances = Vec::with_capacity(config.instances as usize);

    for instance_idx in 0..config.instances {
        let mut rng = Xoshiro256Plus::seed_from_u64(seed);

        let mut dims = Vec::with_capacity(config.n_types as usize);
        let mut rotations = Vec::with_capacity(config.n_types as usize);
        let mut volumes = Vec::with_capacity(config.n_types as usize);
        let mut quantities = vec![1i64; config.n_types as usize];

        for _ in 0..config.n_types {
            let d = [
                rng.gen_range(DIM_RANGES[0].0..=DIM_RANGES[0].1),
                rng.gen_range(DIM_RANGES[1].0..=DIM_RANGES[1].1),
                rng.gen_range(DIM_RANGES[2].0..=DIM_RANGES[2].1),
            ];
            let min_dim = *d.iter().min().unwrap() as f64;
            let orientation = [
                (d[0] as f64 / min_dim) < ROTATION_THRESHOLD,
                (d[1] as f64 / min_dim) < ROTATION_THRESHOLD,
                (d[2] as f64 / min_dim) < ROTATION_THRESHOLD,
            ];
            volumes.push(d[0] as i64 * d[1] as i64 * d[2] as i64);
            dims.push(d);
            rotations.push(orientation);
        }

        if config.n_types > 0 {
            loop {
                let loaded_volume: i64 = quantities
                    .iter()
                    .zip(volumes.iter())
                    .map(|(&qty, &vol)| qty * vol)
                    .sum();
                let candidate = rng.gen_range(0..config.n_types) as usize;
                if container_volume > loaded_volume + volumes[candidate] {
                    quantities[candidate] += 1;
                } else {
                    break;
                }
            }
        }

        let box_specs = (0..config.n_types as usize)
            .map(|i| BoxSpec {
                type_id: (i + 1) as u32,
                d1: dims[i][0],
                o1: rotations[i][0],
                d2: dims[i][1],
                o2: rotations[i][1],
                d3: dims[i][2],
                o3: rotations[i][2],
                qty: quantities[i],
            })
            .collect();

        instances.push(Instance {
            id: instance_idx + 1,
            seed,
            l,
            w,
            h,
            box_specs,
        });

        seed += 100;
    }

    InstanceBatch { instances }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_text_format() {
        let batch = generate_batch(GeneratorConfig {
            instances: 2,
            n_types: 3,
            initial_seed: 7,
        });
        let mut buf = Vec::new();
        batch.write(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let parsed = parse_batch(&text).unwrap();
        assert_eq!(parsed.instances.len(), 2);
        assert_eq!(parsed, batch);
    }

    #[test]
    fn seeds_advance_by_100_between_instances() {
        let batch = generate_batch(GeneratorConfig {
            instances: 3,
            n_types: 2,
            initial_seed: 40,
        });
        let seeds: Vec<u64> = batch.instances.iter().map(|i| i.seed).collect();
        assert_eq!(seeds, vec![40, 140, 240]);
    }

    #[test]
    fn generated_dims_stay_within_ranges_and_respect_rotation_threshold() {
        let batch = generate_batch(GeneratorConfig {
            instances: 1,
            n_types: 20,
            initial_seed: 99,
        });
        for spec in &batch.instances[0].box_specs {
            assert!((30..=120).contains(&spec.d1));
            assert!((25..=100).contains(&spec.d2));
            assert!((20..=80).contains(&spec.d3));
            let min_dim = spec.d1.min(spec.d2).min(spec.d3) as f64;
            assert_eq!(spec.o1, (spec.d1 as f64 / min_dim) < 2.0);
            assert!(spec.qty >= 1);
        }
    }

    #[test]
    fn loaded_volume_never_reaches_container_volume() {
        let batch = generate_batch(GeneratorConfig {
            instances: 1,
            n_types: 10,
            initial_seed: 40,
        });
        let instance = &batch.instances[0];
        let container_volume = instance.l as i64 * instance.w as i64 * instance.h as i64;
        let loaded: i64 = instance
            .box_specs
            .iter()
            .map(|s| s.qty * (s.d1 as i64 * s.d2 as i64 * s.d3 as i64))
            .sum();
        assert!(loaded < container_volume);
    }

    #[test]
    fn parse_batch_reports_eof_on_truncated_input() {
        let err = parse_batch("1\n1 40\n587 233").unwrap_err();
        assert!(matches!(err, InstanceFormatError::UnexpectedEof { .. }));
    }
}
