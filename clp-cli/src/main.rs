// Copyright 2024 the clp-core authors under the terms of the MIT License as detailed
// in the accompanying file LICENSE or <https://opensource.org/licenses/MIT>.

//! Command-line driver for `clp-core`: generate instance batches, or run
//! the greedy placement loop against one and report the resulting fill
//! ratio.

use anyhow::{Context, Result};
use clap::Parser;
use clp_core::block::Block;
use clp_core::block_list::DEFAULT_MAX_BL;
use clp_core::boxtype::BoxType;
use clp_core::config::EngineConfig;
use clp_core::engine::{pack_greedy, Constraint, FitsContainerConstraint, FitsInSpaceConstraint, MaxVolumeEvaluator};
use clp_core::instance::{generate_batch, parse_batch, GeneratorConfig, Instance};
use clp_core::items::ItemMultiset;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(name = "clp", about = "Container loading problem geometry/block-building engine")]
enum Cli {
    /// Generate a reproducible instance batch and write it to a file.
    Generate {
        #[clap(long, default_value = "instances.txt")]
        out: PathBuf,
        #[clap(long, default_value_t = 1)]
        instances: u32,
        #[clap(long, default_value_t = 10)]
        n_types: u32,
        #[clap(long, default_value_t = 40)]
        seed: u64,
    },
    /// Read an instance batch and run the greedy placement loop on each
    /// instance, reporting the resulting fill ratio.
    Pack {
        input: PathBuf,
        #[clap(long, default_value_t = DEFAULT_MAX_BL)]
        max_bl: usize,
        #[clap(long, default_value_t = 0.98)]
        min_fr: f64,
    },
}

fn main() -> Result<()> {
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .context("failed to initialize logger")?;

    match Cli::parse() {
        Cli::Generate {
            out,
            instances,
            n_types,
            seed,
        } => run_generate(out, instances, n_types, seed),
        Cli::Pack {
            input,
            max_bl,
            min_fr,
        } => run_pack(input, max_bl, min_fr),
    }
}

fn run_generate(out: PathBuf, instances: u32, n_types: u32, seed: u64) -> Result<()> {
    let batch = generate_batch(GeneratorConfig {
        instances,
        n_types,
        initial_seed: seed,
    });
    let mut file = fs::File::create(&out)
        .with_context(|| format!("failed to create {}", out.display()))?;
    batch.write(&mut file).context("failed to write instance batch")?;
    log::info!("wrote {} instances to {}", batch.instances.len(), out.display());
    Ok(())
}

fn run_pack(input: PathBuf, max_bl: usize, min_fr: f64) -> Result<()> {
    let text = fs::read_to_string(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let batch = parse_batch(&text).context("failed to parse instance batch")?;

    let progress = ProgressBar::new(batch.instances.len() as u64);
    progress.set_style(ProgressStyle::default_bar().template("{bar:40} {pos}/{len} instances"));

    for instance in &batch.instances {
        let (placed, fill_ratio) = pack_instance(instance, max_bl, min_fr);
        log::info!(
            "instance {}: placed {} blocks, fill ratio {:.4}",
            instance.id,
            placed,
            fill_ratio
        );
        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok(())
}

fn pack_instance(instance: &Instance, max_bl: usize, min_fr: f64) -> (usize, f64) {
    let config = EngineConfig::default();
    let mut container = Block::container(instance.l, instance.w, instance.h, &config);

    let mut pool = ItemMultiset::new();
    for spec in &instance.box_specs {
        let boxtype = BoxType::new(
            spec.type_id,
            spec.d1,
            spec.d2,
            spec.d3,
            spec.o1,
            spec.o2,
            spec.o3,
            1,
        );
        pool.set(boxtype, spec.qty);
    }

    let evaluator = MaxVolumeEvaluator;
    let fits_space = FitsInSpaceConstraint;
    let fits_container = FitsContainerConstraint;
    let constraints: Vec<&dyn Constraint> = vec![&fits_space, &fits_container];

    let placed = pack_greedy(
        &mut container,
        &mut pool,
        &config,
        &evaluator,
        &constraints,
        max_bl,
        min_fr,
    );

    let fill_ratio = container.occupied_volume as f64 / container.volume() as f64;
    (placed, fill_ratio)
}
