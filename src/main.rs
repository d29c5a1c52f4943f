use clap::Parser;
use pfnorm::cli::Args;
use pfnorm::normalize::{self, Options, ProcessError};
use pfnorm::pfm;
use pfnorm::types::SampleGrid;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

fn main() {
    let args = Args::parse();

    if let Err(e) = normalize_image(&args) {
        println!("Error: {e}");
        std::process::exit(1);
    }
}

/// Run the whole normalization pipeline for one target image
fn normalize_image(args: &Args) -> Result<(), ProcessError> {
    // Stage 1: validate the configuration before any file is touched
    let options = Options::from_args(args)?;

    // Stage 2: load the target and every other distinct statistics source
    let mut target = load(&args.in_image)?;
    let mut others: BTreeMap<&PathBuf, SampleGrid> = BTreeMap::new();
    for name in &options.sources {
        if name != &args.in_image {
            others.insert(name, load(name)?);
        }
    }

    // Stage 3: pool the valid values of all sources
    let sources: Vec<&SampleGrid> = std::iter::once(&target).chain(others.values()).collect();
    let mut values = normalize::pool_valid_samples(&sources, options.ignore_value);
    println!("{count} valid values", count = values.len());

    // Stage 4: estimate the normalization range
    let estimate =
        normalize::estimate_range(&mut values, options.epsilon, options.minimum, options.maximum)?;
    println!("Minimal value: {min}", min = estimate.real_min);
    println!("Maximal value: {max}", max = estimate.real_max);
    println!("Normalizing range {bounds}", bounds = estimate.bounds);

    // Stage 5: rewrite the target in place
    let outliers = normalize::apply_range(
        &mut target,
        estimate.bounds,
        options.ignore_value,
        options.clamp,
    );
    let disposition = if options.clamp { "Clamped" } else { "Removed" };
    println!("{disposition} {outliers} outliers");

    // Stage 6: persist the result
    pfm::save_pfm(&args.out_image, &target).map_err(|e| ProcessError::SaveFailed {
        name: args.out_image.display().to_string(),
        source: e,
    })?;

    Ok(())
}

fn load(name: &Path) -> Result<SampleGrid, ProcessError> {
    pfm::load_pfm(name).map_err(|e| ProcessError::LoadFailed {
        name: name.display().to_string(),
        source: e,
    })
}
