use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, arg, value_parser};
use log::info;

use rpts_core::HitsSchema;
use rpts_core::models::{FamilyMap, HitSet};
use rpts_io::{load_families, load_hits};

///
/// Arguments shared by every subcommand that reads a hits file and its families.
///
pub fn input_args() -> [Arg; 3] {
    [
        arg!(--hits <HITS>)
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("Path to the hits file (plain or .gz)"),
        arg!(--families <FAMILIES>)
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("Path to the repeat family metadata JSON file (plain or .gz)"),
        arg!(--schema <SCHEMA>)
            .required(false)
            .value_parser(value_parser!(PathBuf))
            .help("Hits column layout as TOML or YAML (default: the Dfam hits layout)"),
    ]
}

pub struct Inputs {
    pub hits_path: PathBuf,
    pub families_path: PathBuf,
    pub hits: HitSet,
    pub families: FamilyMap,
}

fn read_schema(path: Option<&PathBuf>) -> Result<HitsSchema> {
    match path {
        Some(path) => HitsSchema::try_from(path.as_path())
            .with_context(|| format!("Failed to read hits schema from {}", path.display())),
        None => Ok(HitsSchema::default()),
    }
}

fn required_path<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a Path> {
    matches
        .get_one::<PathBuf>(id)
        .map(PathBuf::as_path)
        .with_context(|| format!("--{} is required", id))
}

pub fn load_inputs(matches: &ArgMatches) -> Result<Inputs> {
    let hits_path = required_path(matches, "hits")?;
    let families_path = required_path(matches, "families")?;
    let schema = read_schema(matches.get_one::<PathBuf>("schema"))?;

    let hits = load_hits(hits_path, &schema)
        .with_context(|| format!("Failed to load hits from {}", hits_path.display()))?;
    let families = load_families(families_path)
        .with_context(|| format!("Failed to load families from {}", families_path.display()))?;

    info!("{}", hits);
    info!("{}", families);

    Ok(Inputs {
        hits_path: hits_path.to_path_buf(),
        families_path: families_path.to_path_buf(),
        hits,
        families,
    })
}
