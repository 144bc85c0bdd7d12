use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use crate::core::hierarchy;
use crate::matching::resolver::{ConfigError, JoinPolicy, ResolveError, Resolver};
use crate::parsing::{blacklist, locations, regions};

#[derive(Args)]
pub struct JoinArgs {
    /// The locations file (CSV, optionally gzip-compressed)
    #[arg(short = 'l', long)]
    pub locations: PathBuf,

    /// The regions GeoJSON file(s); multiple files (comma separated) produce
    /// multiple polygon columns in the output table
    #[arg(short = 'g', long = "regions", value_delimiter = ',', required = true)]
    pub regions: Vec<PathBuf>,

    /// Minimum confidence level required for matching against each regions
    /// file; exactly one per file, comma separated, in the same order
    #[arg(short = 'c', long = "min-conf-levels", value_delimiter = ',', required = true)]
    pub min_conf_levels: Vec<String>,

    /// Percentage threshold (0-100) for validating confidence levels
    #[arg(short = 't', long, default_value_t = 51.0)]
    pub conf_threshold: f64,

    /// Optional CSV listing untrusted countries for regional-level matching
    #[arg(short = 'b', long)]
    pub blacklist: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Execute the join subcommand.
///
/// # Errors
///
/// Returns an error for any fatal configuration defect (level/dataset count
/// mismatch, unknown level name, out-of-range threshold, missing placeholder
/// polygons) and for any I/O failure. Per-record geometric misses are only
/// logged.
pub fn run(args: JoinArgs, verbose: bool) -> anyhow::Result<()> {
    // Validate the policy before loading anything heavy.
    let min_levels = args
        .min_conf_levels
        .iter()
        .map(|name| {
            let name = name.trim().to_lowercase();
            hierarchy::level_index(&name).ok_or(ConfigError::UnknownLevel {
                name,
                allowed: hierarchy::level_names().join(", "),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let codes = match &args.blacklist {
        Some(path) => blacklist::load_file(path)?,
        None => HashSet::new(),
    };

    let policy = JoinPolicy::new(min_levels, args.conf_threshold, codes, args.regions.len())?;

    let datasets = regions::load_files(&args.regions)?;

    // Withheld-location records resolve to the global placeholder of every
    // dataset; a dataset without one would only fail mid-run, after rows
    // have been emitted. Check up front instead.
    for (index, dataset) in datasets.iter().enumerate() {
        if dataset.global_placeholder().is_none() {
            return Err(ResolveError::MissingGlobalPlaceholder { dataset: index + 1 }.into());
        }
    }

    let mut resolver = Resolver::new(&datasets, policy)?;

    let sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout().lock()),
    };
    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(&resolver.header())?;

    let mut count: u64 = 0;
    for record in locations::open(&args.locations)? {
        let record = record?;
        let row = resolver.resolve(&record)?;
        writer.write_record(&row)?;
        count += 1;
    }
    writer.flush()?;

    if verbose {
        for (index, stats) in resolver.stats().iter().enumerate() {
            debug!(
                dataset = index + 1,
                cache_hits = stats.cache_hits,
                scan_tests = stats.scan_tests,
                proximity_matches = stats.proximity_matches,
                misses = stats.misses,
                "lookup counters"
            );
        }
        eprintln!("Resolved {count} locations across {} dataset(s)", datasets.len());
    }

    Ok(())
}
