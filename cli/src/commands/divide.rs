use std::{collections::BTreeMap, fs::File, io::{self, BufWriter, Write}};

use anyhow::{Context, Result};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use crate::commands::prepare;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::DivideArgs) -> Result<()> {
    let simulation = prepare(&args.map, |_| {})?;

    let mut rng = StdRng::seed_from_u64(simulation.base_seed());
    let partitioner = simulation.divide_once(&mut rng)?;
    info!(regions = partitioner.num_regions(), orphans = partitioner.unassigned().len(), "divided map");

    // Unit id -> region, null for orphans.
    let assignment = simulation.map().units().iter()
        .zip(partitioner.assignments())
        .map(|(unit, region)| (unit.id.as_ref(), region))
        .collect::<BTreeMap<_, _>>();

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path)
            .with_context(|| format!("[divide] Failed to create {}", path.display()))?),
        None => Box::new(io::stdout().lock()),
    };
    let mut out = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut out, &assignment).context("[divide] Failed to write assignment")?;
    writeln!(out)?;
    out.flush()?;

    Ok(())
}
