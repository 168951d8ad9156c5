use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};

use crate::commands::prepare;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::SimulateArgs) -> Result<()> {
    let simulation = prepare(&args.map, |config| {
        if let Some(sims) = args.sims { config.sims = sims }
        if let Some(reps) = args.reps { config.reps = reps }
    })?;

    let mut out = BufWriter::new(io::stdout().lock());
    if args.raw {
        for run in simulation.run()? {
            serde_json::to_writer(&mut out, &run).context("[simulate] Failed to write run")?;
            writeln!(out)?;
        }
    } else {
        for summary in simulation.run_and_summarize()? {
            serde_json::to_writer(&mut out, &summary).context("[simulate] Failed to write summary")?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    Ok(())
}
