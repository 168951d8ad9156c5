use anyhow::Result;
use statemaker::{apportion, electoral_votes};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::ApportionArgs) -> Result<()> {
    let seats = if args.electoral {
        electoral_votes(&args.weights, args.seats)?
    } else {
        apportion(&args.weights, args.seats)?
    };
    println!("{}", serde_json::to_string(&seats)?);

    Ok(())
}
