use anyhow::Context;
use clap::Parser;
use log::{error, info};

use cellmd::args_parser::Args;
use cellmd::system::System;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut system = System::new(args.infile.clone());
    system
        .read()
        .with_context(|| format!("could not read {}", args.infile))?;
    if let Some(seed) = args.seed {
        system.context_mut().config.seed = Some(seed);
    }

    let report = system.run()?;
    for failure in &report.record_failures {
        error!("{failure}");
    }
    info!(
        "{} steps done, {} record failures",
        report.steps,
        report.record_failures.len()
    );
    println!(
        "E_pot = {:.8}  E_kin = {:.8}  E_tot = {:.8}",
        report.potential_energy, report.kinetic_energy, report.total_energy
    );
    Ok(())
}
