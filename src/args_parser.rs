use clap::Parser;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Input file describing the box, the particles and the run
    #[arg(short, long, default_value_t = String::from("input.md"))]
    pub infile: String,

    /// Seed for the velocity initialisation, overrides the `seed` command
    #[arg(short, long)]
    pub seed: Option<u64>,
}
