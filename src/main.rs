use anyhow::Result;
use clap::Parser;

use rtg_lists::{app, cli};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    app::run(cli)
}
