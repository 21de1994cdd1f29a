use anyhow::Result;
use clap::Parser;

use pvalue_tpr::Config;

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::parse();
    let summary = pvalue_tpr::run(&config)?;
    println!("{summary}");
    Ok(())
}
