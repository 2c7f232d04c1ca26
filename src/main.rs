use clap::Parser;
use color_eyre::Result;
use env_logger::Env;

use statcalc::cli::Args;
use statcalc::config::load_config;
use statcalc::report;
use statcalc::stats::Summary;

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    // Diagnostics go to stderr; stdout carries only the report
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref());
    let output = args.apply(config.output);

    let data = [1, 2, 2, 3, 4];
    let summary = Summary::compute(&data);

    println!("{}", report::render(&data, &summary, &output)?);

    Ok(())
}
