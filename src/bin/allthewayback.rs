use anyhow::Result;
use clap::Parser;
use std::env;
use std::time::Duration;

use allthewayback::archive::{new_client, SearchConfig};
use allthewayback::args::Args;
use allthewayback::search::run_searches;

fn setup_logging(verbose: bool) {
    if verbose {
        env::set_var("RUST_LOG", "info");
    } else {
        env::set_var("RUST_LOG", "error");
    }
    env_logger::init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    args.validated_domain()?;

    let config = SearchConfig::new(args.from_year, Duration::from_secs(args.rate_limit));
    let client = new_client()?;

    match run_searches(&client, &config, &args)? {
        Some(path) => println!("[*] Saved results to {}", path.display()),
        None => println!("[!] Execution Finished: No data found :("),
    }

    Ok(())
}
