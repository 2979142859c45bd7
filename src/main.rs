mod args;
mod ranking;

use clap::Parser;
use log::{debug, LevelFilter};

use crate::args::Args;

fn main() {
    let args = Args::parse();

    let mut logger = env_logger::Builder::new();
    logger.filter_level(LevelFilter::Warn).parse_default_env();
    if args.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();
    debug!("args: {:?}", args);

    match ranking::run(&args) {
        Ok(()) => {
            println!("Result saved to {}", args.output);
        }
        Err(e) => {
            debug!("error: {:?}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
