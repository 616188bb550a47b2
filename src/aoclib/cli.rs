use std::path::PathBuf;

use clap::Args;

// Arguments every program takes: the puzzle input and a verbosity switch.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Path to the puzzle input
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn init_logging(verbose: bool) {
    let log_level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder()
        .format_module_path(false)
        .format_timestamp_millis()
        .filter_level(log_level)
        .init();
}
