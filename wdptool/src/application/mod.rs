pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use clap::Parser;
use wdp_core::error::Result;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Pack {
            input,
            out,
            quality,
            deterministic,
            store,
            dry_run,
        } => handlers::handle_pack(input, out, quality, deterministic, store, dry_run),
    }
}
