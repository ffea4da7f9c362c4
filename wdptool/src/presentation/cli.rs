use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "wdptool: pack images into WDP containers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pack a directory (or a comma-separated list of files) into a WDP container
    Pack {
        /// image directory, or comma-separated image paths
        input: String,

        /// output .wdp file
        out: PathBuf,

        /// compression quality, 0.01 to 1.0 (1.0 copies .jpg files untouched)
        #[arg(allow_negative_numbers = true)]
        quality: f32,

        /// zero entry timestamps for reproducible output
        #[arg(long)]
        deterministic: bool,

        /// store entries without deflate
        #[arg(long)]
        store: bool,

        /// list what would be packed without writing anything
        #[arg(long)]
        dry_run: bool,
    },
}
