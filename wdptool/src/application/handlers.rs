use std::path::PathBuf;

use tracing::debug;
use wdp_core::container::header::image_entry_name;
use wdp_core::error::Result;
use wdp_core::{
    EntryMethod, PackOptions, PackOutcome, PackRequest, collect_sources, decide, pack,
    validate_quality,
};

const NO_INPUT: &str = "No image files found.";

pub fn handle_pack(
    input: String,
    out: PathBuf,
    quality: f32,
    deterministic: bool,
    store: bool,
    dry_run: bool,
) -> Result<()> {
    // Reject a bad quality before the input is even listed.
    validate_quality(quality)?;
    let sources = collect_sources(&input)?;
    debug!(input = %input, sources = sources.len(), "collected sources");

    if dry_run {
        if sources.is_empty() {
            println!("{NO_INPUT}");
        }
        for (i, s) in sources.iter().enumerate() {
            println!(
                "{:<12} {:<10} {}",
                image_entry_name(i),
                decide(s, quality).as_str(),
                s.path().map(|p| p.display().to_string()).unwrap_or_default()
            );
        }
        return Ok(());
    }

    let opts = PackOptions {
        deterministic,
        method: if store {
            EntryMethod::Stored
        } else {
            EntryMethod::Deflated
        },
    };
    match pack(&PackRequest::new(sources, quality), &out, Some(&opts))? {
        PackOutcome::NoInput => println!("{NO_INPUT}"),
        PackOutcome::Packed(report) => {
            println!(
                "Packed {} of {} images into {}",
                report.written(),
                report.declared,
                out.display()
            );
            for name in &report.skipped {
                eprintln!("skipped (not an image): {name}");
            }
        }
    }
    Ok(())
}
