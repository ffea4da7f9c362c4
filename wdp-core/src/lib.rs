#![forbid(unsafe_code)]

pub mod domain;
pub mod error;
pub mod policy;
pub mod stats;

pub mod codec;

pub mod container {
    pub mod header;
    pub mod writer;
}

pub mod pack {
    pub mod walker;
    pub mod writer;
}

// Re-exports: stable API surface
pub use codec::jpeg::JpegCodec;
pub use codec::{ImageCodec, validate_quality};
pub use container::header::PROTOCOL_VERSION;
pub use container::writer::{ContainerWriter, EntryMethod};
pub use domain::{ImageSource, PackRequest};
pub use pack::walker::collect_sources;
pub use pack::writer::{PackOptions, pack, pack_to_writer};
pub use policy::{Decision, decide};
pub use stats::{PackOutcome, PackReport};
