use crate::codec::jpeg::JpegCodec;
use crate::codec::{DecodeFailure, ImageCodec, validate_quality};
use crate::container::header::{ContainerHeader, image_entry_name};
use crate::container::writer::{ContainerWriter, EntryMethod};
use crate::domain::{ImageSource, PackRequest};
use crate::error::{Result, WdpError};
use crate::policy::{Decision, decide};
use crate::stats::{PackOutcome, PackReport};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;
use time::OffsetDateTime;
use tracing::{debug, error, info, warn};
use zip::DateTime;

#[derive(Clone, Debug, Default)]
pub struct PackOptions {
    /// When true, every entry carries the zip epoch (1980-01-01) as its
    /// modification time, so identical inputs give identical containers.
    pub deterministic: bool,
    pub method: EntryMethod,
}

enum Payload<'a> {
    Ready(Cow<'a, [u8]>),
    Skip(DecodeFailure),
}

fn entry_timestamp(deterministic: bool) -> DateTime {
    if deterministic {
        return DateTime::default();
    }
    let now = OffsetDateTime::now_utc();
    DateTime::from_date_and_time(
        now.year() as u16,
        u8::from(now.month()),
        now.day(),
        now.hour(),
        now.minute(),
        now.second(),
    )
    .unwrap_or_default()
}

/// Returns the header count.
fn validate(request: &PackRequest) -> Result<i32> {
    validate_quality(request.quality)?;
    i32::try_from(request.sources.len()).map_err(|_| {
        WdpError::InvalidArgument(format!(
            "{} sources exceed the container limit of {}",
            request.sources.len(),
            i32::MAX
        ))
    })
}

fn entry_payload<'a, C: ImageCodec>(
    source: &'a ImageSource,
    decision: Decision,
    quality: f32,
    codec: &C,
) -> Result<Payload<'a>> {
    let bytes = source.read_bytes()?;
    match decision {
        // Original bytes go in untouched, but only if they are an image at all.
        Decision::CopyRaw => Ok(match codec.probe(&bytes) {
            Ok(_) => Payload::Ready(bytes),
            Err(e) => Payload::Skip(e),
        }),
        Decision::ReEncode => {
            let image = match codec.decode(&bytes) {
                Ok(img) => img,
                Err(e) => return Ok(Payload::Skip(e)),
            };
            let jpeg = codec
                .encode_jpeg(&image, quality)
                .map_err(|e| WdpError::Encode {
                    name: source.name().to_string(),
                    source: e,
                })?;
            Ok(Payload::Ready(Cow::Owned(jpeg)))
        }
    }
}

fn write_container<W: Write + Seek, C: ImageCodec>(
    request: &PackRequest,
    declared: i32,
    sink: W,
    codec: &C,
    opts: &PackOptions,
) -> Result<PackReport> {
    info!(sources = declared, quality = request.quality, "packing images");
    let header = ContainerHeader::new(declared);
    let mut container =
        ContainerWriter::open(sink, opts.method, entry_timestamp(opts.deterministic));
    container.write_header(&header)?;

    let mut report = PackReport::new(declared);
    for (index, source) in request.sources.iter().enumerate() {
        let decision = decide(source, request.quality);
        let payload = entry_payload(source, decision, request.quality, codec).inspect_err(|e| {
            error!(source = source.name(), index, stage = decision.as_str(), error = %e, "pack aborted")
        })?;
        let bytes = match payload {
            Payload::Ready(b) => b,
            Payload::Skip(reason) => {
                warn!(source = source.name(), index, %reason, "skipping file (not an image)");
                report.skipped.push(source.name().to_string());
                continue;
            }
        };

        let name = image_entry_name(index);
        container.write_entry(&name, &bytes).inspect_err(|e| {
            error!(source = source.name(), index, stage = "write", error = %e, "pack aborted")
        })?;
        debug!(
            entry = %name,
            source = source.name(),
            decision = decision.as_str(),
            bytes = bytes.len(),
            "image packed"
        );
        report.record(decision);
    }

    let mut sink = container.close()?;
    sink.flush()?;
    info!(
        written = report.written(),
        skipped = report.skipped.len(),
        "packed images"
    );
    Ok(report)
}

/// Checks that run before anything is opened. `None` means there is nothing
/// to pack.
fn plan(request: &PackRequest) -> Result<Option<i32>> {
    let declared = validate(request)?;
    if request.sources.is_empty() {
        info!("no image files to pack");
        return Ok(None);
    }
    Ok(Some(declared))
}

/// Pack `request` into any seekable sink, using `codec` for decode/encode.
///
/// Returns [`PackOutcome::NoInput`] without touching `sink` when there are
/// no sources. Decode failures skip the source; every other failure aborts.
pub fn pack_to_writer<W: Write + Seek, C: ImageCodec>(
    request: &PackRequest,
    sink: W,
    codec: &C,
    opts: Option<&PackOptions>,
) -> Result<PackOutcome> {
    let Some(declared) = plan(request)? else {
        return Ok(PackOutcome::NoInput);
    };
    let opts = opts.cloned().unwrap_or_default();
    let report = write_container(request, declared, sink, codec, &opts)?;
    Ok(PackOutcome::Packed(report))
}

/// Pack `request` into a new WDP file at `out`.
///
/// The file is created only after validation passes and only when there is
/// something to pack. A fatal error midway leaves the partial container on
/// disk.
pub fn pack(request: &PackRequest, out: &Path, opts: Option<&PackOptions>) -> Result<PackOutcome> {
    let Some(declared) = plan(request)? else {
        return Ok(PackOutcome::NoInput);
    };
    let opts = opts.cloned().unwrap_or_default();

    debug!(out = %out.display(), "creating container");
    let sink = BufWriter::new(File::create(out)?);
    let report = write_container(request, declared, sink, &JpegCodec, &opts)?;
    Ok(PackOutcome::Packed(report))
}
