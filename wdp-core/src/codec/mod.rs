//! Image decoding and JPEG re-encoding.
//!
//! The packer only talks to [`ImageCodec`]; [`jpeg::JpegCodec`] is the
//! implementation backed by the `image` crate. Quality is carried as a
//! normalized factor in `[MIN_QUALITY, MAX_QUALITY]` and mapped onto the
//! encoder's 1..=100 scale at encode time.

use crate::error::{Result, WdpError};
use image::{DynamicImage, ImageError};
use thiserror::Error;

pub mod jpeg;

pub type RasterImage = DynamicImage;

pub const MIN_QUALITY: f32 = 0.01;
pub const MAX_QUALITY: f32 = 1.0;

/// The bytes are not an image this codec understands. Never fatal: the
/// packer skips the source and moves on.
#[derive(Debug, Error)]
#[error("not a recognized image: {reason}")]
pub struct DecodeFailure {
    pub reason: String,
}

impl DecodeFailure {
    pub fn new(reason: impl ToString) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }
}

pub trait ImageCodec {
    /// Fully decode `bytes` into pixels.
    fn decode(&self, bytes: &[u8]) -> std::result::Result<RasterImage, DecodeFailure>;

    /// Read only the image header; returns `(width, height)`.
    fn probe(&self, bytes: &[u8]) -> std::result::Result<(u32, u32), DecodeFailure>;

    /// Encode to a baseline JPEG stream at a normalized `quality`.
    fn encode_jpeg(
        &self,
        image: &RasterImage,
        quality: f32,
    ) -> std::result::Result<Vec<u8>, ImageError>;
}

/// Reject qualities outside `[0.01, 1.0]`, NaN included.
pub fn validate_quality(quality: f32) -> Result<()> {
    if (MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
        Ok(())
    } else {
        Err(WdpError::InvalidArgument(format!(
            "compression quality must be between {MIN_QUALITY} and {MAX_QUALITY}, got {quality}"
        )))
    }
}

/// Map a normalized quality onto the JPEG encoder scale (1..=100).
pub fn jpeg_quality(quality: f32) -> u8 {
    (quality * 100.0).round().clamp(1.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_quality_bounds_inclusive() {
        assert!(validate_quality(0.01).is_ok());
        assert!(validate_quality(1.0).is_ok());
        assert!(validate_quality(0.5).is_ok());
    }

    #[test]
    fn test_validate_quality_rejects_out_of_range() {
        for q in [0.0, 0.009, 1.0001, 1.5, -1.0, f32::NAN, f32::INFINITY] {
            assert!(
                matches!(validate_quality(q), Err(WdpError::InvalidArgument(_))),
                "quality {q} should be rejected"
            );
        }
    }

    #[test]
    fn test_jpeg_quality_endpoints() {
        assert_eq!(jpeg_quality(0.01), 1);
        assert_eq!(jpeg_quality(0.5), 50);
        assert_eq!(jpeg_quality(0.85), 85);
        assert_eq!(jpeg_quality(1.0), 100);
    }

    proptest! {
        #[test]
        fn prop_valid_quality_maps_into_encoder_range(quality in 0.01f32..=1.0) {
            prop_assert!(validate_quality(quality).is_ok());
            let q = jpeg_quality(quality);
            prop_assert!((1..=100).contains(&q));
        }

        #[test]
        fn prop_mapping_is_monotonic(a in 0.01f32..=1.0, b in 0.01f32..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(jpeg_quality(lo) <= jpeg_quality(hi));
        }
    }
}
