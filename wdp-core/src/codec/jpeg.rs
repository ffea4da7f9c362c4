//! `image`-crate backed codec: JPEG/PNG in, baseline JPEG out.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError, ImageReader};

use super::{DecodeFailure, ImageCodec, RasterImage, jpeg_quality};

#[derive(Copy, Clone, Debug, Default)]
pub struct JpegCodec;

impl JpegCodec {
    fn reader(bytes: &[u8]) -> Result<ImageReader<Cursor<&[u8]>>, DecodeFailure> {
        let mut reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(DecodeFailure::new)?;
        // Only unrecognized bytes may be skipped; a large valid image must
        // still decode, so the default allocation cap is lifted.
        reader.no_limits();
        Ok(reader)
    }
}

impl ImageCodec for JpegCodec {
    fn decode(&self, bytes: &[u8]) -> Result<RasterImage, DecodeFailure> {
        Self::reader(bytes)?.decode().map_err(DecodeFailure::new)
    }

    fn probe(&self, bytes: &[u8]) -> Result<(u32, u32), DecodeFailure> {
        Self::reader(bytes)?
            .into_dimensions()
            .map_err(DecodeFailure::new)
    }

    fn encode_jpeg(&self, image: &RasterImage, quality: f32) -> Result<Vec<u8>, ImageError> {
        let mut buffer = Cursor::new(Vec::new());
        let encoder = JpegEncoder::new_with_quality(&mut buffer, jpeg_quality(quality));

        // JPEG has no alpha; grayscale sources stay single-channel.
        if image.color().has_color() {
            let rgb = image.to_rgb8();
            encoder.write_image(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)?;
        } else {
            let luma = image.to_luma8();
            encoder.write_image(luma.as_raw(), luma.width(), luma.height(), ExtendedColorType::L8)?;
        }

        Ok(buffer.into_inner())
    }
}
