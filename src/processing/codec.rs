//! JPEG decode/encode capability.
//!
//! The batch loop only needs "bytes in, pixels out" and "pixels plus quality
//! in, bytes out". [`ImageJpegCodec`] provides both through the `image` crate;
//! tests swap in their own [`JpegCodec`].

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ExtendedColorType, ImageFormat};
use crate::core::Quality;
use crate::utils::CodecError;

/// Channel layout of decoded pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelLayout {
    /// One byte per pixel
    Luma8,
    /// Three bytes per pixel
    Rgb8,
}

impl PixelLayout {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Luma8 => 1,
            Self::Rgb8 => 3,
        }
    }

    fn color_type(self) -> ExtendedColorType {
        match self {
            Self::Luma8 => ExtendedColorType::L8,
            Self::Rgb8 => ExtendedColorType::Rgb8,
        }
    }
}

/// Raw pixel data of one decoded image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub layout: PixelLayout,
    pub pixels: Vec<u8>,
}

/// Decode/encode primitive used by the batch loop.
pub trait JpegCodec: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, CodecError>;

    fn encode(&self, image: &DecodedImage, quality: Quality) -> Result<Vec<u8>, CodecError>;
}

/// Baseline JPEG codec backed by the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageJpegCodec;

impl JpegCodec for ImageJpegCodec {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, CodecError> {
        let image = image::load_from_memory_with_format(bytes, ImageFormat::Jpeg)?;

        // Grayscale stays grayscale; everything else (incl. CMYK) is flattened to RGB
        let decoded = match image {
            DynamicImage::ImageLuma8(gray) => DecodedImage {
                width: gray.width(),
                height: gray.height(),
                layout: PixelLayout::Luma8,
                pixels: gray.into_raw(),
            },
            other => {
                let rgb = other.to_rgb8();
                DecodedImage {
                    width: rgb.width(),
                    height: rgb.height(),
                    layout: PixelLayout::Rgb8,
                    pixels: rgb.into_raw(),
                }
            }
        };

        Ok(decoded)
    }

    fn encode(&self, image: &DecodedImage, quality: Quality) -> Result<Vec<u8>, CodecError> {
        let expected = image.width as usize * image.height as usize * image.layout.bytes_per_pixel();
        if image.pixels.len() != expected {
            return Err(CodecError(format!(
                "pixel buffer holds {} bytes, expected {} for {}x{} {:?}",
                image.pixels.len(),
                expected,
                image.width,
                image.height,
                image.layout
            )));
        }

        // The encoder's quantisation scale bottoms out at 1
        let q = quality.value().max(1);

        let mut buf = Vec::new();
        {
            let mut encoder = JpegEncoder::new_with_quality(&mut buf, q);
            encoder.encode(&image.pixels, image.width, image.height, image.layout.color_type())?;
        }

        Ok(buf)
    }
}
