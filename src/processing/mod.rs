//! Image processing: naming, validation, the JPEG codec seam and the batch loop.

pub mod batch;
pub mod codec;
pub mod naming;
pub mod validation;

pub use batch::BatchProcessor;
pub use codec::{DecodedImage, ImageJpegCodec, JpegCodec, PixelLayout};
pub use naming::destination;
pub use validation::{is_jpeg_path, is_valid_batch, validate_batch};
