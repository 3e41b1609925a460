pub mod error;
pub mod fs;

pub use error::{
    AppError, AppResult, CodecError, ErrorKind, RecompressError, SettingsError, ValidationError,
};
pub use fs::{file_name, file_size};
