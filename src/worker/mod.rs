//! Background execution of batches and the channel back to the caller.

pub mod channel;
pub mod controller;
pub mod error;

pub use channel::{CancellationFlag, ProgressReceiver, ProgressSender, progress_channel};
pub use controller::{BatchController, BatchHandle};
pub use error::{SubmitError, SubmitResult};
