/// Palette, configuration, errors, and output types for asciify.
///
/// This crate contains the shared data used by every stage of the
/// image → ASCII pipeline.

pub mod charset;
pub mod config;
pub mod error;
pub mod frame;

pub use charset::{BucketLut, PALETTE};
pub use config::ConvertConfig;
pub use error::CoreError;
pub use frame::AsciiFrame;
