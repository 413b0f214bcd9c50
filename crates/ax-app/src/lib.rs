/// Conversion pipeline and command-line front end for asciify.
pub mod cli;
pub mod pipeline;

pub use pipeline::{Conversion, convert_bytes, convert_image, convert_path, try_convert};
