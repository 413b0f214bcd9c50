/// Image input for asciify: decoding and aspect-corrected resizing.

pub mod image;
pub mod resize;
