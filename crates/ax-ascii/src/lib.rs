/// ASCII conversion engine for asciify.
///
/// Reduces pixels to luminance, maps luminance to palette characters,
/// and reflows the characters into rows.
pub mod lines;
pub mod luminance;
pub mod palette;
