use ax_core::frame::AsciiFrame;

/// Reflow a flat row-major character stream into rows of `width` characters.
///
/// The last row is short when the stream length is not a multiple of
/// `width` (samples dropped by the mapper). A zero width yields an empty frame.
///
/// # Example
/// ```
/// use ax_ascii::lines::assemble;
/// let frame = assemble(&['@', '@', '.', '.'], 2);
/// assert_eq!(frame.to_string(), "@@\n..\n");
/// ```
#[must_use]
pub fn assemble(chars: &[char], width: u32) -> AsciiFrame {
    if width == 0 {
        return AsciiFrame::default();
    }
    let rows = chars
        .chunks(width as usize)
        .map(|row| row.iter().collect::<String>())
        .collect();
    AsciiFrame::new(rows, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_multiple_gives_full_rows() {
        let chars = vec!['='; 12];
        let frame = assemble(&chars, 4);
        assert_eq!(frame.height(), 3);
        assert!(frame.rows().iter().all(|r| r.chars().count() == 4));
    }

    #[test]
    fn remainder_lands_in_short_last_row() {
        let chars: Vec<char> = "abcdefg".chars().collect();
        let frame = assemble(&chars, 3);
        assert_eq!(frame.rows(), ["abc", "def", "g"]);
    }

    #[test]
    fn empty_stream_or_zero_width_is_empty() {
        assert!(assemble(&[], 5).is_empty());
        assert!(assemble(&['x'], 0).is_empty());
    }

    #[test]
    fn backslash_in_palette_survives() {
        let frame = assemble(&['\\', '|', '\\', '|'], 2);
        assert_eq!(frame.into_text(), "\\|\n\\|\n");
    }
}
