use std::fmt;

/// Texte ASCII final : une suite de lignes de largeur constante.
///
/// Every row has `width` characters except possibly the last one, which
/// can be short when samples were skipped during mapping.
///
/// # Example
/// ```
/// use ax_core::frame::AsciiFrame;
/// let frame = AsciiFrame::new(vec!["@@".into(), "..".into()], 2);
/// assert_eq!(frame.height(), 2);
/// assert_eq!(frame.to_string(), "@@\n..\n");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AsciiFrame {
    rows: Vec<String>,
    width: u32,
}

impl AsciiFrame {
    /// Build a frame from already-split rows.
    #[must_use]
    pub fn new(rows: Vec<String>, width: u32) -> Self {
        Self { rows, width }
    }

    /// Rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Declared row width in characters.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.rows.len() as u32
    }

    /// True when the frame holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render to a single text blob, one `'\n'` after every row.
    #[must_use]
    pub fn into_text(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AsciiFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_frame_renders_empty_string() {
        let frame = AsciiFrame::default();
        assert!(frame.is_empty());
        assert_eq!(frame.into_text(), "");
    }

    #[test]
    fn short_last_row_is_kept() {
        let frame = AsciiFrame::new(vec!["abc".into(), "d".into()], 3);
        assert_eq!(frame.width(), 3);
        assert_eq!(frame.rows()[1], "d");
        assert_eq!(frame.into_text(), "abc\nd\n");
    }
}
