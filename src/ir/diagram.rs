/// Formatting context supplied by a circuit renderer when asking a gate for its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiagramArgs {
    /// Allow non-ASCII glyphs (e.g. superscript exponents) in labels.
    pub use_unicode_characters: bool,
}

impl DiagramArgs {
    pub fn ascii() -> Self {
        Self::default()
    }

    pub fn unicode() -> Self {
        Self {
            use_unicode_characters: true,
        }
    }
}

/// Renders an integer as superscript digits, e.g. `-12` as `⁻¹²`.
pub(crate) fn superscript(value: i64) -> String {
    value
        .to_string()
        .chars()
        .map(|c| match c {
            '-' => '⁻',
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            other => other,
        })
        .collect()
}
