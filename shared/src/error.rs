#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GlyphError {
    #[error("no glyph for character {0:?}")]
    UnknownGlyph(char),

    #[error("input text too long, maximum achievable: {longest_prefix:?}")]
    TextTooLong { longest_prefix: String },
}
