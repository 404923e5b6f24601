use thiserror::Error;

/// Fatal problems found while decoding a FON2 buffer. Any of these
/// invalidates the whole file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("too short")]
    TooShort,

    #[error("bad magic")]
    BadMagic,

    #[error("invalid character range {first}..={last}")]
    InvalidCharRange { first: u8, last: u8 },

    #[error("truncated width table")]
    TruncatedWidthTable,

    #[error("truncated palette")]
    TruncatedPalette,

    #[error("truncated pixel data for character {code}")]
    TruncatedPixelData { code: u8 },

    #[error("palette index out of range ({index} > {palette_size}) for character {code}")]
    PaletteIndexOutOfRange { code: u8, index: u8, palette_size: u8 },
}

/// A requested character has no glyph in the font. Rendering skips the
/// character and keeps going.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
#[error("character {character:?} not found in glyphs")]
pub struct LookupError {
    pub character: char,
}
