use packed_struct::prelude::*;

use crate::fon2::error::FormatError;

pub const HEADER_SIZE: usize = 12;
const MAGIC: &[u8; 4] = b"FON2";

const FLAG_KERNING: u8 = 0x01;

/// Fields following the magic, bytes 4..12.
#[derive(PackedStruct)]
#[packed_struct(endian="lsb")]
struct RawHeader {
    character_height: u16,
    first_char: u8,
    last_char: u8,
    constant_width: u8,
    shading_type: u8,
    palette_size: u8,
    flags: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontHeader {
    pub identifier: [u8; 4],
    pub character_height: u16,
    pub first_char: u8,
    pub last_char: u8,
    pub constant_width: bool,
    pub shading_type: u8,
    /// Number of active colours; the palette holds one more entry.
    pub palette_size: u8,
    pub has_kerning_info: bool,
}

impl FontHeader {
    pub fn num_chars(&self) -> usize {
        (self.last_char - self.first_char) as usize + 1
    }

    pub fn palette_entries(&self) -> usize {
        self.palette_size as usize + 1
    }
}

pub fn parse_header(data: &[u8]) -> Result<FontHeader, FormatError> {
    if data.len() < HEADER_SIZE {
        return Err(FormatError::TooShort);
    }
    if &data[0..4] != MAGIC {
        return Err(FormatError::BadMagic);
    }
    let raw = RawHeader::unpack_from_slice(&data[4..HEADER_SIZE]).map_err(|_| FormatError::TooShort)?;
    if raw.first_char > raw.last_char {
        return Err(FormatError::InvalidCharRange{ first: raw.first_char, last: raw.last_char });
    }

    let mut identifier = [ 0u8; 4 ];
    identifier.copy_from_slice(&data[0..4]);
    Ok(FontHeader{
        identifier,
        character_height: raw.character_height,
        first_char: raw.first_char,
        last_char: raw.last_char,
        constant_width: raw.constant_width != 0,
        shading_type: raw.shading_type,
        palette_size: raw.palette_size,
        has_kerning_info: (raw.flags & FLAG_KERNING) != 0,
    })
}
