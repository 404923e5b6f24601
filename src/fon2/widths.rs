use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

use crate::fon2::error::FormatError;
use crate::fon2::header::{FontHeader, HEADER_SIZE};

pub struct WidthTable {
    /// Kerning value, only present if the header flags it. Not applied.
    pub kerning: Option<i16>,
    /// One width per character code, `first_char` first.
    pub widths: Vec<u16>,
    /// Offset of the first byte after the table.
    pub end_offset: usize,
}

impl WidthTable {
    pub fn get_width(&self, header: &FontHeader, code: u8) -> Option<u16> {
        let index = code.checked_sub(header.first_char)? as usize;
        self.widths.get(index).copied()
    }
}

pub fn read_widths(data: &[u8], header: &FontHeader) -> Result<WidthTable, FormatError> {
    let mut rdr = Cursor::new(data);
    rdr.set_position(HEADER_SIZE as u64);

    let truncated = |_: std::io::Error| FormatError::TruncatedWidthTable;
    let kerning = if header.has_kerning_info {
        Some(rdr.read_i16::<LittleEndian>().map_err(truncated)?)
    } else {
        None
    };

    let num_chars = header.num_chars();
    let widths = if header.constant_width {
        let width = rdr.read_u16::<LittleEndian>().map_err(truncated)?;
        vec![ width; num_chars ]
    } else {
        let mut widths = Vec::with_capacity(num_chars);
        for _ in 0..num_chars {
            widths.push(rdr.read_u16::<LittleEndian>().map_err(truncated)?);
        }
        widths
    };

    Ok(WidthTable{ kerning, widths, end_offset: rdr.position() as usize })
}
