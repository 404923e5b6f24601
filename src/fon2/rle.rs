/// Pull decoder for the FON2 pixel stream.
///
/// Control byte `n < 128` copies the next `n + 1` bytes, `n > 128` repeats
/// the following byte `257 - n` times. `128` is a no-op. The decoder is
/// shared by all glyphs of a font and never rewinds.
pub struct RleDecoder<'a> {
    input: &'a [u8],
    offset: usize,
    literal: usize,
    repeat: usize,
    datum: u8,
}

const RLE_NOOP: u8 = 128;

impl<'a> RleDecoder<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self{ input, offset: 0, literal: 0, repeat: 0, datum: 0 }
    }

    /// Position in the compressed input.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Compressed bytes not consumed yet.
    pub fn remaining(&self) -> usize {
        self.input.len() - self.offset
    }

    /// Upper bound on the values still obtainable; a byte never expands
    /// to more than 128 values.
    pub fn max_remaining_values(&self) -> u64 {
        self.repeat as u64 + self.remaining() as u64 * 128
    }

    pub fn next_value(&mut self) -> Option<u8> {
        loop {
            if self.repeat > 0 {
                self.repeat -= 1;
                return Some(self.datum);
            }
            if self.literal > 0 {
                let value = *self.input.get(self.offset)?;
                self.offset += 1;
                self.literal -= 1;
                return Some(value);
            }

            let code = *self.input.get(self.offset)?;
            self.offset += 1;
            match code {
                0..=127 => {
                    self.literal = code as usize + 1;
                },
                RLE_NOOP => { },
                _ => {
                    self.datum = *self.input.get(self.offset)?;
                    self.offset += 1;
                    self.repeat = 257 - code as usize;
                }
            }
        }
    }
}

impl Iterator for RleDecoder<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.next_value()
    }
}
