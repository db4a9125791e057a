use crate::error::{DecodeError, DecodeResult};

/// Forward-only cursor over an encoded key.
///
/// Positions are absolute offsets into the slice the reader was created from,
/// so errors can point at the offending byte.
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        ByteReader { bytes, pos: 0 }
    }

    /// Read a single byte
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnexpectedEndOfInput`] if no bytes remain.
    pub fn read_byte(&mut self) -> DecodeResult<u8> {
        let byte = *self
            .bytes
            .get(self.pos)
            .ok_or(DecodeError::UnexpectedEndOfInput { offset: self.pos })?;
        self.pos += 1;
        Ok(byte)
    }

    /// Read a single byte, complementing it when `complement` is set.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnexpectedEndOfInput`] if no bytes remain.
    #[inline]
    pub fn read_byte_with(&mut self, complement: bool) -> DecodeResult<u8> {
        let byte = self.read_byte()?;
        Ok(if complement { !byte } else { byte })
    }

    /// Get current byte position
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_until_exhausted() {
        let bytes = [0x25, 0x02, 0x00];
        let mut reader = ByteReader::new(&bytes);

        assert_eq!(reader.read_byte().unwrap(), 0x25);
        assert_eq!(reader.read_byte_with(true).unwrap(), 0xfd);
        assert_eq!(reader.position(), 2);
        assert_eq!(reader.read_byte().unwrap(), 0x00);
        assert_eq!(reader.position(), bytes.len());
        assert_eq!(
            reader.read_byte(),
            Err(DecodeError::UnexpectedEndOfInput { offset: 3 })
        );
    }
}
