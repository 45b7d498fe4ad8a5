#![doc = r#"
Bounds checked cursor over a resident byte buffer.

Every read either returns the requested bytes and advances, or returns
[`ReaderErrorKind::OutOfBounds`] and leaves the position untouched.
"#]

mod error;
pub use error::*;

mod varlen;
pub use varlen::*;

/// A read-only cursor over a MIDI file buffer
#[derive(Debug, Clone)]
pub struct Reader<'slc> {
    data: &'slc [u8],
    position: usize,
}

impl<'slc> Reader<'slc> {
    /// Create a reader positioned at the first byte of the slice
    pub const fn from_byte_slice(data: &'slc [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// The full underlying buffer
    pub const fn buffer(&self) -> &'slc [u8] {
        self.data
    }

    /// The offset of the next byte to be read
    pub const fn buffer_position(&self) -> usize {
        self.position
    }

    /// Bytes left between the position and the end of the buffer
    pub const fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// True once every byte has been read
    pub const fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Moves the cursor to an absolute offset.
    ///
    /// The offset may equal the buffer length, but not exceed it.
    pub fn jump_to_position(&mut self, position: usize) -> ReadResult<()> {
        if position > self.data.len() {
            return Err(ReaderError::oob(position));
        }
        self.position = position;
        Ok(())
    }

    /// Returns the next byte without advancing
    pub fn peek_byte(&self) -> ReadResult<u8> {
        self.data
            .get(self.position)
            .copied()
            .ok_or(ReaderError::oob(self.position))
    }

    /// Reads a single byte
    pub fn read_next(&mut self) -> ReadResult<u8> {
        let byte = self.peek_byte()?;
        self.position += 1;
        Ok(byte)
    }

    /// Reads `len` bytes
    pub fn read_exact(&mut self, len: usize) -> ReadResult<&'slc [u8]> {
        let end = self
            .position
            .checked_add(len)
            .ok_or(ReaderError::oob(self.position))?;
        let data = self.data;
        let bytes = data
            .get(self.position..end)
            .ok_or(ReaderError::oob(self.position))?;
        self.position = end;
        Ok(bytes)
    }

    /// Reads exactly `N` bytes into an array
    pub fn read_exact_size<const N: usize>(&mut self) -> ReadResult<[u8; N]> {
        let start = self.position;
        let bytes = self.read_exact(N)?;
        bytes.try_into().map_err(|_| ReaderError::oob(start))
    }

    /// Reads a big endian `u16`
    pub fn read_u16(&mut self) -> ReadResult<u16> {
        self.read_exact_size().map(u16::from_be_bytes)
    }

    /// Reads a big endian `u32`
    pub fn read_u32(&mut self) -> ReadResult<u32> {
        self.read_exact_size().map(u32::from_be_bytes)
    }

    /// Reads a variable length quantity
    pub fn read_varlen(&mut self) -> ReadResult<VarLen> {
        VarLen::read(self)
    }

    /// Reads `len` bytes from an absolute offset without advancing
    pub fn peek_at(&self, position: usize, len: usize) -> ReadResult<&'slc [u8]> {
        let end = position
            .checked_add(len)
            .ok_or(ReaderError::oob(position))?;
        self.data.get(position..end).ok_or(ReaderError::oob(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sequential_reads() {
        let bytes = [1, 2, 3, 4, 5, 6, 7];
        let mut reader = Reader::from_byte_slice(&bytes);
        assert_eq!(reader.peek_byte().unwrap(), 1);
        assert_eq!(reader.read_next().unwrap(), 1);
        assert_eq!(reader.read_exact(2).unwrap(), &[2, 3]);
        assert_eq!(reader.read_u16().unwrap(), 0x0405);
        assert_eq!(reader.buffer_position(), 5);
        assert_eq!(reader.remaining(), 2);
        assert_eq!(reader.read_exact_size::<2>().unwrap(), [6, 7]);
        assert!(reader.is_exhausted());
    }

    #[test]
    fn reads_past_the_end_do_not_advance() {
        let bytes = [0xAA, 0xBB, 0xCC];
        let mut reader = Reader::from_byte_slice(&bytes);
        reader.read_next().unwrap();

        let err = reader.read_exact(3).unwrap_err();
        assert!(err.is_out_of_bounds());
        assert_eq!(err.position(), 1);
        assert_eq!(reader.buffer_position(), 1);

        assert!(reader.read_u32().unwrap_err().is_out_of_bounds());
        assert!(reader.read_exact(usize::MAX).unwrap_err().is_out_of_bounds());
        assert_eq!(reader.buffer_position(), 1);

        reader.read_exact(2).unwrap();
        assert!(reader.peek_byte().unwrap_err().is_out_of_bounds());
        assert!(reader.read_next().unwrap_err().is_out_of_bounds());
        assert_eq!(reader.read_exact(0).unwrap(), &[] as &[u8]);
    }

    #[test]
    fn absolute_access() {
        let bytes = [0, 1, 2, 3];
        let mut reader = Reader::from_byte_slice(&bytes);
        assert_eq!(reader.peek_at(1, 3).unwrap(), &[1, 2, 3]);
        assert!(reader.peek_at(2, 3).unwrap_err().is_out_of_bounds());
        assert!(reader.peek_at(usize::MAX, 2).unwrap_err().is_out_of_bounds());

        reader.jump_to_position(4).unwrap();
        assert!(reader.is_exhausted());
        assert!(reader.jump_to_position(5).unwrap_err().is_out_of_bounds());
        assert_eq!(reader.buffer_position(), 4);
    }
}
