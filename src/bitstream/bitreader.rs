//! BitReader: A module for the huffzip library.
//!
//! Reads a packed bitstream, most significant bit first. The whole compressed buffer is held in memory,
//! so the reader simply walks a cursor over a byte slice.
//!

const BIT_MASK: u8 = 0xff;

/// Reads bits from a borrowed byte buffer.
#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a new BitReader positioned on the first bit of the buffer.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            cursor: 0,
            bit_index: 0,
        }
    }

    /// Return bit as Option<usize> (1 or 0), or None if there is no more data to read
    pub fn bit(&mut self) -> Option<usize> {
        if self.cursor == self.buffer.len() {
            return None;
        }
        let bit =
            (self.buffer[self.cursor] & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        Some(bit as usize)
    }

    /// Return Option<Bool> *true* if the next bit is 1, *false* if 0, consuming the bit,
    /// or None if there is no more data to read
    pub fn bool_bit(&mut self) -> Option<bool> {
        self.bit().map(|bit| bit == 1)
    }

    /// Return Option<usize> of the next n bits, or None if fewer than n bits are left.
    /// Nothing is consumed when the read fails.
    pub fn bint(&mut self, mut n: usize) -> Option<usize> {
        /*
        Used to read the 8 bit symbols in the tree and the pad count. Bits are taken from
        the partial byte first, then whole bytes, then a final partial byte.
        */
        if n > self.remaining() {
            return None;
        }
        let mut result = 0_usize;

        // Test if we have a partial byte of data. If we do, read from it.
        if self.bit_index > 0 {
            let needed = n.min(8 - self.bit_index);
            result = ((self.buffer[self.cursor] & BIT_MASK >> self.bit_index)
                >> (8 - self.bit_index - needed)) as usize;
            self.bit_index += needed;
            if self.bit_index == 8 {
                self.cursor += 1;
            }
            self.bit_index %= 8;
            n -= needed;
        }
        // Whole bytes
        while n >= 8 {
            result = result << 8 | (self.buffer[self.cursor]) as usize;
            self.cursor += 1;
            n -= 8;
        }
        // Leading bits of the next byte
        if n > 0 {
            result = result << n | (self.buffer[self.cursor] >> (8 - n)) as usize;
            self.bit_index = n;
        }
        Some(result)
    }

    /// Returns a byte as an Option<u8>, or None if there is no more data to read. This is
    /// a convenience function, and calls bint(8).
    pub fn byte(&mut self) -> Option<u8> {
        self.bint(8).map(|byte| byte as u8)
    }

    /// Skips n bits. Returns false (and consumes nothing) if fewer than n bits are left.
    pub fn skip(&mut self, n: usize) -> bool {
        if n > self.remaining() {
            return false;
        }
        let pos = self.position() + n;
        self.cursor = pos / 8;
        self.bit_index = pos % 8;
        true
    }

    /// Number of bits consumed so far.
    pub fn position(&self) -> usize {
        self.cursor * 8 + self.bit_index
    }

    /// Number of bits left to read.
    pub fn remaining(&self) -> usize {
        self.buffer.len() * 8 - self.position()
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

/// Debugging function. Render the first `len` bits of a packed buffer as a string of 0s and 1s
/// (stops early if the buffer is shorter).
pub fn bit_string(data: &[u8], len: usize) -> String {
    let mut br = BitReader::new(data);
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        match br.bit() {
            Some(bit) => out.push(if bit == 1 { '1' } else { '0' }),
            None => break,
        }
    }
    out
}

#[cfg(test)]
mod test {
    use super::{bit_string, BitReader};

    #[test]
    fn bit_string_test() {
        let x = [0b1010_0000, 0b1000_0000];
        assert_eq!(bit_string(&x, 9), "101000001");
        assert_eq!(bit_string(&x, 0), "");
        assert_eq!(bit_string(&x, 100).len(), 16);
    }

    #[test]
    fn basic_test() {
        let x = [0b10000001_u8];
        let mut br = BitReader::new(&x);
        assert_eq!(br.bit(), Some(1));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(1));
        assert_eq!(br.bit(), None);
    }

    #[test]
    fn bint_test() {
        let x = [0b00011011];
        let mut br = BitReader::new(&x);
        assert_eq!(br.bint(5), Some(3));
        assert_eq!(br.bint(1), Some(0));
        assert_eq!(br.bint(2), Some(3));
        assert_eq!(br.bint(1), None);
    }

    #[test]
    fn bint_across_bytes_test() {
        let x = [0b0000_0101, 0b1010_0000];
        let mut br = BitReader::new(&x);
        assert_eq!(br.bint(5), Some(0));
        assert_eq!(br.bint(8), Some(0b1011_0100));
        assert_eq!(br.loc(), "[1.5]");
        assert_eq!(br.remaining(), 3);
    }

    #[test]
    fn short_bint_consumes_nothing_test() {
        let x = [0xff];
        let mut br = BitReader::new(&x);
        br.bit();
        assert_eq!(br.bint(8), None);
        assert_eq!(br.position(), 1);
        assert_eq!(br.bint(7), Some(0x7f));
    }

    #[test]
    fn byte_test() {
        let x = "Hello, world!".as_bytes();
        let mut br = BitReader::new(x);
        assert_eq!(br.byte(), Some(b'H'));
        assert_eq!(br.byte(), Some(b'e'));
        br.bit();
        assert_eq!(br.byte(), Some(b'l' << 1 | b'l' >> 7));
    }

    #[test]
    fn skip_test() {
        let x = "Hello, world!".as_bytes();
        let mut br = BitReader::new(x);
        assert!(br.skip(5 * 8 + 1));
        assert_eq!(br.loc(), "[5.1]");
        assert!(!br.skip(1000));
        assert_eq!(br.loc(), "[5.1]");
    }

    #[test]
    fn bool_bit_test() {
        let x = [0b01010000];
        let mut br = BitReader::new(&x);
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(true));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(true));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), None);
    }
}
