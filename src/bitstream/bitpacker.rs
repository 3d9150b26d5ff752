use log::error;

/// Creates a bitstream for output. Bits are queued and packed into bytes most significant bit first.
pub struct BitPacker {
    pub output: Vec<u8>,
    queue: u64,
    q_bits: u8,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of the size specified (in bytes). Call flush()
    /// to push any partial byte into the buffer before reading the output.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
        }
    }

    /// Internal bitstream write function common to all out.XX functions.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Writes the low `depth` bits of `data` (0-32 bits), most significant first.
    pub fn out_bits(&mut self, depth: u8, data: u32) {
        if depth == 0 {
            return;
        }
        debug_assert!(depth <= 32);
        self.queue <<= depth; //shift queue by bit length
        self.queue |= (data & (0xffffffff >> (32 - depth))) as u64; //add data portion to queue
        self.q_bits += depth; //update depth of queue bits
        self.write_stream();
    }

    /// Writes a single bit.
    pub fn out_bit(&mut self, bit: bool) {
        self.out_bits(1, bit as u32);
    }

    /// Puts an 8 bit word of pre-packed binary encoded data on the stream.
    pub fn out8(&mut self, data: u8) {
        self.out_bits(8, data as u32);
    }

    /// Writes `count` zero bits.
    pub fn out_zeros(&mut self, mut count: usize) {
        while count > 0 {
            let n = count.min(32);
            self.out_bits(n as u8, 0);
            count -= n;
        }
    }

    /// Writes the low `len` bits of a (possibly long) code, most significant first.
    pub fn out_code(&mut self, len: u8, bits: u128) {
        let mut left = len;
        while left > 0 {
            let n = left.min(32);
            left -= n;
            self.out_bits(n, (bits >> left) as u32);
        }
    }

    /// Total number of bits written so far, including those still queued.
    pub fn bit_len(&self) -> usize {
        self.output.len() * 8 + self.q_bits as usize
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// signficant bits. Returns how many padding bits were added.
    pub fn flush(&mut self) -> u8 {
        let mut padding = 0;
        if self.q_bits > 0 {
            padding = 8 - self.q_bits;
            self.queue <<= padding; //pad the queue with zeros
            self.q_bits += padding;
            self.write_stream(); // write out all that is left
            if self.q_bits > 0 {
                error!("Stuff left in the BitPacker queue.");
            }
        }
        padding
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format! {"[{}.{}]", self.bit_len() / 8, self.bit_len() % 8}
    }
}

#[cfg(test)]
mod test {
    use super::BitPacker;

    #[test]
    fn out8_test() {
        let mut bw = BitPacker::new(100);
        bw.out8(b'!');
        bw.out8(b' ');
        assert_eq!(bw.flush(), 0);
        assert_eq!(bw.output, "! ".as_bytes());
    }

    #[test]
    fn out_bits_and_loc_test() {
        let mut bw = BitPacker::new(100);
        bw.out_bits(3, 0b101);
        assert_eq!("[0.3]", &bw.loc());
        bw.out_bits(5, 0b1111_0001);
        assert_eq!("[1.0]", &bw.loc());
        bw.out_bits(24, 3);
        assert_eq!(bw.flush(), 0);
        assert_eq!(bw.output, &[0b1011_0001, 0, 0, 3]);
        assert_eq!("[4.0]", &bw.loc());
    }

    #[test]
    fn flush_pads_low_bits_test() {
        let mut bw = BitPacker::new(100);
        bw.out_bit(true);
        bw.out_bit(true);
        bw.out_bit(false);
        bw.out_bit(true);
        assert_eq!(bw.bit_len(), 4);
        assert_eq!(bw.flush(), 4);
        assert_eq!(bw.output, [0b1101_0000]);
    }

    #[test]
    fn out_zeros_test() {
        let mut bw = BitPacker::new(100);
        bw.out_bit(true);
        bw.out_zeros(70);
        bw.out_bit(true);
        assert_eq!(bw.bit_len(), 72);
        bw.flush();
        assert_eq!(bw.output[0], 0x80);
        assert_eq!(bw.output[8], 0x01);
        assert!(bw.output[1..8].iter().all(|&b| b == 0));
    }

    #[test]
    fn out_code_long_test() {
        let mut bw = BitPacker::new(100);
        // 40 bit code: 0xAB followed by 32 set bits
        let code = (0xab_u128 << 32) | 0xffff_ffff;
        bw.out_code(40, code);
        bw.flush();
        assert_eq!(bw.output, [0xab, 0xff, 0xff, 0xff, 0xff]);
    }
}
