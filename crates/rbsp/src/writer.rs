/// A bit sink backed by an owned byte vector, the encoding counterpart of
/// [`BitReader`](crate::BitReader).
///
/// Bits are appended most significant first and the buffer is zero-padded
/// to a byte boundary, so [`finish`](BitWriter::finish) never fails.
#[derive(Debug, Default)]
#[must_use]
pub struct BitWriter {
    bytes: Vec<u8>,
    bit_pos: u8,
}

impl BitWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single bit.
    pub fn write_bit(&mut self, bit: bool) {
        if self.bit_pos == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 1 << (7 - self.bit_pos);
        }
        self.bit_pos = (self.bit_pos + 1) % 8;
    }

    /// Appends the low `count` bits of `value` (at most 32), most
    /// significant first.
    pub fn write_bits(&mut self, value: u32, count: u32) {
        debug_assert!(count <= 32, "count must be at most 32");

        for i in (0..count).rev() {
            self.write_bit(value >> i & 1 == 1);
        }
    }

    /// Appends `value` as an unsigned Exp-Golomb code, the inverse of
    /// [`read_exp_golomb`](crate::BitReader::read_exp_golomb).
    pub fn write_exp_golomb(&mut self, value: u64) {
        debug_assert!(value < u64::MAX, "value must be below u64::MAX");

        let code = value + 1;
        let width = 64 - code.leading_zeros();
        for _ in 0..width - 1 {
            self.write_bit(false);
        }
        for i in (0..width).rev() {
            self.write_bit(code >> i & 1 == 1);
        }
    }

    /// Returns the number of bits written so far.
    #[must_use]
    pub const fn bit_len(&self) -> usize {
        if self.bit_pos == 0 {
            self.bytes.len() * 8
        } else {
            (self.bytes.len() - 1) * 8 + self.bit_pos as usize
        }
    }

    /// Returns the written bytes, zero-padded to a byte boundary.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }
}
