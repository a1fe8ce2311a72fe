use crate::EndOfData;

/// A bit cursor over a byte slice (the most significant bit of the first
/// byte is read first).
#[derive(Debug, Clone)]
#[must_use]
pub struct BitReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a reader positioned at the first bit of `data`.
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bits left to read.
    #[must_use]
    pub const fn bits_remaining(&self) -> usize {
        self.data.len() * 8 - self.pos
    }

    /// Reads a single bit.
    pub fn read_bit(&mut self) -> Result<bool, EndOfData> {
        let byte = *self.data.get(self.pos / 8).ok_or(EndOfData)?;
        let bit = byte >> (7 - self.pos % 8) & 1;
        self.pos += 1;
        Ok(bit == 1)
    }

    /// Reads `count` bits (at most 32), packed big-endian: the first bit
    /// read becomes the most significant bit of the result.
    pub fn read_bits(&mut self, count: u32) -> Result<u32, EndOfData> {
        debug_assert!(count <= 32, "count must be at most 32");

        let mut value = 0u32;
        for _ in 0..count {
            value = value << 1 | self.read_bit()? as u32;
        }

        Ok(value)
    }

    /// Reads an unsigned Exp-Golomb code, `ue(v)`.
    ///
    /// A code with `k` leading zero bits decodes to `2^k - 1` plus the `k`
    /// suffix bits that follow the terminating one bit, so `1` is 0, `010`
    /// is 1 and `011` is 2.
    pub fn read_exp_golomb(&mut self) -> Result<u64, EndOfData> {
        let mut leading_zeros = 0u32;
        while !self.read_bit()? {
            leading_zeros += 1;
            // a prefix of 64 zeros cannot terminate in a representable value
            if leading_zeros >= 64 {
                return Err(EndOfData);
            }
        }

        let mut suffix = 0u64;
        for _ in 0..leading_zeros {
            suffix = suffix << 1 | self.read_bit()? as u64;
        }

        Ok((1u64 << leading_zeros) - 1 + suffix)
    }

    /// True when the cursor sits on a byte boundary.
    #[must_use]
    pub const fn is_aligned(&self) -> bool {
        self.pos % 8 == 0
    }

    /// Advances the cursor to the next byte boundary (a no-op when already
    /// aligned).
    pub const fn align(&mut self) {
        self.pos = self.pos.next_multiple_of(8);
    }

    /// The `more_rbsp_data()` predicate of ISO/IEC 23008-2 - 7.2.
    ///
    /// True when at least one data bit remains before the final
    /// `rbsp_stop_one_bit`, which is the last 1-valued bit of the buffer.
    /// False when nothing remains, when the cursor sits on the stop bit, or
    /// when only the stop bit and alignment zeros remain behind the cursor.
    #[must_use]
    pub fn has_more_data(&self) -> bool {
        let Some(byte_idx) = self.data.iter().rposition(|&b| b != 0) else {
            return false;
        };
        let stop_bit = byte_idx * 8 + 7 - self.data[byte_idx].trailing_zeros() as usize;
        self.pos < stop_bit
    }
}
