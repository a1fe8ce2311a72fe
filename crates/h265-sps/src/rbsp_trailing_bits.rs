use rbsp::BitReader;

use crate::SpsDecodeError;

/// Described by ISO/IEC 23008-2 - 7.4.2.1
///
/// Consumes the `rbsp_stop_one_bit` and the `rbsp_alignment_zero_bit`s up
/// to the next byte boundary. The bit values themselves are not validated.
pub(crate) fn rbsp_trailing_bits(bit_reader: &mut BitReader<'_>) -> Result<(), SpsDecodeError> {
    bit_reader.read_bit()?; // rbsp_stop_one_bit
    bit_reader.align();
    Ok(())
}
