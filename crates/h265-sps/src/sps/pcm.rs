use rbsp::BitReader;

use crate::SpsDecodeError;

/// PCM sample handling, only decoded when `pcm_enabled_flag` is set.
///
/// ISO/IEC 23008-2 - 7.4.3.2.1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pcm {
    /// `pcm_sample_bit_depth_luma_minus1`
    pub pcm_sample_bit_depth_luma_minus1: u8,
    /// `pcm_sample_bit_depth_chroma_minus1`
    pub pcm_sample_bit_depth_chroma_minus1: u8,
    /// `log2_min_pcm_luma_coding_block_size_minus3`
    pub log2_min_pcm_luma_coding_block_size_minus3: u64,
    /// `log2_diff_max_min_pcm_luma_coding_block_size`
    pub log2_diff_max_min_pcm_luma_coding_block_size: u64,
    /// `pcm_loop_filter_disabled_flag`
    pub pcm_loop_filter_disabled_flag: bool,
}

impl Pcm {
    pub(crate) fn parse(bit_reader: &mut BitReader<'_>) -> Result<Self, SpsDecodeError> {
        let pcm_sample_bit_depth_luma_minus1 = bit_reader.read_bits(4)? as u8;
        let pcm_sample_bit_depth_chroma_minus1 = bit_reader.read_bits(4)? as u8;
        let log2_min_pcm_luma_coding_block_size_minus3 = bit_reader.read_exp_golomb()?;
        let log2_diff_max_min_pcm_luma_coding_block_size = bit_reader.read_exp_golomb()?;
        let pcm_loop_filter_disabled_flag = bit_reader.read_bit()?;

        Ok(Self {
            pcm_sample_bit_depth_luma_minus1,
            pcm_sample_bit_depth_chroma_minus1,
            log2_min_pcm_luma_coding_block_size_minus3,
            log2_diff_max_min_pcm_luma_coding_block_size,
            pcm_loop_filter_disabled_flag,
        })
    }
}
