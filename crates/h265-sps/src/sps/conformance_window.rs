use rbsp::BitReader;

use crate::SpsDecodeError;

/// Conformance cropping window offsets.
///
/// Only decoded when `conformance_window_flag` is set; the four offsets
/// crop the decoded pictures, in units of the chroma sub-sampling grid.
///
/// ISO/IEC 23008-2 - 7.4.3.2.1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConformanceWindow {
    /// `conf_win_left_offset`
    pub conf_win_left_offset: u64,
    /// `conf_win_right_offset`
    pub conf_win_right_offset: u64,
    /// `conf_win_top_offset`
    pub conf_win_top_offset: u64,
    /// `conf_win_bottom_offset`
    pub conf_win_bottom_offset: u64,
}

impl ConformanceWindow {
    pub(crate) fn parse(bit_reader: &mut BitReader<'_>) -> Result<Self, SpsDecodeError> {
        let conf_win_left_offset = bit_reader.read_exp_golomb()?;
        let conf_win_right_offset = bit_reader.read_exp_golomb()?;
        let conf_win_top_offset = bit_reader.read_exp_golomb()?;
        let conf_win_bottom_offset = bit_reader.read_exp_golomb()?;

        Ok(Self {
            conf_win_left_offset,
            conf_win_right_offset,
            conf_win_top_offset,
            conf_win_bottom_offset,
        })
    }
}
