use rbsp::BitReader;

use crate::SpsDecodeError;

mod hrd_parameters;

pub use hrd_parameters::*;

/// `aspect_ratio_idc` value signaling an explicit sample aspect ratio.
///
/// ISO/IEC 23008-2 - Table E.1
pub const EXTENDED_SAR: u8 = 255;

/// VUI parameters.
///
/// `vui_parameters()`
///
/// Every syntax structure gated behind a present flag is an `Option`, so
/// an absent field stays distinguishable from one decoded as zero.
///
/// - ISO/IEC 23008-2 - E.2.1
/// - ISO/IEC 23008-2 - E.3.1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VuiParameters {
    /// `None` when `aspect_ratio_info_present_flag` was 0.
    pub aspect_ratio_info: Option<AspectRatioInfo>,
    /// `overscan_appropriate_flag`, `None` when `overscan_info_present_flag`
    /// was 0.
    pub overscan_appropriate_flag: Option<bool>,
    /// `None` when `video_signal_type_present_flag` was 0.
    pub video_signal_type: Option<VideoSignalType>,
    /// `None` when `chroma_loc_info_present_flag` was 0.
    pub chroma_loc_info: Option<ChromaLocInfo>,
    /// `neutral_chroma_indication_flag`
    pub neutral_chroma_indication_flag: bool,
    /// `field_seq_flag`
    pub field_seq_flag: bool,
    /// `frame_field_info_present_flag`
    pub frame_field_info_present_flag: bool,
    /// `None` when `default_display_window_flag` was 0.
    pub default_display_window: Option<DefaultDisplayWindow>,
    /// `None` when `vui_timing_info_present_flag` was 0.
    pub timing_info: Option<TimingInfo>,
    /// `None` when `bitstream_restriction_flag` was 0.
    pub bitstream_restriction: Option<BitstreamRestriction>,
}

impl VuiParameters {
    pub(crate) fn parse(
        bit_reader: &mut BitReader<'_>,
        sps_max_sub_layers_minus1: u8,
    ) -> Result<Self, SpsDecodeError> {
        let mut aspect_ratio_info = None;
        if bit_reader.read_bit()? {
            aspect_ratio_info = Some(AspectRatioInfo::parse(bit_reader)?);
        }

        let mut overscan_appropriate_flag = None;
        if bit_reader.read_bit()? {
            overscan_appropriate_flag = Some(bit_reader.read_bit()?);
        }

        let mut video_signal_type = None;
        if bit_reader.read_bit()? {
            video_signal_type = Some(VideoSignalType::parse(bit_reader)?);
        }

        let mut chroma_loc_info = None;
        if bit_reader.read_bit()? {
            chroma_loc_info = Some(ChromaLocInfo {
                chroma_sample_loc_type_top_field: bit_reader.read_exp_golomb()?,
                chroma_sample_loc_type_bottom_field: bit_reader.read_exp_golomb()?,
            });
        }

        let neutral_chroma_indication_flag = bit_reader.read_bit()?;
        let field_seq_flag = bit_reader.read_bit()?;
        let frame_field_info_present_flag = bit_reader.read_bit()?;

        let mut default_display_window = None;
        if bit_reader.read_bit()? {
            default_display_window = Some(DefaultDisplayWindow {
                def_disp_win_left_offset: bit_reader.read_exp_golomb()?,
                def_disp_win_right_offset: bit_reader.read_exp_golomb()?,
                def_disp_win_top_offset: bit_reader.read_exp_golomb()?,
                def_disp_win_bottom_offset: bit_reader.read_exp_golomb()?,
            });
        }

        let mut timing_info = None;
        if bit_reader.read_bit()? {
            timing_info = Some(TimingInfo::parse(bit_reader, sps_max_sub_layers_minus1)?);
        }

        let mut bitstream_restriction = None;
        if bit_reader.read_bit()? {
            bitstream_restriction = Some(BitstreamRestriction {
                tiles_fixed_structure_flag: bit_reader.read_bit()?,
                motion_vectors_over_pic_boundaries_flag: bit_reader.read_bit()?,
                restricted_ref_pic_lists_flag: bit_reader.read_bit()?,
                min_spatial_segmentation_idc: bit_reader.read_exp_golomb()?,
                max_bytes_per_pic_denom: bit_reader.read_exp_golomb()?,
                max_bits_per_min_cu_denom: bit_reader.read_exp_golomb()?,
                log2_max_mv_length_horizontal: bit_reader.read_exp_golomb()?,
                log2_max_mv_length_vertical: bit_reader.read_exp_golomb()?,
            });
        }

        Ok(Self {
            aspect_ratio_info,
            overscan_appropriate_flag,
            video_signal_type,
            chroma_loc_info,
            neutral_chroma_indication_flag,
            field_seq_flag,
            frame_field_info_present_flag,
            default_display_window,
            timing_info,
            bitstream_restriction,
        })
    }
}

/// Sample aspect ratio of the luma samples.
///
/// ISO/IEC 23008-2 - Table E.1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AspectRatioInfo {
    /// `aspect_ratio_idc`
    pub aspect_ratio_idc: u8,
    /// `sar_width` and `sar_height`, only decoded when `aspect_ratio_idc`
    /// is [`EXTENDED_SAR`].
    pub sar: Option<Sar>,
}

impl AspectRatioInfo {
    fn parse(bit_reader: &mut BitReader<'_>) -> Result<Self, SpsDecodeError> {
        let aspect_ratio_idc = bit_reader.read_bits(8)? as u8;

        let mut sar = None;
        if aspect_ratio_idc == EXTENDED_SAR {
            sar = Some(Sar {
                sar_width: bit_reader.read_bits(16)? as u16,
                sar_height: bit_reader.read_bits(16)? as u16,
            });
        }

        Ok(Self {
            aspect_ratio_idc,
            sar,
        })
    }
}

/// An explicit sample aspect ratio, in arbitrary units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sar {
    /// `sar_width`
    pub sar_width: u16,
    /// `sar_height`
    pub sar_height: u16,
}

/// `video_format`, `video_full_range_flag` and the optional colour
/// description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSignalType {
    /// `video_format`, as specified in ISO/IEC 23008-2 - Table E.2.
    pub video_format: u8,
    /// `video_full_range_flag`
    pub video_full_range_flag: bool,
    /// `None` when `colour_description_present_flag` was 0.
    pub colour_description: Option<ColourDescription>,
}

impl VideoSignalType {
    fn parse(bit_reader: &mut BitReader<'_>) -> Result<Self, SpsDecodeError> {
        let video_format = bit_reader.read_bits(3)? as u8;
        let video_full_range_flag = bit_reader.read_bit()?;

        let mut colour_description = None;
        if bit_reader.read_bit()? {
            colour_description = Some(ColourDescription {
                colour_primaries: bit_reader.read_bits(8)? as u8,
                transfer_characteristics: bit_reader.read_bits(8)? as u8,
                matrix_coeffs: bit_reader.read_bits(8)? as u8,
            });
        }

        Ok(Self {
            video_format,
            video_full_range_flag,
            colour_description,
        })
    }
}

/// Colour primaries, transfer characteristics and matrix coefficients.
///
/// ISO/IEC 23008-2 - Tables E.3 through E.5
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourDescription {
    /// `colour_primaries`
    pub colour_primaries: u8,
    /// `transfer_characteristics`
    pub transfer_characteristics: u8,
    /// `matrix_coeffs`
    pub matrix_coeffs: u8,
}

/// Chroma sample positions for the top and bottom fields.
///
/// Only meaningful for 4:2:0 content, see ISO/IEC 23008-2 - Figure E.1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromaLocInfo {
    /// `chroma_sample_loc_type_top_field`
    pub chroma_sample_loc_type_top_field: u64,
    /// `chroma_sample_loc_type_bottom_field`
    pub chroma_sample_loc_type_bottom_field: u64,
}

/// The default display window, a rectangle inside the conformance
/// cropping window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultDisplayWindow {
    /// `def_disp_win_left_offset`
    pub def_disp_win_left_offset: u64,
    /// `def_disp_win_right_offset`
    pub def_disp_win_right_offset: u64,
    /// `def_disp_win_top_offset`
    pub def_disp_win_top_offset: u64,
    /// `def_disp_win_bottom_offset`
    pub def_disp_win_bottom_offset: u64,
}

/// Timing information and the optional HRD parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingInfo {
    /// `vui_num_units_in_tick`
    pub num_units_in_tick: u32,
    /// `vui_time_scale`
    pub time_scale: u32,
    /// `vui_num_ticks_poc_diff_one_minus1`, only decoded when
    /// `vui_poc_proportional_to_timing_flag` was set.
    pub num_ticks_poc_diff_one_minus1: Option<u64>,
    /// `None` when `vui_hrd_parameters_present_flag` was 0.
    pub hrd_parameters: Option<HrdParameters>,
}

impl TimingInfo {
    fn parse(
        bit_reader: &mut BitReader<'_>,
        sps_max_sub_layers_minus1: u8,
    ) -> Result<Self, SpsDecodeError> {
        let num_units_in_tick = bit_reader.read_bits(32)?;
        let time_scale = bit_reader.read_bits(32)?;

        let mut num_ticks_poc_diff_one_minus1 = None;
        if bit_reader.read_bit()? {
            num_ticks_poc_diff_one_minus1 = Some(bit_reader.read_exp_golomb()?);
        }

        let mut hrd_parameters = None;
        if bit_reader.read_bit()? {
            hrd_parameters = Some(HrdParameters::parse(
                bit_reader,
                sps_max_sub_layers_minus1,
            )?);
        }

        Ok(Self {
            num_units_in_tick,
            time_scale,
            num_ticks_poc_diff_one_minus1,
            hrd_parameters,
        })
    }
}

/// Bitstream restriction information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitstreamRestriction {
    /// `tiles_fixed_structure_flag`
    pub tiles_fixed_structure_flag: bool,
    /// `motion_vectors_over_pic_boundaries_flag`
    pub motion_vectors_over_pic_boundaries_flag: bool,
    /// `restricted_ref_pic_lists_flag`
    pub restricted_ref_pic_lists_flag: bool,
    /// `min_spatial_segmentation_idc`
    pub min_spatial_segmentation_idc: u64,
    /// `max_bytes_per_pic_denom`
    pub max_bytes_per_pic_denom: u64,
    /// `max_bits_per_min_cu_denom`
    pub max_bits_per_min_cu_denom: u64,
    /// `log2_max_mv_length_horizontal`
    pub log2_max_mv_length_horizontal: u64,
    /// `log2_max_mv_length_vertical`
    pub log2_max_mv_length_vertical: u64,
}
