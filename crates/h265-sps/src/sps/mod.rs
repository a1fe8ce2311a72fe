use rbsp::{BitReader, unescape_rbsp};

use crate::rbsp_trailing_bits::rbsp_trailing_bits;
use crate::{MAX_SHORT_TERM_REF_PIC_SETS, SpsDecodeError, UnimplementedSyntax};

mod conformance_window;
mod long_term_ref_pics;
mod pcm;
mod profile_tier_level;
mod st_ref_pic_set;
mod sub_layer_ordering_info;
mod vui_parameters;

pub use conformance_window::*;
pub use long_term_ref_pics::*;
pub use pcm::*;
pub use profile_tier_level::*;
pub use st_ref_pic_set::*;
pub use sub_layer_ordering_info::*;
pub use vui_parameters::*;

/// A decoded sequence parameter set.
///
/// `seq_parameter_set_rbsp()`
///
/// - ISO/IEC 23008-2 - 7.3.2.2.1
/// - ISO/IEC 23008-2 - 7.4.3.2.1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sps {
    /// `sps_video_parameter_set_id`
    pub sps_video_parameter_set_id: u8,
    /// `sps_max_sub_layers_minus1`, at most 6.
    pub sps_max_sub_layers_minus1: u8,
    /// `sps_temporal_id_nesting_flag`
    pub sps_temporal_id_nesting_flag: bool,
    /// `profile_tier_level(1, sps_max_sub_layers_minus1)`
    pub profile_tier_level: ProfileTierLevel,
    /// `sps_seq_parameter_set_id`
    pub sps_seq_parameter_set_id: u64,
    /// `chroma_format_idc`, at most 3.
    pub chroma_format_idc: u64,
    /// `separate_colour_plane_flag`, only decoded when `chroma_format_idc`
    /// is 3.
    pub separate_colour_plane_flag: Option<bool>,
    /// `pic_width_in_luma_samples`
    pub pic_width_in_luma_samples: u64,
    /// `pic_height_in_luma_samples`
    pub pic_height_in_luma_samples: u64,
    /// `None` when `conformance_window_flag` was 0.
    pub conformance_window: Option<ConformanceWindow>,
    /// `bit_depth_luma_minus8`
    pub bit_depth_luma_minus8: u64,
    /// `bit_depth_chroma_minus8`
    pub bit_depth_chroma_minus8: u64,
    /// `log2_max_pic_order_cnt_lsb_minus4`, at most 12.
    pub log2_max_pic_order_cnt_lsb_minus4: u64,
    /// `sps_sub_layer_ordering_info_present_flag`
    pub sps_sub_layer_ordering_info_present_flag: bool,
    /// The decoded-picture-buffer sizing triples.
    pub sub_layer_ordering_info: SubLayerOrderingInfo,
    /// `log2_min_luma_coding_block_size_minus3`
    pub log2_min_luma_coding_block_size_minus3: u64,
    /// `log2_diff_max_min_luma_coding_block_size`
    pub log2_diff_max_min_luma_coding_block_size: u64,
    /// `log2_min_luma_transform_block_size_minus2`
    pub log2_min_luma_transform_block_size_minus2: u64,
    /// `log2_diff_max_min_luma_transform_block_size`
    pub log2_diff_max_min_luma_transform_block_size: u64,
    /// `max_transform_hierarchy_depth_inter`
    pub max_transform_hierarchy_depth_inter: u64,
    /// `max_transform_hierarchy_depth_intra`
    pub max_transform_hierarchy_depth_intra: u64,
    /// `scaling_list_enabled_flag`
    ///
    /// `true` with no decode error means the default scaling lists apply;
    /// explicit `scaling_list_data()` fails the decode.
    pub scaling_list_enabled_flag: bool,
    /// `amp_enabled_flag`
    pub amp_enabled_flag: bool,
    /// `sample_adaptive_offset_enabled_flag`
    pub sample_adaptive_offset_enabled_flag: bool,
    /// `None` when `pcm_enabled_flag` was 0.
    pub pcm: Option<Pcm>,
    /// One entry per `num_short_term_ref_pic_sets`.
    pub short_term_ref_pic_sets: Vec<ShortTermRefPicSet>,
    /// `None` when `long_term_ref_pics_present_flag` was 0.
    pub long_term_ref_pics: Option<LongTermRefPics>,
    /// `sps_temporal_mvp_enabled_flag`
    pub sps_temporal_mvp_enabled_flag: bool,
    /// `strong_intra_smoothing_enabled_flag`
    pub strong_intra_smoothing_enabled_flag: bool,
    /// `None` when `vui_parameters_present_flag` was 0.
    pub vui_parameters: Option<VuiParameters>,
    /// `sps_extension_4bits`, `None` when `sps_extension_present_flag`
    /// was 0. A non-zero value means trailing `sps_extension_data_flag`
    /// bits were consumed and discarded.
    pub sps_extension_4bits: Option<u8>,
}

impl Sps {
    /// Decodes the payload of an SPS NAL unit, everything after the
    /// two-byte NAL-unit header.
    ///
    /// Emulation prevention bytes are removed first, then the RBSP is
    /// decoded in one pass. The result is a complete entity or an error,
    /// never a partial one.
    pub fn decode(payload: &[u8]) -> Result<Self, SpsDecodeError> {
        let rbsp = unescape_rbsp(payload);
        let bit_reader = &mut BitReader::new(&rbsp);

        let sps_video_parameter_set_id = bit_reader.read_bits(4)? as u8;
        let sps_max_sub_layers_minus1 = bit_reader.read_bits(3)? as u8;
        if sps_max_sub_layers_minus1 > 6 {
            return Err(SpsDecodeError::BoundExceeded {
                field: "sps_max_sub_layers_minus1",
                value: sps_max_sub_layers_minus1 as u64,
                max: 6,
            });
        }
        let sps_temporal_id_nesting_flag = bit_reader.read_bit()?;

        let profile_tier_level =
            ProfileTierLevel::parse(bit_reader, true, sps_max_sub_layers_minus1)?;

        let sps_seq_parameter_set_id = bit_reader.read_exp_golomb()?;

        let chroma_format_idc = bit_reader.read_exp_golomb()?;
        if chroma_format_idc > 3 {
            return Err(SpsDecodeError::BoundExceeded {
                field: "chroma_format_idc",
                value: chroma_format_idc,
                max: 3,
            });
        }
        let mut separate_colour_plane_flag = None;
        if chroma_format_idc == 3 {
            separate_colour_plane_flag = Some(bit_reader.read_bit()?);
        }

        let pic_width_in_luma_samples = bit_reader.read_exp_golomb()?;
        let pic_height_in_luma_samples = bit_reader.read_exp_golomb()?;
        if pic_width_in_luma_samples > u32::MAX as u64 {
            return Err(SpsDecodeError::BoundExceeded {
                field: "pic_width_in_luma_samples",
                value: pic_width_in_luma_samples,
                max: u32::MAX as u64,
            });
        }
        if pic_height_in_luma_samples > u32::MAX as u64 {
            return Err(SpsDecodeError::BoundExceeded {
                field: "pic_height_in_luma_samples",
                value: pic_height_in_luma_samples,
                max: u32::MAX as u64,
            });
        }

        let mut conformance_window = None;
        if bit_reader.read_bit()? {
            conformance_window = Some(ConformanceWindow::parse(bit_reader)?);
        }

        let bit_depth_luma_minus8 = bit_reader.read_exp_golomb()?;
        let bit_depth_chroma_minus8 = bit_reader.read_exp_golomb()?;

        let log2_max_pic_order_cnt_lsb_minus4 = bit_reader.read_exp_golomb()?;
        if log2_max_pic_order_cnt_lsb_minus4 > 12 {
            return Err(SpsDecodeError::BoundExceeded {
                field: "log2_max_pic_order_cnt_lsb_minus4",
                value: log2_max_pic_order_cnt_lsb_minus4,
                max: 12,
            });
        }

        let sps_sub_layer_ordering_info_present_flag = bit_reader.read_bit()?;
        let sub_layer_ordering_info = SubLayerOrderingInfo::parse(
            bit_reader,
            sps_sub_layer_ordering_info_present_flag,
            sps_max_sub_layers_minus1,
        )?;

        let log2_min_luma_coding_block_size_minus3 = bit_reader.read_exp_golomb()?;
        let log2_diff_max_min_luma_coding_block_size = bit_reader.read_exp_golomb()?;
        let ctb_log2_size_y = log2_min_luma_coding_block_size_minus3
            .saturating_add(log2_diff_max_min_luma_coding_block_size)
            .saturating_add(3);
        if ctb_log2_size_y > 6 {
            return Err(SpsDecodeError::BoundExceeded {
                field: "CtbLog2SizeY",
                value: ctb_log2_size_y,
                max: 6,
            });
        }
        let log2_min_luma_transform_block_size_minus2 = bit_reader.read_exp_golomb()?;
        let log2_diff_max_min_luma_transform_block_size = bit_reader.read_exp_golomb()?;
        let max_transform_hierarchy_depth_inter = bit_reader.read_exp_golomb()?;
        let max_transform_hierarchy_depth_intra = bit_reader.read_exp_golomb()?;

        let scaling_list_enabled_flag = bit_reader.read_bit()?;
        if scaling_list_enabled_flag && bit_reader.read_bit()? {
            return Err(UnimplementedSyntax::ScalingListData.into());
        }

        let amp_enabled_flag = bit_reader.read_bit()?;
        let sample_adaptive_offset_enabled_flag = bit_reader.read_bit()?;

        let mut pcm = None;
        if bit_reader.read_bit()? {
            pcm = Some(Pcm::parse(bit_reader)?);
        }

        let num_short_term_ref_pic_sets = bit_reader.read_exp_golomb()?;
        if num_short_term_ref_pic_sets > MAX_SHORT_TERM_REF_PIC_SETS {
            return Err(SpsDecodeError::BoundExceeded {
                field: "num_short_term_ref_pic_sets",
                value: num_short_term_ref_pic_sets,
                max: MAX_SHORT_TERM_REF_PIC_SETS,
            });
        }
        let mut short_term_ref_pic_sets =
            Vec::with_capacity(num_short_term_ref_pic_sets as usize);
        for i in 0..num_short_term_ref_pic_sets as usize {
            let set = ShortTermRefPicSet::parse(
                bit_reader,
                i,
                num_short_term_ref_pic_sets,
                &short_term_ref_pic_sets,
            )?;
            short_term_ref_pic_sets.push(set);
        }

        let mut long_term_ref_pics = None;
        if bit_reader.read_bit()? {
            long_term_ref_pics = Some(LongTermRefPics::parse(
                bit_reader,
                log2_max_pic_order_cnt_lsb_minus4,
            )?);
        }

        let sps_temporal_mvp_enabled_flag = bit_reader.read_bit()?;
        let strong_intra_smoothing_enabled_flag = bit_reader.read_bit()?;

        let mut vui_parameters = None;
        if bit_reader.read_bit()? {
            vui_parameters = Some(VuiParameters::parse(bit_reader, sps_max_sub_layers_minus1)?);
        }

        let mut sps_extension_4bits = None;
        if bit_reader.read_bit()? {
            let sps_range_extension_flag = bit_reader.read_bit()?;
            let sps_multilayer_extension_flag = bit_reader.read_bit()?;
            let sps_3d_extension_flag = bit_reader.read_bit()?;
            let sps_scc_extension_flag = bit_reader.read_bit()?;
            let extension_4bits = bit_reader.read_bits(4)? as u8;

            if sps_range_extension_flag {
                return Err(UnimplementedSyntax::RangeExtension.into());
            }
            if sps_multilayer_extension_flag {
                return Err(UnimplementedSyntax::MultilayerExtension.into());
            }
            if sps_3d_extension_flag {
                return Err(UnimplementedSyntax::Sps3dExtension.into());
            }
            if sps_scc_extension_flag {
                return Err(UnimplementedSyntax::SccExtension.into());
            }

            if extension_4bits != 0 {
                // sps_extension_data_flag, up to the rbsp_stop_one_bit
                while bit_reader.has_more_data() {
                    bit_reader.read_bit()?;
                }
            }

            sps_extension_4bits = Some(extension_4bits);
        }

        rbsp_trailing_bits(bit_reader)?;

        Ok(Self {
            sps_video_parameter_set_id,
            sps_max_sub_layers_minus1,
            sps_temporal_id_nesting_flag,
            profile_tier_level,
            sps_seq_parameter_set_id,
            chroma_format_idc,
            separate_colour_plane_flag,
            pic_width_in_luma_samples,
            pic_height_in_luma_samples,
            conformance_window,
            bit_depth_luma_minus8,
            bit_depth_chroma_minus8,
            log2_max_pic_order_cnt_lsb_minus4,
            sps_sub_layer_ordering_info_present_flag,
            sub_layer_ordering_info,
            log2_min_luma_coding_block_size_minus3,
            log2_diff_max_min_luma_coding_block_size,
            log2_min_luma_transform_block_size_minus2,
            log2_diff_max_min_luma_transform_block_size,
            max_transform_hierarchy_depth_inter,
            max_transform_hierarchy_depth_intra,
            scaling_list_enabled_flag,
            amp_enabled_flag,
            sample_adaptive_offset_enabled_flag,
            pcm,
            short_term_ref_pic_sets,
            long_term_ref_pics,
            sps_temporal_mvp_enabled_flag,
            strong_intra_smoothing_enabled_flag,
            vui_parameters,
            sps_extension_4bits,
        })
    }

    /// `MinCbLog2SizeY = log2_min_luma_coding_block_size_minus3 + 3` (7-10)
    #[must_use]
    pub const fn min_cb_log2_size_y(&self) -> u64 {
        self.log2_min_luma_coding_block_size_minus3 + 3
    }

    /// `CtbLog2SizeY = MinCbLog2SizeY + log2_diff_max_min_luma_coding_block_size` (7-11)
    #[must_use]
    pub const fn ctb_log2_size_y(&self) -> u64 {
        self.min_cb_log2_size_y() + self.log2_diff_max_min_luma_coding_block_size
    }

    /// `MinCbSizeY = 1 << MinCbLog2SizeY` (7-12)
    #[must_use]
    pub const fn min_cb_size_y(&self) -> u64 {
        1 << self.min_cb_log2_size_y()
    }

    /// `CtbSizeY = 1 << CtbLog2SizeY` (7-13)
    #[must_use]
    pub const fn ctb_size_y(&self) -> u64 {
        1 << self.ctb_log2_size_y()
    }

    /// `PicWidthInMinCbsY = pic_width_in_luma_samples / MinCbSizeY` (7-14)
    #[must_use]
    pub const fn pic_width_in_min_cbs_y(&self) -> u64 {
        self.pic_width_in_luma_samples / self.min_cb_size_y()
    }

    /// `PicWidthInCtbsY = Ceil(pic_width_in_luma_samples / CtbSizeY)` (7-15)
    #[must_use]
    pub const fn pic_width_in_ctbs_y(&self) -> u64 {
        self.pic_width_in_luma_samples.div_ceil(self.ctb_size_y())
    }

    /// `PicHeightInMinCbsY = pic_height_in_luma_samples / MinCbSizeY` (7-16)
    #[must_use]
    pub const fn pic_height_in_min_cbs_y(&self) -> u64 {
        self.pic_height_in_luma_samples / self.min_cb_size_y()
    }

    /// `PicHeightInCtbsY = Ceil(pic_height_in_luma_samples / CtbSizeY)` (7-17)
    #[must_use]
    pub const fn pic_height_in_ctbs_y(&self) -> u64 {
        self.pic_height_in_luma_samples.div_ceil(self.ctb_size_y())
    }

    /// `PicSizeInMinCbsY = PicWidthInMinCbsY * PicHeightInMinCbsY` (7-18)
    #[must_use]
    pub const fn pic_size_in_min_cbs_y(&self) -> u64 {
        self.pic_width_in_min_cbs_y() * self.pic_height_in_min_cbs_y()
    }

    /// `PicSizeInCtbsY = PicWidthInCtbsY * PicHeightInCtbsY` (7-19)
    #[must_use]
    pub const fn pic_size_in_ctbs_y(&self) -> u64 {
        self.pic_width_in_ctbs_y() * self.pic_height_in_ctbs_y()
    }
}
