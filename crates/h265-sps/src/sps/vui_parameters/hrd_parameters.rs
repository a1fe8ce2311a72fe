use rbsp::BitReader;

use crate::SpsDecodeError;

/// HRD parameters.
///
/// `hrd_parameters(commonInfPresentFlag, maxNumSubLayersMinus1)`, decoded
/// with `commonInfPresentFlag` equal to 1 as the SPS grammar always passes
/// it.
///
/// - ISO/IEC 23008-2 - E.2.2
/// - ISO/IEC 23008-2 - E.3.2
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HrdParameters {
    /// `nal_hrd_parameters_present_flag`
    pub nal_hrd_parameters_present_flag: bool,
    /// `vcl_hrd_parameters_present_flag`
    pub vcl_hrd_parameters_present_flag: bool,
    /// Sub-picture HRD parameters, `None` when
    /// `sub_pic_hrd_params_present_flag` was 0.
    pub sub_pic_hrd_params: Option<SubPicHrdParams>,
    /// `bit_rate_scale`, 0 when neither HRD type is present.
    pub bit_rate_scale: u8,
    /// `cpb_size_scale`, 0 when neither HRD type is present.
    pub cpb_size_scale: u8,
    /// `initial_cpb_removal_delay_length_minus1`, inferred as 23 when not
    /// decoded.
    pub initial_cpb_removal_delay_length_minus1: u8,
    /// `au_cpb_removal_delay_length_minus1`, inferred as 23 when not
    /// decoded.
    pub au_cpb_removal_delay_length_minus1: u8,
    /// `dpb_output_delay_length_minus1`, inferred as 23 when not decoded.
    pub dpb_output_delay_length_minus1: u8,
    /// One entry per sub-layer, `maxNumSubLayersMinus1 + 1` in total.
    pub sub_layers: Vec<HrdSubLayer>,
}

impl HrdParameters {
    pub(crate) fn parse(
        bit_reader: &mut BitReader<'_>,
        max_num_sub_layers_minus1: u8,
    ) -> Result<Self, SpsDecodeError> {
        let nal_hrd_parameters_present_flag = bit_reader.read_bit()?;
        let vcl_hrd_parameters_present_flag = bit_reader.read_bit()?;

        let mut sub_pic_hrd_params = None;
        let mut bit_rate_scale = 0;
        let mut cpb_size_scale = 0;
        let mut initial_cpb_removal_delay_length_minus1 = 23;
        let mut au_cpb_removal_delay_length_minus1 = 23;
        let mut dpb_output_delay_length_minus1 = 23;

        if nal_hrd_parameters_present_flag || vcl_hrd_parameters_present_flag {
            let sub_pic_hrd_params_present_flag = bit_reader.read_bit()?;
            if sub_pic_hrd_params_present_flag {
                sub_pic_hrd_params = Some(SubPicHrdParams {
                    tick_divisor_minus2: bit_reader.read_bits(8)? as u8,
                    du_cpb_removal_delay_increment_length_minus1: bit_reader.read_bits(5)? as u8,
                    sub_pic_cpb_params_in_pic_timing_sei_flag: bit_reader.read_bit()?,
                    dpb_output_delay_du_length_minus1: bit_reader.read_bits(5)? as u8,
                    cpb_size_du_scale: 0,
                });
            }

            bit_rate_scale = bit_reader.read_bits(4)? as u8;
            cpb_size_scale = bit_reader.read_bits(4)? as u8;

            // cpb_size_du_scale sits after the two scales in the grammar
            if let Some(params) = &mut sub_pic_hrd_params {
                params.cpb_size_du_scale = bit_reader.read_bits(4)? as u8;
            }

            initial_cpb_removal_delay_length_minus1 = bit_reader.read_bits(5)? as u8;
            au_cpb_removal_delay_length_minus1 = bit_reader.read_bits(5)? as u8;
            dpb_output_delay_length_minus1 = bit_reader.read_bits(5)? as u8;
        }

        let mut sub_layers = Vec::with_capacity(max_num_sub_layers_minus1 as usize + 1);
        for _ in 0..=max_num_sub_layers_minus1 {
            sub_layers.push(HrdSubLayer::parse(
                bit_reader,
                sub_pic_hrd_params.is_some(),
                nal_hrd_parameters_present_flag,
                vcl_hrd_parameters_present_flag,
            )?);
        }

        Ok(Self {
            nal_hrd_parameters_present_flag,
            vcl_hrd_parameters_present_flag,
            sub_pic_hrd_params,
            bit_rate_scale,
            cpb_size_scale,
            initial_cpb_removal_delay_length_minus1,
            au_cpb_removal_delay_length_minus1,
            dpb_output_delay_length_minus1,
            sub_layers,
        })
    }
}

/// Sub-picture level CPB operation parameters.
///
/// ISO/IEC 23008-2 - E.3.2
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubPicHrdParams {
    /// `tick_divisor_minus2`
    pub tick_divisor_minus2: u8,
    /// `du_cpb_removal_delay_increment_length_minus1`
    pub du_cpb_removal_delay_increment_length_minus1: u8,
    /// `sub_pic_cpb_params_in_pic_timing_sei_flag`
    pub sub_pic_cpb_params_in_pic_timing_sei_flag: bool,
    /// `dpb_output_delay_du_length_minus1`
    pub dpb_output_delay_du_length_minus1: u8,
    /// `cpb_size_du_scale`
    pub cpb_size_du_scale: u8,
}

/// Per-sub-layer HRD parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HrdSubLayer {
    /// `fixed_pic_rate_general_flag[i]`
    pub fixed_pic_rate_general_flag: bool,
    /// `fixed_pic_rate_within_cvs_flag[i]`, inferred as `true` when
    /// `fixed_pic_rate_general_flag[i]` is set.
    pub fixed_pic_rate_within_cvs_flag: bool,
    /// `elemental_duration_in_tc_minus1[i]`, only decoded for fixed
    /// picture rate sub-layers.
    pub elemental_duration_in_tc_minus1: Option<u64>,
    /// `low_delay_hrd_flag[i]`
    pub low_delay_hrd_flag: bool,
    /// `cpb_cnt_minus1[i]`
    pub cpb_cnt_minus1: u64,
    /// `sub_layer_hrd_parameters(i)` for the NAL HRD, one entry per CPB.
    pub nal_hrd: Vec<CpbSpec>,
    /// `sub_layer_hrd_parameters(i)` for the VCL HRD, one entry per CPB.
    pub vcl_hrd: Vec<CpbSpec>,
}

impl HrdSubLayer {
    fn parse(
        bit_reader: &mut BitReader<'_>,
        sub_pic_hrd_params_present_flag: bool,
        nal_hrd_parameters_present_flag: bool,
        vcl_hrd_parameters_present_flag: bool,
    ) -> Result<Self, SpsDecodeError> {
        let mut fixed_pic_rate_within_cvs_flag = true;
        let fixed_pic_rate_general_flag = bit_reader.read_bit()?;
        if !fixed_pic_rate_general_flag {
            fixed_pic_rate_within_cvs_flag = bit_reader.read_bit()?;
        }

        let mut elemental_duration_in_tc_minus1 = None;
        let mut low_delay_hrd_flag = false;
        if fixed_pic_rate_within_cvs_flag {
            elemental_duration_in_tc_minus1 = Some(bit_reader.read_exp_golomb()?);
        } else {
            low_delay_hrd_flag = bit_reader.read_bit()?;
        }

        let mut cpb_cnt_minus1 = 0;
        if !low_delay_hrd_flag {
            cpb_cnt_minus1 = bit_reader.read_exp_golomb()?;
            if cpb_cnt_minus1 > 31 {
                return Err(SpsDecodeError::BoundExceeded {
                    field: "cpb_cnt_minus1",
                    value: cpb_cnt_minus1,
                    max: 31,
                });
            }
        }

        let mut nal_hrd = Vec::new();
        if nal_hrd_parameters_present_flag {
            nal_hrd = CpbSpec::parse_list(
                bit_reader,
                cpb_cnt_minus1 + 1,
                sub_pic_hrd_params_present_flag,
            )?;
        }

        let mut vcl_hrd = Vec::new();
        if vcl_hrd_parameters_present_flag {
            vcl_hrd = CpbSpec::parse_list(
                bit_reader,
                cpb_cnt_minus1 + 1,
                sub_pic_hrd_params_present_flag,
            )?;
        }

        Ok(Self {
            fixed_pic_rate_general_flag,
            fixed_pic_rate_within_cvs_flag,
            elemental_duration_in_tc_minus1,
            low_delay_hrd_flag,
            cpb_cnt_minus1,
            nal_hrd,
            vcl_hrd,
        })
    }
}

/// One CPB specification of `sub_layer_hrd_parameters(subLayerId)`.
///
/// - ISO/IEC 23008-2 - E.2.3
/// - ISO/IEC 23008-2 - E.3.3
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpbSpec {
    /// `bit_rate_value_minus1[i]`
    pub bit_rate_value_minus1: u64,
    /// `cpb_size_value_minus1[i]`
    pub cpb_size_value_minus1: u64,
    /// `cpb_size_du_value_minus1[i]`, only decoded at sub-picture level.
    pub cpb_size_du_value_minus1: Option<u64>,
    /// `bit_rate_du_value_minus1[i]`, only decoded at sub-picture level.
    pub bit_rate_du_value_minus1: Option<u64>,
    /// `cbr_flag[i]`
    pub cbr_flag: bool,
}

impl CpbSpec {
    fn parse_list(
        bit_reader: &mut BitReader<'_>,
        cpb_cnt: u64,
        sub_pic_hrd_params_present_flag: bool,
    ) -> Result<Vec<Self>, SpsDecodeError> {
        let mut specs = Vec::with_capacity(cpb_cnt as usize);

        for _ in 0..cpb_cnt {
            let bit_rate_value_minus1 = bit_reader.read_exp_golomb()?;
            let cpb_size_value_minus1 = bit_reader.read_exp_golomb()?;

            let mut cpb_size_du_value_minus1 = None;
            let mut bit_rate_du_value_minus1 = None;
            if sub_pic_hrd_params_present_flag {
                cpb_size_du_value_minus1 = Some(bit_reader.read_exp_golomb()?);
                bit_rate_du_value_minus1 = Some(bit_reader.read_exp_golomb()?);
            }

            specs.push(Self {
                bit_rate_value_minus1,
                cpb_size_value_minus1,
                cpb_size_du_value_minus1,
                bit_rate_du_value_minus1,
                cbr_flag: bit_reader.read_bit()?,
            });
        }

        Ok(specs)
    }
}
