use rbsp::BitReader;

use crate::SpsDecodeError;

/// Decoded-picture-buffer sizing per sub-layer.
///
/// When `sps_sub_layer_ordering_info_present_flag` is set one triple is
/// decoded per sub-layer; otherwise a single triple is decoded and applies
/// to every sub-layer, so the vectors hold one entry.
///
/// ISO/IEC 23008-2 - 7.4.3.2.1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubLayerOrderingInfo {
    /// `sps_max_dec_pic_buffering_minus1[i]`
    pub sps_max_dec_pic_buffering_minus1: Vec<u64>,
    /// `sps_max_num_reorder_pics[i]`
    pub sps_max_num_reorder_pics: Vec<u64>,
    /// `sps_max_latency_increase_plus1[i]`
    pub sps_max_latency_increase_plus1: Vec<u64>,
}

impl SubLayerOrderingInfo {
    pub(crate) fn parse(
        bit_reader: &mut BitReader<'_>,
        sub_layer_ordering_info_present_flag: bool,
        sps_max_sub_layers_minus1: u8,
    ) -> Result<Self, SpsDecodeError> {
        let start = if sub_layer_ordering_info_present_flag {
            0
        } else {
            sps_max_sub_layers_minus1
        };

        let len = (sps_max_sub_layers_minus1 - start) as usize + 1;
        let mut sps_max_dec_pic_buffering_minus1 = Vec::with_capacity(len);
        let mut sps_max_num_reorder_pics = Vec::with_capacity(len);
        let mut sps_max_latency_increase_plus1 = Vec::with_capacity(len);

        for _ in start..=sps_max_sub_layers_minus1 {
            sps_max_dec_pic_buffering_minus1.push(bit_reader.read_exp_golomb()?);
            sps_max_num_reorder_pics.push(bit_reader.read_exp_golomb()?);
            sps_max_latency_increase_plus1.push(bit_reader.read_exp_golomb()?);
        }

        Ok(Self {
            sps_max_dec_pic_buffering_minus1,
            sps_max_num_reorder_pics,
            sps_max_latency_increase_plus1,
        })
    }
}
