use rbsp::BitReader;

use crate::SpsDecodeError;

/// Long-term reference pictures signaled in the SPS.
///
/// Only decoded when `long_term_ref_pics_present_flag` is set. The two
/// vectors run parallel, one entry per `num_long_term_ref_pics_sps`.
///
/// ISO/IEC 23008-2 - 7.4.3.2.1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongTermRefPics {
    /// `lt_ref_pic_poc_lsb_sps[i]`, each `log2_max_pic_order_cnt_lsb_minus4 + 4`
    /// bits wide
    pub lt_ref_pic_poc_lsb_sps: Vec<u32>,
    /// `used_by_curr_pic_lt_sps_flag[i]`
    pub used_by_curr_pic_lt_sps_flag: Vec<bool>,
}

impl LongTermRefPics {
    pub(crate) fn parse(
        bit_reader: &mut BitReader<'_>,
        log2_max_pic_order_cnt_lsb_minus4: u64,
    ) -> Result<Self, SpsDecodeError> {
        let num_long_term_ref_pics_sps = bit_reader.read_exp_golomb()?;
        let poc_lsb_len = log2_max_pic_order_cnt_lsb_minus4 as u32 + 4;

        // grown rather than preallocated, the count is untrusted
        let mut lt_ref_pic_poc_lsb_sps = Vec::new();
        let mut used_by_curr_pic_lt_sps_flag = Vec::new();

        for _ in 0..num_long_term_ref_pics_sps {
            lt_ref_pic_poc_lsb_sps.push(bit_reader.read_bits(poc_lsb_len)?);
            used_by_curr_pic_lt_sps_flag.push(bit_reader.read_bit()?);
        }

        Ok(Self {
            lt_ref_pic_poc_lsb_sps,
            used_by_curr_pic_lt_sps_flag,
        })
    }
}
