use rbsp::BitReader;

use crate::SpsDecodeError;

// level limits cap each direction at 16 pictures (7.4.8, via MaxDpbSize)
const MAX_PICS_PER_DIRECTION: u64 = 16;

// 7.4.8 bounds abs_delta_rps_minus1 and delta_poc_sX_minus1 to 2^15 - 1
const MAX_DELTA_POC: u64 = (1 << 15) - 1;

/// One `st_ref_pic_set(stRpsIdx)` structure with its derived delta-POC
/// lists.
///
/// The negative deltas in [`delta_poc_s0`](Self::delta_poc_s0) are stored
/// in decreasing POC order and the positive deltas in
/// [`delta_poc_s1`](Self::delta_poc_s1) in increasing POC order, as the
/// derivations (7-59) through (7-71) produce them.
///
/// - ISO/IEC 23008-2 - 7.3.7
/// - ISO/IEC 23008-2 - 7.4.8
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortTermRefPicSet {
    /// `NumNegativePics[stRpsIdx]`
    pub num_negative_pics: u64,
    /// `NumPositivePics[stRpsIdx]`
    pub num_positive_pics: u64,
    /// `DeltaPocS0[stRpsIdx][j]`
    pub delta_poc_s0: Vec<i64>,
    /// `DeltaPocS1[stRpsIdx][j]`
    pub delta_poc_s1: Vec<i64>,
    /// `UsedByCurrPicS0[stRpsIdx][j]`
    pub used_by_curr_pic_s0: Vec<bool>,
    /// `UsedByCurrPicS1[stRpsIdx][j]`
    pub used_by_curr_pic_s1: Vec<bool>,
}

impl ShortTermRefPicSet {
    /// `NumDeltaPocs[stRpsIdx] = NumNegativePics[stRpsIdx] + NumPositivePics[stRpsIdx]` (7-71)
    #[must_use]
    pub const fn num_delta_pocs(&self) -> u64 {
        self.num_negative_pics + self.num_positive_pics
    }

    /// Parses the set with index `st_rps_idx`. `previous` holds the sets
    /// already decoded from the same SPS, which inter prediction refers
    /// back into.
    ///
    /// A set whose counts exceed what the level limits allow degrades to an
    /// empty set instead of failing the decode; only an exhausted reader is
    /// fatal.
    pub(crate) fn parse(
        bit_reader: &mut BitReader<'_>,
        st_rps_idx: usize,
        num_short_term_ref_pic_sets: u64,
        previous: &[Self],
    ) -> Result<Self, SpsDecodeError> {
        let mut inter_ref_pic_set_prediction_flag = false;
        if st_rps_idx != 0 {
            inter_ref_pic_set_prediction_flag = bit_reader.read_bit()?;
        }

        if inter_ref_pic_set_prediction_flag {
            Self::parse_predicted(bit_reader, st_rps_idx, num_short_term_ref_pic_sets, previous)
        } else {
            Self::parse_explicit(bit_reader)
        }
    }

    fn parse_predicted(
        bit_reader: &mut BitReader<'_>,
        st_rps_idx: usize,
        num_short_term_ref_pic_sets: u64,
        previous: &[Self],
    ) -> Result<Self, SpsDecodeError> {
        // delta_idx_minus1 is only coded in slice headers (where stRpsIdx
        // equals num_short_term_ref_pic_sets); inside an SPS the reference
        // set is always the directly preceding one.
        let mut delta_idx_minus1 = 0u64;
        if st_rps_idx as u64 == num_short_term_ref_pic_sets {
            delta_idx_minus1 = bit_reader.read_exp_golomb()?;
        }

        // (7-59)
        let ref_rps_idx = st_rps_idx.wrapping_sub(delta_idx_minus1 as usize + 1);
        let Some(ref_set) = previous.get(ref_rps_idx) else {
            return Ok(Self::default());
        };

        let delta_rps_sign = bit_reader.read_bit()?;
        let abs_delta_rps_minus1 = bit_reader.read_exp_golomb()?.min(MAX_DELTA_POC);
        // (7-60)
        let delta_rps = (1 - 2 * delta_rps_sign as i64) * (abs_delta_rps_minus1 as i64 + 1);

        let len = ref_set.num_delta_pocs() as usize + 1;
        let mut used_by_curr_pic_flag = vec![false; len];
        let mut use_delta_flag = vec![true; len];
        for j in 0..len {
            used_by_curr_pic_flag[j] = bit_reader.read_bit()?;
            if !used_by_curr_pic_flag[j] {
                use_delta_flag[j] = bit_reader.read_bit()?;
            }
        }

        let ref_neg = ref_set.num_negative_pics as usize;
        let ref_pos = ref_set.num_positive_pics as usize;

        // (7-61)
        let mut delta_poc_s0 = Vec::new();
        let mut used_by_curr_pic_s0 = Vec::new();
        for j in (0..ref_pos).rev() {
            let d_poc = ref_set.delta_poc_s1[j] + delta_rps;
            if d_poc < 0 && use_delta_flag[ref_neg + j] {
                delta_poc_s0.push(d_poc);
                used_by_curr_pic_s0.push(used_by_curr_pic_flag[ref_neg + j]);
            }
        }
        if delta_rps < 0 && use_delta_flag[len - 1] {
            delta_poc_s0.push(delta_rps);
            used_by_curr_pic_s0.push(used_by_curr_pic_flag[len - 1]);
        }
        for j in 0..ref_neg {
            let d_poc = ref_set.delta_poc_s0[j] + delta_rps;
            if d_poc < 0 && use_delta_flag[j] {
                delta_poc_s0.push(d_poc);
                used_by_curr_pic_s0.push(used_by_curr_pic_flag[j]);
            }
        }

        // (7-62)
        let mut delta_poc_s1 = Vec::new();
        let mut used_by_curr_pic_s1 = Vec::new();
        for j in (0..ref_neg).rev() {
            let d_poc = ref_set.delta_poc_s0[j] + delta_rps;
            if d_poc > 0 && use_delta_flag[j] {
                delta_poc_s1.push(d_poc);
                used_by_curr_pic_s1.push(used_by_curr_pic_flag[j]);
            }
        }
        if delta_rps > 0 && use_delta_flag[len - 1] {
            delta_poc_s1.push(delta_rps);
            used_by_curr_pic_s1.push(used_by_curr_pic_flag[len - 1]);
        }
        for j in 0..ref_pos {
            let d_poc = ref_set.delta_poc_s1[j] + delta_rps;
            if d_poc > 0 && use_delta_flag[ref_neg + j] {
                delta_poc_s1.push(d_poc);
                used_by_curr_pic_s1.push(used_by_curr_pic_flag[ref_neg + j]);
            }
        }

        Ok(Self {
            num_negative_pics: delta_poc_s0.len() as u64,
            num_positive_pics: delta_poc_s1.len() as u64,
            delta_poc_s0,
            delta_poc_s1,
            used_by_curr_pic_s0,
            used_by_curr_pic_s1,
        })
    }

    fn parse_explicit(bit_reader: &mut BitReader<'_>) -> Result<Self, SpsDecodeError> {
        let num_negative_pics = bit_reader.read_exp_golomb()?;
        let num_positive_pics = bit_reader.read_exp_golomb()?;

        if num_negative_pics > MAX_PICS_PER_DIRECTION || num_positive_pics > MAX_PICS_PER_DIRECTION
        {
            return Ok(Self::default());
        }

        let mut delta_poc_s0 = Vec::with_capacity(num_negative_pics as usize);
        let mut used_by_curr_pic_s0 = Vec::with_capacity(num_negative_pics as usize);
        for i in 0..num_negative_pics as usize {
            let delta_poc_s0_minus1 = bit_reader.read_exp_golomb()?.min(MAX_DELTA_POC);
            // (7-67) and (7-69)
            let prev = if i == 0 { 0 } else { delta_poc_s0[i - 1] };
            delta_poc_s0.push(prev - (delta_poc_s0_minus1 as i64 + 1));
            used_by_curr_pic_s0.push(bit_reader.read_bit()?);
        }

        let mut delta_poc_s1 = Vec::with_capacity(num_positive_pics as usize);
        let mut used_by_curr_pic_s1 = Vec::with_capacity(num_positive_pics as usize);
        for i in 0..num_positive_pics as usize {
            let delta_poc_s1_minus1 = bit_reader.read_exp_golomb()?.min(MAX_DELTA_POC);
            // (7-68) and (7-70)
            let prev = if i == 0 { 0 } else { delta_poc_s1[i - 1] };
            delta_poc_s1.push(prev + delta_poc_s1_minus1 as i64 + 1);
            used_by_curr_pic_s1.push(bit_reader.read_bit()?);
        }

        Ok(Self {
            num_negative_pics,
            num_positive_pics,
            delta_poc_s0,
            delta_poc_s1,
            used_by_curr_pic_s0,
            used_by_curr_pic_s1,
        })
    }
}

#[cfg(test)]
#[cfg_attr(all(test, coverage_nightly), coverage(off))]
mod tests {
    use rbsp::{BitReader, BitWriter};

    use super::ShortTermRefPicSet;

    #[test]
    fn test_explicit_set() {
        let mut writer = BitWriter::new();
        writer.write_exp_golomb(2); // num_negative_pics
        writer.write_exp_golomb(1); // num_positive_pics
        writer.write_exp_golomb(0); // delta_poc_s0_minus1[0]
        writer.write_bit(true); // used_by_curr_pic_s0_flag[0]
        writer.write_exp_golomb(1); // delta_poc_s0_minus1[1]
        writer.write_bit(false); // used_by_curr_pic_s0_flag[1]
        writer.write_exp_golomb(3); // delta_poc_s1_minus1[0]
        writer.write_bit(true); // used_by_curr_pic_s1_flag[0]
        let data = writer.finish();

        let mut reader = BitReader::new(&data);
        let set = ShortTermRefPicSet::parse(&mut reader, 0, 1, &[]).unwrap();

        assert_eq!(set.num_negative_pics, 2);
        assert_eq!(set.num_positive_pics, 1);
        assert_eq!(set.num_delta_pocs(), 3);
        assert_eq!(set.delta_poc_s0, vec![-1, -3]);
        assert_eq!(set.used_by_curr_pic_s0, vec![true, false]);
        assert_eq!(set.delta_poc_s1, vec![4]);
        assert_eq!(set.used_by_curr_pic_s1, vec![true]);
    }

    #[test]
    fn test_predicted_set() {
        let mut writer = BitWriter::new();
        // set 0, explicit: one negative pic at delta -1
        writer.write_exp_golomb(1); // num_negative_pics
        writer.write_exp_golomb(0); // num_positive_pics
        writer.write_exp_golomb(0); // delta_poc_s0_minus1[0]
        writer.write_bit(true); // used_by_curr_pic_s0_flag[0]
        // set 1, predicted from set 0 with deltaRps = -1
        writer.write_bit(true); // inter_ref_pic_set_prediction_flag
        writer.write_bit(true); // delta_rps_sign
        writer.write_exp_golomb(0); // abs_delta_rps_minus1
        writer.write_bit(true); // used_by_curr_pic_flag[0]
        writer.write_bit(true); // used_by_curr_pic_flag[1]
        let data = writer.finish();

        let mut reader = BitReader::new(&data);
        let mut sets = Vec::new();
        for i in 0..2 {
            let set = ShortTermRefPicSet::parse(&mut reader, i, 2, &sets).unwrap();
            sets.push(set);
        }

        assert_eq!(sets[0].delta_poc_s0, vec![-1]);
        assert_eq!(sets[1].num_negative_pics, 2);
        assert_eq!(sets[1].num_positive_pics, 0);
        assert_eq!(sets[1].delta_poc_s0, vec![-1, -2]);
        assert_eq!(sets[1].used_by_curr_pic_s0, vec![true, true]);
    }

    #[test]
    fn test_oversized_counts_degrade_to_empty() {
        let mut writer = BitWriter::new();
        writer.write_exp_golomb(4096); // num_negative_pics
        writer.write_exp_golomb(0); // num_positive_pics
        let data = writer.finish();

        let mut reader = BitReader::new(&data);
        let set = ShortTermRefPicSet::parse(&mut reader, 0, 1, &[]).unwrap();
        assert_eq!(set, ShortTermRefPicSet::default());
    }

    #[test]
    fn test_truncated_set() {
        let mut writer = BitWriter::new();
        writer.write_exp_golomb(2); // num_negative_pics
        let data = writer.finish();

        let mut reader = BitReader::new(&data);
        assert!(ShortTermRefPicSet::parse(&mut reader, 0, 1, &[]).is_err());
    }
}
