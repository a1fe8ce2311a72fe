use rbsp::BitReader;

use crate::{ProfileCompatibilityFlags, SpsDecodeError};

/// Profile, tier and level syntax.
///
/// `profile_tier_level(profilePresentFlag, maxNumSubLayersMinus1)`
///
/// - ISO/IEC 23008-2 - 7.3.3
/// - ISO/IEC 23008-2 - 7.4.4
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileTierLevel {
    /// The general profile, tier and constraint flags.
    ///
    /// `None` only when `profilePresentFlag` was 0; in a sequence parameter
    /// set the flag is always 1.
    pub general_profile: Option<Profile>,
    /// `general_level_idc` (30 times the level number)
    pub general_level_idc: u8,
    /// One entry per sub-layer, `None` where
    /// `sub_layer_profile_present_flag[i]` was 0.
    pub sub_layer_profiles: Vec<Option<Profile>>,
    /// One entry per sub-layer, `None` where
    /// `sub_layer_level_present_flag[i]` was 0.
    pub sub_layer_level_idcs: Vec<Option<u8>>,
}

impl ProfileTierLevel {
    pub(crate) fn parse(
        bit_reader: &mut BitReader<'_>,
        profile_present_flag: bool,
        max_num_sub_layers_minus1: u8,
    ) -> Result<Self, SpsDecodeError> {
        let general_profile = if profile_present_flag {
            Some(Profile::parse(bit_reader)?)
        } else {
            None
        };
        let general_level_idc = bit_reader.read_bits(8)? as u8;

        let mut profile_present_flags = Vec::with_capacity(max_num_sub_layers_minus1 as usize);
        let mut level_present_flags = Vec::with_capacity(max_num_sub_layers_minus1 as usize);
        for _ in 0..max_num_sub_layers_minus1 {
            profile_present_flags.push(bit_reader.read_bit()?);
            level_present_flags.push(bit_reader.read_bit()?);
        }

        if max_num_sub_layers_minus1 > 0 {
            // reserved_zero_2bits, up to the 8-sub-layer alignment
            for _ in max_num_sub_layers_minus1..8 {
                bit_reader.read_bits(2)?;
            }
        }

        let mut sub_layer_profiles = Vec::with_capacity(max_num_sub_layers_minus1 as usize);
        let mut sub_layer_level_idcs = Vec::with_capacity(max_num_sub_layers_minus1 as usize);
        for i in 0..max_num_sub_layers_minus1 as usize {
            sub_layer_profiles.push(if profile_present_flags[i] {
                Some(Profile::parse(bit_reader)?)
            } else {
                None
            });
            sub_layer_level_idcs.push(if level_present_flags[i] {
                Some(bit_reader.read_bits(8)? as u8)
            } else {
                None
            });
        }

        Ok(Self {
            general_profile,
            general_level_idc,
            sub_layer_profiles,
            sub_layer_level_idcs,
        })
    }
}

/// One 88-bit profile block of `profile_tier_level`, general or sub-layer.
///
/// The constraint flags are decoded unconditionally; for `profile_idc`
/// values outside the range extensions they land in bits the grammar marks
/// reserved, which consume the same positions either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// `profile_space`
    pub profile_space: u8,
    /// `tier_flag`
    pub tier_flag: bool,
    /// `profile_idc`
    pub profile_idc: u8,
    /// The 32 `profile_compatibility_flag[j]` bits.
    pub profile_compatibility_flags: ProfileCompatibilityFlags,
    /// `progressive_source_flag`
    pub progressive_source_flag: bool,
    /// `interlaced_source_flag`
    pub interlaced_source_flag: bool,
    /// `non_packed_constraint_flag`
    pub non_packed_constraint_flag: bool,
    /// `frame_only_constraint_flag`
    pub frame_only_constraint_flag: bool,
    /// `max_12bit_constraint_flag`
    pub max_12bit_constraint_flag: bool,
    /// `max_10bit_constraint_flag`
    pub max_10bit_constraint_flag: bool,
    /// `max_8bit_constraint_flag`
    pub max_8bit_constraint_flag: bool,
    /// `max_422chroma_constraint_flag`
    pub max_422chroma_constraint_flag: bool,
    /// `max_420chroma_constraint_flag`
    pub max_420chroma_constraint_flag: bool,
    /// `max_monochrome_constraint_flag`
    pub max_monochrome_constraint_flag: bool,
    /// `intra_constraint_flag`
    pub intra_constraint_flag: bool,
    /// `one_picture_only_constraint_flag`
    pub one_picture_only_constraint_flag: bool,
    /// `lower_bit_rate_constraint_flag`
    pub lower_bit_rate_constraint_flag: bool,
    /// `max_14bit_constraint_flag`
    pub max_14bit_constraint_flag: bool,
    /// `inbld_flag`
    pub inbld_flag: bool,
}

impl Profile {
    fn parse(bit_reader: &mut BitReader<'_>) -> Result<Self, SpsDecodeError> {
        let profile_space = bit_reader.read_bits(2)? as u8;
        let tier_flag = bit_reader.read_bit()?;
        let profile_idc = bit_reader.read_bits(5)? as u8;
        let profile_compatibility_flags =
            ProfileCompatibilityFlags::from_bits_retain(bit_reader.read_bits(32)?);

        let progressive_source_flag = bit_reader.read_bit()?;
        let interlaced_source_flag = bit_reader.read_bit()?;
        let non_packed_constraint_flag = bit_reader.read_bit()?;
        let frame_only_constraint_flag = bit_reader.read_bit()?;

        let max_12bit_constraint_flag = bit_reader.read_bit()?;
        let max_10bit_constraint_flag = bit_reader.read_bit()?;
        let max_8bit_constraint_flag = bit_reader.read_bit()?;
        let max_422chroma_constraint_flag = bit_reader.read_bit()?;
        let max_420chroma_constraint_flag = bit_reader.read_bit()?;
        let max_monochrome_constraint_flag = bit_reader.read_bit()?;
        let intra_constraint_flag = bit_reader.read_bit()?;
        let one_picture_only_constraint_flag = bit_reader.read_bit()?;
        let lower_bit_rate_constraint_flag = bit_reader.read_bit()?;
        let max_14bit_constraint_flag = bit_reader.read_bit()?;

        // reserved_zero_33bits
        bit_reader.read_bits(32)?;
        bit_reader.read_bit()?;

        let inbld_flag = bit_reader.read_bit()?;

        Ok(Self {
            profile_space,
            tier_flag,
            profile_idc,
            profile_compatibility_flags,
            progressive_source_flag,
            interlaced_source_flag,
            non_packed_constraint_flag,
            frame_only_constraint_flag,
            max_12bit_constraint_flag,
            max_10bit_constraint_flag,
            max_8bit_constraint_flag,
            max_422chroma_constraint_flag,
            max_420chroma_constraint_flag,
            max_monochrome_constraint_flag,
            intra_constraint_flag,
            one_picture_only_constraint_flag,
            lower_bit_rate_constraint_flag,
            max_14bit_constraint_flag,
            inbld_flag,
        })
    }
}
