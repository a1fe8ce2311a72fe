//! A decoder for H.265/HEVC sequence parameter set NAL units.
//!
//! This crate turns the payload of an SPS NAL unit (everything after the
//! two-byte NAL-unit header) into a typed [`Sps`] entity, following the
//! `seq_parameter_set_rbsp()` grammar of ISO/IEC 23008-2 - 7.3.2.2.1.
//! Decoding is all or nothing: the result is either a complete entity or a
//! [`SpsDecodeError`], never a partially filled struct. Conditional syntax
//! decodes to `Option`s so that an absent field stays distinguishable from
//! a field that was present with value zero.
//!
//! ## Examples
//!
//! ```
//! use h265_sps::Sps;
//!
//! # fn test() -> Result<(), h265_sps::SpsDecodeError> {
//! let data = b"\x42\x01\x01\x01\x40\x00\x00\x03\x00\x90\x00\x00\x03\x00\x00\x03\x00\x78\xa0\x03\xc0\x80\x11\x07\xcb\x96\xb4\xa4\x25\x92\xe3\x01\x6a\x02\x02\x02\x08\x00\x00\x03\x00\x08\x00\x00\x03\x00\xf3\x00\x2e\xf2\x88\x00\x02\x62\x5a\x00\x00\x13\x12\xd0\x20";
//! // skip the two-byte NAL-unit header
//! let sps = Sps::decode(&data[2..])?;
//! assert_eq!(sps.pic_width_in_luma_samples, 1920);
//! # Ok(())
//! # }
//! # test().unwrap();
//! ```
//!
//! ## License
//!
//! This project is licensed under the MIT or Apache-2.0 license.
//! You can choose between one of them if you use this work.
//!
//! `SPDX-License-Identifier: MIT OR Apache-2.0`
#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(unreachable_pub)]

mod error;
mod profile_compatibility_flags;
mod rbsp_trailing_bits;
mod sps;

pub use error::{SpsDecodeError, UnimplementedSyntax};
pub use profile_compatibility_flags::ProfileCompatibilityFlags;
pub use sps::*;

/// The largest `num_short_term_ref_pic_sets` this decoder accepts.
///
/// ISO/IEC 23008-2 - 7.4.3.2.1 bounds the syntax element to 64.
pub const MAX_SHORT_TERM_REF_PIC_SETS: u64 = 64;
