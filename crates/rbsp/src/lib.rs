//! Bitstream primitives shared by NAL-unit payload codecs.
//!
//! A raw NAL-unit payload is first stripped of its emulation-prevention
//! bytes with [`unescape_rbsp`], then read bit by bit with [`BitReader`],
//! which also decodes the unsigned Exp-Golomb codes the H.26x syntax is
//! built from. [`BitWriter`] is the encoding counterpart.
//!
//! ## Examples
//!
//! ```
//! use rbsp::{BitReader, unescape_rbsp};
//!
//! # fn test() -> Result<(), rbsp::EndOfData> {
//! let rbsp = unescape_rbsp(&[0b0100_0000]);
//! let mut reader = BitReader::new(&rbsp);
//! assert_eq!(reader.read_exp_golomb()?, 1);
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
mod reader;
mod unescape;
mod writer;

pub use error::EndOfData;
pub use reader::BitReader;
pub use unescape::unescape_rbsp;
pub use writer::BitWriter;
