use rbsp::EndOfData;
use thiserror::Error;

/// A syntax structure this decoder recognizes but does not decode.
///
/// These are presence-gated structures of the SPS grammar; the gating flag
/// itself is decoded, a set flag fails the decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnimplementedSyntax {
    /// `scaling_list_data()`, gated by `sps_scaling_list_data_present_flag`.
    #[error("scaling_list_data()")]
    ScalingListData,
    /// `sps_range_extension()`, gated by `sps_range_extension_flag`.
    #[error("sps_range_extension()")]
    RangeExtension,
    /// `sps_multilayer_extension()`, gated by `sps_multilayer_extension_flag`.
    #[error("sps_multilayer_extension()")]
    MultilayerExtension,
    /// `sps_3d_extension()`, gated by `sps_3d_extension_flag`.
    #[error("sps_3d_extension()")]
    Sps3dExtension,
    /// `sps_scc_extension()`, gated by `sps_scc_extension_flag`.
    #[error("sps_scc_extension()")]
    SccExtension,
}

/// The reasons a sequence parameter set can fail to decode.
///
/// Every variant is fatal; [`Sps::decode`](crate::Sps::decode) returns
/// either a complete entity or one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpsDecodeError {
    /// The payload ended before the grammar did.
    #[error("truncated input: {0}")]
    TruncatedInput(#[from] EndOfData),
    /// A recognized but undecoded syntax structure was signaled present.
    #[error("unimplemented syntax structure: {0}")]
    UnimplementedSyntax(#[from] UnimplementedSyntax),
    /// A syntax element exceeded its fixed upper bound.
    #[error("{field} is {value}, the maximum is {max}")]
    BoundExceeded {
        /// The name of the offending syntax element.
        field: &'static str,
        /// The decoded value.
        value: u64,
        /// The largest permitted value.
        max: u64,
    },
}
