use thiserror::Error;

/// The bitstream ended before a read could complete.
///
/// A failed read leaves the reader in an unspecified position; callers are
/// expected to abandon the decode rather than retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("bitstream ended before the requested bits could be read")]
pub struct EndOfData;
