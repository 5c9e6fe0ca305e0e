//! Error types for Z-fill operations.

use thiserror::Error;

/// Errors that can occur while computing or configuring Z values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZFillError {
    /// An input Z does not fit the bit width a packed strategy requires.
    ///
    /// Fatal for the clip call that produced it.
    #[error("Z value {value} outside allowed {bits} bit range for {strategy} z fill")]
    RangeViolation {
        /// Name of the strategy that rejected the value.
        strategy: &'static str,
        /// Unsigned bit width the strategy accepts.
        bits: u32,
        /// The offending input Z.
        value: i64,
    },

    /// A configuration string does not name any fill type.
    #[error("unknown z fill type: {0:?}")]
    UnknownFillType(String),
}

/// Checks that every value fits in `bits` unsigned bits.
pub(crate) fn check_range(
    strategy: &'static str,
    bits: u32,
    values: &[i64],
) -> Result<(), ZFillError> {
    let max = (1_i64 << bits) - 1;
    match values.iter().find(|&&v| v < 0 || v > max) {
        Some(&value) => {
            tracing::debug!(strategy, bits, value, "rejected out of range z");
            Err(ZFillError::RangeViolation {
                strategy,
                bits,
                value,
            })
        }
        None => Ok(()),
    }
}
