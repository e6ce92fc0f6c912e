use std::collections::TryReserveError;

use thiserror::Error;

use crate::data::model::ValueKind;

/// Why a dataset or data point operation did not take effect.
///
/// The handle layer in [`crate::data::handle`] collapses these into `None`
/// or `false`; the `try_*` methods hand them out as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    #[error("unknown value kind tag {0}")]
    UnknownKind(i32),

    #[error("raw value of kind {found} does not match requested kind {expected}")]
    RawKindMismatch { expected: ValueKind, found: ValueKind },

    #[error("dataset length must be positive")]
    ZeroLength,

    #[error("index {index} out of bounds for dataset of length {len}")]
    OutOfBounds { index: usize, len: usize },

    #[error("slot {index} holds kind {slot}, point has kind {point}")]
    KindMismatch {
        index: usize,
        slot: ValueKind,
        point: ValueKind,
    },

    #[error("data point of kind {0} carries no value")]
    EmptyPoint(ValueKind),

    #[error("text data point is empty")]
    EmptyText,

    #[error("allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}

pub type Result<T> = std::result::Result<T, DatasetError>;
