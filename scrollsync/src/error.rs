use thiserror::Error;

use crate::Axis;

pub type ScrollResult<T> = Result<T, ScrollError>;

/// Usage errors. Transient conditions such as missing geometry are not errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScrollError {
    #[error("scroll host is not mounted")]
    NotMounted,

    #[error("{actual:?} scrollbar accessor used on the {expected:?} thumb")]
    AxisMismatch { expected: Axis, actual: Axis },

    #[error("non-finite {axis:?} scroll offset: {value}")]
    NonFiniteOffset { axis: Axis, value: f64 },
}
