use num_integer::Integer;
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, Signed};
use thiserror::Error;

/// A helper trait to define valid integer types that can be used as
/// continued fraction elements and convergent numerators/denominators
pub trait ContFracBase: Integer + Signed + Clone + CheckedAdd + CheckedSub + CheckedMul {}
impl<T: Integer + Signed + Clone + CheckedAdd + CheckedSub + CheckedMul> ContFracBase for T {}

/// Errors raised by the continued fraction and coprime pair operations.
///
/// All of them are reported at the boundary where the invalid input is received,
/// the recurrences themselves never fail for validated input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContFracError {
    /// The element sequence is empty or contains a non-positive tail element
    #[error("invalid continued fraction elements: {0}")]
    InvalidElements(&'static str),

    /// A convergent or remainder index exceeds the order of the continued fraction
    #[error("index {index} is out of range for a continued fraction of order {order}")]
    IndexOutOfRange { index: usize, order: usize },

    /// A semiconvergent index is not in `1..=order`
    #[error("semiconvergent index {index} is invalid for a continued fraction of order {order}")]
    InvalidIndex { index: usize, order: usize },

    /// The bound of the coprime pair search is not a positive integer
    #[error("the search bound must be a positive integer")]
    NonPositiveBound,

    /// The multiplier of a mediant or semiconvergent is not a positive integer
    #[error("the mediant multiplier must be a positive integer")]
    NonPositiveMultiplier,
}

/// Panic with a uniform message when a fixed-width integer overflows.
///
/// Overflow means the input exceeded the capacity of the chosen integer type,
/// which is not a recoverable condition.
#[cold]
#[inline(never)]
pub(crate) fn overflow(op: &str) -> ! {
    panic!("integer overflow while computing {}", op)
}
