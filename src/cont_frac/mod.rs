//! Data structures and algorithms implementations related to
//! finite simple continued fractions
//!
//! There are two abstractions of the continued fraction
//! 1. [Elements][Elements] is a validated sequence of elements `(a0; a1, ..., an)`, it owns the
//!    Euclidean expansion, the division free negation, the convergent/remainder recurrences and
//!    the semiconvergents.
//! 2. [ContinuedFraction][ContinuedFraction] couples a rational value with its simple elements.
//!
//! Mediants of two rationals are provided by the [Mediant][Mediant] trait on [Ratio][num_rational::Ratio].
//!
//! # References:
//! - <https://pi.math.cornell.edu/~gautam/ContinuedFractions.pdf>
//! - <https://crypto.stanford.edu/pbc/notes/contfrac/>
//! - <http://www.numbertheory.org/continued_fractions.html>
//!

mod block;
mod convergents;
mod elements;
mod mediant;
mod simple;

pub use convergents::*;
pub use elements::*;
pub use mediant::*;
pub use simple::*;
