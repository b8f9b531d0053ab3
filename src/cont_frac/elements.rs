//! Element sequences of finite simple continued fractions

use super::block::Block;
use crate::traits::{overflow, ContFracBase, ContFracError};
use core::convert::TryFrom;
use num_rational::Ratio;
use std::fmt;

/// The elements `(a0; a1, ..., an)` of a finite simple continued fraction
/// `a0 + 1/(a1 + 1/(a2 + ... + 1/an))`.
///
/// The head `a0` is an arbitrary (signed) integer and carries the sign of the value,
/// the tail elements `a1, ..., an` are strictly positive. A sequence built by
/// [Elements::from_ratio] is always simple (the last tail element is greater than one),
/// while a sequence supplied through [Elements::new] is only validated.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Elements<T> {
    coeffs: Vec<T>,
}

impl<T> Elements<T> {
    /// The integer part `a0`
    #[inline]
    pub fn head(&self) -> &T {
        &self.coeffs[0]
    }

    /// The tail elements `a1, ..., an`
    #[inline]
    pub fn tail(&self) -> &[T] {
        &self.coeffs[1..]
    }

    /// The number of tail elements, zero for integers
    #[inline]
    pub fn order(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// All elements, head first
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.coeffs[..]
    }

    /// Take the elements out as a vector
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.coeffs
    }
}

impl<T: ContFracBase> Elements<T> {
    /// Validate a sequence of elements supplied by the caller
    pub fn new(coeffs: Vec<T>) -> Result<Self, ContFracError> {
        if coeffs.is_empty() {
            return Err(ContFracError::InvalidElements(
                "at least one element is required",
            ));
        }
        if coeffs[1..].iter().any(|a| !a.is_positive()) {
            return Err(ContFracError::InvalidElements(
                "tail elements must be positive integers",
            ));
        }
        Ok(Elements { coeffs })
    }

    /// Expand a rational number with the Euclidean algorithm.
    ///
    /// Floor division keeps every remainder non-negative, so for a negative number
    /// the sign lands entirely in the head and the tail stays positive.
    pub fn from_ratio(r: &Ratio<T>) -> Self {
        let mut coeffs = Vec::new();
        let mut n = r.numer().clone();
        let mut d = r.denom().clone();

        loop {
            let (quo, rem) = n.div_mod_floor(&d);
            coeffs.push(quo);
            if rem.is_zero() {
                break;
            }
            n = d;
            d = rem;
        }

        debug_assert!(coeffs.len() == 1 || !coeffs.last().unwrap().is_one());
        Elements { coeffs }
    }

    /// Reconstruct the rational number, which is the last convergent
    pub fn to_ratio(&self) -> Ratio<T> {
        let mut block = Block::identity();
        let mut value = Ratio::from_integer(T::zero());
        for a in self.coeffs.iter() {
            value = block.push(a);
        }
        value
    }

    /// Whether the sequence is in the unique simple form (order zero, or `an > 1`)
    #[inline]
    pub fn is_simple(&self) -> bool {
        self.order() == 0 || self.coeffs.last().map_or(false, |v| !v.is_one())
    }

    /// Fold a trailing one into the previous element: `(.., x, 1)` becomes `(.., x + 1)`
    pub fn canonicalize(&self) -> Self {
        let mut coeffs = self.coeffs.clone();
        fold_trailing_one(&mut coeffs);
        Elements { coeffs }
    }

    /// Elements of the negated value, derived without any division.
    ///
    /// With `x = a0 + 1/y` and `y = [a1; a2, ..]`, we have
    /// `-x = -(a0 + 1) + 1/(1 + 1/(y - 1))`, where `y - 1 = [a1 - 1; a2, ..]`.
    /// When `a1 = 1` the zero element merges the neighbours: `1 + [a2; ..] = [a2 + 1; ..]`.
    pub fn negate(&self) -> Self {
        let simple = self.canonicalize();
        let mut it = simple.coeffs.into_iter();
        let a0 = match it.next() {
            Some(v) => v,
            None => unreachable!(),
        };
        let a1 = match it.next() {
            Some(v) => v,
            None => return Elements { coeffs: vec![negated(&a0)] },
        };

        let head = -increment(a0);
        let mut coeffs = Vec::with_capacity(self.coeffs.len() + 1);
        coeffs.push(head);
        if a1.is_one() {
            // the simple form guarantees a2 exists here
            let a2 = match it.next() {
                Some(v) => v,
                None => unreachable!(),
            };
            coeffs.push(increment(a2));
        } else {
            coeffs.push(T::one());
            coeffs.push(a1 - T::one());
        }
        coeffs.extend(it);

        // (.., 1, 1) arises from a single tail element 2
        fold_trailing_one(&mut coeffs);
        Elements { coeffs }
    }
}

fn increment<T: ContFracBase>(v: T) -> T {
    v.checked_add(&T::one())
        .unwrap_or_else(|| overflow("negated elements"))
}

/// `-v`, panicking instead of wrapping at the minimum of a fixed-width type
pub(crate) fn negated<T: ContFracBase>(v: &T) -> T {
    T::zero()
        .checked_sub(v)
        .unwrap_or_else(|| overflow("negated elements"))
}

fn fold_trailing_one<T: ContFracBase>(coeffs: &mut Vec<T>) {
    if coeffs.len() >= 2 && coeffs.last().map_or(false, |v| v.is_one()) {
        coeffs.pop();
        if let Some(last) = coeffs.pop() {
            coeffs.push(increment(last));
        }
    }
}

impl<T: ContFracBase> TryFrom<Vec<T>> for Elements<T> {
    type Error = ContFracError;

    fn try_from(coeffs: Vec<T>) -> Result<Self, Self::Error> {
        Elements::new(coeffs)
    }
}

impl<T: ContFracBase> From<Ratio<T>> for Elements<T> {
    #[inline]
    fn from(r: Ratio<T>) -> Self {
        Elements::from_ratio(&r)
    }
}

impl<T: ContFracBase> From<Elements<T>> for Ratio<T> {
    #[inline]
    fn from(e: Elements<T>) -> Self {
        e.to_ratio()
    }
}

impl<T> AsRef<[T]> for Elements<T> {
    fn as_ref(&self) -> &[T] {
        &self.coeffs[..]
    }
}

impl<T: fmt::Display> fmt::Display for Elements<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", self.coeffs[0])?;
        let mut tail = self.coeffs.iter().skip(1);
        if let Some(v) = tail.next() {
            write!(f, "; {}", v)?;
            for v in tail {
                write!(f, ", {}", v)?;
            }
        }
        write!(f, "]")
    }
}
