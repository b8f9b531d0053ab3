//! Implementation of finite simple continued fractions

use super::convergents::{Convergents, Remainders};
use super::elements::{negated, Elements};
use super::mediant::{Mediant, MediantSide};
use crate::traits::{ContFracBase, ContFracError};
use core::cmp::Ordering;
use core::convert::TryFrom;
use core::hash::{Hash, Hasher};
use core::iter::{Skip, StepBy};
use core::ops::Neg;
use num_rational::Ratio;
use std::fmt;

/// This struct represents a rational number `a0 + 1/(a1 + 1/(a2 + ... + 1/an))`
/// together with its simple continued fraction elements.
///
/// The elements are expanded once on construction, all the convergents,
/// remainders and semiconvergents are then computed from them on demand.
#[derive(Clone, Debug)]
pub struct ContinuedFraction<T> {
    value: Ratio<T>,
    elements: Elements<T>,
}

impl<T> ContinuedFraction<T> {
    /// The rational value
    #[inline]
    pub fn value(&self) -> &Ratio<T> {
        &self.value
    }

    /// The simple elements of the value
    #[inline]
    pub fn elements(&self) -> &Elements<T> {
        &self.elements
    }

    #[inline]
    pub fn order(&self) -> usize {
        self.elements.order()
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.elements.order() == 0
    }
}

impl<T: ContFracBase> ContinuedFraction<T> {
    /// Create a continued fraction from validated elements.
    ///
    /// The elements don't need to be simple, they will be canonicalized so that
    /// equal numbers always share the same representation.
    pub fn from_elements(elements: Elements<T>) -> Self {
        ContinuedFraction {
            value: elements.to_ratio(),
            elements: elements.canonicalize(),
        }
    }

    #[inline]
    pub fn convergent(&self, k: usize) -> Result<Ratio<T>, ContFracError> {
        self.elements.convergent(k)
    }

    #[inline]
    pub fn convergents(&self) -> Convergents<'_, T> {
        self.elements.convergents()
    }

    #[inline]
    pub fn even_convergents(&self) -> StepBy<Convergents<'_, T>> {
        self.elements.even_convergents()
    }

    #[inline]
    pub fn odd_convergents(&self) -> StepBy<Skip<Convergents<'_, T>>> {
        self.elements.odd_convergents()
    }

    #[inline]
    pub fn remainder(&self, k: usize) -> Result<Ratio<T>, ContFracError> {
        self.elements.remainder(k)
    }

    #[inline]
    pub fn remainders(&self) -> Remainders<'_, T> {
        self.elements.remainders()
    }

    #[inline]
    pub fn semiconvergent(&self, k: usize, m: &T) -> Result<Ratio<T>, ContFracError> {
        self.elements.semiconvergent(k, m)
    }

    /// The k-th mediant of this number and `other`
    pub fn mediant(
        &self,
        other: &Self,
        side: MediantSide,
        k: &T,
    ) -> Result<Self, ContFracError> {
        Ok(Self::from(self.value.mediant(&other.value, side, k)?))
    }

    #[inline]
    pub fn left_mediant(&self, other: &Self, k: &T) -> Result<Self, ContFracError> {
        self.mediant(other, MediantSide::Left, k)
    }

    #[inline]
    pub fn right_mediant(&self, other: &Self, k: &T) -> Result<Self, ContFracError> {
        self.mediant(other, MediantSide::Right, k)
    }
}

impl<T: ContFracBase> From<Ratio<T>> for ContinuedFraction<T> {
    fn from(r: Ratio<T>) -> Self {
        ContinuedFraction {
            elements: Elements::from_ratio(&r),
            value: r,
        }
    }
}

impl<T: ContFracBase> From<T> for ContinuedFraction<T> {
    fn from(t: T) -> Self {
        ContinuedFraction {
            elements: Elements::from_ratio(&Ratio::from_integer(t.clone())),
            value: Ratio::from_integer(t),
        }
    }
}

impl<T: ContFracBase> From<Elements<T>> for ContinuedFraction<T> {
    #[inline]
    fn from(elements: Elements<T>) -> Self {
        Self::from_elements(elements)
    }
}

impl<T: ContFracBase> TryFrom<Vec<T>> for ContinuedFraction<T> {
    type Error = ContFracError;

    fn try_from(coeffs: Vec<T>) -> Result<Self, Self::Error> {
        Ok(Self::from_elements(Elements::new(coeffs)?))
    }
}

impl<T: ContFracBase> Neg for ContinuedFraction<T> {
    type Output = ContinuedFraction<T>;

    fn neg(self) -> Self::Output {
        let elements = self.elements.negate();
        // the denominator stays positive and coprime to the numerator
        let value = Ratio::new_raw(negated(self.value.numer()), self.value.denom().clone());
        ContinuedFraction { elements, value }
    }
}

// the elements are determined by the value
impl<T: ContFracBase> PartialEq for ContinuedFraction<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: ContFracBase> Eq for ContinuedFraction<T> {}

impl<T: ContFracBase + Hash> Hash for ContinuedFraction<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state)
    }
}

impl<T: ContFracBase> PartialOrd for ContinuedFraction<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: ContFracBase> Ord for ContinuedFraction<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: fmt::Display> fmt::Display for ContinuedFraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.elements, f)
    }
}
