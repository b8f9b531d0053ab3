//! Convergents and remainders of finite simple continued fractions

use super::block::Block;
use super::elements::Elements;
use crate::traits::{overflow, ContFracBase, ContFracError};
use core::iter::{Enumerate, Rev, Skip, StepBy};
use core::slice::Iter;
use num_rational::Ratio;

/// Iterator of the convergents `(k, p_k / q_k)` of [Elements], for `k = 0..=n`
#[derive(Debug, Clone)]
pub struct Convergents<'a, T> {
    coeffs: Enumerate<Iter<'a, T>>,
    block: Block<T>,
}

impl<'a, T: ContFracBase> Iterator for Convergents<'a, T> {
    type Item = (usize, Ratio<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let (k, a) = self.coeffs.next()?;
        Some((k, self.block.push(a)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.coeffs.size_hint()
    }
}

impl<'a, T: ContFracBase> ExactSizeIterator for Convergents<'a, T> {}

/// Iterator of the remainders `(k, R_k)` of [Elements], for `k = n` down to `0`
///
/// The remainder `R_k` is the value of the suffix `(ak; ak+1, ..., an)`.
#[derive(Debug, Clone)]
pub struct Remainders<'a, T> {
    coeffs: Rev<Enumerate<Iter<'a, T>>>,
    last: Option<(T, T)>, // numerator and denominator of R_(k+1)
}

impl<'a, T: ContFracBase> Iterator for Remainders<'a, T> {
    type Item = (usize, Ratio<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let (k, a) = self.coeffs.next()?;
        let (p, q) = match self.last.take() {
            None => (a.clone(), T::one()),
            // R_k = a_k + 1/R_(k+1) = (a_k * p + q) / p, with R_(k+1) = p / q >= 1
            Some((p, q)) => {
                let numer = a
                    .checked_mul(&p)
                    .and_then(|v| v.checked_add(&q))
                    .unwrap_or_else(|| overflow("remainder numerator"));
                (numer, p)
            }
        };
        self.last = Some((p.clone(), q.clone()));
        Some((k, Ratio::new_raw(p, q)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.coeffs.size_hint()
    }
}

impl<'a, T: ContFracBase> ExactSizeIterator for Remainders<'a, T> {}

impl<T: ContFracBase> Elements<T> {
    /// Returns a fresh iterator of all convergents `C_0, ..., C_n`
    pub fn convergents(&self) -> Convergents<'_, T> {
        Convergents {
            coeffs: self.as_slice().iter().enumerate(),
            block: Block::identity(),
        }
    }

    /// Convergents with even indices, increasing towards the value
    pub fn even_convergents(&self) -> StepBy<Convergents<'_, T>> {
        self.convergents().step_by(2)
    }

    /// Convergents with odd indices, decreasing towards the value
    pub fn odd_convergents(&self) -> StepBy<Skip<Convergents<'_, T>>> {
        self.convergents().skip(1).step_by(2)
    }

    /// The k-th convergent, using `O(k)` multiplications and no division
    pub fn convergent(&self, k: usize) -> Result<Ratio<T>, ContFracError> {
        self.check_index(k)?;
        match self.convergents().nth(k) {
            Some((_, c)) => Ok(c),
            None => unreachable!(),
        }
    }

    /// Returns a fresh iterator of all remainders `R_n, ..., R_0`,
    /// computed in a single backward pass
    pub fn remainders(&self) -> Remainders<'_, T> {
        Remainders {
            coeffs: self.as_slice().iter().enumerate().rev(),
            last: None,
        }
    }

    /// The k-th remainder, consuming only the elements `ak, ..., an`
    pub fn remainder(&self, k: usize) -> Result<Ratio<T>, ContFracError> {
        self.check_index(k)?;
        match self.remainders().nth(self.order() - k) {
            Some((_, r)) => Ok(r),
            None => unreachable!(),
        }
    }

    #[inline]
    fn check_index(&self, k: usize) -> Result<(), ContFracError> {
        if k > self.order() {
            Err(ContFracError::IndexOutOfRange {
                index: k,
                order: self.order(),
            })
        } else {
            Ok(())
        }
    }
}
