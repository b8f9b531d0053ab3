//! Generalized mediants of rational numbers and semiconvergents

use super::elements::Elements;
use crate::traits::{overflow, ContFracBase, ContFracError};
use num_rational::Ratio;

/// Which operand of a mediant gets the multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediantSide {
    /// `(k·a + c) / (k·b + d)`, tends to `a/b` as `k` grows
    Left,
    /// `(a + k·c) / (b + k·d)`, tends to `c/d` as `k` grows
    Right,
}

/// Generalized (k-th order, left or right) mediants.
///
/// No ordering is required between the two operands. For `a/b < c/d`, the left mediants
/// decrease towards `a/b` and the right mediants increase towards `c/d` as `k` grows.
pub trait Mediant<K = Self>: Sized {
    /// The k-th mediant of `self` and `other` on the given side
    fn mediant(&self, other: &Self, side: MediantSide, k: &K) -> Result<Self, ContFracError>;

    /// The simple mediant `(a + c) / (b + d)`
    fn simple_mediant(&self, other: &Self) -> Self;

    #[inline]
    fn left_mediant(&self, other: &Self, k: &K) -> Result<Self, ContFracError> {
        self.mediant(other, MediantSide::Left, k)
    }

    #[inline]
    fn right_mediant(&self, other: &Self, k: &K) -> Result<Self, ContFracError> {
        self.mediant(other, MediantSide::Right, k)
    }
}

// computes (x + k·y) / (u + k·v) and reduces it
fn weighted<T: ContFracBase>(x: &T, u: &T, y: &T, v: &T, k: &T) -> Ratio<T> {
    let numer = k
        .checked_mul(y)
        .and_then(|ky| x.checked_add(&ky))
        .unwrap_or_else(|| overflow("mediant numerator"));
    let denom = k
        .checked_mul(v)
        .and_then(|kv| u.checked_add(&kv))
        .unwrap_or_else(|| overflow("mediant denominator"));
    Ratio::new(numer, denom)
}

impl<T: ContFracBase> Mediant<T> for Ratio<T> {
    fn mediant(&self, other: &Self, side: MediantSide, k: &T) -> Result<Self, ContFracError> {
        if !k.is_positive() {
            return Err(ContFracError::NonPositiveMultiplier);
        }

        let (a, b) = (self.numer(), self.denom());
        let (c, d) = (other.numer(), other.denom());
        Ok(match side {
            MediantSide::Left => weighted(c, d, a, b, k),
            MediantSide::Right => weighted(a, b, c, d, k),
        })
    }

    fn simple_mediant(&self, other: &Self) -> Self {
        weighted(self.numer(), self.denom(), other.numer(), other.denom(), &T::one())
    }
}

impl<T: ContFracBase> Elements<T> {
    /// The semiconvergent `(p_(k-1) + m·p_k) / (q_(k-1) + m·q_k)`, i.e. the right mediant
    /// of the convergents `C_(k-1)` and `C_k` with multiplier `m`.
    ///
    /// With `m = a_(k+1)` this is exactly the convergent `C_(k+1)`.
    pub fn semiconvergent(&self, k: usize, m: &T) -> Result<Ratio<T>, ContFracError> {
        if k == 0 || k > self.order() {
            return Err(ContFracError::InvalidIndex {
                index: k,
                order: self.order(),
            });
        }

        let mut convs = self.convergents().skip(k - 1).map(|(_, c)| c);
        match (convs.next(), convs.next()) {
            (Some(prev), Some(curr)) => prev.right_mediant(&curr, m),
            _ => unreachable!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn mediant_test() {
        let a = Ratio::new(1i64, 2);
        let b = Ratio::new(3i64, 4);

        assert_eq!(a.simple_mediant(&b), Ratio::new(2, 3));
        assert_eq!(a.left_mediant(&b, &1), Ok(Ratio::new(2, 3)));
        assert_eq!(a.right_mediant(&b, &1), Ok(Ratio::new(2, 3)));
        assert_eq!(a.left_mediant(&b, &2), Ok(Ratio::new(5, 8)));
        assert_eq!(a.right_mediant(&b, &2), Ok(Ratio::new(7, 10)));
        assert_eq!(
            a.mediant(&b, MediantSide::Left, &3),
            Ok(Ratio::new(6, 10))
        );
        assert_eq!(
            a.mediant(&b, MediantSide::Right, &0),
            Err(ContFracError::NonPositiveMultiplier)
        );
        assert_eq!(
            a.mediant(&b, MediantSide::Left, &-1),
            Err(ContFracError::NonPositiveMultiplier)
        );

        // reduced on construction: (1 + 1) / (3 + 1)
        assert_eq!(
            Ratio::new(1i64, 3).simple_mediant(&Ratio::from(1)),
            Ratio::new(1, 2)
        );
        // negative operands
        assert_eq!(
            Ratio::new(-1i64, 2).simple_mediant(&Ratio::new(1, 3)),
            Ratio::new(0, 5)
        );
    }

    #[test]
    fn mediant_limit_test() {
        let a = Ratio::new(1i64, 2);
        let b = Ratio::new(3i64, 4);
        let k = 1_000_000;

        let left = a.left_mediant(&b, &k).unwrap();
        let right = a.right_mediant(&b, &k).unwrap();
        assert!(a < left && left < a.left_mediant(&b, &1).unwrap());
        assert!(a.right_mediant(&b, &1).unwrap() < right && right < b);
        assert!(&left - &a < Ratio::new(1, 100_000));
        assert!(&b - &right < Ratio::new(1, 100_000));

        // swapping the operands flips the direction of monotonicity
        let left = b.left_mediant(&a, &k).unwrap();
        assert!(b.left_mediant(&a, &1).unwrap() < left && left < b);
    }

    #[test]
    fn semiconvergent_test() {
        let e = Elements::new(vec![3i64, 4, 12, 4]).unwrap();
        // (3 + 13) / (1 + 4)
        assert_eq!(e.semiconvergent(1, &1), Ok(Ratio::new(16, 5)));
        // (13 + 2·159) / (4 + 2·49)
        assert_eq!(e.semiconvergent(2, &2), Ok(Ratio::new(331, 102)));
        assert_eq!(e.semiconvergent(1, &12), e.convergent(2));
        assert_eq!(e.semiconvergent(2, &4), e.convergent(3));

        assert_eq!(
            e.semiconvergent(0, &1),
            Err(ContFracError::InvalidIndex { index: 0, order: 3 })
        );
        assert_eq!(
            e.semiconvergent(4, &1),
            Err(ContFracError::InvalidIndex { index: 4, order: 3 })
        );
        assert_eq!(
            e.semiconvergent(1, &0),
            Err(ContFracError::NonPositiveMultiplier)
        );

        let int = Elements::new(vec![5i64]).unwrap();
        assert_eq!(
            int.semiconvergent(1, &1),
            Err(ContFracError::InvalidIndex { index: 1, order: 0 })
        );
    }

    #[test]
    fn semiconvergent_limit_test() {
        let e = Elements::new(vec![3i64, 4, 12, 4]).unwrap();
        let c1 = e.convergent(1).unwrap(); // 13/4, odd convergent
        let semis: Vec<_> = (1..50)
            .map(|m| e.semiconvergent(1, &m).unwrap())
            .collect();
        assert!(semis.windows(2).all(|w| w[0] < w[1]));
        assert!(semis.iter().all(|s| s < &c1));
    }

    proptest! {
        #[test]
        fn mediant_is_between(
            a in -1000i64..1000, b in 1i64..1000,
            c in -1000i64..1000, d in 1i64..1000,
            k in 1i64..1000,
        ) {
            let x = Ratio::new(a, b);
            let y = Ratio::new(c, d);
            prop_assume!(x < y);

            let m = x.simple_mediant(&y);
            prop_assert!(x < m && m < y);

            let left = x.left_mediant(&y, &k).unwrap();
            let right = x.right_mediant(&y, &k).unwrap();
            prop_assert!(x < left && left <= m);
            prop_assert!(m <= right && right < y);
        }

        #[test]
        fn semiconvergent_next_convergent(
            tail in prop::collection::vec(1i64..30, 2..8), head in 0i64..30,
        ) {
            let mut v = vec![head];
            v.extend(tail);
            let e = Elements::new(v).unwrap();
            for k in 1..e.order() {
                let next = &e.as_slice()[k + 1];
                prop_assert_eq!(e.semiconvergent(k, next), e.convergent(k + 1));
            }
        }
    }
}
