use crate::traits::{overflow, ContFracBase};
use core::mem::swap;
use num_rational::Ratio;

/// A block on the magic table for the convergent recurrence
/// The method is described in <https://crypto.stanford.edu/pbc/notes/contfrac/compute.html>
#[derive(Debug, Clone, Copy)]
pub struct Block<T> {
    pm1: T, // p_(k-1)
    pm2: T, // p_(k-2)
    qm1: T, // q_(k-1)
    qm2: T, // q_(k-2)
}

impl<T> Block<T> {
    /// push the latest convergent to the block
    pub fn update(&mut self, p: T, q: T) {
        swap(&mut self.pm2, &mut self.pm1); // self.pm2 = self.pm1
        swap(&mut self.qm2, &mut self.qm1); // self.qm2 = self.qm1
        self.pm1 = p;
        self.qm1 = q;
    }
}

impl<T: ContFracBase> Block<T> {
    /// create a block seeded with `p_(-1) = 1, q_(-1) = 0, p_(-2) = 0, q_(-2) = 1`
    pub fn identity() -> Self {
        Block {
            pm1: T::one(),
            pm2: T::zero(),
            qm1: T::zero(),
            qm2: T::one(),
        }
    }

    /// move with an element from a simple continued fraction, without updating the block
    pub fn rmove(&self, a: &T) -> (T, T) {
        // p_k = a_k * p_(k-1) + p_(k-2)
        let p = a
            .checked_mul(&self.pm1)
            .and_then(|v| v.checked_add(&self.pm2))
            .unwrap_or_else(|| overflow("convergent numerator"));
        // q_k = a_k * q_(k-1) + q_(k-2)
        let q = a
            .checked_mul(&self.qm1)
            .and_then(|v| v.checked_add(&self.qm2))
            .unwrap_or_else(|| overflow("convergent denominator"));
        (p, q)
    }

    /// consume an element and return the new convergent `p_k / q_k`
    ///
    /// `gcd(p_k, q_k) = 1` holds by the recurrence, so the ratio is built without reduction.
    pub fn push(&mut self, a: &T) -> Ratio<T> {
        let (p, q) = self.rmove(a);
        self.update(p.clone(), q.clone());
        Ratio::new_raw(p, q)
    }
}
