//! Coprime integers and Farey sequences built on the coprime pair search

use super::ksrm::coprime_pairs;
use crate::traits::{ContFracBase, ContFracError};
use num_rational::Ratio;

/// All positive integers less than `n` and coprime to it, in ascending order.
/// For `n = 1` the result is `[1]`.
pub fn coprime_integers<T: ContFracBase>(n: T) -> Result<Vec<T>, ContFracError> {
    if n.is_one() {
        return Ok(vec![T::one()]);
    }

    let mut integers: Vec<T> = coprime_pairs(n.clone())?
        .filter(|(a, _)| a == &n)
        .map(|(_, b)| b)
        .collect();
    integers.sort();
    Ok(integers)
}

/// Build the ascending Farey sequence from a list of coprime pairs `(a, b)`, each
/// pair standing for the fraction `b / a`
pub(crate) fn farey_from_pairs<T, I>(pairs: I) -> Vec<Ratio<T>>
where
    T: ContFracBase,
    I: IntoIterator<Item = (T, T)>,
{
    let mut fractions = vec![Ratio::from_integer(T::zero())];
    // the pairs are coprime with a positive first coordinate, so no reduction is needed
    fractions.extend(pairs.into_iter().map(|(a, b)| Ratio::new_raw(b, a)));
    fractions.sort();
    fractions
}

/// The Farey sequence of order `n`: all reduced fractions in `[0, 1]`
/// with denominators at most `n`, in ascending order
pub fn farey_sequence<T: ContFracBase>(n: T) -> Result<Vec<Ratio<T>>, ContFracError> {
    let fractions = farey_from_pairs(coprime_pairs(n)?);
    tracing::debug!(len = fractions.len(), "built Farey sequence");
    Ok(fractions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coprime_integers_test() {
        assert_eq!(coprime_integers(1i64).unwrap(), vec![1]);
        assert_eq!(coprime_integers(2i64).unwrap(), vec![1]);
        assert_eq!(coprime_integers(10i64).unwrap(), vec![1, 3, 7, 9]);
        assert_eq!(coprime_integers(7i64).unwrap(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(
            coprime_integers(12i64).unwrap(),
            vec![1, 5, 7, 11]
        );
        assert_eq!(
            coprime_integers(0i64).unwrap_err(),
            ContFracError::NonPositiveBound
        );
    }

    #[test]
    fn farey_sequence_test() {
        assert_eq!(
            farey_sequence(1i64).unwrap(),
            vec![Ratio::from(0), Ratio::from(1)]
        );
        assert_eq!(
            farey_sequence(5i64).unwrap(),
            vec![
                Ratio::from(0),
                Ratio::new(1, 5),
                Ratio::new(1, 4),
                Ratio::new(1, 3),
                Ratio::new(2, 5),
                Ratio::new(1, 2),
                Ratio::new(3, 5),
                Ratio::new(2, 3),
                Ratio::new(3, 4),
                Ratio::new(4, 5),
                Ratio::from(1),
            ]
        );
        assert_eq!(
            farey_sequence(-1i64).unwrap_err(),
            ContFracError::NonPositiveBound
        );
    }

    #[test]
    fn farey_neighbour_test() {
        // consecutive terms b/a < d/c of a Farey sequence satisfy a·d - b·c = 1
        let seq = farey_sequence(20i64).unwrap();
        assert_eq!(seq.len(), 129);
        for w in seq.windows(2) {
            assert_eq!(w[0].denom() * w[1].numer() - w[0].numer() * w[1].denom(), 1);
        }
    }
}
