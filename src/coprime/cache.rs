//! Memoisation of coprime pair searches keyed by the search bound

use super::farey::farey_from_pairs;
use super::ksrm::coprime_pairs;
use crate::traits::{ContFracBase, ContFracError};
use num_rational::Ratio;
use std::collections::hash_map::{Entry, HashMap};
use std::hash::Hash;

/// A caller owned memo of [coprime_pairs] results, keyed by the search bound.
///
/// The search itself stays pure, this cache only stores the collected pairs so that
/// repeated Farey sequence or coprime pair requests for the same bound are not recomputed.
#[derive(Debug, Clone, Default)]
pub struct CoprimePairCache<T: Hash + Eq> {
    entries: HashMap<T, Vec<(T, T)>>,
}

impl<T: ContFracBase + Hash> CoprimePairCache<T> {
    pub fn new() -> Self {
        CoprimePairCache {
            entries: HashMap::new(),
        }
    }

    /// Create a cache with room for `capacity` bounds
    pub fn with_capacity(capacity: usize) -> Self {
        CoprimePairCache {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// The coprime pairs for the bound `n`, in the order of [coprime_pairs]
    pub fn pairs(&mut self, n: T) -> Result<&[(T, T)], ContFracError> {
        match self.entries.entry(n) {
            Entry::Occupied(entry) => {
                tracing::trace!(pairs = entry.get().len(), "coprime pair cache hit");
                Ok(entry.into_mut().as_slice())
            }
            Entry::Vacant(entry) => {
                let pairs: Vec<_> = coprime_pairs(entry.key().clone())?.collect();
                tracing::debug!(pairs = pairs.len(), "coprime pair cache miss");
                Ok(entry.insert(pairs).as_slice())
            }
        }
    }

    /// The Farey sequence of order `n`, built from the cached pairs
    pub fn farey_sequence(&mut self, n: T) -> Result<Vec<Ratio<T>>, ContFracError> {
        let pairs = self.pairs(n)?;
        Ok(farey_from_pairs(pairs.iter().cloned()))
    }

    /// Number of cached bounds
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coprime::farey_sequence;

    #[test]
    fn cache_test() {
        let mut cache = CoprimePairCache::<i64>::with_capacity(4);
        assert!(cache.is_empty());

        let pairs = cache.pairs(5).unwrap().to_vec();
        assert_eq!(pairs, coprime_pairs(5i64).unwrap().collect::<Vec<_>>());
        assert_eq!(cache.len(), 1);

        // a second request is served from the cache
        assert_eq!(cache.pairs(5).unwrap(), &pairs[..]);
        assert_eq!(cache.len(), 1);

        assert_eq!(cache.farey_sequence(8).unwrap(), farey_sequence(8i64).unwrap());
        assert_eq!(cache.len(), 2);

        assert_eq!(
            cache.pairs(0).unwrap_err(),
            ContFracError::NonPositiveBound
        );
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }
}
