//! Enumeration of coprime integer pairs and Farey sequences.
//!
//! The coprime pairs `(a, b)`, `1 <= b < a`, are exactly the nodes of two ternary trees
//! rooted at `(2, 1)` and `(3, 1)` (the KSRM trees), each pair appearing once. The children
//! of `(a, b)` are `(2a - b, a)`, `(2a + b, a)` and `(a + 2b, b)`. Since the first coordinate
//! grows along every branch, a depth first search bounded by `n` visits exactly the pairs with
//! `a <= n` and terminates.
//!
//! # References:
//! - <https://en.wikipedia.org/wiki/Coprime_integers#Generating_all_coprime_pairs>
//! - <https://en.wikipedia.org/wiki/Farey_sequence>

mod cache;
mod farey;
mod ksrm;

pub use cache::*;
pub use farey::{coprime_integers, farey_sequence};
pub use ksrm::*;
