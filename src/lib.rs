mod cont_frac;
pub mod coprime;
pub mod traits;

pub use cont_frac::{
    Convergents, ContinuedFraction, Elements, Mediant, MediantSide, Remainders,
};
pub use coprime::{coprime_integers, coprime_pairs, farey_sequence, search_root, CoprimePairCache};
pub use traits::{ContFracBase, ContFracError};
