//! Depth first search over the KSRM ternary trees of coprime pairs

use crate::traits::{ContFracBase, ContFracError};

/// Roots of the two ternary trees, `(2, 1)` and `(3, 1)`
fn roots<T: ContFracBase>() -> [(T, T); 2] {
    let two = T::one() + T::one();
    let three = two.clone() + T::one();
    [(two, T::one()), (three, T::one())]
}

/// The child of `(a, b)` on the given branch, `None` if it cannot be represented.
///
/// The branches are `(2a - b, a)`, `(2a + b, a)` and `(a + 2b, b)`. Every child has a strictly
/// larger first coordinate than its parent, so an unrepresentable child is beyond any bound.
fn child<T: ContFracBase>(node: &(T, T), branch: u8) -> Option<(T, T)> {
    let (a, b) = node;
    let first = match branch {
        0 => a.checked_add(&(a.clone() - b.clone())),
        1 => a.checked_add(a).and_then(|a2| a2.checked_add(b)),
        2 => b.checked_add(b).and_then(|b2| a.checked_add(&b2)),
        _ => unreachable!(),
    }?;
    let second = if branch == 2 { b.clone() } else { a.clone() };
    Some((first, second))
}

#[derive(Debug, Clone)]
struct Frame<T> {
    node: (T, T),
    next_branch: u8,
}

/// Iterator of the coprime pairs `(a, b)` with `a <= n` in one KSRM tree,
/// in depth first pre-order (node, then branches 1, 2 and 3).
///
/// The iterator keeps an explicit stack of frames, so it uses memory linear to
/// the depth reached. No visited set is needed since every pair appears once in the trees.
#[derive(Debug, Clone)]
pub struct SearchRoot<T> {
    bound: T,
    root: Option<(T, T)>,
    stack: Vec<Frame<T>>,
    yielded: usize,
}

impl<T> SearchRoot<T> {
    /// Number of pairs yielded so far
    #[inline]
    pub fn yielded(&self) -> usize {
        self.yielded
    }

    /// Current depth of the search stack
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl<T: ContFracBase> SearchRoot<T> {
    fn new(bound: T, root: (T, T)) -> Self {
        SearchRoot {
            bound,
            root: Some(root),
            stack: Vec::new(),
            yielded: 0,
        }
    }

    fn visit(&mut self, node: (T, T)) -> (T, T) {
        self.stack.push(Frame {
            node: node.clone(),
            next_branch: 0,
        });
        self.yielded += 1;
        node
    }
}

impl<T: ContFracBase> Iterator for SearchRoot<T> {
    type Item = (T, T);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            return if root.0 > self.bound {
                None
            } else {
                Some(self.visit(root))
            };
        }

        loop {
            let frame = self.stack.last_mut()?;
            if frame.next_branch == 3 {
                // all three subtrees are exhausted, backtrack
                self.stack.pop();
                continue;
            }

            let branch = frame.next_branch;
            frame.next_branch += 1;
            match child(&frame.node, branch) {
                // descendants only grow in the first coordinate, prune the whole subtree
                Some(c) if c.0 <= self.bound => return Some(self.visit(c)),
                _ => continue,
            }
        }
    }
}

/// Search one KSRM tree from `root` for the coprime pairs `(a, b)` with `a <= n`.
///
/// `root` is expected to be `(2, 1)` or `(3, 1)`, or any other node of the trees
/// in which case only its subtree is searched.
pub fn search_root<T: ContFracBase>(n: T, root: (T, T)) -> Result<SearchRoot<T>, ContFracError> {
    if n < T::one() {
        return Err(ContFracError::NonPositiveBound);
    }
    Ok(SearchRoot::new(n, root))
}

/// Iterator of all coprime pairs `(a, b)`, `1 <= b < a <= n`, preceded by `(1, 1)`
#[derive(Debug, Clone)]
pub struct CoprimePairs<T> {
    unity: Option<(T, T)>,
    bound: T,
    roots: std::vec::IntoIter<(T, T)>,
    current: Option<SearchRoot<T>>,
}

impl<T: ContFracBase> Iterator for CoprimePairs<T> {
    type Item = (T, T);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(unity) = self.unity.take() {
            return Some(unity);
        }

        loop {
            if let Some(search) = self.current.as_mut() {
                match search.next() {
                    Some(pair) => return Some(pair),
                    None => {
                        tracing::trace!(yielded = search.yielded(), "KSRM tree exhausted");
                        self.current = None;
                    }
                }
            }

            let root = self.roots.next()?;
            self.current = Some(SearchRoot::new(self.bound.clone(), root));
        }
    }
}

/// Enumerate all coprime pairs `(a, b)` with `1 <= b < a <= n`, plus the pair `(1, 1)`.
///
/// The pairs come lazily in a deterministic order: `(1, 1)`, then the pre-order traversal of
/// the tree rooted at `(2, 1)`, then the tree rooted at `(3, 1)`. The number of pairs is the
/// summatory totient `φ(1) + ... + φ(n)`.
pub fn coprime_pairs<T: ContFracBase>(n: T) -> Result<CoprimePairs<T>, ContFracError> {
    if n < T::one() {
        return Err(ContFracError::NonPositiveBound);
    }

    let roots = if n.is_one() { Vec::new() } else { roots().to_vec() };
    Ok(CoprimePairs {
        unity: Some((T::one(), T::one())),
        bound: n,
        roots: roots.into_iter(),
        current: None,
    })
}
