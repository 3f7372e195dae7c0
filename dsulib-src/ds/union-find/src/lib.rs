//! Disjoint-set forest.
//!
//! The universe is $`\{0, 1, \dots, n-1\}`$, fixed at construction. Each
//! component is a rooted tree stored as a parent array; the root is the
//! representative of the component.
//!
//! Two heuristics keep the trees shallow:
//!
//! - union by size: the root of the smaller component goes under the root of
//!   the larger one, so a tree only gets taller when its size at least
//!   doubles, and its height stays within $`\lfloor\log_2(n)\rfloor`$;
//! - path compression: [`UnionFind::find`] points every node it walks
//!   through directly at the root.
//!
//! Together they give $`O(\alpha(n))`$ amortized time per operation.
//!
//! # Equal sizes
//!
//! When [`UnionFind::unify`] merges two components of the same size, the
//! root of `p`'s component survives and the root of `q`'s component is
//! attached under it.
//!
//! # Threads
//!
//! `find` compresses paths through `&self`, so [`UnionFind`] is `Send` but
//! not `Sync`. To share one across threads, put it behind a `Mutex`.

use std::{cell::RefCell, fmt};

use log::{debug, trace};

mod error;

pub use error::{Result, UnionFindError};

/// Union-find over the elements `0..n`.
///
/// ```
/// use union_find::UnionFind;
///
/// let mut uf = UnionFind::new(5)?;
/// uf.unify(0, 1)?;
/// uf.unify(1, 2)?;
/// assert!(uf.connected(0, 2)?);
/// assert_eq!(uf.component_size(0)?, 3);
/// assert_eq!(uf.components(), 3);
/// # Ok::<(), union_find::UnionFindError>(())
/// ```
#[derive(Clone)]
pub struct UnionFind {
    parent: RefCell<Vec<usize>>,
    /// Meaningful at roots only; zero once an element has been absorbed.
    size: Vec<usize>,
    count: usize,
}

/// Same structure under its other common name.
pub type DisjointSet = UnionFind;

impl UnionFind {
    /// Creates `n` singleton components.
    ///
    /// # Errors
    ///
    /// [`UnionFindError::InvalidSize`] if `n == 0`.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(UnionFindError::InvalidSize);
        }
        debug!("union-find over {n} singleton components");
        Ok(Self {
            parent: RefCell::new((0..n).collect()),
            size: vec![1; n],
            count: n,
        })
    }

    /// Returns the representative of the component containing `p`.
    ///
    /// Every node on the path from `p` to the root is re-pointed at the
    /// root. The result is stable until the next successful
    /// [`unify`](Self::unify).
    pub fn find(&self, p: usize) -> Result<usize> {
        self.check(p)?;
        Ok(self.root(p))
    }

    pub fn connected(&self, p: usize, q: usize) -> Result<bool> {
        self.check(p)?;
        self.check(q)?;
        Ok(self.root(p) == self.root(q))
    }

    pub fn component_size(&self, p: usize) -> Result<usize> {
        self.check(p)?;
        Ok(self.size[self.root(p)])
    }

    /// Number of elements in the universe.
    pub fn size(&self) -> usize { self.size.len() }

    /// Number of components left.
    pub fn components(&self) -> usize { self.count }

    /// Merges the components containing `p` and `q`.
    ///
    /// Returns `false` without changing anything if they are already
    /// connected, and `true` if two components became one.
    ///
    /// # Errors
    ///
    /// [`UnionFindError::OutOfRange`] if either element is outside the
    /// universe. Both are checked before anything is touched.
    pub fn unify(&mut self, p: usize, q: usize) -> Result<bool> {
        self.check(p)?;
        self.check(q)?;

        let root1 = self.root(p);
        let root2 = self.root(q);
        if root1 == root2 {
            trace!("unify({p}, {q}): already in component {root1}");
            return Ok(false);
        }

        let (root, child) = if self.size[root1] < self.size[root2] {
            (root2, root1)
        } else {
            (root1, root2)
        };

        self.size[root] += self.size[child];
        self.size[child] = 0;
        self.parent.get_mut()[child] = root;
        self.count -= 1;
        trace!(
            "unify({p}, {q}): {child} under {root}, size {}, {} left",
            self.size[root],
            self.count,
        );
        Ok(true)
    }

    fn check(&self, p: usize) -> Result<()> {
        let len = self.size();
        if p < len {
            Ok(())
        } else {
            Err(UnionFindError::OutOfRange { index: p, len })
        }
    }

    fn root(&self, p: usize) -> usize {
        let mut parent = self.parent.borrow_mut();
        let mut root = p;
        while parent[root] != root {
            root = parent[root];
        }
        let mut cur = p;
        while cur != root {
            let next = parent[cur];
            parent[cur] = root;
            cur = next;
        }
        root
    }
}

impl fmt::Debug for UnionFind {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("UnionFind")
            .field("size", &self.size())
            .field("components", &self.count)
            .field("parent", &self.parent.borrow())
            .field("component_size", &self.size)
            .finish()
    }
}
