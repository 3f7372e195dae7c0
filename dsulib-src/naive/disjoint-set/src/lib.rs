//! Quadratic disjoint set, for checking faster ones against.

/// Every element carries the label of its group; merging relabels one
/// whole group.
pub struct DisjointSet(Vec<usize>);

impl DisjointSet {
    pub fn new(n: usize) -> Self { Self((0..n).collect()) }
    pub fn unite(&mut self, u: usize, v: usize) -> bool {
        let (from, to) = (self.0[u], self.0[v]);
        if from == to {
            return false;
        }
        for label in &mut self.0 {
            if *label == from {
                *label = to;
            }
        }
        true
    }
    pub fn equiv(&self, u: usize, v: usize) -> bool {
        self.repr(u) == self.repr(v)
    }
    pub fn repr(&self, u: usize) -> usize { self.0[u] }
    pub fn count(&self, u: usize) -> usize {
        self.0.iter().filter(|&&label| label == self.0[u]).count()
    }
    pub fn partition_len(&self) -> usize {
        let mut labels = self.0.clone();
        labels.sort_unstable();
        labels.dedup();
        labels.len()
    }
}

#[test]
fn relabel() {
    let mut ds = DisjointSet::new(6);
    assert_eq!(ds.partition_len(), 6);
    assert!(ds.unite(0, 1));
    assert!(ds.unite(2, 1));
    assert!(!ds.unite(0, 2));
    assert!(ds.unite(4, 5));
    assert!(ds.equiv(0, 2));
    assert!(!ds.equiv(0, 4));
    assert_eq!(ds.repr(0), ds.repr(2));
    assert_eq!(ds.count(2), 3);
    assert_eq!(ds.count(3), 1);
    assert_eq!(ds.partition_len(), 3);
}
