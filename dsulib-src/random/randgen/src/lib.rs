use std::ops::Range;

use rand::{
    distributions::{Distribution, Uniform},
    seq::SliceRandom,
    Rng, SeedableRng,
};
use rand_chacha::ChaCha20Rng;

pub trait Gen {
    type Output;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output;
}

pub fn seeded_rng(seed: u64) -> ChaCha20Rng { ChaCha20Rng::seed_from_u64(seed) }

/// `count` pairs of elements drawn uniformly from `0..len`.
///
/// `len` must be positive.
pub struct UnifyQueries {
    pub len: usize,
    pub count: usize,
}

/// Edges of a path visiting `0..len` in random order; unifying all of them
/// leaves a single component.
pub struct SpanningPath {
    pub len: usize,
}

impl Gen for Range<usize> {
    type Output = usize;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let between = Uniform::from(self.clone());
        between.sample(rng)
    }
}

impl Gen for UnifyQueries {
    type Output = Vec<(usize, usize)>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let Self { len, count } = *self;
        let between = Uniform::from(0..len);
        (0..count).map(|_| (between.sample(rng), between.sample(rng))).collect()
    }
}

impl Gen for SpanningPath {
    type Output = Vec<(usize, usize)>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let mut order: Vec<_> = (0..self.len).collect();
        order.shuffle(rng);
        order.windows(2).map(|w| (w[0], w[1])).collect()
    }
}

#[test]
fn uniformity() {
    use std::collections::BTreeMap;

    let mut rng = ChaCha20Rng::from_seed([0; 32]);
    let n = 10_usize.pow(6);

    let mut map = BTreeMap::new();
    for _ in 0..n {
        *map.entry((3..7_usize).generate(&mut rng)).or_insert(0) += 1;
    }
    let k = 4;
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [3, 4, 5, 6]);
    for &v in map.values() {
        assert!(v >= (n / k) * 99 / 100);
        assert!(v <= (n / k) * 101 / 100);
    }

    let queries = UnifyQueries { len: 5, count: n }.generate(&mut rng);
    assert_eq!(queries.len(), n);
    let mut map = BTreeMap::new();
    for q in queries {
        *map.entry(q).or_insert(0) += 1;
    }
    let k = 25;
    assert_eq!(map.len(), k);
    for &v in map.values() {
        assert!(v >= (n / k) * 97 / 100);
        assert!(v <= (n / k) * 103 / 100);
    }
}

#[test]
fn spanning_path() {
    let mut rng = seeded_rng(1);
    assert!(SpanningPath { len: 1 }.generate(&mut rng).is_empty());

    let len = 50;
    let path = SpanningPath { len }.generate(&mut rng);
    assert_eq!(path.len(), len - 1);
    for w in path.windows(2) {
        assert_eq!(w[0].1, w[1].0);
    }
    let mut seen: Vec<_> = path
        .iter()
        .map(|&(u, _)| u)
        .chain(path.last().map(|&(_, v)| v))
        .collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..len).collect::<Vec<_>>());
}

#[test]
fn reproducible() {
    let q = UnifyQueries { len: 100, count: 20 };
    assert_eq!(
        q.generate(&mut seeded_rng(9)),
        q.generate(&mut seeded_rng(9))
    );
}
