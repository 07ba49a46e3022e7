use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use cagecomb::{boxes, krange, l_shapes, line, sums, CageFilter, FilterSpec, Value};

const ROUNDS: usize = 50;

fn random_pool(rng: &mut StdRng) -> Vec<Value> {
    let n = rng.gen_range(0, 10);
    (1..=n).filter(|_| rng.gen_bool(0.7)).collect()
}

fn random_excluded(rng: &mut StdRng) -> Vec<Value> {
    let len = rng.gen_range(0, 6);
    (0..len).map(|_| rng.gen_range(-2, 14)).collect()
}

fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// every subset of `pool` as a bit mask, keeping those of size `k`
fn brute_force_subsets(pool: &[Value], k: usize) -> Vec<Vec<Value>> {
    (0_u32..1 << pool.len())
        .filter(|mask| mask.count_ones() as usize == k)
        .map(|mask| {
            pool.iter()
                .enumerate()
                .filter(|&(i, _)| mask & (1 << i) != 0)
                .map(|(_, &v)| v)
                .collect()
        })
        .collect()
}

#[test]
fn krange_contents() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..ROUNDS {
        let n = rng.gen_range(-1, 13);
        let excluded = random_excluded(&mut rng);
        let values = krange(n, &excluded);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
        assert!(values.iter().all(|v| !excluded.contains(v)));
        let expected: Vec<_> = (1..=n).filter(|v| !excluded.contains(v)).collect();
        assert_eq!(expected, values);
    }
}

#[test]
fn line_counts() {
    let mut rng = StdRng::seed_from_u64(2);
    let filter = CageFilter::new();
    for _ in 0..ROUNDS {
        let pool = random_pool(&mut rng);
        let k = rng.gen_range(0, 6);
        let results: Vec<_> = line(pool.clone(), k, &filter).collect();
        assert_eq!(binomial(pool.len(), k), results.len(), "{:?} {}", pool, k);
        for tuple in &results {
            assert_eq!(k, tuple.len());
            assert!(tuple.windows(2).all(|w| w[0] < w[1]));
            assert!(tuple.iter().all(|v| pool.contains(v)));
        }
    }
}

#[test]
fn absent_filter_is_identity() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..ROUNDS {
        let pool = random_pool(&mut rng);
        let k = rng.gen_range(1, 5);
        let unfiltered = CageFilter::new();
        let absent = CageFilter::new()
            .adds_to(FilterSpec::Absent)
            .mult_to(FilterSpec::Absent);
        let a: Vec<_> = line(pool.clone(), k, &unfiltered).collect();
        let b: Vec<_> = line(pool.clone(), k, &absent).collect();
        assert_eq!(a, b);
        let a: Vec<_> = boxes(pool.clone(), &[], &unfiltered).collect();
        let b: Vec<_> = boxes(pool.clone(), &[], &absent).collect();
        assert_eq!(a, b);
    }
}

#[test]
fn sums_match_brute_force() {
    let mut rng = StdRng::seed_from_u64(4);
    let filter = CageFilter::new();
    for _ in 0..ROUNDS {
        let pool = random_pool(&mut rng);
        let k = rng.gen_range(0, 5);
        let expected: Vec<_> = brute_force_subsets(&pool, k)
            .iter()
            .map(|subset| subset.iter().sum::<Value>())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let candidates: Vec<_> = line(pool.clone(), k, &filter).collect();
        assert_eq!(expected, sums(&candidates), "{:?} {}", pool, k);
    }
}

#[test]
fn l_shape_no_double_respected() {
    let mut rng = StdRng::seed_from_u64(5);
    let filter = CageFilter::new();
    for _ in 0..ROUNDS {
        let pool = random_pool(&mut rng);
        let width = rng.gen_range(1, 5);
        let no_double = random_excluded(&mut rng);
        for shape in l_shapes(pool.clone(), width, None, &no_double, &filter) {
            assert_eq!(width - 1, shape.line.len());
            if no_double.contains(&shape.extra) {
                assert!(!shape.is_double(), "{:?}", shape);
            }
        }
    }
}

#[test]
fn box_candidates_unique() {
    let mut rng = StdRng::seed_from_u64(6);
    let filter = CageFilter::new();
    for _ in 0..ROUNDS {
        let pool = random_pool(&mut rng);
        let no_double = random_excluded(&mut rng);
        let results: Vec<_> = boxes(pool.clone(), &no_double, &filter).collect();
        let unique: BTreeSet<_> = results.iter().copied().collect();
        assert_eq!(unique.len(), results.len());
        for candidate in &results {
            assert!(candidate.windows(2).all(|w| w[0] <= w[1]), "{:?}", candidate);
            let repeats = candidate.windows(2).filter(|w| w[0] == w[1]).count();
            assert!(repeats <= 1, "{:?}", candidate);
            if repeats == 1 {
                let d = candidate.windows(2).find(|w| w[0] == w[1]).unwrap()[0];
                assert!(!no_double.contains(&d));
            }
        }
        // distinct candidates plus one double per value and pair of other values
        let n = pool.len();
        let doubles = pool.iter().filter(|&d| !no_double.contains(d)).count();
        let expected = binomial(n, 4) + doubles * binomial(n.saturating_sub(1), 2);
        assert_eq!(expected, results.len());
    }
}
