use std::env;
use std::str::FromStr;

use once_cell::sync::Lazy;
use rand::prelude::*;
use zipf::ZipfDistribution;

/// Seed shared by every pattern generated in this process.
///
/// Set `OVERRIDE_SEED` to replay a failing run.
static SEED: Lazy<u64> = Lazy::new(|| {
    let seed = env::var("OVERRIDE_SEED")
        .ok()
        .and_then(|s| u64::from_str(&s).ok())
        .unwrap_or_else(|| thread_rng().gen());

    println!("Seed: {seed}");

    seed
});

pub fn random_init_seed() -> u64 {
    *SEED
}

fn new_rng(len: usize) -> StdRng {
    // Mix in the length so different sizes don't share a prefix.
    StdRng::seed_from_u64(random_init_seed() ^ (len as u64).rotate_left(17))
}

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::
    let mut rng = new_rng(len);

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_rng(len);
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Few distinct values, lots of duplicates.
pub fn random_dups(len: usize) -> Vec<i32> {
    random_uniform(len, 0..=10)
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng(len);

    // ZipfDistribution only fails for zero elements or a non-positive exponent.
    let dist = ZipfDistribution::new(len, exponent).unwrap();

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.
    (0..len as i32).rev().collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::
    vec![66; len]
}

pub fn saw(len: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::
    let teeth = (len / 16).max(1);

    (0..len).map(|i| (i % teeth) as i32).collect()
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.
    let mid = len / 2;

    (0..len)
        .map(|i| if i < mid { i as i32 } else { (len - i) as i32 })
        .collect()
}

/// The mixed-sign input with a duplicate used by the fixed scenario tests.
pub fn mixed_fixed() -> Vec<i32> {
    vec![5, 3, 12, 1, 0, -1, -10, 6, 7, 7]
}
