use crate::Value;

/// Lists the prime factors of `n` with multiplicity, ascending.
/// Numbers below 2 have no prime factors.
pub fn prime_factors(mut n: Value) -> Vec<Value> {
    let mut factors = Vec::new();
    let mut f = 2;
    while n > 1 {
        if n % f == 0 {
            factors.push(f);
            n /= f;
        } else {
            f += 1;
        }
    }
    factors
}
