// ─────────────────────────────────────────────────────────────────────
// Mega Number Kernels — Factor
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Trial-division prime factorization.
//!
//! Candidates run upward from 2 while candidate² <= the undivided remainder,
//! each factor divided out fully before advancing. Worst case O(√n) when n
//! is prime.

use mega_types::error::MegaResult;

use crate::validate::positive;

/// Prime factors of n in ascending order, with multiplicity unless `unique`.
///
/// `prime_factors(60, false) == [2, 2, 3, 5]`, `prime_factors(60, true) == [2, 3, 5]`.
/// Fails with a domain error for n <= 0.
pub fn prime_factors(n: i64, unique: bool) -> MegaResult<Vec<u64>> {
    let n = positive("prime_factors", "n", n)?;
    let mut factors = trial_division(n);
    if unique {
        // ascending, so adjacent duplicates are the only duplicates
        factors.dedup();
    }
    Ok(factors)
}

/// (prime, multiplicity) pairs of n, ascending by prime.
pub fn factorize(n: i64) -> MegaResult<Vec<(u64, u32)>> {
    let n = positive("factorize", "n", n)?;
    let mut pairs: Vec<(u64, u32)> = Vec::new();
    for p in trial_division(n) {
        match pairs.last_mut() {
            Some((last, exp)) if *last == p => *exp += 1,
            _ => pairs.push((p, 1)),
        }
    }
    Ok(pairs)
}

pub(crate) fn trial_division(n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    let mut rem = n;
    let mut d = 2u64;
    while d <= rem / d {
        while rem % d == 0 {
            factors.push(d);
            rem /= d;
        }
        d += if d == 2 { 1 } else { 2 };
    }
    if rem > 1 {
        factors.push(rem);
    }
    factors
}
