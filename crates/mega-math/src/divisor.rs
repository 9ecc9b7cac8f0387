// ─────────────────────────────────────────────────────────────────────
// Mega Number Kernels — Divisor
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Divisor-enumeration family: σ_z(n), Euler's φ(n) and Jordan's J_k(n).
//!
//! σ_z walks divisor pairs (i, n/i) for i² <= n, so each of the three
//! exponent paths costs O(√n) power evaluations. φ and J_k use exact integer
//! arithmetic over the distinct prime factors.

use mega_types::error::{MegaError, MegaResult};
use mega_types::exponent::{Exponent, SigmaValue};
use num_complex::Complex64;
use tracing::trace;

use crate::factor::trial_division;
use crate::validate::{non_negative, positive};

/// Every divisor of n exactly once, in pair order (1, n, 2, n/2, ...).
fn divisors(n: u64) -> impl Iterator<Item = u64> {
    (1..)
        .take_while(move |&i| i <= n / i)
        .filter(move |&i| n % i == 0)
        .flat_map(move |i| {
            let j = n / i;
            let pair = if i == j { None } else { Some(j) };
            std::iter::once(i).chain(pair)
        })
}

/// Generalized divisor-power sum σ_z(n) = Σ_{d|n} d^z.
///
/// The exponent kind picks the arithmetic path:
/// - non-negative integer z: exact `u128` sum, range error on overflow
/// - non-negative real z: `f64` sum via `powf`
/// - negative integer/real z, or any complex z: `Complex64` sum
///
/// z = 0 returns the divisor count τ(n) in the exponent's kind. The n >= 1
/// check runs before dispatch for every kind.
pub fn sigma(n: i64, z: impl Into<Exponent>) -> MegaResult<SigmaValue> {
    let n = positive("sigma", "n", n)?;
    let z = z.into();
    trace!(n, kind = z.kind_name(), "sigma");

    match z {
        Exponent::Integer(k) if k >= 0 => sigma_integer(n, k),
        Exponent::Integer(_) => sigma_complex(n, z.to_complex()).map(SigmaValue::Complex),
        Exponent::Real(x) => {
            if !x.is_finite() {
                return Err(MegaError::domain(
                    "sigma",
                    format!("real exponent must be finite, got {x}"),
                ));
            }
            if x == 0.0 {
                Ok(SigmaValue::Real(divisors(n).count() as f64))
            } else if x > 0.0 {
                let total: f64 = divisors(n).map(|d| (d as f64).powf(x)).sum();
                if !total.is_finite() {
                    return Err(MegaError::range(
                        "sigma",
                        format!("sigma({n}, {x}) overflows f64"),
                    ));
                }
                Ok(SigmaValue::Real(total))
            } else {
                sigma_complex(n, z.to_complex()).map(SigmaValue::Complex)
            }
        }
        Exponent::Complex(c) => {
            if !(c.re.is_finite() && c.im.is_finite()) {
                return Err(MegaError::domain(
                    "sigma",
                    format!("complex exponent must be finite, got {c}"),
                ));
            }
            if z.is_zero() {
                let count = divisors(n).count() as f64;
                return Ok(SigmaValue::Complex(Complex64::new(count, 0.0)));
            }
            sigma_complex(n, c).map(SigmaValue::Complex)
        }
    }
}

fn sigma_integer(n: u64, k: i64) -> MegaResult<SigmaValue> {
    if k == 0 {
        return Ok(SigmaValue::Integer(divisors(n).count() as u128));
    }
    if n == 1 {
        return Ok(SigmaValue::Integer(1));
    }
    let overflow = || MegaError::range("sigma", format!("sigma({n}, {k}) exceeds u128"));
    let k = u32::try_from(k).map_err(|_| overflow())?;
    let total = divisors(n).try_fold(0u128, |acc, d| {
        (d as u128)
            .checked_pow(k)
            .and_then(|term| acc.checked_add(term))
            .ok_or_else(overflow)
    })?;
    Ok(SigmaValue::Integer(total))
}

fn sigma_complex(n: u64, z: Complex64) -> MegaResult<Complex64> {
    // d^z = exp(z ln d) for real d > 0; d = 1 contributes exactly 1.
    let total: Complex64 = divisors(n).map(|d| (z * (d as f64).ln()).exp()).sum();
    if !(total.re.is_finite() && total.im.is_finite()) {
        return Err(MegaError::range(
            "sigma",
            format!("sigma({n}, {z}) overflows f64"),
        ));
    }
    Ok(total)
}

/// τ(n), the number of divisors of n.
pub fn divisor_count(n: i64) -> MegaResult<u64> {
    let n = positive("divisor_count", "n", n)?;
    Ok(divisors(n).count() as u64)
}

/// σ_1(n), the sum of the divisors of n.
pub fn divisor_sum(n: i64) -> MegaResult<u64> {
    let n = positive("divisor_sum", "n", n)?;
    let total: u128 = divisors(n).map(u128::from).sum();
    u64::try_from(total)
        .map_err(|_| MegaError::range("divisor_sum", format!("sigma_1({n}) exceeds u64")))
}

/// Euler's totient φ(n): integers in [1, n] coprime to n.
///
/// Computes n·∏(1 − 1/p) exactly as `result -= result / p` per distinct prime,
/// found by trial division over a local copy of n that is divided down.
pub fn euler_totient(n: i64) -> MegaResult<u64> {
    let n = positive("euler_totient", "n", n)?;
    if n == 1 {
        return Ok(1);
    }

    let mut result = n;
    let mut rem = n;
    let mut p = 2u64;
    while p <= rem / p {
        if rem % p == 0 {
            while rem % p == 0 {
                rem /= p;
            }
            result -= result / p;
        }
        p += 1;
    }
    if rem > 1 {
        result -= result / rem;
    }
    Ok(result)
}

/// Jordan's totient J_k(n) = n^k ∏(1 − p^-k).
///
/// k = 0 gives 0 (checked before n = 1, which gives 1). Each prime factor
/// applies `result / p^k * (p^k − 1)`; p^k divides the running product
/// exactly, and dividing first keeps it within n^k.
pub fn jordan_totient(n: i64, k: i64) -> MegaResult<u64> {
    let n = positive("jordan_totient", "n", n)?;
    let k = non_negative("jordan_totient", "k", k)?;
    if k == 0 {
        return Ok(0);
    }
    if n == 1 {
        return Ok(1);
    }

    let overflow = || MegaError::range("jordan_totient", format!("{n}^{k} exceeds u64"));
    let k = u32::try_from(k).map_err(|_| overflow())?;
    let mut result = n.checked_pow(k).ok_or_else(overflow)?;

    let mut primes = trial_division(n);
    primes.dedup();
    for p in primes {
        // p^k <= n^k, cannot overflow once n^k fits
        let pk = p.pow(k);
        result = result / pk * (pk - 1);
    }
    Ok(result)
}
