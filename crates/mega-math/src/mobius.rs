// ─────────────────────────────────────────────────────────────────────
// Mega Number Kernels — Mobius
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Möbius function via a smallest-prime-factor sieve.
//!
//! A single query builds the whole table up to n and reads its last entry.
//! The table is call-local and dropped on return.

use mega_types::error::{MegaError, MegaResult};
use ndarray::Array1;
use tracing::debug;

use crate::validate::positive;

/// Allocate a zeroed table of `len` slots, reporting allocation failure
/// as a range error instead of aborting.
pub(crate) fn zeroed_table<T: Clone + Default>(
    kernel: &'static str,
    len: u64,
) -> MegaResult<Vec<T>> {
    let too_large = || {
        MegaError::range(
            kernel,
            format!("sieve table of {len} entries cannot be allocated"),
        )
    };
    let len = usize::try_from(len).map_err(|_| too_large())?;
    let mut table = Vec::new();
    table.try_reserve_exact(len).map_err(|_| too_large())?;
    table.resize(len, T::default());
    Ok(table)
}

/// Smallest prime factor of every k in 0..=n; `table[1] == 1`, `table[0] == 0`.
pub fn smallest_prime_factor_table(n: i64) -> MegaResult<Vec<u64>> {
    let n = positive("smallest_prime_factor_table", "n", n)?;
    sieve("smallest_prime_factor_table", n)
}

pub(crate) fn sieve(kernel: &'static str, n: u64) -> MegaResult<Vec<u64>> {
    debug!(kernel, n, "building smallest-prime-factor sieve");
    let mut spf: Vec<u64> = zeroed_table(kernel, n + 1)?;
    spf[1] = 1;
    for i in 2..=n {
        if spf[i as usize] != 0 {
            continue;
        }
        spf[i as usize] = i;
        if i > n / i {
            continue;
        }
        // multiples below i² already carry a smaller prime
        let mut j = i * i;
        while j <= n {
            if spf[j as usize] == 0 {
                spf[j as usize] = i;
            }
            match j.checked_add(i) {
                Some(next) => j = next,
                None => break,
            }
        }
    }
    Ok(spf)
}

/// μ(k) for every k in 0..=n from one sieve pass; index 0 holds 0.
///
/// μ(k) = 0 when the smallest prime p of k still divides k/p, otherwise
/// μ(k) = −μ(k/p), with μ(1) = 1.
pub fn mobius_table(n: i64) -> MegaResult<Array1<i8>> {
    let n = positive("mobius", "n", n)?;
    let spf = sieve("mobius", n)?;
    let mut mu: Vec<i8> = zeroed_table("mobius", n + 1)?;
    mu[1] = 1;
    for i in 2..=n as usize {
        let p = spf[i] as usize;
        let q = i / p;
        mu[i] = if q % p == 0 { 0 } else { -mu[q] };
    }
    Ok(Array1::from_vec(mu))
}

/// Möbius function μ(n) ∈ {−1, 0, 1}.
///
/// O(n) time and memory per call; nothing is cached between calls.
pub fn mobius(n: i64) -> MegaResult<i8> {
    let table = mobius_table(n)?;
    Ok(table[n as usize])
}
