// ─────────────────────────────────────────────────────────────────────
// Mega Number Kernels — Recurrence
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fast evaluators for Lucas numbers, Catalan numbers and the golden ratio.

use mega_types::config::KernelConfig;
use mega_types::constants::{
    CATALAN_MAX_N, GOLDEN_RATIO_ITERATIONS, LUCAS_MATRIX_THRESHOLD, LUCAS_MAX_N,
};
use mega_types::error::{MegaError, MegaResult};
use tracing::trace;

use crate::validate::{non_negative, positive};

/// 2x2 unsigned matrix, row-major.
type Matrix2 = [[u64; 2]; 2];

const IDENTITY: Matrix2 = [[1, 0], [0, 1]];

/// Fibonacci-generating matrix [[1,1],[1,0]].
const FIB: Matrix2 = [[1, 1], [1, 0]];

fn mat_mul(a: &Matrix2, b: &Matrix2) -> Option<Matrix2> {
    let cell = |i: usize, j: usize| {
        a[i][0]
            .checked_mul(b[0][j])?
            .checked_add(a[i][1].checked_mul(b[1][j])?)
    };
    Some([[cell(0, 0)?, cell(0, 1)?], [cell(1, 0)?, cell(1, 1)?]])
}

/// Square-and-multiply, low bit first. The base is only squared while bits
/// remain, so no product exceeds the entries of the final power.
fn mat_pow(base: &Matrix2, mut exp: u64) -> Option<Matrix2> {
    let mut acc = IDENTITY;
    let mut base = *base;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mat_mul(&acc, &base)?;
        }
        exp >>= 1;
        if exp > 0 {
            base = mat_mul(&base, &base)?;
        }
    }
    Some(acc)
}

fn lucas_overflow(n: u64) -> MegaError {
    MegaError::range("lucas", format!("L({n}) exceeds u64"))
}

/// L(n) by forward iteration, n − 1 steps of two accumulators.
pub fn lucas_iterative(n: i64) -> MegaResult<u64> {
    let n = non_negative("lucas", "n", n)?;
    lucas_forward(n)
}

fn lucas_forward(n: u64) -> MegaResult<u64> {
    if n == 0 {
        return Ok(2);
    }
    let (mut a, mut b) = (2u64, 1u64);
    for _ in 1..n {
        let next = a.checked_add(b).ok_or_else(|| lucas_overflow(n))?;
        a = b;
        b = next;
    }
    Ok(b)
}

/// L(n) = 2·F(n−1) + F(n), read from M^(n−1) = [[F(n), F(n−1)], [F(n−1), F(n−2)]].
pub fn lucas_matrix(n: i64) -> MegaResult<u64> {
    let n = non_negative("lucas", "n", n)?;
    lucas_by_matrix(n)
}

fn lucas_by_matrix(n: u64) -> MegaResult<u64> {
    match n {
        0 => Ok(2),
        1 => Ok(1),
        _ => {
            let m = mat_pow(&FIB, n - 1).ok_or_else(|| lucas_overflow(n))?;
            m[0][1]
                .checked_mul(2)
                .and_then(|v| v.checked_add(m[0][0]))
                .ok_or_else(|| lucas_overflow(n))
        }
    }
}

/// Lucas number L(n); L(0) = 2, L(1) = 1. Range error past L(92).
pub fn lucas(n: i64) -> MegaResult<u64> {
    lucas_with_threshold(n, LUCAS_MATRIX_THRESHOLD)
}

/// L(n) with forward iteration up to `threshold` and O(log n) matrix
/// exponentiation above it.
pub fn lucas_with_threshold(n: i64, threshold: u64) -> MegaResult<u64> {
    let n = non_negative("lucas", "n", n)?;
    if n > LUCAS_MAX_N {
        return Err(lucas_overflow(n));
    }
    if n <= threshold {
        lucas_forward(n)
    } else {
        trace!(n, threshold, "lucas: matrix path");
        lucas_by_matrix(n)
    }
}

pub fn lucas_with_config(n: i64, config: &KernelConfig) -> MegaResult<u64> {
    lucas_with_threshold(n, config.lucas_matrix_threshold)
}

/// Catalan number C(n) via C(i) = C(i−1)·2(2i−1)/(i+1).
///
/// The division follows the multiplication so every step stays an exact
/// integer; steps run in u128 and the result must fit u64 (n <= 36).
pub fn catalan(n: i64) -> MegaResult<u64> {
    let n = non_negative("catalan", "n", n)?;
    if n > CATALAN_MAX_N {
        return Err(MegaError::range(
            "catalan",
            format!("C({n}) exceeds u64 (n must be <= {CATALAN_MAX_N})"),
        ));
    }
    let mut c: u128 = 1;
    for i in 1..=n as u128 {
        c = c * 2 * (2 * i - 1) / (i + 1);
    }
    u64::try_from(c).map_err(|_| MegaError::range("catalan", format!("C({n}) exceeds u64")))
}

/// Golden ratio by the fixed-point iteration φ ← 1 + 1/φ from φ = 1.
///
/// `golden_ratio(1) == 2.0`, `golden_ratio(2) == 1.5`; 30 iterations reach
/// f64 convergence. Domain error for fewer than one iteration.
pub fn golden_ratio(iterations: i64) -> MegaResult<f64> {
    let iterations = positive("golden_ratio", "iterations", iterations)?;
    Ok(golden_fixed_point(iterations))
}

/// Golden ratio with the default 30 iterations.
pub fn golden_ratio_default() -> f64 {
    golden_fixed_point(GOLDEN_RATIO_ITERATIONS as u64)
}

pub fn golden_ratio_with_config(config: &KernelConfig) -> MegaResult<f64> {
    config.validate()?;
    Ok(golden_fixed_point(config.golden_ratio_iterations as u64))
}

fn golden_fixed_point(iterations: u64) -> f64 {
    let mut phi = 1.0_f64;
    for _ in 0..iterations {
        let next = 1.0 + 1.0 / phi;
        if next == phi {
            break;
        }
        phi = next;
    }
    phi
}
