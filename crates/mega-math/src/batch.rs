// ─────────────────────────────────────────────────────────────────────
// Mega Number Kernels — Batch
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Whole-array evaluation of the kernels over `ndarray` containers.
//!
//! Elementwise maps are atomic: the first failing element aborts the call
//! and no partial array is returned.

use mega_types::error::MegaResult;
use ndarray::Array1;
use tracing::debug;

use crate::gamma::gamma;
use crate::mobius::{sieve, zeroed_table};
use crate::validate::positive;

pub use crate::mobius::{mobius_table, smallest_prime_factor_table};

/// φ(k) for every k in 0..=n by a linear pass over the smallest-prime-factor
/// sieve; index 0 holds 0.
pub fn totient_table(n: i64) -> MegaResult<Array1<u64>> {
    let n = positive("totient_table", "n", n)?;
    let spf = sieve("totient_table", n)?;
    let mut phi: Vec<u64> = zeroed_table("totient_table", n + 1)?;
    phi[1] = 1;
    for i in 2..=n as usize {
        let p = spf[i];
        let q = i / p as usize;
        phi[i] = if q as u64 % p == 0 {
            phi[q] * p
        } else {
            phi[q] * (p - 1)
        };
    }
    Ok(Array1::from_vec(phi))
}

/// Apply a natural-number kernel to every element.
///
/// ```ignore
/// let phis = map_natural(&array![1, 2, 3, 4], euler_totient)?;
/// ```
pub fn map_natural<T, F>(values: &Array1<i64>, kernel: F) -> MegaResult<Array1<T>>
where
    F: Fn(i64) -> MegaResult<T>,
{
    debug!(len = values.len(), "map_natural");
    let out = values
        .iter()
        .map(|&v| kernel(v))
        .collect::<MegaResult<Vec<T>>>()?;
    Ok(Array1::from_vec(out))
}

/// Γ at every point.
pub fn gamma_array(points: &Array1<f64>) -> MegaResult<Array1<f64>> {
    let out = points
        .iter()
        .map(|&p| gamma(p))
        .collect::<MegaResult<Vec<f64>>>()?;
    Ok(Array1::from_vec(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::divisor::euler_totient;
    use crate::recurrence::lucas_with_config;
    use mega_types::config::KernelConfig;
    use ndarray::array;

    #[test]
    fn test_totient_table_matches_trial_division() {
        let table = totient_table(500).unwrap();
        assert_eq!(table[0], 0);
        for n in 1..=500i64 {
            assert_eq!(table[n as usize], euler_totient(n).unwrap(), "phi({n})");
        }
    }

    #[test]
    fn test_totient_table_rejects_zero() {
        assert!(totient_table(0).unwrap_err().is_domain());
    }

    #[test]
    fn test_map_natural_applies_kernel() {
        let phis = map_natural(&array![1, 2, 3, 4, 100], euler_totient).unwrap();
        assert_eq!(phis, array![1u64, 1, 2, 2, 40]);
    }

    #[test]
    fn test_map_natural_is_atomic() {
        let err = map_natural(&array![5, 0, 7], euler_totient).unwrap_err();
        assert!(err.is_domain());
    }

    #[test]
    fn test_map_natural_with_config() {
        let cfg = KernelConfig::default();
        let lucas = map_natural(&array![0, 1, 10, 40], |n| lucas_with_config(n, &cfg)).unwrap();
        assert_eq!(lucas, array![2u64, 1, 123, 228826127]);
    }

    #[test]
    fn test_gamma_array() {
        let out = gamma_array(&array![1.0, 2.0, 3.0, 5.0]).unwrap();
        for (got, expected) in out.iter().zip([1.0, 1.0, 2.0, 24.0]) {
            assert!((got - expected).abs() < 1e-12);
        }
        assert!(gamma_array(&array![1.0, -1.0]).unwrap_err().is_domain());
    }
}
