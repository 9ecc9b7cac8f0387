// ─────────────────────────────────────────────────────────────────────
// Mega Number Kernels — Property-Based Tests (proptest) for mega-math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for mega-math using proptest.
//!
//! Covers: brute-force cross-checks of σ, φ, J_k and μ, prime factor
//! products, Lucas path agreement, Catalan recurrence, gamma functional
//! equation, golden ratio convergence.

use mega_math::batch::mobius_table;
use mega_math::divisor::{divisor_count, divisor_sum, euler_totient, jordan_totient, sigma};
use mega_math::factor::{factorize, prime_factors};
use mega_math::gamma::gamma;
use mega_math::mobius::mobius;
use mega_math::recurrence::{catalan, golden_ratio, lucas_iterative, lucas_matrix};
use mega_types::constants::PHI_GOLDEN;
use mega_types::exponent::SigmaValue;
use num_complex::Complex64;
use proptest::prelude::*;

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn brute_divisors(n: u64) -> Vec<u64> {
    (1..=n).filter(|d| n % d == 0).collect()
}

fn is_prime(n: u64) -> bool {
    n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

// ── Divisor Sums ─────────────────────────────────────────────────────

proptest! {
    /// σ_0(n) counts the divisors found by brute force.
    #[test]
    fn sigma_zero_is_divisor_count(n in 1u64..10_000) {
        let expected = brute_divisors(n).len() as u128;
        prop_assert_eq!(sigma(n as i64, 0).unwrap(), SigmaValue::Integer(expected));
        prop_assert_eq!(divisor_count(n as i64).unwrap() as u128, expected);
    }

    /// σ_1(n) is the brute-force divisor sum.
    #[test]
    fn sigma_one_is_divisor_sum(n in 1u64..10_000) {
        let expected: u64 = brute_divisors(n).iter().sum();
        prop_assert_eq!(sigma(n as i64, 1).unwrap(), SigmaValue::Integer(expected as u128));
        prop_assert_eq!(divisor_sum(n as i64).unwrap(), expected);
    }

    /// Integer, real and complex exponents agree on the real axis.
    #[test]
    fn sigma_paths_agree(n in 1i64..5_000, k in 0i64..4) {
        let exact = sigma(n, k).unwrap().to_complex();
        let real = sigma(n, k as f64).unwrap().to_complex();
        let cplx = sigma(n, Complex64::new(k as f64, 0.0)).unwrap().to_complex();
        let tol = 1e-9 * exact.re.max(1.0);
        prop_assert!((exact - real).norm() <= tol, "int {} vs real {}", exact, real);
        prop_assert!((exact - cplx).norm() <= tol, "int {} vs complex {}", exact, cplx);
    }

    /// σ_{-1}(n) = σ_1(n) / n.
    #[test]
    fn sigma_minus_one_is_abundancy(n in 1i64..5_000) {
        let got = sigma(n, -1i64).unwrap().as_complex().unwrap();
        let expected = divisor_sum(n).unwrap() as f64 / n as f64;
        prop_assert!((got.re - expected).abs() < 1e-10 && got.im.abs() < 1e-12);
    }
}

// ── Totients ─────────────────────────────────────────────────────────

#[test]
fn euler_totient_matches_coprime_count() {
    for n in 1..=1000u64 {
        let expected = (1..=n).filter(|&k| gcd(k, n) == 1).count() as u64;
        assert_eq!(euler_totient(n as i64).unwrap(), expected, "phi({n})");
    }
}

#[test]
fn jordan_one_is_euler() {
    for n in 1..=1000i64 {
        assert_eq!(jordan_totient(n, 1).unwrap(), euler_totient(n).unwrap(), "J_1({n})");
    }
}

proptest! {
    /// Σ_{d|n} J_k(d) = n^k.
    #[test]
    fn jordan_divisor_sum_identity(n in 1u64..2_000, k in 1i64..4) {
        let total: u64 = brute_divisors(n)
            .into_iter()
            .map(|d| jordan_totient(d as i64, k).unwrap())
            .sum();
        prop_assert_eq!(total, n.pow(k as u32));
    }
}

// ── Prime Factorization ──────────────────────────────────────────────

proptest! {
    /// The factors multiply back to n, are prime and ascending.
    #[test]
    fn prime_factor_product(n in 1i64..1_000_000) {
        let factors = prime_factors(n, false).unwrap();
        prop_assert_eq!(factors.iter().product::<u64>(), n as u64);
        prop_assert!(factors.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(factors.iter().all(|&p| is_prime(p)));
    }

    /// Unique factors are the deduplicated multiset, in the same order.
    #[test]
    fn unique_factors_dedup(n in 1i64..1_000_000) {
        let mut all = prime_factors(n, false).unwrap();
        all.dedup();
        prop_assert_eq!(prime_factors(n, true).unwrap(), all.clone());
        let primes: Vec<u64> = factorize(n).unwrap().into_iter().map(|(p, _)| p).collect();
        prop_assert_eq!(primes, all);
    }
}

// ── Möbius ───────────────────────────────────────────────────────────

#[test]
fn mobius_on_primes_and_squares() {
    let table = mobius_table(10_000).unwrap();
    assert_eq!(mobius(1).unwrap(), 1);
    for p in (2..=10_000u64).filter(|&p| is_prime(p)) {
        assert_eq!(table[p as usize], -1, "mu({p})");
        if p * p <= 10_000 {
            assert_eq!(table[(p * p) as usize], 0, "mu({p}^2)");
        }
    }
}

proptest! {
    /// μ agrees with the factorization definition.
    #[test]
    fn mobius_matches_factorization(n in 1i64..20_000) {
        let pairs = factorize(n).unwrap();
        let expected = if pairs.iter().any(|&(_, e)| e > 1) {
            0
        } else if pairs.len() % 2 == 0 {
            1
        } else {
            -1
        };
        prop_assert_eq!(mobius(n).unwrap(), expected);
    }
}

// ── Gamma ────────────────────────────────────────────────────────────

proptest! {
    /// Γ(x + 1) = x Γ(x).
    #[test]
    fn gamma_functional_equation(x in 0.01f64..50.0) {
        let lhs = gamma(x + 1.0).unwrap();
        let rhs = x * gamma(x).unwrap();
        prop_assert!(((lhs - rhs) / rhs).abs() < 1e-12,
            "gamma({}) = {}, {} * gamma({}) = {}", x + 1.0, lhs, x, x, rhs);
    }

    /// Γ(z)Γ(1 − z) = π / sin(πz) on (0, 1).
    #[test]
    fn gamma_reflection(z in 0.01f64..0.99) {
        let product = gamma(z).unwrap() * gamma(1.0 - z).unwrap();
        let expected = std::f64::consts::PI / (std::f64::consts::PI * z).sin();
        prop_assert!(((product - expected) / expected).abs() < 1e-12);
    }

    /// Non-positive points are domain errors.
    #[test]
    fn gamma_rejects_non_positive(p in -1.0e6f64..=0.0) {
        prop_assert!(gamma(p).unwrap_err().is_domain());
    }
}

// ── Recurrences ──────────────────────────────────────────────────────

#[test]
fn lucas_paths_agree_to_overflow() {
    for n in 0..=100i64 {
        match (lucas_iterative(n), lucas_matrix(n)) {
            (Ok(a), Ok(b)) => assert_eq!(a, b, "L({n})"),
            (Err(a), Err(b)) => assert!(a.is_range() && b.is_range(), "L({n})"),
            (a, b) => panic!("L({n}) paths disagree: {a:?} vs {b:?}"),
        }
    }
}

proptest! {
    /// Lucas recurrence L(n) = L(n−1) + L(n−2).
    #[test]
    fn lucas_recurrence(n in 2i64..=92) {
        let l = lucas_matrix(n).unwrap();
        prop_assert_eq!(l, lucas_matrix(n - 1).unwrap() + lucas_matrix(n - 2).unwrap());
    }

    /// Segner recurrence C(n+1) = Σ C(i) C(n−i).
    #[test]
    fn catalan_segner(n in 0i64..20) {
        let sum: u64 = (0..=n)
            .map(|i| catalan(i).unwrap() * catalan(n - i).unwrap())
            .sum();
        prop_assert_eq!(catalan(n + 1).unwrap(), sum);
    }
}

#[test]
fn golden_ratio_error_shrinks() {
    let err = |k: i64| (golden_ratio(k).unwrap() - PHI_GOLDEN).abs();
    assert!(err(30) < 1e-9);
    for k in 1..40 {
        if err(k) < 1e-15 {
            break;
        }
        assert!(err(k + 1) < err(k), "error grew at {k}: {} -> {}", err(k), err(k + 1));
    }
}
