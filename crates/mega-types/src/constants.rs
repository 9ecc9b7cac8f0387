// ─────────────────────────────────────────────────────────────────────
// Mega Number Kernels — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Process-wide numeric constants shared read-only by every kernel.

/// π
pub const PI: f64 = std::f64::consts::PI;

/// √π, returned exactly for Γ(1/2).
pub const SQRT_PI: f64 = 1.772_453_850_905_515_9;

/// √(2π), Lanczos prefactor.
pub const SQRT_2PI: f64 = 2.506_628_274_631_000_7;

/// Lanczos shift g.
pub const LANCZOS_G: f64 = 7.0;

/// Leading Lanczos term for g = 7, n = 9.
pub const LANCZOS_BASE: f64 = 0.999_999_999_999_809_93;

/// Published Lanczos coefficients (g = 7). `LANCZOS_COEFFS[i]` divides `(y + i)`.
pub const LANCZOS_COEFFS: [f64; 8] = [
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// Largest gamma argument accepted before the f64 overflow boundary.
pub const GAMMA_MAX_ARG: f64 = 175.5;

/// Golden ratio (1 + √5) / 2.
pub const PHI_GOLDEN: f64 = 1.618_033_988_749_895;

/// Fixed-point iterations that reach f64 convergence for the golden ratio.
pub const GOLDEN_RATIO_ITERATIONS: usize = 30;

/// Lucas numbers at or below this index use plain forward iteration.
pub const LUCAS_MATRIX_THRESHOLD: u64 = 20;

/// Largest n with L(n) representable in u64.
pub const LUCAS_MAX_N: u64 = 92;

/// Largest n with C(n) representable in u64.
pub const CATALAN_MAX_N: u64 = 36;
