// ─────────────────────────────────────────────────────────────────────
// Mega Number Kernels — Gamma
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Gamma function by the Lanczos approximation (g = 7, 9 coefficients).
//!
//! Exact short-circuits run first: Γ(1/2) = √π, Γ(1) = Γ(2) = 1, and
//! integral points take the factorial product. Arguments below 1/2 go
//! through the reflection formula Γ(p)Γ(1 − p) = π / sin(πp).

use mega_types::constants::{
    GAMMA_MAX_ARG, LANCZOS_BASE, LANCZOS_COEFFS, LANCZOS_G, PI, SQRT_2PI, SQRT_PI,
};
use mega_types::error::{MegaError, MegaResult};
use tracing::trace;

/// Γ(point) for 0 < point <= 175.5.
///
/// Domain error for point <= 0 or NaN, range error above 175.5 or whenever
/// the result overflows f64 (Γ exceeds f64::MAX just past 171.62).
pub fn gamma(point: f64) -> MegaResult<f64> {
    if point.is_nan() || point <= 0.0 {
        return Err(MegaError::domain(
            "gamma",
            format!("point must be > 0, got {point}"),
        ));
    }
    if point > GAMMA_MAX_ARG {
        return Err(MegaError::range(
            "gamma",
            format!("point must be <= {GAMMA_MAX_ARG}, got {point}"),
        ));
    }

    let value = if point == 0.5 {
        SQRT_PI
    } else if point == 1.0 || point == 2.0 {
        1.0
    } else if point.fract() == 0.0 {
        trace!(point, "gamma: factorial branch");
        factorial_product(point as u64)
    } else if point < 0.5 {
        trace!(point, "gamma: reflection branch");
        PI / ((PI * point).sin() * lanczos(1.0 - point))
    } else {
        lanczos(point)
    };

    if !value.is_finite() {
        return Err(MegaError::range(
            "gamma",
            format!("gamma({point}) overflows f64"),
        ));
    }
    Ok(value)
}

/// (p − 1)! as the product 2·3·…·(p − 1).
fn factorial_product(p: u64) -> f64 {
    (2..p).fold(1.0, |acc, k| acc * k as f64)
}

/// Lanczos series for y >= 1/2.
fn lanczos(y: f64) -> f64 {
    let x = LANCZOS_COEFFS
        .iter()
        .enumerate()
        .fold(LANCZOS_BASE, |acc, (i, c)| acc + c / (y + i as f64));
    // Shifted argument: coefficient i divides (y + i), so t = (y - 1) + g + 1/2.
    let t = y + LANCZOS_G - 0.5;
    let power = t.powf(y - 0.5);
    if power.is_finite() {
        SQRT_2PI * x * power * (-t).exp()
    } else {
        // t^(y-1/2) alone overflows near the top of the range; split it
        // around e^-t so the finite product survives.
        let half = t.powf((y - 0.5) / 2.0);
        SQRT_2PI * x * half * (-t).exp() * half
    }
}
