// ─────────────────────────────────────────────────────────────────────
// Mega Number Kernels — Trig
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Haversine of an angle.

use mega_types::error::{MegaError, MegaResult};

/// hav(θ) = (1 − cos θ) / 2, in [0, 1] and even in θ (radians).
pub fn haversine(theta: f64) -> MegaResult<f64> {
    if !theta.is_finite() {
        return Err(MegaError::domain(
            "haversine",
            format!("theta must be finite, got {theta}"),
        ));
    }
    Ok((1.0 - theta.cos()) / 2.0)
}
