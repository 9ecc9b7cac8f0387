// ─────────────────────────────────────────────────────────────────────
// Mega Number Kernels — Validation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Entry checks shared by the natural-number kernels.

use mega_types::error::{MegaError, MegaResult};

/// n >= 1, returned as the unsigned working value.
pub(crate) fn positive(kernel: &'static str, name: &str, n: i64) -> MegaResult<u64> {
    if n < 1 {
        return Err(MegaError::domain(
            kernel,
            format!("{name} must be >= 1, got {n}"),
        ));
    }
    Ok(n as u64)
}

/// n >= 0, returned as the unsigned working value.
pub(crate) fn non_negative(kernel: &'static str, name: &str, n: i64) -> MegaResult<u64> {
    if n < 0 {
        return Err(MegaError::domain(
            kernel,
            format!("{name} must be >= 0, got {n}"),
        ));
    }
    Ok(n as u64)
}
