// ─────────────────────────────────────────────────────────────────────
// Mega Number Kernels — Mega Math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Number-theoretic and special-function kernels.
//!
//! Every kernel is a pure function that validates its arguments at entry and
//! returns `MegaResult`. Scratch buffers (factor lists, sieve tables, matrix
//! temporaries) are call-local.

pub mod batch;
pub mod divisor;
pub mod factor;
pub mod gamma;
pub mod mobius;
pub mod recurrence;
pub mod trig;

mod validate;

pub use divisor::{divisor_count, divisor_sum, euler_totient, jordan_totient, sigma};
pub use factor::{factorize, prime_factors};
pub use gamma::gamma;
pub use mobius::mobius;
pub use recurrence::{catalan, golden_ratio, golden_ratio_default, lucas};
pub use trig::haversine;
