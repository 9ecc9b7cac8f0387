// ─────────────────────────────────────────────────────────────────────
// Mega Number Kernels — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{GOLDEN_RATIO_ITERATIONS, LUCAS_MATRIX_THRESHOLD};
use crate::error::{MegaError, MegaResult};

/// Tunables for the iterative and threshold-switched kernels.
/// Every field is optional in JSON; missing fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernelConfig {
    /// Fixed-point iterations for the golden ratio (must be >= 1).
    #[serde(default = "default_golden_ratio_iterations")]
    pub golden_ratio_iterations: usize,
    /// Lucas indices above this use matrix exponentiation.
    #[serde(default = "default_lucas_matrix_threshold")]
    pub lucas_matrix_threshold: u64,
}

fn default_golden_ratio_iterations() -> usize {
    GOLDEN_RATIO_ITERATIONS
}
fn default_lucas_matrix_threshold() -> u64 {
    LUCAS_MATRIX_THRESHOLD
}

impl Default for KernelConfig {
    fn default() -> Self {
        KernelConfig {
            golden_ratio_iterations: default_golden_ratio_iterations(),
            lucas_matrix_threshold: default_lucas_matrix_threshold(),
        }
    }
}

impl KernelConfig {
    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> MegaResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        debug!(path, ?config, "loaded kernel config");
        Ok(config)
    }

    /// Parse from a JSON string and validate.
    pub fn from_json(json: &str) -> MegaResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> MegaResult<()> {
        if self.golden_ratio_iterations < 1 {
            return Err(MegaError::Config(format!(
                "golden_ratio_iterations must be >= 1, got {}",
                self.golden_ratio_iterations
            )));
        }
        Ok(())
    }
}
