// ─────────────────────────────────────────────────────────────────────
// Mega Number Kernels — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MegaError {
    /// Argument outside the mathematically valid input set.
    #[error("Domain error in {kernel}: {message}")]
    Domain {
        kernel: &'static str,
        message: String,
    },

    /// Valid argument whose result does not fit the fixed-width return type.
    #[error("Range error in {kernel}: {message}")]
    Range {
        kernel: &'static str,
        message: String,
    },

    /// Argument supplied as a kind the kernel cannot dispatch on.
    #[error("Unsupported argument kind for {kernel}: {message}")]
    TypeKind {
        kernel: &'static str,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MegaError {
    pub fn domain(kernel: &'static str, message: impl Into<String>) -> Self {
        MegaError::Domain {
            kernel,
            message: message.into(),
        }
    }

    pub fn range(kernel: &'static str, message: impl Into<String>) -> Self {
        MegaError::Range {
            kernel,
            message: message.into(),
        }
    }

    pub fn type_kind(kernel: &'static str, message: impl Into<String>) -> Self {
        MegaError::TypeKind {
            kernel,
            message: message.into(),
        }
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, MegaError::Domain { .. })
    }

    pub fn is_range(&self) -> bool {
        matches!(self, MegaError::Range { .. })
    }

    pub fn is_type_kind(&self) -> bool {
        matches!(self, MegaError::TypeKind { .. })
    }
}

pub type MegaResult<T> = Result<T, MegaError>;
