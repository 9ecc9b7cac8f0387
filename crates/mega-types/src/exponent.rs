// ─────────────────────────────────────────────────────────────────────
// Mega Number Kernels — Exponent
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Tagged numeric kinds for the generalized divisor-power sum.
//!
//! The exponent kind is resolved once at the call boundary; the kernel then
//! runs the matching arithmetic path over a shared divisor enumeration.

use std::fmt;
use std::str::FromStr;

use num_complex::Complex64;
use serde_json::Value;

use crate::error::{MegaError, MegaResult};

/// Exponent z of σ_z(n).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Exponent {
    Integer(i64),
    Real(f64),
    Complex(Complex64),
}

impl Exponent {
    pub fn is_zero(&self) -> bool {
        match *self {
            Exponent::Integer(k) => k == 0,
            Exponent::Real(x) => x == 0.0,
            Exponent::Complex(c) => c.re == 0.0 && c.im == 0.0,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Exponent::Integer(_) => "integer",
            Exponent::Real(_) => "real",
            Exponent::Complex(_) => "complex",
        }
    }

    /// Widen to a complex exponent, preserving the value.
    pub fn to_complex(&self) -> Complex64 {
        match *self {
            Exponent::Integer(k) => Complex64::new(k as f64, 0.0),
            Exponent::Real(x) => Complex64::new(x, 0.0),
            Exponent::Complex(c) => c,
        }
    }
}

impl From<i64> for Exponent {
    fn from(k: i64) -> Self {
        Exponent::Integer(k)
    }
}

impl From<i32> for Exponent {
    fn from(k: i32) -> Self {
        Exponent::Integer(k as i64)
    }
}

impl From<f64> for Exponent {
    fn from(x: f64) -> Self {
        Exponent::Real(x)
    }
}

impl From<Complex64> for Exponent {
    fn from(c: Complex64) -> Self {
        Exponent::Complex(c)
    }
}

impl fmt::Display for Exponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exponent::Integer(k) => write!(f, "{k}"),
            Exponent::Real(x) => write!(f, "{x}"),
            Exponent::Complex(c) => write!(f, "{c}"),
        }
    }
}

impl FromStr for Exponent {
    type Err = MegaError;

    /// Integer literals stay integral, then float literals, then complex
    /// literals such as `1+2i` or `-0.5i`.
    fn from_str(s: &str) -> MegaResult<Self> {
        let s = s.trim();
        if let Ok(k) = s.parse::<i64>() {
            return Ok(Exponent::Integer(k));
        }
        if let Ok(x) = s.parse::<f64>() {
            return Ok(Exponent::Real(x));
        }
        if let Ok(c) = s.parse::<Complex64>() {
            return Ok(Exponent::Complex(c));
        }
        Err(MegaError::type_kind(
            "sigma",
            format!("exponent '{s}' is not an integer, real or complex literal"),
        ))
    }
}

impl TryFrom<&Value> for Exponent {
    type Error = MegaError;

    fn try_from(value: &Value) -> MegaResult<Self> {
        match value {
            Value::Number(num) => {
                if let Some(k) = num.as_i64() {
                    Ok(Exponent::Integer(k))
                } else if let Some(x) = num.as_f64() {
                    Ok(Exponent::Real(x))
                } else {
                    Err(MegaError::type_kind(
                        "sigma",
                        format!("exponent {num} is not representable"),
                    ))
                }
            }
            Value::Object(map) => {
                let part = |key: &str| map.get(key).and_then(Value::as_f64);
                match (part("re"), part("im")) {
                    (Some(re), Some(im)) => Ok(Exponent::Complex(Complex64::new(re, im))),
                    _ => Err(MegaError::type_kind(
                        "sigma",
                        "complex exponent object needs numeric 're' and 'im' fields",
                    )),
                }
            }
            Value::String(s) => s.parse(),
            other => Err(MegaError::type_kind(
                "sigma",
                format!("exponent must be numeric, got JSON {}", json_kind(other)),
            )),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// σ_z(n) in the kind selected by the exponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SigmaValue {
    /// Exact sum for non-negative integer exponents.
    Integer(u128),
    /// Non-negative real exponents.
    Real(f64),
    /// Negative or non-real exponents.
    Complex(Complex64),
}

impl SigmaValue {
    pub fn as_integer(&self) -> Option<u128> {
        match *self {
            SigmaValue::Integer(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_real(&self) -> Option<f64> {
        match *self {
            SigmaValue::Real(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<Complex64> {
        match *self {
            SigmaValue::Complex(v) => Some(v),
            _ => None,
        }
    }

    /// Widen any kind to complex for cross-kind comparison.
    pub fn to_complex(&self) -> Complex64 {
        match *self {
            SigmaValue::Integer(v) => Complex64::new(v as f64, 0.0),
            SigmaValue::Real(v) => Complex64::new(v, 0.0),
            SigmaValue::Complex(v) => v,
        }
    }
}
