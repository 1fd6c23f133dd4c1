//! Common guards shared by the closures.

use crate::error::{ModelError, ModelResult};
use bf_core::{BfError, Real, ensure_finite, ensure_positive};

/// Ensure a value is finite, returning ModelError if not.
pub fn check_finite(value: Real, what: &'static str) -> ModelResult<Real> {
    ensure_finite(value, what).map_err(|_| ModelError::NonFinite { what, value })
}

/// Ensure a material parameter (E, A0, descriptor constants) is finite and positive.
pub fn check_parameter(value: Real, what: &'static str) -> ModelResult<Real> {
    ensure_positive(value, what).map_err(|err| match err {
        BfError::NonPositive { what, value } => ModelError::NonPositiveParameter { what, value },
        _ => ModelError::NonFinite { what, value },
    })
}

/// Ensure a cross-sectional area is finite and positive.
pub fn check_area(area: Real, what: &'static str) -> ModelResult<Real> {
    let area = check_finite(area, what)?;
    if area > 0.0 {
        Ok(area)
    } else {
        tracing::debug!(what, area, "rejecting non-positive area");
        Err(ModelError::InvalidState { what, value: area })
    }
}
