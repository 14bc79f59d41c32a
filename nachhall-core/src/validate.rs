//! Common Input Checks
//!
//! Every public constructor funnels its numeric inputs through these helpers
//! so the two failure classes stay consistent across the crate: values that
//! are not usable numbers (`NotFinite`) and numbers outside their physical
//! domain (`OutOfRange`). All helpers are pure and allocation-free.
//!
//! NaN compares false against every bound, so each range helper re-checks
//! finiteness first; a NaN must never slip through as "in range".

use crate::errors::{AcousticsError, AcousticsResult};

/// Reject NaN and infinities.
pub(crate) fn check_finite(field: &'static str, value: f64) -> AcousticsResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AcousticsError::NotFinite { field })
    }
}

/// Inclusive range check.
pub(crate) fn check_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> AcousticsResult<()> {
    check_finite(field, value)?;
    if value < min || value > max {
        Err(AcousticsError::OutOfRange { field, value, min, max })
    } else {
        Ok(())
    }
}

/// Exclusive lower bound, no upper bound.
pub(crate) fn check_above(field: &'static str, value: f64, min: f64) -> AcousticsResult<()> {
    check_finite(field, value)?;
    if value > min {
        Ok(())
    } else {
        Err(AcousticsError::OutOfRange { field, value, min, max: f64::INFINITY })
    }
}
