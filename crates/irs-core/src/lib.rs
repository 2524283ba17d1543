#![deny(missing_docs)]
#![doc = "Shared error, seeding, serialization and provenance types for the IRS MathFlow crates."]

pub mod errors;
pub mod hash;
pub mod provenance;
pub mod rng;
pub mod serde;

pub use errors::{ErrorInfo, IrsError};
pub use hash::stable_hash_string;
pub use provenance::{RunProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, RngHandle};
pub use self::serde::{from_json_slice, to_canonical_json_bytes, to_canonical_json_pretty};

/// Rejects non-finite values with a configuration error naming the field.
pub fn require_finite(field: &str, value: f64) -> Result<f64, IrsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(IrsError::Config(
            ErrorInfo::new("non-finite-parameter", format!("{field} must be finite"))
                .with_context("field", field)
                .with_context("value", value.to_string()),
        ))
    }
}

/// Rejects values that are not strictly positive and finite.
pub fn require_positive(field: &str, value: f64) -> Result<f64, IrsError> {
    require_finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(IrsError::Config(
            ErrorInfo::new(
                "non-positive-parameter",
                format!("{field} must be strictly positive"),
            )
            .with_context("field", field)
            .with_context("value", value.to_string()),
        ))
    }
}

/// Rejects negative or non-finite values.
pub fn require_non_negative(field: &str, value: f64) -> Result<f64, IrsError> {
    require_finite(field, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(IrsError::Config(
            ErrorInfo::new("negative-parameter", format!("{field} must not be negative"))
                .with_context("field", field)
                .with_context("value", value.to_string()),
        ))
    }
}
