//! Case validation logic.
//!
//! The sizing pipeline itself is total; every domain constraint on its
//! inputs is enforced here, before a case reaches the core.

use crate::schema::{SizingCase, TankDef};
use std::collections::HashSet;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub fn validate_case(case: &SizingCase) -> Result<(), ValidationError> {
    if case.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: case.version,
        });
    }

    let ach = case.air_changes_per_hour;
    if !ach.is_finite() || !(1.0..=50.0).contains(&ach) {
        return Err(ValidationError::InvalidValue {
            field: "air_changes_per_hour".to_string(),
            value: ach.to_string(),
            reason: "must be in [1, 50]".to_string(),
        });
    }

    let ct = case.contact_time_s;
    if !ct.is_finite() || ct < 1.0 {
        return Err(ValidationError::InvalidValue {
            field: "contact_time_s".to_string(),
            value: ct.to_string(),
            reason: "must be at least 1 second".to_string(),
        });
    }

    let mut tank_ids = HashSet::new();
    for tank in &case.tanks {
        if !tank_ids.insert(&tank.id) {
            return Err(ValidationError::DuplicateId {
                id: tank.id.clone(),
                context: "tanks".to_string(),
            });
        }
        validate_tank(tank)?;
    }

    Ok(())
}

fn validate_tank(tank: &TankDef) -> Result<(), ValidationError> {
    validate_positive_finite("length_m", tank.length_m, &tank.id)?;
    validate_positive_finite("breadth_m", tank.breadth_m, &tank.id)?;
    validate_positive_finite("height_m", tank.height_m, &tank.id)?;
    Ok(())
}

fn validate_positive_finite(
    field: &str,
    value: f64,
    tank_id: &str,
) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: format!("tank '{}' {}", tank_id, field),
            value: value.to_string(),
            reason: "must be positive and finite".to_string(),
        });
    }
    Ok(())
}
