use crate::utils::error::{HelperError, Result};
use uuid::Uuid;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_uuid(field_name: &str, value: &str) -> Result<Uuid> {
    if value.trim().is_empty() {
        return Err(HelperError::InvalidArgumentError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "UUID cannot be empty".to_string(),
        });
    }

    Uuid::parse_str(value).map_err(|e| HelperError::InvalidArgumentError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Invalid UUID format: {}", e),
    })
}
