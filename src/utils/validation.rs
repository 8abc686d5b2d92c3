use crate::utils::error::{OrgError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(OrgError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if value.is_nan() || value < 0.0 {
        return Err(OrgError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a non-negative number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_names<'a, I>(names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(OrgError::DuplicateName {
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "Ahmet").is_ok());
        assert!(validate_non_empty_string("name", "").is_err());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("salary", 0.0).is_ok());
        assert!(validate_non_negative("salary", 5000.0).is_ok());
        assert!(validate_non_negative("salary", -1.0).is_err());
        assert!(validate_non_negative("salary", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_unique_names() {
        assert!(validate_unique_names(["Ahmet", "Ayse"]).is_ok());
        let err = validate_unique_names(["Ahmet", "Ayse", "Ahmet"]).unwrap_err();
        assert!(matches!(err, OrgError::DuplicateName { name } if name == "Ahmet"));
    }
}
