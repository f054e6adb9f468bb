use crate::utils::error::{MembershipError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_username(field_name: &str, username: &str) -> Result<()> {
    validate_non_empty_string(field_name, username)
}

pub fn validate_amount(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(MembershipError::validation(
            field_name,
            value,
            "Value must be a finite number",
        ));
    }
    Ok(())
}

/// Parses an operator-supplied amount such as `"7"` or `"1500000.50"`.
pub fn parse_amount(field_name: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| MembershipError::validation(field_name, raw, "Value is not a number"))?;
    validate_amount(field_name, value)?;
    Ok(value)
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(MembershipError::validation(
            field_name,
            path,
            "Path cannot be empty",
        ));
    }

    if path.contains('\0') {
        return Err(MembershipError::validation(
            field_name,
            path,
            "Path contains null bytes",
        ));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MembershipError::validation(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(MembershipError::validation(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    validate_amount(field_name, value)?;
    if value < 0.0 {
        return Err(MembershipError::validation(
            field_name,
            value,
            "Value cannot be negative",
        ));
    }
    Ok(())
}

pub fn validate_unique<'a, I>(field_name: &str, values: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(MembershipError::validation(
                field_name,
                value,
                "Duplicate entry",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("monthly_expense", "7").unwrap(), 7.0);
        assert_eq!(parse_amount("monthly_expense", " 1500000.5 ").unwrap(), 1_500_000.5);
        assert!(parse_amount("monthly_expense", "seven").is_err());
        assert!(parse_amount("monthly_expense", "").is_err());
        assert!(parse_amount("monthly_expense", "NaN").is_err());
        assert!(parse_amount("monthly_expense", "inf").is_err());
    }

    #[test]
    fn test_parse_amount_error_names_field() {
        let err = parse_amount("monthly_income", "abc").unwrap_err();
        match err {
            MembershipError::ValidationError { field, value, .. } => {
                assert_eq!(field, "monthly_income");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("discount", 0.15, 0.0, 1.0).is_ok());
        assert!(validate_range("discount", 1.5, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_validate_unique() {
        assert!(validate_unique("members", ["Ana", "Budi"]).is_ok());
        assert!(validate_unique("members", ["Ana", "Ana"]).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("reference_expense", 0.0).is_ok());
        assert!(validate_non_negative("reference_expense", -1.0).is_err());
    }
}
