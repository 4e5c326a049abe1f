use crate::utils::error::{Result, RosterError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 1-based 打序號碼是否落在 `[1, len]`
pub fn validate_lineup_number(number: usize, len: usize) -> Result<usize> {
    if number < 1 || number > len {
        return Err(RosterError::IndexOutOfRange { number, len });
    }
    Ok(number - 1)
}

pub fn validate_stats(at_bats: u32, hits: u32) -> Result<()> {
    if hits > at_bats {
        return Err(RosterError::StatInvariantViolation { at_bats, hits });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("roster.file", "players.csv").is_ok());
        assert!(validate_path("roster.file", "").is_err());
        assert!(validate_path("roster.file", "   ").is_err());
        assert!(validate_path("roster.file", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_lineup_number() {
        assert_eq!(validate_lineup_number(1, 3).unwrap(), 0);
        assert_eq!(validate_lineup_number(3, 3).unwrap(), 2);
        assert!(matches!(
            validate_lineup_number(0, 3),
            Err(RosterError::IndexOutOfRange { number: 0, len: 3 })
        ));
        assert!(validate_lineup_number(4, 3).is_err());
        assert!(validate_lineup_number(1, 0).is_err());
    }

    #[test]
    fn test_validate_stats() {
        assert!(validate_stats(10, 3).is_ok());
        assert!(validate_stats(0, 0).is_ok());
        assert!(validate_stats(5, 5).is_ok());
        assert!(validate_stats(5, 9).is_err());
    }
}
