use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid position: {value}")]
    InvalidPosition { value: String },

    #[error("Lineup number {number} is out of range (roster has {len} players)")]
    IndexOutOfRange { number: usize, len: usize },

    #[error("Hits ({hits}) can't be greater than at bats ({at_bats})")]
    StatInvariantViolation { at_bats: u32, hits: u32 },

    #[error("Malformed input: {input:?}")]
    MalformedInput { input: String },

    #[error("Input stream closed")]
    InputClosed,

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 使用者輸入不符合規則，可重試
    Validation,
    /// 讀寫球員名單檔案失敗
    Storage,
    Config,
    Input,
}

impl RosterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RosterError::InvalidPosition { .. }
            | RosterError::IndexOutOfRange { .. }
            | RosterError::StatInvariantViolation { .. }
            | RosterError::MalformedInput { .. } => ErrorCategory::Validation,
            RosterError::CsvError(_) | RosterError::IoError(_) => ErrorCategory::Storage,
            RosterError::ConfigValidationError { .. }
            | RosterError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            RosterError::InputClosed => ErrorCategory::Input,
        }
    }

    /// 顯示給使用者的訊息 (與選單提示一致)
    pub fn user_friendly_message(&self) -> String {
        match self {
            RosterError::InvalidPosition { .. } => "Invalid position. Please try again.".to_string(),
            RosterError::IndexOutOfRange { .. } | RosterError::MalformedInput { .. } => {
                "Invalid integer. Please try again.".to_string()
            }
            RosterError::StatInvariantViolation { .. } => {
                "Hits can't be greater than at bats.".to_string()
            }
            RosterError::InputClosed => "Input closed.".to_string(),
            RosterError::CsvError(e) => format!("Could not read or write the roster file: {}", e),
            RosterError::IoError(e) => format!("Could not access the roster file: {}", e),
            RosterError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            RosterError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => "Check the lineup and enter a valid value",
            ErrorCategory::Storage => {
                "Check that the roster file path exists and is writable"
            }
            ErrorCategory::Config => "Fix the configuration file or command line arguments",
            ErrorCategory::Input => "Restart the program to continue editing",
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_are_validation_category() {
        let errors = [
            RosterError::InvalidPosition { value: "XX".to_string() },
            RosterError::IndexOutOfRange { number: 4, len: 3 },
            RosterError::StatInvariantViolation { at_bats: 5, hits: 9 },
        ];

        for e in &errors {
            assert_eq!(e.category(), ErrorCategory::Validation);
        }
    }

    #[test]
    fn test_user_friendly_messages_match_prompts() {
        let e = RosterError::StatInvariantViolation { at_bats: 5, hits: 9 };
        assert_eq!(e.user_friendly_message(), "Hits can't be greater than at bats.");

        let e = RosterError::IndexOutOfRange { number: 0, len: 2 };
        assert_eq!(e.user_friendly_message(), "Invalid integer. Please try again.");
    }

    #[test]
    fn test_io_error_is_storage_category() {
        let e = RosterError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(e.category(), ErrorCategory::Storage);
    }
}
