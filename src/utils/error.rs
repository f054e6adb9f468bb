use thiserror::Error;

#[derive(Error, Debug)]
pub enum MembershipError {
    #[error("You are not {username}. Please choose another username.")]
    AuthenticationError { username: String },

    #[error("Incorrect password. You are not authorized to {operation}.")]
    AuthorizationError { operation: String },

    #[error("Username '{username}' is not registered as a PacCommerce member.")]
    NotFoundError { username: String },

    #[error("User {username} {message}")]
    StateError { username: String, message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Credential input failed: {message}")]
    InputError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Security,
    Membership,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MembershipError {
    pub fn validation(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        MembershipError::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            MembershipError::AuthenticationError { .. }
            | MembershipError::AuthorizationError { .. } => ErrorCategory::Security,
            MembershipError::NotFoundError { .. } | MembershipError::StateError { .. } => {
                ErrorCategory::Membership
            }
            MembershipError::ValidationError { .. } | MembershipError::InputError { .. } => {
                ErrorCategory::Input
            }
            MembershipError::ConfigError { .. } | MembershipError::ConfigParseError { .. } => {
                ErrorCategory::Configuration
            }
            MembershipError::IoError(_)
            | MembershipError::SerializationError(_)
            | MembershipError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Membership | ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Security | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MembershipError::AuthenticationError { .. } => {
                "Confirm the membership type on record and the verification phrase, or pick a different username"
            }
            MembershipError::AuthorizationError { .. } => {
                "Ask an administrator for the admin password"
            }
            MembershipError::NotFoundError { .. } => {
                "List registered members to check the spelling of the username"
            }
            MembershipError::StateError { .. } => {
                "Classify the user with their monthly expense and income first"
            }
            MembershipError::ValidationError { .. } => "Provide a finite numeric value",
            MembershipError::ConfigError { .. } | MembershipError::ConfigParseError { .. } => {
                "Check the configuration file against the documented layout"
            }
            MembershipError::InputError { .. } => "Run the command from an interactive terminal",
            MembershipError::IoError(_)
            | MembershipError::SerializationError(_)
            | MembershipError::CsvError(_) => "Retry; if it persists, report the error",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Security => format!("Access denied: {}", self),
            ErrorCategory::Membership => self.to_string(),
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("Unexpected failure: {}", self),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, MembershipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = MembershipError::AuthenticationError {
            username: "Ana".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "You are not Ana. Please choose another username."
        );

        let err = MembershipError::NotFoundError {
            username: "Zed".to_string(),
        };
        assert!(err.to_string().contains("'Zed'"));

        let err = MembershipError::validation("monthly_income", "abc", "not a number");
        assert!(err.to_string().contains("monthly_income"));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_severity_drives_exit_code() {
        let denied = MembershipError::AuthorizationError {
            operation: "view registered members".to_string(),
        };
        assert_eq!(denied.category(), ErrorCategory::Security);
        assert_eq!(denied.exit_code(), 1);

        let state = MembershipError::StateError {
            username: "Budi".to_string(),
            message: "is not yet a member.".to_string(),
        };
        assert_eq!(state.severity(), ErrorSeverity::Medium);
        assert_eq!(state.exit_code(), 2);

        let io = MembershipError::from(std::io::Error::other("boom"));
        assert_eq!(io.exit_code(), 3);
    }
}
