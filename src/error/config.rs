//! Configuration errors

use super::MuleError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> MuleError {
    MuleError::ConfigNotFound { path: path.into() }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> MuleError {
    MuleError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> MuleError {
    MuleError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> MuleError {
    MuleError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a malformed coordinates error
pub fn malformed_coordinates(input: impl Into<String>) -> MuleError {
    MuleError::MalformedCoordinates {
        input: input.into(),
    }
}
