//! Dependency errors

use super::MuleError;

/// Creates a domain not declared error
pub fn domain_not_declared(coordinates: impl ToString) -> MuleError {
    MuleError::DomainNotDeclared {
        coordinates: coordinates.to_string(),
    }
}
