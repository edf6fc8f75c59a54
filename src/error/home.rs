//! Runtime home validation errors

use std::path::Path;

use super::MuleError;
use crate::runtime::HOME_VARIABLE;

pub fn not_found(path: &Path) -> MuleError {
    MuleError::HomeNotFound {
        variable: HOME_VARIABLE.to_string(),
        path: path.display().to_string(),
    }
}

pub fn not_a_directory(path: &Path) -> MuleError {
    MuleError::HomeNotDirectory {
        variable: HOME_VARIABLE.to_string(),
        path: path.display().to_string(),
    }
}

pub fn not_writable(path: &Path) -> MuleError {
    MuleError::HomeNotWritable {
        variable: HOME_VARIABLE.to_string(),
        path: path.display().to_string(),
    }
}
