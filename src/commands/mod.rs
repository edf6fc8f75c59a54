//! Command implementations for the mule-app CLI

pub mod completions;
pub mod inspect;
pub mod install;
pub mod version;
