//! The Mule runtime home and its deployment layout

mod home;

pub use home::{EnvironmentLocator, FixedLocator, HomeLocator, RuntimeHome};

/// Environment variable naming the runtime home
pub const HOME_VARIABLE: &str = "MULE_HOME";

/// Property consulted when [`HOME_VARIABLE`] is not set
pub const HOME_PROPERTY: &str = "mule.home";

/// Something that can be deployed into a runtime home
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployableKind {
    Application,
    Domain,
}

impl DeployableKind {
    /// Deployment directory under the runtime home
    pub fn directory_name(self) -> &'static str {
        match self {
            DeployableKind::Application => "apps",
            DeployableKind::Domain => "domains",
        }
    }
}

impl std::fmt::Display for DeployableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeployableKind::Application => f.write_str("application"),
            DeployableKind::Domain => f.write_str("domain"),
        }
    }
}
