//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::artifact::{ArtifactCoordinates, ResolvedDependency};
use crate::config::parse_definition;

/// mule-app - Mule application installer
///
/// Install packaged Mule applications and their domains into a Mule runtime.
#[derive(Parser, Debug)]
#[command(
    name = "mule-app",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install packaged Mule applications into a Mule runtime",
    long_about = "mule-app installs a packaged Mule application archive into $MULE_HOME/apps, \
                  optionally installing the domain it belongs to into $MULE_HOME/domains first.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  mule-app install --copy-to-apps --final-name myapp --archive target/myapp.zip\n    \
                  mule-app install --config mule-app.yaml\n    \
                  mule-app -D mule.home=/opt/mule install --copy-to-apps\n    \
                  mule-app inspect target/myapp.zip --excludes lib/log4j-1.2.14.jar"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Only report warnings and errors
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Set a configuration property (e.g. -D mule.home=/opt/mule)
    #[arg(
        short = 'D',
        global = true,
        value_name = "KEY=VALUE",
        value_parser = parse_definition
    )]
    pub define: Vec<(String, String)>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install the domain and application archive into the Mule runtime
    Install(InstallArgs),

    /// List and check the entries of an application archive
    Inspect(InspectArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install an application archive:\n    mule-app install --copy-to-apps --final-name myapp --archive target/myapp.zip\n\n\
                   Install the domain first:\n    mule-app install --copy-to-apps --final-name myapp --archive target/myapp.zip \\\n      \
                   --install-domain --domain-dependency org.acme:mydomain:1.0 \\\n      \
                   --dependency org.acme:mydomain:1.0=target/deps/mydomain-1.0.zip\n\n\
                   Use a configuration file:\n    mule-app install --config mule-app.yaml")]
pub struct InstallArgs {
    /// Configuration file (defaults to ./mule-app.yaml when present)
    #[arg(long, short = 'c', env = "MULE_APP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Name of the installed archive, without the .zip extension
    #[arg(long)]
    pub final_name: Option<String>,

    /// Packaged application archive to install
    #[arg(long)]
    pub archive: Option<PathBuf>,

    /// Also install the domain dependency into $MULE_HOME/domains (needs --copy-to-apps)
    #[arg(long)]
    pub install_domain: bool,

    /// Domain dependency as groupId:artifactId:version
    #[arg(long, value_name = "COORDINATES")]
    pub domain_dependency: Option<String>,

    /// Copy the application archive to $MULE_HOME/apps
    #[arg(long = "copy-to-apps")]
    pub copy_to_apps_directory: bool,

    /// Verify the checksum of the staged archive before publishing it
    #[arg(long)]
    pub verify: bool,

    /// A resolved dependency as groupId:artifactId:version=path
    #[arg(long = "dependency", value_name = "COORDINATES=PATH", value_parser = parse_dependency)]
    pub dependencies: Vec<ResolvedDependency>,
}

/// Arguments for the inspect command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List archive entries:\n    mule-app inspect target/myapp.zip\n\n\
                  Require and exclude entries:\n    mule-app inspect target/myapp.zip --contains mule-config.xml --excludes lib/log4j-1.2.14.jar\n\n\
                  Print entries as JSON:\n    mule-app inspect target/myapp.zip --json")]
pub struct InspectArgs {
    /// Archive to inspect
    pub archive: PathBuf,

    /// Entry that must be present
    #[arg(long, value_name = "ENTRY")]
    pub contains: Vec<String>,

    /// Entry that must not be present
    #[arg(long, value_name = "ENTRY")]
    pub excludes: Vec<String>,

    /// Print entries as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    mule-app completions --shell bash > ~/.bash_completion.d/mule-app\n\n\
                  Generate zsh completions:\n    mule-app completions --shell zsh > ~/.zfunc/_mule-app")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(long, value_enum, ignore_case = true)]
    pub shell: Shell,
}

/// Parse `groupId:artifactId:version=path`
fn parse_dependency(input: &str) -> Result<ResolvedDependency, String> {
    let (coordinates, file) = input
        .split_once('=')
        .ok_or_else(|| format!("expected groupId:artifactId:version=path, got '{input}'"))?;

    if file.trim().is_empty() {
        return Err(format!("missing file for dependency '{coordinates}'"));
    }

    let coordinates: ArtifactCoordinates = coordinates.parse().map_err(|e| format!("{e}"))?;
    Ok(ResolvedDependency::new(coordinates, file.trim()))
}
