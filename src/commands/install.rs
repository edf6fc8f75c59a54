//! Install command implementation
//!
//! The installation process:
//! 1. Load `mule-app.yaml` (if any) and apply command line flags
//! 2. Build the install request
//! 3. Run the installer against the home named by `MULE_HOME` / `mule.home`
//! 4. Print what was installed

use console::Style;

use crate::cli::InstallArgs;
use crate::config::{InstallConfig, InstallOverrides, InstallRequest, Properties};
use crate::error::Result;
use crate::installer::{InstallOutcome, InstallReport, Installer};
use crate::progress::CopyProgress;
use crate::runtime::EnvironmentLocator;

/// Run install command
pub fn run(args: InstallArgs, properties: Properties, quiet: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let mut config = InstallConfig::discover(args.config.as_deref(), &cwd)?;

    config.apply(InstallOverrides {
        final_name: args.final_name,
        archive: args.archive,
        install_domain: args.install_domain,
        domain_dependency: args.domain_dependency,
        copy_to_apps_directory: args.copy_to_apps_directory,
        verify_checksum: args.verify,
        dependencies: args.dependencies,
        properties,
    });

    let locator = EnvironmentLocator::new(std::mem::take(&mut config.properties));
    let request = InstallRequest::from_config(config)?;

    let outcome = Installer::new(&request, &locator)
        .with_progress(CopyProgress::for_terminal(quiet))
        .run()?;

    if let InstallOutcome::Completed(report) = outcome {
        tracing::debug!(states = ?report.states, "install finished");
        if !quiet {
            print_report(&report);
        }
    }

    Ok(())
}

fn print_report(report: &InstallReport) {
    let check = Style::new().green().bold().apply_to("✓");

    println!(
        "{} {}",
        Style::new().bold().apply_to("Mule runtime:"),
        report.home.display()
    );

    if let Some(domain) = &report.domain {
        println!(
            "{} {} {}",
            check,
            Style::new().bold().apply_to("Installed domain"),
            domain.display()
        );
    }
    println!(
        "{} {} {}",
        check,
        Style::new().bold().apply_to("Installed application"),
        report.archive.display()
    );
}
