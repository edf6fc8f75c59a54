//! Inspect command implementation

use console::Style;

use crate::cli::InspectArgs;
use crate::error::Result;
use crate::package::{ArchiveContents, ArchiveExpectations};

/// Run inspect command
pub fn run(args: InspectArgs) -> Result<()> {
    let contents = ArchiveContents::open(&args.archive)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&contents)?);
    } else {
        println!(
            "{} ({} entries)",
            Style::new().bold().apply_to(args.archive.display()),
            contents.len()
        );
        for entry in &contents.entries {
            println!("  {entry}");
        }
    }

    let expectations = ArchiveExpectations {
        present: args.contains,
        absent: args.excludes,
    };
    contents.check(&expectations)?;

    let checks = expectations.present.len() + expectations.absent.len();
    if checks > 0 && !args.json {
        println!(
            "{} {checks} entry checks passed",
            Style::new().green().bold().apply_to("✓")
        );
    }

    Ok(())
}
