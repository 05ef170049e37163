use std::path::Path;

use anyhow::Result;
use console::style;

use rollcall_core::{normalize_name, NamePipeline, Verdict};

use super::load_config;

/// Print the validation verdict for each candidate.
pub fn run(cwd: &Path, candidates: &[String], config: Option<&Path>) -> Result<()> {
    let pipeline = NamePipeline::new(load_config(cwd, config)?)?;

    for raw in candidates {
        let name = normalize_name(raw);
        match pipeline.validator().verdict(&name) {
            Verdict::Accepted => println!("{} {name}: accepted", style("✓").green()),
            Verdict::Rejected(reason) => {
                println!("{} {name}: rejected ({reason})", style("✗").red());
            }
        }
    }

    Ok(())
}
