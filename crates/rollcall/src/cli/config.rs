use std::path::Path;

use anyhow::Result;

use super::load_config;

pub fn run(cwd: &Path, config: Option<&Path>) -> Result<()> {
    let config = load_config(cwd, config)?;
    config.validate()?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
