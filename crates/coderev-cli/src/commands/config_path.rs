use std::path::Path;

use anyhow::{Result, anyhow};
use coderev_infrastructure::CoderevPaths;

pub fn run(config_dir: Option<&Path>) -> Result<()> {
    let paths = CoderevPaths::new(config_dir);
    let config = paths.config_file().map_err(|e| anyhow!("{e}"))?;
    let secret = paths.secret_file().map_err(|e| anyhow!("{e}"))?;
    let logs = paths.log_dir().map_err(|e| anyhow!("{e}"))?;

    println!("config: {}", config.display());
    println!("secret: {}", secret.display());
    println!("logs:   {}", logs.display());
    Ok(())
}
