//! Shared helpers for command implementations

use anyhow::{Context, Result};
use fc_core::Config;
use std::path::{Path, PathBuf};

use crate::cli::GlobalArgs;

/// Project configuration plus resolved paths
pub struct ProjectContext {
    pub config: Config,
    pub cases_path: PathBuf,
}

/// Load the project config and resolve the cases-file path
pub fn load_project(global: &GlobalArgs) -> Result<ProjectContext> {
    let project_dir = Path::new(&global.project_dir);
    let config = Config::load_from_dir(project_dir).context("Failed to load project config")?;
    let cases_path = config.cases_path_absolute(project_dir);
    Ok(ProjectContext { config, cases_path })
}

/// Database path honoring the --target override
pub fn db_path<'a>(global: &'a GlobalArgs, config: &'a Config) -> &'a str {
    global
        .target
        .as_deref()
        .unwrap_or(&config.database.path)
}
