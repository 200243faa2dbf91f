//! Environment loading and target resolution.
//!
//! Order for the target page: CLI argument, then `THEMESHIFT_TARGET`, then
//! `src/pages/Stats.tsx` relative to the working directory.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use themeshift_core::app::{DEFAULT_TARGET, TARGET_ENV};

/// How many parent directories to search for a `.env` file
const MAX_ENV_DEPTH: usize = 32;

/// Load the nearest `.env` walking up from the working directory. Existing variables win.
pub fn load_env() {
    let Ok(cwd) = std::env::current_dir() else {
        return;
    };
    if let Some(env_file) = find_env_file(&cwd) {
        let _ = dotenvy::from_path(&env_file);
    }
}

fn find_env_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .take(MAX_ENV_DEPTH)
        .map(|dir| dir.join(".env"))
        .find(|candidate| candidate.is_file())
}

pub fn resolve_target(arg: Option<PathBuf>) -> PathBuf {
    resolve_target_from(arg, std::env::var_os(TARGET_ENV))
}

fn resolve_target_from(arg: Option<PathBuf>, env_value: Option<OsString>) -> PathBuf {
    arg.or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET))
}
