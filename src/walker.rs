use std::path::{Path, PathBuf};

use crate::config::SourceGraphConfig;

/// Build output directories that never hold sources worth analyzing.
const EXCLUDED_DIRS: &[&str] = &["target", "build", "out", ".gradle"];

/// Walk a project directory and collect Java source files.
///
/// Respects `.gitignore` rules, always excludes build output directories,
/// and applies any additional exclusions from `config.exclude`.
///
/// When `verbose` is true, each discovered file path is printed to stderr.
pub fn walk_project(
    root: &Path,
    config: &SourceGraphConfig,
    verbose: bool,
) -> anyhow::Result<Vec<PathBuf>> {
    let walker = ignore::WalkBuilder::new(root)
        .standard_filters(true)
        // Read .gitignore files even when the directory is not inside a git
        // repository, so exclusions work for standalone directories too.
        .require_git(false)
        .build();

    let mut files = Vec::new();
    for result in walker {
        let entry = match result {
            Ok(e) => e,
            Err(err) => {
                eprintln!("warning: {err}");
                continue;
            }
        };

        let path = entry.path();

        if entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false) {
            continue;
        }

        if path_contains_excluded_dir(path) {
            continue;
        }

        if is_excluded_by_config(path, config) {
            continue;
        }

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext != "java" {
            continue;
        }

        if verbose {
            eprintln!("{}", path.display());
        }

        files.push(path.to_path_buf());
    }

    Ok(files)
}

/// Returns true if any component of `path` is a build output directory.
fn path_contains_excluded_dir(path: &Path) -> bool {
    path.components().any(|c| {
        c.as_os_str()
            .to_str()
            .map(|s| EXCLUDED_DIRS.contains(&s))
            .unwrap_or(false)
    })
}

/// Returns true if `path` matches any exclusion pattern from config.
fn is_excluded_by_config(path: &Path, config: &SourceGraphConfig) -> bool {
    let patterns = match &config.exclude {
        Some(p) => p,
        None => return false,
    };

    let path_str = path.to_string_lossy();

    for pattern in patterns {
        let matcher = match glob::Pattern::new(pattern) {
            Ok(m) => m,
            Err(_) => continue,
        };
        if matcher.matches(&path_str) {
            return true;
        }
        // Also check if any single component matches the pattern.
        for component in path.components() {
            if let Some(s) = component.as_os_str().to_str() {
                if matcher.matches(s) {
                    return true;
                }
            }
        }
    }

    false
}
