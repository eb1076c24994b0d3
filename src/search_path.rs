use crate::error::LaunchError::SearchPath;
use crate::LaunchResult;
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Prepend a directory to a search-path value such as `PYTHONPATH`
///
/// The result is `dir` followed by the platform path-list separator and the
/// prior value. A missing or empty prior value yields `dir` alone, with no
/// trailing separator. Entries already present in the prior value are kept
/// as they are, duplicates included.
pub fn prepend_search_path(
    dir: impl AsRef<Path>,
    prior: Option<&OsStr>,
) -> LaunchResult<OsString> {
    let dir = dir.as_ref();

    match prior {
        Some(prior) if !prior.is_empty() => {
            let entries = std::iter::once(dir.to_path_buf()).chain(env::split_paths(prior));
            env::join_paths(entries).map_err(|e| SearchPath(dir.as_os_str().to_os_string(), e))
        }
        _ => Ok(dir.as_os_str().to_os_string()),
    }
}
