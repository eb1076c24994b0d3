use crate::{LaunchError, LaunchResult};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// An environment-setup script to be sourced before a launch
///
/// Sourcing happens in a throwaway shell: the script runs with
/// `. "$0" && env -0` and the resulting environment is captured from the
/// NUL-delimited dump. The script's stderr is inherited, so whatever it
/// prints reaches the caller's terminal unchanged.
#[derive(Debug, Clone)]
pub struct SetupScript {
    path: PathBuf,
    shell: PathBuf,
}

impl SetupScript {
    /// Create a setup script reference, sourced with `sh`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SetupScript {
            path: path.into(),
            shell: PathBuf::from("sh"),
        }
    }

    /// Use a different shell to source the script, e.g. `bash`
    pub fn shell(mut self, shell: impl Into<PathBuf>) -> Self {
        self.shell = shell.into();
        self
    }

    /// The path the script will be sourced from
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Source the script and capture the environment it leaves behind
    ///
    /// A script that exits non-zero produces `SetupFailed` with the shell's
    /// exit status; no environment is returned in that case.
    pub fn source(&self) -> LaunchResult<Vec<(OsString, OsString)>> {
        let child = Command::new(&self.shell)
            .arg("-c")
            .arg(r#". "$0" && env -0"#)
            .arg(&self.path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()?;

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(LaunchError::SetupFailed(self.path.clone(), output.status));
        }

        Ok(parse_env_dump(&output.stdout))
    }
}

fn parse_env_dump(dump: &[u8]) -> Vec<(OsString, OsString)> {
    use std::os::unix::ffi::OsStringExt;

    dump.split(|b| *b == 0)
        .filter_map(|record| {
            // Values may contain '=', keys may not; a record without a key
            // is not an environment variable.
            let eq = record.iter().position(|b| *b == b'=')?;
            if eq == 0 {
                return None;
            }
            Some((
                OsString::from_vec(record[..eq].to_vec()),
                OsString::from_vec(record[eq + 1..].to_vec()),
            ))
        })
        .collect()
}
