use crate::error::LaunchError::ConfigurationError;
use crate::search_path::prepend_search_path;
#[cfg(unix)]
use crate::setup::SetupScript;
use crate::LaunchResult;
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Output};

/// Launch an interpreter on a script with a prepared environment
///
/// The launcher performs, in order: source the setup script (if any) and
/// take over the environment it leaves behind, prepend the configured
/// directories to their search-path variables, apply the plain overwrites,
/// then start `interpreter script [params_file]` and hand the child that
/// environment. Nothing is validated and nothing is retried; whatever the
/// child exits with is what the caller sees.
#[derive(Debug)]
pub struct Launcher {
    interpreter: PathBuf,
    script: Option<PathBuf>,
    params_file: Option<OsString>,
    prepends: Vec<(OsString, PathBuf)>,
    overrides: Vec<(OsString, OsString)>,
    #[cfg(unix)]
    setup: Option<SetupScript>,
}

impl Launcher {
    /// Create a launcher that runs scripts with `python`
    pub fn new() -> Self {
        Launcher {
            interpreter: PathBuf::from("python"),
            script: None,
            params_file: None,
            prepends: Vec::new(),
            overrides: Vec::new(),
            #[cfg(unix)]
            setup: None,
        }
    }

    /// Use a different interpreter executable
    pub fn interpreter(mut self, interpreter: impl Into<PathBuf>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    /// Set the script the interpreter will run
    ///
    /// Required before the launcher is usable.
    pub fn script(mut self, script: impl Into<PathBuf>) -> Self {
        self.script = Some(script.into());
        self
    }

    /// Forward a parameters file path to the script, unchanged
    ///
    /// Without this the script is started with no argument at all.
    pub fn params_file(mut self, params_file: impl Into<OsString>) -> Self {
        self.params_file = Some(params_file.into());
        self
    }

    /// Prepend `dir` to the search-path variable `var` in the child's environment
    ///
    /// The prior value is whatever the variable holds after the setup script
    /// has run.
    pub fn prepend_search_path(
        mut self,
        var: impl Into<OsString>,
        dir: impl Into<PathBuf>,
    ) -> Self {
        self.prepends.push((var.into(), dir.into()));
        self
    }

    /// Set an environment variable in the child's environment, replacing any prior value
    pub fn env(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.overrides.push((key.into(), value.into()));
        self
    }

    /// Source a setup script before the launch
    #[cfg(unix)]
    pub fn setup_script(mut self, script: impl Into<PathBuf>) -> Self {
        self.setup = Some(SetupScript::new(script));
        self
    }

    /// Source a setup script configured beyond the defaults, e.g. with another shell
    #[cfg(unix)]
    pub fn setup(mut self, setup: SetupScript) -> Self {
        self.setup = Some(setup);
        self
    }

    /// Build the prepared `Command`, sourcing the setup script in the process
    pub fn command(&self) -> LaunchResult<Command> {
        let script = self
            .script
            .as_ref()
            .ok_or_else(|| ConfigurationError("no script to launch".to_string()))?;

        let mut command = Command::new(&self.interpreter);
        command.arg(script);
        if let Some(params_file) = &self.params_file {
            command.arg(params_file);
        }
        command.env_clear();
        command.envs(self.child_env()?);

        Ok(command)
    }

    /// Run the launch to completion and return the child's exit status
    pub fn status(&self) -> LaunchResult<ExitStatus> {
        Ok(self.command()?.status()?)
    }

    /// Run the launch to completion, capturing its stdout and stderr
    pub fn output(&self) -> LaunchResult<Output> {
        Ok(self.command()?.output()?)
    }

    /// Start the launch without waiting on it
    pub fn spawn(&self) -> LaunchResult<Child> {
        Ok(self.command()?.spawn()?)
    }

    /// Async equivalent of `status`
    #[cfg(feature = "async")]
    pub async fn status_async(&self) -> LaunchResult<ExitStatus> {
        let mut command = tokio::process::Command::from(self.command()?);
        Ok(command.status().await?)
    }

    fn child_env(&self) -> LaunchResult<HashMap<OsString, OsString>> {
        #[cfg(unix)]
        let mut env: HashMap<OsString, OsString> = match &self.setup {
            Some(setup) => setup.source()?.into_iter().collect(),
            None => std::env::vars_os().collect(),
        };
        #[cfg(not(unix))]
        let mut env: HashMap<OsString, OsString> = std::env::vars_os().collect();

        for (var, dir) in &self.prepends {
            let prior = env.get(var).map(|value| value.as_os_str());
            let joined = prepend_search_path(dir, prior)?;
            env.insert(var.clone(), joined);
        }

        for (key, value) in &self.overrides {
            env.insert(key.clone(), value.clone());
        }

        Ok(env)
    }
}

impl Default for Launcher {
    fn default() -> Self {
        Launcher::new()
    }
}
