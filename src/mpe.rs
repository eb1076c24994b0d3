//! Launch configuration for the shared DysmalPy installation on the MPE network

use crate::Launcher;

/// Setup script sourced before every fit, maintained by astrosoft
pub const SETUP_SCRIPT: &str = "/afs/mpe.mpg.de/astrosoft/dysmalpy/dysmalpy_setup.sh";

/// Directory holding the `dysmalpy` package, prepended to `PYTHONPATH`
pub const MODULE_DIR: &str = "/afs/mpe.mpg.de/astrosoft/dysmalpy";

/// Variable the fitting scripts read the shared data directory from
pub const DATADIR_VAR: &str = "DYSMALPY_DATADIR";

/// Shared data directory exported as `DYSMALPY_DATADIR`
pub const DATADIR: &str = "/afs/mpe.mpg.de/astrosoft/dysmalpy/data";

/// Script fitting a single object against a 3D cube
pub const FIT_SINGLE_3D: &str = "dysmalpy_fit_single_3D.py";

/// A launcher for `dysmalpy_fit_single_3D.py` against the MPE installation
///
/// Call `params_file` on the result to forward a parameters file, or leave
/// it off to start the script with no argument.
pub fn fit_single_3d() -> Launcher {
    let launcher = Launcher::new()
        .script(FIT_SINGLE_3D)
        .prepend_search_path("PYTHONPATH", MODULE_DIR)
        .env(DATADIR_VAR, DATADIR);

    #[cfg(unix)]
    let launcher = launcher.setup_script(SETUP_SCRIPT);

    launcher
}
