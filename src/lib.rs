#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

mod error;
mod launch;
pub mod mpe;
mod search_path;
#[cfg(unix)]
mod setup;

pub use crate::error::{LaunchError, LaunchResult};
pub use crate::launch::Launcher;
pub use crate::search_path::prepend_search_path;
#[cfg(unix)]
pub use crate::setup::SetupScript;
