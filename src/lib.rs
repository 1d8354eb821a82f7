//! install-files - push files into a host package during install hooks
//!
//! Copies the files contained within a source directory into a host package's
//! directory when called from a dependency's 'install' or 'postinstall'
//! lifecycle hook. The copy recursively merges the source into the host
//! package's directory, creating subdirectories as needed and overwriting
//! same-named files so an upgraded dependency can push new versions of its
//! files to dependents. Destination files without a source counterpart are
//! never touched.
//!
//! The ambient hook state (lifecycle event name, hook script path) is passed
//! explicitly as an [`InvocationContext`]; capture it with
//! [`InvocationContext::from_env`] when running inside a real hook.
//!
//! ```no_run
//! use install_files::{InvocationContext, install_files};
//!
//! let ctx = InvocationContext::from_env();
//! install_files("files", &ctx)?;
//! # Ok::<(), install_files::InstallFilesError>(())
//! ```

mod context;
mod copy;
mod error;
mod installer;
mod resolver;

pub use context::{INSTALL_PHASE_EVENTS, InvocationContext};
pub use copy::merge_copy_dir;
pub use error::{InstallFilesError, Result};
pub use installer::{FileInstaller, install_files};
pub use resolver::{NodeModulesLayout, PackageRootResolver, resolve_destination};
