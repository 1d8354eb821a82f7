//! Install pipeline: guard, resolve, copy
//!
//! Wires the three steps together: verify the invocation context represents an
//! install-phase lifecycle event, resolve the host package through the
//! two-level hosting chain, then merge-copy the source directory into it.
//! Every outcome completes exactly once through the returned `Result`.

use std::path::Path;

use crate::context::InvocationContext;
use crate::copy::merge_copy_dir;
use crate::error::{InstallFilesError, Result};
use crate::resolver::{NodeModulesLayout, PackageRootResolver, resolve_destination};

/// File installer parameterized over a dependency-layout strategy.
pub struct FileInstaller<R: PackageRootResolver = NodeModulesLayout> {
    resolver: R,
}

impl FileInstaller {
    /// Installer over the default nested `node_modules` layout.
    pub fn new() -> Self {
        Self {
            resolver: NodeModulesLayout,
        }
    }
}

impl Default for FileInstaller {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: PackageRootResolver> FileInstaller<R> {
    /// Installer over a custom dependency-layout strategy.
    pub fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }

    /// Copy the contents of `source_dir` into the host package's directory.
    ///
    /// The host package is the one whose dependency tree caused `ctx`'s install
    /// hook to run, found by applying the resolver twice starting from the hook
    /// script's path. Fails before touching the filesystem when `ctx` is not an
    /// install-phase invocation or when no host package can be determined.
    pub fn install(&self, source_dir: impl AsRef<Path>, ctx: &InvocationContext) -> Result<()> {
        if !ctx.is_install_phase() {
            return Err(InstallFilesError::WrongInvocationContext {
                event: ctx.lifecycle_event.clone(),
            });
        }

        let destination = resolve_destination(&self.resolver, &ctx.script_path).ok_or_else(
            || InstallFilesError::DestinationUnresolvable {
                script_path: ctx.script_path.display().to_string(),
            },
        )?;

        merge_copy_dir(source_dir.as_ref(), &destination)
    }
}

/// Copy the contents of `source_dir` into the host package's directory, using
/// the default nested `node_modules` layout.
///
/// Convenience wrapper over [`FileInstaller`]; see [`FileInstaller::install`].
pub fn install_files(source_dir: impl AsRef<Path>, ctx: &InvocationContext) -> Result<()> {
    FileInstaller::new().install(source_dir, ctx)
}
