//! Package root resolution
//!
//! Finding the install destination is two applications of one question: given a
//! path, which package hosts it as a dependency? The first application finds
//! the package whose install hook is running, the second finds the package that
//! depends on it and should receive the files. The question is answered by a
//! strategy trait so dependency-layout conventions other than the default
//! nested one can be substituted without touching the guard or copy logic.

use std::path::{Component, Path, PathBuf};

/// Directory name under which the default layout stores dependencies.
const DEPENDENCY_STORAGE_DIR: &str = "node_modules";

/// Strategy for locating the package that hosts a path as a dependency.
pub trait PackageRootResolver {
    /// Root directory of the package hosting `path` as a dependency, or `None`
    /// when `path` does not sit inside any dependency layout this strategy
    /// understands. Must fail closed rather than guess.
    fn enclosing_package_root(&self, path: &Path) -> Option<PathBuf>;
}

/// Default strategy for the nested `node_modules` layout.
///
/// The hosting package's root is everything before the last `node_modules`
/// component of the path. Pure path arithmetic; never touches the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeModulesLayout;

impl PackageRootResolver for NodeModulesLayout {
    fn enclosing_package_root(&self, path: &Path) -> Option<PathBuf> {
        let components: Vec<Component<'_>> = path.components().collect();
        let storage_index = components
            .iter()
            .rposition(|c| c.as_os_str() == DEPENDENCY_STORAGE_DIR)?;

        let prefix = &components[..storage_index];
        // A prefix without a named directory (e.g. "/node_modules/pkg") is not
        // a package root.
        if !prefix.iter().any(|c| matches!(c, Component::Normal(_))) {
            return None;
        }

        Some(prefix.iter().map(|c| c.as_os_str()).collect())
    }
}

/// Resolve the install destination by walking the two-level hosting chain from
/// the hook script's own path.
pub fn resolve_destination<R>(resolver: &R, script_path: &Path) -> Option<PathBuf>
where
    R: PackageRootResolver + ?Sized,
{
    // The package currently running its install hook.
    let hook_package = resolver.enclosing_package_root(script_path)?;
    // The package that depends on it, the recipient of the files.
    resolver.enclosing_package_root(&hook_package)
}
