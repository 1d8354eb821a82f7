//! Error types for install-files
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//! Every failure reaches the caller exactly once through the `Result` returned
//! by the entry point; nothing is swallowed or retried internally.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for install-files operations
#[derive(Error, Diagnostic, Debug)]
pub enum InstallFilesError {
    /// The ambient lifecycle event is not an install-phase event.
    #[error("Must be invoked from a package's 'install' or 'postinstall' script, not '{event}'")]
    #[diagnostic(
        code(install_files::guard::wrong_invocation_context),
        help(
            "Call install_files from an install or postinstall lifecycle hook; destination resolution depends on state only present during install hooks"
        )
    )]
    WrongInvocationContext { event: String },

    /// The two-level package-root resolution chain found no host package.
    #[error("Could not determine the install destination directory from '{script_path}'")]
    #[diagnostic(
        code(install_files::resolver::destination_unresolvable),
        help(
            "The install hook's script must live inside a nested dependency layout (a package under the host's dependency storage directory)"
        )
    )]
    DestinationUnresolvable { script_path: String },

    /// The source directory does not exist or is not a directory.
    #[error("Source directory not found: {path}")]
    #[diagnostic(
        code(install_files::copy::source_not_found),
        help("Check that the source path exists and is a directory readable by this process")
    )]
    SourceNotFound { path: String },

    /// A filesystem error aborted the merge-copy. Partial copies may remain.
    #[error("Failed to copy into host package: {path}")]
    #[diagnostic(code(install_files::copy::copy_failed))]
    CopyFailed { path: String, reason: String },
}

impl InstallFilesError {
    pub(crate) fn copy_failed(path: &std::path::Path, err: &std::io::Error) -> Self {
        InstallFilesError::CopyFailed {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, InstallFilesError>;
