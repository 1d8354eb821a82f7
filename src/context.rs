//! Invocation context for install lifecycle hooks
//!
//! The surrounding package manager exposes two pieces of ambient state while an
//! install hook runs: the lifecycle event name and the path of the helper
//! script it invoked. Both are captured here as an explicit value so the guard
//! and resolver stay pure functions instead of reading process globals.

use std::env;
use std::path::PathBuf;

/// Lifecycle events during which file installation is permitted.
pub const INSTALL_PHASE_EVENTS: &[&str] = &["install", "postinstall"];

/// Environment variable holding the lifecycle event name during a hook.
const LIFECYCLE_EVENT_VAR: &str = "npm_lifecycle_event";

/// Environment variable holding the invoked script's own path during a hook.
const SCRIPT_PATH_VAR: &str = "_";

/// Ambient state of a single lifecycle-hook invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    /// The lifecycle event name (an open set; only install-phase names pass the guard).
    pub lifecycle_event: String,
    /// The invoking helper script's own location, the starting point for
    /// destination resolution.
    pub script_path: PathBuf,
}

impl InvocationContext {
    pub fn new(lifecycle_event: impl Into<String>, script_path: impl Into<PathBuf>) -> Self {
        Self {
            lifecycle_event: lifecycle_event.into(),
            script_path: script_path.into(),
        }
    }

    /// Capture the context from the process environment.
    ///
    /// Unset variables yield empty values, which fail closed later: an empty
    /// event is not an install phase, and an empty path resolves to no
    /// destination.
    pub fn from_env() -> Self {
        Self {
            lifecycle_event: env::var(LIFECYCLE_EVENT_VAR).unwrap_or_default(),
            script_path: PathBuf::from(env::var(SCRIPT_PATH_VAR).unwrap_or_default()),
        }
    }

    /// Whether the lifecycle event is one of the recognized install-phase events.
    pub fn is_install_phase(&self) -> bool {
        INSTALL_PHASE_EVENTS.contains(&self.lifecycle_event.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_install_events_pass_guard() {
        assert!(InvocationContext::new("install", "/tmp/script").is_install_phase());
        assert!(InvocationContext::new("postinstall", "/tmp/script").is_install_phase());
    }

    #[test]
    fn test_other_events_fail_guard() {
        for event in ["preinstall", "test", "prepublish", "Install", "", "start"] {
            assert!(
                !InvocationContext::new(event, "/tmp/script").is_install_phase(),
                "'{event}' must not count as an install phase"
            );
        }
    }

    #[test]
    #[serial]
    fn test_from_env_reads_ambient_state() {
        unsafe {
            env::set_var(LIFECYCLE_EVENT_VAR, "postinstall");
            env::set_var(SCRIPT_PATH_VAR, "/app/node_modules/.bin/install-files");
        }
        let ctx = InvocationContext::from_env();
        assert_eq!(ctx.lifecycle_event, "postinstall");
        assert_eq!(
            ctx.script_path,
            PathBuf::from("/app/node_modules/.bin/install-files")
        );
        unsafe {
            env::remove_var(LIFECYCLE_EVENT_VAR);
            env::remove_var(SCRIPT_PATH_VAR);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults_when_unset() {
        unsafe {
            env::remove_var(LIFECYCLE_EVENT_VAR);
            env::remove_var(SCRIPT_PATH_VAR);
        }
        let ctx = InvocationContext::from_env();
        assert!(ctx.lifecycle_event.is_empty());
        assert_eq!(ctx.script_path, PathBuf::new());
        assert!(!ctx.is_install_phase());
    }
}
