//! Structured logging helpers for mock substitution.
//!
//! Small helper functions for consistent, structured logging across the
//! crate using the `tracing` crate. The crate only emits; installing a
//! subscriber is the embedding application's concern.

use std::path::Path;

/// Log wrapper construction with the configured targets.
pub fn log_wrapper_initialized(substitutions: usize, targets: &[&str]) {
    tracing::debug!(substitutions, targets = ?targets, "Mock wrapper initialized");
}

/// Log a stand-in being installed for a target.
pub fn log_substitution_activated(target_path: &str) {
    tracing::trace!(target_path, "Substitution activated");
}

/// Log a displaced implementation being put back.
pub fn log_substitution_restored(target_path: &str) {
    tracing::trace!(target_path, "Substitution restored");
}

/// Log a failed best-effort restore. The remaining guards still release.
pub fn log_restore_failed(target_path: &str) {
    tracing::warn!(target_path, "Failed to restore original implementation");
}

/// Log a successfully loaded mock config file.
pub fn log_config_loaded(path: &Path, substitutions: usize) {
    tracing::debug!(path = ?path, substitutions, "Mock config loaded");
}
