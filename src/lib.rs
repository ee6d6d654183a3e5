pub mod config;
pub mod logging;
pub mod registry;
pub mod substitution;
pub mod wrapper;

use miette::Diagnostic;

pub use config::MockConfig;
pub use registry::{TargetFn, TargetRegistry};
pub use substitution::SubstitutionSpec;
pub use wrapper::{IntValueWrapper, MockWrapper};

/// Result type alias for the crate
pub type Result<T> = miette::Result<T>;

/// Error types for mock substitution
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum MockError {
    #[error("Unknown target: {0}")]
    #[diagnostic(
        code(mockwrap::unknown_target),
        help("Register the target on the registry before invoking the wrapped callable. Targets are matched by their full dotted path, e.g. `pkg.mod.func`.")
    )]
    UnknownTarget(String),

    #[error("Substitution for `{0}` is already active")]
    #[diagnostic(
        code(mockwrap::substitution_busy),
        help("A wrapped callable must return before it is invoked again. Overlapping invocations of the same wrapper are not supported; build one wrapper per in-flight call.")
    )]
    SubstitutionBusy(String),

    #[error("Failed to load mock config: {0}")]
    #[diagnostic(
        code(mockwrap::config_error),
        help("Ensure the file exists and contains a JSON array of objects with `target` and `value` fields.")
    )]
    ConfigError(String),
}
