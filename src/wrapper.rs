use crate::config::MockConfig;
use crate::logging;
use crate::registry::TargetRegistry;
use crate::substitution::{ReleaseStack, Substitution, SubstitutionSpec};
use crate::Result;
use serde_json::Value;

/// Temporarily substitutes registered targets with fixed-value stand-ins
/// while a wrapped callable runs, restoring the originals afterward.
///
/// The wrapper owns one [`Substitution`] per configured target, built eagerly
/// at construction and reused across invocations of the wrapped callable.
/// Invocations must be serial; an overlapping invocation fails with
/// [`MockError::SubstitutionBusy`](crate::MockError::SubstitutionBusy).
pub struct MockWrapper {
    registry: TargetRegistry,
    substitutions: Vec<Substitution>,
}

impl MockWrapper {
    /// Build one substitution per `(target, value)` pair.
    ///
    /// Pair order is activation order; an empty iterator wraps without
    /// substituting anything. Targets are not validated here; an
    /// unregistered target surfaces when the wrapped callable is invoked,
    /// not at construction.
    pub fn new<I>(registry: TargetRegistry, mappings: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let substitutions: Vec<Substitution> = mappings
            .into_iter()
            .map(|(target, value)| Substitution::new(SubstitutionSpec { target, value }))
            .collect();

        let targets: Vec<&str> = substitutions.iter().map(Substitution::target).collect();
        logging::log_wrapper_initialized(substitutions.len(), &targets);

        Self {
            registry,
            substitutions,
        }
    }

    /// Build from a parsed mock configuration.
    pub fn from_config(registry: TargetRegistry, config: MockConfig) -> Self {
        Self::new(
            registry,
            config
                .substitutions
                .into_iter()
                .map(|spec| (spec.target, spec.value)),
        )
    }

    /// The registry this wrapper substitutes into.
    pub fn registry(&self) -> &TargetRegistry {
        &self.registry
    }

    /// Number of configured substitutions.
    pub fn substitution_count(&self) -> usize {
        self.substitutions.len()
    }

    /// Wrap `f` so that every configured substitution is active for exactly
    /// the duration of the call.
    ///
    /// The returned closure forwards its argument to `f` unchanged and
    /// propagates `f`'s result unchanged. Substitutions are activated in
    /// construction order before `f` runs and released in reverse order on
    /// every exit path, including panics. If activating one substitution
    /// fails, the ones already active are released before the error is
    /// returned.
    pub fn wrap<'a, A, R, F>(&'a self, f: F) -> impl Fn(A) -> Result<R> + 'a
    where
        F: Fn(A) -> Result<R> + 'a,
    {
        move |args: A| {
            let mut stack = ReleaseStack::with_capacity(self.substitutions.len());
            for substitution in &self.substitutions {
                stack.push(substitution.activate(&self.registry)?);
            }
            f(args)
            // `stack` drops here, before the result reaches the caller.
        }
    }
}

/// Reserved marker for integer value wrapping; carries no state or behavior.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IntValueWrapper;

impl IntValueWrapper {
    /// Create the marker.
    pub fn new() -> Self {
        Self
    }
}
