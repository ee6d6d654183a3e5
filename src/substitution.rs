use crate::registry::{TargetFn, TargetRegistry};
use crate::{logging, MockError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// One target bound to the fixed value its stand-in returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubstitutionSpec {
    /// Full dotted path of the target to replace
    pub target: String,
    /// Value the stand-in returns for every call
    pub value: Value,
}

/// Build a stand-in that accepts any arguments and always returns `value`.
pub fn fixed(value: Value) -> TargetFn {
    Arc::new(move |_args: &[Value]| Ok(value.clone()))
}

/// A reusable handle for "this target is currently replaced by a stand-in".
///
/// Built once per spec at wrapper construction and reused across invocations
/// of the wrapped callable. Entry and exit are serial: activating a
/// substitution that is already active is an error, not a nested scope.
pub struct Substitution {
    spec: SubstitutionSpec,
    stand_in: TargetFn,
    active: AtomicBool,
}

impl Substitution {
    /// Eagerly build the stand-in for a spec. No substitution is installed
    /// until [`Substitution::activate`].
    pub fn new(spec: SubstitutionSpec) -> Self {
        let stand_in = fixed(spec.value.clone());
        Self {
            spec,
            stand_in,
            active: AtomicBool::new(false),
        }
    }

    /// The dotted path this substitution replaces.
    pub fn target(&self) -> &str {
        &self.spec.target
    }

    /// Whether the stand-in is currently installed.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Install the stand-in into `registry`, returning a guard that restores
    /// the displaced implementation when dropped. Fails without side effects
    /// if the target is not registered or the substitution is already active.
    pub fn activate(&self, registry: &TargetRegistry) -> Result<RestoreGuard<'_>> {
        if self.active.swap(true, Ordering::SeqCst) {
            return Err(MockError::SubstitutionBusy(self.spec.target.clone()).into());
        }
        match registry.replace(&self.spec.target, self.stand_in.clone()) {
            Ok(original) => {
                logging::log_substitution_activated(&self.spec.target);
                Ok(RestoreGuard {
                    substitution: self,
                    registry: registry.clone(),
                    original: Some(original),
                })
            }
            Err(e) => {
                self.active.store(false, Ordering::SeqCst);
                Err(e)
            }
        }
    }
}

impl fmt::Debug for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Substitution")
            .field("target", &self.spec.target)
            .field("value", &self.spec.value)
            .field("active", &self.is_active())
            .finish()
    }
}

/// Restores the displaced implementation on drop and marks the substitution
/// inactive again.
pub struct RestoreGuard<'a> {
    substitution: &'a Substitution,
    registry: TargetRegistry,
    original: Option<TargetFn>,
}

impl RestoreGuard<'_> {
    /// The dotted path this guard will restore.
    pub fn target(&self) -> &str {
        self.substitution.target()
    }
}

impl Drop for RestoreGuard<'_> {
    fn drop(&mut self) {
        if let Some(original) = self.original.take() {
            self.registry.restore(self.substitution.target(), original);
        }
        self.substitution.active.store(false, Ordering::SeqCst);
    }
}

impl fmt::Debug for RestoreGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestoreGuard")
            .field("target", &self.substitution.target())
            .finish()
    }
}

/// Scoped-release stack for activation guards.
///
/// Guards pushed during activation are dropped strictly in reverse entry
/// order when the stack goes out of scope, on every exit path.
#[derive(Debug, Default)]
pub struct ReleaseStack<'a> {
    guards: Vec<RestoreGuard<'a>>,
}

impl<'a> ReleaseStack<'a> {
    /// Create a stack sized for `capacity` guards.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            guards: Vec::with_capacity(capacity),
        }
    }

    /// Take ownership of a guard; it is released when the stack drops.
    pub fn push(&mut self, guard: RestoreGuard<'a>) {
        self.guards.push(guard);
    }

    /// Number of guards currently held.
    pub fn len(&self) -> usize {
        self.guards.len()
    }

    /// Check if the stack holds no guards.
    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }
}

impl Drop for ReleaseStack<'_> {
    fn drop(&mut self) {
        // Vec drops front to back; release must run back to front.
        while let Some(guard) = self.guards.pop() {
            drop(guard);
        }
    }
}
