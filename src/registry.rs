use crate::{logging, MockError, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

/// Callable installed under a target name.
pub type TargetFn = Arc<dyn Fn(&[Value]) -> Result<Value> + Send + Sync>;

/// Named callable slots for the dependencies of a function under test.
///
/// Targets are identified by their full dotted path (e.g. `pkg.mod.func`).
/// The function under test calls its dependencies through the registry by
/// name instead of binding them directly, which is what makes them
/// substitutable. Clones share the same underlying slot table.
#[derive(Clone, Default)]
pub struct TargetRegistry {
    slots: Arc<Mutex<HashMap<String, TargetFn>>>,
}

impl TargetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a callable under a target name. Last registration wins.
    pub fn register<F>(&self, target: &str, f: F)
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        if let Ok(mut slots) = self.slots.lock() {
            slots.insert(target.to_string(), Arc::new(f));
        }
    }

    /// Invoke the current implementation of a target.
    ///
    /// The slot table lock is released before the invocation, so target
    /// implementations may call back into the registry.
    pub fn call(&self, target: &str, args: &[Value]) -> Result<Value> {
        let f = self
            .slots
            .lock()
            .ok()
            .and_then(|slots| slots.get(target).cloned())
            .ok_or_else(|| MockError::UnknownTarget(target.to_string()))?;
        f(args)
    }

    /// Check whether a target is registered.
    pub fn contains(&self, target: &str) -> bool {
        self.slots
            .lock()
            .ok()
            .map(|slots| slots.contains_key(target))
            .unwrap_or(false)
    }

    /// Get the number of registered targets.
    pub fn len(&self) -> usize {
        self.slots.lock().ok().map(|slots| slots.len()).unwrap_or(0)
    }

    /// Check if the registry has no targets.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Swap in a replacement for a registered target, returning the
    /// displaced implementation. Unregistered targets are an error; nothing
    /// is installed in that case.
    pub(crate) fn replace(&self, target: &str, f: TargetFn) -> Result<TargetFn> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| MockError::UnknownTarget(target.to_string()))?;
        match slots.get_mut(target) {
            Some(slot) => Ok(std::mem::replace(slot, f)),
            None => Err(MockError::UnknownTarget(target.to_string()).into()),
        }
    }

    /// Put a displaced implementation back. Best-effort: on failure the
    /// remaining slots must still be restorable, so this logs and returns
    /// instead of propagating.
    pub(crate) fn restore(&self, target: &str, original: TargetFn) {
        match self.slots.lock() {
            Ok(mut slots) => {
                slots.insert(target.to_string(), original);
                logging::log_substitution_restored(target);
            }
            Err(_) => logging::log_restore_failed(target),
        }
    }
}

impl fmt::Debug for TargetRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut targets: Vec<String> = self
            .slots
            .lock()
            .ok()
            .map(|slots| slots.keys().cloned().collect())
            .unwrap_or_default();
        targets.sort();
        f.debug_struct("TargetRegistry")
            .field("targets", &targets)
            .finish()
    }
}
