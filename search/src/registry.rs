//! Heuristic registry: explicit name → constructor table.
//!
//! Each domain builds its registry once at startup. Callers resolve
//! heuristics by name here; nothing is discovered at runtime.
//!
//! A registry may also list foreign names: heuristics that exist for some
//! other problem. Asking for one of those is a mismatch, not a typo, and
//! resolves to the null heuristic with a warning.

use tracing::warn;
use wayfind_kernel::{Heuristic, NullHeuristic, SearchProblem};

use crate::error::RegistryError;

/// Constructor for a boxed heuristic over `P`.
pub type HeuristicCtor<P> = fn() -> Box<dyn Heuristic<P>>;

/// Named heuristics available for problem type `P`.
///
/// Every registry starts with `"null"` registered, so the trivial heuristic
/// is always resolvable.
pub struct HeuristicRegistry<P: SearchProblem + ?Sized> {
    entries: Vec<(&'static str, HeuristicCtor<P>)>,
    foreign: Vec<&'static str>,
}

fn null_ctor<P: SearchProblem + ?Sized>() -> Box<dyn Heuristic<P>> {
    Box::new(NullHeuristic)
}

impl<P: SearchProblem + ?Sized> HeuristicRegistry<P> {
    /// A registry holding only `"null"`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: vec![("null", null_ctor::<P> as HeuristicCtor<P>)],
            foreign: Vec::new(),
        }
    }

    /// Register `ctor` under `name`, replacing any earlier entry.
    #[must_use]
    pub fn with(mut self, name: &'static str, ctor: HeuristicCtor<P>) -> Self {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = ctor,
            None => self.entries.push((name, ctor)),
        }
        self
    }

    /// Accept `names` as heuristics of other problems. Names already
    /// registered here keep their own constructor.
    #[must_use]
    pub fn with_foreign(mut self, names: &[&'static str]) -> Self {
        for &name in names {
            if !self.foreign.contains(&name) {
                self.foreign.push(name);
            }
        }
        self
    }

    /// Construct the heuristic registered under `name`.
    ///
    /// A foreign name yields [`NullHeuristic`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownHeuristic`] listing the registered
    /// names if `name` is neither registered nor foreign.
    pub fn resolve(&self, name: &str) -> Result<Box<dyn Heuristic<P>>, RegistryError> {
        if let Some((_, ctor)) = self.entries.iter().find(|(n, _)| *n == name) {
            return Ok(ctor());
        }
        if self.foreign.iter().any(|n| *n == name) {
            warn!(
                heuristic = name,
                available = %self.names().join(", "),
                "heuristic does not apply to this problem, using null"
            );
            return Ok(null_ctor::<P>());
        }
        Err(RegistryError::UnknownHeuristic {
            name: name.to_string(),
            available: self.names().join(", "),
        })
    }

    /// Registered names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(n, _)| *n).collect()
    }
}

impl<P: SearchProblem + ?Sized> Default for HeuristicRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: SearchProblem + ?Sized> std::fmt::Debug for HeuristicRegistry<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeuristicRegistry")
            .field("names", &self.names())
            .field("foreign", &self.foreign)
            .finish()
    }
}
