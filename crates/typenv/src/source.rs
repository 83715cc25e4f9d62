//! Environment store seam
//!
//! Accessors never touch `std::env` directly; they go through [`Source`],
//! which is read freshly on every call. [`ProcessEnv`] is the live process
//! environment; the map implementations give tests a deterministic
//! environment without mutating process state.

use std::collections::{BTreeMap, HashMap};

/// A read-only store of named text values
pub trait Source {
    /// Look up a variable by name
    ///
    /// Returns the raw text if the variable is present. Implementations
    /// must not cache: every call observes the store as it currently is.
    fn get(&self, name: &str) -> Option<String>;
}

/// The live process environment, read via `std::env::var`
///
/// Values that are present but not valid Unicode are reported as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessEnv;

impl Source for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl Source for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

impl Source for BTreeMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        BTreeMap::get(self, name).cloned()
    }
}

impl<S: Source + ?Sized> Source for &S {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}
