//! Alias registries for constructing helpers by short name.

use std::collections::HashMap;

use super::Helper;
use super::HelperFactory;
use crate::control::Control;
use crate::error::HelperError;
use crate::table::Table;

/// Constructor stored in a [`HelperRegistry`].
pub type HelperCtor = fn(String) -> Box<dyn Helper>;

/// Registry of helper constructors.
pub type HelperRegistry = AliasRegistry<HelperCtor>;

/// Maps short aliases to constructors for one helper family.
///
/// Each family (helpers, columns) owns its own registry. Registries are
/// plain values: build one at start-up and pass it to whatever constructs
/// helpers by name. Registration needs `&mut self`; a host sharing a registry
/// across threads wraps it in its own lock.
///
/// # Example
///
/// ```
/// use kendo_lib::helper::{Helper, HelperRegistry};
///
/// let registry = HelperRegistry::builtin();
/// let grid = registry.create("grid", "orders")?;
/// assert_eq!(grid.id(), "orders");
/// assert!(registry.create("chart", "sales").is_err());
/// # Ok::<(), kendo_lib::error::HelperError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AliasRegistry<C> {
    family: &'static str,
    entries: HashMap<String, C>,
}

impl<C: Copy> AliasRegistry<C> {
    /// Creates an empty registry for the named family.
    pub fn new(family: &'static str) -> Self {
        Self {
            family,
            entries: HashMap::new(),
        }
    }

    /// Returns the family name used in error messages.
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// Registers a constructor under an alias.
    ///
    /// Returns the constructor previously registered under the alias, if any.
    pub fn register(&mut self, alias: impl Into<String>, ctor: C) -> Option<C> {
        let alias = alias.into();
        let previous = self.entries.insert(alias.clone(), ctor);
        if previous.is_some() {
            log::warn!("{} alias '{}' reassigned", self.family, alias);
        } else {
            log::debug!("{} alias '{}' registered", self.family, alias);
        }
        previous
    }

    /// Registers a constructor and returns the registry.
    pub fn with(mut self, alias: impl Into<String>, ctor: C) -> Self {
        self.register(alias, ctor);
        self
    }

    /// Resolves an alias to its constructor.
    pub fn resolve(&self, alias: &str) -> Result<C, HelperError> {
        self.entries
            .get(alias)
            .copied()
            .ok_or_else(|| HelperError::unknown_alias(self.family, alias))
    }

    /// Returns `true` if the alias is registered.
    pub fn contains(&self, alias: &str) -> bool {
        self.entries.contains_key(alias)
    }

    /// Returns the registered aliases, sorted.
    pub fn aliases(&self) -> Vec<&str> {
        let mut aliases: Vec<_> = self.entries.keys().map(String::as_str).collect();
        aliases.sort_unstable();
        aliases
    }
}

/// Boxes a newly created helper of type `T`. Coerces to [`HelperCtor`].
pub fn construct<T: HelperFactory + 'static>(id: String) -> Box<dyn Helper> {
    Box::new(T::create(id))
}

fn input_control(id: String) -> Box<dyn Helper> {
    Box::new(Control::input(id))
}

fn select_control(id: String) -> Box<dyn Helper> {
    Box::new(Control::select(id))
}

fn div_control(id: String) -> Box<dyn Helper> {
    Box::new(Control::div(id))
}

impl AliasRegistry<HelperCtor> {
    /// Creates a registry with the helpers shipped in this crate:
    ///
    /// | Alias | Helper |
    /// |-------|--------|
    /// | `grid` | [`Table`] |
    /// | `input` | [`Control::input`] |
    /// | `select` | [`Control::select`] |
    /// | `div` | [`Control::div`] |
    pub fn builtin() -> Self {
        Self::new("helper")
            .with("grid", construct::<Table>)
            .with("input", input_control)
            .with("select", select_control)
            .with("div", div_control)
    }

    /// Creates the helper registered under `alias` for the element `id`.
    pub fn create(&self, alias: &str, id: impl Into<String>) -> Result<Box<dyn Helper>, HelperError> {
        let ctor = self.resolve(alias)?;
        Ok(ctor(id.into()))
    }
}
