/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use lazy_static::lazy_static;

use super::namespace::Namespace;
use super::unit::UnitRecord;
use super::{Unit, UnitError};

lazy_static! {
    static ref GLOBAL: Registry = Registry::new();
}

/// Name to unit table.
///
/// Registration takes the write lock for the whole check-then-insert
/// sequence, so the no-duplicate guarantee holds with concurrent
/// writers. Once the unit tables are built the registry is only
/// read.
#[derive(Debug)]
pub struct Registry(RwLock<Namespace>);

impl Registry {
    pub fn new() -> Self {
        Registry(RwLock::new(Namespace::new("registry")))
    }

    /// The process-wide registry.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    fn read(&self) -> RwLockReadGuard<'_, Namespace> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Namespace> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a unit under all of its names. Either all names are
    /// registered, or none is.
    pub fn register(&self, unit: &Unit) -> Result<(), UnitError> {
        self.write().bind(unit)?;
        log::debug!("registered unit {} ({})", unit, unit.names().join(", "));
        Ok(())
    }

    /// Register an already registered unit under an additional name.
    /// Fails with [`UnitError::UnknownUnit`] for any other unit.
    pub fn alias(&self, name: &str, unit: &Unit) -> Result<(), UnitError> {
        self.write().alias(name, unit)?;
        log::debug!("registered alias {} for unit {}", name, unit);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Unit> {
        self.read().get(name).cloned()
    }

    pub fn lookup(&self, name: &str) -> Result<Unit, UnitError> {
        self.read().lookup(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read().contains(name)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Registered units, in registration order.
    pub fn units(&self) -> Vec<Unit> {
        self.read().units().to_vec()
    }

    pub fn records(&self) -> Vec<UnitRecord> {
        self.read().records()
    }

    /// Registered units convertible to and from `unit`.
    pub fn equivalent_units(&self, unit: &Unit) -> Vec<Unit> {
        self.read()
            .equivalent_units(unit)
            .into_iter()
            .cloned()
            .collect()
    }

    /// A copy of the current contents.
    pub fn snapshot(&self) -> Namespace {
        self.read().clone()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
