/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::HashMap;

use super::summary::generate_unit_summary;
use super::unit::UnitRecord;
use super::{Unit, UnitError};

/// An ordered, collision-checked set of name bindings.
///
/// Every name maps to exactly one unit; a unit may be bound under
/// any number of names. Units are kept in the order in which they
/// were first bound.
#[derive(Clone, Debug)]
pub struct Namespace {
    scope: String,
    units: Vec<Unit>,
    names: HashMap<String, Unit>,
    order: Vec<String>,
}

impl Namespace {
    pub fn new(scope: impl Into<String>) -> Self {
        Namespace {
            scope: scope.into(),
            units: Vec::new(),
            names: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Verify that `names` can be bound to `unit`: each name must
    /// be free or already bound to the same unit.
    pub fn check<S: AsRef<str>>(
        &self,
        names: &[S],
        unit: &Unit,
    ) -> Result<(), UnitError> {
        for name in names {
            let name = name.as_ref();
            if let Some(bound) = self.names.get(name) {
                if bound != unit {
                    log::warn!(
                        "{}: name {} is already bound to another unit",
                        self.scope,
                        name
                    );
                    return Err(UnitError::DuplicateUnitName {
                        name: name.to_string(),
                        scope: self.scope.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Bind the unit under all of its names. Nothing is bound if
    /// any of the names is taken by a different unit.
    pub fn bind(&mut self, unit: &Unit) -> Result<(), UnitError> {
        self.bind_as(unit.names(), unit)
    }

    /// Bind a unit that is already bound here under an additional
    /// name.
    pub fn alias(
        &mut self,
        name: &str,
        unit: &Unit,
    ) -> Result<(), UnitError> {
        if !self.units.iter().any(|u| u == unit) {
            return Err(UnitError::UnknownUnit(unit.to_string()));
        }
        self.bind_as::<&str>(&[name], unit)
    }

    fn bind_as<S: AsRef<str>>(
        &mut self,
        names: &[S],
        unit: &Unit,
    ) -> Result<(), UnitError> {
        self.check(names, unit)?;
        if !self.units.iter().any(|u| u == unit) {
            self.units.push(unit.clone());
        }
        for name in names {
            let name = name.as_ref();
            if !self.names.contains_key(name) {
                self.names.insert(name.to_string(), unit.clone());
                self.order.push(name.to_string());
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Unit> {
        self.names.get(name)
    }

    pub fn lookup(&self, name: &str) -> Result<&Unit, UnitError> {
        log::trace!("{}: looking up {}", self.scope, name);
        self.get(name)
            .ok_or_else(|| UnitError::UnknownUnit(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Number of distinct units (not names).
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Units in the order they were bound.
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// All bound names, including aliases, in binding order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    pub fn records(&self) -> Vec<UnitRecord> {
        self.units.iter().map(Unit::record).collect()
    }

    /// Units convertible to and from `unit`.
    pub fn equivalent_units(&self, unit: &Unit) -> Vec<&Unit> {
        self.units
            .iter()
            .filter(|u| u.is_equivalent(unit))
            .collect()
    }

    pub fn summary(&self) -> String {
        generate_unit_summary(&self.units)
    }
}
