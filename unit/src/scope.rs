/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::HashSet;

use super::namespace::Namespace;
use super::registry::Registry;
use super::{BaseDimension, SiPrefix, Unit, UnitError};

/// Names for a unit definition: short names (symbols) first, then
/// long names. The first name is the canonical one.
///
/// A plain list of names makes the first one the only short name.
#[derive(Clone, Debug)]
pub struct UnitNames {
    short: Vec<String>,
    long: Vec<String>,
}

impl UnitNames {
    pub fn new(short: &[&str], long: &[&str]) -> Self {
        UnitNames {
            short: short.iter().map(|s| s.to_string()).collect(),
            long: long.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn validate(self) -> Result<(Vec<String>, usize), UnitError> {
        let short = self.short.len();
        let names =
            self.short.into_iter().chain(self.long).collect::<Vec<_>>();
        if names.is_empty() {
            return Err(UnitError::InvalidNames(
                "a unit definition needs at least one name".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for name in &names {
            if name.is_empty() || name.chars().any(char::is_whitespace) {
                return Err(UnitError::InvalidNames(format!(
                    "invalid unit name {:?}",
                    name
                )));
            }
            if !seen.insert(name.as_str()) {
                return Err(UnitError::InvalidNames(format!(
                    "name {} listed twice",
                    name
                )));
            }
        }
        Ok((names, short))
    }
}

impl From<&[&str]> for UnitNames {
    fn from(names: &[&str]) -> Self {
        match names.split_first() {
            Some((first, rest)) => UnitNames::new(&[*first], rest),
            None => UnitNames::new(&[], &[]),
        }
    }
}

impl<const N: usize> From<&[&str; N]> for UnitNames {
    fn from(names: &[&str; N]) -> Self {
        UnitNames::from(&names[..])
    }
}

/// A sequence of unit definitions.
///
/// Every defined unit is bound into the scope's own [`Namespace`]
/// and, if requested, registered in a [`Registry`]. Definitions
/// refer to earlier units through the returned handles.
/// [`finish`](Self::finish) ends the sequence and leaves only the
/// namespace.
pub struct UnitScope<'r> {
    namespace: Namespace,
    registry: &'r Registry,
}

impl<'r> UnitScope<'r> {
    pub fn new(scope: impl Into<String>, registry: &'r Registry) -> Self {
        UnitScope {
            namespace: Namespace::new(scope),
            registry,
        }
    }

    /// Define a unit named `names` equal to `represents` (a number,
    /// a unit or a unit expression).
    pub fn def_unit(
        &mut self,
        names: impl Into<UnitNames>,
        represents: impl Into<Unit>,
        register: bool,
        doc: Option<&str>,
    ) -> Result<Unit, UnitError> {
        let names: UnitNames = names.into();
        let (names, short) = names.validate()?;
        let represents: Unit = represents.into();
        let scale = represents.scale();
        if !scale.is_finite() || scale <= 0.0 {
            return Err(UnitError::InvalidScale { scale });
        }
        let unit =
            Unit::named(names, short, &represents, doc.map(String::from));
        self.commit(unit, register)
    }

    /// Define a base unit with scale 1 for `dimension`.
    pub fn def_irreducible_unit(
        &mut self,
        names: impl Into<UnitNames>,
        dimension: BaseDimension,
        register: bool,
        doc: Option<&str>,
    ) -> Result<Unit, UnitError> {
        let names: UnitNames = names.into();
        let (names, short) = names.validate()?;
        let unit = Unit::irreducible(
            names,
            short,
            dimension,
            doc.map(String::from),
        );
        self.commit(unit, register)
    }

    /// Define the SI-prefixed variants of `unit`, except for the
    /// prefixes in `exclude`.
    pub fn def_prefixes(
        &mut self,
        unit: &Unit,
        register: bool,
        exclude: &[SiPrefix],
    ) -> Result<Vec<Unit>, UnitError> {
        SiPrefix::LIST
            .iter()
            .filter(|prefix| !exclude.contains(prefix))
            .map(|prefix| {
                let (names, short) = unit.prefixed_names(*prefix);
                let represents = prefix.multiplier() * unit;
                let prefixed = Unit::named(names, short, &represents, None);
                self.commit(prefixed, register)
            })
            .collect()
    }

    fn commit(
        &mut self,
        unit: Unit,
        register: bool,
    ) -> Result<Unit, UnitError> {
        self.namespace.check(unit.names(), &unit)?;
        if register {
            self.registry.register(&unit)?;
        }
        self.namespace.bind(&unit)?;
        log::debug!(
            "{}: defined {} = {}",
            self.namespace.scope(),
            unit,
            unit.record().represents
        );
        Ok(unit)
    }

    pub fn get(&self, name: &str) -> Option<&Unit> {
        self.namespace.get(name)
    }

    pub fn lookup(&self, name: &str) -> Result<&Unit, UnitError> {
        self.namespace.lookup(name)
    }

    pub fn finish(self) -> Namespace {
        self.namespace
    }
}
