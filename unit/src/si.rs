/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! SI base and derived units.

use once_cell::sync::OnceCell;

use super::namespace::Namespace;
use super::registry::Registry;
use super::scope::{UnitNames, UnitScope};
use super::{BaseDimension, SiPrefix, Unit, UnitError};

pub const DOC: &str = "This package defines the SI units.";

/// The SI unit table.
///
/// Only the units other tables are built from get a typed handle;
/// everything (including all prefixed variants) is available through
/// [`namespace`](Self::namespace).
#[derive(Clone, Debug)]
pub struct Si {
    pub meter: Unit,
    pub centimeter: Unit,
    pub kilogram: Unit,
    pub gram: Unit,
    pub second: Unit,
    pub kelvin: Unit,
    pub liter: Unit,
    pub newton: Unit,
    pub joule: Unit,
    pub kilojoule: Unit,
    pub watt: Unit,
    namespace: Namespace,
}

static SI: OnceCell<Si> = OnceCell::new();

/// The SI table, defined once into the global registry.
pub fn si() -> Result<&'static Si, UnitError> {
    SI.get_or_try_init(|| Si::define(Registry::global()))
}

impl Si {
    pub fn define(registry: &Registry) -> Result<Self, UnitError> {
        let mut scope = UnitScope::new("si", registry);

        /* Base units. */

        let m = scope.def_irreducible_unit(
            &["m", "meter"],
            BaseDimension::Length,
            true,
            Some("meter: base unit of length in SI"),
        )?;
        scope.def_prefixes(&m, true, &[])?;

        let kg = scope.def_irreducible_unit(
            &["kg", "kilogram"],
            BaseDimension::Mass,
            true,
            Some("kilogram: base unit of mass in SI."),
        )?;
        let g = scope.def_unit(
            &["g", "gram"],
            1e-3 * &kg,
            true,
            Some("gram (1e-3 kg)"),
        )?;
        scope.def_prefixes(&g, true, &[SiPrefix::Kilo])?;

        let s = scope.def_irreducible_unit(
            &["s", "second"],
            BaseDimension::Time,
            true,
            Some("second: base unit of time in SI."),
        )?;
        scope.def_prefixes(&s, true, &[])?;

        let a = scope.def_irreducible_unit(
            &["A", "ampere", "amp"],
            BaseDimension::Current,
            true,
            Some("ampere: base unit of electric current in SI"),
        )?;
        scope.def_prefixes(&a, true, &[])?;

        let k = scope.def_irreducible_unit(
            &["K", "Kelvin"],
            BaseDimension::Temperature,
            true,
            Some("Kelvin: temperature with a null point at absolute zero."),
        )?;
        scope.def_prefixes(&k, true, &[])?;

        let mol = scope.def_irreducible_unit(
            &["mol", "mole"],
            BaseDimension::Amount,
            true,
            Some("mole: amount of a chemical substance in SI."),
        )?;
        scope.def_prefixes(&mol, true, &[])?;

        let cd = scope.def_irreducible_unit(
            &["cd", "candela"],
            BaseDimension::LuminousIntensity,
            true,
            Some("candela: base unit of luminous intensity in SI"),
        )?;
        scope.def_prefixes(&cd, true, &[])?;

        let rad = scope.def_irreducible_unit(
            &["rad", "radian"],
            BaseDimension::Angle,
            true,
            Some("radian: angular measurement of the ratio between the \
                  length of an arc and its radius"),
        )?;
        scope.def_prefixes(&rad, true, &[])?;

        /* Derived units. */

        let l = scope.def_unit(
            UnitNames::new(&["l", "L"], &["liter"]),
            1e-3 * m.powi(3)?,
            true,
            Some("liter: metric unit of volume"),
        )?;
        scope.def_prefixes(&l, true, &[])?;

        let n = scope.def_unit(
            &["N", "Newton", "newton"],
            (&kg * &m / s.powi(2)?)?,
            true,
            Some("Newton: force"),
        )?;
        scope.def_prefixes(&n, true, &[])?;

        let pa = scope.def_unit(
            &["Pa", "Pascal", "pascal"],
            (&n / m.powi(2)?)?,
            true,
            Some("Pascal: pressure"),
        )?;
        scope.def_prefixes(&pa, true, &[])?;

        let j = scope.def_unit(
            &["J", "Joule", "joule"],
            &n * &m,
            true,
            Some("Joule: energy"),
        )?;
        scope.def_prefixes(&j, true, &[])?;

        let w = scope.def_unit(
            &["W", "Watt", "watt"],
            (&j / &s)?,
            true,
            Some("Watt: power"),
        )?;
        scope.def_prefixes(&w, true, &[])?;

        let hz = scope.def_unit(
            &["Hz", "Hertz", "hertz"],
            (1.0 / &s)?,
            true,
            Some("Frequency"),
        )?;
        scope.def_prefixes(&hz, true, &[])?;

        let namespace = scope.finish();
        Ok(Si {
            centimeter: namespace.lookup("cm")?.clone(),
            kilojoule: namespace.lookup("kJ")?.clone(),
            meter: m,
            kilogram: kg,
            gram: g,
            second: s,
            kelvin: k,
            liter: l,
            newton: n,
            joule: j,
            watt: w,
            namespace,
        })
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn get(&self, name: &str) -> Option<&Unit> {
        self.namespace.get(name)
    }

    pub fn lookup(&self, name: &str) -> Result<&Unit, UnitError> {
        self.namespace.lookup(name)
    }

    /// Module description followed by a summary of all units.
    pub fn doc(&self) -> String {
        format!("{}\n\n{}", DOC, self.namespace.summary())
    }
}
