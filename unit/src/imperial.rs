/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Colloquially used Imperial units.

use once_cell::sync::OnceCell;

use super::namespace::Namespace;
use super::registry::Registry;
use super::scope::UnitScope;
use super::si::{si, Si};
use super::{Unit, UnitError};

pub const DOC: &str = "This package defines colloquially used Imperial units.";

/// The imperial unit table.
#[derive(Clone, Debug)]
pub struct Imperial {
    /* Length. */
    pub inch: Unit,
    pub ft: Unit,
    pub yd: Unit,
    pub mi: Unit,

    /* Area. */
    pub ac: Unit,

    /* Volume. */
    pub gallon: Unit,
    pub quart: Unit,
    pub pint: Unit,
    pub cup: Unit,
    pub foz: Unit,
    pub tbsp: Unit,
    pub tsp: Unit,

    /* Mass. */
    pub oz: Unit,
    pub lb: Unit,
    pub ton: Unit,

    /* Energy. */
    pub btu: Unit,
    pub cal: Unit,
    pub kcal: Unit,

    /* Power. */
    pub hp: Unit,

    namespace: Namespace,
}

static IMPERIAL: OnceCell<Imperial> = OnceCell::new();

/// The imperial table, defined once into the global registry (after
/// the SI table it is built from).
pub fn imperial() -> Result<&'static Imperial, UnitError> {
    let si = si()?;
    IMPERIAL.get_or_try_init(|| Imperial::define(si, Registry::global()))
}

impl Imperial {
    pub fn define(si: &Si, registry: &Registry) -> Result<Self, UnitError> {
        let mut scope = UnitScope::new("imperial", registry);

        /* Length. */

        let inch = scope.def_unit(
            &["inch"],
            2.54 * &si.centimeter,
            true,
            Some("International inch"),
        )?;
        let ft = scope.def_unit(
            &["ft", "foot"],
            12.0 * &inch,
            true,
            Some("International foot"),
        )?;
        let yd = scope.def_unit(
            &["yd", "yard"],
            3.0 * &ft,
            true,
            Some("International yard"),
        )?;
        let mi = scope.def_unit(
            &["mi", "mile"],
            5280.0 * &ft,
            true,
            Some("International mile"),
        )?;

        /* Area. */

        let ac = scope.def_unit(
            &["ac", "acre"],
            43560.0 * ft.powi(2)?,
            true,
            Some("International acre"),
        )?;

        /* Volume. */

        let gallon = scope.def_unit(
            &["gallon"],
            (&si.liter / 0.264172052)?,
            true,
            Some("U.S. liquid gallon"),
        )?;
        let quart = scope.def_unit(
            &["quart"],
            (&gallon / 4.0)?,
            true,
            Some("U.S. liquid quart"),
        )?;
        let pint = scope.def_unit(
            &["pint"],
            (&quart / 2.0)?,
            true,
            Some("U.S. liquid pint"),
        )?;
        let cup = scope.def_unit(
            &["cup"],
            (&pint / 2.0)?,
            true,
            Some("U.S. customary cup"),
        )?;
        let foz = scope.def_unit(
            &["foz", "fluid_oz", "fluid_ounce"],
            (&cup / 8.0)?,
            true,
            Some("U.S. fluid ounce"),
        )?;
        let tbsp = scope.def_unit(
            &["tbsp", "tablespoon"],
            (&foz / 2.0)?,
            true,
            Some("U.S. customary tablespoon"),
        )?;
        let tsp = scope.def_unit(
            &["tsp", "teaspoon"],
            (&tbsp / 3.0)?,
            true,
            Some("U.S. customary teaspoon"),
        )?;

        /* Mass. The ounce is avoirdupois mass, not force. */

        let oz = scope.def_unit(
            &["oz", "ounce"],
            28.349523125 * &si.gram,
            true,
            Some("International avoirdupois ounce"),
        )?;
        let lb = scope.def_unit(
            &["lb", "pound"],
            16.0 * &oz,
            true,
            Some("International avoirdupois pound"),
        )?;
        let ton = scope.def_unit(
            &["ton"],
            2000.0 * &lb,
            true,
            Some("International avoirdupois ton"),
        )?;

        /* Energy. */

        let btu = scope.def_unit(
            &["BTU", "btu"],
            1.05505585 * &si.kilojoule,
            true,
            Some("British thermal unit"),
        )?;
        let cal = scope.def_unit(
            &["cal", "calorie"],
            4.184 * &si.joule,
            true,
            Some("Thermochemical calorie: pre-SI metric unit of energy"),
        )?;
        let kcal = scope.def_unit(
            &["kcal", "Cal", "Calorie", "kilocal", "kilocalorie"],
            1000.0 * &cal,
            true,
            Some("Calorie: colloquial definition of Calorie"),
        )?;

        /* Power. */

        let hp = scope.def_unit(
            &["hp", "horsepower"],
            (&si.watt / 0.00134102209)?,
            true,
            Some("Electrical horsepower"),
        )?;

        Ok(Imperial {
            inch,
            ft,
            yd,
            mi,
            ac,
            gallon,
            quart,
            pint,
            cup,
            foz,
            tbsp,
            tsp,
            oz,
            lb,
            ton,
            btu,
            cal,
            kcal,
            hp,
            namespace: scope.finish(),
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
