/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Div, Mul};
use std::sync::Arc;

use num_rational::Rational32;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use super::{BaseDimension, Composite, Dimension, SiPrefix, UnitError};

/// A physical unit: a positive scale factor relative to the
/// irreducible (SI base) units, plus a dimension.
///
/// `Unit` is a shared handle; cloning it is cheap and clones denote
/// the same unit. Units are never mutated after construction.
///
/// A unit is either irreducible (a base unit with scale 1), named
/// (defined from an expression of other units), or anonymous (an
/// intermediate result of unit algebra, never registered).
#[derive(Clone)]
pub struct Unit(Arc<UnitInner>);

struct UnitInner {
    names: Vec<String>,
    /// The first `short` names are short names (symbols).
    short: usize,
    scale: f64,
    dimension: Dimension,
    doc: Option<String>,
    kind: UnitKind,
}

enum UnitKind {
    Irreducible,
    Composite {
        factor: f64,
        bases: Composite<Unit>,
    },
}

/// Exported description of a unit, as enumerated from a registry
/// or namespace.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct UnitRecord {
    pub names: Vec<String>,
    pub scale: f64,
    pub dimension: Dimension,
    pub doc: Option<String>,
    pub represents: String,
}

impl Unit {
    /// A base unit, with scale 1 for its own dimension.
    pub(crate) fn irreducible(
        names: Vec<String>,
        short: usize,
        dimension: BaseDimension,
        doc: Option<String>,
    ) -> Self {
        Unit(Arc::new(UnitInner {
            names,
            short,
            scale: 1.0,
            dimension: Dimension::base(dimension),
            doc,
            kind: UnitKind::Irreducible,
        }))
    }

    /// Give a name to the unit expression `represents`.
    pub(crate) fn named(
        names: Vec<String>,
        short: usize,
        represents: &Unit,
        doc: Option<String>,
    ) -> Self {
        let (factor, bases) = represents.expression();
        Unit(Arc::new(UnitInner {
            names,
            short,
            scale: represents.scale(),
            dimension: represents.dimension(),
            doc,
            kind: UnitKind::Composite { factor, bases },
        }))
    }

    fn anonymous(
        factor: f64,
        bases: Composite<Unit>,
        scale: f64,
        dimension: Dimension,
    ) -> Self {
        Unit(Arc::new(UnitInner {
            names: Vec::new(),
            short: 0,
            scale,
            dimension,
            doc: None,
            kind: UnitKind::Composite { factor, bases },
        }))
    }

    /// A bare number, treated as a dimensionless unit of that scale.
    pub fn dimensionless(value: f64) -> Self {
        Self::anonymous(
            value,
            Composite::one(),
            value,
            Dimension::DIMENSIONLESS,
        )
    }

    pub fn names(&self) -> &[String] {
        &self.0.names
    }

    /// The canonical name, or `None` for anonymous units.
    pub fn name(&self) -> Option<&str> {
        self.0.names.first().map(String::as_str)
    }

    pub fn short_names(&self) -> &[String] {
        &self.0.names[..self.0.short]
    }

    pub fn long_names(&self) -> &[String] {
        &self.0.names[self.0.short..]
    }

    pub fn scale(&self) -> f64 {
        self.0.scale
    }

    pub fn dimension(&self) -> Dimension {
        self.0.dimension
    }

    pub fn doc(&self) -> Option<&str> {
        self.0.doc.as_deref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.0.names.is_empty()
    }

    pub fn is_irreducible(&self) -> bool {
        matches!(self.0.kind, UnitKind::Irreducible)
    }

    /// Handles to the very same unit allocation.
    pub fn ptr_eq(&self, other: &Unit) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// The expression this unit was defined from. Irreducible
    /// units represent themselves.
    pub fn represents(&self) -> (f64, Composite<Unit>) {
        match &self.0.kind {
            UnitKind::Irreducible => (1.0, Composite::simple(self.clone())),
            UnitKind::Composite { factor, bases } => (*factor, bases.clone()),
        }
    }

    /// Factor and bases to use when this unit appears in an
    /// expression: named units stay intact, anonymous ones are
    /// flattened into their parts.
    fn expression(&self) -> (f64, Composite<Unit>) {
        match self.is_anonymous() {
            true => self.represents(),
            false => (1.0, Composite::simple(self.clone())),
        }
    }

    /// Express this unit in irreducible units only.
    pub fn decompose(&self) -> Unit {
        Self::anonymous(
            self.scale(),
            self.irreducible_bases(),
            self.scale(),
            self.dimension(),
        )
    }

    fn irreducible_bases(&self) -> Composite<Unit> {
        match &self.0.kind {
            UnitKind::Irreducible => Composite::simple(self.clone()),
            UnitKind::Composite { bases, .. } => bases
                .iter()
                .fold(Composite::one(), |acc, (u, n)| {
                    acc * u.irreducible_bases().pow(*n)
                }),
        }
    }

    pub fn record(&self) -> UnitRecord {
        let (factor, bases) = self.represents();
        UnitRecord {
            names: self.0.names.clone(),
            scale: self.scale(),
            dimension: self.dimension(),
            doc: self.0.doc.clone(),
            represents: fmt_expression(factor, &bases),
        }
    }
}

/* Unit algebra. */

impl Unit {
    pub fn multiply(&self, rhs: &Unit) -> Unit {
        let (fl, bl) = self.expression();
        let (fr, br) = rhs.expression();
        Self::anonymous(
            fl * fr,
            bl * br,
            self.scale() * rhs.scale(),
            self.dimension() * rhs.dimension(),
        )
    }

    pub fn divide(&self, rhs: &Unit) -> Result<Unit, UnitError> {
        if rhs.scale() == 0.0 {
            return Err(UnitError::DivisionByZeroUnit(rhs.to_string()));
        }
        let (fl, bl) = self.expression();
        let (fr, br) = rhs.expression();
        Ok(Self::anonymous(
            fl / fr,
            bl * br.recip(),
            self.scale() / rhs.scale(),
            self.dimension() / rhs.dimension(),
        ))
    }

    pub fn powi(&self, n: i32) -> Result<Unit, UnitError> {
        self.pow(Rational32::from_integer(n))
    }

    /// Raise to a rational power. Negative powers of a zero-scale
    /// unit fail like division does.
    pub fn pow(&self, n: Rational32) -> Result<Unit, UnitError> {
        if n < Rational32::zero() && self.scale() == 0.0 {
            return Err(UnitError::DivisionByZeroUnit(self.to_string()));
        }
        Ok(self.raise(n))
    }

    pub fn sqrt(&self) -> Unit {
        self.raise(Rational32::new(1, 2))
    }

    fn raise(&self, n: Rational32) -> Unit {
        let (factor, bases) = self.expression();
        match n.is_integer() {
            true => {
                let i = n.to_integer();
                Self::anonymous(
                    factor.powi(i),
                    bases.pow(n),
                    self.scale().powi(i),
                    self.dimension().powi(i),
                )
            }
            false => {
                let p = *n.numer() as f64 / *n.denom() as f64;
                Self::anonymous(
                    factor.powf(p),
                    bases.pow(n),
                    self.scale().powf(p),
                    self.dimension().pow(n),
                )
            }
        }
    }
}

/* Conversion. */

impl Unit {
    pub fn is_equivalent(&self, other: &Unit) -> bool {
        self.dimension() == other.dimension()
    }

    /// Multiplicative factor converting values in this unit into
    /// values in `to`.
    pub fn conversion_factor(&self, to: &Unit) -> Result<f64, UnitError> {
        match self.is_equivalent(to) {
            true => Ok(self.scale() / to.scale()),
            false => Err(UnitError::IncompatibleDimensions {
                from: self.to_string(),
                to: to.to_string(),
                from_dimension: self.dimension(),
                to_dimension: to.dimension(),
            }),
        }
    }

    pub fn convert(&self, to: &Unit, val: f64) -> Result<f64, UnitError> {
        Ok(val * self.conversion_factor(to)?)
    }
}

/* Prefixed variants. */

impl Unit {
    /// Names for this unit carrying `prefix`: short names get the
    /// prefix symbol, long names the prefix name.
    pub(crate) fn prefixed_names(
        &self,
        prefix: SiPrefix,
    ) -> (Vec<String>, usize) {
        let names = self
            .short_names()
            .iter()
            .map(|n| format!("{}{}", prefix.symbol(), n))
            .chain(
                self.long_names()
                    .iter()
                    .map(|n| format!("{}{}", prefix.name(), n)),
            )
            .collect();
        (names, self.0.short)
    }
}

fn fmt_expression(factor: f64, bases: &Composite<Unit>) -> String {
    match (factor == 1.0, bases.is_one()) {
        (_, true) => factor.to_string(),
        (true, false) => bases.to_string(),
        (false, false) => format!("{} {}", factor, bases),
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self.name() {
            Some(name) => write!(f, "{}", name),
            None => {
                let (factor, bases) = self.represents();
                write!(f, "{}", fmt_expression(factor, &bases))
            }
        }
    }
}

impl Debug for Unit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.debug_struct("Unit")
            .field("names", &self.0.names)
            .field("scale", &self.0.scale)
            .field("dimension", &self.0.dimension)
            .finish()
    }
}

impl From<f64> for Unit {
    fn from(value: f64) -> Self {
        Unit::dimensionless(value)
    }
}

impl From<&Unit> for Unit {
    fn from(unit: &Unit) -> Self {
        unit.clone()
    }
}

/* Identity: the same allocation, or the same names, scale, dimension
and description. Scales are positive and finite, so comparing their
bits is exact. */

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Unit {}

impl PartialOrd for Unit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Unit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .names
            .cmp(&other.0.names)
            .then_with(|| self.0.scale.total_cmp(&other.0.scale))
            .then_with(|| self.0.dimension.cmp(&other.0.dimension))
            .then_with(|| self.0.doc.cmp(&other.0.doc))
    }
}

impl Hash for Unit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.names.hash(state);
        self.0.scale.to_bits().hash(state);
        self.0.dimension.hash(state);
        self.0.doc.hash(state);
    }
}

/* Operators. Multiplication is total; division fails on a
zero-scale divisor. */

macro_rules! impl_unit_ops {
    ($lhs:ty, $rhs:ty) => {
        impl Mul<$rhs> for $lhs {
            type Output = Unit;
            fn mul(self, rhs: $rhs) -> Unit {
                self.multiply(&rhs)
            }
        }

        impl Div<$rhs> for $lhs {
            type Output = Result<Unit, UnitError>;
            fn div(self, rhs: $rhs) -> Result<Unit, UnitError> {
                self.divide(&rhs)
            }
        }
    };
}

impl_unit_ops!(Unit, Unit);
impl_unit_ops!(Unit, &Unit);
impl_unit_ops!(&Unit, Unit);
impl_unit_ops!(&Unit, &Unit);

macro_rules! impl_scalar_ops {
    ($unit:ty) => {
        impl Mul<f64> for $unit {
            type Output = Unit;
            fn mul(self, rhs: f64) -> Unit {
                self.multiply(&Unit::dimensionless(rhs))
            }
        }

        impl Mul<$unit> for f64 {
            type Output = Unit;
            fn mul(self, rhs: $unit) -> Unit {
                Unit::dimensionless(self).multiply(&rhs)
            }
        }

        impl Div<f64> for $unit {
            type Output = Result<Unit, UnitError>;
            fn div(self, rhs: f64) -> Result<Unit, UnitError> {
                self.divide(&Unit::dimensionless(rhs))
            }
        }

        impl Div<$unit> for f64 {
            type Output = Result<Unit, UnitError>;
            fn div(self, rhs: $unit) -> Result<Unit, UnitError> {
                Unit::dimensionless(self).divide(&rhs)
            }
        }
    };
}

impl_scalar_ops!(Unit);
impl_scalar_ops!(&Unit);
