/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Mul, Sub};

use super::error::UnitError;
use super::{Dimension, Unit};

/// A value expressed in some unit.
#[derive(PartialEq, Clone, Debug)]
pub struct Quantity(pub f64, pub Unit);

impl Quantity {
    pub fn new(val: f64, unit: Unit) -> Self {
        Quantity(val, unit)
    }

    pub fn from_unit(unit: Unit) -> Self {
        Quantity(1.0, unit)
    }

    pub fn from_value(value: f64) -> Self {
        Quantity(value, Unit::dimensionless(1.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn unit(&self) -> &Unit {
        &self.1
    }

    pub fn convert(&self, unit: &Unit) -> Result<Self, UnitError> {
        Ok(Quantity(self.1.convert(unit, self.0)?, unit.clone()))
    }

    /// The numeric value of this quantity in `unit`.
    pub fn to_value(&self, unit: &Unit) -> Result<f64, UnitError> {
        self.1.convert(unit, self.0)
    }

    /// Express the quantity in irreducible units.
    pub fn decompose(&self) -> Self {
        Quantity(self.0, self.1.decompose())
    }

    pub fn powi(&self, n: i32) -> Result<Self, UnitError> {
        Ok(Quantity(self.0.powi(n), self.1.powi(n)?))
    }

    /* Note: we cannot implement the trait, because it does not allow
    for error conditions. */
    pub fn partial_cmp(
        &self,
        rhs: &Self,
    ) -> Result<Option<Ordering>, UnitError> {
        Ok(self.0.partial_cmp(&rhs.to_value(&self.1)?))
    }

    pub fn dimension(&self) -> Dimension {
        self.1.dimension()
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self.1.is_anonymous() && self.1.dimension().is_dimensionless()
        {
            true => write!(f, "{}", self.0 * self.1.scale()),
            false => write!(f, "{} {}", self.0, self.1),
        }
    }
}

impl Add<Quantity> for Quantity {
    type Output = Result<Quantity, UnitError>;
    fn add(self, rhs: Quantity) -> Result<Quantity, UnitError> {
        Ok(Quantity(self.0 + rhs.to_value(&self.1)?, self.1))
    }
}

impl Sub<Quantity> for Quantity {
    type Output = Result<Quantity, UnitError>;
    fn sub(self, rhs: Quantity) -> Result<Quantity, UnitError> {
        Ok(Quantity(self.0 - rhs.to_value(&self.1)?, self.1))
    }
}

impl Mul<Quantity> for Quantity {
    type Output = Quantity;
    fn mul(self, rhs: Quantity) -> Quantity {
        Quantity(self.0 * rhs.0, self.1 * rhs.1)
    }
}

impl Div<Quantity> for Quantity {
    type Output = Result<Quantity, UnitError>;
    fn div(self, rhs: Quantity) -> Result<Quantity, UnitError> {
        Ok(Quantity(self.0 / rhs.0, (self.1 / rhs.1)?))
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;
    fn mul(self, rhs: f64) -> Quantity {
        Quantity(self.0 * rhs, self.1)
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;
    fn div(self, rhs: f64) -> Quantity {
        Quantity(self.0 / rhs, self.1)
    }
}
