/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};
use std::ops::{Div, Mul};

use num_rational::Rational32;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

/// Base physical dimensions. A unit's [`Dimension`] is a product of
/// these raised to (possibly fractional) powers.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum BaseDimension {
    Length,
    Mass,
    Time,
    Current,
    Temperature,
    Amount,
    LuminousIntensity,
    Angle,
}

pub const NDIMS: usize = 8;

const BASE_DIMENSIONS: [BaseDimension; NDIMS] = [
    BaseDimension::Length,
    BaseDimension::Mass,
    BaseDimension::Time,
    BaseDimension::Current,
    BaseDimension::Temperature,
    BaseDimension::Amount,
    BaseDimension::LuminousIntensity,
    BaseDimension::Angle,
];

impl BaseDimension {
    pub const LIST: &[Self] = &BASE_DIMENSIONS;

    pub const fn symbol(&self) -> &'static str {
        match self {
            BaseDimension::Length => "L",
            BaseDimension::Mass => "M",
            BaseDimension::Time => "T",
            BaseDimension::Current => "I",
            BaseDimension::Temperature => "Θ",
            BaseDimension::Amount => "N",
            BaseDimension::LuminousIntensity => "J",
            BaseDimension::Angle => "α",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            BaseDimension::Length => "length",
            BaseDimension::Mass => "mass",
            BaseDimension::Time => "time",
            BaseDimension::Current => "current",
            BaseDimension::Temperature => "temperature",
            BaseDimension::Amount => "amount",
            BaseDimension::LuminousIntensity => "luminous intensity",
            BaseDimension::Angle => "angle",
        }
    }

    const fn index(self) -> usize {
        match self {
            BaseDimension::Length => 0,
            BaseDimension::Mass => 1,
            BaseDimension::Time => 2,
            BaseDimension::Current => 3,
            BaseDimension::Temperature => 4,
            BaseDimension::Amount => 5,
            BaseDimension::LuminousIntensity => 6,
            BaseDimension::Angle => 7,
        }
    }
}

impl Display for BaseDimension {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.name())
    }
}

/// Exponents of the base dimensions. This is a unit's "type":
/// conversion is possible only between units of equal dimension.
///
/// Exponents are exact rationals, so `Dimension` equality never
/// involves a floating-point tolerance.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Dimension {
    #[cfg_attr(feature = "schemars", schemars(with = "[(i32, i32); 8]"))]
    exponents: [Rational32; NDIMS],
}

impl Dimension {
    pub const DIMENSIONLESS: Dimension = Dimension {
        exponents: [Rational32::new_raw(0, 1); NDIMS],
    };

    pub fn base(dim: BaseDimension) -> Self {
        let mut exponents = [Rational32::zero(); NDIMS];
        exponents[dim.index()] = Rational32::one();
        Dimension { exponents }
    }

    pub fn from_components<I>(components: I) -> Self
    where
        I: IntoIterator<Item = (BaseDimension, Rational32)>,
    {
        components.into_iter().fold(
            Self::DIMENSIONLESS,
            |mut d, (base, n)| {
                d.exponents[base.index()] += n;
                d
            },
        )
    }

    pub fn get(&self, dim: BaseDimension) -> Rational32 {
        self.exponents[dim.index()]
    }

    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(Zero::is_zero)
    }

    /// Non-zero exponents, in base dimension order.
    pub fn components(
        &self,
    ) -> impl Iterator<Item = (BaseDimension, Rational32)> + '_ {
        BaseDimension::LIST
            .iter()
            .copied()
            .zip(self.exponents.iter().copied())
            .filter(|(_, n)| !n.is_zero())
    }

    pub fn powi(self, n: i32) -> Dimension {
        self.pow(Rational32::from_integer(n))
    }

    pub fn pow(self, n: Rational32) -> Dimension {
        Dimension {
            exponents: self.exponents.map(|e| e * n),
        }
    }

    pub fn recip(self) -> Dimension {
        Dimension {
            exponents: self.exponents.map(|e| -e),
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}

impl From<BaseDimension> for Dimension {
    fn from(dim: BaseDimension) -> Self {
        Dimension::base(dim)
    }
}

/* Operations on dimensions, used for unit composition. */

impl Mul<Dimension> for Dimension {
    type Output = Dimension;
    fn mul(self, rhs: Dimension) -> Dimension {
        let mut exponents = self.exponents;
        exponents
            .iter_mut()
            .zip(rhs.exponents)
            .for_each(|(a, b)| *a += b);
        Dimension { exponents }
    }
}

impl Div<Dimension> for Dimension {
    type Output = Dimension;
    fn div(self, rhs: Dimension) -> Dimension {
        self * rhs.recip()
    }
}

fn fmt_power(dim: BaseDimension, n: Rational32) -> String {
    if n.is_one() {
        dim.to_string()
    } else if n.is_integer() {
        format!("{}^{}", dim, n)
    } else {
        format!("{}^({})", dim, n)
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let numerator = self
            .components()
            .filter(|(_, n)| n > &Rational32::zero())
            .map(|(d, n)| fmt_power(d, n))
            .collect::<Vec<_>>();
        let denominator = self
            .components()
            .filter(|(_, n)| n < &Rational32::zero())
            .map(|(d, n)| fmt_power(d, -n))
            .collect::<Vec<_>>();
        match numerator.is_empty() {
            true => write!(f, "1")?,
            false => write!(f, "{}", numerator.join(" "))?,
        }
        if !denominator.is_empty() {
            write!(f, " / {}", denominator.join(" "))?;
        }
        Ok(())
    }
}
