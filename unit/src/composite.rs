/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::iter::once;
use std::ops::Mul;

use num_rational::Rational32;
use num_traits::{One, Zero};

/// Formal product of keys raised to rational powers.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct Composite<T: Ord>(BTreeMap<T, Rational32>);

impl<T: Ord> Composite<T> {
    pub fn one() -> Self {
        Composite(BTreeMap::new())
    }

    pub fn simple(val: T) -> Self {
        Composite::from_powers(once((val, Rational32::one())))
    }

    /// Build a composite, summing the powers of repeated keys and
    /// dropping keys whose power cancels out.
    pub fn from_powers<S>(vals: S) -> Self
    where
        S: IntoIterator<Item = (T, Rational32)>,
    {
        let mut map = BTreeMap::new();
        for (k, n) in vals {
            *map.entry(k).or_insert_with(Rational32::zero) += n;
        }
        map.retain(|_, n| !n.is_zero());
        Composite(map)
    }

    pub fn is_one(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &BTreeMap<T, Rational32> {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, &Rational32)> {
        self.0.iter()
    }

    pub fn pow(self, n: Rational32) -> Self {
        Composite::from_powers(self.0.into_iter().map(|(k, p)| (k, p * n)))
    }

    pub fn recip(self) -> Self {
        self.pow(-Rational32::one())
    }
}

impl<T: Ord> IntoIterator for Composite<T> {
    type Item = (T, Rational32);
    type IntoIter = std::collections::btree_map::IntoIter<T, Rational32>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<T: Ord> Mul<Composite<T>> for Composite<T> {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Composite::from_powers(self.0.into_iter().chain(other.0))
    }
}

impl<T: Display + Ord> Display for Composite<T> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let positive = self
            .0
            .iter()
            .filter(|(_, p)| **p > Rational32::zero())
            .map(|(u, p)| format!("{}{}", u, superscript(*p)))
            .collect::<Vec<_>>();
        let negative = self
            .0
            .iter()
            .filter(|(_, p)| **p < Rational32::zero())
            .map(|(u, p)| format!("{}{}", u, superscript(-*p)))
            .collect::<Vec<_>>();
        match positive.is_empty() {
            true if !negative.is_empty() => write!(f, "1")?,
            _ => write!(f, "{}", positive.join("\u{22c5}"))?,
        }
        if !negative.is_empty() {
            write!(f, "/{}", negative.join("\u{22c5}"))?;
        }
        Ok(())
    }
}

static SS: [char; 10] = [
    '\u{2070}', '\u{00b9}', '\u{00b2}', '\u{00b3}', '\u{2074}', '\u{2075}',
    '\u{2076}', '\u{2077}', '\u{2078}', '\u{2079}',
];

fn superscript(val: Rational32) -> String {
    if val.is_one() {
        String::new()
    } else if val.is_integer() {
        val.to_string()
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(n) => SS[n as usize],
                None if c == '-' => '\u{207b}',
                None => c,
            })
            .collect()
    } else {
        format!("^({})", val)
    }
}
