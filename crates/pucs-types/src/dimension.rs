// ─────────────────────────────────────────────────────────────────────
// PUCS Natural Units — Dimension
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Base dimensions and exact rational dimension vectors.
//!
//! A [`DimensionVector`] is a product of base dimensions raised to rational
//! powers, e.g. `kg m^2 s^-1` for Planck's constant or `kg m^-1/2 s^-2` for
//! a fracture toughness. Exponents are stored as `Rational32` so chained
//! products never accumulate rounding.

use num_rational::Rational32;
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Div, Mul};
use std::str::FromStr;

/// Exact exponent of a base dimension.
pub type Exponent = Rational32;

/// Base axis of measurement.
///
/// Frequency and atomic mass are deliberately redundant with time and mass:
/// some natural-unit conventions scale them independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BaseDimension {
    Time,
    Length,
    Mass,
    Temperature,
    Charge,
    Current,
    Amount,
    Angle,
    Frequency,
    AtomicMass,
    /// Any other identifier, e.g. a legacy unit kept for comparison.
    Custom(String),
}

impl BaseDimension {
    /// The ten built-in dimensions, in conventional preamble order.
    pub const STANDARD: [BaseDimension; 10] = [
        BaseDimension::Time,
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Temperature,
        BaseDimension::Charge,
        BaseDimension::Current,
        BaseDimension::Amount,
        BaseDimension::Angle,
        BaseDimension::Frequency,
        BaseDimension::AtomicMass,
    ];

    /// SI unit symbol of this dimension.
    pub fn symbol(&self) -> &str {
        match self {
            BaseDimension::Time => "s",
            BaseDimension::Length => "m",
            BaseDimension::Mass => "kg",
            BaseDimension::Temperature => "K",
            BaseDimension::Charge => "C",
            BaseDimension::Current => "A",
            BaseDimension::Amount => "mol",
            BaseDimension::Angle => "pi",
            BaseDimension::Frequency => "Hz",
            BaseDimension::AtomicMass => "amu",
            BaseDimension::Custom(s) => s,
        }
    }

    /// Look up a built-in dimension by its SI symbol.
    pub fn standard(symbol: &str) -> Option<Self> {
        Self::STANDARD.into_iter().find(|d| d.symbol() == symbol)
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, BaseDimension::Custom(_))
    }
}

impl FromStr for BaseDimension {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::standard(s).unwrap_or_else(|| BaseDimension::Custom(s.to_string())))
    }
}

impl From<String> for BaseDimension {
    fn from(s: String) -> Self {
        Self::standard(&s).unwrap_or(BaseDimension::Custom(s))
    }
}

impl From<BaseDimension> for String {
    fn from(d: BaseDimension) -> Self {
        match d {
            BaseDimension::Custom(s) => s,
            other => other.symbol().to_string(),
        }
    }
}

impl fmt::Display for BaseDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Render an exponent as `2`, `-1` or `-1/2`.
pub fn format_exponent(e: &Exponent) -> String {
    e.to_string()
}

/// Mapping base dimension → non-zero rational exponent.
///
/// Terms keep the order in which their dimension was first introduced, which
/// is the order used when rendering a dimensional formula. Equality ignores
/// that order.
#[derive(Debug, Clone, Default)]
pub struct DimensionVector {
    terms: Vec<(BaseDimension, Exponent)>,
}

impl DimensionVector {
    /// The dimensionless vector.
    pub fn dimensionless() -> Self {
        Self { terms: Vec::new() }
    }

    /// A single base dimension to the first power.
    pub fn of(dim: BaseDimension) -> Self {
        Self {
            terms: vec![(dim, Exponent::one())],
        }
    }

    /// Build from `(dimension, exponent)` pairs. Repeated dimensions are
    /// summed and zero exponents dropped.
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (BaseDimension, Exponent)>,
    {
        let mut v = Self::dimensionless();
        for (dim, exp) in terms {
            v.accumulate(dim, exp);
        }
        v
    }

    /// Convenience constructor for integer exponents keyed by symbol.
    pub fn from_integers(terms: &[(&str, i32)]) -> Self {
        Self::from_terms(terms.iter().map(|(sym, e)| {
            (
                BaseDimension::from((*sym).to_string()),
                Exponent::from_integer(*e),
            )
        }))
    }

    fn accumulate(&mut self, dim: BaseDimension, exp: Exponent) {
        let slot = self.terms.iter().position(|(d, _)| *d == dim);
        let sum = slot.map_or(exp, |pos| self.terms[pos].1 + exp);
        self.store(slot, dim, sum);
    }

    fn checked_accumulate(&mut self, dim: BaseDimension, exp: Exponent) -> Option<()> {
        let slot = self.terms.iter().position(|(d, _)| *d == dim);
        let sum = match slot {
            Some(pos) => self.terms[pos].1.checked_add(&exp)?,
            None => exp,
        };
        self.store(slot, dim, sum);
        Some(())
    }

    fn store(&mut self, slot: Option<usize>, dim: BaseDimension, exp: Exponent) {
        match slot {
            Some(pos) if exp.is_zero() => {
                self.terms.remove(pos);
            }
            Some(pos) => self.terms[pos].1 = exp,
            None if !exp.is_zero() => self.terms.push((dim, exp)),
            None => {}
        }
    }

    /// Exponent of `dim`; zero when absent.
    pub fn exponent(&self, dim: &BaseDimension) -> Exponent {
        self.terms
            .iter()
            .find(|(d, _)| d == dim)
            .map(|(_, e)| *e)
            .unwrap_or_else(Exponent::zero)
    }

    pub fn is_dimensionless(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of dimensions with a non-zero exponent.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BaseDimension, &Exponent)> {
        self.terms.iter().map(|(d, e)| (d, e))
    }

    pub fn dimensions(&self) -> impl Iterator<Item = &BaseDimension> {
        self.terms.iter().map(|(d, _)| d)
    }

    /// Dimensional multiplication: exponents add.
    ///
    /// Panics if an exponent overflows `i32`; use
    /// [`checked_combine`](Self::checked_combine) on untrusted input.
    pub fn combine(&self, other: &DimensionVector) -> DimensionVector {
        let mut out = self.clone();
        for (dim, exp) in &other.terms {
            out.accumulate(dim.clone(), *exp);
        }
        out
    }

    /// Dimensional inversion: every exponent is negated.
    pub fn invert(&self) -> DimensionVector {
        DimensionVector {
            terms: self.terms.iter().map(|(d, e)| (d.clone(), -*e)).collect(),
        }
    }

    /// Raise the whole vector to a rational power.
    pub fn pow(&self, k: Exponent) -> DimensionVector {
        if k.is_zero() {
            return Self::dimensionless();
        }
        DimensionVector {
            terms: self.terms.iter().map(|(d, e)| (d.clone(), *e * k)).collect(),
        }
    }

    /// `combine`, or `None` when an exponent overflows.
    pub fn checked_combine(&self, other: &DimensionVector) -> Option<DimensionVector> {
        let mut out = self.clone();
        for (dim, exp) in &other.terms {
            out.checked_accumulate(dim.clone(), *exp)?;
        }
        Some(out)
    }

    /// `invert`, or `None` when an exponent overflows.
    pub fn checked_invert(&self) -> Option<DimensionVector> {
        let terms = self
            .terms
            .iter()
            .map(|(d, e)| Some((d.clone(), Exponent::zero().checked_sub(e)?)))
            .collect::<Option<Vec<_>>>()?;
        Some(DimensionVector { terms })
    }

    /// `pow`, or `None` when an exponent overflows.
    pub fn checked_pow(&self, k: Exponent) -> Option<DimensionVector> {
        if k.is_zero() {
            return Some(Self::dimensionless());
        }
        let terms = self
            .terms
            .iter()
            .map(|(d, e)| Some((d.clone(), e.checked_mul(&k)?)))
            .collect::<Option<Vec<_>>>()?;
        Some(DimensionVector { terms })
    }
}

impl PartialEq for DimensionVector {
    fn eq(&self, other: &Self) -> bool {
        self.terms.len() == other.terms.len()
            && self.terms.iter().all(|(d, e)| other.exponent(d) == *e)
    }
}

impl Eq for DimensionVector {}

impl Mul for &DimensionVector {
    type Output = DimensionVector;

    fn mul(self, rhs: &DimensionVector) -> DimensionVector {
        self.combine(rhs)
    }
}

impl Div for &DimensionVector {
    type Output = DimensionVector;

    fn div(self, rhs: &DimensionVector) -> DimensionVector {
        self.combine(&rhs.invert())
    }
}

impl fmt::Display for DimensionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return f.write_str("1");
        }
        for (i, (dim, exp)) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if exp.is_one() {
                write!(f, "{dim}")?;
            } else {
                write!(f, "{dim}^{}", format_exponent(exp))?;
            }
        }
        Ok(())
    }
}
