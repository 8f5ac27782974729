// ─────────────────────────────────────────────────────────────────────
// PUCS Natural Units — Composite Units
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Unit formulas and derived (composite) SI units.
//!
//! Constants are often tabulated in derived units (`J s` for Planck's
//! constant). Before rescaling, every unit term is expanded into base
//! dimensions:
//!
//! 1. a symbol naming a standard base dimension stays as-is (so `C` and
//!    `Hz` are never expanded, even though they have SI definitions),
//! 2. a composite symbol is expanded recursively and raised to the term's
//!    power,
//! 3. anything else becomes a custom base dimension.

use num_traits::Zero;
use pucs_types::dimension::{BaseDimension, DimensionVector, Exponent};
use pucs_types::error::{PucsError, PucsResult};
use std::collections::HashMap;

/// One `symbol^exponent` factor of a unit formula.
pub type UnitTerm = (String, Exponent);

/// Parse a unit formula such as `"kg m^2 s^-1"`, `"J*s"` or
/// `"kg m^-1/2 s^-2"`.
///
/// Terms are separated by whitespace, `*` or `·`. Exponents may be integers,
/// `p/q` fractions or decimals. An empty formula (or `"1"`) is dimensionless.
pub fn parse_unit_formula(formula: &str) -> PucsResult<Vec<UnitTerm>> {
    let malformed = |reason: String| PucsError::MalformedUnitFormula {
        formula: formula.to_string(),
        reason,
    };

    let mut terms = Vec::new();
    for token in formula
        .split(|c: char| c.is_whitespace() || c == '*' || c == '·')
        .filter(|t| !t.is_empty())
    {
        if token == "1" {
            continue;
        }
        let (symbol, exponent) = match token.split_once('^') {
            Some((sym, exp)) => (sym, parse_exponent(exp).map_err(&malformed)?),
            None => (token, Exponent::from_integer(1)),
        };
        if symbol.is_empty() {
            return Err(malformed(format!("missing unit symbol in '{token}'")));
        }
        terms.push((symbol.to_string(), exponent));
    }
    Ok(terms)
}

fn parse_exponent(text: &str) -> Result<Exponent, String> {
    let text = text.trim_start_matches('(').trim_end_matches(')');
    if let Ok(r) = text.parse::<Exponent>() {
        return Ok(r);
    }
    let x: f64 = text
        .parse()
        .map_err(|_| format!("cannot parse exponent '{text}'"))?;
    Exponent::approximate_float(x).ok_or_else(|| format!("exponent '{text}' out of range"))
}

/// Table of derived units, each defined by a unit formula.
#[derive(Debug, Clone, Default)]
pub struct CompositeUnitTable {
    units: HashMap<String, Vec<UnitTerm>>,
}

impl CompositeUnitTable {
    /// Empty table: every non-base symbol becomes a custom dimension.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Named SI derived units.
    pub fn si_derived() -> Self {
        let mut table = Self::empty();
        let defs: [(&str, &str); 16] = [
            ("p", "kg m s^-1"),
            ("N", "kg m s^-2"),
            ("J", "kg m^2 s^-2"),
            ("W", "kg m^2 s^-3"),
            ("Pa", "kg m^-1 s^-2"),
            ("V", "kg m^2 s^-3 A^-1"),
            ("Ω", "kg m^2 s^-3 A^-2"),
            ("S", "kg^-1 m^-2 s^3 A^2"),
            ("F", "kg^-1 m^-2 s^4 A^2"),
            ("H", "kg m^2 s^-2 A^-2"),
            ("Wb", "kg m^2 s^-2 A^-1"),
            ("T", "kg s^-2 A^-1"),
            ("Bq", "s^-1"),
            ("Gy", "m^2 s^-2"),
            ("Sv", "m^2 s^-2"),
            ("kat", "mol s^-1"),
        ];
        for (symbol, formula) in defs {
            // Static definitions above always parse.
            if let Ok(terms) = parse_unit_formula(formula) {
                table.units.insert(symbol.to_string(), terms);
            }
        }
        table
    }

    /// Add or replace a composite unit.
    pub fn define(&mut self, symbol: impl Into<String>, terms: Vec<UnitTerm>) {
        let symbol = symbol.into();
        if BaseDimension::standard(&symbol).is_some() {
            tracing::warn!(
                unit = %symbol,
                "composite unit shadowed by base dimension of the same symbol"
            );
        }
        self.units.insert(symbol, terms);
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.units.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Expand a list of unit terms into a base-dimension vector.
    pub fn resolve(&self, terms: &[UnitTerm]) -> PucsResult<DimensionVector> {
        let mut stack = Vec::new();
        self.resolve_terms(terms, &mut stack)
    }

    /// Parse and expand a unit formula in one step.
    pub fn resolve_formula(&self, formula: &str) -> PucsResult<DimensionVector> {
        self.resolve(&parse_unit_formula(formula)?)
    }

    fn resolve_terms(
        &self,
        terms: &[UnitTerm],
        stack: &mut Vec<String>,
    ) -> PucsResult<DimensionVector> {
        let mut out = DimensionVector::dimensionless();
        for (symbol, exponent) in terms {
            if exponent.is_zero() {
                continue;
            }
            let part = self.resolve_symbol(symbol, stack)?;
            out = part
                .checked_pow(*exponent)
                .and_then(|raised| out.checked_combine(&raised))
                .ok_or_else(|| PucsError::MalformedUnitFormula {
                    formula: format!("{symbol}^{exponent}"),
                    reason: "exponent overflows i32".to_string(),
                })?;
        }
        Ok(out)
    }

    fn resolve_symbol(&self, symbol: &str, stack: &mut Vec<String>) -> PucsResult<DimensionVector> {
        if let Some(base) = BaseDimension::standard(symbol) {
            return Ok(DimensionVector::of(base));
        }
        let Some(terms) = self.units.get(symbol) else {
            return Ok(DimensionVector::of(BaseDimension::Custom(symbol.to_string())));
        };
        if stack.iter().any(|s| s == symbol) {
            let mut cycle = stack.clone();
            cycle.push(symbol.to_string());
            return Err(PucsError::CyclicCompositeUnit(cycle.join(" -> ")));
        }
        stack.push(symbol.to_string());
        let resolved = self.resolve_terms(terms, stack);
        stack.pop();
        resolved
    }
}
