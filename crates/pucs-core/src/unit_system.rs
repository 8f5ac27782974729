// ─────────────────────────────────────────────────────────────────────
// PUCS Natural Units — Unit System Definition
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Per-dimension scale factors of a target unit system.
//!
//! A scale factor is the SI magnitude of one natural unit of that
//! dimension: with `m -> 2.99792458e8`, one natural length unit is one
//! light-second. A constant is converted by dividing its SI value by
//! `Π factor^exponent`.
//!
//! Factors are either given literally or solved from a defining constant
//! that must come out as exactly 1:
//!
//! ```text
//! factor(d) = (si_value / Π_{d' != d} factor(d')^e(d'))^(1 / e(d))
//! ```

use crate::registry::ConstantRegistry;
use num_traits::Zero;
use pucs_types::config::UnitSystemConfig;
use pucs_types::constants::AMU_KG;
use pucs_types::dimension::{BaseDimension, Exponent};
use pucs_types::error::{PucsError, PucsResult};

/// Scale of one base dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleEntry {
    /// SI magnitude of one natural unit. Zero is allowed as long as no
    /// constant divides by it.
    pub factor: f64,
    /// Symbol the dimension is rendered as in natural units (`m_n`).
    pub natural_symbol: String,
}

/// Immutable set of scale factors, in definition order.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitSystemDefinition {
    name: String,
    entries: Vec<(BaseDimension, ScaleEntry)>,
}

impl UnitSystemDefinition {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[(BaseDimension, ScaleEntry)] {
        &self.entries
    }

    pub fn get(&self, dim: &BaseDimension) -> Option<&ScaleEntry> {
        self.entries.iter().find(|(d, _)| d == dim).map(|(_, e)| e)
    }

    pub fn contains(&self, dim: &BaseDimension) -> bool {
        self.get(dim).is_some()
    }

    /// Scale factor of `dim`, or `UndefinedDimension`.
    pub fn scale_factor(&self, dim: &BaseDimension) -> PucsResult<f64> {
        self.get(dim)
            .map(|e| e.factor)
            .ok_or_else(|| self.undefined(dim, None))
    }

    /// Natural-unit symbol of `dim`; the SI symbol when undefined.
    pub fn natural_symbol<'a>(&'a self, dim: &'a BaseDimension) -> &'a str {
        self.get(dim)
            .map(|e| e.natural_symbol.as_str())
            .unwrap_or_else(|| dim.symbol())
    }

    pub(crate) fn undefined(&self, dim: &BaseDimension, constant: Option<&str>) -> PucsError {
        PucsError::UndefinedDimension {
            system: self.name.clone(),
            dimension: dim.to_string(),
            constant: constant.map(str::to_string),
        }
    }

    /// Build from a JSON unit-system description, resolving `defined_by`
    /// entries against `registry`.
    pub fn from_config(config: &UnitSystemConfig, registry: &ConstantRegistry) -> PucsResult<Self> {
        let mut builder = UnitSystemBuilder::new(config.name.as_str()).suffix(config.suffix.as_str());
        for entry in &config.scales {
            let dim = BaseDimension::from(entry.dimension.clone());
            builder = match (entry.factor, entry.defined_by.as_deref()) {
                (Some(factor), None) => builder.push(Step::Literal { dim, factor }, &entry.natural_symbol),
                (None, Some(id)) => builder.push(
                    Step::Defined {
                        dim,
                        constant: id.to_string(),
                    },
                    &entry.natural_symbol,
                ),
                (factor, defined_by) => {
                    return Err(PucsError::DefiningConstant {
                        constant: defined_by.unwrap_or_default().to_string(),
                        dimension: entry.dimension.clone(),
                        reason: format!(
                            "scale entry needs exactly one of factor / defined_by (factor: {factor:?})"
                        ),
                    })
                }
            };
        }
        if config.frequency_from_time {
            builder = builder.frequency_from_time();
        }
        if config.atomic_mass_from_mass {
            builder = builder.atomic_mass_from_mass();
        }
        builder.build(registry)
    }
}

#[derive(Debug, Clone)]
enum Step {
    Literal { dim: BaseDimension, factor: f64 },
    Defined { dim: BaseDimension, constant: String },
    FrequencyFromTime,
    AtomicMassFromMass,
}

/// Step-by-step construction of a [`UnitSystemDefinition`].
///
/// Steps run in the order they were added, so a defining constant can only
/// use dimensions fixed by earlier steps. Re-defining a dimension replaces
/// its factor but keeps its original position.
#[derive(Debug, Clone)]
pub struct UnitSystemBuilder {
    name: String,
    suffix: String,
    steps: Vec<(Step, Option<String>)>,
}

impl UnitSystemBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        UnitSystemBuilder {
            name: name.into(),
            suffix: String::new(),
            steps: Vec::new(),
        }
    }

    /// Suffix appended to SI symbols for default natural symbols.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn scale(self, dim: BaseDimension, factor: f64) -> Self {
        self.push(Step::Literal { dim, factor }, &None)
    }

    pub fn scale_as(self, dim: BaseDimension, factor: f64, symbol: impl Into<String>) -> Self {
        self.push(Step::Literal { dim, factor }, &Some(symbol.into()))
    }

    /// Fix `dim` so that the constant `id` evaluates to exactly 1.
    pub fn defined_by(self, dim: BaseDimension, id: impl Into<String>) -> Self {
        self.push(
            Step::Defined {
                dim,
                constant: id.into(),
            },
            &None,
        )
    }

    pub fn defined_by_as(
        self,
        dim: BaseDimension,
        id: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Self {
        self.push(
            Step::Defined {
                dim,
                constant: id.into(),
            },
            &Some(symbol.into()),
        )
    }

    /// `Hz` scale = 1 / `s` scale.
    pub fn frequency_from_time(self) -> Self {
        self.push(Step::FrequencyFromTime, &None)
    }

    /// `amu` scale = `kg` scale / atomic mass unit, rendered with the mass
    /// symbol.
    pub fn atomic_mass_from_mass(self) -> Self {
        self.push(Step::AtomicMassFromMass, &None)
    }

    fn push(mut self, step: Step, symbol: &Option<String>) -> Self {
        self.steps.push((step, symbol.clone()));
        self
    }

    pub fn build(&self, registry: &ConstantRegistry) -> PucsResult<UnitSystemDefinition> {
        let mut system = UnitSystemDefinition {
            name: self.name.clone(),
            entries: Vec::new(),
        };
        for (step, symbol) in &self.steps {
            let (dim, factor, default_symbol) = match step {
                Step::Literal { dim, factor } => (dim.clone(), *factor, None),
                Step::Defined { dim, constant } => {
                    let factor = solve_defining(&system, registry, dim, constant)?;
                    tracing::debug!(
                        system = %self.name,
                        dimension = %dim,
                        constant = %constant,
                        factor,
                        "resolved scale from defining constant"
                    );
                    (dim.clone(), factor, None)
                }
                Step::FrequencyFromTime => {
                    let time = system.scale_factor(&BaseDimension::Time)?;
                    (BaseDimension::Frequency, 1.0 / time, None)
                }
                Step::AtomicMassFromMass => {
                    let mass = system.scale_factor(&BaseDimension::Mass)?;
                    let symbol = system.natural_symbol(&BaseDimension::Mass).to_string();
                    (BaseDimension::AtomicMass, mass / AMU_KG, Some(symbol))
                }
            };
            if !factor.is_finite() || factor < 0.0 {
                return Err(PucsError::InvalidScaleFactor {
                    dimension: dim.to_string(),
                    factor,
                });
            }
            let natural_symbol = symbol
                .clone()
                .or(default_symbol)
                .unwrap_or_else(|| format!("{}{}", dim.symbol(), self.suffix));
            let entry = ScaleEntry {
                factor,
                natural_symbol,
            };
            match system.entries.iter_mut().find(|(d, _)| *d == dim) {
                Some((_, existing)) => *existing = entry,
                None => system.entries.push((dim, entry)),
            }
        }
        Ok(system)
    }
}

fn solve_defining(
    system: &UnitSystemDefinition,
    registry: &ConstantRegistry,
    dim: &BaseDimension,
    id: &str,
) -> PucsResult<f64> {
    let fail = |reason: String| PucsError::DefiningConstant {
        constant: id.to_string(),
        dimension: dim.to_string(),
        reason,
    };
    let constant = registry.require(id)?;
    let own = constant.dimensions().exponent(dim);
    if own.is_zero() {
        return Err(fail(format!(
            "constant has no '{dim}' dimension ({})",
            constant.dimensions()
        )));
    }
    let mut rest = 1.0;
    for (other, exp) in constant.dimensions().iter() {
        if other == dim {
            continue;
        }
        let factor = system
            .scale_factor(other)
            .map_err(|_| fail(format!("dimension '{other}' is not defined yet")))?;
        rest *= raise(factor, exp);
    }
    let root = *own.denom() as f64 / *own.numer() as f64;
    let factor = (constant.si_value() / rest).powf(root);
    if !factor.is_finite() || factor <= 0.0 {
        return Err(fail(format!("solved factor {factor} is not a positive number")));
    }
    Ok(factor)
}

/// `base^exp` for a rational exponent; integer powers stay exact.
pub fn raise(base: f64, exp: &Exponent) -> f64 {
    if exp.is_integer() {
        base.powi(*exp.numer())
    } else {
        base.powf(*exp.numer() as f64 / *exp.denom() as f64)
    }
}
