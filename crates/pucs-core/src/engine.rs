// ─────────────────────────────────────────────────────────────────────
// PUCS Natural Units — Rescaling Engine
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Dimensional rescaling of a constant registry into a unit system.
//!
//! For every constant:
//!
//! ```text
//! natural = si_value / Π factor(d)^e(d)
//! ```
//!
//! A run is all-or-nothing. Every referenced dimension is checked before any
//! value is computed, and the first failing constant in registry order
//! aborts the run.

use crate::registry::ConstantRegistry;
use crate::unit_system::{raise, UnitSystemDefinition};
use num_traits::Zero;
use pucs_types::constant::{PhysicalConstant, RescaledConstant};
use pucs_types::dimension::{DimensionVector, Exponent};
use pucs_types::error::{PucsError, PucsResult};
use rayon::prelude::*;

pub struct RescalingEngine<'a> {
    system: &'a UnitSystemDefinition,
}

impl<'a> RescalingEngine<'a> {
    pub fn new(system: &'a UnitSystemDefinition) -> Self {
        RescalingEngine { system }
    }

    pub fn system(&self) -> &UnitSystemDefinition {
        self.system
    }

    /// The `(factor, exponent)` pairs dividing `constant`. Zero exponents are
    /// skipped without looking the dimension up. A zero factor under any
    /// non-zero exponent is a division by zero in one direction or the
    /// other, so it fails instead of producing zero or infinity.
    fn divisor_terms<'c>(
        &self,
        constant: &'c PhysicalConstant,
    ) -> PucsResult<Vec<(f64, &'c Exponent)>> {
        let mut terms = Vec::with_capacity(constant.dimensions().len());
        for (dim, exp) in constant.dimensions().iter() {
            if exp.is_zero() {
                continue;
            }
            let factor = self
                .system
                .scale_factor(dim)
                .map_err(|_| self.system.undefined(dim, Some(constant.id().as_str())))?;
            if factor == 0.0 {
                return Err(PucsError::DivisionByZero {
                    constant: constant.id().to_string(),
                    symbol: constant.symbol().to_string(),
                    dimension: dim.to_string(),
                    exponent: exp.to_string(),
                });
            }
            terms.push((factor, exp));
        }
        Ok(terms)
    }

    /// `si_value / Π factor^exponent` for one constant.
    ///
    /// The divisor is folded term by term while every partial product stays
    /// a normal float; otherwise the quotient is recomputed from logarithms.
    /// A result that is still zero or infinite does not fit in an `f64` and
    /// is reported as [`PucsError::ValueOutOfRange`].
    pub fn natural_value(&self, constant: &PhysicalConstant) -> PucsResult<f64> {
        let terms = self.divisor_terms(constant)?;
        let si = constant.si_value();
        let value = direct_quotient(si, &terms).unwrap_or_else(|| log_quotient(si, &terms));
        if value.is_finite() && value != 0.0 {
            Ok(value)
        } else {
            Err(PucsError::ValueOutOfRange {
                constant: constant.id().to_string(),
                symbol: constant.symbol().to_string(),
                value,
            })
        }
    }

    pub fn rescale_one(&self, constant: &PhysicalConstant) -> PucsResult<RescaledConstant> {
        let value = self.natural_value(constant)?;
        Ok(RescaledConstant::from_source(constant, value))
    }

    /// Natural value of an arbitrary SI quantity with the given dimensions.
    pub fn rescale_value(&self, si_value: f64, dims: &DimensionVector) -> PucsResult<f64> {
        let quantity = PhysicalConstant::new("<value>", "<value>", si_value, dims.clone(), "")?;
        Ok(self.rescale_one(&quantity)?.natural_value)
    }

    /// Check that every referenced dimension has a scale. The first offender
    /// in registry order is reported.
    fn validate(&self, registry: &ConstantRegistry) -> PucsResult<()> {
        for constant in registry {
            for dim in constant.dimensions().dimensions() {
                if !self.system.contains(dim) {
                    return Err(self.system.undefined(dim, Some(constant.id().as_str())));
                }
            }
        }
        Ok(())
    }

    /// Rescale the whole registry. Output order matches registry order.
    pub fn rescale(&self, registry: &ConstantRegistry) -> PucsResult<Vec<RescaledConstant>> {
        tracing::info!(
            system = self.system.name(),
            constants = registry.len(),
            "rescaling registry"
        );
        self.validate(registry)?;
        let results: Vec<PucsResult<RescaledConstant>> = registry
            .as_slice()
            .par_iter()
            .map(|c| self.rescale_one(c))
            .collect();
        let rescaled = results.into_iter().collect::<PucsResult<Vec<_>>>()?;
        tracing::info!(
            system = self.system.name(),
            constants = rescaled.len(),
            "rescaling complete"
        );
        Ok(rescaled)
    }
}

/// Plain left fold of the divisor. `None` as soon as a partial product or
/// the quotient leaves the normal range.
fn direct_quotient(si: f64, terms: &[(f64, &Exponent)]) -> Option<f64> {
    let mut divisor = 1.0_f64;
    for (factor, exp) in terms {
        divisor *= raise(*factor, exp);
        if !divisor.is_normal() {
            return None;
        }
    }
    Some(si / divisor).filter(|v| v.is_normal())
}

fn log_quotient(si: f64, terms: &[(f64, &Exponent)]) -> f64 {
    let log_divisor: f64 = terms
        .iter()
        .map(|(factor, exp)| (*exp.numer() as f64 / *exp.denom() as f64) * factor.ln())
        .sum();
    si.signum() * (si.abs().ln() - log_divisor).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codata::codata_2018;
    use crate::presets::UnitSystemPreset;
    use crate::unit_system::UnitSystemBuilder;
    use pucs_types::dimension::BaseDimension;

    fn constant(id: &str, v: f64, dims: &[(&str, i32)]) -> PhysicalConstant {
        PhysicalConstant::new(id, id, v, DimensionVector::from_integers(dims), id).unwrap()
    }

    fn registry(items: Vec<PhysicalConstant>) -> ConstantRegistry {
        let mut reg = ConstantRegistry::new();
        for c in items {
            reg.push(c).unwrap();
        }
        reg
    }

    fn rel(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    #[test]
    fn test_speed_of_light_is_unity() {
        let sys = UnitSystemBuilder::new("n")
            .scale(BaseDimension::Time, 1.0)
            .scale(BaseDimension::Length, 2.99792458e8)
            .build(&ConstantRegistry::new())
            .unwrap();
        let reg = registry(vec![constant(
            "speed_of_light",
            2.99792458e8,
            &[("m", 1), ("s", -1)],
        )]);
        let out = RescalingEngine::new(&sys).rescale(&reg).unwrap();
        assert_eq!(out[0].natural_value, 1.0);
    }

    #[test]
    fn test_electron_mass_in_frequency_mass_units() {
        let kg = 7.37249732381270843547e-51;
        let sys = UnitSystemBuilder::new("n")
            .scale(BaseDimension::Mass, kg)
            .build(&ConstantRegistry::new())
            .unwrap();
        let reg = registry(vec![constant("electron_mass", 9.1093837015e-31, &[("kg", 1)])]);
        let out = RescalingEngine::new(&sys).rescale(&reg).unwrap();
        assert!(rel(out[0].natural_value, 9.1093837015e-31 / kg) < 1e-9);
        assert!(rel(out[0].natural_value, 1.2355899638e20) < 1e-9);
    }

    #[test]
    fn test_zero_exponent_ignores_scale() {
        let sys = UnitSystemBuilder::new("z")
            .scale(BaseDimension::Mass, 2.0)
            .build(&ConstantRegistry::new())
            .unwrap();
        let engine = RescalingEngine::new(&sys);
        let dims = DimensionVector::from_terms([
            (BaseDimension::Mass, 1.into()),
            (BaseDimension::Angle, 0.into()),
        ]);
        // pi has no scale here but exponent zero never reaches the lookup.
        assert_eq!(engine.rescale_value(4.0, &dims).unwrap(), 2.0);
    }

    #[test]
    fn test_zero_scale_in_divisor_fails() {
        let reg = registry(vec![
            constant("unit_second", 1.0, &[("s", 1)]),
            constant("bohr_radius_a0", 5.29177210903e-11, &[("m", 1)]),
            constant("rydberg_infinite", 10973731.56816, &[("m", -1)]),
        ]);
        let sys = UnitSystemBuilder::new("z")
            .scale(BaseDimension::Time, 1.0)
            .scale(BaseDimension::Length, 0.0)
            .build(&ConstantRegistry::new())
            .unwrap();
        let err = RescalingEngine::new(&sys).rescale(&reg).unwrap_err();
        match err {
            PucsError::DivisionByZero { constant, symbol, dimension, exponent } => {
                assert_eq!(constant, "bohr_radius_a0");
                assert_eq!(symbol, "bohr_radius_a0");
                assert_eq!(dimension, "m");
                assert_eq!(exponent, "1");
            }
            other => panic!("expected DivisionByZero, got {other}"),
        }
    }

    #[test]
    fn test_zero_scale_with_negative_exponent_fails() {
        let sys = UnitSystemBuilder::new("z")
            .scale(BaseDimension::Length, 0.0)
            .scale(BaseDimension::Mass, 1.0)
            .build(&ConstantRegistry::new())
            .unwrap();
        let engine = RescalingEngine::new(&sys);
        let dims = DimensionVector::from_integers(&[("m", -2)]);
        assert!(matches!(
            engine.rescale_value(3.0, &dims),
            Err(PucsError::DivisionByZero { ref exponent, .. }) if exponent == "-2"
        ));
        // An unused zero scale is harmless.
        let mass = DimensionVector::from_integers(&[("kg", 1)]);
        assert_eq!(engine.rescale_value(3.0, &mass).unwrap(), 3.0);
    }

    #[test]
    fn test_partial_product_out_of_range_recovers() {
        let sys = UnitSystemBuilder::new("wide")
            .scale(BaseDimension::Length, 1.0e200)
            .scale(BaseDimension::Mass, 1.0e-200)
            .build(&ConstantRegistry::new())
            .unwrap();
        let engine = RescalingEngine::new(&sys);
        // m^2 alone overflows, kg^2 alone underflows; together they cancel.
        let overflow_first = DimensionVector::from_integers(&[("m", 2), ("kg", 2)]);
        let underflow_first = DimensionVector::from_integers(&[("kg", 2), ("m", 2)]);
        for dims in [overflow_first, underflow_first] {
            let v = engine.rescale_value(3.0, &dims).unwrap();
            assert!(rel(v, 3.0) < 1e-12, "{dims}: {v}");
        }
        let negative = engine
            .rescale_value(-3.0, &DimensionVector::from_integers(&[("m", 2), ("kg", 2)]))
            .unwrap();
        assert!(rel(negative, -3.0) < 1e-12);
    }

    #[test]
    fn test_unrepresentable_value_is_reported() {
        let sys = UnitSystemBuilder::new("tiny")
            .scale(BaseDimension::Length, 1.0e-300)
            .build(&ConstantRegistry::new())
            .unwrap();
        let reg = registry(vec![
            constant("ok", 2.0, &[("m", 1)]),
            constant("area", 1.0, &[("m", 2)]),
        ]);
        match RescalingEngine::new(&sys).rescale(&reg) {
            Err(PucsError::ValueOutOfRange { constant, symbol, value }) => {
                assert_eq!(constant, "area");
                assert_eq!(symbol, "area");
                assert!(value.is_infinite());
            }
            other => panic!("expected ValueOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_planck_permittivity_below_float_range() {
        let reg = codata_2018().unwrap();
        for preset in [
            UnitSystemPreset::Planck,
            UnitSystemPreset::PlanckH,
            UnitSystemPreset::Stoney,
        ] {
            let sys = preset.build(&reg).unwrap();
            match RescalingEngine::new(&sys).rescale(&reg) {
                Err(PucsError::ValueOutOfRange { constant, value, .. }) => {
                    assert_eq!(constant, "atomic_unit_of_permittivity", "{preset}");
                    assert_eq!(value, 0.0);
                }
                other => panic!("{preset}: expected ValueOutOfRange, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_undefined_dimension_aborts_run() {
        let sys = UnitSystemBuilder::new("partial")
            .scale(BaseDimension::Length, 1.0)
            .build(&ConstantRegistry::new())
            .unwrap();
        let reg = registry(vec![
            constant("ok", 1.0, &[("m", 1)]),
            constant("luminous", 683.0, &[("cd", 1)]),
            constant("mass", 1.0, &[("kg", 1)]),
        ]);
        match RescalingEngine::new(&sys).rescale(&reg) {
            Err(PucsError::UndefinedDimension { dimension, constant, system }) => {
                assert_eq!(system, "partial");
                assert_eq!(dimension, "cd");
                assert_eq!(constant.as_deref(), Some("luminous"));
            }
            other => panic!("expected UndefinedDimension, got {other:?}"),
        }
    }

    #[test]
    fn test_half_integer_exponent() {
        let sys = UnitSystemBuilder::new("h")
            .scale(BaseDimension::Length, 4.0)
            .scale(BaseDimension::Mass, 1.0)
            .scale(BaseDimension::Time, 1.0)
            .build(&ConstantRegistry::new())
            .unwrap();
        let dims = DimensionVector::from_terms([
            (BaseDimension::Mass, 1.into()),
            (BaseDimension::Length, pucs_types::dimension::Exponent::new(-1, 2)),
            (BaseDimension::Time, (-2).into()),
        ]);
        let v = RescalingEngine::new(&sys).rescale_value(3.5, &dims).unwrap();
        assert!(rel(v, 7.0) < 1e-15);
    }

    #[test]
    fn test_natural_defining_constants_are_unity() {
        let reg = codata_2018().unwrap();
        let sys = UnitSystemPreset::Natural.build(&reg).unwrap();
        let out = RescalingEngine::new(&sys).rescale(&reg).unwrap();
        assert_eq!(out.len(), reg.len());
        for id in [
            "speed_of_light_c",
            "planck_constant_h",
            "boltzmann_constant_k",
            "elementary_charge_e",
            "avogadro_constant_na",
        ] {
            let r = out.iter().find(|r| r.id.as_str() == id).unwrap();
            assert!(rel(r.natural_value, 1.0) < 1e-12, "{id}: {}", r.natural_value);
        }
    }

    #[test]
    fn test_natural_table_values() {
        let reg = codata_2018().unwrap();
        let sys = UnitSystemPreset::Natural.build(&reg).unwrap();
        let out = RescalingEngine::new(&sys).rescale(&reg).unwrap();
        let value = |id: &str| {
            out.iter()
                .find(|r| r.id.as_str() == id)
                .map(|r| r.natural_value)
                .unwrap()
        };
        assert!(rel(value("electron_mass_me"), 1.235589963807414e20) < 1e-12);
        assert!(rel(value("klitzing_constant_rk"), 0.9999999996395389) < 1e-12);
        assert!(rel(value("amp_force"), 0.0011614097322526476) < 1e-12);
        assert!(rel(value("amp_force_scaled_in_alpha"), 4.524438335443822e34) < 1e-12);
        assert!(rel(value("gravitational_constant_g"), 1.8262416298105014e-86) < 1e-12);
        assert!(rel(value("planck_time"), 5.391247e-44) < 1e-15);
        // Output keeps registry order, duplicates included.
        let ids: Vec<&str> = out.iter().map(|r| r.id.as_str()).collect();
        let reg_ids: Vec<&str> = reg.iter().map(|c| c.id().as_str()).collect();
        assert_eq!(ids, reg_ids);
    }

    #[test]
    fn test_identical_dimensions_share_multiplier() {
        let reg = codata_2018().unwrap();
        let sys = UnitSystemPreset::PlanckH.build(&reg).unwrap();
        let engine = RescalingEngine::new(&sys);
        let lp = reg.require("planck_length_lp").unwrap();
        let re = reg.require("electron_radius_re").unwrap();
        let a = engine.rescale_one(lp).unwrap().natural_value / lp.si_value();
        let b = engine.rescale_one(re).unwrap().natural_value / re.si_value();
        assert!(rel(a, b) < 1e-14);
    }
}
