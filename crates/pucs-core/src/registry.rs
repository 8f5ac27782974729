// ─────────────────────────────────────────────────────────────────────
// PUCS Natural Units — Constant Registry
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Ordered table of physical constants.
//!
//! Ids are unique keys; display symbols may repeat (two `A` entries with
//! different dimensions are legitimate and both survive to the output).

use crate::composite::{CompositeUnitTable, UnitTerm};
use pucs_types::config::{ConstantTableConfig, UnitsConfig};
use pucs_types::constant::{ConstantId, PhysicalConstant};
use pucs_types::dimension::BaseDimension;
use pucs_types::error::{PucsError, PucsResult};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, Default)]
pub struct ConstantRegistry {
    constants: Vec<PhysicalConstant>,
    index: HashMap<ConstantId, usize>,
}

impl ConstantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a constant. Fails if its id is already registered.
    pub fn push(&mut self, constant: PhysicalConstant) -> PucsResult<()> {
        if self.index.contains_key(constant.id()) {
            return Err(PucsError::DuplicateConstantId(constant.id().to_string()));
        }
        self.index.insert(constant.id().clone(), self.constants.len());
        self.constants.push(constant);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&PhysicalConstant> {
        self.index
            .get(&ConstantId::from(id))
            .map(|&i| &self.constants[i])
    }

    /// Like [`get`](Self::get) but fails with `MissingConstant`.
    pub fn require(&self, id: &str) -> PucsResult<&PhysicalConstant> {
        self.get(id)
            .ok_or_else(|| PucsError::MissingConstant(id.to_string()))
    }

    /// All constants displayed under `symbol`, in registry order.
    pub fn by_symbol<'a>(&'a self, symbol: &'a str) -> impl Iterator<Item = &'a PhysicalConstant> {
        self.constants.iter().filter(move |c| c.symbol() == symbol)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PhysicalConstant> {
        self.constants.iter()
    }

    pub fn as_slice(&self) -> &[PhysicalConstant] {
        &self.constants
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    /// Every base dimension referenced by at least one constant.
    pub fn referenced_dimensions(&self) -> BTreeSet<BaseDimension> {
        self.constants
            .iter()
            .flat_map(|c| c.dimensions().dimensions().cloned())
            .collect()
    }

    /// Display symbols that appear more than once, in first-seen order.
    pub fn repeated_symbols(&self) -> Vec<&str> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut repeated = Vec::new();
        for c in &self.constants {
            let n = seen.entry(c.symbol()).or_insert(0);
            *n += 1;
            if *n == 2 {
                repeated.push(c.symbol());
            }
        }
        repeated
    }

    /// Build a registry from a JSON constant table, expanding derived units
    /// through `units`.
    pub fn from_config(
        config: &ConstantTableConfig,
        units: &CompositeUnitTable,
    ) -> PucsResult<Self> {
        let mut registry = Self::new();
        for group in &config.groups {
            for entry in &group.constants {
                let terms = unit_terms(&entry.units)?;
                let dimensions = units.resolve(&terms)?;
                let description = entry.description.clone().unwrap_or_else(|| entry.id.clone());
                let constant = PhysicalConstant::new(
                    entry.id.as_str(),
                    entry.symbol.as_str(),
                    entry.value,
                    dimensions,
                    description,
                )?
                .with_group(group.name.as_str());
                registry.push(constant)?;
            }
        }
        let repeated = registry.repeated_symbols();
        if !repeated.is_empty() {
            tracing::warn!(symbols = ?repeated, "registry contains repeated display symbols");
        }
        tracing::debug!(
            constants = registry.len(),
            groups = config.groups.len(),
            "loaded constant table"
        );
        Ok(registry)
    }

    /// Load a JSON constant table from disk, using the SI derived units.
    pub fn from_file(path: &str) -> PucsResult<Self> {
        let config = ConstantTableConfig::from_file(path)?;
        Self::from_config(&config, &CompositeUnitTable::si_derived())
    }
}

impl<'a> IntoIterator for &'a ConstantRegistry {
    type Item = &'a PhysicalConstant;
    type IntoIter = std::slice::Iter<'a, PhysicalConstant>;

    fn into_iter(self) -> Self::IntoIter {
        self.constants.iter()
    }
}

fn unit_terms(units: &UnitsConfig) -> PucsResult<Vec<UnitTerm>> {
    match units {
        UnitsConfig::Formula(formula) => crate::composite::parse_unit_formula(formula),
        UnitsConfig::Terms(terms) => terms
            .iter()
            .map(|(symbol, exp)| Ok((symbol.clone(), exp.to_exponent()?)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pucs_types::dimension::DimensionVector;
    use std::path::PathBuf;

    fn project_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
    }

    fn config_path(relative: &str) -> String {
        project_root().join(relative).to_string_lossy().to_string()
    }

    fn constant(id: &str, symbol: &str, dims: &[(&str, i32)]) -> PhysicalConstant {
        PhysicalConstant::new(id, symbol, 1.0e-7, DimensionVector::from_integers(dims), id).unwrap()
    }

    #[test]
    fn test_duplicate_symbols_tolerated() {
        let mut reg = ConstantRegistry::new();
        reg.push(constant("amp_force", "A", &[("kg", 1), ("m", 1), ("s", -2), ("A", -2)]))
            .unwrap();
        reg.push(constant(
            "amp_force_alpha",
            "A",
            &[("kg", 1), ("m", 1), ("s", -2), ("A_old", -2)],
        ))
        .unwrap();
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.by_symbol("A").count(), 2);
        assert_eq!(reg.repeated_symbols(), vec!["A"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut reg = ConstantRegistry::new();
        reg.push(constant("thermal_conductivity_copper", "k", &[("K", -1)]))
            .unwrap();
        let err = reg
            .push(constant("thermal_conductivity_copper", "k", &[("K", -1)]))
            .unwrap_err();
        assert!(matches!(
            err,
            PucsError::DuplicateConstantId(ref id) if id == "thermal_conductivity_copper"
        ));
    }

    #[test]
    fn test_order_preserved() {
        let mut reg = ConstantRegistry::new();
        for id in ["c", "b", "a"] {
            reg.push(constant(id, id, &[])).unwrap();
        }
        let ids: Vec<&str> = reg.iter().map(|c| c.id().as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_require_missing() {
        let reg = ConstantRegistry::new();
        assert!(matches!(
            reg.require("speed_of_light_c"),
            Err(PucsError::MissingConstant(_))
        ));
    }

    #[test]
    fn test_referenced_dimensions() {
        let mut reg = ConstantRegistry::new();
        reg.push(constant("g", "G", &[("m", 3), ("kg", -1), ("s", -2)]))
            .unwrap();
        let dims = reg.referenced_dimensions();
        assert_eq!(dims.len(), 3);
        assert!(dims.contains(&BaseDimension::Mass));
    }

    #[test]
    fn test_load_core_table_expands_joule() {
        let reg = ConstantRegistry::from_file(&config_path("data/constants/core.json")).unwrap();
        let h = reg.require("planck_constant_h").unwrap();
        assert_eq!(
            h.dimensions(),
            &DimensionVector::from_integers(&[("kg", 1), ("m", 2), ("s", -1)])
        );
        assert_eq!(h.group(), Some("Core Scaling Constants"));
        let k_ic = reg.require("fracture_toughness_alumina").unwrap();
        assert_eq!(
            k_ic.dimensions().exponent(&BaseDimension::Length),
            pucs_types::dimension::Exponent::new(-1, 2)
        );
    }

    #[test]
    fn test_zero_value_in_table_rejected() {
        let config: ConstantTableConfig = serde_json::from_str(
            r#"{"groups":[{"name":"g","constants":[
                {"id":"bad","symbol":"b","value":0.0,"units":"m"}]}]}"#,
        )
        .unwrap();
        let err = ConstantRegistry::from_config(&config, &CompositeUnitTable::si_derived())
            .unwrap_err();
        assert!(matches!(err, PucsError::MalformedConstant { .. }));
    }

    #[test]
    fn test_overflowing_exponent_in_table_rejected() {
        let config: ConstantTableConfig = serde_json::from_str(
            r#"{"groups":[{"name":"g","constants":[
                {"id":"huge","symbol":"x","value":1.0,
                 "units":[["J", 2000000000], ["s", 1]]}]}]}"#,
        )
        .unwrap();
        let err = ConstantRegistry::from_config(&config, &CompositeUnitTable::si_derived())
            .unwrap_err();
        assert!(matches!(err, PucsError::MalformedUnitFormula { .. }), "{err}");
    }
}
