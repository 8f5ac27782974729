// ─────────────────────────────────────────────────────────────────────
// PUCS Natural Units — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::dimension::Exponent;
use crate::error::{PucsError, PucsResult};
use serde::{Deserialize, Serialize};

/// Table of constants, grouped the way CODATA-style sources list them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstantTableConfig {
    pub groups: Vec<ConstantGroupConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstantGroupConfig {
    pub name: String,
    pub constants: Vec<ConstantEntryConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstantEntryConfig {
    pub id: String,
    pub symbol: String,
    pub value: f64,
    pub units: UnitsConfig,
    /// Long-form description; defaults to the id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Units of a constant: either a formula string such as `"J s"` or a list
/// of `[symbol, exponent]` pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UnitsConfig {
    Formula(String),
    Terms(Vec<(String, ExponentValue)>),
}

/// Exponent as written in JSON: `2`, `-0.5` or `"-1/2"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExponentValue {
    Integer(i32),
    Float(f64),
    Ratio(String),
}

impl ExponentValue {
    /// Convert to an exact rational. Floats are approximated by the nearest
    /// small fraction, so `-0.5` becomes `-1/2`.
    pub fn to_exponent(&self) -> PucsResult<Exponent> {
        match self {
            ExponentValue::Integer(n) => Ok(Exponent::from_integer(*n)),
            ExponentValue::Float(x) => {
                Exponent::approximate_float(*x).ok_or_else(|| PucsError::MalformedUnitFormula {
                    formula: x.to_string(),
                    reason: "exponent is not representable as a rational".to_string(),
                })
            }
            ExponentValue::Ratio(s) => {
                s.trim()
                    .parse::<Exponent>()
                    .map_err(|e| PucsError::MalformedUnitFormula {
                        formula: s.clone(),
                        reason: format!("bad exponent: {e}"),
                    })
            }
        }
    }
}

/// A unit system written out scale by scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitSystemConfig {
    pub name: String,
    /// Appended to the SI symbol to name each natural unit (`m` → `m_n`).
    #[serde(default)]
    pub suffix: String,
    pub scales: Vec<ScaleEntryConfig>,
    /// Derive the `Hz` scale as the reciprocal of the `s` scale.
    #[serde(default)]
    pub frequency_from_time: bool,
    /// Derive the `amu` scale from the `kg` scale.
    #[serde(default)]
    pub atomic_mass_from_mass: bool,
}

/// One scale entry. Exactly one of `factor` / `defined_by` must be set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleEntryConfig {
    pub dimension: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factor: Option<f64>,
    /// Id of a constant that evaluates to 1 in this system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub natural_symbol: Option<String>,
}

/// Where the unit system of a generation run comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UnitSystemSource {
    Preset { preset: String },
    Custom(UnitSystemConfig),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    CHeader,
    Python,
    Json,
    Xml,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormulaStyle {
    /// `m_n^-2`
    #[default]
    Caret,
    /// `m_n⁻²`
    Superscript,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Appended to every constant name.
    #[serde(default)]
    pub symbol_suffix: String,
    #[serde(default = "default_header_guard")]
    pub header_guard: String,
    #[serde(default)]
    pub formula_style: FormulaStyle,
}

fn default_header_guard() -> String {
    "PUCS_PHYSICS_CONSTANTS_H".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: OutputFormat::default(),
            symbol_suffix: String::new(),
            header_guard: default_header_guard(),
            formula_style: FormulaStyle::default(),
        }
    }
}

/// Top-level description of one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Path to a [`ConstantTableConfig`] file; the built-in CODATA table is
    /// used when absent. Relative paths resolve against the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constants: Option<String>,
    pub unit_system: UnitSystemSource,
    #[serde(default)]
    pub output: OutputConfig,
}

impl ConstantTableConfig {
    pub fn from_file(path: &str) -> PucsResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

impl UnitSystemConfig {
    pub fn from_file(path: &str) -> PucsResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

impl GenerationConfig {
    pub fn from_file(path: &str) -> PucsResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// CARGO_MANIFEST_DIR points to crates/pucs-types/ at compile time,
    /// so we go up 2 levels to reach the workspace root.
    fn project_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
    }

    fn config_path(relative: &str) -> String {
        project_root().join(relative).to_string_lossy().to_string()
    }

    #[test]
    fn test_load_core_constants() {
        let cfg = ConstantTableConfig::from_file(&config_path("data/constants/core.json")).unwrap();
        assert_eq!(cfg.groups.len(), 2);
        let first = &cfg.groups[0].constants[0];
        assert_eq!(first.id, "speed_of_light_c");
        assert_eq!(first.symbol, "c");
        assert!((first.value - 299792458.0).abs() < 1e-6);
    }

    #[test]
    fn test_load_natural_unit_system() {
        let cfg =
            UnitSystemConfig::from_file(&config_path("data/unit_systems/natural.json")).unwrap();
        assert_eq!(cfg.name, "natural");
        assert_eq!(cfg.suffix, "_n");
        assert!(cfg.frequency_from_time);
        assert!(cfg.atomic_mass_from_mass);
        assert_eq!(cfg.scales[0].dimension, "s");
        assert_eq!(cfg.scales[1].defined_by.as_deref(), Some("speed_of_light_c"));
    }

    #[test]
    fn test_load_generation_configs() {
        let natural =
            GenerationConfig::from_file(&config_path("data/generate_natural.json")).unwrap();
        assert!(matches!(
            natural.unit_system,
            UnitSystemSource::Preset { ref preset } if preset == "natural"
        ));
        assert_eq!(natural.output.format, OutputFormat::CHeader);

        let custom =
            GenerationConfig::from_file(&config_path("data/generate_custom.json")).unwrap();
        assert!(matches!(custom.unit_system, UnitSystemSource::Custom(_)));
        assert_eq!(custom.output.format, OutputFormat::Python);
        assert_eq!(custom.constants.as_deref(), Some("constants/core.json"));
    }

    #[test]
    fn test_units_formula_or_terms() {
        let formula: UnitsConfig = serde_json::from_str("\"J s\"").unwrap();
        assert!(matches!(formula, UnitsConfig::Formula(ref f) if f == "J s"));

        let terms: UnitsConfig =
            serde_json::from_str(r#"[["kg", 1], ["m", -0.5], ["s", "-2"]]"#).unwrap();
        let UnitsConfig::Terms(terms) = terms else {
            panic!("expected term list");
        };
        assert_eq!(terms[0].1.to_exponent().unwrap(), Exponent::from_integer(1));
        assert_eq!(terms[1].1.to_exponent().unwrap(), Exponent::new(-1, 2));
        assert_eq!(terms[2].1.to_exponent().unwrap(), Exponent::from_integer(-2));
    }

    #[test]
    fn test_bad_ratio_exponent() {
        let e = ExponentValue::Ratio("one/two".into());
        assert!(matches!(
            e.to_exponent(),
            Err(PucsError::MalformedUnitFormula { .. })
        ));
    }

    #[test]
    fn test_derivation_flags_default_off() {
        let cfg: UnitSystemConfig =
            serde_json::from_str(r#"{"name":"bare","scales":[]}"#).unwrap();
        assert!(!cfg.frequency_from_time);
        assert!(!cfg.atomic_mass_from_mass);
    }

    #[test]
    fn test_output_defaults() {
        let out: OutputConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(out, OutputConfig::default());
        assert_eq!(out.header_guard, "PUCS_PHYSICS_CONSTANTS_H");
    }

    #[test]
    fn test_roundtrip_serialization() {
        let cfg =
            UnitSystemConfig::from_file(&config_path("data/unit_systems/natural.json")).unwrap();
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        let cfg2: UnitSystemConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg.name, cfg2.name);
        assert_eq!(cfg.scales.len(), cfg2.scales.len());
    }
}
