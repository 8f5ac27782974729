// ─────────────────────────────────────────────────────────────────────
// PUCS Natural Units — Constant Records
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::dimension::DimensionVector;
use crate::error::{PucsError, PucsResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable internal key of a constant. Unique within a registry, unlike the
/// display symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstantId(String);

impl ConstantId {
    pub fn new(id: impl Into<String>) -> Self {
        ConstantId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConstantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConstantId {
    fn from(s: &str) -> Self {
        ConstantId(s.to_string())
    }
}

/// A physical constant expressed in SI.
///
/// The SI value is validated at construction: it must be finite and
/// non-zero, since a zero has no meaningful natural-unit multiplier.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalConstant {
    id: ConstantId,
    symbol: String,
    si_value: f64,
    dimensions: DimensionVector,
    description: String,
    group: Option<String>,
}

impl PhysicalConstant {
    pub fn new(
        id: impl Into<ConstantId>,
        symbol: impl Into<String>,
        si_value: f64,
        dimensions: DimensionVector,
        description: impl Into<String>,
    ) -> PucsResult<Self> {
        let id = id.into();
        if !si_value.is_finite() {
            return Err(PucsError::MalformedConstant {
                constant: id.to_string(),
                reason: format!("SI value {si_value} is not finite"),
            });
        }
        if si_value == 0.0 {
            return Err(PucsError::MalformedConstant {
                constant: id.to_string(),
                reason: "SI value is zero".to_string(),
            });
        }
        Ok(PhysicalConstant {
            id,
            symbol: symbol.into(),
            si_value,
            dimensions,
            description: description.into(),
            group: None,
        })
    }

    /// Attach the name of the table group this constant was listed under.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn id(&self) -> &ConstantId {
        &self.id
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn si_value(&self) -> f64 {
        self.si_value
    }

    pub fn dimensions(&self) -> &DimensionVector {
        &self.dimensions
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }
}

impl From<String> for ConstantId {
    fn from(s: String) -> Self {
        ConstantId(s)
    }
}

/// A constant re-expressed in a natural unit system.
#[derive(Debug, Clone, PartialEq)]
pub struct RescaledConstant {
    pub id: ConstantId,
    pub symbol: String,
    pub natural_value: f64,
    pub dimensions: DimensionVector,
    pub description: String,
}

impl RescaledConstant {
    /// Carry the identity of `source` over to a computed natural value.
    pub fn from_source(source: &PhysicalConstant, natural_value: f64) -> Self {
        RescaledConstant {
            id: source.id.clone(),
            symbol: source.symbol.clone(),
            natural_value,
            dimensions: source.dimensions.clone(),
            description: source.description.clone(),
        }
    }
}
