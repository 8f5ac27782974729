// ─────────────────────────────────────────────────────────────────────
// PUCS Natural Units — Unit System Presets
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Named unit systems.
//!
//! Every preset defines all ten standard dimensions plus the legacy
//! `A_old` current (factor 1), so no constant of the built-in CODATA table
//! hits an undefined dimension. The Planck-scale presets still reject that
//! table as a whole: the atomic unit of permittivity falls below `f64` range. Presets that fix scales through defining constants look
//! those constants up in the registry they are built against.

use crate::registry::ConstantRegistry;
use crate::unit_system::{UnitSystemBuilder, UnitSystemDefinition};
use pucs_types::constants::{
    C_LIGHT, G_NEWTON, HZ_KG, H_PLANCK, KG_PER_POUND, KG_PER_SOLAR_MASS, K_BOLTZMANN, K_COULOMB,
    K_HZ, METERS_PER_FOOT, METERS_PER_PARSEC, PLANCK_LENGTH, PLANCK_MASS, PLANCK_TEMPERATURE,
    PLANCK_TIME, Q_ELECTRON, RANKINE_PER_KELVIN, SECONDS_PER_YEAR,
};
use pucs_types::dimension::BaseDimension;
use pucs_types::error::{PucsError, PucsResult};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Ids of the defining constants in the built-in table.
pub const SPEED_OF_LIGHT: &str = "speed_of_light_c";
pub const PLANCK_CONSTANT: &str = "planck_constant_h";
pub const BOLTZMANN_CONSTANT: &str = "boltzmann_constant_k";
pub const ELEMENTARY_CHARGE: &str = "elementary_charge_e";
pub const AVOGADRO_CONSTANT: &str = "avogadro_constant_na";
pub const ELECTRON_MASS: &str = "electron_mass_me";

/// Charge unit of the tabulated Planck system (C).
const PLANCK_CHARGE: f64 = 3.2043532679e-19;

/// Square of the time unit shared by the decimal systems (s²).
const DECIMAL_TIME_SQUARED: f64 = 1.8262416298;

/// Square of the decimal current unit (A²). Puts k_e on the same decimal
/// footing as G.
const DECIMAL_CURRENT_SQUARED: f64 = 1.0e-9 / 8.2627176393e11;

/// π² as tabulated for the pi-scaled mass unit.
const PI_SQUARED: f64 = 9.8696044011;

/// Mass that fixes the electron-anchored Planck time, `t = sqrt(G h/c⁵) / M` (kg).
const PLANCK_ELECTRON_ANCHOR: f64 = 1.66975784e-23 * 9.9999999998e-01;

/// Legacy current dimension kept for side-by-side comparison.
const LEGACY_CURRENT: &str = "A_old";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitSystemPreset {
    /// Identity scales.
    Si,
    /// c = h = k = e = N_A = 1 with the second kept as time unit.
    Natural,
    /// Tabulated Planck units.
    Planck,
    /// c = h = G = 1, derived from CODATA values.
    PlanckH,
    /// c = G = e = k_e = 1.
    Stoney,
    /// Natural system with the electron mass as mass unit.
    AtomicElectron,
    /// Foot, pound, rankine.
    Imperial,
    /// Julian year, parsec, solar mass.
    Galactic,
    /// Millisecond time unit, everything else SI.
    Time,
    /// Human-scaled decimal system: G and k_e become powers of ten.
    Rogers,
    /// Decimal system with π folded into the length and mass units.
    Pi,
    /// SI with the metre replaced by G^(1/3), so G = 1.
    SiGm,
    /// Planck-like system whose mass unit lands on the electron mass.
    PlanckHMe,
}

impl UnitSystemPreset {
    pub const ALL: [UnitSystemPreset; 13] = [
        UnitSystemPreset::Si,
        UnitSystemPreset::Natural,
        UnitSystemPreset::Planck,
        UnitSystemPreset::PlanckH,
        UnitSystemPreset::Stoney,
        UnitSystemPreset::AtomicElectron,
        UnitSystemPreset::Imperial,
        UnitSystemPreset::Galactic,
        UnitSystemPreset::Time,
        UnitSystemPreset::Rogers,
        UnitSystemPreset::Pi,
        UnitSystemPreset::SiGm,
        UnitSystemPreset::PlanckHMe,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            UnitSystemPreset::Si => "si",
            UnitSystemPreset::Natural => "natural",
            UnitSystemPreset::Planck => "planck",
            UnitSystemPreset::PlanckH => "planck_h",
            UnitSystemPreset::Stoney => "stoney",
            UnitSystemPreset::AtomicElectron => "atomic_electron",
            UnitSystemPreset::Imperial => "imperial",
            UnitSystemPreset::Galactic => "galactic",
            UnitSystemPreset::Time => "time",
            UnitSystemPreset::Rogers => "rogers",
            UnitSystemPreset::Pi => "pi",
            UnitSystemPreset::SiGm => "si_gm",
            UnitSystemPreset::PlanckHMe => "planck_h_m_e",
        }
    }

    /// The builder for this preset, before defining constants are resolved.
    pub fn builder(&self) -> UnitSystemBuilder {
        use BaseDimension::*;
        let b = UnitSystemBuilder::new(self.name());
        let b = match self {
            UnitSystemPreset::Si => b
                .scale(Time, 1.0)
                .scale(Length, 1.0)
                .scale(Mass, 1.0)
                .scale(Temperature, 1.0)
                .scale(Charge, 1.0)
                .scale(Current, 1.0)
                .scale(Amount, 1.0)
                .scale(Angle, 1.0),
            UnitSystemPreset::Natural => b
                .suffix("_n")
                .scale(Time, 1.0)
                .defined_by(Length, SPEED_OF_LIGHT)
                .defined_by(Mass, PLANCK_CONSTANT)
                .defined_by(Temperature, BOLTZMANN_CONSTANT)
                .defined_by(Charge, ELEMENTARY_CHARGE)
                .scale(Current, Q_ELECTRON)
                .defined_by(Amount, AVOGADRO_CONSTANT)
                .scale(Angle, PI),
            UnitSystemPreset::Planck => b
                .scale_as(Time, PLANCK_TIME, "t_P")
                .scale_as(Length, PLANCK_LENGTH, "l_P")
                .scale_as(Mass, PLANCK_MASS, "m_P")
                .scale_as(Temperature, PLANCK_TEMPERATURE, "T_P")
                .scale_as(Charge, PLANCK_CHARGE, "C_P")
                .scale_as(Current, PLANCK_CHARGE, "A_P")
                .scale(Amount, 1.0)
                .scale(Angle, 1.0),
            UnitSystemPreset::PlanckH => {
                let t_p = (G_NEWTON * HZ_KG / C_LIGHT.powi(3)).sqrt();
                let charge = (HZ_KG * C_LIGHT * 1.0e7).sqrt();
                b.scale_as(Time, t_p, "t_P")
                    .defined_by_as(Length, SPEED_OF_LIGHT, "l_P")
                    .defined_by_as(Mass, PLANCK_CONSTANT, "m_P")
                    .defined_by_as(Temperature, BOLTZMANN_CONSTANT, "T_P")
                    .scale_as(Charge, charge, "C_P")
                    .scale_as(Current, charge / t_p, "A_P")
                    .scale_as(Amount, HZ_KG / t_p, "mol_P")
                    .scale(Angle, 1.0)
            }
            UnitSystemPreset::Stoney => {
                let l_s = (G_NEWTON * K_COULOMB * Q_ELECTRON.powi(2) / C_LIGHT.powi(4)).sqrt();
                let t_s = l_s / C_LIGHT;
                let m_s = (K_COULOMB * Q_ELECTRON.powi(2) / G_NEWTON).sqrt();
                let temp_s = m_s * C_LIGHT.powi(2) / K_BOLTZMANN;
                b.suffix("_S")
                    .scale_as(Time, t_s, "t_S")
                    .scale_as(Length, l_s, "l_S")
                    .scale_as(Mass, m_s, "m_S")
                    .scale_as(Temperature, temp_s, "T_S")
                    .scale_as(Charge, Q_ELECTRON, "Q_S")
                    .scale_as(Current, Q_ELECTRON / t_s, "A_S")
                    .scale(Amount, 1.0)
                    .scale(Angle, 1.0)
            }
            UnitSystemPreset::AtomicElectron => b
                .suffix("_a")
                .scale(Time, 1.0)
                .defined_by(Length, SPEED_OF_LIGHT)
                .defined_by(Mass, ELECTRON_MASS)
                .scale(Temperature, H_PLANCK / K_BOLTZMANN)
                .defined_by(Charge, ELEMENTARY_CHARGE)
                .scale(Current, Q_ELECTRON)
                .defined_by(Amount, AVOGADRO_CONSTANT)
                .scale(Angle, PI),
            UnitSystemPreset::Imperial => b
                .scale(Time, 1.0)
                .scale_as(Length, METERS_PER_FOOT, "ft")
                .scale_as(Mass, KG_PER_POUND, "lbm")
                .scale_as(Temperature, 1.0 / RANKINE_PER_KELVIN, "R")
                .scale(Charge, 1.0)
                .scale(Current, 1.0)
                .scale(Amount, 1.0)
                .scale(Angle, 1.0),
            UnitSystemPreset::Galactic => b
                .scale_as(Time, SECONDS_PER_YEAR, "yr")
                .scale_as(Length, METERS_PER_PARSEC, "pc")
                .scale_as(Mass, KG_PER_SOLAR_MASS, "M_sun")
                .scale(Temperature, 1.0)
                .scale(Charge, 1.0)
                .scale(Current, 1.0)
                .scale_as(Amount, KG_PER_SOLAR_MASS, "mol_g")
                .scale(Angle, 1.0),
            UnitSystemPreset::Time => b
                .suffix("_n")
                .scale(Time, 1.0e-3)
                .scale(Length, 1.0)
                .scale(Mass, 1.0)
                .scale(Temperature, 1.0)
                .scale(Charge, 1.0)
                .scale(Current, 1.0)
                .scale(Amount, 1.0)
                .scale(Angle, 1.0),
            UnitSystemPreset::Rogers => {
                let t = DECIMAL_TIME_SQUARED.sqrt();
                let mass = HZ_KG / (1.0e-50 * t);
                let current = DECIMAL_CURRENT_SQUARED.sqrt();
                b.suffix("_r")
                    .scale(Time, t)
                    .scale(Length, t * C_LIGHT / 1.0e10)
                    .scale(Mass, mass)
                    .scale(Temperature, 1.0e10 / (K_HZ * t))
                    .scale(Charge, current * t)
                    .scale(Current, current)
                    .scale(Amount, mass)
                    .scale_as(Angle, 1.0, "pi")
            }
            UnitSystemPreset::Pi => {
                let t = DECIMAL_TIME_SQUARED.sqrt();
                let current = Q_ELECTRON * Q_ELECTRON;
                b.suffix("_r")
                    .scale(Time, t)
                    .scale(Length, t * C_LIGHT / 1.0e8 / PI)
                    .scale(Mass, HZ_KG / (1.0e-50 * t) * PI_SQUARED / PI)
                    .scale(Temperature, 1.0e10 / (K_HZ * t))
                    .scale(Charge, current * t)
                    .scale(Current, current)
                    .scale(Amount, HZ_KG / (1.0e-50 * t))
                    .scale_as(Angle, 1.0, "pi")
            }
            UnitSystemPreset::SiGm => b
                .scale(Time, 1.0)
                .scale_as(Length, G_NEWTON.cbrt(), "m_g")
                .scale(Mass, 1.0)
                .scale(Temperature, 1.0)
                .scale(Charge, 1.0)
                .scale(Current, 1.0)
                .scale(Amount, 1.0)
                .scale(Angle, 1.0),
            UnitSystemPreset::PlanckHMe => {
                let t = (G_NEWTON * HZ_KG / C_LIGHT.powi(3)).sqrt() / PLANCK_ELECTRON_ANCHOR;
                b.suffix("_Ph")
                    .scale_as(Time, t, "t_Ph")
                    .scale_as(Length, t * C_LIGHT, "l_Ph")
                    .scale_as(Mass, HZ_KG / t, "m_Ph")
                    .scale_as(Temperature, 1.0 / (t * K_HZ), "T_Ph")
                    .scale_as(Charge, Q_ELECTRON, "C_Ph")
                    .scale_as(Current, Q_ELECTRON / t, "A_Ph")
                    .scale_as(Amount, HZ_KG / t, "mol_Ph")
                    .scale(Angle, 1.0)
            }
        };
        b.frequency_from_time()
            .atomic_mass_from_mass()
            .scale_as(BaseDimension::Custom(LEGACY_CURRENT.into()), 1.0, LEGACY_CURRENT)
    }

    /// Resolve the preset against `registry`.
    pub fn build(&self, registry: &ConstantRegistry) -> PucsResult<UnitSystemDefinition> {
        self.builder().build(registry)
    }
}

impl FromStr for UnitSystemPreset {
    type Err = PucsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        UnitSystemPreset::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| PucsError::UnknownPreset(s.to_string()))
    }
}

impl fmt::Display for UnitSystemPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
