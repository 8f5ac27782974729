// ─────────────────────────────────────────────────────────────────────
// PUCS Natural Units — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! SI reference values (CODATA 2018) used to build the preset unit systems.

/// Speed of light in vacuum (m/s), exact.
pub const C_LIGHT: f64 = 299792458.0;

/// Planck constant (J s), exact.
pub const H_PLANCK: f64 = 6.62607015e-34;

/// Elementary charge (C), exact.
pub const Q_ELECTRON: f64 = 1.602176634e-19;

/// Boltzmann constant (J/K), exact.
pub const K_BOLTZMANN: f64 = 1.380649e-23;

/// Avogadro constant (1/mol), exact.
pub const N_AVOGADRO: f64 = 6.02214076e23;

/// Newtonian constant of gravitation (m³ kg⁻¹ s⁻²)
pub const G_NEWTON: f64 = 6.67430e-11;

/// Coulomb constant k_e = 1/(4π ε₀) (N m² C⁻²)
pub const K_COULOMB: f64 = 8.9875517923e9;

/// Atomic mass unit (kg)
pub const AMU_KG: f64 = 1.66053906660e-27;

/// Electron mass (kg)
pub const M_ELECTRON: f64 = 9.1093837015e-31;

/// Mass equivalent of one hertz, h/c² (kg s)
pub const HZ_KG: f64 = H_PLANCK / (C_LIGHT * C_LIGHT);

/// Frequency equivalent of one kelvin, k/h (Hz/K)
pub const K_HZ: f64 = K_BOLTZMANN / H_PLANCK;

/// Tabulated Planck units (s, m, kg, K)
pub const PLANCK_TIME: f64 = 5.391247e-44;
pub const PLANCK_LENGTH: f64 = 1.616255e-35;
pub const PLANCK_MASS: f64 = 2.176434e-8;
pub const PLANCK_TEMPERATURE: f64 = 1.416784e32;

/// Julian year (s)
pub const SECONDS_PER_YEAR: f64 = 31557600.0;

/// Parsec (m)
pub const METERS_PER_PARSEC: f64 = 3.08567758149e16;

/// Nominal solar mass (kg)
pub const KG_PER_SOLAR_MASS: f64 = 1.98847e30;

/// International foot (m)
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Avoirdupois pound (kg)
pub const KG_PER_POUND: f64 = 0.45359237;

/// Rankine degrees per kelvin
pub const RANKINE_PER_KELVIN: f64 = 1.8;
