// ─────────────────────────────────────────────────────────────────────
// PUCS Natural Units — CODATA Table
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Built-in constant table (CODATA 2018 values plus a few particle masses,
//! unit-system scales and material properties).
//!
//! Units are written as formulas and expanded through the SI derived-unit
//! table, so Planck's constant can be listed in `J s`. The description
//! column is the long-form name printed in generated comments.

use crate::composite::CompositeUnitTable;
use crate::registry::ConstantRegistry;
use pucs_types::constant::PhysicalConstant;
use pucs_types::error::PucsResult;

/// (id, display symbol, SI value, unit formula, description)
type Row = (&'static str, &'static str, f64, &'static str, &'static str);

const CORE_SCALING: &[Row] = &[
    ("speed_of_light_c", "c", 299792458.0, "m s^-1", "speed_of_light_c"),
    ("planck_constant_h", "h", 6.62607015e-34, "J s", "planck_constant_h"),
    ("hz_kg", "Hz_kg", 7.37249732381e-51, "kg Hz^-1", "Hz_kg"),
    ("boltzmann_constant_k", "k", 1.380649e-23, "kg m^2 s^-2 K^-1", "boltzmann_constant_k"),
    ("k_hz", "K_Hz", 20836619123.33, "Hz K^-1", "K_Hz"),
    ("molar_gas_constant_r", "R", 8.314462618, "kg m^2 s^-2 mol^-1 K^-1", "molar_gas_constant_R"),
    ("klitzing_constant_rk", "R_K", 25812.80745, "kg m^2 s^-1 C^-2", "klitzing_constant_Rk"),
    ("magnetic_flux_quantum_phi0", "Φ₀", 2.067833848e-15, "kg m^2 s^-1 C^-1", "magnetic_flux_quantum_Phi0"),
    ("faraday_constant_f", "F", 96485.33212, "mol^-1 C", "faraday_constant_F"),
    ("josephson_constant_kj", "K_J", 483597848400000.0, "kg^-1 m^-2 s C", "josephson_constant_KJ"),
    ("conductance_quantum_g0", "G₀", 7.748091729e-05, "kg^-1 m^-2 s C^2", "conductance_quantum_G0"),
    ("first_radiation_constant", "c_1", 3.741771852e-16, "kg m^4 s^-3 pi", "first radiation constant"),
    ("first_radiation_constant_sr", "c_1L", 1.191042972e-16, "kg m^4 s^-3", "first radiation constant sr"),
    ("second_radiation_constant_c2", "c_2", 0.014387768776, "m K", "second_radiation_constant_c2"),
];

const UNITS_OF_MEASURE: &[Row] = &[
    ("unit_kg", "1 kg", 1.0, "kg", "1 kg"),
    ("unit_meter", "1 m", 1.0, "m", "1 meter"),
    ("unit_second", "1 s", 1.0, "s", "1 second"),
    ("unit_hertz", "Hz", 1.0, "s^-1", "1 Hz"),
    ("amp_force", "A", 1.0e-07, "kg m s^-2 A^-2", "Amp force"),
    ("amp_force_scaled_in_alpha", "A", 1.0e-07, "kg m s^-2 A_old^-2", "Amp force scaled in alpha"),
    ("unit_newton", "N", 1.0, "N", "1 N"),
    ("unit_joule", "J", 1.0, "J", "1 J"),
    ("elementary_charge_e", "e", 1.602176634e-19, "C", "elementary_charge_e"),
    ("avogadro_constant_na", "Na", 6.02214076e+23, "mol^-1", "avogadro_constant_Na"),
];

const MASSES: &[Row] = &[
    ("electron_mass_me", "me", 9.1093837015e-31, "kg", "electron_mass_me"),
    ("pion_charged_mass_pi_pm", "m_{π^±}", 2.4880679e-28, "kg", "pion_charged_mass_pi_pm"),
    ("pion_neutral_mass_pi0", "m_{π^0}", 2.4061802e-28, "kg", "pion_neutral_mass_pi0"),
    ("muon_mass_mu", "m_μ", 1.883531627e-28, "kg", "muon_mass_mu"),
    ("tau_mass_tau", "m_τ", 3.16747e-27, "kg", "tau_mass_tau"),
    ("lambda_baryon_mass_lambda0", "m_{Λ^0}", 1.98838e-27, "kg", "lambda_baryon_mass_Lambda0"),
    ("proton_mass_mp", "mp", 1.67262192369e-27, "kg", "proton_mass_mp"),
    ("neutron_mass_mn", "mn", 1.67492749804e-27, "kg", "neutron_mass_mn"),
    ("atomic_mass_unit_u", "u", 1.6605390666e-27, "kg", "atomic_mass_unit_u"),
    ("higgs_boson_mass_h", "m_H", 2.23204e-25, "kg", "Higgs_boson_mass_H"),
    ("z_boson_mass_z", "m_Z", 1.62557e-25, "kg", "Z_boson_mass_Z"),
    ("w_boson_mass_w", "m_W", 1.43269e-25, "kg", "W_boson_mass_W"),
];

const PLANCK_UNITS: &[Row] = &[
    ("planck_length_lp", "l_P", 1.616255e-35, "m", "planck_length_lP"),
    ("planck_time", "t_P", 5.391247e-44, "s", "planck_time"),
    ("planck_mass", "m_P", 2.176434e-08, "kg", "planck_mass"),
    ("planck_temperature", "T_P", 1.416784e+32, "K", "planck_temperature"),
];

const STONEY_UNITS: &[Row] = &[
    ("stoney_length_ls", "l_S", 1.38e-33, "m", "stoney_length_lS"),
    ("stoney_time_ts", "t_S", 4.6e-43, "s", "stoney_time_tS"),
    ("stoney_mass_ms", "m_S", 1.85e-09, "kg", "stoney_mass_mS"),
    ("stoney_temperature_ts", "T_S", 1.44e+32, "K", "stoney_temperature_TS"),
];

const OTHER_NATURAL: &[Row] = &[
    ("electronvolts_to_energy_eev", "eV", 1.602176634e-19, "A s", "electronvolts_to_energy_EeV"),
    ("natural_length_ln", "l_n", 2.8179403262e-15, "m", "natural_length_ln"),
    ("natural_time_tn", "t_n", 9.3132257462e-24, "s", "natural_time_tn"),
];

const ELECTROMAGNETIC_ATOMIC: &[Row] = &[
    ("gravitational_g_newtons", "G_newton", 6.6743e-11, "m kg s^-2", "gravitational_G_Newtons"),
    ("gravitational_constant_g", "G", 6.6743e-11, "m^3 kg^-1 s^-2", "gravitational_constant_G"),
    ("coulombs_constant_k_e", "k_e", 8987551787.0, "kg m^3 s^-2 C^-2", "coulombs_constant_k_e"),
    ("vacuum_permittivity_epsilon0", "ε₀", 8.8541878128e-12, "C^2 kg^-1 m^-3 s^2", "vacuum_permittivity_epsilon0"),
    ("vacuum_permeability_mu0", "μ₀", 1.25663706212e-06, "kg m s^-2 C^-2", "vacuum_permeability_mu0"),
    ("character_impedance_vacuum", "Z_0", 376.730313412, "kg m^2 s^-1 C^-2", "character impedance vacuum"),
    ("atomic_unit_of_permittivity", "[ε₀]_au", 1.112650056e-10, "m^-3 kg^-1 s^-4 C^-2", "atomic unit of permittivity"),
    ("hartree_energy_eh", "E_h", 4.359744722071e-18, "kg m^2 s^-2", "hartree_energy_Eh"),
    ("bohr_magneton_mub", "μ_B", 9.2740100783e-24, "m^2 s^-1 C", "bohr_magneton_muB"),
    ("nuclear_magneton_mun", "μ_N", 5.0507837461e-27, "m^2 s^-1 C", "nuclear_magneton_muN"),
];

const WAVELENGTHS: &[Row] = &[
    ("electron_compton_wavelength", "λ_e_C", 2.42631023867e-12, "m", "electron_compton_wavelength"),
    ("neutron_compton_wavelength", "λ_n_C", 1.31959090581e-15, "m", "neutron Compton wavelength"),
    ("wien_wl_d_law", "b", 0.002897771955, "m K", "Wien wl d law"),
    ("rydberg_infinite", "R_inf", 10973731.56816, "m^-1", "rydberg infinite"),
    ("electron_radius_re", "r_e", 2.8179403262e-15, "m", "electron_radius_re"),
    ("bohr_radius_a0", "a₀", 5.29177210903e-11, "m", "bohr_radius_a0"),
    ("angstrom_star", "Å_star", 1.00001495e-10, "m", "Angstrom star"),
];

const THERMODYNAMIC: &[Row] = &[
    ("stefan_boltzmann_constant_sigma", "σ", 5.670374419e-08, "kg s^-3 K^-4", "stefan_boltzmann_constant_sigma"),
    ("standard_gravity_g0", "g₀", 9.80665, "m s^-2", "standard_gravity_g0"),
    ("quantum_of_circulation", "κ", 0.00036369475467, "m^2 s^-1", "quantum of circulation"),
    ("cosmological_constant_lambda", "Λ", 1.0908e-52, "m^-2", "cosmological_constant_Lambda"),
];

const MATERIALS: &[Row] = &[
    ("youngs_modulus_steel", "E", 200000000000.0, "kg m^-1 s^-2", "youngs_modulus_steel"),
    ("thermal_conductivity_copper", "k", 401.0, "kg m s^-3 K^-1", "thermal_conductivity_copper"),
    ("resistivity_silicon", "ρ", 2300.0, "kg m^3 s^-3 A^-2", "resistivity_silicon"),
    ("fracture_toughness_alumina", "K_IC", 3.5, "kg m^-1/2 s^-2", "fracture_toughness_alumina"),
    ("curie_temperature_iron", "T_C", 1043.0, "K", "curie_temperature_iron"),
    ("surface_tension_water", "γ", 0.0728, "kg s^-2", "surface_tension_water"),
    ("mobility_silicon", "μ_n", 0.15, "kg^-1 s^4 A", "mobility_silicon"),
    ("compressibility_diamond", "β", 2.0e-12, "kg^-1 m s^2", "compressibility_diamond"),
    ("reflectivity_aluminum", "R", 0.92, "", "reflectivity_aluminum"),
    ("piezoelectric_coefficient_quartz", "d_11", 2.3e-12, "kg^-1 m^-1 s^3 A", "piezoelectric_coefficient_quartz"),
    ("thermal_expansion_invar", "α", 1.2e-06, "K^-1", "thermal_expansion_invar"),
];

const GROUPS: &[(&str, &[Row])] = &[
    ("Core Scaling Constants", CORE_SCALING),
    ("Units of Measure", UNITS_OF_MEASURE),
    ("Masses", MASSES),
    ("Planck Units", PLANCK_UNITS),
    ("Stoney Units", STONEY_UNITS),
    ("Other Natural Unit Systems", OTHER_NATURAL),
    ("Electromagnetic & Atomic", ELECTROMAGNETIC_ATOMIC),
    ("Wavelengths & Diameters", WAVELENGTHS),
    ("Thermodynamic & Other", THERMODYNAMIC),
    ("Material Properties", MATERIALS),
];

/// Build the full built-in registry, in table order.
pub fn codata_2018() -> PucsResult<ConstantRegistry> {
    let units = CompositeUnitTable::si_derived();
    let mut registry = ConstantRegistry::new();
    for (group, rows) in GROUPS {
        for &(id, symbol, value, formula, description) in rows.iter() {
            let dimensions = units.resolve_formula(formula)?;
            let constant = PhysicalConstant::new(id, symbol, value, dimensions, description)?
                .with_group(*group);
            registry.push(constant)?;
        }
    }
    tracing::debug!(constants = registry.len(), "built CODATA 2018 registry");
    Ok(registry)
}

/// Group names of the built-in table, in order.
pub fn group_names() -> impl Iterator<Item = &'static str> {
    GROUPS.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pucs_types::dimension::{BaseDimension, DimensionVector, Exponent};

    #[test]
    fn test_table_builds() {
        let reg = codata_2018().unwrap();
        assert_eq!(reg.len(), 79);
        assert_eq!(group_names().count(), 10);
        assert_eq!(reg.iter().next().unwrap().id().as_str(), "speed_of_light_c");
    }

    #[test]
    fn test_planck_constant_expanded() {
        let reg = codata_2018().unwrap();
        let h = reg.require("planck_constant_h").unwrap();
        assert_eq!(
            h.dimensions(),
            &DimensionVector::from_integers(&[("kg", 1), ("m", 2), ("s", -1)])
        );
    }

    #[test]
    fn test_repeated_symbols_kept() {
        let reg = codata_2018().unwrap();
        assert_eq!(reg.by_symbol("A").count(), 2);
        assert_eq!(reg.by_symbol("k").count(), 2);
        assert_eq!(reg.by_symbol("R").count(), 2);
        let alpha = reg.require("amp_force_scaled_in_alpha").unwrap();
        assert_eq!(
            alpha
                .dimensions()
                .exponent(&BaseDimension::Custom("A_old".into())),
            Exponent::from_integer(-2)
        );
    }

    #[test]
    fn test_half_integer_exponent() {
        let reg = codata_2018().unwrap();
        let k_ic = reg.require("fracture_toughness_alumina").unwrap();
        assert_eq!(
            k_ic.dimensions().exponent(&BaseDimension::Length),
            Exponent::new(-1, 2)
        );
    }

    #[test]
    fn test_dimensionless_entry() {
        let reg = codata_2018().unwrap();
        assert!(reg
            .require("reflectivity_aluminum")
            .unwrap()
            .dimensions()
            .is_dimensionless());
    }

    #[test]
    fn test_frequency_kept_as_base_dimension() {
        let reg = codata_2018().unwrap();
        let hz_kg = reg.require("hz_kg").unwrap();
        assert_eq!(
            hz_kg.dimensions().exponent(&BaseDimension::Frequency),
            Exponent::from_integer(-1)
        );
        assert_eq!(
            reg.require("unit_joule").unwrap().dimensions(),
            &DimensionVector::from_integers(&[("kg", 1), ("m", 2), ("s", -2)])
        );
    }
}
