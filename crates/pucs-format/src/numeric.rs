// ─────────────────────────────────────────────────────────────────────
// PUCS Natural Units — Numeric Literals
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Number formatting for generated files.
//!
//! Values use the shortest string that round-trips to the same `f64`
//! (up to 17 significant digits). Plain notation is used for magnitudes in
//! `[1e-4, 1e16)`, scientific notation otherwise, with a signed exponent of
//! at least two digits: `1.0`, `0.0011614097322526476`, `5.391247e-44`,
//! `1.356392489652132e+50`.

/// Shortest round-trip literal of `v`.
pub fn format_value(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    normalize_exponent(&format!("{v:?}"))
}

/// Scale factor with 20 digits after the decimal point, as listed in the
/// preamble of generated files: `2.99792458000000000000e+08`.
pub fn format_scale(v: f64) -> String {
    if !v.is_finite() {
        return format_value(v);
    }
    normalize_exponent(&format!("{v:.20e}"))
}

/// `1e20` → `1e+20`, `1e-5` → `1e-05`. Text without an exponent is
/// returned unchanged.
fn normalize_exponent(text: &str) -> String {
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text.to_string();
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(d) => ('-', d),
        None => ('+', exponent.trim_start_matches('+')),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}
