// ─────────────────────────────────────────────────────────────────────
// PUCS Natural Units — Dimensional Formulas
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use pucs_core::unit_system::UnitSystemDefinition;
use pucs_types::config::FormulaStyle;
use pucs_types::dimension::{format_exponent, DimensionVector, Exponent};

/// Render `dims` with the natural-unit symbols of `system`, e.g.
/// `kg_n m_n^2 s_n^-1`. Exponent 1 is omitted; a dimensionless vector
/// renders as the empty string.
pub fn render_formula(
    dims: &DimensionVector,
    system: &UnitSystemDefinition,
    style: FormulaStyle,
) -> String {
    dims.iter()
        .map(|(dim, exp)| {
            let symbol = system.natural_symbol(dim);
            if *exp == Exponent::from_integer(1) {
                symbol.to_string()
            } else {
                format!("{symbol}{}", render_exponent(exp, style))
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_exponent(exp: &Exponent, style: FormulaStyle) -> String {
    let text = format_exponent(exp);
    match style {
        FormulaStyle::Caret => format!("^{text}"),
        FormulaStyle::Superscript => text.chars().map(superscript).collect(),
    }
}

fn superscript(c: char) -> char {
    match c {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '-' => '⁻',
        '/' => 'ᐟ',
        other => other,
    }
}
