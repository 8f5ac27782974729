// ─────────────────────────────────────────────────────────────────────
// PUCS Natural Units — Output Formatter
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Rendering of rescaled constants.
//!
//! One line per constant, in the order given. Display symbols are never
//! deduplicated: two constants shown as `A` produce two `A` lines.

use crate::formula::render_formula;
use crate::numeric::{format_scale, format_value};
use pucs_core::unit_system::UnitSystemDefinition;
use pucs_types::config::{OutputConfig, OutputFormat};
use pucs_types::constant::RescaledConstant;
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Default)]
pub struct OutputFormatter {
    pub options: OutputConfig,
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    value: f64,
    units: &'a str,
}

impl OutputFormatter {
    pub fn new(options: OutputConfig) -> Self {
        OutputFormatter { options }
    }

    /// Render the complete file for `constants` rescaled into `system`.
    pub fn render(&self, system: &UnitSystemDefinition, constants: &[RescaledConstant]) -> String {
        match self.options.format {
            OutputFormat::CHeader => self.render_c_header(system, constants),
            OutputFormat::Python => self.render_python(system, constants),
            OutputFormat::Json => self.render_json(system, constants),
            OutputFormat::Xml => self.render_xml(system, constants),
            OutputFormat::Text => self.render_text(system, constants),
        }
    }

    fn name(&self, constant: &RescaledConstant) -> String {
        format!("{}{}", constant.symbol, self.options.symbol_suffix)
    }

    fn formula(&self, system: &UnitSystemDefinition, constant: &RescaledConstant) -> String {
        render_formula(&constant.dimensions, system, self.options.formula_style)
    }

    /// `s          -> 1.00000000000000000000e+00 -> s_n       `
    fn scale_lines(system: &UnitSystemDefinition) -> Vec<String> {
        system
            .entries()
            .iter()
            .map(|(dim, entry)| {
                format!(
                    "{:<10} -> {} -> {:<10}",
                    dim.symbol(),
                    format_scale(entry.factor),
                    entry.natural_symbol
                )
            })
            .collect()
    }

    fn render_c_header(&self, system: &UnitSystemDefinition, constants: &[RescaledConstant]) -> String {
        let guard = &self.options.header_guard;
        let mut out = String::new();
        let _ = writeln!(out, "/* Physical constants in the '{}' unit system */", system.name());
        let _ = writeln!(out, "#ifndef {guard}");
        let _ = writeln!(out, "#define {guard}");
        out.push('\n');
        out.push_str("/*   --- Scaling Factors Used ---\n");
        for line in Self::scale_lines(system) {
            let _ = writeln!(out, "{line}");
        }
        out.push_str("*/\n\n\n");
        for c in constants {
            let _ = writeln!(
                out,
                "#define {:<18} {:>21} /* {:<30} {} */",
                self.name(c),
                format_value(c.natural_value),
                c.description,
                self.formula(system, c)
            );
        }
        let _ = writeln!(out, "\n#endif /* {guard} */");
        out
    }

    fn render_python(&self, system: &UnitSystemDefinition, constants: &[RescaledConstant]) -> String {
        let mut out = String::new();
        out.push_str("\n#   --- Output from Physics Unit Coordinate System ---\n");
        out.push_str("\n#   --- Scaling Factors Used ---\n");
        for line in Self::scale_lines(system) {
            let _ = writeln!(out, "# {line}");
        }
        out.push_str("\n\n");
        let mut names = Vec::with_capacity(constants.len());
        for c in constants {
            let name = self.name(c);
            let line = format!(
                "{:<8} = {:<24} # {:<30} {}",
                name,
                format_value(c.natural_value),
                c.description,
                self.formula(system, c)
            );
            let _ = writeln!(out, "{}", line.trim_end());
            names.push(name);
        }
        out.push_str("\n# Import all constants:\n");
        let _ = writeln!(out, "# from your_module import {}", names.join(", "));
        out
    }

    /// A JSON object keyed by display symbol. Repeated symbols stay repeated
    /// keys in registry order, so the object is streamed entry by entry
    /// rather than collected into a map.
    fn render_json(&self, system: &UnitSystemDefinition, constants: &[RescaledConstant]) -> String {
        let entries: Vec<String> = constants
            .iter()
            .map(|c| {
                let units = self.formula(system, c);
                let entry = JsonEntry {
                    value: c.natural_value,
                    units: &units,
                };
                format!(
                    "  {}: {}",
                    json_string(&self.name(c)),
                    serde_json::to_string(&entry).unwrap_or_else(|_| "null".to_string())
                )
            })
            .collect();
        if entries.is_empty() {
            return "{}\n".to_string();
        }
        format!("{{\n{}\n}}\n", entries.join(",\n"))
    }

    fn render_xml(&self, system: &UnitSystemDefinition, constants: &[RescaledConstant]) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        let _ = writeln!(out, "<constants system=\"{}\">", xml_escape(system.name()));
        for c in constants {
            let _ = writeln!(
                out,
                "  <constant name=\"{}\" symbol=\"{}\" value=\"{}\" units=\"{}\"/>",
                xml_escape(c.id.as_str()),
                xml_escape(&self.name(c)),
                format_value(c.natural_value),
                xml_escape(&self.formula(system, c))
            );
        }
        out.push_str("</constants>\n");
        out
    }

    fn render_text(&self, system: &UnitSystemDefinition, constants: &[RescaledConstant]) -> String {
        let mut out = String::new();
        for c in constants {
            let line = format!(
                "{} {} {}",
                self.name(c),
                format_value(c.natural_value),
                self.formula(system, c)
            );
            let _ = writeln!(out, "{}", line.trim_end());
        }
        out
    }
}

fn json_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{s}\""))
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}
