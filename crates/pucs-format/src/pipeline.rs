// ─────────────────────────────────────────────────────────────────────
// PUCS Natural Units — Generation Pipeline
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Registry + unit system → rendered file.
//!
//! Generation is all-or-nothing: the text is rendered completely in memory
//! before anything touches the filesystem, and the target is replaced by a
//! rename so readers never see a partial file.

use crate::render::OutputFormatter;
use pucs_core::codata::codata_2018;
use pucs_core::engine::RescalingEngine;
use pucs_core::presets::UnitSystemPreset;
use pucs_core::registry::ConstantRegistry;
use pucs_core::unit_system::UnitSystemDefinition;
use pucs_types::config::{GenerationConfig, OutputConfig, UnitSystemSource};
use pucs_types::error::PucsResult;
use std::path::{Path, PathBuf};

/// Rescale `registry` into `system` and render it.
pub fn generate(
    registry: &ConstantRegistry,
    system: &UnitSystemDefinition,
    options: &OutputConfig,
) -> PucsResult<String> {
    let rescaled = RescalingEngine::new(system).rescale(registry)?;
    let text = OutputFormatter::new(options.clone()).render(system, &rescaled);
    tracing::debug!(
        system = system.name(),
        format = ?options.format,
        bytes = text.len(),
        "rendered constants"
    );
    Ok(text)
}

/// The registry named by `config`, or the built-in table.
pub fn resolve_registry(config: &GenerationConfig, base_dir: &Path) -> PucsResult<ConstantRegistry> {
    match &config.constants {
        Some(path) => {
            let full = base_dir.join(path);
            ConstantRegistry::from_file(&full.to_string_lossy())
        }
        None => codata_2018(),
    }
}

pub fn resolve_system(
    source: &UnitSystemSource,
    registry: &ConstantRegistry,
) -> PucsResult<UnitSystemDefinition> {
    match source {
        UnitSystemSource::Preset { preset } => preset.parse::<UnitSystemPreset>()?.build(registry),
        UnitSystemSource::Custom(custom) => UnitSystemDefinition::from_config(custom, registry),
    }
}

/// Run a generation config. Relative paths resolve against `base_dir`.
pub fn run(config: &GenerationConfig, base_dir: &Path) -> PucsResult<String> {
    let registry = resolve_registry(config, base_dir)?;
    let system = resolve_system(&config.unit_system, &registry)?;
    tracing::info!(
        system = system.name(),
        constants = registry.len(),
        format = ?config.output.format,
        "generating constants file"
    );
    let text = generate(&registry, &system, &config.output)?;
    tracing::info!(system = system.name(), bytes = text.len(), "generation complete");
    Ok(text)
}

/// Load a generation config from disk and run it relative to its own
/// directory.
pub fn run_file(path: &str) -> PucsResult<String> {
    let config = GenerationConfig::from_file(path)?;
    let base_dir = Path::new(path)
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    run(&config, &base_dir)
}

/// Generate and write to `path`. Nothing is written when any constant
/// fails to rescale, and the staging file is removed when writing or
/// renaming it fails.
pub fn write_generated(
    path: &Path,
    registry: &ConstantRegistry,
    system: &UnitSystemDefinition,
    options: &OutputConfig,
) -> PucsResult<()> {
    let text = generate(registry, system, options)?;
    let mut staging = path.as_os_str().to_owned();
    staging.push(".partial");
    let staging = PathBuf::from(staging);
    let written = std::fs::write(&staging, text).and_then(|()| std::fs::rename(&staging, path));
    if let Err(e) = written {
        let _ = std::fs::remove_file(&staging);
        return Err(e.into());
    }
    tracing::info!(path = %path.display(), "wrote constants file");
    Ok(())
}
