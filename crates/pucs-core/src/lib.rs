// ─────────────────────────────────────────────────────────────────────
// PUCS Natural Units — Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Constant registry, unit systems and the dimensional rescaling engine.

pub mod codata;
pub mod composite;
pub mod engine;
pub mod presets;
pub mod registry;
pub mod unit_system;
