// ─────────────────────────────────────────────────────────────────────
// PUCS Natural Units — Output Formats
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Rendering of rescaled constants and the end-to-end generation pipeline.

pub mod formula;
pub mod numeric;
pub mod pipeline;
pub mod render;
