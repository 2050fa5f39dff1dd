//! Generator suite for the diamond visualization engine.
//!
//! Pure, deterministic functions shared by every diamond-education module
//! (color, clarity, cut, fluorescence, grading quiz) and the catalog
//! preview:
//!
//! - [`seeded_unit`] — stateless seeded pseudo-random source
//! - [`interpolate_color_grade`] — color-grade position to tint
//! - [`generate_inclusions`] — clarity grade + seed to inclusion set
//! - [`derive_material_params`] / [`derive_inclusion_material`] — optical
//!   parameter derivation
//! - [`PreviewEngine`] — memoizing façade over all of the above
//!
//! Determinism is the primary contract: for the same inputs, every function
//! returns identical output across calls, runs, and platforms (to the
//! extent IEEE-754 `sin` allows).

pub mod color;
pub mod errors;
pub mod inclusions;
pub mod material;
pub mod preview;
pub mod rand;

pub use color::interpolate_color_grade;
pub use errors::GemError;
pub use inclusions::{defect_area, generate_inclusions};
pub use material::{derive_inclusion_material, derive_material_params};
pub use preview::PreviewEngine;
pub use rand::{seeded_unit, sub_seed};

pub use gem_kernel::{audit_mesh, build_brilliant, GemMesh, MeshReport};
pub use gem_types::{
    ClarityGrade, ClarityProfile, ClarityTable, ColorAnchor, ColorGrade, ColorTable, DisplayMode,
    Inclusion, InclusionKind, InclusionMaterial, MaterialParams, ProportionSpec, Tint,
};
