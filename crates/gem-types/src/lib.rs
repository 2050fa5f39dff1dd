//! Shared data types for the diamond visualization engine.
//!
//! Everything here is a plain value type: geometry primitives, proportion
//! parameters, grade scales, grade tables (explicit configuration, not
//! hidden globals), inclusion descriptors, and derived optical parameters.
//! All types serialize with serde so the frontend can supply custom tables.

pub mod geom;
pub mod grades;
pub mod inclusion;
pub mod material;
pub mod proportions;
pub mod tables;

pub use geom::{EulerRot, Point3d, Rgb, Vec3};
pub use grades::{ClarityGrade, ColorGrade, UnknownGradeError};
pub use inclusion::{Inclusion, InclusionKind};
pub use material::{DisplayMode, InclusionMaterial, MaterialParams, Tint};
pub use proportions::ProportionSpec;
pub use tables::{ClarityProfile, ClarityTable, ColorAnchor, ColorTable, TableError};
