//! Geometry kernel for the diamond visualization engine.
//!
//! Builds the fixed-topology round-brilliant mesh from proportion
//! parameters and audits mesh soundness (watertightness, winding, index
//! validity). Everything is pure and synchronous; the scene adapter
//! consumes the plain mesh data.

pub mod brilliant;
pub mod errors;
pub mod mesh;
pub mod validation;

pub use brilliant::{build_brilliant, BRILLIANT_FACE_COUNT, BRILLIANT_VERTEX_COUNT};
pub use errors::GeometryError;
pub use mesh::GemMesh;
pub use validation::{audit_mesh, MeshReport};
