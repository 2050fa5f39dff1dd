use serde::{Deserialize, Serialize};

use crate::geom::{EulerRot, Point3d};

/// Visual sub-type of a simulated internal flaw.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(tag = "type")]
pub enum InclusionKind {
    Pinpoint,
    Feather,
    Cloud,
    Crystal,
    Needle,
    Carbon,
}

impl InclusionKind {
    /// The non-carbon kinds, in draw order for the generator.
    pub const LIGHT_KINDS: [InclusionKind; 5] = [
        InclusionKind::Pinpoint,
        InclusionKind::Feather,
        InclusionKind::Cloud,
        InclusionKind::Crystal,
        InclusionKind::Needle,
    ];

    /// Diffuse kinds scatter light and render with a rougher surface than
    /// the sharp crystalline kinds.
    pub fn is_diffuse(&self) -> bool {
        matches!(self, InclusionKind::Cloud | InclusionKind::Feather)
    }
}

/// One generated internal flaw. Created fresh per `(grade, seed)` pair,
/// never mutated afterwards; owned solely by the caller that requested it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Inclusion {
    pub kind: InclusionKind,
    /// Position inside the stone, girdle-radius units, y-up.
    pub position: Point3d,
    /// Characteristic size in girdle-radius units.
    pub size: f64,
    pub rotation: EulerRot,
    /// Render opacity in [0, 1].
    pub opacity: f64,
    /// Dark carbon spot; mirrors `kind == Carbon` for cheap filtering.
    pub carbon: bool,
}
