//! Memoizing façade over the generator functions.
//!
//! The education panels re-request the same `(grade, seed, spec, mode)`
//! tuples constantly while the user drags sliders. The free functions are
//! pure, so caching is keyed on bit-exact inputs (`f64::to_bits`) with no
//! invalidation concerns. Caches are capacity-capped: on overflow the map
//! is cleared and rebuilt, which is cheap because every entry regenerates
//! on demand.

use std::collections::HashMap;

use gem_types::{
    ClarityGrade, ClarityTable, ColorTable, DisplayMode, Inclusion, MaterialParams,
    ProportionSpec, TableError, Tint,
};

use gem_kernel::{build_brilliant, GemMesh};

use crate::color::interpolate_color_grade;
use crate::errors::GemError;
use crate::inclusions::generate_inclusions;
use crate::material::derive_material_params;

/// Entries per cache map before it is cleared.
const DEFAULT_CACHE_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct MeshKey([u64; 5]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct MaterialKey {
    tint: [u64; 4],
    visibility: u64,
    mode: DisplayMode,
    fluorescence: Option<u64>,
}

/// Memoized preview engine owning the grade tables.
///
/// A plain owned value: callers that share one across panels bring their
/// own synchronization. The free generator functions remain independently
/// callable; this type only adds caching and table ownership.
pub struct PreviewEngine {
    color_table: ColorTable,
    clarity_table: ClarityTable,
    capacity: usize,
    meshes: HashMap<MeshKey, GemMesh>,
    tints: HashMap<u64, Tint>,
    inclusion_sets: HashMap<(ClarityGrade, u64), Vec<Inclusion>>,
    materials: HashMap<MaterialKey, MaterialParams>,
    hits: u64,
    misses: u64,
}

impl PreviewEngine {
    /// Create an engine over validated tables.
    pub fn new(color_table: ColorTable, clarity_table: ClarityTable) -> Result<Self, TableError> {
        color_table.validate()?;
        clarity_table.validate()?;
        Ok(Self {
            color_table,
            clarity_table,
            capacity: DEFAULT_CACHE_CAPACITY,
            meshes: HashMap::new(),
            tints: HashMap::new(),
            inclusion_sets: HashMap::new(),
            materials: HashMap::new(),
            hits: 0,
            misses: 0,
        })
    }

    /// Engine over the standard D..Z and FL..I3 tables.
    pub fn with_standard_tables() -> Self {
        // Standard tables are validated by test, not at runtime.
        Self {
            color_table: ColorTable::standard(),
            clarity_table: ClarityTable::standard(),
            capacity: DEFAULT_CACHE_CAPACITY,
            meshes: HashMap::new(),
            tints: HashMap::new(),
            inclusion_sets: HashMap::new(),
            materials: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn color_table(&self) -> &ColorTable {
        &self.color_table
    }

    pub fn clarity_table(&self) -> &ClarityTable {
        &self.clarity_table
    }

    /// Memoized [`build_brilliant`].
    pub fn mesh(&mut self, spec: &ProportionSpec) -> Result<GemMesh, GemError> {
        let key = MeshKey([
            spec.table_ratio.to_bits(),
            spec.crown_height.to_bits(),
            spec.girdle_radius.to_bits(),
            spec.pavilion_depth.to_bits(),
            spec.culet_size.to_bits(),
        ]);
        if let Some(mesh) = self.meshes.get(&key) {
            self.hits += 1;
            return Ok(mesh.clone());
        }
        let mesh = build_brilliant(spec)?;
        self.misses += 1;
        if self.meshes.len() >= self.capacity {
            self.meshes.clear();
        }
        self.meshes.insert(key, mesh.clone());
        Ok(mesh)
    }

    /// Memoized [`interpolate_color_grade`] against the owned table.
    pub fn tint(&mut self, position: f64) -> Result<Tint, GemError> {
        if !position.is_finite() {
            return Err(GemError::InvalidNumericInput {
                param: "position",
                value: position,
            });
        }
        let key = position.to_bits();
        if let Some(tint) = self.tints.get(&key) {
            self.hits += 1;
            return Ok(*tint);
        }
        let tint = interpolate_color_grade(position, &self.color_table)?;
        self.misses += 1;
        if self.tints.len() >= self.capacity {
            self.tints.clear();
        }
        self.tints.insert(key, tint);
        Ok(tint)
    }

    /// Memoized [`generate_inclusions`] against the owned table.
    pub fn inclusions(
        &mut self,
        grade: ClarityGrade,
        seed: f64,
    ) -> Result<Vec<Inclusion>, GemError> {
        if !seed.is_finite() {
            return Err(GemError::InvalidNumericInput {
                param: "seed",
                value: seed,
            });
        }
        let key = (grade, seed.to_bits());
        if let Some(set) = self.inclusion_sets.get(&key) {
            self.hits += 1;
            return Ok(set.clone());
        }
        let set = generate_inclusions(grade, seed, &self.clarity_table)?;
        self.misses += 1;
        if self.inclusion_sets.len() >= self.capacity {
            self.inclusion_sets.clear();
        }
        self.inclusion_sets.insert(key, set.clone());
        Ok(set)
    }

    /// Memoized [`derive_material_params`].
    pub fn material(
        &mut self,
        tint: &Tint,
        visibility: f64,
        mode: DisplayMode,
        fluorescence: Option<f64>,
    ) -> Result<MaterialParams, GemError> {
        let key = MaterialKey {
            tint: [
                tint.hue.to_bits(),
                tint.saturation.to_bits(),
                tint.lightness.to_bits(),
                tint.warmth.to_bits(),
            ],
            visibility: visibility.to_bits(),
            mode,
            fluorescence: fluorescence.map(f64::to_bits),
        };
        if let Some(params) = self.materials.get(&key) {
            self.hits += 1;
            return Ok(*params);
        }
        let params = derive_material_params(tint, visibility, mode, fluorescence)?;
        self.misses += 1;
        if self.materials.len() >= self.capacity {
            self.materials.clear();
        }
        self.materials.insert(key, params);
        Ok(params)
    }

    /// Total cache hits across all four maps.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Total cache misses (i.e. fresh computations).
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Total cached entries across all four maps.
    pub fn len(&self) -> usize {
        self.meshes.len() + self.tints.len() + self.inclusion_sets.len() + self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all cached entries; counters are kept.
    pub fn clear(&mut self) {
        self.meshes.clear();
        self.tints.clear();
        self.inclusion_sets.clear();
        self.materials.clear();
    }
}
