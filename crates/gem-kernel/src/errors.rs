/// Errors from mesh construction.
///
/// Degenerate-but-finite proportions are clamped, not rejected; the only
/// construction failure is a non-finite input, which is a caller bug and is
/// surfaced instead of silently building a broken mesh.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("non-finite value for {param}: {value}")]
    NonFinite { param: &'static str, value: f64 },
}
