/// Crate-wide Result alias. Layers return `anyhow::Error` so adapters can
/// attach context while `SnapError` values stay downcastable for callers.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
