/// Crate-wide `Result` carrying an `anyhow::Error`.
///
/// Domain failures are `DepsError` values converted with `?`/`.into()`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
